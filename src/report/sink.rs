// Plot sinks - concrete reporting collaborators
//
// JsonPlotSink persists each plot description as `<dir>/<destination>.json`.
// MemoryPlotSink keeps submissions in memory for tests and dry runs.

use std::fs;
use std::path::{Path, PathBuf};

use super::{Plot, PlotSink};
use crate::error::PipelineError;

/// Writes plot descriptions as pretty-printed JSON artifacts
pub struct JsonPlotSink {
    output_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl JsonPlotSink {
    pub fn new<P: Into<PathBuf>>(output_dir: P) -> Self {
        Self {
            output_dir: output_dir.into(),
            written: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Paths written so far, in submission order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    fn artifact_path(&self, destination: &str) -> Result<PathBuf, PipelineError> {
        if destination.is_empty()
            || destination.contains(['/', '\\'])
            || destination == "."
            || destination == ".."
        {
            return Err(PipelineError::Report {
                reason: format!("invalid artifact name '{}'", destination),
            });
        }
        Ok(self.output_dir.join(format!("{}.json", destination)))
    }
}

impl PlotSink for JsonPlotSink {
    fn submit(&mut self, plot: &Plot, destination: &str) -> Result<(), PipelineError> {
        let path = self.artifact_path(destination)?;
        fs::create_dir_all(&self.output_dir)?;
        let json = serde_json::to_string_pretty(plot)?;
        fs::write(&path, json)?;

        log::info!("[Report] Wrote {}", path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Collects submitted plots in memory
#[derive(Debug, Default)]
pub struct MemoryPlotSink {
    plots: Vec<(String, Plot)>,
}

impl MemoryPlotSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submitted `(destination, plot)` pairs, in submission order
    pub fn plots(&self) -> &[(String, Plot)] {
        &self.plots
    }

    pub fn get(&self, destination: &str) -> Option<&Plot> {
        self.plots
            .iter()
            .find(|(name, _)| name == destination)
            .map(|(_, plot)| plot)
    }
}

impl PlotSink for MemoryPlotSink {
    fn submit(&mut self, plot: &Plot, destination: &str) -> Result<(), PipelineError> {
        self.plots.push((destination.to_string(), plot.clone()));
        Ok(())
    }
}
