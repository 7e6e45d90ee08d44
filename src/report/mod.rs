// Report module - hand-off of computed results to reporting collaborators
//
// Nothing here renders graphics. Sessions compute pure results first; this
// module turns them into labeled plot descriptions and submits each one to a
// PlotSink together with a destination name. Console summaries live in
// `summary` as Display impls on the session outcomes.
//
// Views:
// 1. Raw activity: no-drone and drone traces over time
// 2. Feature space: (mean energy, variance) scatter grouped by label
// 3. Decision boundary: the feature-space scatter plus a vertical energy
//    threshold marker

mod sink;
mod summary;

pub use sink::{JsonPlotSink, MemoryPlotSink};

use serde::{Deserialize, Serialize};

use crate::calibration::LabeledDataset;
use crate::config::ReportConfig;
use crate::error::PipelineError;
use crate::session::{RunOutcome, SingleRunOutcome};
use crate::signal::{Condition, Trace};

/// One labeled 2-D series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

/// Vertical marker drawn at a threshold value on the x axis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdMarker {
    pub label: String,
    pub x: f64,
}

/// Plot description handed to a PlotSink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Plot {
    TimeSeries {
        title: String,
        x_label: String,
        y_label: String,
        series: Vec<Series>,
    },
    Scatter {
        title: String,
        x_label: String,
        y_label: String,
        groups: Vec<Series>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<ThresholdMarker>,
    },
}

impl Plot {
    pub fn title(&self) -> &str {
        match self {
            Plot::TimeSeries { title, .. } | Plot::Scatter { title, .. } => title,
        }
    }
}

/// Reporting collaborator that persists or displays plots
pub trait PlotSink {
    /// Accept one plot for the named destination artifact
    fn submit(&mut self, plot: &Plot, destination: &str) -> Result<(), PipelineError>;
}

fn trace_series(trace: &Trace) -> Series {
    Series {
        label: trace.condition().display_name().to_string(),
        points: trace
            .time_axis()
            .into_iter()
            .zip(trace.samples().iter().copied())
            .collect(),
    }
}

fn feature_groups(dataset: &LabeledDataset) -> Vec<Series> {
    [Condition::NoDrone, Condition::DronePresent]
        .into_iter()
        .map(|label| Series {
            label: label.display_name().to_string(),
            points: dataset
                .features_for(label)
                .map(|f| (f.mean_energy, f.variance))
                .collect(),
        })
        .collect()
}

/// Raw-activity view of a single-run session
pub fn raw_activity_plot(outcome: &SingleRunOutcome) -> Plot {
    Plot::TimeSeries {
        title: "Simulated RF Activity".to_string(),
        x_label: "Time (seconds)".to_string(),
        y_label: "RF Activity Level".to_string(),
        series: vec![
            trace_series(&outcome.pair.no_drone),
            trace_series(&outcome.pair.drone),
        ],
    }
}

/// Feature-space view of a labeled dataset
pub fn feature_space_plot(dataset: &LabeledDataset) -> Plot {
    Plot::Scatter {
        title: "Feature Space: Drone vs No Drone".to_string(),
        x_label: "Mean Energy".to_string(),
        y_label: "Variance".to_string(),
        groups: feature_groups(dataset),
        threshold: None,
    }
}

/// Decision-boundary view: feature space plus the energy threshold
pub fn decision_boundary_plot(dataset: &LabeledDataset, threshold_energy: f64) -> Plot {
    Plot::Scatter {
        title: "Decision Boundary for Drone Detection".to_string(),
        x_label: "Mean Energy".to_string(),
        y_label: "Variance".to_string(),
        groups: feature_groups(dataset),
        threshold: Some(ThresholdMarker {
            label: "Decision Threshold".to_string(),
            x: threshold_energy,
        }),
    }
}

/// Submit all three views of a run to `sink`
///
/// Stops at the first sink failure.
pub fn publish(
    outcome: &RunOutcome,
    sink: &mut dyn PlotSink,
    config: &ReportConfig,
) -> Result<(), PipelineError> {
    let dataset = &outcome.feature_space.dataset;
    let views = [
        (raw_activity_plot(&outcome.single_run), &config.raw_activity_name),
        (feature_space_plot(dataset), &config.feature_space_name),
        (
            decision_boundary_plot(dataset, outcome.threshold_study.thresholds.energy),
            &config.decision_boundary_name,
        ),
    ];

    for (plot, destination) in &views {
        sink.submit(plot, destination)?;
        log::debug!("[Report] Submitted '{}' as {}", plot.title(), destination);
    }
    Ok(())
}
