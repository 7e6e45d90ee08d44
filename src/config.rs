//! Configuration management for simulation runs
//!
//! This module provides runtime configuration loading from JSON files, so
//! noise levels, burst presets and calibration multipliers can be tuned
//! without recompilation. Every field has a default matching the reference
//! simulation (fs = 1000 Hz, 1 s windows, sigma = 0.4, seed 42).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PipelineError;
use crate::signal::{BurstProfile, SignalParams};

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub calibration: CalibrationConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Signal synthesis parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Seed for the run's random generator
    pub seed: u64,
    /// Sampling frequency in Hz
    pub sample_rate_hz: f64,
    /// Observation window in seconds
    pub duration_s: f64,
    /// Background noise standard deviation
    pub noise_sigma: f64,
    /// Paired traces generated by the feature-space study
    pub num_samples: usize,
    /// Burst preset of the single-run detection session
    pub single_run_burst: BurstProfile,
    /// Burst preset of the multi-sample sessions
    pub multi_sample_burst: BurstProfile,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let signal = SignalParams::default();
        Self {
            seed: 42,
            sample_rate_hz: signal.sample_rate_hz,
            duration_s: signal.duration_s,
            noise_sigma: signal.noise_sigma,
            num_samples: 50,
            single_run_burst: BurstProfile::single_run(),
            multi_sample_burst: BurstProfile::multi_sample(),
        }
    }
}

impl SimulationConfig {
    /// Acquisition parameters for the signal generator
    pub fn signal_params(&self) -> SignalParams {
        SignalParams {
            sample_rate_hz: self.sample_rate_hz,
            duration_s: self.duration_s,
            noise_sigma: self.noise_sigma,
        }
    }
}

/// Threshold calibration multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    /// Background mean energy multiplier for single-trace calibration
    pub energy_multiplier: f64,
    /// Background variance multiplier for single-trace calibration
    pub variance_multiplier: f64,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            energy_multiplier: 1.3,
            variance_multiplier: 1.2,
        }
    }
}

impl CalibrationConfig {
    pub fn validate(&self) -> Result<(), PipelineError> {
        for (name, value) in [
            ("energy_multiplier", self.energy_multiplier),
            ("variance_multiplier", self.variance_multiplier),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PipelineError::invalid_parameter(
                    name,
                    format!("must be finite and > 0 (got {})", value),
                ));
            }
        }
        Ok(())
    }
}

/// Plot artifact destinations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory receiving plot artifacts
    pub output_dir: PathBuf,
    pub raw_activity_name: String,
    pub feature_space_name: String,
    pub decision_boundary_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("results/plots"),
            raw_activity_name: "simulated_rf_activity".to_string(),
            feature_space_name: "feature_space_separation".to_string(),
            decision_boundary_name: "decision_boundary".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from JSON file
    ///
    /// # Arguments
    /// * `path` - Path to JSON config file
    ///
    /// # Returns
    /// Loaded configuration, or the defaults if the file doesn't exist or
    /// the JSON is invalid
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("[Config] Loaded configuration from {:?}", path.as_ref());
                config
            }
            Err(err) => {
                log::warn!(
                    "[Config] Failed to load {:?}: {}. Using defaults.",
                    path.as_ref(),
                    err
                );
                Self::default()
            }
        }
    }

    /// Load configuration from JSON file, failing on any read/parse error
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let contents = fs::read_to_string(&path).map_err(|err| {
            PipelineError::invalid_parameter(
                "config",
                format!("cannot read {}: {}", path.as_ref().display(), err),
            )
        })?;
        serde_json::from_str(&contents).map_err(|err| {
            PipelineError::invalid_parameter(
                "config",
                format!("cannot parse {}: {}", path.as_ref().display(), err),
            )
        })
    }

    /// Check every numeric parameter before a run starts
    pub fn validate(&self) -> Result<(), PipelineError> {
        let sim = &self.simulation;
        if !sim.sample_rate_hz.is_finite() || sim.sample_rate_hz <= 0.0 {
            return Err(PipelineError::invalid_parameter(
                "sample_rate_hz",
                format!("must be > 0 (got {})", sim.sample_rate_hz),
            ));
        }
        if !sim.duration_s.is_finite() || sim.duration_s <= 0.0 {
            return Err(PipelineError::invalid_parameter(
                "duration_s",
                format!("must be > 0 (got {})", sim.duration_s),
            ));
        }
        if !sim.noise_sigma.is_finite() || sim.noise_sigma < 0.0 {
            return Err(PipelineError::invalid_parameter(
                "noise_sigma",
                format!("must be finite and >= 0 (got {})", sim.noise_sigma),
            ));
        }
        if sim.num_samples == 0 {
            return Err(PipelineError::invalid_parameter(
                "num_samples",
                "must be at least 1",
            ));
        }
        sim.single_run_burst.validate()?;
        sim.multi_sample_burst.validate()?;
        self.calibration.validate()
    }
}
