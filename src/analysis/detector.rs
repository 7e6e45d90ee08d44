// Detector - threshold decision rule for drone presence
//
// This module applies calibrated thresholds to feature vectors. Two rules
// exist, selected by which thresholds are available:
//
// Combined rule (single-sample detection, both thresholds known):
//   Detected iff mean_energy > T_ENERGY AND variance > T_VARIANCE
// Energy rule (batch detection after midpoint calibration):
//   Detected iff mean_energy > T_ENERGY
//
// Comparisons are strict: a feature equal to its threshold is Clear.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::analysis::features::FeatureVector;
use crate::calibration::Thresholds;
use crate::error::PipelineError;

/// Outcome of applying the decision rule to one feature vector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// No drone activity above threshold
    Clear,
    /// Drone activity detected
    Detected,
}

impl Verdict {
    pub fn is_detected(self) -> bool {
        self == Verdict::Detected
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Clear => f.write_str("AREA CLEAR"),
            Verdict::Detected => f.write_str("DRONE DETECTED"),
        }
    }
}

/// Detector applies a fixed set of thresholds to feature vectors
///
/// Thresholds are copied in at construction and never change afterwards.
#[derive(Debug, Clone, Copy)]
pub struct Detector {
    thresholds: Thresholds,
}

impl Detector {
    /// Create a detector bound to calibrated thresholds
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify a feature vector with the bound thresholds
    pub fn classify(&self, features: &FeatureVector) -> Result<Verdict, PipelineError> {
        Self::apply(features, &self.thresholds)
    }

    /// Classify a feature vector with explicit thresholds
    ///
    /// The combined rule is used when `thresholds.variance` is set,
    /// otherwise the energy-only rule.
    pub fn apply(features: &FeatureVector, thresholds: &Thresholds) -> Result<Verdict, PipelineError> {
        Self::detect(features, thresholds.energy, thresholds.variance)
    }

    /// Apply the decision rule
    ///
    /// # Arguments
    /// * `features` - Extracted features (mean energy, variance)
    /// * `threshold_energy` - Mean energy threshold
    /// * `threshold_variance` - Optional variance threshold; selects the combined rule
    ///
    /// # Errors
    /// `InvalidInput` if any feature or threshold is NaN or infinite.
    pub fn detect(
        features: &FeatureVector,
        threshold_energy: f64,
        threshold_variance: Option<f64>,
    ) -> Result<Verdict, PipelineError> {
        if !features.is_finite() {
            return Err(PipelineError::invalid_input(format!(
                "non-finite features (mean_energy={}, variance={})",
                features.mean_energy, features.variance
            )));
        }
        if !threshold_energy.is_finite() {
            return Err(PipelineError::invalid_input(format!(
                "non-finite energy threshold ({})",
                threshold_energy
            )));
        }

        let energy_exceeded = features.mean_energy > threshold_energy;
        let detected = match threshold_variance {
            Some(t_var) if !t_var.is_finite() => {
                return Err(PipelineError::invalid_input(format!(
                    "non-finite variance threshold ({})",
                    t_var
                )));
            }
            Some(t_var) => energy_exceeded && features.variance > t_var,
            None => energy_exceeded,
        };

        Ok(if detected {
            Verdict::Detected
        } else {
            Verdict::Clear
        })
    }
}

#[cfg(test)]
#[path = "detector_tests.rs"]
mod tests;
