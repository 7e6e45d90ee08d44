// Types module - Data structures for RF features
//
// This module defines the feature vector produced by the extraction stage
// and consumed by calibration, detection and evaluation.

use serde::{Deserialize, Serialize};

/// Features extracted from one RF trace
///
/// Both features are energy-domain summaries of the time-domain samples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Arithmetic mean of squared samples
    ///
    /// Proxy for average received power. For zero-mean Gaussian noise this
    /// concentrates near `sigma^2`.
    pub mean_energy: f64,

    /// Population variance of the raw samples
    ///
    /// Proxy for burst-induced spread around the trace mean.
    pub variance: f64,
}

impl FeatureVector {
    pub fn new(mean_energy: f64, variance: f64) -> Self {
        Self {
            mean_energy,
            variance,
        }
    }

    /// True when both features are finite numbers
    pub fn is_finite(&self) -> bool {
        self.mean_energy.is_finite() && self.variance.is_finite()
    }
}
