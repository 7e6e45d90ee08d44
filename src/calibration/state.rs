// Thresholds - decision boundaries derived by calibration
//
// This module stores the threshold values used by the Detector. Thresholds
// are recomputed on every run and never persisted; once a calibration
// returns them they are treated as read-only.

use serde::{Deserialize, Serialize};

/// How a set of thresholds was derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalibrationMethod {
    /// Midpoint between the no-drone and drone mean energies
    Midpoint,
    /// Background statistics scaled by fixed multipliers
    BackgroundScaled,
}

/// Thresholds consumed by the Detector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Threshold on mean energy
    pub energy: f64,
    /// Threshold on variance; `None` selects the energy-only rule
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variance: Option<f64>,
    /// Calibration method that produced these values
    pub method: CalibrationMethod,
}

impl Thresholds {
    /// True when the combined energy + variance rule applies
    pub fn is_combined(&self) -> bool {
        self.variance.is_some()
    }
}
