// Types module - Data structures for synthetic RF traces
//
// This module defines the trace and condition types shared by the generator,
// the feature extractor and the labeled datasets used for calibration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Scenario a trace was generated under; doubles as the dataset label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Background RF noise only
    NoDrone,
    /// Background noise plus bursty carrier activity
    DronePresent,
}

impl Condition {
    /// Human-readable label used in plots and console summaries
    pub fn display_name(self) -> &'static str {
        match self {
            Condition::NoDrone => "No Drone",
            Condition::DronePresent => "Drone Present",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::NoDrone => f.write_str("no-drone"),
            Condition::DronePresent => f.write_str("drone-present"),
        }
    }
}

/// Synthetic time-domain RF amplitude sequence for one observation window
///
/// Sample `i` sits at time `i / sample_rate_hz`. A trace is immutable once
/// generated: samples are only exposed by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    condition: Condition,
    sample_rate_hz: f64,
    samples: Vec<f64>,
}

impl Trace {
    pub(crate) fn new(condition: Condition, sample_rate_hz: f64, samples: Vec<f64>) -> Self {
        Self {
            condition,
            sample_rate_hz,
            samples,
        }
    }

    pub fn condition(&self) -> Condition {
        self.condition
    }

    pub fn sample_rate_hz(&self) -> f64 {
        self.sample_rate_hz
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Time stamps (seconds) for each sample, spaced `1 / sample_rate_hz`
    pub fn time_axis(&self) -> Vec<f64> {
        (0..self.samples.len())
            .map(|i| i as f64 / self.sample_rate_hz)
            .collect()
    }
}

/// No-drone and drone traces sharing one background noise realisation
#[derive(Debug, Clone, PartialEq)]
pub struct TracePair {
    pub no_drone: Trace,
    pub drone: Trace,
}
