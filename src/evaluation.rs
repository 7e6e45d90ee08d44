// Evaluation - detection performance over a labeled dataset
//
// Counts how many samples of each label exceed an energy threshold. Pure
// aggregation: the dataset is only read.

use serde::{Deserialize, Serialize};

use crate::calibration::{LabeledDataset, SampleValidator};
use crate::error::PipelineError;
use crate::signal::Condition;

/// Aggregate detector outcome per label group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// NoDrone samples above threshold
    pub false_alarms: usize,
    /// DronePresent samples above threshold
    pub detections: usize,
    pub total_no_drone: usize,
    pub total_drone: usize,
}

impl Counts {
    /// Fraction of no-drone samples flagged, 0.0 for an empty group
    pub fn false_alarm_rate(&self) -> f64 {
        ratio(self.false_alarms, self.total_no_drone)
    }

    /// Fraction of drone samples flagged, 0.0 for an empty group
    pub fn detection_rate(&self) -> f64 {
        ratio(self.detections, self.total_drone)
    }
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Count false alarms and detections against an energy threshold
///
/// # Errors
/// `InvalidInput` if `threshold_energy` is NaN or infinite, or if any sample
/// fails [`SampleValidator::validate`].
pub fn evaluate(dataset: &LabeledDataset, threshold_energy: f64) -> Result<Counts, PipelineError> {
    if !threshold_energy.is_finite() {
        return Err(PipelineError::invalid_input(format!(
            "non-finite energy threshold ({})",
            threshold_energy
        )));
    }

    SampleValidator::validate_all(dataset.samples().iter().map(|s| &s.features))?;

    let mut counts = Counts::default();
    for sample in dataset.samples() {
        let above = sample.features.mean_energy > threshold_energy;
        match sample.label {
            Condition::NoDrone => {
                counts.total_no_drone += 1;
                counts.false_alarms += usize::from(above);
            }
            Condition::DronePresent => {
                counts.total_drone += 1;
                counts.detections += usize::from(above);
            }
        }
    }
    Ok(counts)
}
