// Threshold calibration study session
//
// Midpoint calibration on a labeled dataset followed by evaluation of the
// energy-only rule against the same dataset.

use serde::Serialize;

use crate::calibration::{Calibrator, LabeledDataset, Thresholds};
use crate::error::PipelineError;
use crate::evaluation::{evaluate, Counts};
use crate::signal::Condition;

/// Result of the threshold calibration study
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ThresholdStudyOutcome {
    pub mean_energy_no_drone: f64,
    pub mean_energy_drone: f64,
    pub thresholds: Thresholds,
    pub counts: Counts,
}

/// Run the threshold calibration study on `dataset`
///
/// # Errors
/// `InsufficientData` unless both label groups are non-empty; the
/// background-only fallback has no drone group to evaluate detections on.
pub fn threshold_study(
    dataset: &LabeledDataset,
    calibrator: &Calibrator,
) -> Result<ThresholdStudyOutcome, PipelineError> {
    let mean_energy_no_drone =
        dataset
            .mean_energy(Condition::NoDrone)
            .ok_or(PipelineError::InsufficientData {
                label: Some(Condition::NoDrone),
                required: 1,
                collected: 0,
            })?;
    let mean_energy_drone =
        dataset
            .mean_energy(Condition::DronePresent)
            .ok_or(PipelineError::InsufficientData {
                label: Some(Condition::DronePresent),
                required: 1,
                collected: 0,
            })?;

    let thresholds = calibrator.calibrate(dataset)?;
    let counts = evaluate(dataset, thresholds.energy)?;

    tracing::info!(
        threshold = thresholds.energy,
        false_alarms = counts.false_alarms,
        detections = counts.detections,
        "[ThresholdStudy] Evaluation complete"
    );

    Ok(ThresholdStudyOutcome {
        mean_energy_no_drone,
        mean_energy_drone,
        thresholds,
        counts,
    })
}
