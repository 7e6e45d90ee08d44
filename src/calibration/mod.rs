// Calibration module - threshold derivation from simulated data
//
// This module provides:
// 1. LabeledDataset: feature vectors tagged NoDrone / DronePresent
// 2. Thresholds: decision boundaries consumed by the Detector
// 3. Calibrator: midpoint and background-scaled calibration
// 4. SampleValidator: finite/non-negative checks before aggregation
//
// The calibration workflow:
// 1. Build a LabeledDataset from generated traces
// 2. Calibrate to obtain Thresholds (read-only for the rest of the run)
// 3. Hand the Thresholds to the Detector and Evaluator

pub mod dataset;
pub mod procedure;
pub mod state;
pub mod validation;

pub use dataset::{LabeledDataset, LabeledSample};
pub use procedure::Calibrator;
pub use state::{CalibrationMethod, Thresholds};
pub use validation::SampleValidator;
