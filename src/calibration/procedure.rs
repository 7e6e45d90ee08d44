// Calibrator - threshold derivation from labeled feature vectors
//
// Two calibration methods:
//
// Midpoint (authoritative when both label groups are present):
//   T_ENERGY = (mean_E(NoDrone) + mean_E(DronePresent)) / 2
//
// Background-scaled (only background samples available, e.g. a single
// no-drone trace):
//   T_ENERGY   = energy_multiplier   × mean_E(NoDrone)
//   T_VARIANCE = variance_multiplier × mean_V(NoDrone)
//
// The threshold is set relative to the measured background rather than as a
// fixed constant, so it follows whatever noise floor the run produced.

use crate::analysis::features::FeatureVector;
use crate::calibration::dataset::LabeledDataset;
use crate::calibration::state::{CalibrationMethod, Thresholds};
use crate::calibration::validation::SampleValidator;
use crate::config::CalibrationConfig;
use crate::error::PipelineError;
use crate::signal::Condition;

/// Calibrator derives detection thresholds from feature statistics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibrator {
    energy_multiplier: f64,
    variance_multiplier: f64,
}

impl Default for Calibrator {
    fn default() -> Self {
        let config = CalibrationConfig::default();
        Self {
            energy_multiplier: config.energy_multiplier,
            variance_multiplier: config.variance_multiplier,
        }
    }
}

impl Calibrator {
    /// Create a calibrator from configuration
    ///
    /// # Errors
    /// `InvalidParameter` if a multiplier is non-finite or not positive.
    pub fn new(config: &CalibrationConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(Self {
            energy_multiplier: config.energy_multiplier,
            variance_multiplier: config.variance_multiplier,
        })
    }

    /// Calibrate thresholds from a labeled dataset
    ///
    /// Uses the midpoint method when both groups are non-empty, and falls
    /// back to background scaling when only no-drone samples exist.
    ///
    /// # Errors
    /// * `InsufficientData` - dataset empty, or no no-drone samples at all
    /// * `InvalidInput` - a sample has non-finite or negative features
    pub fn calibrate(&self, dataset: &LabeledDataset) -> Result<Thresholds, PipelineError> {
        if dataset.is_empty() {
            return Err(PipelineError::InsufficientData {
                label: None,
                required: 1,
                collected: 0,
            });
        }
        SampleValidator::validate_all(dataset.samples().iter().map(|s| &s.features))?;

        match (
            dataset.mean_energy(Condition::NoDrone),
            dataset.mean_energy(Condition::DronePresent),
        ) {
            (Some(background), Some(drone)) => {
                let energy = 0.5 * (background + drone);
                tracing::debug!(
                    background_mean = background,
                    drone_mean = drone,
                    threshold = energy,
                    "[Calibrator] Midpoint calibration"
                );
                Ok(Thresholds {
                    energy,
                    variance: None,
                    method: CalibrationMethod::Midpoint,
                })
            }
            (Some(_), None) => {
                let background: Vec<FeatureVector> =
                    dataset.features_for(Condition::NoDrone).copied().collect();
                self.calibrate_background(&background)
            }
            (None, _) => Err(PipelineError::InsufficientData {
                label: Some(Condition::NoDrone),
                required: 1,
                collected: 0,
            }),
        }
    }

    /// Calibrate combined thresholds from background samples only
    ///
    /// # Errors
    /// * `InsufficientData` - `background` is empty
    /// * `InvalidInput` - a sample has non-finite or negative features
    pub fn calibrate_background(
        &self,
        background: &[FeatureVector],
    ) -> Result<Thresholds, PipelineError> {
        if background.is_empty() {
            return Err(PipelineError::InsufficientData {
                label: Some(Condition::NoDrone),
                required: 1,
                collected: 0,
            });
        }
        SampleValidator::validate_all(background)?;

        let n = background.len() as f64;
        let mean_energy = background.iter().map(|f| f.mean_energy).sum::<f64>() / n;
        let mean_variance = background.iter().map(|f| f.variance).sum::<f64>() / n;

        let thresholds = Thresholds {
            energy: mean_energy * self.energy_multiplier,
            variance: Some(mean_variance * self.variance_multiplier),
            method: CalibrationMethod::BackgroundScaled,
        };
        tracing::debug!(
            samples = background.len(),
            threshold_energy = thresholds.energy,
            threshold_variance = mean_variance * self.variance_multiplier,
            "[Calibrator] Background-scaled calibration"
        );
        Ok(thresholds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(mean_energy: f64, variance: f64) -> FeatureVector {
        FeatureVector::new(mean_energy, variance)
    }

    fn dataset(background: &[f64], drone: &[f64]) -> LabeledDataset {
        let mut dataset = LabeledDataset::new();
        for &e in background {
            dataset.push(features(e, e), Condition::NoDrone);
        }
        for &e in drone {
            dataset.push(features(e, e), Condition::DronePresent);
        }
        dataset
    }

    #[test]
    fn test_midpoint_of_group_means() {
        let data = dataset(&[0.1, 0.2, 0.3], &[0.8, 1.0]);
        let thresholds = Calibrator::default().calibrate(&data).unwrap();

        assert_eq!(thresholds.method, CalibrationMethod::Midpoint);
        assert!((thresholds.energy - 0.5 * (0.2 + 0.9)).abs() < 1e-12);
        assert_eq!(thresholds.variance, None);
    }

    #[test]
    fn test_midpoint_strictly_between_group_means() {
        let cases: [(&[f64], &[f64]); 3] = [
            (&[0.16], &[0.17]),
            (&[0.1, 0.5, 0.2], &[0.3, 0.9]),
            (&[0.15, 0.16, 0.17, 0.14], &[0.45, 0.5, 0.48]),
        ];
        for (background, drone) in cases {
            let data = dataset(background, drone);
            let low = data.mean_energy(Condition::NoDrone).unwrap();
            let high = data.mean_energy(Condition::DronePresent).unwrap();
            let t = Calibrator::default().calibrate(&data).unwrap().energy;
            assert!(low < t && t < high, "{} < {} < {} violated", low, t, high);
        }
    }

    #[test]
    fn test_background_only_falls_back_to_scaling() {
        let data = dataset(&[0.2, 0.2], &[]);
        let thresholds = Calibrator::default().calibrate(&data).unwrap();

        assert_eq!(thresholds.method, CalibrationMethod::BackgroundScaled);
        assert!((thresholds.energy - 0.26).abs() < 1e-12);
        assert!((thresholds.variance.unwrap() - 0.24).abs() < 1e-12);
    }

    #[test]
    fn test_empty_dataset_is_insufficient() {
        let result = Calibrator::default().calibrate(&LabeledDataset::new());
        match result {
            Err(PipelineError::InsufficientData {
                label: None,
                required: 1,
                collected: 0,
            }) => {}
            other => panic!("Expected InsufficientData, got {:?}", other),
        }
    }

    #[test]
    fn test_drone_only_dataset_is_insufficient() {
        let data = dataset(&[], &[0.5, 0.6]);
        match Calibrator::default().calibrate(&data) {
            Err(PipelineError::InsufficientData {
                label: Some(Condition::NoDrone),
                ..
            }) => {}
            other => panic!("Expected InsufficientData for no-drone, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_background_is_insufficient() {
        let result = Calibrator::default().calibrate_background(&[]);
        assert!(matches!(
            result,
            Err(PipelineError::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_non_finite_sample_rejected() {
        let mut data = dataset(&[0.1], &[0.5]);
        data.push(features(f64::NAN, 0.1), Condition::DronePresent);
        assert!(matches!(
            Calibrator::default().calibrate(&data),
            Err(PipelineError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_custom_multipliers() {
        let config = CalibrationConfig {
            energy_multiplier: 2.0,
            variance_multiplier: 3.0,
        };
        let calibrator = Calibrator::new(&config).unwrap();
        let thresholds = calibrator
            .calibrate_background(&[features(0.1, 0.2)])
            .unwrap();
        assert!((thresholds.energy - 0.2).abs() < 1e-12);
        assert!((thresholds.variance.unwrap() - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_multiplier_rejected() {
        let config = CalibrationConfig {
            energy_multiplier: 0.0,
            variance_multiplier: 1.2,
        };
        assert!(matches!(
            Calibrator::new(&config),
            Err(PipelineError::InvalidParameter { .. })
        ));
    }
}
