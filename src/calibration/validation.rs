// Sample validation logic for calibration
//
// This module checks feature vectors before they are folded into threshold
// statistics. A single NaN would otherwise poison every group mean.

use crate::analysis::features::FeatureVector;
use crate::error::PipelineError;

/// Validator for calibration samples
pub struct SampleValidator;

impl SampleValidator {
    /// Validate a single sample
    ///
    /// # Validation Rules
    /// * Mean energy must be finite and >= 0
    /// * Variance must be finite and >= 0
    pub fn validate(features: &FeatureVector) -> Result<(), PipelineError> {
        if !features.mean_energy.is_finite() || features.mean_energy < 0.0 {
            return Err(PipelineError::invalid_input(format!(
                "mean energy {} must be finite and >= 0",
                features.mean_energy
            )));
        }

        if !features.variance.is_finite() || features.variance < 0.0 {
            return Err(PipelineError::invalid_input(format!(
                "variance {} must be finite and >= 0",
                features.variance
            )));
        }

        Ok(())
    }

    /// Validate every sample, reporting the first offending index
    pub fn validate_all<'a>(
        samples: impl IntoIterator<Item = &'a FeatureVector>,
    ) -> Result<(), PipelineError> {
        for (i, features) in samples.into_iter().enumerate() {
            Self::validate(features).map_err(|err| match err {
                PipelineError::InvalidInput { reason } => PipelineError::InvalidInput {
                    reason: format!("sample {}: {}", i, reason),
                },
                other => other,
            })?;
        }
        Ok(())
    }
}
