// Pipeline error types and constants

use crate::error::ErrorCode;
use crate::signal::Condition;
use log::error;
use std::fmt;

/// Pipeline error code constants
///
/// Single source of truth for the numeric codes reported by the CLI.
///
/// Error code range: 3001-3004
pub struct PipelineErrorCodes {}

impl PipelineErrorCodes {
    /// A generation, calibration or configuration parameter is out of range
    pub const INVALID_PARAMETER: i32 = 3001;

    /// A trace or feature vector is empty or contains non-finite values
    pub const INVALID_INPUT: i32 = 3002;

    /// Calibration requested without the samples it needs
    pub const INSUFFICIENT_DATA: i32 = 3003;

    /// A reporting collaborator failed to persist an artifact
    pub const REPORT_FAILED: i32 = 3004;
}

/// Log a pipeline error with structured context
///
/// Emits one `error!` line with the numeric code, the pipeline stage
/// (`context`) and the human-readable message.
pub fn log_pipeline_error(err: &PipelineError, context: &str) {
    error!(
        "Pipeline error in {}: code={}, component=DetectionPipeline, message={}",
        context,
        err.code(),
        err.message()
    );
}

/// Pipeline-related errors
///
/// Every error is raised synchronously by the call that detects the
/// violation. None of them are transient, so none are retried.
///
/// Error code range: 3001-3004
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Bad sample rate, duration, probability, amplitude or multiplier
    InvalidParameter { name: String, reason: String },

    /// Empty or non-finite trace / feature vector / threshold
    InvalidInput { reason: String },

    /// Calibration requested with too few samples for a label group.
    /// `label` is `None` when the dataset is empty altogether.
    InsufficientData {
        label: Option<Condition>,
        required: usize,
        collected: usize,
    },

    /// Plot or report artifact could not be written
    Report { reason: String },
}

impl PipelineError {
    pub(crate) fn invalid_parameter(name: &str, reason: impl Into<String>) -> Self {
        PipelineError::InvalidParameter {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        PipelineError::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl ErrorCode for PipelineError {
    fn code(&self) -> i32 {
        match self {
            PipelineError::InvalidParameter { .. } => PipelineErrorCodes::INVALID_PARAMETER,
            PipelineError::InvalidInput { .. } => PipelineErrorCodes::INVALID_INPUT,
            PipelineError::InsufficientData { .. } => PipelineErrorCodes::INSUFFICIENT_DATA,
            PipelineError::Report { .. } => PipelineErrorCodes::REPORT_FAILED,
        }
    }

    fn message(&self) -> String {
        match self {
            PipelineError::InvalidParameter { name, reason } => {
                format!("Invalid parameter {}: {}", name, reason)
            }
            PipelineError::InvalidInput { reason } => format!("Invalid input: {}", reason),
            PipelineError::InsufficientData {
                label: Some(label),
                required,
                collected,
            } => format!(
                "Insufficient {} samples: need {}, got {}",
                label, required, collected
            ),
            PipelineError::InsufficientData {
                label: None,
                required,
                collected,
            } => format!("Insufficient samples: need {}, got {}", required, collected),
            PipelineError::Report { reason } => format!("Report failed: {}", reason),
        }
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PipelineError::{:?} (code {}): {}",
            self,
            self.code(),
            self.message()
        )
    }
}

impl std::error::Error for PipelineError {}

impl From<std::io::Error> for PipelineError {
    fn from(err: std::io::Error) -> Self {
        PipelineError::Report {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Report {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pipeline_error_codes() {
        assert_eq!(
            PipelineError::invalid_parameter("sample_rate_hz", "must be > 0").code(),
            PipelineErrorCodes::INVALID_PARAMETER
        );
        assert_eq!(
            PipelineError::invalid_input("empty trace").code(),
            PipelineErrorCodes::INVALID_INPUT
        );
        assert_eq!(
            PipelineError::InsufficientData {
                label: None,
                required: 1,
                collected: 0
            }
            .code(),
            PipelineErrorCodes::INSUFFICIENT_DATA
        );
        assert_eq!(
            PipelineError::Report {
                reason: "disk full".to_string()
            }
            .code(),
            PipelineErrorCodes::REPORT_FAILED
        );
    }

    #[test]
    fn test_pipeline_error_messages() {
        let err = PipelineError::invalid_parameter("duration_s", "must be > 0 (got -1)");
        assert_eq!(
            err.message(),
            "Invalid parameter duration_s: must be > 0 (got -1)"
        );

        let err = PipelineError::InsufficientData {
            label: Some(Condition::NoDrone),
            required: 1,
            collected: 0,
        };
        assert_eq!(
            err.message(),
            "Insufficient no-drone samples: need 1, got 0"
        );

        let err = PipelineError::InsufficientData {
            label: None,
            required: 1,
            collected: 0,
        };
        assert_eq!(err.message(), "Insufficient samples: need 1, got 0");
    }

    #[test]
    fn test_pipeline_error_display() {
        let err = PipelineError::invalid_input("trace contains NaN");
        let display = format!("{}", err);
        assert!(display.contains("PipelineError"));
        assert!(display.contains(&err.code().to_string()));
        assert!(display.contains("trace contains NaN"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: PipelineError = io_err.into();

        match err {
            PipelineError::Report { reason } => assert!(reason.contains("read-only")),
            other => panic!("Expected Report variant, got {:?}", other),
        }
    }

    #[test]
    fn test_error_code_trait_object() {
        let err: &dyn ErrorCode = &PipelineError::invalid_input("empty");
        assert_eq!(err.code(), 3002);
    }
}
