// Error types for the drone RF detection pipeline
//
// This module defines the pipeline error type together with stable numeric
// error codes, so the CLI and any downstream consumer can react to failures
// without string matching.

mod pipeline;

pub use pipeline::{log_pipeline_error, PipelineError, PipelineErrorCodes};

/// Error codes for structured error reporting
///
/// This trait provides a standard way to get error codes and messages
/// from custom error types, enabling consistent error handling across
/// the library and the command-line front end.
pub trait ErrorCode {
    /// Get the numeric error code
    fn code(&self) -> i32;

    /// Get the human-readable error message
    fn message(&self) -> String;
}
