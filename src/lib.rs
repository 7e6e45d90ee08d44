// Drone RF Detection - synthetic RF presence detection pipeline
// Signal synthesis -> feature extraction -> calibration -> detection -> evaluation

// Module declarations
pub mod analysis;
pub mod calibration;
pub mod config;
pub mod error;
pub mod evaluation;
pub mod report;
pub mod session;
pub mod signal;

// Re-exports for convenience
pub use analysis::{Detector, FeatureExtractor, FeatureVector, Verdict};
pub use calibration::{Calibrator, LabeledDataset, Thresholds};
pub use config::AppConfig;
pub use error::PipelineError;
pub use evaluation::{evaluate, Counts};
pub use session::{run_all, RunOutcome};
pub use signal::{BurstProfile, Condition, SignalGenerator, SignalParams, Trace};

/// Initialize stderr logging for binaries
///
/// `log` records from the library are bridged into the tracing subscriber.
/// Calling this more than once is harmless.
pub fn init_logging(level: tracing::Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
