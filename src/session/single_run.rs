// Single-run detection session
//
// One paired observation: calibrate background-scaled thresholds from the
// no-drone trace, then apply the combined energy + variance rule to the drone
// trace.

use rand::Rng;
use serde::Serialize;

use crate::analysis::{Detector, FeatureExtractor, FeatureVector, Verdict};
use crate::calibration::{Calibrator, Thresholds};
use crate::config::SimulationConfig;
use crate::error::PipelineError;
use crate::signal::{SignalGenerator, TracePair};

/// Result of the single-run session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleRunOutcome {
    /// Traces kept for the raw-activity view; omitted from JSON reports
    #[serde(skip)]
    pub pair: TracePair,
    pub no_drone_features: FeatureVector,
    pub drone_features: FeatureVector,
    pub thresholds: Thresholds,
    pub verdict: Verdict,
}

/// Run the single-run detection session
pub fn single_run<R: Rng + ?Sized>(
    config: &SimulationConfig,
    calibrator: &Calibrator,
    rng: &mut R,
) -> Result<SingleRunOutcome, PipelineError> {
    let generator = SignalGenerator::new(config.signal_params())?;
    let extractor = FeatureExtractor::new();

    let pair = generator.generate_pair(&config.single_run_burst, rng)?;
    let no_drone_features = extractor.extract(&pair.no_drone)?;
    let drone_features = extractor.extract(&pair.drone)?;

    let thresholds = calibrator.calibrate_background(&[no_drone_features])?;
    let verdict = Detector::new(thresholds).classify(&drone_features)?;

    tracing::info!(
        no_drone_energy = no_drone_features.mean_energy,
        drone_energy = drone_features.mean_energy,
        threshold_energy = thresholds.energy,
        verdict = %verdict,
        "[SingleRun] Detection complete"
    );

    Ok(SingleRunOutcome {
        pair,
        no_drone_features,
        drone_features,
        thresholds,
        verdict,
    })
}
