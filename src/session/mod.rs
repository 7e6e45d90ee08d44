// Session module - the three simulation stages and the run driver
//
// Each stage is a plain function over the shared contracts (generator,
// extractor, calibrator, detector, evaluator). Stages do no printing or
// plotting; they return outcome structs for the report module.
//
// 1. single_run: one paired observation, combined-rule detection
// 2. feature_space: labeled dataset from repeated paired observations
// 3. threshold_study: midpoint calibration + evaluation on a dataset
//
// run_all seeds one generator and runs the stages in that order, feeding the
// feature-space dataset into the threshold study.

mod feature_space;
mod single_run;
mod threshold_study;

pub use feature_space::{feature_space, FeatureSpaceOutcome};
pub use single_run::{single_run, SingleRunOutcome};
pub use threshold_study::{threshold_study, ThresholdStudyOutcome};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::calibration::Calibrator;
use crate::config::AppConfig;
use crate::error::{log_pipeline_error, PipelineError};

/// Combined outcome of a full run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunOutcome {
    pub seed: u64,
    pub single_run: SingleRunOutcome,
    pub feature_space: FeatureSpaceOutcome,
    pub threshold_study: ThresholdStudyOutcome,
}

/// Seeded generator for a run
///
/// ChaCha8 gives the same stream on every platform and rand release.
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Run all three sessions with one generator seeded from the config
///
/// The first failing stage aborts the run; its error is logged and returned.
pub fn run_all(config: &AppConfig) -> Result<RunOutcome, PipelineError> {
    run_all_inner(config).map_err(|err| {
        log_pipeline_error(&err, "run_all");
        err
    })
}

fn run_all_inner(config: &AppConfig) -> Result<RunOutcome, PipelineError> {
    config.validate()?;
    let calibrator = Calibrator::new(&config.calibration)?;
    let mut rng = seeded_rng(config.simulation.seed);

    tracing::info!(
        seed = config.simulation.seed,
        num_samples = config.simulation.num_samples,
        "[Session] Starting run"
    );

    let single = single_run(&config.simulation, &calibrator, &mut rng)?;
    let features = feature_space(&config.simulation, &mut rng)?;
    let study = threshold_study(&features.dataset, &calibrator)?;

    Ok(RunOutcome {
        seed: config.simulation.seed,
        single_run: single,
        feature_space: features,
        threshold_study: study,
    })
}
