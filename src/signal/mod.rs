// SignalGenerator - synthetic RF trace synthesis
//
// This module produces time-domain traces for the two simulated scenarios:
// - NoDrone: i.i.d. Gaussian background noise
// - DronePresent: the same kind of background plus a bursty carrier
//
// Module organization:
// - types: Data structures (Condition, Trace, TracePair)
// - burst: Bursty carrier model (BurstProfile)
// - mod.rs: Coordinator (SignalGenerator)
//
// The random source is always passed in explicitly. For a given seed the
// draw order is fixed: N noise draws first, then (drone only) N burst draws.

mod burst;
mod types;

pub use burst::BurstProfile;
pub use types::{Condition, Trace, TracePair};

use rand::Rng;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Upper bound on `round(fs * duration)` for a single trace
pub const MAX_TRACE_SAMPLES: usize = 1 << 26;

/// Acquisition parameters shared by every trace of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    /// Sampling frequency in Hz
    pub sample_rate_hz: f64,
    /// Observation window length in seconds
    pub duration_s: f64,
    /// Standard deviation of the background noise
    pub noise_sigma: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            sample_rate_hz: 1000.0,
            duration_s: 1.0,
            noise_sigma: 0.4,
        }
    }
}

/// SignalGenerator synthesizes traces of a fixed length
pub struct SignalGenerator {
    params: SignalParams,
    noise: Normal<f64>,
    num_samples: usize,
}

impl SignalGenerator {
    /// Create a generator for the given acquisition parameters
    ///
    /// # Errors
    /// `InvalidParameter` if `sample_rate_hz <= 0`, `duration_s <= 0`,
    /// `noise_sigma` is negative/non-finite, or the window holds no samples
    /// or more than `MAX_TRACE_SAMPLES`.
    pub fn new(params: SignalParams) -> Result<Self, PipelineError> {
        if !params.sample_rate_hz.is_finite() || params.sample_rate_hz <= 0.0 {
            return Err(PipelineError::invalid_parameter(
                "sample_rate_hz",
                format!("must be > 0 (got {})", params.sample_rate_hz),
            ));
        }
        if !params.duration_s.is_finite() || params.duration_s <= 0.0 {
            return Err(PipelineError::invalid_parameter(
                "duration_s",
                format!("must be > 0 (got {})", params.duration_s),
            ));
        }

        if !params.noise_sigma.is_finite() || params.noise_sigma < 0.0 {
            return Err(PipelineError::invalid_parameter(
                "noise_sigma",
                format!("must be finite and >= 0 (got {})", params.noise_sigma),
            ));
        }
        let noise = Normal::new(0.0, params.noise_sigma).map_err(|err| {
            PipelineError::invalid_parameter(
                "noise_sigma",
                format!("{} (got {})", err, params.noise_sigma),
            )
        })?;

        let window = (params.sample_rate_hz * params.duration_s).round();
        if window > MAX_TRACE_SAMPLES as f64 {
            return Err(PipelineError::invalid_parameter(
                "duration_s",
                format!(
                    "window of {} s at {} Hz exceeds {} samples",
                    params.duration_s, params.sample_rate_hz, MAX_TRACE_SAMPLES
                ),
            ));
        }
        let num_samples = window as usize;
        if num_samples == 0 {
            return Err(PipelineError::invalid_parameter(
                "duration_s",
                format!(
                    "window of {} s at {} Hz holds no samples",
                    params.duration_s, params.sample_rate_hz
                ),
            ));
        }

        Ok(Self {
            params,
            noise,
            num_samples,
        })
    }

    pub fn params(&self) -> &SignalParams {
        &self.params
    }

    /// Number of samples `round(fs * duration)` in every generated trace
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Generate one trace for `condition`
    ///
    /// `burst` is validated up front but only applied for `DronePresent`.
    ///
    /// # Errors
    /// `InvalidParameter` if `burst` fails [`BurstProfile::validate`]; no
    /// random values are drawn in that case.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        condition: Condition,
        burst: &BurstProfile,
        rng: &mut R,
    ) -> Result<Trace, PipelineError> {
        burst.validate()?;
        let mut samples = self.background(rng);
        if condition == Condition::DronePresent {
            burst.superimpose(&mut samples, self.params.sample_rate_hz, rng);
        }
        Ok(Trace::new(condition, self.params.sample_rate_hz, samples))
    }

    /// Generate a paired observation sharing one background realisation
    ///
    /// The drone trace is the no-drone trace plus bursts, so any difference
    /// in features between the two is caused by the carrier alone.
    ///
    /// # Errors
    /// `InvalidParameter` if `burst` fails [`BurstProfile::validate`].
    pub fn generate_pair<R: Rng + ?Sized>(
        &self,
        burst: &BurstProfile,
        rng: &mut R,
    ) -> Result<TracePair, PipelineError> {
        burst.validate()?;
        let background = self.background(rng);
        let mut drone = background.clone();
        burst.superimpose(&mut drone, self.params.sample_rate_hz, rng);

        Ok(TracePair {
            no_drone: Trace::new(Condition::NoDrone, self.params.sample_rate_hz, background),
            drone: Trace::new(Condition::DronePresent, self.params.sample_rate_hz, drone),
        })
    }

    fn background<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<f64> {
        (0..self.num_samples)
            .map(|_| self.noise.sample(rng))
            .collect()
    }
}
