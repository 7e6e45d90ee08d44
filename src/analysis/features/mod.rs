// FeatureExtractor - energy feature extraction for drone presence detection
//
// This module reduces a trace to a fixed-size feature vector. Both features
// are computed from the time-domain samples; no spectral analysis is needed
// because the decision rule only looks at power and spread.
//
// Module organization:
// - types: Data structures (FeatureVector)
// - temporal: Time-domain statistics (mean energy, population variance)
// - mod.rs: Coordinator (FeatureExtractor)
//
// Features extracted:
// 1. Mean energy: average of squared samples (power proxy)
// 2. Variance: population variance of raw samples (activity proxy)

mod temporal;
mod types;

pub use types::FeatureVector;

use crate::error::PipelineError;
use crate::signal::Trace;

/// FeatureExtractor turns traces into feature vectors
///
/// Stateless; a unit struct so the stage reads like the others in the
/// pipeline and can grow configuration later without touching callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureExtractor;

impl FeatureExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Extract features from a generated trace
    ///
    /// # Errors
    /// `InvalidInput` if the trace is empty or holds non-finite samples.
    pub fn extract(&self, trace: &Trace) -> Result<FeatureVector, PipelineError> {
        self.extract_samples(trace.samples())
    }

    /// Extract features from raw samples
    ///
    /// # Errors
    /// `InvalidInput` if `samples` is empty or holds non-finite values.
    pub fn extract_samples(&self, samples: &[f64]) -> Result<FeatureVector, PipelineError> {
        if samples.is_empty() {
            return Err(PipelineError::invalid_input(
                "cannot extract features from an empty trace",
            ));
        }
        if let Some(idx) = samples.iter().position(|s| !s.is_finite()) {
            return Err(PipelineError::invalid_input(format!(
                "sample {} is not finite ({})",
                idx, samples[idx]
            )));
        }

        Ok(FeatureVector {
            mean_energy: temporal::mean_energy(samples),
            variance: temporal::population_variance(samples),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{BurstProfile, Condition, SignalGenerator, SignalParams};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Generate pure sine wave for testing
    fn generate_sine_wave(sample_rate: f64, frequency: f64, num_samples: usize) -> Vec<f64> {
        (0..num_samples)
            .map(|i| {
                let t = i as f64 / sample_rate;
                (2.0 * std::f64::consts::PI * frequency * t).sin()
            })
            .collect()
    }

    #[test]
    fn test_empty_trace_is_rejected() {
        let result = FeatureExtractor::new().extract_samples(&[]);
        assert!(matches!(result, Err(PipelineError::InvalidInput { .. })));
    }

    #[test]
    fn test_non_finite_sample_is_rejected() {
        let extractor = FeatureExtractor::new();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let result = extractor.extract_samples(&[0.1, bad, 0.2]);
            match result {
                Err(PipelineError::InvalidInput { reason }) => assert!(reason.contains("sample 1")),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_sine_wave_energy() {
        // Whole number of periods: mean energy and variance of a unit sine are 0.5
        let sine = generate_sine_wave(1000.0, 40.0, 1000);
        let features = FeatureExtractor::new().extract_samples(&sine).unwrap();

        assert!((features.mean_energy - 0.5).abs() < 1e-9);
        assert!((features.variance - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_dc_offset_separates_energy_from_variance() {
        let features = FeatureExtractor::new()
            .extract_samples(&[1.0, 1.0, 1.0, 1.0])
            .unwrap();
        assert_eq!(features.mean_energy, 1.0);
        assert_eq!(features.variance, 0.0);
    }

    #[test]
    fn test_background_energy_near_sigma_squared() {
        let generator = SignalGenerator::new(SignalParams::default()).unwrap();
        let extractor = FeatureExtractor::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let burst = BurstProfile::single_run();

        let mut total = 0.0;
        let trials = 20;
        for _ in 0..trials {
            let trace = generator.generate(Condition::NoDrone, &burst, &mut rng).unwrap();
            let features = extractor.extract(&trace).unwrap();
            // single 1000-sample trace: std of the estimate is ~0.007
            assert!(
                (features.mean_energy - 0.16).abs() < 0.05,
                "mean energy {} too far from 0.16",
                features.mean_energy
            );
            total += features.mean_energy;
        }

        let average = total / trials as f64;
        assert!(
            (average - 0.16).abs() < 0.01,
            "average mean energy {} too far from 0.16",
            average
        );
    }

    #[test]
    fn test_energy_monotonic_in_burst_amplitude() {
        let generator = SignalGenerator::new(SignalParams::default()).unwrap();
        let extractor = FeatureExtractor::new();

        let mut averages = Vec::new();
        for amplitude in [0.0, 0.5, 1.0, 2.5] {
            let burst = BurstProfile::new(40.0, 0.3, amplitude).unwrap();
            let mut total = 0.0;
            for seed in 0..30u64 {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                let trace = generator.generate(Condition::DronePresent, &burst, &mut rng).unwrap();
                total += extractor.extract(&trace).unwrap().mean_energy;
            }
            averages.push(total / 30.0);
        }

        for window in averages.windows(2) {
            assert!(
                window[1] > window[0],
                "mean energy should grow with amplitude: {:?}",
                averages
            );
        }
    }
}
