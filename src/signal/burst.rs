// Burst module - bursty carrier model for drone transmitter activity
//
// A drone is modelled as a fixed-frequency sinusoid that is switched on
// independently at each time step with probability `on_probability`.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::error::PipelineError;

/// Parameters of the bursty carrier superimposed on background noise
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BurstProfile {
    /// Carrier frequency in Hz
    #[serde(default = "default_carrier_hz")]
    pub carrier_hz: f64,
    /// Per-sample probability that the carrier is on (0.0 to 1.0)
    pub on_probability: f64,
    /// Peak amplitude of the carrier while on
    pub amplitude: f64,
}

fn default_carrier_hz() -> f64 {
    40.0
}

impl BurstProfile {
    /// Create a validated burst profile
    ///
    /// # Errors
    /// `InvalidParameter` if the probability is outside `[0, 1]` or the
    /// carrier/amplitude is negative or non-finite.
    pub fn new(
        carrier_hz: f64,
        on_probability: f64,
        amplitude: f64,
    ) -> Result<Self, PipelineError> {
        let profile = Self {
            carrier_hz,
            on_probability,
            amplitude,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Burst preset of the single-run detection session
    pub fn single_run() -> Self {
        Self {
            carrier_hz: default_carrier_hz(),
            on_probability: 0.3,
            amplitude: 1.0,
        }
    }

    /// Burst preset of the multi-sample feature-space session
    pub fn multi_sample() -> Self {
        Self {
            carrier_hz: default_carrier_hz(),
            on_probability: 0.1,
            amplitude: 2.5,
        }
    }

    /// Re-check invariants, e.g. after deserializing from a config file
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(0.0..=1.0).contains(&self.on_probability) {
            return Err(PipelineError::invalid_parameter(
                "on_probability",
                format!("must be within [0, 1] (got {})", self.on_probability),
            ));
        }
        if !self.amplitude.is_finite() || self.amplitude < 0.0 {
            return Err(PipelineError::invalid_parameter(
                "amplitude",
                format!("must be finite and >= 0 (got {})", self.amplitude),
            ));
        }
        if !self.carrier_hz.is_finite() || self.carrier_hz < 0.0 {
            return Err(PipelineError::invalid_parameter(
                "carrier_hz",
                format!("must be finite and >= 0 (got {})", self.carrier_hz),
            ));
        }
        Ok(())
    }

    /// Add the gated carrier onto `samples` in place
    ///
    /// Draws exactly one uniform value per sample, in sample order, so the
    /// random stream consumption is independent of the burst outcome.
    pub(crate) fn superimpose<R: Rng + ?Sized>(
        &self,
        samples: &mut [f64],
        sample_rate_hz: f64,
        rng: &mut R,
    ) {
        let omega = 2.0 * PI * self.carrier_hz;
        for (i, sample) in samples.iter_mut().enumerate() {
            let on: f64 = rng.gen();
            if on < self.on_probability {
                let t = i as f64 / sample_rate_hz;
                *sample += self.amplitude * (omega * t).sin();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_presets_are_valid() {
        assert!(BurstProfile::single_run().validate().is_ok());
        assert!(BurstProfile::multi_sample().validate().is_ok());
        assert_eq!(BurstProfile::single_run().on_probability, 0.3);
        assert_eq!(BurstProfile::multi_sample().amplitude, 2.5);
    }

    #[test]
    fn test_rejects_probability_out_of_range() {
        for p in [-0.1, 1.5, f64::NAN] {
            let err = BurstProfile::new(40.0, p, 1.0).unwrap_err();
            assert!(
                matches!(err, PipelineError::InvalidParameter { ref name, .. } if name == "on_probability"),
                "unexpected error for p={}: {:?}",
                p,
                err
            );
        }
    }

    #[test]
    fn test_rejects_negative_amplitude() {
        assert!(BurstProfile::new(40.0, 0.3, -1.0).is_err());
        assert!(BurstProfile::new(40.0, 0.3, f64::INFINITY).is_err());
    }

    #[test]
    fn test_zero_probability_leaves_samples_untouched() {
        let profile = BurstProfile::new(40.0, 0.0, 5.0).unwrap();
        let mut samples = vec![0.25; 500];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        profile.superimpose(&mut samples, 1000.0, &mut rng);
        assert!(samples.iter().all(|&s| s == 0.25));
    }

    #[test]
    fn test_full_probability_adds_pure_carrier() {
        let profile = BurstProfile::new(40.0, 1.0, 2.0).unwrap();
        let mut samples = vec![0.0; 100];
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        profile.superimpose(&mut samples, 1000.0, &mut rng);

        for (i, &s) in samples.iter().enumerate() {
            let expected = 2.0 * (2.0 * PI * 40.0 * i as f64 / 1000.0).sin();
            assert!((s - expected).abs() < 1e-12, "sample {} = {}", i, s);
        }
    }
}
