// LabeledDataset - feature vectors tagged with the condition they came from
//
// Calibration and evaluation only use order-independent aggregates (per-label
// counts and means), so insertion order carries no meaning.

use serde::{Deserialize, Serialize};

use crate::analysis::features::FeatureVector;
use crate::signal::Condition;

/// One feature vector with its ground-truth label
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledSample {
    pub features: FeatureVector,
    pub label: Condition,
}

/// Ordered collection of labeled feature vectors
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LabeledDataset {
    samples: Vec<LabeledSample>,
}

impl LabeledDataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, features: FeatureVector, label: Condition) {
        self.samples.push(LabeledSample { features, label });
    }

    pub fn samples(&self) -> &[LabeledSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Feature vectors carrying `label`, in insertion order
    pub fn features_for(&self, label: Condition) -> impl Iterator<Item = &FeatureVector> + '_ {
        self.samples
            .iter()
            .filter(move |s| s.label == label)
            .map(|s| &s.features)
    }

    /// Number of samples carrying `label`
    pub fn count(&self, label: Condition) -> usize {
        self.features_for(label).count()
    }

    /// Mean of `mean_energy` within a label group, `None` if the group is empty
    pub fn mean_energy(&self, label: Condition) -> Option<f64> {
        self.group_mean(label, |f| f.mean_energy)
    }

    /// Mean of `variance` within a label group, `None` if the group is empty
    pub fn mean_variance(&self, label: Condition) -> Option<f64> {
        self.group_mean(label, |f| f.variance)
    }

    fn group_mean(&self, label: Condition, feature: impl Fn(&FeatureVector) -> f64) -> Option<f64> {
        let (sum, n) = self
            .features_for(label)
            .fold((0.0, 0usize), |(sum, n), f| (sum + feature(f), n + 1));
        if n == 0 {
            None
        } else {
            Some(sum / n as f64)
        }
    }
}

impl FromIterator<LabeledSample> for LabeledDataset {
    fn from_iter<I: IntoIterator<Item = LabeledSample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

impl Extend<LabeledSample> for LabeledDataset {
    fn extend<I: IntoIterator<Item = LabeledSample>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(mean_energy: f64, variance: f64) -> FeatureVector {
        FeatureVector::new(mean_energy, variance)
    }

    #[test]
    fn test_group_statistics() {
        let mut dataset = LabeledDataset::new();
        dataset.push(features(0.1, 0.2), Condition::NoDrone);
        dataset.push(features(0.3, 0.4), Condition::NoDrone);
        dataset.push(features(1.0, 2.0), Condition::DronePresent);

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.count(Condition::NoDrone), 2);
        assert_eq!(dataset.count(Condition::DronePresent), 1);
        assert!((dataset.mean_energy(Condition::NoDrone).unwrap() - 0.2).abs() < 1e-12);
        assert!((dataset.mean_variance(Condition::NoDrone).unwrap() - 0.3).abs() < 1e-12);
        assert_eq!(dataset.mean_energy(Condition::DronePresent), Some(1.0));
    }

    #[test]
    fn test_empty_group_has_no_mean() {
        let mut dataset = LabeledDataset::new();
        assert!(dataset.is_empty());
        assert_eq!(dataset.mean_energy(Condition::NoDrone), None);

        dataset.push(features(0.1, 0.1), Condition::NoDrone);
        assert_eq!(dataset.mean_energy(Condition::DronePresent), None);
        assert_eq!(dataset.mean_variance(Condition::DronePresent), None);
    }

    #[test]
    fn test_statistics_ignore_order() {
        let samples = vec![
            LabeledSample {
                features: features(0.1, 0.1),
                label: Condition::NoDrone,
            },
            LabeledSample {
                features: features(0.9, 0.8),
                label: Condition::DronePresent,
            },
            LabeledSample {
                features: features(0.3, 0.2),
                label: Condition::NoDrone,
            },
        ];
        let forward: LabeledDataset = samples.iter().copied().collect();
        let reversed: LabeledDataset = samples.iter().rev().copied().collect();

        for label in [Condition::NoDrone, Condition::DronePresent] {
            assert_eq!(forward.count(label), reversed.count(label));
            let a = forward.mean_energy(label).unwrap();
            let b = reversed.mean_energy(label).unwrap();
            assert!((a - b).abs() < 1e-12);
        }
    }
}
