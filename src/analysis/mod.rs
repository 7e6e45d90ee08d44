// Analysis module - feature extraction and decision rule
//
// - features: Trace -> FeatureVector (mean energy, variance)
// - detector: FeatureVector + thresholds -> Verdict

pub mod detector;
pub mod features;

pub use detector::{Detector, Verdict};
pub use features::{FeatureExtractor, FeatureVector};
