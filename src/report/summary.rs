// Console summaries for session outcomes
//
// Human-readable only; no downstream parser depends on the layout.

use std::fmt;

use crate::calibration::Thresholds;
use crate::session::{FeatureSpaceOutcome, RunOutcome, SingleRunOutcome, ThresholdStudyOutcome};
use crate::signal::Condition;

impl fmt::Display for SingleRunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "No Drone Features:")?;
        writeln!(f, "  Mean Energy : {:.6}", self.no_drone_features.mean_energy)?;
        writeln!(f, "  Variance    : {:.6}", self.no_drone_features.variance)?;
        writeln!(f)?;
        writeln!(f, "Drone Features:")?;
        writeln!(f, "  Mean Energy : {:.6}", self.drone_features.mean_energy)?;
        writeln!(f, "  Variance    : {:.6}", self.drone_features.variance)?;
        writeln!(f)?;
        write!(f, "Energy threshold: {:.6}", self.thresholds.energy)?;
        if let Some(variance) = self.thresholds.variance {
            write!(f, ", variance threshold: {:.6}", variance)?;
        }
        writeln!(f)?;
        writeln!(f, "Detection Result: {}", self.verdict)
    }
}

impl fmt::Display for FeatureSpaceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Feature Space ---")?;
        for label in [Condition::NoDrone, Condition::DronePresent] {
            writeln!(
                f,
                "{:<14}: {} samples, mean energy {:.6}, mean variance {:.6}",
                label.display_name(),
                self.dataset.count(label),
                self.dataset.mean_energy(label).unwrap_or_default(),
                self.dataset.mean_variance(label).unwrap_or_default()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for ThresholdStudyOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Threshold Calibration ---")?;
        writeln!(f, "Mean energy (No Drone): {:.6}", self.mean_energy_no_drone)?;
        writeln!(f, "Mean energy (Drone)   : {:.6}", self.mean_energy_drone)?;
        writeln!(f, "Chosen energy threshold: {:.6}", self.thresholds.energy)?;
        writeln!(f, "Decision rule          : {}", rule_name(&self.thresholds))?;
        writeln!(f)?;
        writeln!(f, "--- Detection Performance ---")?;
        writeln!(f, "Total No-Drone samples : {}", self.counts.total_no_drone)?;
        writeln!(f, "False alarms           : {}", self.counts.false_alarms)?;
        writeln!(f, "Total Drone samples    : {}", self.counts.total_drone)?;
        writeln!(f, "Correct detections     : {}", self.counts.detections)
    }
}

fn rule_name(thresholds: &Thresholds) -> &'static str {
    if thresholds.is_combined() {
        "energy + variance"
    } else {
        "energy only"
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Seed: {}", self.seed)?;
        writeln!(f)?;
        writeln!(f, "{}", self.single_run)?;
        writeln!(f, "{}", self.feature_space)?;
        write!(f, "{}", self.threshold_study)
    }
}
