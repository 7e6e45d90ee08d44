// Temporal module - Time-domain energy statistics
//
// This module computes summary statistics directly from time-domain samples.
// Callers guarantee a non-empty slice; emptiness is rejected upstream.

/// Compute mean energy
///
/// Formula: E = (1 / N) × Σ x[n]²
pub(crate) fn mean_energy(samples: &[f64]) -> f64 {
    let sum_sq: f64 = samples.iter().map(|&x| x * x).sum();
    sum_sq / samples.len() as f64
}

/// Compute population variance
///
/// Formula: V = (1 / N) × Σ (x[n] - μ)²
///
/// Two-pass form: the mean is computed first, which keeps the result
/// non-negative and avoids the cancellation of `E[x²] - μ²`.
pub(crate) fn population_variance(samples: &[f64]) -> f64 {
    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;
    samples
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .sum::<f64>()
        / n
}
