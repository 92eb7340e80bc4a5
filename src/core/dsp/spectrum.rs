//! Cosine-transform spectral centroid

use rustfft::{num_complex::Complex, FftPlanner};

/// Magnitude-weighted mean bin index of the cosine transform
/// `X[i] = Σ_j x[j]·cos(2π·i·j/N)` taken over every sample, with
/// `N = min(max_bins, len)`, normalized by `N`. Returns 0 when the
/// spectrum carries no magnitude.
///
/// The cosine is periodic in `j` with period `N`, so the signal is first
/// folded modulo `N` and the sum becomes the real part of an `N`-point DFT.
pub fn spectral_centroid(samples: &[f64], max_bins: usize) -> f64 {
    let bins = max_bins.min(samples.len());
    if bins == 0 {
        return 0.0;
    }

    let mut buffer = vec![Complex::new(0.0f64, 0.0); bins];
    for (j, &s) in samples.iter().enumerate() {
        buffer[j % bins].re += s;
    }

    let mut planner = FftPlanner::<f64>::new();
    let fft = planner.plan_fft_forward(bins);
    fft.process(&mut buffer);

    let magnitudes: Vec<f64> = buffer.iter().map(|c| c.re.abs()).collect();
    weighted_mean_bin(&magnitudes)
}

fn weighted_mean_bin(magnitudes: &[f64]) -> f64 {
    let total: f64 = magnitudes.iter().sum();
    if total <= 0.0 {
        return 0.0;
    }
    let weighted: f64 = magnitudes
        .iter()
        .enumerate()
        .map(|(i, m)| i as f64 * m)
        .sum();
    weighted / total / magnitudes.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn brute_force_centroid(samples: &[f64], max_bins: usize) -> f64 {
        let bins = max_bins.min(samples.len());
        let magnitudes: Vec<f64> = (0..bins)
            .map(|i| {
                samples
                    .iter()
                    .enumerate()
                    .map(|(j, s)| s * (2.0 * PI * i as f64 * j as f64 / bins as f64).cos())
                    .sum::<f64>()
                    .abs()
            })
            .collect();
        weighted_mean_bin(&magnitudes)
    }

    #[test]
    fn test_hand_computed_centroid() {
        // X = [-1, 0, 3, 0] -> (2 * 3) / 4 / 4
        let samples = [0.5, -1.0, 0.5, -1.0];
        assert!((spectral_centroid(&samples, 2048) - 0.375).abs() < 1e-9);
    }

    #[test]
    fn test_folded_matches_brute_force() {
        let samples: Vec<f64> = (0..3000)
            .map(|n| {
                let t = n as f64;
                0.6 * (t * 0.031).sin() + 0.3 * (t * 0.47).cos() - 0.05
            })
            .collect();

        let fast = spectral_centroid(&samples, 256);
        let slow = brute_force_centroid(&samples, 256);
        assert!((fast - slow).abs() < 1e-9, "fast {} vs brute force {}", fast, slow);
    }

    #[test]
    fn test_short_buffer_uses_buffer_length() {
        let samples = [1.0, -0.25, 0.75];
        let fast = spectral_centroid(&samples, 2048);
        let slow = brute_force_centroid(&samples, 2048);
        assert!((fast - slow).abs() < 1e-12);
    }

    #[test]
    fn test_zero_signal_has_zero_centroid() {
        assert_eq!(spectral_centroid(&[0.0; 64], 2048), 0.0);
        assert_eq!(spectral_centroid(&[], 2048), 0.0);
    }
}
