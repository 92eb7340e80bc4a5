// src/core/audio/features.rs
//
// Five-value descriptor of a mono, peak-normalized voice recording.

use log::debug;
use serde::Serialize;
use std::path::Path;

use super::{read_waveform, Waveform};
use crate::core::dsp::{energy, mean_abs, peak_amplitude, spectral_centroid, std_dev, zero_crossing_rate};
use crate::core::error::{AnalysisError, Result};

/// Audio feature vector. Field order is the order of the vector form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AudioFeatures {
    pub mean_amplitude: f64,
    pub std_dev: f64,
    pub zero_crossing_rate: f64,
    pub energy: f64,
    pub spectral_centroid: f64,
}

impl AudioFeatures {
    pub fn from_vector(v: [f64; 5]) -> Self {
        Self {
            mean_amplitude: v[0],
            std_dev: v[1],
            zero_crossing_rate: v[2],
            energy: v[3],
            spectral_centroid: v[4],
        }
    }

    pub fn to_vector(&self) -> [f64; 5] {
        [
            self.mean_amplitude,
            self.std_dev,
            self.zero_crossing_rate,
            self.energy,
            self.spectral_centroid,
        ]
    }
}

/// Read `path` and compute its feature vector
pub fn extract_audio_features(path: &Path, spectrum_bins: usize) -> Result<AudioFeatures> {
    let wave = read_waveform(path)?;
    features_from_waveform(wave, spectrum_bins)
}

/// Downmix (stereo only), peak-normalize and describe a waveform
pub fn features_from_waveform(wave: Waveform, spectrum_bins: usize) -> Result<AudioFeatures> {
    let mono = if wave.channels == 2 {
        downmix_pairs(&wave.samples)
    } else {
        wave.samples
    };

    let normalized = normalize_peak(mono)?;
    let features = compute_features(&normalized, spectrum_bins);
    debug!("Audio features: {:?}", features);
    Ok(features)
}

/// Average consecutive entries pairwise: `(x[2i] + x[2i+1]) / 2`.
/// A trailing unpaired entry is halved.
pub fn downmix_pairs(samples: &[f64]) -> Vec<f64> {
    samples
        .chunks(2)
        .map(|pair| pair.iter().sum::<f64>() / 2.0)
        .collect()
}

/// Scale so the largest absolute value becomes 1.0
pub fn normalize_peak(mut samples: Vec<f64>) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptySignal);
    }
    let peak = peak_amplitude(&samples);
    if peak == 0.0 {
        return Err(AnalysisError::SilentSignal);
    }
    for s in samples.iter_mut() {
        *s /= peak;
    }
    Ok(samples)
}

/// Compute the descriptor over an already normalized mono buffer
pub fn compute_features(samples: &[f64], spectrum_bins: usize) -> AudioFeatures {
    AudioFeatures {
        mean_amplitude: mean_abs(samples),
        std_dev: std_dev(samples),
        zero_crossing_rate: zero_crossing_rate(samples),
        energy: energy(samples),
        spectral_centroid: spectral_centroid(samples, spectrum_bins),
    }
}
