//! Voice pipeline: waveform reading, feature extraction and scoring

pub mod decoder;
pub mod features;
pub mod scorer;
pub mod wav;

use std::path::Path;

use crate::core::error::Result;

pub use features::{extract_audio_features, features_from_waveform, AudioFeatures};
pub use scorer::score_audio;

/// Decoded waveform as read from disk
#[derive(Debug, Clone, PartialEq)]
pub struct Waveform {
    pub channels: u16,
    /// Bytes per sample in the source stream
    pub sample_width: u16,
    /// Sample rate in Hz
    pub frame_rate: u32,
    pub frame_count: u64,
    /// Interleaved integer sample values
    pub samples: Vec<f64>,
}

/// Read a waveform, choosing the reader from the file extension
pub fn read_waveform(path: &Path) -> Result<Waveform> {
    let is_wav = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("wav") || e.eq_ignore_ascii_case("wave"))
        .unwrap_or(true);

    if is_wav {
        wav::read_wav(path)
    } else {
        decoder::decode_compressed(path)
    }
}
