// src/core/error.rs
//
// Error taxonomy for feature extraction and scoring.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read waveform: {0}")]
    Wav(#[from] hound::Error),

    #[error("failed to decode audio: {0}")]
    Decode(#[from] symphonia::core::errors::Error),

    #[error("unsupported sample format: {0}")]
    UnsupportedFormat(String),

    #[error("audio buffer contains no samples")]
    EmptySignal,

    #[error("audio buffer is silent, peak amplitude is zero")]
    SilentSignal,

    #[error("failed to load face model {path}: {message}")]
    FaceModel { path: PathBuf, message: String },

    #[error("video probe failed: {0}")]
    Probe(String),

    #[error("failed to start video decoder: {0}")]
    DecoderSpawn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl AnalysisError {
    /// Failures that happen while turning a waveform into a feature vector
    pub fn is_audio_extraction(&self) -> bool {
        matches!(
            self,
            AnalysisError::Wav(_)
                | AnalysisError::Decode(_)
                | AnalysisError::UnsupportedFormat(_)
                | AnalysisError::EmptySignal
                | AnalysisError::SilentSignal
                | AnalysisError::Io(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
