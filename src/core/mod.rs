//! Core analysis: feature extraction, scoring and DSP utilities

pub mod analyzer;
pub mod audio;
pub mod dsp;
pub mod error;
pub mod video;

pub use analyzer::{analyze_video, analyze_voice, VideoAnalyzer, VoiceAnalyzer};
pub use error::AnalysisError;
