//! deepscan - heuristic authenticity scoring for video and voice recordings
//!
//! Extracts a handful of statistical descriptors from a media file and maps
//! them through fixed threshold rules into a score, a verdict and a list of
//! human-readable factors. There is no learned model anywhere: the scores
//! are rule sums.
//!
//! ## Pipelines
//!
//! - **Video**: sample up to 30 evenly spaced frames, find the first face in
//!   each, measure its blockiness, Laplacian variance and intensity spread,
//!   then score the averages.
//! - **Voice**: read a waveform, downmix and peak-normalize it, compute mean
//!   amplitude, standard deviation, zero-crossing rate, energy and spectral
//!   centroid, then score each against a fixed range.
//!
//! ## Module Structure
//!
//! - `core` - Feature extraction, scoring and DSP utilities
//! - `cli` - Shared entry point of the `video-detect` and `voice-detect` tools
//! - `config` - Tunable parameters
//! - `detection` - Result types
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use deepscan::{analyze_voice, AnalysisConfig};
//!
//! let result = analyze_voice(Path::new("call.wav"), &AnalysisConfig::default());
//! println!("{}", result.to_json()?);
//! ```
//!
//! ## Verdicts
//!
//! | Pipeline | Score range | Verdict                                  |
//! |----------|-------------|------------------------------------------|
//! | Video    | >= 70       | fake                                     |
//! | Video    | 40 - 69     | suspicious                               |
//! | Video    | < 40        | real                                     |
//! | Voice    | >= 60       | real                                     |
//! | Voice    | < 60        | fake                                     |
//!
//! Unreadable input never fails the process: it produces a result with
//! status `error` and score 0.

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Configuration
pub mod config;

// Result types
pub mod detection;

pub use config::{AnalysisConfig, ConfigBuilder, FaceDetectorConfig};
pub use detection::{AnalysisResult, AnalysisStatus};
pub use crate::core::{analyze_video, analyze_voice, AnalysisError, VideoAnalyzer, VoiceAnalyzer};
pub use crate::core::audio::{AudioFeatures, Waveform};
pub use crate::core::video::{FaceDetector, FaceRegion, FrameFeatures, FrameSource};
