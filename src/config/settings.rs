// src/config/settings.rs
//
// Tunable parameters for the video and voice pipelines.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default cap on the number of sampled video frames
pub const DEFAULT_MAX_FRAMES: usize = 30;

/// Default cap on spectral-centroid bins
pub const DEFAULT_SPECTRUM_BINS: usize = 2048;

/// Default location of the frontal face cascade model
pub const DEFAULT_FACE_MODEL: &str = "seeta_fd_frontal_v1.0.bin";

/// Face detector parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceDetectorConfig {
    /// Path to the pretrained cascade model
    pub model_path: PathBuf,
    /// Smallest face edge, in pixels
    pub min_face_size: u32,
    /// Minimum cascade score for a window to count as a face
    pub score_threshold: f64,
    /// Pyramid down-scaling step (0.77 ≈ one level per 1.3x)
    pub pyramid_scale: f32,
    /// Sliding window step, in pixels
    pub window_step: u32,
}

impl Default for FaceDetectorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_FACE_MODEL),
            min_face_size: 20,
            score_threshold: 2.0,
            pyramid_scale: 0.77,
            window_step: 4,
        }
    }
}

/// Complete analysis configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Maximum number of frames sampled from a video
    pub max_frames: usize,
    /// Maximum number of spectral-centroid bins
    pub spectrum_bins: usize,
    /// Video decoder executable
    pub ffmpeg: PathBuf,
    /// Video prober executable
    pub ffprobe: PathBuf,
    pub face: FaceDetectorConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_frames: DEFAULT_MAX_FRAMES,
            spectrum_bins: DEFAULT_SPECTRUM_BINS,
            ffmpeg: PathBuf::from("ffmpeg"),
            ffprobe: PathBuf::from("ffprobe"),
            face: FaceDetectorConfig::default(),
        }
    }
}

/// Builder for custom configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: AnalysisConfig,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_frames(mut self, max_frames: usize) -> Self {
        self.config.max_frames = max_frames.max(1);
        self
    }

    pub fn spectrum_bins(mut self, bins: usize) -> Self {
        self.config.spectrum_bins = bins.max(1);
        self
    }

    pub fn ffmpeg(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ffmpeg = path.into();
        self
    }

    pub fn ffprobe(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.ffprobe = path.into();
        self
    }

    pub fn face_model(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.face.model_path = path.into();
        self
    }

    pub fn face_detector(mut self, face: FaceDetectorConfig) -> Self {
        self.config.face = face;
        self
    }

    pub fn build(self) -> AnalysisConfig {
        self.config
    }
}
