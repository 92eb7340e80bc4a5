// src/core/analyzer.rs
//
// Top-level video and voice analysis. This is the one place where errors
// are turned into error-shaped results.

use image::RgbImage;
use log::warn;
use std::path::Path;

use super::audio::{extract_audio_features, score_audio};
use super::error::{AnalysisError, Result};
use super::video::scorer::NO_FRAMES;
use super::video::{analyze_frame, extract_frames, sample_frames, score_frames};
use super::video::{FaceDetector, FrameFeatures, FrameSource, SeetaFaceDetector};
use crate::config::AnalysisConfig;
use crate::detection::AnalysisResult;

pub const AUDIO_EXTRACTION_FAILED: &str = "Failed to extract audio features";

/// Error-shaped result for an unexpected failure
pub fn failure(err: &AnalysisError) -> AnalysisResult {
    AnalysisResult::error(format!("Analysis failed: {}", err))
}

/// Video analyzer owning its face detector
pub struct VideoAnalyzer {
    config: AnalysisConfig,
    detector: Option<Box<dyn FaceDetector>>,
}

impl VideoAnalyzer {
    /// Analyzer that loads the configured cascade model on first use
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            config,
            detector: None,
        }
    }

    /// Analyzer using a caller-supplied detector
    pub fn with_detector(config: AnalysisConfig, detector: Box<dyn FaceDetector>) -> Self {
        Self {
            config,
            detector: Some(detector),
        }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze a video file
    pub fn analyze(&mut self, path: &Path) -> AnalysisResult {
        let frames = extract_frames(path, &self.config);
        self.analyze_frames(&frames)
    }

    /// Sample and analyze frames from an arbitrary source
    pub fn analyze_source<S: FrameSource + ?Sized>(&mut self, source: &mut S) -> AnalysisResult {
        let frames = sample_frames(source, self.config.max_frames);
        self.analyze_frames(&frames)
    }

    /// Analyze already-sampled frames
    pub fn analyze_frames(&mut self, frames: &[RgbImage]) -> AnalysisResult {
        if frames.is_empty() {
            return AnalysisResult::error(NO_FRAMES);
        }
        match self.frame_features(frames) {
            Ok(features) => score_frames(&features),
            Err(e) => {
                warn!("Video analysis failed: {}", e);
                failure(&e)
            }
        }
    }

    fn frame_features(&mut self, frames: &[RgbImage]) -> Result<Vec<FrameFeatures>> {
        let detector = self.detector()?;
        Ok(frames.iter().map(|f| analyze_frame(f, &mut *detector)).collect())
    }

    fn detector(&mut self) -> Result<&mut dyn FaceDetector> {
        if self.detector.is_none() {
            let loaded = SeetaFaceDetector::load(&self.config.face)?;
            self.detector = Some(Box::new(loaded));
        }
        match self.detector.as_deref_mut() {
            Some(detector) => Ok(detector),
            None => Err(AnalysisError::FaceModel {
                path: self.config.face.model_path.clone(),
                message: "detector unavailable".to_string(),
            }),
        }
    }
}

/// Voice analyzer
pub struct VoiceAnalyzer {
    config: AnalysisConfig,
}

impl VoiceAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, path: &Path) -> AnalysisResult {
        match extract_audio_features(path, self.config.spectrum_bins) {
            Ok(features) => score_audio(&features),
            Err(e) if e.is_audio_extraction() => {
                warn!("Error extracting features from {}: {}", path.display(), e);
                AnalysisResult::error(AUDIO_EXTRACTION_FAILED)
            }
            Err(e) => {
                warn!("Voice analysis failed: {}", e);
                failure(&e)
            }
        }
    }
}

/// Analyze a video file with the configured face model
pub fn analyze_video(path: &Path, config: &AnalysisConfig) -> AnalysisResult {
    VideoAnalyzer::new(config.clone()).analyze(path)
}

/// Analyze a voice recording
pub fn analyze_voice(path: &Path, config: &AnalysisConfig) -> AnalysisResult {
    VoiceAnalyzer::new(config.clone()).analyze(path)
}
