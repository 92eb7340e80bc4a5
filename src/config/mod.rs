//! Configuration module for deepscan

mod settings;

pub use settings::{
    AnalysisConfig, ConfigBuilder, FaceDetectorConfig, DEFAULT_FACE_MODEL, DEFAULT_MAX_FRAMES,
    DEFAULT_SPECTRUM_BINS,
};
