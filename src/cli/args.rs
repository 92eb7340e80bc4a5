//! CLI argument parsing.
//!
//! Each tool takes exactly one positional argument, the media path. All
//! tuning comes from `DEEPSCAN_*` environment variables.

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{
    AnalysisConfig, FaceDetectorConfig, DEFAULT_FACE_MODEL, DEFAULT_MAX_FRAMES,
    DEFAULT_SPECTRUM_BINS,
};

pub const INVALID_ARGUMENT_COUNT: &str = "Invalid number of arguments";

#[derive(Parser, Debug)]
#[command(about = "Heuristic authenticity scoring for media files")]
pub struct Args {
    /// Media file to analyze, taken verbatim from the command line
    #[arg(skip)]
    pub path: PathBuf,

    /// Maximum number of sampled video frames
    #[arg(long, env = "DEEPSCAN_MAX_FRAMES", default_value_t = DEFAULT_MAX_FRAMES)]
    pub max_frames: usize,

    /// Frontal face cascade model
    #[arg(long, env = "DEEPSCAN_FACE_MODEL", default_value = DEFAULT_FACE_MODEL)]
    pub face_model: PathBuf,

    #[arg(long, env = "DEEPSCAN_FACE_MIN_SIZE", default_value_t = 20)]
    pub face_min_size: u32,

    #[arg(long, env = "DEEPSCAN_FACE_SCORE_THRESHOLD", default_value_t = 2.0)]
    pub face_score_threshold: f64,

    #[arg(long, env = "DEEPSCAN_FACE_PYRAMID_SCALE", default_value_t = 0.77)]
    pub face_pyramid_scale: f32,

    #[arg(long, env = "DEEPSCAN_FACE_WINDOW_STEP", default_value_t = 4)]
    pub face_window_step: u32,

    /// Video decoder executable
    #[arg(long, env = "DEEPSCAN_FFMPEG", default_value = "ffmpeg")]
    pub ffmpeg: PathBuf,

    /// Video prober executable
    #[arg(long, env = "DEEPSCAN_FFPROBE", default_value = "ffprobe")]
    pub ffprobe: PathBuf,

    /// Spectral centroid bin cap
    #[arg(long, env = "DEEPSCAN_SPECTRUM_BINS", default_value_t = DEFAULT_SPECTRUM_BINS)]
    pub spectrum_bins: usize,
}

impl Args {
    pub fn to_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            max_frames: self.max_frames.max(1),
            spectrum_bins: self.spectrum_bins.max(1),
            ffmpeg: self.ffmpeg.clone(),
            ffprobe: self.ffprobe.clone(),
            face: FaceDetectorConfig {
                model_path: self.face_model.clone(),
                min_face_size: self.face_min_size,
                score_threshold: self.face_score_threshold,
                pyramid_scale: self.face_pyramid_scale,
                window_step: self.face_window_step.max(1),
            },
        }
    }
}

/// Why the command line was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    ArgumentCount,
    Configuration(String),
}

impl UsageError {
    pub fn message(&self) -> String {
        match self {
            UsageError::ArgumentCount => INVALID_ARGUMENT_COUNT.to_string(),
            UsageError::Configuration(msg) => format!("Invalid configuration: {}", msg),
        }
    }
}

/// Parse the raw process arguments (program name first).
///
/// The argument count is checked before clap sees anything. The single
/// argument is always the media path, even when it starts with `-`; clap
/// only resolves the environment-backed options.
pub fn parse_args<I, T>(raw: I) -> Result<Args, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut raw: Vec<OsString> = raw.into_iter().map(Into::into).collect();
    if raw.len() != 2 {
        return Err(UsageError::ArgumentCount);
    }
    let path = PathBuf::from(raw.pop().unwrap_or_default());

    let mut args = Args::try_parse_from(raw).map_err(|e| match e.kind() {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            let text = e.to_string();
            let first = text.lines().next().unwrap_or_default();
            UsageError::Configuration(first.trim_start_matches("error: ").to_string())
        }
        _ => UsageError::ArgumentCount,
    })?;
    args.path = path;
    Ok(args)
}
