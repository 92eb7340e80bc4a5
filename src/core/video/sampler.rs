// src/core/video/sampler.rs
//
// Evenly spaced frame sampling.

use image::RgbImage;
use log::{debug, warn};
use std::path::Path;

use super::source::{FfmpegSource, FrameSource};
use crate::config::AnalysisConfig;

/// Keep every `max(1, total / max_frames)`-th frame, stopping at
/// `max_frames` or when the source runs dry.
pub fn sample_frames<S: FrameSource + ?Sized>(source: &mut S, max_frames: usize) -> Vec<RgbImage> {
    let max_frames = max_frames.max(1);
    let interval = (source.total_frames() / max_frames as u64).max(1);
    debug!(
        "Sampling up to {} of {} frames, interval {}",
        max_frames,
        source.total_frames(),
        interval
    );

    let mut frames = Vec::with_capacity(max_frames);
    let mut index: u64 = 0;
    while let Some(frame) = source.next_frame() {
        if index % interval == 0 {
            frames.push(frame);
        }
        index += 1;
        if frames.len() >= max_frames {
            break;
        }
    }
    frames
}

/// Sample frames from a video file. An unreadable file yields no frames.
pub fn extract_frames(path: &Path, config: &AnalysisConfig) -> Vec<RgbImage> {
    match FfmpegSource::open(path, config) {
        Ok(mut source) => sample_frames(&mut source, config.max_frames),
        Err(e) => {
            warn!("Could not open {}: {}", path.display(), e);
            Vec::new()
        }
    }
}
