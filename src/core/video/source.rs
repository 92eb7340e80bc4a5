// src/core/video/source.rs
//
// Frame sources. The production source probes the file with ffprobe and
// streams raw rgb24 frames out of an ffmpeg child process.

use image::RgbImage;
use log::{debug, warn};
use serde::Deserialize;
use std::io::{ErrorKind, Read};
use std::path::Path;
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::config::AnalysisConfig;
use crate::core::error::{AnalysisError, Result};

/// Sequential access to decoded video frames
pub trait FrameSource {
    /// Frame count reported by the container, 0 when unknown
    fn total_frames(&self) -> u64;

    /// Next decoded frame, `None` once the stream is exhausted
    fn next_frame(&mut self) -> Option<RgbImage>;
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProbeStream {
    #[serde(default)]
    width: Option<u32>,
    #[serde(default)]
    height: Option<u32>,
    #[serde(default)]
    nb_frames: Option<String>,
    #[serde(default)]
    r_frame_rate: Option<String>,
    #[serde(default)]
    duration: Option<String>,
    #[serde(default)]
    tags: Option<ProbeTags>,
    #[serde(default)]
    side_data_list: Vec<ProbeSideData>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProbeTags {
    #[serde(default)]
    rotate: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProbeSideData {
    #[serde(default)]
    rotation: Option<f64>,
}

impl ProbeStream {
    /// Display rotation in degrees, side data first, then the legacy tag
    fn rotation(&self) -> f64 {
        self.side_data_list
            .iter()
            .find_map(|d| d.rotation)
            .or_else(|| {
                self.tags
                    .as_ref()
                    .and_then(|t| t.rotate.as_deref())
                    .and_then(|r| r.trim().parse().ok())
            })
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProbeFormat {
    #[serde(default)]
    duration: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct ProbeOutput {
    #[serde(default)]
    streams: Vec<ProbeStream>,
    #[serde(default)]
    format: Option<ProbeFormat>,
}

/// Basic properties of the first video stream.
///
/// `width` and `height` describe frames as the decoder emits them, after
/// display rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
    pub total_frames: u64,
}

/// Run ffprobe on `path` and read the first video stream's geometry and frame count
pub fn probe_video(ffprobe: &Path, path: &Path) -> Result<VideoInfo> {
    let output = Command::new(ffprobe)
        .args([
            "-v",
            "error",
            "-select_streams",
            "v:0",
            "-show_entries",
            "stream=width,height,nb_frames,r_frame_rate,duration:stream_tags=rotate:stream_side_data=rotation:format=duration",
            "-of",
            "json",
            "--",
        ])
        .arg(path)
        .output()
        .map_err(|e| AnalysisError::Probe(format!("{}: {}", ffprobe.display(), e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(AnalysisError::Probe(format!(
            "{} (exit code: {:?})",
            stderr.trim(),
            output.status.code()
        )));
    }

    parse_probe_output(&output.stdout)
}

fn parse_probe_output(json: &[u8]) -> Result<VideoInfo> {
    let parsed: ProbeOutput =
        serde_json::from_slice(json).map_err(|e| AnalysisError::Probe(e.to_string()))?;

    let stream = parsed
        .streams
        .first()
        .ok_or_else(|| AnalysisError::Probe("no video stream found".to_string()))?;

    let mut width = stream.width.unwrap_or(0);
    let mut height = stream.height.unwrap_or(0);
    // ffmpeg autorotates, so quarter turns swap the output geometry
    let quarter_turns = (stream.rotation() / 90.0).round() as i64;
    if quarter_turns.rem_euclid(2) == 1 {
        std::mem::swap(&mut width, &mut height);
    }
    if width == 0 || height == 0 {
        return Err(AnalysisError::Probe(format!(
            "invalid frame size {}x{}",
            width, height
        )));
    }

    let counted = stream
        .nb_frames
        .as_deref()
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|&n| n > 0);

    let total_frames = counted.unwrap_or_else(|| {
        let duration = stream
            .duration
            .as_deref()
            .or_else(|| parsed.format.as_ref().and_then(|f| f.duration.as_deref()))
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(0.0);
        let fps = parse_frame_rate(stream.r_frame_rate.as_deref().unwrap_or("0/1"));
        (duration * fps).max(0.0) as u64
    });

    Ok(VideoInfo {
        width,
        height,
        total_frames,
    })
}

fn parse_frame_rate(rate: &str) -> f64 {
    match rate.split_once('/') {
        Some((num, den)) => {
            let num: f64 = num.trim().parse().unwrap_or(0.0);
            let den: f64 = den.trim().parse().unwrap_or(0.0);
            if den > 0.0 {
                num / den
            } else {
                0.0
            }
        }
        None => rate.trim().parse().unwrap_or(0.0),
    }
}

/// Frames decoded by an ffmpeg child process.
///
/// The child is killed and reaped on drop.
pub struct FfmpegSource {
    child: Child,
    stdout: ChildStdout,
    info: VideoInfo,
    frame_bytes: usize,
}

impl FfmpegSource {
    pub fn open(path: &Path, config: &AnalysisConfig) -> Result<Self> {
        let info = probe_video(&config.ffprobe, path)?;
        debug!(
            "Opened {}: {}x{}, {} frames",
            path.display(),
            info.width,
            info.height,
            info.total_frames
        );

        let mut child = Command::new(&config.ffmpeg)
            .args(["-v", "error", "-nostdin", "-i"])
            .arg(path)
            .args(["-map", "0:v:0", "-vsync", "0", "-f", "rawvideo", "-pix_fmt", "rgb24", "-"])
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AnalysisError::DecoderSpawn(format!("{}: {}", config.ffmpeg.display(), e)))?;

        let stdout = match child.stdout.take() {
            Some(stdout) => stdout,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(AnalysisError::DecoderSpawn(
                    "decoder stdout was not captured".to_string(),
                ));
            }
        };

        Ok(Self {
            child,
            stdout,
            frame_bytes: info.width as usize * info.height as usize * 3,
            info,
        })
    }

    pub fn info(&self) -> VideoInfo {
        self.info
    }
}

impl FrameSource for FfmpegSource {
    fn total_frames(&self) -> u64 {
        self.info.total_frames
    }

    fn next_frame(&mut self) -> Option<RgbImage> {
        let mut buf = vec![0u8; self.frame_bytes];
        match self.stdout.read_exact(&mut buf) {
            Ok(()) => RgbImage::from_raw(self.info.width, self.info.height, buf),
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => None,
            Err(e) => {
                warn!("Video decoder stream failed: {}", e);
                None
            }
        }
    }
}

impl Drop for FfmpegSource {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

/// In-memory frame source
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    frames: std::collections::VecDeque<RgbImage>,
    reported_total: u64,
}

impl MemorySource {
    /// Source whose reported total matches its frame count
    pub fn new(frames: Vec<RgbImage>) -> Self {
        let reported_total = frames.len() as u64;
        Self::with_reported_total(frames, reported_total)
    }

    /// Source reporting an arbitrary total, as containers with missing or
    /// wrong frame counts do
    pub fn with_reported_total(frames: Vec<RgbImage>, reported_total: u64) -> Self {
        Self {
            frames: frames.into(),
            reported_total,
        }
    }
}

impl FrameSource for MemorySource {
    fn total_frames(&self) -> u64 {
        self.reported_total
    }

    fn next_frame(&mut self) -> Option<RgbImage> {
        self.frames.pop_front()
    }
}
