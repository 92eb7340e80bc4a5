//! Video pipeline: frame sampling, per-frame face features and scoring

pub mod face;
pub mod features;
pub mod imaging;
pub mod sampler;
pub mod scorer;
pub mod source;

pub use face::{FaceDetector, FaceRegion, SeetaFaceDetector};
pub use features::{analyze_frame, FrameFeatures};
pub use sampler::{extract_frames, sample_frames};
pub use scorer::{classify, score_frames, VideoAggregate};
pub use source::{FfmpegSource, FrameSource, MemorySource, VideoInfo};
