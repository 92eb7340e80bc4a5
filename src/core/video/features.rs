// src/core/video/features.rs
//
// Per-frame descriptors computed over the first detected face.

use image::{imageops, RgbImage};
use log::debug;
use serde::Serialize;

use super::face::FaceDetector;
use super::imaging::{blockiness, intensity_std, laplacian_variance, to_grayscale};

/// Descriptor of one sampled frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Default)]
pub struct FrameFeatures {
    pub face_detected: bool,
    /// Blockiness of the face crop (compression artifact proxy)
    pub artifacts: f64,
    /// Laplacian variance of the face crop
    pub blur_score: f64,
    /// Intensity standard deviation of the face crop
    pub noise_level: f64,
}

impl FrameFeatures {
    /// Neutral record for frames without a detectable face
    pub fn no_face() -> Self {
        Self::default()
    }
}

/// Describe a frame by its first detected face. Frames without a face get
/// an all-zero record.
pub fn analyze_frame<D: FaceDetector + ?Sized>(frame: &RgbImage, detector: &mut D) -> FrameFeatures {
    let gray = to_grayscale(frame);

    let Some(face) = detector.detect(&gray).into_iter().next() else {
        return FrameFeatures::no_face();
    };

    let crop = imageops::crop_imm(&gray, face.x, face.y, face.width, face.height).to_image();

    let features = FrameFeatures {
        face_detected: true,
        artifacts: if face.width > 0 && face.height > 0 {
            blockiness(&crop)
        } else {
            0.0
        },
        blur_score: laplacian_variance(&crop),
        noise_level: intensity_std(&crop),
    };
    debug!("Face at {:?}: {:?}", face, features);
    features
}
