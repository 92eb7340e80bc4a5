// src/core/video/face.rs
//
// Face detection capability. Detectors are owned by the caller and handed
// to the frame analyzer; nothing here is global.

use image::GrayImage;
use log::debug;
use rustface::ImageData;

use crate::config::FaceDetectorConfig;
use crate::core::error::{AnalysisError, Result};

/// Axis-aligned face bounding box in pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl FaceRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp a possibly out-of-bounds box to an image of the given size
    pub fn clamped(x: i64, y: i64, width: i64, height: i64, image_w: u32, image_h: u32) -> Self {
        let x0 = x.clamp(0, i64::from(image_w));
        let y0 = y.clamp(0, i64::from(image_h));
        let x1 = (x + width).clamp(x0, i64::from(image_w));
        let y1 = (y + height).clamp(y0, i64::from(image_h));
        Self {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        }
    }
}

/// Anything that can locate frontal faces in a grayscale image.
///
/// Regions are returned in detector order; callers that only want one face
/// take the first.
pub trait FaceDetector {
    fn detect(&mut self, image: &GrayImage) -> Vec<FaceRegion>;
}

/// Funnel-structured cascade frontal face detector (SeetaFace model)
pub struct SeetaFaceDetector {
    inner: Box<dyn rustface::Detector>,
}

impl SeetaFaceDetector {
    pub fn load(config: &FaceDetectorConfig) -> Result<Self> {
        let model_path = config.model_path.to_string_lossy().into_owned();
        let mut inner = rustface::create_detector(&model_path).map_err(|e| {
            AnalysisError::FaceModel {
                path: config.model_path.clone(),
                message: e.to_string(),
            }
        })?;

        inner.set_min_face_size(config.min_face_size);
        inner.set_score_thresh(config.score_threshold);
        inner.set_pyramid_scale_factor(config.pyramid_scale);
        inner.set_slide_window_step(config.window_step, config.window_step);

        debug!("Loaded face model from {}", model_path);
        Ok(Self { inner })
    }
}

impl FaceDetector for SeetaFaceDetector {
    fn detect(&mut self, image: &GrayImage) -> Vec<FaceRegion> {
        let (w, h) = image.dimensions();
        let mut data = ImageData::new(image.as_raw(), w, h);
        self.inner
            .detect(&mut data)
            .iter()
            .map(|face| {
                let bbox = face.bbox();
                FaceRegion::clamped(
                    i64::from(bbox.x()),
                    i64::from(bbox.y()),
                    i64::from(bbox.width()),
                    i64::from(bbox.height()),
                    w,
                    h,
                )
            })
            .filter(|r| r.width > 0 && r.height > 0)
            .collect()
    }
}
