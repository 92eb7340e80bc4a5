// src/core/video/scorer.rs
//
// Aggregation of per-frame features into a single verdict.

use log::info;
use serde::Serialize;

use super::features::FrameFeatures;
use crate::detection::{AnalysisResult, AnalysisStatus};

pub const NO_FRAMES: &str = "No frames could be extracted from the video";
pub const NO_INDICATORS: &str = "No significant deepfake indicators detected";

/// Score at or above which a video is reported as fake
pub const FAKE_THRESHOLD: u32 = 70;
/// Score at or above which a video is reported as suspicious
pub const SUSPICIOUS_THRESHOLD: u32 = 40;

/// Averages over all sampled frames. Frames without a face count as zeros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VideoAggregate {
    pub face_detection_rate: f64,
    pub avg_artifacts: f64,
    pub avg_blur: f64,
    pub avg_noise: f64,
}

impl VideoAggregate {
    pub fn from_frames(frames: &[FrameFeatures]) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        let n = frames.len() as f64;
        let faces = frames.iter().filter(|f| f.face_detected).count() as f64;
        Some(Self {
            face_detection_rate: faces / n,
            avg_artifacts: frames.iter().map(|f| f.artifacts).sum::<f64>() / n,
            avg_blur: frames.iter().map(|f| f.blur_score).sum::<f64>() / n,
            avg_noise: frames.iter().map(|f| f.noise_level).sum::<f64>() / n,
        })
    }

    /// Additive rule score and the factors raised along the way
    pub fn score(&self) -> (u32, Vec<String>) {
        let mut score = 0;
        let mut factors = Vec::new();

        if self.face_detection_rate < 0.5 {
            score += 30;
            factors.push("Inconsistent face detection throughout video".to_string());
        } else {
            score += 20;
        }

        if self.avg_artifacts > 10.0 {
            score += 25;
            factors.push("High level of compression artifacts detected".to_string());
        } else if self.avg_artifacts > 5.0 {
            score += 15;
            factors.push("Moderate compression artifacts present".to_string());
        } else {
            score += 10;
        }

        if self.avg_blur < 100.0 {
            score += 25;
            factors.push("Unnaturally low blur levels detected".to_string());
        } else if self.avg_blur > 500.0 {
            score += 15;
            factors.push("Excessive blur detected".to_string());
        } else {
            score += 10;
        }

        if self.avg_noise < 20.0 {
            score += 20;
            factors.push("Unnaturally low noise levels".to_string());
        } else if self.avg_noise > 50.0 {
            score += 15;
            factors.push("Abnormal noise patterns detected".to_string());
        } else {
            score += 10;
        }

        (score, factors)
    }
}

/// Map a score to a verdict. A real verdict always carries exactly the
/// single "no indicators" factor, whatever was accumulated.
pub fn classify(score: u32, factors: Vec<String>) -> AnalysisResult {
    if score >= FAKE_THRESHOLD {
        AnalysisResult::new(score, AnalysisStatus::Fake, factors)
    } else if score >= SUSPICIOUS_THRESHOLD {
        AnalysisResult::new(score, AnalysisStatus::Suspicious, factors)
    } else {
        AnalysisResult::new(score, AnalysisStatus::Real, vec![NO_INDICATORS.to_string()])
    }
}

/// Score a sequence of frame records
pub fn score_frames(frames: &[FrameFeatures]) -> AnalysisResult {
    let Some(aggregate) = VideoAggregate::from_frames(frames) else {
        return AnalysisResult::error(NO_FRAMES);
    };

    let (score, factors) = aggregate.score();
    let result = classify(score, factors);
    info!(
        "Video score {} -> {} (face rate {:.2}, artifacts {:.2}, blur {:.2}, noise {:.2})",
        result.score,
        result.status,
        aggregate.face_detection_rate,
        aggregate.avg_artifacts,
        aggregate.avg_blur,
        aggregate.avg_noise
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(artifacts: f64, blur_score: f64, noise_level: f64) -> FrameFeatures {
        FrameFeatures {
            face_detected: true,
            artifacts,
            blur_score,
            noise_level,
        }
    }

    #[test]
    fn test_no_faces_is_fake() {
        // zero artifacts fall through to the +10 branch
        let frames = vec![FrameFeatures::no_face(); 30];
        let result = score_frames(&frames);
        assert_eq!(result.score, 30 + 10 + 25 + 20);
        assert_eq!(result.status, AnalysisStatus::Fake);
        assert_eq!(
            result.factors,
            vec![
                "Inconsistent face detection throughout video",
                "Unnaturally low blur levels detected",
                "Unnaturally low noise levels",
            ]
        );
    }

    #[test]
    fn test_normal_ranges_are_the_floor() {
        let frames = vec![face(3.0, 250.0, 35.0); 10];
        let result = score_frames(&frames);
        assert_eq!(result.score, 50);
        assert_eq!(result.status, AnalysisStatus::Suspicious);
        assert!(result.factors.is_empty());
    }

    #[test]
    fn test_moderate_artifacts() {
        let frames = vec![face(7.0, 300.0, 30.0); 5];
        let result = score_frames(&frames);
        assert_eq!(result.score, 55);
        assert_eq!(result.status, AnalysisStatus::Suspicious);
        assert_eq!(result.factors, vec!["Moderate compression artifacts present"]);
    }

    #[test]
    fn test_high_branches() {
        let frames = vec![face(12.0, 800.0, 60.0); 5];
        let result = score_frames(&frames);
        assert_eq!(result.score, 20 + 25 + 15 + 15);
        assert_eq!(result.status, AnalysisStatus::Fake);
        assert_eq!(
            result.factors,
            vec![
                "High level of compression artifacts detected",
                "Excessive blur detected",
                "Abnormal noise patterns detected",
            ]
        );
    }

    #[test]
    fn test_non_face_frames_pull_averages_down() {
        // One face at 12 artifacts, one empty frame -> average 6
        let frames = vec![face(12.0, 300.0, 30.0), FrameFeatures::no_face()];
        let agg = VideoAggregate::from_frames(&frames).unwrap();
        assert_eq!(agg.face_detection_rate, 0.5);
        assert_eq!(agg.avg_artifacts, 6.0);
        assert_eq!(agg.avg_blur, 150.0);
        assert_eq!(agg.avg_noise, 15.0);

        let result = score_frames(&frames);
        // rate 0.5 is not below 0.5
        assert_eq!(result.score, 20 + 15 + 10 + 20);
    }

    #[test]
    fn test_boundaries_are_strict() {
        let frames = vec![face(10.0, 500.0, 50.0); 3];
        let (score, factors) = VideoAggregate::from_frames(&frames).unwrap().score();
        assert_eq!(score, 20 + 15 + 10 + 10);
        assert_eq!(factors, vec!["Moderate compression artifacts present"]);

        let frames = vec![face(5.0, 100.0, 20.0); 3];
        let (score, factors) = VideoAggregate::from_frames(&frames).unwrap().score();
        assert_eq!(score, 50);
        assert!(factors.is_empty());
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        let result = score_frames(&[]);
        assert_eq!(result, AnalysisResult::error(NO_FRAMES));
    }

    #[test]
    fn test_real_verdict_discards_factors() {
        let result = classify(35, vec!["Unnaturally low noise levels".to_string()]);
        assert_eq!(result.status, AnalysisStatus::Real);
        assert_eq!(result.factors, vec![NO_INDICATORS]);

        assert_eq!(classify(40, Vec::new()).status, AnalysisStatus::Suspicious);
        assert_eq!(classify(69, Vec::new()).status, AnalysisStatus::Suspicious);
        assert_eq!(classify(70, Vec::new()).status, AnalysisStatus::Fake);
    }

    #[test]
    fn test_score_range() {
        let values = [0.0, 5.5, 11.0, 150.0, 600.0, 30.0, 60.0];
        for &a in &values {
            for &b in &values {
                for &c in &values {
                    for detected in [true, false] {
                        let frames = vec![FrameFeatures {
                            face_detected: detected,
                            artifacts: a,
                            blur_score: b,
                            noise_level: c,
                        }];
                        let result = score_frames(&frames);
                        assert!((50..=100).contains(&result.score));
                        assert_ne!(result.status, AnalysisStatus::Real);
                    }
                }
            }
        }
    }
}
