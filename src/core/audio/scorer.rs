// src/core/audio/scorer.rs
//
// Fixed-range scoring of the voice feature vector.

use log::info;

use super::AudioFeatures;
use crate::detection::{AnalysisResult, AnalysisStatus};

/// Points awarded per satisfied range check
pub const POINTS_PER_CHECK: u32 = 20;

/// Minimum score for a "real" verdict
pub const REAL_THRESHOLD: u32 = 60;

/// One inclusive range check with the factor wording for each verdict
struct RangeCheck {
    min: f64,
    max: f64,
    natural: &'static str,
    unnatural: &'static str,
    value: fn(&AudioFeatures) -> f64,
}

impl RangeCheck {
    fn passes(&self, features: &AudioFeatures) -> bool {
        let v = (self.value)(features);
        self.min <= v && v <= self.max
    }

    fn fails(&self, features: &AudioFeatures) -> bool {
        let v = (self.value)(features);
        v < self.min || v > self.max
    }
}

const CHECKS: [RangeCheck; 5] = [
    RangeCheck {
        min: 0.1,
        max: 0.9,
        natural: "Natural amplitude variations detected",
        unnatural: "Unnatural amplitude variations",
        value: |f| f.mean_amplitude,
    },
    RangeCheck {
        min: 0.05,
        max: 0.5,
        natural: "Consistent speech patterns observed",
        unnatural: "Inconsistent speech patterns",
        value: |f| f.std_dev,
    },
    RangeCheck {
        min: 0.1,
        max: 0.4,
        natural: "Natural speech rhythm detected",
        unnatural: "Artificial speech rhythm",
        value: |f| f.zero_crossing_rate,
    },
    RangeCheck {
        min: 0.01,
        max: 0.5,
        natural: "Balanced audio energy levels",
        unnatural: "Abnormal audio energy levels",
        value: |f| f.energy,
    },
    RangeCheck {
        min: 0.1,
        max: 0.5,
        natural: "Natural frequency distribution",
        unnatural: "Unnatural frequency distribution",
        value: |f| f.spectral_centroid,
    },
];

/// Score a feature vector: +20 per satisfied range, "real" at 60 or more.
///
/// A real verdict lists the satisfied checks; a fake verdict lists the
/// failed ones, each re-evaluated and worded independently.
pub fn score_audio(features: &AudioFeatures) -> AnalysisResult {
    let score = CHECKS.iter().filter(|c| c.passes(features)).count() as u32 * POINTS_PER_CHECK;
    let is_real = score >= REAL_THRESHOLD;

    let factors: Vec<String> = if is_real {
        CHECKS
            .iter()
            .filter(|c| c.passes(features))
            .map(|c| c.natural.to_string())
            .collect()
    } else {
        CHECKS
            .iter()
            .filter(|c| c.fails(features))
            .map(|c| c.unnatural.to_string())
            .collect()
    };

    let status = if is_real {
        AnalysisStatus::Real
    } else {
        AnalysisStatus::Fake
    };

    info!("Voice score {} -> {}", score, status);
    AnalysisResult::new(score, status, factors)
}
