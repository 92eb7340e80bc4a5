//! Analysis result types shared by the video and voice pipelines

use serde::{Deserialize, Serialize};

/// Overall verdict for an analyzed file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisStatus {
    /// No significant manipulation indicators
    Real,
    /// Some indicators, not conclusive
    Suspicious,
    /// Strong manipulation indicators
    Fake,
    /// The file could not be analyzed
    Error,
}

impl AnalysisStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisStatus::Real => "real",
            AnalysisStatus::Suspicious => "suspicious",
            AnalysisStatus::Fake => "fake",
            AnalysisStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complete analysis result for a file.
///
/// Serializes to `{"score":…,"status":…,"factors":[…]}`, the only thing the
/// binaries ever write to stdout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub score: u32,
    pub status: AnalysisStatus,
    pub factors: Vec<String>,
}

impl AnalysisResult {
    pub fn new(score: u32, status: AnalysisStatus, factors: Vec<String>) -> Self {
        Self {
            score,
            status,
            factors,
        }
    }

    /// Error-shaped result: score 0 and a single explanatory factor
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            score: 0,
            status: AnalysisStatus::Error,
            factors: vec![message.into()],
        }
    }

    pub fn is_error(&self) -> bool {
        self.status == AnalysisStatus::Error
    }

    /// Compact single-line JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
