//! Detection module for deepscan

mod result;

pub use result::{AnalysisResult, AnalysisStatus};
