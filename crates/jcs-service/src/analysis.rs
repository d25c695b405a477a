//! The analysis stub.
//!
//! There is no analyzer yet; valid input always gets the same preview.

use jcs_model::AnalysisPreview;

pub const ANALYSIS_MESSAGE: &str = "SonarQube integration is under development";

pub const PLANNED_FEATURES: &[&str] = &[
    "Integration with SonarQube API",
    "Code quality analysis",
    "Security vulnerability detection",
    "Code smell detection",
    "Technical debt calculation",
];

pub fn analysis_preview() -> AnalysisPreview {
    AnalysisPreview {
        message: ANALYSIS_MESSAGE.to_string(),
        planned_features: PLANNED_FEATURES.iter().map(ToString::to_string).collect(),
    }
}
