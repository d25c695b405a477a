//! Error types for catalog construction.
//!
//! These only occur while the catalog is being built; queries never fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    /// Rules directory not found.
    #[error("Rules directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The rules directory holds no `*.json` rule groups.
    #[error("No rule groups found in {path}")]
    NoGroups { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rule group document is not valid JSON or has the wrong shape.
    #[error("Failed to parse rule group {group}: {source}")]
    Parse {
        group: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Rule group {group} declares an empty category")]
    EmptyCategory { group: String },

    /// A required text field of a rule is empty.
    #[error("Rule '{rule_id}' has an empty {field}")]
    EmptyField {
        rule_id: String,
        field: &'static str,
    },

    /// Two rules share an id, exactly or up to case.
    #[error("Duplicate rule id '{id}' (already defined as '{existing}')")]
    DuplicateRuleId { id: String, existing: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for catalog construction.
pub type Result<T> = std::result::Result<T, CatalogError>;
