//! Shared data model for the Java code standards catalog.
//!
//! - [`rule`]: the immutable [`Rule`] record and its display summary
//! - [`envelope`]: the `status`-tagged response [`Envelope`] returned by every operation
//! - [`validation`]: structured validation failures produced by the request validator
//! - [`error`]: the error kinds surfaced at the operation boundary
//! - [`lookup`]: case-insensitive vocabulary lookup

pub mod envelope;
pub mod error;
pub mod lookup;
pub mod rule;
pub mod validation;

pub use envelope::{
    AnalysisPreview, CategoryList, EmptyResult, Envelope, Payload, RuleGroupSummary, RuleList,
    TagList, ValidationReport,
};
pub use error::{OperationError, Outcome};
pub use lookup::{CaseInsensitiveSet, fold_case};
pub use rule::{Rule, RuleSummary};
pub use validation::{Field, ValidationErrors, ValidationIssue};
