//! Operation façade over the rule catalog.
//!
//! [`RuleService`] runs validation, then the query, then shapes the outcome
//! into an [`Envelope`](jcs_model::Envelope). Nothing escapes as an error:
//! validation failures, empty results and consistency violations all come
//! back as envelopes.

#![deny(unsafe_code)]

mod analysis;
mod service;

pub use analysis::{ANALYSIS_MESSAGE, PLANNED_FEATURES, analysis_preview};
pub use jcs_validate::{AnalyzeCodeRequest, QueryRulesRequest, RuleDetailsRequest};
pub use service::RuleService;
