//! Request validation for catalog operations.
//!
//! The [`RequestValidator`] is the only place caller-supplied strings are
//! checked against the live catalog vocabulary. Accepted values come back
//! rewritten to the catalog's canonical spelling; rejected values come back
//! as [`ValidationErrors`](jcs_model::ValidationErrors) with one issue per
//! failed field.

#![deny(unsafe_code)]

mod requests;
mod validator;

pub use requests::{AnalyzeCodeRequest, QueryRulesRequest, RuleDetailsRequest};
pub use validator::{
    EXAMPLE_ID_SAMPLE_SIZE, MAX_CODE_LENGTH, MIN_RULE_IDS, RequestValidator, ValidatedQuery,
    ValidatedRuleIds, check_code,
};
