use thiserror::Error;

use crate::envelope::{EmptyResult, Envelope, Payload};
use crate::validation::ValidationErrors;

/// Why an operation did not produce a payload.
///
/// Every variant is recoverable per request; the façade turns it into an
/// [`Envelope`] instead of propagating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Caller input failed normalization or membership checks.
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Input was valid but nothing matched.
    #[error("{}", .0.message)]
    EmptyResult(EmptyResult),

    /// A validated rule id was not found in the catalog it was validated against.
    #[error("rule '{rule_id}' passed validation but is missing from the catalog")]
    Inconsistent {
        rule_id: String,
        available_rules: Vec<String>,
    },
}

impl From<ValidationErrors> for OperationError {
    fn from(errors: ValidationErrors) -> Self {
        OperationError::Validation(errors)
    }
}

impl From<OperationError> for Envelope {
    fn from(error: OperationError) -> Self {
        match error {
            OperationError::Validation(errors) => Envelope::from(errors),
            OperationError::EmptyResult(empty) => Envelope::Error(empty),
            OperationError::Inconsistent {
                rule_id,
                available_rules,
            } => Envelope::Error(EmptyResult::with_rules(
                format!("Catalog inconsistency: rule '{rule_id}' could not be resolved"),
                available_rules,
            )),
        }
    }
}

/// Result of an operation before it is shaped into an envelope.
pub type Outcome = std::result::Result<Payload, OperationError>;

impl From<Outcome> for Envelope {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Ok(payload) => Envelope::Ok(payload),
            Err(error) => Envelope::from(error),
        }
    }
}
