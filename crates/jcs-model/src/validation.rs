//! Validation failures reported back to callers.
//!
//! Each [`ValidationIssue`] renders as `"<field>: <reason>"`.

use std::fmt;

use thiserror::Error;

/// Request field a validation issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Categories,
    Tags,
    RuleIds,
    Code,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Categories => "categories",
            Field::Tags => "tags",
            Field::RuleIds => "rule_ids",
            Field::Code => "code",
        }
    }

    /// Singular noun used in messages about one entry.
    pub fn noun(self) -> &'static str {
        match self {
            Field::Categories => "Category",
            Field::Tags => "Tag",
            Field::RuleIds => "Rule ID",
            Field::Code => "Code",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected request field.
///
/// The rendered message is the exact string placed in a `validation_error`
/// envelope.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    /// An entry was empty or whitespace only.
    #[error("{field}: {} cannot be empty", field.noun())]
    EmptyValue { field: Field },
    #[error("categories: Unknown category: '{value}'. Available: {available:?}")]
    UnknownCategory {
        value: String,
        available: Vec<String>,
    },
    #[error("tags: Unknown tag: '{value}'. Available: {available:?}")]
    UnknownTag {
        value: String,
        available: Vec<String>,
    },
    /// `examples` holds a sorted sample of valid ids, not the full list.
    #[error("rule_ids: Unknown rule ID: '{value}'. Example IDs: {examples:?}")]
    UnknownRuleId {
        value: String,
        examples: Vec<String>,
    },
    #[error(
        "{field}: List should have at least {min} item{} after validation, not {actual}",
        plural_suffix(*min)
    )]
    TooFewItems {
        field: Field,
        min: usize,
        actual: usize,
    },
    #[error("code: Code cannot be empty or whitespace only")]
    CodeEmpty,
    #[error("code: Code too large: {length} chars (max {max})")]
    CodeTooLarge { length: usize, max: usize },
}

impl ValidationIssue {
    pub fn field(&self) -> Field {
        match self {
            ValidationIssue::EmptyValue { field } | ValidationIssue::TooFewItems { field, .. } => {
                *field
            }
            ValidationIssue::UnknownCategory { .. } => Field::Categories,
            ValidationIssue::UnknownTag { .. } => Field::Tags,
            ValidationIssue::UnknownRuleId { .. } => Field::RuleIds,
            ValidationIssue::CodeEmpty | ValidationIssue::CodeTooLarge { .. } => Field::Code,
        }
    }
}

fn plural_suffix(count: usize) -> &'static str {
    if count == 1 { "" } else { "s" }
}

/// All issues found in one request, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{}", self.messages().join("; "))]
pub struct ValidationErrors {
    issues: Vec<ValidationIssue>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, issue: ValidationIssue) {
        self.issues.push(issue);
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    /// Rendered `"<field>: <reason>"` messages in report order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(ToString::to_string).collect()
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationIssue> for ValidationErrors {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            issues: vec![issue],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_field_prefix() {
        let issue = ValidationIssue::UnknownCategory {
            value: "Nope".to_string(),
            available: vec!["DTO".to_string(), "Imports".to_string()],
        };
        assert_eq!(
            issue.to_string(),
            r#"categories: Unknown category: 'Nope'. Available: ["DTO", "Imports"]"#
        );
    }

    #[test]
    fn empty_value_names_the_noun() {
        let issue = ValidationIssue::EmptyValue {
            field: Field::RuleIds,
        };
        assert_eq!(issue.to_string(), "rule_ids: Rule ID cannot be empty");
    }

    #[test]
    fn errors_join_messages() {
        let mut errors = ValidationErrors::new();
        errors.push(ValidationIssue::CodeEmpty);
        errors.push(ValidationIssue::EmptyValue { field: Field::Tags });
        assert_eq!(
            errors.to_string(),
            "code: Code cannot be empty or whitespace only; tags: Tag cannot be empty"
        );
        let source: &dyn std::error::Error = &errors;
        assert!(source.source().is_none());
    }

    #[test]
    fn empty_collection_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}
