//! Response envelopes.
//!
//! Every operation answers with an [`Envelope`]; the variant decides the
//! `status` discriminator and the remaining fields are flattened next to it:
//!
//! ```text
//! {"status": "ok", "rules_count": 3, "rules": [...]}
//! {"status": "error", "message": "...", "available_categories": [...], "available_tags": [...]}
//! {"status": "validation_error", "errors": ["categories: ..."]}
//! {"status": "in_development", "message": "...", "planned_features": [...]}
//! ```

use serde::Serialize;

use crate::rule::{Rule, RuleSummary};
use crate::validation::ValidationErrors;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope {
    Ok(Payload),
    Error(EmptyResult),
    ValidationError(ValidationReport),
    InDevelopment(AnalysisPreview),
}

impl Envelope {
    /// The wire value of the `status` field.
    pub fn status(&self) -> &'static str {
        match self {
            Envelope::Ok(_) => "ok",
            Envelope::Error(_) => "error",
            Envelope::ValidationError(_) => "validation_error",
            Envelope::InDevelopment(_) => "in_development",
        }
    }

    /// True for `error` and `validation_error` envelopes.
    pub fn is_failure(&self) -> bool {
        matches!(self, Envelope::Error(_) | Envelope::ValidationError(_))
    }
}

impl From<ValidationErrors> for Envelope {
    fn from(errors: ValidationErrors) -> Self {
        Envelope::ValidationError(ValidationReport {
            errors: errors.messages(),
        })
    }
}

/// Successful operation payloads.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    Rules(RuleList),
    Categories(CategoryList),
    Tags(TagList),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleList {
    pub rules_count: usize,
    pub rules: Vec<Rule>,
}

impl RuleList {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self {
            rules_count: rules.len(),
            rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryList {
    pub categories: Vec<RuleGroupSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TagList {
    pub tags: Vec<RuleGroupSummary>,
}

/// A category or tag together with the rules filed under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleGroupSummary {
    pub name: String,
    pub rules_count: usize,
    pub rules: Vec<RuleSummary>,
}

impl RuleGroupSummary {
    pub fn new<'a>(name: impl Into<String>, rules: impl IntoIterator<Item = &'a Rule>) -> Self {
        let rules: Vec<RuleSummary> = rules.into_iter().map(Rule::summary).collect();
        Self {
            name: name.into(),
            rules_count: rules.len(),
            rules,
        }
    }
}

/// Validation passed but nothing matched.
///
/// Carries the vocabulary the caller needs to retry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyResult {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_rules: Option<Vec<String>>,
}

impl EmptyResult {
    pub fn with_vocabulary(
        message: impl Into<String>,
        categories: Vec<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            message: message.into(),
            available_categories: Some(categories),
            available_tags: Some(tags),
            available_rules: None,
        }
    }

    pub fn with_rules(message: impl Into<String>, rule_ids: Vec<String>) -> Self {
        Self {
            message: message.into(),
            available_categories: None,
            available_tags: None,
            available_rules: Some(rule_ids),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<String>,
}

/// Fixed answer of the analysis stub.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisPreview {
    pub message: String,
    pub planned_features: Vec<String>,
}
