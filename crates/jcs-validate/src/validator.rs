use tracing::debug;

use jcs_catalog::RuleCatalog;
use jcs_model::{CaseInsensitiveSet, Field, ValidationErrors, ValidationIssue};

use crate::requests::{AnalyzeCodeRequest, QueryRulesRequest, RuleDetailsRequest};

/// Largest accepted code payload, in characters.
pub const MAX_CODE_LENGTH: usize = 100_000;

/// How many valid ids an unknown-id message lists.
pub const EXAMPLE_ID_SAMPLE_SIZE: usize = 10;

/// A rule details request must name at least this many ids.
pub const MIN_RULE_IDS: usize = 1;

/// Query input after normalization. Every value is a canonical catalog spelling.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedQuery {
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

/// Canonical rule ids, in request order, each known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRuleIds(Vec<String>);

impl ValidatedRuleIds {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

/// Checks caller input against the vocabulary of one catalog.
///
/// Within a list the first bad entry rejects the whole list. Independent
/// fields are checked separately, so a query with bad categories and bad tags
/// reports both.
#[derive(Debug, Clone, Copy)]
pub struct RequestValidator<'a> {
    catalog: &'a RuleCatalog,
}

impl<'a> RequestValidator<'a> {
    pub fn new(catalog: &'a RuleCatalog) -> Self {
        Self { catalog }
    }

    pub fn validate_query(
        &self,
        request: &QueryRulesRequest,
    ) -> Result<ValidatedQuery, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let categories = request
            .categories
            .as_deref()
            .map(|values| self.normalize_categories(values))
            .transpose()
            .unwrap_or_else(|issue| {
                errors.push(issue);
                None
            });
        let tags = request
            .tags
            .as_deref()
            .map(|values| self.normalize_tags(values))
            .transpose()
            .unwrap_or_else(|issue| {
                errors.push(issue);
                None
            });

        errors.into_result()?;
        Ok(ValidatedQuery { categories, tags })
    }

    pub fn validate_rule_ids(
        &self,
        request: &RuleDetailsRequest,
    ) -> Result<ValidatedRuleIds, ValidationErrors> {
        self.normalize_rule_ids(&request.rule_ids)
            .map(ValidatedRuleIds)
            .map_err(ValidationErrors::from)
    }

    pub fn validate_code<'r>(
        &self,
        request: &'r AnalyzeCodeRequest,
    ) -> Result<&'r str, ValidationErrors> {
        check_code(&request.code)?;
        Ok(&request.code)
    }

    /// Rewrite each category to its canonical spelling.
    pub fn normalize_categories(&self, values: &[String]) -> Result<Vec<String>, ValidationIssue> {
        normalize_against(
            values,
            Field::Categories,
            self.catalog.category_names(),
            |value| ValidationIssue::UnknownCategory {
                value,
                available: self.catalog.distinct_categories().to_vec(),
            },
        )
    }

    /// Rewrite each tag to its canonical spelling.
    pub fn normalize_tags(&self, values: &[String]) -> Result<Vec<String>, ValidationIssue> {
        normalize_against(
            values,
            Field::Tags,
            self.catalog.tag_names(),
            |value| ValidationIssue::UnknownTag {
                value,
                available: self.catalog.distinct_tags().to_vec(),
            },
        )
    }

    /// Rewrite each id to its canonical casing.
    ///
    /// An exact match is tried before the case-insensitive one.
    pub fn normalize_rule_ids(&self, values: &[String]) -> Result<Vec<String>, ValidationIssue> {
        if values.len() < MIN_RULE_IDS {
            return Err(reject(ValidationIssue::TooFewItems {
                field: Field::RuleIds,
                min: MIN_RULE_IDS,
                actual: values.len(),
            }));
        }

        values
            .iter()
            .map(|value| {
                if value.trim().is_empty() {
                    return Err(reject(ValidationIssue::EmptyValue {
                        field: Field::RuleIds,
                    }));
                }
                if let Some(rule) = self.catalog.by_id(value) {
                    return Ok(rule.id.clone());
                }
                self.catalog
                    .rule_id_names()
                    .get(value)
                    .map(str::to_string)
                    .ok_or_else(|| {
                        reject(ValidationIssue::UnknownRuleId {
                            value: value.clone(),
                            examples: self.example_ids(),
                        })
                    })
            })
            .collect()
    }

    /// The first few valid ids, sorted ascending.
    fn example_ids(&self) -> Vec<String> {
        let mut ids = self.catalog.rule_ids();
        ids.sort();
        ids.truncate(EXAMPLE_ID_SAMPLE_SIZE);
        ids
    }
}

/// Code must be non-blank and at most [`MAX_CODE_LENGTH`] characters.
pub fn check_code(code: &str) -> Result<(), ValidationIssue> {
    if code.trim().is_empty() {
        return Err(reject(ValidationIssue::CodeEmpty));
    }
    let length = code.chars().count();
    if length > MAX_CODE_LENGTH {
        return Err(reject(ValidationIssue::CodeTooLarge {
            length,
            max: MAX_CODE_LENGTH,
        }));
    }
    Ok(())
}

fn normalize_against(
    values: &[String],
    field: Field,
    known: &CaseInsensitiveSet,
    unknown: impl Fn(String) -> ValidationIssue,
) -> Result<Vec<String>, ValidationIssue> {
    values
        .iter()
        .map(|value| {
            if value.trim().is_empty() {
                return Err(reject(ValidationIssue::EmptyValue { field }));
            }
            known
                .get(value)
                .map(str::to_string)
                .ok_or_else(|| reject(unknown(value.clone())))
        })
        .collect()
}

fn reject(issue: ValidationIssue) -> ValidationIssue {
    debug!(field = %issue.field(), %issue, "rejected request input");
    issue
}
