use std::sync::Arc;

use tracing::{debug, debug_span, error};

use jcs_catalog::RuleCatalog;
use jcs_model::{
    CategoryList, EmptyResult, Envelope, OperationError, Outcome, Payload, RuleGroupSummary,
    RuleList, TagList,
};
use jcs_validate::{AnalyzeCodeRequest, QueryRulesRequest, RequestValidator, RuleDetailsRequest};

use crate::analysis::analysis_preview;

/// The five catalog operations.
///
/// Cheap to clone; every clone shares the same immutable catalog.
#[derive(Debug, Clone)]
pub struct RuleService {
    catalog: Arc<RuleCatalog>,
}

impl RuleService {
    pub fn new(catalog: Arc<RuleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &RuleCatalog {
        &self.catalog
    }

    fn validator(&self) -> RequestValidator<'_> {
        RequestValidator::new(&self.catalog)
    }

    /// Rules filtered by categories and/or tags.
    pub fn query_rules(&self, request: &QueryRulesRequest) -> Envelope {
        debug_span!("query_rules").in_scope(|| self.try_query_rules(request).into())
    }

    /// Full records for the requested ids, in request order.
    pub fn get_rule_details(&self, request: &RuleDetailsRequest) -> Envelope {
        debug_span!("get_rule_details").in_scope(|| self.try_get_rule_details(request).into())
    }

    /// Every category with the rules filed under it, sorted by name.
    pub fn list_categories(&self) -> Envelope {
        let categories = self
            .catalog
            .distinct_categories()
            .iter()
            .map(|category| {
                RuleGroupSummary::new(category, self.catalog.filter_by_category(category))
            })
            .collect();
        Envelope::Ok(Payload::Categories(CategoryList { categories }))
    }

    /// Every tag with the rules carrying it, sorted by name.
    pub fn list_tags(&self) -> Envelope {
        let tags = self
            .catalog
            .distinct_tags()
            .iter()
            .map(|tag| RuleGroupSummary::new(tag, self.catalog.filter_by_tag(tag)))
            .collect();
        Envelope::Ok(Payload::Tags(TagList { tags }))
    }

    /// Validates the code and answers with the fixed preview. The catalog is not consulted.
    pub fn analyze_code(&self, request: &AnalyzeCodeRequest) -> Envelope {
        match self.validator().validate_code(request) {
            Ok(code) => {
                debug!(chars = code.chars().count(), "analysis requested");
                Envelope::InDevelopment(analysis_preview())
            }
            Err(errors) => Envelope::from(errors),
        }
    }

    fn try_query_rules(&self, request: &QueryRulesRequest) -> Outcome {
        let query = self.validator().validate_query(request)?;
        let rules = self
            .catalog
            .filter_by_categories_and_tags(query.categories.as_deref(), query.tags.as_deref());

        if rules.is_empty() {
            let message = format!(
                "No rules found for categories={}, tags={}",
                describe(request.categories.as_deref()),
                describe(request.tags.as_deref())
            );
            debug!(%message, "empty query result");
            return Err(OperationError::EmptyResult(EmptyResult::with_vocabulary(
                message,
                self.catalog.distinct_categories().to_vec(),
                self.catalog.distinct_tags().to_vec(),
            )));
        }

        debug!(matched = rules.len(), "query matched rules");
        Ok(Payload::Rules(RuleList::new(
            rules.into_iter().cloned().collect(),
        )))
    }

    fn try_get_rule_details(&self, request: &RuleDetailsRequest) -> Outcome {
        let ids = self.validator().validate_rule_ids(request)?;

        let mut rules = Vec::with_capacity(ids.len());
        for id in ids.as_slice() {
            let Some(rule) = self.catalog.by_id(id) else {
                error!(rule_id = %id, "validated rule id missing from catalog");
                return Err(OperationError::Inconsistent {
                    rule_id: id.clone(),
                    available_rules: self.catalog.rule_ids(),
                });
            };
            rules.push(rule.clone());
        }

        Ok(Payload::Rules(RuleList::new(rules)))
    }
}

/// Render a filter dimension as the caller sent it.
fn describe(values: Option<&[String]>) -> String {
    match values {
        Some(values) => format!("{values:?}"),
        None => "None".to_string(),
    }
}
