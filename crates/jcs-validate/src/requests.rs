//! Raw, unvalidated operation inputs.

/// Input of the rule query operation. Both dimensions are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryRulesRequest {
    pub categories: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
}

impl QueryRulesRequest {
    pub fn new(categories: Option<Vec<String>>, tags: Option<Vec<String>>) -> Self {
        Self { categories, tags }
    }
}

/// Input of the rule details operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleDetailsRequest {
    pub rule_ids: Vec<String>,
}

impl RuleDetailsRequest {
    pub fn new<I, S>(rule_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rule_ids: rule_ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Input of the analysis stub.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalyzeCodeRequest {
    pub code: String,
}

impl AnalyzeCodeRequest {
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }
}
