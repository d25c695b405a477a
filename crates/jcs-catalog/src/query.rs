//! Query engine over the rule catalog.
//!
//! Every operation is pure and preserves catalog order. Absence is an empty
//! result, never an error.

use jcs_model::{Rule, fold_case};

use crate::catalog::RuleCatalog;

impl RuleCatalog {
    /// Rules whose category equals `category`, ignoring case.
    pub fn filter_by_category(&self, category: &str) -> Vec<&Rule> {
        self.rules()
            .iter()
            .filter(|rule| rule.in_category(category))
            .collect()
    }

    /// Rules carrying `tag`, ignoring case.
    pub fn filter_by_tag(&self, tag: &str) -> Vec<&Rule> {
        self.rules().iter().filter(|rule| rule.has_tag(tag)).collect()
    }

    /// Combined filter.
    ///
    /// A rule matches when its category is any of `categories` AND any of its
    /// tags is in `tags`. A dimension that is `None` or empty is not
    /// constrained, so passing neither returns the whole catalog.
    pub fn filter_by_categories_and_tags(
        &self,
        categories: Option<&[String]>,
        tags: Option<&[String]>,
    ) -> Vec<&Rule> {
        let wanted_categories = folded(categories);
        let wanted_tags = folded(tags);

        self.rules()
            .iter()
            .filter(|rule| {
                wanted_categories
                    .as_ref()
                    .is_none_or(|wanted| wanted.contains(&fold_case(&rule.category)))
            })
            .filter(|rule| {
                wanted_tags.as_ref().is_none_or(|wanted| {
                    rule.tags.iter().any(|tag| wanted.contains(&fold_case(tag)))
                })
            })
            .collect()
    }

    /// Exact lookup by canonical id.
    pub fn by_id(&self, id: &str) -> Option<&Rule> {
        self.position_of(id).map(|position| &self.rules()[position])
    }

    /// Distinct categories, sorted ascending.
    pub fn distinct_categories(&self) -> &[String] {
        self.sorted_categories()
    }

    /// Distinct tags across all rules, sorted ascending.
    pub fn distinct_tags(&self) -> &[String] {
        self.sorted_tags()
    }
}

/// Folded values of a non-empty filter dimension.
fn folded(values: Option<&[String]>) -> Option<Vec<String>> {
    values
        .filter(|values| !values.is_empty())
        .map(|values| values.iter().map(|v| fold_case(v)).collect())
}
