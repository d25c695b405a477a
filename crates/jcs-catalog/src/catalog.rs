use std::collections::HashMap;

use jcs_model::{CaseInsensitiveSet, Rule, fold_case};

use crate::error::{CatalogError, Result};
use crate::group::RuleGroup;

/// The complete, immutable set of rules plus the vocabularies derived from it.
///
/// Built once from rule groups; the group order is the catalog order. No
/// method takes `&mut self`, so a catalog can be shared freely behind an
/// `Arc`.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<Rule>,
    index_by_id: HashMap<String, usize>,
    categories: Vec<String>,
    tags: Vec<String>,
    category_names: CaseInsensitiveSet,
    tag_names: CaseInsensitiveSet,
    rule_ids: CaseInsensitiveSet,
}

impl RuleCatalog {
    /// Concatenate `groups` into a catalog, enforcing the build-time invariants.
    ///
    /// # Errors
    ///
    /// Fails on an empty required field or on a rule id that repeats, either
    /// exactly or up to case.
    pub fn from_groups(groups: impl IntoIterator<Item = RuleGroup>) -> Result<Self> {
        let rules: Vec<Rule> = groups.into_iter().flat_map(|group| group.rules).collect();

        let mut index_by_id = HashMap::with_capacity(rules.len());
        let mut folded_ids: HashMap<String, &str> = HashMap::with_capacity(rules.len());
        for (position, rule) in rules.iter().enumerate() {
            check_required_fields(rule)?;
            if let Some(existing) = folded_ids.insert(fold_case(&rule.id), &rule.id) {
                return Err(CatalogError::DuplicateRuleId {
                    id: rule.id.clone(),
                    existing: existing.to_string(),
                });
            }
            index_by_id.insert(rule.id.clone(), position);
        }

        let category_names = CaseInsensitiveSet::new(rules.iter().map(|r| r.category.as_str()));
        let tag_names = CaseInsensitiveSet::new(rules.iter().flat_map(|r| r.tags.iter()));
        let rule_ids = CaseInsensitiveSet::new(rules.iter().map(|r| r.id.as_str()));

        Ok(Self {
            categories: category_names.sorted(),
            tags: tag_names.sorted(),
            rules,
            index_by_id,
            category_names,
            tag_names,
            rule_ids,
        })
    }

    /// All rules in catalog order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule ids in catalog order.
    pub fn rule_ids(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.id.clone()).collect()
    }

    /// Case-insensitive index of category names.
    pub fn category_names(&self) -> &CaseInsensitiveSet {
        &self.category_names
    }

    /// Case-insensitive index of tag names.
    pub fn tag_names(&self) -> &CaseInsensitiveSet {
        &self.tag_names
    }

    /// Case-insensitive index of rule ids.
    pub fn rule_id_names(&self) -> &CaseInsensitiveSet {
        &self.rule_ids
    }

    pub(crate) fn sorted_categories(&self) -> &[String] {
        &self.categories
    }

    pub(crate) fn sorted_tags(&self) -> &[String] {
        &self.tags
    }

    pub(crate) fn position_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }
}

fn check_required_fields(rule: &Rule) -> Result<()> {
    let fields = [
        ("id", rule.id.as_str()),
        ("category", rule.category.as_str()),
        ("name", rule.name.as_str()),
        ("description", rule.description.as_str()),
        ("wrong_example", rule.wrong_example.as_str()),
        ("correct_example", rule.correct_example.as_str()),
    ];
    for (field, value) in fields {
        if value.trim().is_empty() {
            return Err(CatalogError::EmptyField {
                rule_id: rule.id.clone(),
                field,
            });
        }
    }
    if rule.tags.iter().any(|tag| tag.trim().is_empty()) {
        return Err(CatalogError::EmptyField {
            rule_id: rule.id.clone(),
            field: "tag",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str, category: &str, tags: &[&str]) -> Rule {
        Rule {
            id: id.to_string(),
            category: category.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
            name: format!("name {id}"),
            description: "description".to_string(),
            wrong_example: "wrong".to_string(),
            correct_example: "correct".to_string(),
        }
    }

    fn group(category: &str, rules: Vec<Rule>) -> RuleGroup {
        RuleGroup {
            category: category.to_string(),
            rules,
        }
    }

    #[test]
    fn groups_concatenate_in_order() {
        let catalog = RuleCatalog::from_groups([
            group("Zeta", vec![rule("Z_1", "Zeta", &["b"])]),
            group("Alpha", vec![rule("A_1", "Alpha", &["a", "b"])]),
        ])
        .expect("build catalog");
        assert_eq!(catalog.rule_ids(), vec!["Z_1", "A_1"]);
        assert_eq!(catalog.sorted_categories(), ["Alpha", "Zeta"]);
        assert_eq!(catalog.sorted_tags(), ["a", "b"]);
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let err = RuleCatalog::from_groups([group(
            "A",
            vec![rule("A_1", "A", &[]), rule("A_1", "A", &[])],
        )])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateRuleId { .. }));
    }

    #[test]
    fn ids_differing_only_in_case_are_rejected() {
        let err = RuleCatalog::from_groups([
            group("A", vec![rule("A_1", "A", &[])]),
            group("B", vec![rule("a_1", "B", &[])]),
        ])
        .unwrap_err();
        match err {
            CatalogError::DuplicateRuleId { id, existing } => {
                assert_eq!(id, "a_1");
                assert_eq!(existing, "A_1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_field_is_rejected() {
        let mut bad = rule("A_1", "A", &[]);
        bad.wrong_example = "   ".to_string();
        let err = RuleCatalog::from_groups([group("A", vec![bad])]).unwrap_err();
        assert_eq!(err.to_string(), "Rule 'A_1' has an empty wrong_example");
    }

    #[test]
    fn blank_tag_is_rejected() {
        let err = RuleCatalog::from_groups([group("A", vec![rule("A_1", "A", &["ok", ""])])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "tag", .. }));
    }

    #[test]
    fn tags_differing_in_case_collapse_to_first_spelling() {
        let catalog = RuleCatalog::from_groups([group(
            "A",
            vec![rule("A_1", "A", &["Naming"]), rule("A_2", "A", &["naming"])],
        )])
        .expect("build catalog");
        assert_eq!(catalog.sorted_tags(), ["Naming"]);
    }
}
