//! Rule group documents.
//!
//! A group declares its category once and lists the rules filed under it:
//!
//! ```text
//! {
//!   "category": "Imports",
//!   "rules": [
//!     { "id": "IMPORT_001", "tags": ["imports"], "name": "...",
//!       "description": "...", "wrong_example": "...", "correct_example": "..." }
//!   ]
//! }
//! ```

use serde::Deserialize;

use jcs_model::Rule;

use crate::error::{CatalogError, Result};

/// One category's worth of rules, already stamped with the category.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    pub category: String,
    pub rules: Vec<Rule>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct GroupDocument {
    category: String,
    rules: Vec<RuleEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleEntry {
    id: String,
    #[serde(default)]
    tags: Vec<String>,
    name: String,
    description: String,
    wrong_example: String,
    correct_example: String,
}

impl RuleGroup {
    /// Parse a group document. `group` names the source in error messages.
    pub fn parse(group: &str, json: &str) -> Result<Self> {
        let document: GroupDocument =
            serde_json::from_str(json).map_err(|source| CatalogError::Parse {
                group: group.to_string(),
                source,
            })?;

        let category = document.category.trim().to_string();
        if category.is_empty() {
            return Err(CatalogError::EmptyCategory {
                group: group.to_string(),
            });
        }

        let rules = document
            .rules
            .into_iter()
            .map(|entry| Rule {
                id: entry.id,
                category: category.clone(),
                tags: entry.tags,
                name: entry.name,
                description: entry.description,
                wrong_example: entry.wrong_example,
                correct_example: entry.correct_example,
            })
            .collect();

        Ok(Self { category, rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_is_stamped_on_every_rule() {
        let json = r#"{
            "category": "Imports",
            "rules": [
                {"id": "A_1", "tags": ["x"], "name": "n", "description": "d",
                 "wrong_example": "w", "correct_example": "c"},
                {"id": "A_2", "name": "n", "description": "d",
                 "wrong_example": "w", "correct_example": "c"}
            ]
        }"#;
        let group = RuleGroup::parse("inline", json).expect("parse group");
        assert_eq!(group.rules.len(), 2);
        assert!(group.rules.iter().all(|r| r.category == "Imports"));
        assert!(group.rules[1].tags.is_empty());
    }

    #[test]
    fn blank_category_is_rejected() {
        let json = r#"{"category": "  ", "rules": []}"#;
        let err = RuleGroup::parse("blank.json", json).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyCategory { .. }));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{"category": "X", "rules": [], "extra": 1}"#;
        let err = RuleGroup::parse("extra.json", json).unwrap_err();
        assert!(err.to_string().contains("extra.json"));
    }
}
