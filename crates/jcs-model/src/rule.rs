use serde::{Deserialize, Serialize};

use crate::lookup::fold_case;

/// One coding-standard entry.
///
/// Rules are only ever handed out by reference from the catalog; nothing
/// mutates a record after the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Stable identifier in canonical casing (e.g. `VAR_001`).
    pub id: String,
    pub category: String,
    /// Ordered tags; may be empty.
    #[serde(default)]
    pub tags: Vec<String>,
    pub name: String,
    pub description: String,
    /// Code that violates the rule.
    pub wrong_example: String,
    /// Code that follows the rule.
    pub correct_example: String,
}

impl Rule {
    /// Case-insensitive category comparison.
    pub fn in_category(&self, category: &str) -> bool {
        fold_case(&self.category) == fold_case(category)
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = fold_case(tag);
        self.tags.iter().any(|t| fold_case(t) == wanted)
    }

    pub fn summary(&self) -> RuleSummary {
        RuleSummary {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// The `(id, name)` pair used when listing rules under a category or tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSummary {
    pub id: String,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> Rule {
        Rule {
            id: "DTO_001".to_string(),
            category: "DTO".to_string(),
            tags: vec!["lombok".to_string(), "Structure".to_string()],
            name: "No Record DTOs".to_string(),
            description: "Records are forbidden for DTOs.".to_string(),
            wrong_example: "public record A() {}".to_string(),
            correct_example: "@Value public class ADto {}".to_string(),
        }
    }

    #[test]
    fn category_match_ignores_case() {
        let rule = rule();
        assert!(rule.in_category("dto"));
        assert!(rule.in_category("DTO"));
        assert!(!rule.in_category("DTOs"));
    }

    #[test]
    fn tag_match_ignores_case() {
        let rule = rule();
        assert!(rule.has_tag("LOMBOK"));
        assert!(rule.has_tag("structure"));
        assert!(!rule.has_tag("jackson"));
    }

    #[test]
    fn missing_tags_deserialize_as_empty() {
        let json = r#"{"id":"X_1","category":"X","name":"n","description":"d","wrong_example":"w","correct_example":"c"}"#;
        let rule: Rule = serde_json::from_str(json).expect("deserialize rule");
        assert!(rule.tags.is_empty());
    }
}
