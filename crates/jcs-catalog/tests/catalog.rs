//! Tests for the embedded catalog and the query engine.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use jcs_catalog::{CatalogError, CatalogSource, RuleCatalog, load_dir};

fn catalog() -> RuleCatalog {
    RuleCatalog::embedded().expect("embedded catalog should load")
}

fn unique_temp_dir(name: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!(
        "jcs-catalog-{}-{}-{}",
        name,
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write(path: &Path, contents: &str) {
    fs::write(path, contents).unwrap();
}

// =============================================================================
// Catalog contents
// =============================================================================

#[test]
fn embedded_catalog_has_all_groups_in_order() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 16);
    let ids = catalog.rule_ids();
    assert_eq!(ids.first().map(String::as_str), Some("FORMAT_001"));
    assert_eq!(ids.last().map(String::as_str), Some("DTO_003"));

    let first_of_each = [
        "FORMAT_001",
        "IMPORT_001",
        "LOOKUP_001",
        "VAR_001",
        "TIME_001",
        "DTO_001",
    ];
    let positions: Vec<usize> = first_of_each
        .iter()
        .map(|id| {
            ids.iter()
                .position(|x| x.as_str() == *id)
                .expect("id present")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn distinct_categories_are_sorted() {
    let catalog = catalog();
    assert_eq!(
        catalog.distinct_categories(),
        [
            "DTO",
            "Formatting",
            "Imports",
            "Lookup Logic",
            "Time and Date",
            "Variables"
        ]
    );
}

#[test]
fn distinct_tags_are_sorted_and_unique() {
    let catalog = catalog();
    let tags = catalog.distinct_tags();
    assert!(tags.windows(2).all(|w| w[0] < w[1]));
    for tag in ["lombok", "naming", "structure", "static-import", "switch"] {
        assert!(tags.iter().any(|t| t == tag), "missing tag {tag}");
    }
    let flattened: HashSet<&str> = catalog
        .rules()
        .iter()
        .flat_map(|r| r.tags.iter().map(String::as_str))
        .collect();
    assert_eq!(tags.len(), flattened.len());
}

#[test]
fn every_id_resolves_to_exactly_one_rule() {
    let catalog = catalog();
    let mut seen = HashSet::new();
    for rule in catalog.rules() {
        let found = catalog.by_id(&rule.id).expect("id resolves");
        assert!(std::ptr::eq(found, rule));
        assert!(seen.insert(found.id.clone()));
    }
}

// =============================================================================
// Query engine
// =============================================================================

#[test]
fn filter_by_category_returns_only_members() {
    let catalog = catalog();
    for category in catalog.distinct_categories() {
        let rules = catalog.filter_by_category(category);
        assert!(!rules.is_empty());
        assert!(rules.iter().all(|r| r.category.eq_ignore_ascii_case(category)));
        let upper = catalog.filter_by_category(&category.to_uppercase());
        assert_eq!(rules, upper);
    }
}

#[test]
fn filter_by_tag_returns_only_tagged_rules() {
    let catalog = catalog();
    for tag in catalog.distinct_tags() {
        let rules = catalog.filter_by_tag(tag);
        assert!(!rules.is_empty(), "tag {tag} matched nothing");
        assert!(rules.iter().all(|r| r.has_tag(tag)));
    }
}

#[test]
fn dto_category_has_three_rules() {
    let catalog = catalog();
    let ids: Vec<&str> = catalog
        .filter_by_category("DTO")
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, ["DTO_001", "DTO_002", "DTO_003"]);
}

#[test]
fn dto_with_lombok_tag() {
    let catalog = catalog();
    let categories = vec!["dto".to_string()];
    let tags = vec!["lombok".to_string()];
    let ids: Vec<&str> = catalog
        .filter_by_categories_and_tags(Some(&categories), Some(&tags))
        .into_iter()
        .map(|r| r.id.as_str())
        .collect();
    assert_eq!(ids, ["DTO_001", "DTO_003"]);
}

#[test]
fn no_filters_returns_full_catalog_in_order() {
    let catalog = catalog();
    let all = catalog.filter_by_categories_and_tags(None, None);
    let expected: Vec<&jcs_model::Rule> = catalog.rules().iter().collect();
    assert_eq!(all, expected);
}

#[test]
fn disjoint_filters_match_nothing() {
    let catalog = catalog();
    let categories = vec!["DTO".to_string()];
    let tags = vec!["switch".to_string()];
    assert!(
        catalog
            .filter_by_categories_and_tags(Some(&categories), Some(&tags))
            .is_empty()
    );
}

// =============================================================================
// Loading from a directory
// =============================================================================

const GROUP_B: &str = r#"{
  "category": "Beta",
  "rules": [
    {"id": "B_1", "tags": ["shared"], "name": "Beta one", "description": "d",
     "wrong_example": "w", "correct_example": "c"}
  ]
}"#;

const GROUP_A: &str = r#"{
  "category": "Alpha",
  "rules": [
    {"id": "A_1", "tags": ["shared", "alpha"], "name": "Alpha one", "description": "d",
     "wrong_example": "w", "correct_example": "c"}
  ]
}"#;

#[test]
fn directory_groups_load_in_file_name_order() {
    let dir = unique_temp_dir("order");
    write(&dir.join("20-beta.json"), GROUP_B);
    write(&dir.join("10-alpha.json"), GROUP_A);
    write(&dir.join("README.md"), "ignored");

    let catalog = load_dir(&dir).expect("load rules directory");
    assert_eq!(catalog.rule_ids(), vec!["A_1", "B_1"]);
    assert_eq!(catalog.distinct_tags(), ["alpha", "shared"]);

    let via_source = CatalogSource::Directory(dir.clone())
        .load()
        .expect("load through source");
    assert_eq!(via_source.len(), 2);
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn duplicate_ids_across_files_fail_the_load() {
    let dir = unique_temp_dir("dupe");
    write(&dir.join("10-alpha.json"), GROUP_A);
    write(&dir.join("20-alpha-again.json"), GROUP_A);

    let err = load_dir(&dir).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateRuleId { .. }));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn empty_directory_is_an_error() {
    let dir = unique_temp_dir("empty");
    let err = load_dir(&dir).unwrap_err();
    assert!(matches!(err, CatalogError::NoGroups { .. }));
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn missing_directory_is_an_error() {
    let dir = unique_temp_dir("missing").join("nope");
    let err = load_dir(&dir).unwrap_err();
    assert!(matches!(err, CatalogError::DirectoryNotFound { .. }));
}

#[test]
fn malformed_group_names_the_file() {
    let dir = unique_temp_dir("malformed");
    write(&dir.join("10-bad.json"), "{ not json");
    let err = load_dir(&dir).unwrap_err();
    assert!(err.to_string().contains("10-bad.json"), "{err}");
    fs::remove_dir_all(&dir).ok();
}

#[test]
fn explicit_directory_wins() {
    let dir = PathBuf::from("/tmp/rules");
    assert_eq!(
        CatalogSource::resolve(Some(dir.clone())),
        CatalogSource::Directory(dir)
    );
}
