//! Case normalization properties.

use jcs_catalog::RuleCatalog;
use jcs_validate::RequestValidator;
use proptest::prelude::*;

fn flip_case(value: &str, mask: u64) -> String {
    value
        .chars()
        .enumerate()
        .map(|(i, c)| {
            if (mask >> (i % 64)) & 1 == 1 {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn mixed_case_rule_ids_normalize(index in 0..16usize, mask in any::<u64>()) {
        let catalog = RuleCatalog::embedded().expect("embedded catalog");
        let validator = RequestValidator::new(&catalog);
        let canonical = catalog.rules()[index].id.clone();
        let normalized = validator
            .normalize_rule_ids(&[flip_case(&canonical, mask)])
            .expect("known id");
        prop_assert_eq!(normalized, vec![canonical]);
    }

    #[test]
    fn mixed_case_tags_normalize_idempotently(index in 0..20usize, mask in any::<u64>()) {
        let catalog = RuleCatalog::embedded().expect("embedded catalog");
        let validator = RequestValidator::new(&catalog);
        let tags = catalog.distinct_tags();
        let canonical = tags[index % tags.len()].clone();
        let once = validator
            .normalize_tags(&[flip_case(&canonical, mask)])
            .expect("known tag");
        let twice = validator.normalize_tags(&once).expect("still known");
        prop_assert_eq!(&once, &vec![canonical]);
        prop_assert_eq!(once, twice);
    }
}
