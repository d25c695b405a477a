use std::collections::HashMap;

/// Folds a value for case-insensitive comparison.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Maps case-folded names back to their canonical spelling.
///
/// The first spelling inserted for a folded key wins.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveSet {
    map: HashMap<String, String>,
}

impl CaseInsensitiveSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for name in names {
            let name = name.as_ref();
            map.entry(fold_case(name))
                .or_insert_with(|| name.to_string());
        }
        Self { map }
    }

    /// Returns the canonical spelling for `name`, if known.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.map.get(&fold_case(name)).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&fold_case(name))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Canonical spellings, sorted ascending.
    pub fn sorted(&self) -> Vec<String> {
        let mut names: Vec<String> = self.map.values().cloned().collect();
        names.sort();
        names
    }
}
