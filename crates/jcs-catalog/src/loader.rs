//! Catalog construction from embedded data or a rules directory.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::RuleCatalog;
use crate::embedded::EMBEDDED_GROUPS;
use crate::error::{CatalogError, Result};
use crate::group::RuleGroup;
use crate::paths::rules_dir_from_env;

impl RuleCatalog {
    /// The catalog compiled into the binary.
    pub fn embedded() -> Result<Self> {
        load_embedded()
    }
}

/// Build the catalog from the embedded rule groups.
pub fn load_embedded() -> Result<RuleCatalog> {
    let groups = EMBEDDED_GROUPS
        .iter()
        .map(|(name, json)| RuleGroup::parse(name, json))
        .collect::<Result<Vec<_>>>()?;
    RuleCatalog::from_groups(groups)
}

/// Build the catalog from every `*.json` file in `dir`, in file-name order.
pub fn load_dir(dir: &Path) -> Result<RuleCatalog> {
    if !dir.is_dir() {
        return Err(CatalogError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir)
        .map_err(|e| CatalogError::io(dir, e))?
        .map(|entry| entry.map(|e| e.path()));
    let mut files = json_files(dir, entries)?;
    files.sort();

    if files.is_empty() {
        return Err(CatalogError::NoGroups {
            path: dir.to_path_buf(),
        });
    }

    let mut groups = Vec::with_capacity(files.len());
    for path in &files {
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let group = RuleGroup::parse(&path.display().to_string(), &json)?;
        debug!(
            file = %path.display(),
            category = %group.category,
            rules = group.rules.len(),
            "loaded rule group"
        );
        groups.push(group);
    }
    RuleCatalog::from_groups(groups)
}

/// Group files among `entries`. An unreadable entry fails the whole listing.
fn json_files(
    dir: &Path,
    entries: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| CatalogError::io(dir, e))?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Where the catalog's seed data comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Embedded,
    Directory(PathBuf),
}

impl CatalogSource {
    /// Resolve the source: an explicit directory wins over
    /// [`RULES_DIR_ENV_VAR`](crate::RULES_DIR_ENV_VAR), which wins over the
    /// embedded groups.
    pub fn resolve(explicit_dir: Option<PathBuf>) -> Self {
        match explicit_dir.or_else(rules_dir_from_env) {
            Some(dir) => CatalogSource::Directory(dir),
            None => CatalogSource::Embedded,
        }
    }

    pub fn load(&self) -> Result<RuleCatalog> {
        let catalog = match self {
            CatalogSource::Embedded => load_embedded()?,
            CatalogSource::Directory(dir) => load_dir(dir)?,
        };
        info!(
            source = %self,
            rules = catalog.len(),
            categories = catalog.distinct_categories().len(),
            tags = catalog.distinct_tags().len(),
            "rule catalog loaded"
        );
        Ok(catalog)
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Embedded => f.write_str("embedded"),
            CatalogSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}
