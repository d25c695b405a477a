//! Rules directory resolution.

use std::path::PathBuf;

/// Environment variable pointing at a directory of rule-group JSON files.
pub const RULES_DIR_ENV_VAR: &str = "JCS_RULES_DIR";

/// The rules directory configured through [`RULES_DIR_ENV_VAR`], if set and non-empty.
pub fn rules_dir_from_env() -> Option<PathBuf> {
    std::env::var_os(RULES_DIR_ENV_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
