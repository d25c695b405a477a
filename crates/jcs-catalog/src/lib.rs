//! The Java code standards rule catalog.
//!
//! # Module Organization
//!
//! - [`embedded`]: rule groups compiled into the binary
//! - [`group`]: parsing of a single rule-group document
//! - [`catalog`]: the immutable [`RuleCatalog`] and its derived vocabularies
//! - [`query`]: pure filter and lookup operations over the catalog
//! - [`loader`]: building a catalog from embedded data or a directory
//! - [`paths`]: rules directory resolution
//!
//! # Example
//!
//! ```rust,ignore
//! use jcs_catalog::RuleCatalog;
//!
//! let catalog = RuleCatalog::embedded()?;
//! for rule in catalog.filter_by_tag("naming") {
//!     println!("{} {}", rule.id, rule.name);
//! }
//! ```

#![deny(unsafe_code)]

pub mod catalog;
pub mod embedded;
pub mod error;
pub mod group;
pub mod loader;
pub mod paths;
pub mod query;

pub use catalog::RuleCatalog;
pub use error::{CatalogError, Result};
pub use group::RuleGroup;
pub use loader::{CatalogSource, load_dir, load_embedded};
pub use paths::{RULES_DIR_ENV_VAR, rules_dir_from_env};
