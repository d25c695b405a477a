//! Embedded rule groups.
//!
//! All groups are embedded at compile time using `include_str!()`. The
//! order of [`EMBEDDED_GROUPS`] is the catalog order.

/// Formatting rules (line length, method chains).
pub const FORMATTING: &str = include_str!("../data/01-formatting.json");

/// Import rules (static, wildcard, ordering).
pub const IMPORTS: &str = include_str!("../data/02-imports.json");

/// Lookup logic rules.
pub const LOOKUP_LOGIC: &str = include_str!("../data/03-lookup-logic.json");

/// Variable declaration and naming rules.
pub const VARIABLES: &str = include_str!("../data/04-variables.json");

/// Time and date type rules.
pub const TIME_AND_DATE: &str = include_str!("../data/05-time-and-date.json");

/// DTO structure rules.
pub const DTO: &str = include_str!("../data/06-dto.json");

/// `(source name, document)` pairs in catalog order.
pub const EMBEDDED_GROUPS: &[(&str, &str)] = &[
    ("01-formatting.json", FORMATTING),
    ("02-imports.json", IMPORTS),
    ("03-lookup-logic.json", LOOKUP_LOGIC),
    ("04-variables.json", VARIABLES),
    ("05-time-and-date.json", TIME_AND_DATE),
    ("06-dto.json", DTO),
];
