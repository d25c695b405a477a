//! CLI argument definitions for the `jcs` binary.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jcs",
    version,
    about = "Java code standards - MCP tool server and rule catalog queries",
    long_about = "Serve the Java coding standards catalog as MCP tools, or query it directly.\n\n\
                  One-shot commands print the same JSON envelope the tools return and exit\n\
                  with status 1 when the envelope reports an error."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Load rule groups from this directory instead of the built-in catalog
    /// (falls back to JCS_RULES_DIR).
    #[arg(long = "rules-dir", value_name = "DIR", global = true)]
    pub rules_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the MCP tool server (stdio unless --http is given).
    Serve(ServeArgs),

    /// Query rules by category and/or tag.
    Rules(RulesArgs),

    /// Show full details for rules by ID.
    Rule(RuleArgs),

    /// List categories with their rules.
    Categories,

    /// List tags with their rules.
    Tags,

    /// Analyze Java source code (preview only).
    Analyze(AnalyzeArgs),
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Serve streamable HTTP on this address (e.g. 0.0.0.0:8080) instead of stdio.
    #[arg(long = "http", value_name = "ADDR")]
    pub http: Option<SocketAddr>,
}

#[derive(Parser)]
pub struct RulesArgs {
    /// Category to include; repeat for several (any match).
    #[arg(long = "category", short = 'c', value_name = "CATEGORY")]
    pub categories: Vec<String>,

    /// Tag to include; repeat for several (any match).
    #[arg(long = "tag", short = 't', value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Parser)]
pub struct RuleArgs {
    /// Rule IDs, answered in the given order.
    #[arg(value_name = "RULE_ID")]
    pub rule_ids: Vec<String>,
}

#[derive(Parser)]
pub struct AnalyzeArgs {
    /// Java source file (reads stdin when omitted).
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
