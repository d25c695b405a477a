//! One-shot command implementations.
//!
//! Each command produces the same envelope the MCP tool would; the binary
//! prints it as JSON on stdout.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use jcs_model::Envelope;
use jcs_service::{AnalyzeCodeRequest, QueryRulesRequest, RuleDetailsRequest, RuleService};

/// Query rules. An empty filter list means "no constraint" on that dimension.
pub fn run_rules(service: &RuleService, categories: Vec<String>, tags: Vec<String>) -> Envelope {
    let request = QueryRulesRequest::new(non_empty(categories), non_empty(tags));
    service.query_rules(&request)
}

pub fn run_rule(service: &RuleService, rule_ids: Vec<String>) -> Envelope {
    service.get_rule_details(&RuleDetailsRequest::new(rule_ids))
}

/// Analyze code read from `file`, or from stdin when no file is given.
///
/// # Errors
///
/// Returns an error if the source cannot be read.
pub fn run_analyze(service: &RuleService, file: Option<&Path>) -> Result<Envelope> {
    let code = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("read source file {}", path.display()))?,
        None => {
            let mut code = String::new();
            io::stdin()
                .read_to_string(&mut code)
                .context("read source from stdin")?;
            code
        }
    };
    Ok(service.analyze_code(&AnalyzeCodeRequest::new(code)))
}

/// Write the envelope as pretty JSON followed by a newline.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn write_envelope<W: Write>(mut writer: W, envelope: &Envelope) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, envelope).context("serialize envelope")?;
    writeln!(writer)?;
    Ok(())
}

/// Print the envelope on stdout and return the process exit code for it.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn print_envelope(envelope: &Envelope) -> Result<i32> {
    let stdout = io::stdout();
    write_envelope(stdout.lock(), envelope)?;
    Ok(exit_code(envelope))
}

/// 0 for `ok` and `in_development`, 1 for `error` and `validation_error`.
pub fn exit_code(envelope: &Envelope) -> i32 {
    i32::from(envelope.is_failure())
}

fn non_empty(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() { None } else { Some(values) }
}
