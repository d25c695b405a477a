//! Java code standards CLI and MCP server.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::Context;
use clap::{ColorChoice, Parser};
use jcs_catalog::CatalogSource;
use jcs_mcp::commands::{print_envelope, run_analyze, run_rule, run_rules};
use jcs_mcp::logging::{LogConfig, LogFormat, init_logging};
use jcs_mcp::{serve_http, serve_stdio};
use jcs_service::RuleService;
use tracing::error;
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(error) => {
            error!("{error:#}");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> anyhow::Result<i32> {
    let source = CatalogSource::resolve(cli.rules_dir);
    let catalog = source
        .load()
        .with_context(|| format!("failed to load rule catalog from {source}"))?;
    let service = RuleService::new(Arc::new(catalog));

    match cli.command {
        Command::Serve(args) => {
            let runtime = tokio::runtime::Runtime::new().context("failed to start runtime")?;
            match args.http {
                Some(addr) => runtime.block_on(serve_http(service, addr))?,
                None => runtime.block_on(serve_stdio(service))?,
            }
            Ok(0)
        }
        Command::Rules(args) => print_envelope(&run_rules(&service, args.categories, args.tags)),
        Command::Rule(args) => print_envelope(&run_rule(&service, args.rule_ids)),
        Command::Categories => print_envelope(&service.list_categories()),
        Command::Tags => print_envelope(&service.list_tags()),
        Command::Analyze(args) => print_envelope(&run_analyze(&service, args.file.as_deref())?),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    let format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    let mut config = config
        .with_format(format)
        .with_log_file(cli.log_file.clone());
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
