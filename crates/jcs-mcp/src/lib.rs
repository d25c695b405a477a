//! Host process for the Java code standards catalog.
//!
//! - [`server`]: MCP tool server exposing the catalog operations
//! - [`http`]: streamable HTTP transport and liveness endpoint
//! - [`commands`]: one-shot command implementations used by the `jcs` binary
//! - [`logging`]: `tracing` subscriber setup

pub mod commands;
pub mod http;
pub mod logging;
pub mod server;

pub use http::serve_http;
pub use server::{JavaStandardsServer, serve_stdio};
