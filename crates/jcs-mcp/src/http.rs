//! Streamable HTTP transport with a liveness endpoint.
//!
//! Routes:
//! - `GET /alive`: `{"status":"alive"}`
//! - `/mcp`: MCP streamable HTTP endpoint, one server instance per session

use std::net::SocketAddr;

use axum::{Json, Router, routing::get};
use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::info;

use jcs_service::RuleService;

use crate::server::JavaStandardsServer;

/// Path the MCP endpoint is mounted under.
pub const MCP_PATH: &str = "/mcp";

#[derive(Debug, Serialize)]
struct AliveResponse {
    status: &'static str,
}

async fn alive() -> Json<AliveResponse> {
    Json(AliveResponse { status: "alive" })
}

/// Router serving the liveness probe and the MCP endpoint.
pub fn router(service: RuleService) -> Router {
    let mcp = StreamableHttpService::new(
        move || Ok(JavaStandardsServer::new(service.clone())),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );
    Router::new()
        .route("/alive", get(alive))
        .nest_service(MCP_PATH, mcp)
}

/// Serve over HTTP on `addr` until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails.
pub async fn serve_http(service: RuleService, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(
        addr = %listener.local_addr()?,
        path = MCP_PATH,
        "server ready, waiting for requests on http"
    );
    axum::serve(listener, router(service))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    info!("server shutdown complete");
    Ok(())
}
