//! MCP tool server over the rule service.
//!
//! Each tool answers with the operation's envelope serialized as pretty JSON.
//! Envelopes with status `error` or `validation_error` are flagged as tool
//! errors so clients can tell them apart without parsing the body.

use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
        ToolsCapability,
    },
    tool, tool_handler, tool_router,
    transport::stdio,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::{debug, info};

use jcs_model::Envelope;
use jcs_service::{AnalyzeCodeRequest, QueryRulesRequest, RuleDetailsRequest, RuleService};

pub const SERVER_NAME: &str = "java-code-standards";

#[derive(Debug, Deserialize, JsonSchema)]
struct GetJavaRulesParams {
    /// Categories to include (e.g., 'DTO', 'Formatting'). Omit for all categories.
    categories: Option<Vec<String>>,
    /// Tags to include (e.g., 'lombok', 'switch'). Omit for all tags.
    tags: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct GetRuleDetailsParams {
    /// Rule IDs to fetch (e.g., 'DTO_001', 'FORMAT_002'). At least one is required.
    rule_ids: Vec<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct AnalyzeJavaCodeParams {
    /// Java source code to analyze
    code: String,
}

/// Java code standards MCP server
#[derive(Clone)]
pub struct JavaStandardsServer {
    service: RuleService,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl JavaStandardsServer {
    pub fn new(service: RuleService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        description = "Get Java coding rules filtered by categories and/or tags. Rules must match one of the given categories AND carry one of the given tags. Omit both filters to get every rule."
    )]
    async fn get_java_rules(
        &self,
        params: Parameters<GetJavaRulesParams>,
    ) -> Result<CallToolResult, McpError> {
        let GetJavaRulesParams { categories, tags } = params.0;
        debug!(?categories, ?tags, "get_java_rules");
        let envelope = self
            .service
            .query_rules(&QueryRulesRequest::new(categories, tags));
        envelope_result(&envelope)
    }

    #[tool(
        description = "Get full details (description, wrong and correct examples) for specific rules by ID. Results follow the order of the requested IDs."
    )]
    async fn get_rule_details(
        &self,
        params: Parameters<GetRuleDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let GetRuleDetailsParams { rule_ids } = params.0;
        debug!(?rule_ids, "get_rule_details");
        let envelope = self
            .service
            .get_rule_details(&RuleDetailsRequest::new(rule_ids));
        envelope_result(&envelope)
    }

    #[tool(
        description = "List every rule category with its rule count and the IDs and names of its rules."
    )]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        debug!("list_categories");
        envelope_result(&self.service.list_categories())
    }

    #[tool(description = "List every rule tag with its rule count and the IDs and names of its rules.")]
    async fn list_tags(&self) -> Result<CallToolResult, McpError> {
        debug!("list_tags");
        envelope_result(&self.service.list_tags())
    }

    #[tool(
        description = "Analyze Java code against the coding standards. Static analysis is not available yet; the response describes the planned features."
    )]
    async fn analyze_java_code(
        &self,
        params: Parameters<AnalyzeJavaCodeParams>,
    ) -> Result<CallToolResult, McpError> {
        let AnalyzeJavaCodeParams { code } = params.0;
        debug!(chars = code.chars().count(), "analyze_java_code");
        let envelope = self.service.analyze_code(&AnalyzeCodeRequest::new(code));
        envelope_result(&envelope)
    }
}

#[tool_handler]
impl ServerHandler for JavaStandardsServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                ..Default::default()
            },
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                title: Some("Java Code Standards Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Java coding standards catalog. Use list_categories or list_tags to \
                 discover the vocabulary, get_java_rules to filter rules, and \
                 get_rule_details for full examples."
                    .to_string(),
            ),
        }
    }
}

fn envelope_result(envelope: &Envelope) -> Result<CallToolResult, McpError> {
    let content = serde_json::to_string_pretty(envelope)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {e}"), None))?;
    if envelope.is_failure() {
        debug!(status = envelope.status(), "tool call rejected");
        Ok(CallToolResult::error(vec![Content::text(content)]))
    } else {
        Ok(CallToolResult::success(vec![Content::text(content)]))
    }
}

/// Serve the tools on stdio until the client disconnects.
///
/// # Errors
///
/// Returns an error if the transport fails to initialize or closes abnormally.
pub async fn serve_stdio(service: RuleService) -> anyhow::Result<()> {
    let server = JavaStandardsServer::new(service);
    let running = server.serve(stdio()).await?;
    info!("server ready, waiting for requests on stdio");
    running.waiting().await?;
    info!("server shutdown complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use jcs_catalog::RuleCatalog;

    use super::*;

    fn server() -> JavaStandardsServer {
        let catalog = RuleCatalog::embedded().expect("embedded catalog");
        JavaStandardsServer::new(RuleService::new(Arc::new(catalog)))
    }

    #[test]
    fn advertises_tools() {
        let info = server().get_info();
        assert_eq!(info.server_info.name, SERVER_NAME);
        assert!(info.capabilities.tools.is_some());
    }

    #[tokio::test]
    async fn query_succeeds() {
        let params = GetJavaRulesParams {
            categories: Some(vec!["DTO".to_string()]),
            tags: None,
        };
        let result = server()
            .get_java_rules(Parameters(params))
            .await
            .expect("tool call");
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.content.len(), 1);
    }

    #[tokio::test]
    async fn unknown_category_is_a_tool_error() {
        let params = GetJavaRulesParams {
            categories: Some(vec!["NoSuchCategory".to_string()]),
            tags: None,
        };
        let result = server()
            .get_java_rules(Parameters(params))
            .await
            .expect("tool call");
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn empty_rule_ids_is_a_tool_error() {
        let params = GetRuleDetailsParams { rule_ids: vec![] };
        let result = server()
            .get_rule_details(Parameters(params))
            .await
            .expect("tool call");
        assert_eq!(result.is_error, Some(true));
    }

    #[tokio::test]
    async fn listings_succeed() {
        let server = server();
        let categories = server.list_categories().await.expect("tool call");
        let tags = server.list_tags().await.expect("tool call");
        assert_ne!(categories.is_error, Some(true));
        assert_ne!(tags.is_error, Some(true));
    }

    #[tokio::test]
    async fn analysis_preview_is_not_an_error() {
        let params = AnalyzeJavaCodeParams {
            code: "class A {}".to_string(),
        };
        let result = server()
            .analyze_java_code(Parameters(params))
            .await
            .expect("tool call");
        assert_ne!(result.is_error, Some(true));

        let blank = AnalyzeJavaCodeParams {
            code: "   ".to_string(),
        };
        let result = server()
            .analyze_java_code(Parameters(blank))
            .await
            .expect("tool call");
        assert_eq!(result.is_error, Some(true));
    }
}
