//! Icon search tool.
//!
//! Searches The Noun Project icon catalog with style, weight, and
//! paging filters.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{error_result, success_result};
use crate::api::{NounProjectClient, SearchIconsParams};

/// Icon search tool implementation.
#[derive(Debug, Clone)]
pub struct SearchIconsTool;

impl SearchIconsTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "search_icons";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Search for icons on The Noun Project. Supports filtering by style (solid/line), line weight, public domain status, and more.";

    /// Execute the tool logic.
    pub async fn execute(client: &NounProjectClient, params: &SearchIconsParams) -> CallToolResult {
        info!("Searching icons matching: {}", params.query);
        match client.search_icons(params).await {
            Ok(body) => success_result(&body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<SearchIconsParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for the dynamic router.
    pub fn create_route<S>(client: Arc<NounProjectClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            let args = ctx.arguments.clone().unwrap_or_default();
            async move {
                let params: SearchIconsParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}
