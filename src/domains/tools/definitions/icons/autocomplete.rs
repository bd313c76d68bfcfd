//! Search-term autocomplete tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{error_result, success_result};
use crate::api::{AutocompleteParams, NounProjectClient};

/// Autocomplete tool implementation.
#[derive(Debug, Clone)]
pub struct IconAutocompleteTool;

impl IconAutocompleteTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "icon_autocomplete";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get autocomplete suggestions for icon search terms. Useful for helping users discover related terms.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &NounProjectClient,
        params: &AutocompleteParams,
    ) -> CallToolResult {
        info!("Autocompleting search term: {}", params.query);
        match client.icon_autocomplete(params).await {
            Ok(body) => success_result(&body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<AutocompleteParams>(),
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
                let params: AutocompleteParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}
