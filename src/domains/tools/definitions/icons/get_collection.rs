//! Collection lookup tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{error_result, success_result};
use crate::api::{GetCollectionParams, NounProjectClient};

/// Collection lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetCollectionTool;

impl GetCollectionTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_collection";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "Get a collection by ID. Returns collection metadata and the icons it contains.";

    /// Execute the tool logic.
    pub async fn execute(
        client: &NounProjectClient,
        params: &GetCollectionParams,
    ) -> CallToolResult {
        info!("Fetching collection {}", params.collection_id);
        match client.get_collection(params).await {
            Ok(body) => success_result(&body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<GetCollectionParams>(),
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
                let params: GetCollectionParams =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(Self::execute(&client, &params).await)
            }
            .boxed()
        })
    }
}
