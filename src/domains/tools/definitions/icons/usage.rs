//! API usage reporting tool.
//!
//! `/v2/oauth/usage` takes no parameters; the tool accepts an empty
//! argument object and reports the monthly quota for the configured
//! consumer key.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use tracing::info;

use super::common::{error_result, success_result};
use crate::api::{CheckUsageParams, NounProjectClient};

/// Usage reporting tool implementation.
#[derive(Debug, Clone)]
pub struct CheckUsageTool;

impl CheckUsageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "check_usage";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Check current API usage and limits. Returns monthly quota information including usage count and remaining requests.";

    /// Execute the tool logic.
    pub async fn execute(client: &NounProjectClient) -> CallToolResult {
        info!("Checking API usage");
        match client.check_usage().await {
            Ok(body) => success_result(&body),
            Err(e) => error_result(&e.to_string()),
        }
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CheckUsageParams>(),
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
        ToolRoute::new_dyn(Self::to_tool(), move |_ctx: ToolCallContext<'_, S>| {
            let client = client.clone();
            async move { Ok(Self::execute(&client).await) }.boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_metadata() {
        let tool = CheckUsageTool::to_tool();
        assert_eq!(tool.name.as_ref(), "check_usage");
    }
}
