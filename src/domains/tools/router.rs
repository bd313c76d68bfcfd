//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Each tool knows how to create its own route; this module only wires
//! them together and hands every route a shared handle on the API client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::api::NounProjectClient;

use super::definitions::{
    CheckUsageTool, GetCollectionTool, GetDownloadUrlTool, GetIconTool, IconAutocompleteTool,
    SearchIconsTool,
};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<NounProjectClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(SearchIconsTool::create_route(client.clone()))
        .with_route(GetIconTool::create_route(client.clone()))
        .with_route(GetCollectionTool::create_route(client.clone()))
        .with_route(IconAutocompleteTool::create_route(client.clone()))
        .with_route(CheckUsageTool::create_route(client.clone()))
        .with_route(GetDownloadUrlTool::create_route(client))
}
