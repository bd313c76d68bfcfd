//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol, exposing one tool per Noun Project API capability.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per
//! tool; the ToolRouter is built dynamically in `domains/tools/router.rs`
//! and every route shares one `NounProjectClient`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::api::NounProjectClient;
use crate::domains::tools::build_tool_router;

/// The main MCP server handler.
///
/// Implements the `ServerHandler` trait from rmcp; tool calls are routed
/// by the `#[tool_handler]` macro through the dynamic router. Construction
/// fails on invalid credentials, so a misconfigured process never
/// registers any tool.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared upstream API client.
    client: Arc<NounProjectClient>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built from the
    /// configured credentials.
    pub fn new(config: Config) -> super::error::Result<Self> {
        let config = Arc::new(config);
        let client = Arc::new(NounProjectClient::new(config.credentials.clone())?);

        Ok(Self {
            tool_router: build_tool_router::<Self>(client.clone()),
            client,
            config,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared API client.
    pub fn client(&self) -> &Arc<NounProjectClient> {
        &self.client
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "This server exposes The Noun Project icon API: search icons, \
                 look up icons and collections, autocomplete search terms, \
                 check API usage, and fetch download URLs."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
