//! Noun Project MCP Server
//!
//! This crate exposes The Noun Project icon-search REST API as a set of
//! MCP (Model Context Protocol) tools served over stdio. Each tool
//! invocation becomes exactly one OAuth 1.0a-signed HTTP GET against
//! `https://api.thenounproject.com`; the JSON body (or a descriptive
//! error) is returned to the caller unmodified.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the main server, and the
//!   stdio transport
//! - **api**: The upstream client layer — request signer, typed
//!   parameter shapes, and one client method per API capability
//! - **domains::tools**: The six MCP tool definitions and the dynamic
//!   tool router
//!
//! # Example
//!
//! ```rust,no_run
//! use noun_project_mcp::core::{Config, McpServer, StdioTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let server = McpServer::new(config)?;
//!     StdioTransport::run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
