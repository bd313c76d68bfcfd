//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Each tool wraps one capability of The Noun Project API.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/icons/` (e.g., `my_tool.rs`)
//! 2. Define params in `api/params.rs`, the client method, and the tool
//! 3. Export in `definitions/icons/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`
//!
//! **No need to modify `server.rs`!** The router is built dynamically.

pub mod definitions;
pub mod router;

pub use router::build_tool_router;
