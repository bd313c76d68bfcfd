//! Transport layer for the MCP server.
//!
//! The tool-calling protocol runs over standard input/output: stdout
//! carries protocol frames, so all logging goes to stderr. The rmcp SDK
//! owns the server loop; this module only wraps its lifecycle.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
