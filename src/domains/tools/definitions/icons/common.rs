//! Helpers shared across the Noun Project tools.

use rmcp::model::{CallToolResult, Content};
use tracing::warn;

/// Wrap a successful upstream JSON body as a text content block.
///
/// The body is passed through verbatim (pretty-printed, not reshaped).
pub fn success_result(body: &serde_json::Value) -> CallToolResult {
    let text = serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string());
    CallToolResult::success(vec![Content::text(text)])
}

/// Create an error-flagged result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    warn!("{}", message);
    CallToolResult::error(vec![Content::text(message.to_string())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::RawContent;

    #[test]
    fn test_success_result_carries_body_text() {
        let result = success_result(&serde_json::json!({"icons": []}));
        assert!(!result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("icons"));
        } else {
            panic!("expected text content");
        }
    }

    #[test]
    fn test_error_result_sets_flag() {
        let result = error_result("search_icons returned HTTP 401");
        assert!(result.is_error.unwrap_or(false));
        if let RawContent::Text(text) = &result.content[0].raw {
            assert!(text.text.contains("search_icons"));
            assert!(text.text.contains("401"));
        } else {
            panic!("expected text content");
        }
    }
}
