//! Noun Project tool definitions, one file per tool.

pub mod autocomplete;
pub mod common;
pub mod download;
pub mod get_collection;
pub mod get_icon;
pub mod search_icons;
pub mod usage;

pub use autocomplete::IconAutocompleteTool;
pub use download::GetDownloadUrlTool;
pub use get_collection::GetCollectionTool;
pub use get_icon::GetIconTool;
pub use search_icons::SearchIconsTool;
pub use usage::CheckUsageTool;
