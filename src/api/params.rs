//! Typed parameter shapes for the six Noun Project operations.
//!
//! Each struct doubles as the MCP tool input schema (via `JsonSchema`)
//! and the argument to the matching client operation. Validation of the
//! fixed-enumeration fields happens here, before any request is built;
//! out-of-range values fail with a clear message instead of being
//! forwarded upstream.

use schemars::JsonSchema;
use serde::Deserialize;

use super::error::ApiError;

/// Allowed `thumbnail_size` values, in pixels.
const THUMBNAIL_SIZES: [u16; 3] = [42, 84, 200];

/// PNG download size bounds, in pixels.
const MIN_PNG_SIZE: u32 = 20;
const MAX_PNG_SIZE: u32 = 1200;

/// Parameters for `search_icons`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchIconsParams {
    /// Search term for icons.
    #[schemars(description = "Search term for icons (e.g., \"dog\", \"house\", \"bicycle\")")]
    pub query: String,

    #[schemars(description = "Filter by icon style: solid, line, or both (solid,line)")]
    pub styles: Option<String>,

    #[schemars(
        description = "For line icons, filter by line weight (1-60) or range (e.g., \"18-20\")"
    )]
    pub line_weight: Option<String>,

    #[schemars(description = "Set to 1 to limit results to public domain icons only")]
    pub limit_to_public_domain: Option<u8>,

    #[schemars(description = "Thumbnail size to return (42, 84, or 200 pixels)")]
    pub thumbnail_size: Option<u16>,

    #[schemars(description = "Set to 1 to include SVG URLs in the response")]
    pub include_svg: Option<u8>,

    #[schemars(description = "Maximum number of results to return")]
    pub limit: Option<u32>,

    #[schemars(description = "Cursor for the next page of results")]
    pub next_page: Option<String>,

    #[schemars(description = "Cursor for the previous page of results")]
    pub prev_page: Option<String>,
}

/// Parameters for `get_icon`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetIconParams {
    /// The unique ID of the icon.
    #[schemars(description = "The unique ID of the icon")]
    pub icon_id: u64,

    #[schemars(description = "Thumbnail size to return (42, 84, or 200 pixels)")]
    pub thumbnail_size: Option<u16>,
}

/// Parameters for `get_collection`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCollectionParams {
    /// The unique ID of the collection.
    #[schemars(description = "The unique ID of the collection")]
    pub collection_id: u64,

    #[schemars(description = "Thumbnail size to return for icons (42, 84, or 200 pixels)")]
    pub thumbnail_size: Option<u16>,

    #[schemars(description = "Set to 1 to include SVG URLs in the response")]
    pub include_svg: Option<u8>,

    #[schemars(description = "Maximum number of icons to return from the collection")]
    pub limit: Option<u32>,
}

/// Parameters for `icon_autocomplete`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AutocompleteParams {
    /// Partial search term to get suggestions for.
    #[schemars(description = "Partial search term to get suggestions for")]
    pub query: String,

    #[schemars(description = "Maximum number of suggestions to return")]
    pub limit: Option<u32>,
}

/// Parameters for `check_usage` (the endpoint takes none).
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckUsageParams {}

/// Parameters for `get_download_url`.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DownloadUrlParams {
    /// The unique ID of the icon to download.
    #[schemars(description = "The unique ID of the icon to download")]
    pub icon_id: u64,

    #[schemars(description = "Hexadecimal color value (e.g., \"FF0000\" for red)")]
    pub color: Option<String>,

    #[schemars(description = "File format: svg or png")]
    pub filetype: Option<String>,

    #[schemars(description = "For PNG, size in pixels (minimum 20, maximum 1200)")]
    pub size: Option<u32>,
}

impl SearchIconsParams {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.query.is_empty() {
            return Err(ApiError::invalid_params("query must not be empty"));
        }
        if let Some(styles) = self.styles.as_deref() {
            validate_styles(styles)?;
        }
        validate_flag("limit_to_public_domain", self.limit_to_public_domain)?;
        validate_thumbnail_size(self.thumbnail_size)?;
        validate_flag("include_svg", self.include_svg)?;
        validate_limit(self.limit)?;
        Ok(())
    }
}

impl GetIconParams {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_thumbnail_size(self.thumbnail_size)
    }
}

impl GetCollectionParams {
    pub fn validate(&self) -> Result<(), ApiError> {
        validate_thumbnail_size(self.thumbnail_size)?;
        validate_flag("include_svg", self.include_svg)?;
        validate_limit(self.limit)
    }
}

impl AutocompleteParams {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.query.is_empty() {
            return Err(ApiError::invalid_params("query must not be empty"));
        }
        validate_limit(self.limit)
    }
}

impl DownloadUrlParams {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(color) = self.color.as_deref() {
            if color.is_empty() || !color.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(ApiError::invalid_params(
                    "color must be hexadecimal digits (e.g., \"FF0000\")",
                ));
            }
        }
        if let Some(filetype) = self.filetype.as_deref() {
            if !matches!(filetype, "svg" | "png") {
                return Err(ApiError::invalid_params("filetype must be \"svg\" or \"png\""));
            }
        }
        if let Some(size) = self.size {
            if !(MIN_PNG_SIZE..=MAX_PNG_SIZE).contains(&size) {
                return Err(ApiError::invalid_params(format!(
                    "size must be between {} and {} pixels",
                    MIN_PNG_SIZE, MAX_PNG_SIZE
                )));
            }
        }
        Ok(())
    }
}

fn validate_styles(styles: &str) -> Result<(), ApiError> {
    if matches!(styles, "solid" | "line" | "solid,line") {
        Ok(())
    } else {
        Err(ApiError::invalid_params(
            "styles must be \"solid\", \"line\", or \"solid,line\"",
        ))
    }
}

fn validate_thumbnail_size(size: Option<u16>) -> Result<(), ApiError> {
    match size {
        Some(s) if !THUMBNAIL_SIZES.contains(&s) => Err(ApiError::invalid_params(
            "thumbnail_size must be 42, 84, or 200",
        )),
        _ => Ok(()),
    }
}

fn validate_flag(name: &str, value: Option<u8>) -> Result<(), ApiError> {
    match value {
        Some(v) if v > 1 => Err(ApiError::invalid_params(format!("{} must be 0 or 1", name))),
        _ => Ok(()),
    }
}

fn validate_limit(limit: Option<u32>) -> Result<(), ApiError> {
    match limit {
        Some(0) => Err(ApiError::invalid_params("limit must be at least 1")),
        _ => Ok(()),
    }
}
