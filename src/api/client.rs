//! HTTP client for The Noun Project API.
//!
//! One method per upstream capability. Every call follows the same
//! shape: validate parameters, build the exact URL (unset optionals are
//! omitted from the query string, never sent empty), sign that URL, and
//! perform a single GET. The `Url` value handed to the signer is the
//! same value handed to reqwest, so the signed and transmitted URLs
//! cannot diverge.

use std::time::Duration;

use reqwest::header;
use serde_json::Value;
use tracing::{debug, error};
use url::Url;

use super::error::ApiError;
use super::params::{
    AutocompleteParams, DownloadUrlParams, GetCollectionParams, GetIconParams, SearchIconsParams,
};
use super::signer::{Credentials, RequestSigner};

/// Base endpoint of the upstream API.
pub const BASE_URL: &str = "https://api.thenounproject.com";

/// Per-request deadline; a call that exceeds it fails with a transport
/// error and is not retried.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for The Noun Project API.
///
/// Holds only immutable state (credentials and a connection pool), so a
/// single instance is shared across concurrent tool invocations.
#[derive(Debug, Clone)]
pub struct NounProjectClient {
    http: reqwest::Client,
    signer: RequestSigner,
}

impl NounProjectClient {
    /// Create a new client from consumer credentials.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for empty credentials or if the
    /// HTTP client cannot be constructed.
    pub fn new(credentials: Credentials) -> Result<Self, ApiError> {
        let signer = RequestSigner::new(credentials)?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("noun-project-mcp/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self { http, signer })
    }

    /// Search for icons with optional style, weight, and paging filters.
    pub async fn search_icons(&self, params: &SearchIconsParams) -> Result<Value, ApiError> {
        params.validate()?;
        self.dispatch("search_icons", search_icons_url(params)?).await
    }

    /// Fetch a single icon by ID.
    pub async fn get_icon(&self, params: &GetIconParams) -> Result<Value, ApiError> {
        params.validate()?;
        self.dispatch("get_icon", get_icon_url(params)?).await
    }

    /// Fetch a collection and the icons it contains.
    pub async fn get_collection(&self, params: &GetCollectionParams) -> Result<Value, ApiError> {
        params.validate()?;
        self.dispatch("get_collection", get_collection_url(params)?)
            .await
    }

    /// Fetch autocomplete suggestions for a partial search term.
    pub async fn icon_autocomplete(&self, params: &AutocompleteParams) -> Result<Value, ApiError> {
        params.validate()?;
        self.dispatch("icon_autocomplete", autocomplete_url(params)?)
            .await
    }

    /// Fetch the current monthly API usage and limits.
    pub async fn check_usage(&self) -> Result<Value, ApiError> {
        self.dispatch("check_usage", build_url("/v2/oauth/usage", Query::new())?)
            .await
    }

    /// Fetch a download URL for an icon with color/size options.
    pub async fn get_download_url(&self, params: &DownloadUrlParams) -> Result<Value, ApiError> {
        params.validate()?;
        self.dispatch("get_download_url", download_url(params)?).await
    }

    /// Sign and perform one GET round trip, returning the JSON body
    /// verbatim on 2xx.
    async fn dispatch(&self, operation: &'static str, url: Url) -> Result<Value, ApiError> {
        let authorization = self.signer.authorization(&url, "GET");
        debug!(operation, url = %url, "dispatching GET");

        let response = self
            .http
            .get(url)
            .header(header::AUTHORIZATION, authorization)
            .header(header::CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ApiError::transport(operation, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(operation, %status, "upstream error");
            return Err(ApiError::Upstream {
                operation,
                status,
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ApiError::transport(operation, e))
    }
}

/// Ordered query parameters; only present values are ever pushed.
struct Query(Vec<(&'static str, String)>);

impl Query {
    fn new() -> Self {
        Self(Vec::new())
    }

    fn push(&mut self, key: &'static str, value: impl ToString) {
        self.0.push((key, value.to_string()));
    }

    fn push_opt(&mut self, key: &'static str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }
}

fn build_url(path: &str, query: Query) -> Result<Url, ApiError> {
    let mut url = Url::parse(BASE_URL)?.join(path)?;
    if !query.0.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.0.iter().map(|(k, v)| (*k, v.as_str())));
    }
    Ok(url)
}

fn search_icons_url(params: &SearchIconsParams) -> Result<Url, ApiError> {
    let mut query = Query::new();
    query.push("query", &params.query);
    query.push_opt("styles", params.styles.as_ref());
    query.push_opt("line_weight", params.line_weight.as_ref());
    query.push_opt("limit_to_public_domain", params.limit_to_public_domain);
    query.push_opt("thumbnail_size", params.thumbnail_size);
    query.push_opt("include_svg", params.include_svg);
    query.push_opt("limit", params.limit);
    query.push_opt("next_page", params.next_page.as_ref());
    query.push_opt("prev_page", params.prev_page.as_ref());
    build_url("/v2/icon", query)
}

fn get_icon_url(params: &GetIconParams) -> Result<Url, ApiError> {
    let mut query = Query::new();
    query.push_opt("thumbnail_size", params.thumbnail_size);
    build_url(&format!("/v2/icon/{}", params.icon_id), query)
}

fn get_collection_url(params: &GetCollectionParams) -> Result<Url, ApiError> {
    let mut query = Query::new();
    query.push_opt("thumbnail_size", params.thumbnail_size);
    query.push_opt("include_svg", params.include_svg);
    query.push_opt("limit", params.limit);
    build_url(&format!("/v2/collection/{}", params.collection_id), query)
}

fn autocomplete_url(params: &AutocompleteParams) -> Result<Url, ApiError> {
    let mut query = Query::new();
    query.push("query", &params.query);
    query.push_opt("limit", params.limit);
    build_url("/v2/icon/autocomplete", query)
}

fn download_url(params: &DownloadUrlParams) -> Result<Url, ApiError> {
    let mut query = Query::new();
    query.push_opt("color", params.color.as_ref());
    query.push_opt("filetype", params.filetype.as_ref());
    query.push_opt("size", params.size);
    build_url(&format!("/v2/icon/{}/download", params.icon_id), query)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query_keys(url: &Url) -> Vec<String> {
        url.query_pairs().map(|(k, _)| k.to_string()).collect()
    }

    fn query_value(url: &Url, key: &str) -> Option<String> {
        url.query_pairs()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.to_string())
    }

    #[test]
    fn test_client_rejects_empty_credentials() {
        let result = NounProjectClient::new(Credentials {
            key: String::new(),
            secret: String::new(),
        });
        assert!(matches!(result, Err(ApiError::Config(_))));
    }

    #[test]
    fn test_search_icons_url_contains_only_set_params() {
        let params = SearchIconsParams {
            query: "dog".to_string(),
            styles: Some("line".to_string()),
            line_weight: None,
            limit_to_public_domain: None,
            thumbnail_size: None,
            include_svg: None,
            limit: Some(5),
            next_page: None,
            prev_page: None,
        };
        let url = search_icons_url(&params).unwrap();

        assert_eq!(url.path(), "/v2/icon");
        let mut keys = query_keys(&url);
        keys.sort();
        assert_eq!(keys, ["limit", "query", "styles"]);
        assert_eq!(query_value(&url, "query").as_deref(), Some("dog"));
        assert_eq!(query_value(&url, "styles").as_deref(), Some("line"));
        assert_eq!(query_value(&url, "limit").as_deref(), Some("5"));
    }

    #[test]
    fn test_get_icon_url_without_thumbnail_has_no_query_string() {
        let params = GetIconParams {
            icon_id: 123,
            thumbnail_size: None,
        };
        let url = get_icon_url(&params).unwrap();
        assert_eq!(url.as_str(), "https://api.thenounproject.com/v2/icon/123");
        assert!(url.query().is_none());
    }

    #[test]
    fn test_get_icon_url_with_thumbnail() {
        let params = GetIconParams {
            icon_id: 123,
            thumbnail_size: Some(84),
        };
        let url = get_icon_url(&params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.thenounproject.com/v2/icon/123?thumbnail_size=84"
        );
    }

    #[test]
    fn test_get_collection_url() {
        let params = GetCollectionParams {
            collection_id: 77,
            thumbnail_size: None,
            include_svg: Some(1),
            limit: None,
        };
        let url = get_collection_url(&params).unwrap();
        assert_eq!(url.path(), "/v2/collection/77");
        assert_eq!(query_keys(&url), ["include_svg"]);
        assert_eq!(query_value(&url, "include_svg").as_deref(), Some("1"));
    }

    #[test]
    fn test_autocomplete_url() {
        let params = AutocompleteParams {
            query: "do".to_string(),
            limit: Some(3),
        };
        let url = autocomplete_url(&params).unwrap();
        assert_eq!(url.path(), "/v2/icon/autocomplete");
        assert_eq!(query_value(&url, "query").as_deref(), Some("do"));
        assert_eq!(query_value(&url, "limit").as_deref(), Some("3"));
    }

    #[test]
    fn test_usage_url_has_no_parameters() {
        let url = build_url("/v2/oauth/usage", Query::new()).unwrap();
        assert_eq!(url.as_str(), "https://api.thenounproject.com/v2/oauth/usage");
    }

    #[test]
    fn test_download_url_defaults_to_bare_path() {
        let params = DownloadUrlParams {
            icon_id: 42,
            color: None,
            filetype: None,
            size: None,
        };
        let url = download_url(&params).unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.thenounproject.com/v2/icon/42/download"
        );
    }

    #[test]
    fn test_download_url_with_options() {
        let params = DownloadUrlParams {
            icon_id: 42,
            color: Some("FF0000".to_string()),
            filetype: Some("png".to_string()),
            size: Some(200),
        };
        let url = download_url(&params).unwrap();
        assert_eq!(url.path(), "/v2/icon/42/download");
        let mut keys = query_keys(&url);
        keys.sort();
        assert_eq!(keys, ["color", "filetype", "size"]);
        assert_eq!(query_value(&url, "size").as_deref(), Some("200"));
    }

    #[tokio::test]
    async fn test_validation_fails_before_dispatch() {
        let client = NounProjectClient::new(Credentials {
            key: "test_key".to_string(),
            secret: "test_secret".to_string(),
        })
        .unwrap();

        let params = GetIconParams {
            icon_id: 1,
            thumbnail_size: Some(99),
        };
        // No network involved: validation rejects the call first.
        let err = client.get_icon(&params).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidParams(_)));
    }

    // Live API test (requires credentials, run with: cargo test -- --ignored)
    #[ignore]
    #[tokio::test]
    async fn test_live_check_usage() {
        let client = NounProjectClient::new(Credentials {
            key: std::env::var("NOUN_PROJECT_API_KEY").unwrap(),
            secret: std::env::var("NOUN_PROJECT_API_SECRET").unwrap(),
        })
        .unwrap();
        let body = client.check_usage().await.unwrap();
        assert!(body.is_object());
    }
}
