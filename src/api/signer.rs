//! Single-leg OAuth 1.0a request signing for The Noun Project API.
//!
//! The Noun Project authenticates with consumer credentials only (no
//! per-user token), HMAC-SHA1 over the standard signature base string:
//! 1. Collect the URL query pairs plus the OAuth protocol parameters
//! 2. Percent-encode, sort, and join them into the parameter string
//! 3. HMAC-SHA1 `METHOD&enc(base_url)&enc(params)` with the consumer
//!    secret (empty token secret), base64-encode the digest
//!
//! Signatures are computed fresh for every outgoing request, over the
//! exact URL that will be sent. A signature for one URL/method pair is
//! invalid for any other.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rand::{Rng, distr::Alphanumeric};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use url::Url;

use super::error::ApiError;

type HmacSha1 = Hmac<Sha1>;

/// Characters that must be percent-encoded per RFC 3986: everything
/// outside the unreserved set `ALPHA / DIGIT / "-" / "." / "_" / "~"`.
const RFC3986: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LENGTH: usize = 32;

/// Consumer credentials identifying this application upstream.
///
/// Immutable for the process lifetime; supplied once at startup.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Consumer key (API key).
    pub key: String,

    /// Consumer secret, used as HMAC key material.
    pub secret: String,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// OAuth 1.0a HMAC-SHA1 signer holding the consumer credentials.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new signer.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the consumer key or secret is
    /// empty. An empty credential would not fail locally, only as an
    /// opaque 401 from upstream, so it is rejected here.
    pub fn new(credentials: Credentials) -> Result<Self, ApiError> {
        if credentials.key.is_empty() || credentials.secret.is_empty() {
            return Err(ApiError::Config(
                "consumer key and secret must be non-empty".to_string(),
            ));
        }
        Ok(Self { credentials })
    }

    /// Build the `Authorization` header value for one outbound request.
    ///
    /// Draws a fresh nonce and timestamp; call this immediately before
    /// dispatching `url` with `method`.
    pub fn authorization(&self, url: &Url, method: &str) -> String {
        let nonce: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect();
        self.authorization_with(url, method, &nonce, Utc::now().timestamp())
    }

    /// Deterministic variant with the nonce and timestamp pinned.
    fn authorization_with(&self, url: &Url, method: &str, nonce: &str, timestamp: i64) -> String {
        let timestamp = timestamp.to_string();
        let oauth_params = [
            ("oauth_consumer_key", self.credentials.key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", SIGNATURE_METHOD),
            ("oauth_timestamp", timestamp.as_str()),
            ("oauth_version", OAUTH_VERSION),
        ];

        let base = signature_base_string(url, method, &oauth_params);
        let signature = BASE64.encode(hmac_sha1(self.signing_key().as_bytes(), base.as_bytes()));

        let mut header_params: Vec<(&str, &str)> = oauth_params.to_vec();
        header_params.push(("oauth_signature", &signature));
        header_params.sort_unstable();

        let fields: Vec<String> = header_params
            .iter()
            .map(|(k, v)| format!("{}=\"{}\"", k, percent_encode(v)))
            .collect();
        format!("OAuth {}", fields.join(", "))
    }

    /// Signing key: `enc(consumer_secret)&enc(token_secret)` with an
    /// empty token secret (consumer-only authorization).
    fn signing_key(&self) -> String {
        format!("{}&", percent_encode(&self.credentials.secret))
    }
}

/// Percent-encode a string per RFC 3986 (space becomes `%20`).
fn percent_encode(value: &str) -> String {
    utf8_percent_encode(value, RFC3986).to_string()
}

/// Compute the HMAC-SHA1 digest of `message` keyed by `key`.
fn hmac_sha1(key: &[u8], message: &[u8]) -> [u8; 20] {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take any size");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Construct the canonical signature base string for `url` + `method`.
///
/// Parameters are the decoded URL query pairs plus the OAuth protocol
/// parameters, percent-encoded and sorted by encoded key then value.
fn signature_base_string(url: &Url, method: &str, oauth_params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
        .collect();
    pairs.extend(
        oauth_params
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v))),
    );
    pairs.sort_unstable();

    let param_string = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut base_url = url.clone();
    base_url.set_query(None);
    base_url.set_fragment(None);

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(base_url.as_str()),
        percent_encode(&param_string)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_signer() -> RequestSigner {
        RequestSigner::new(Credentials {
            key: "test_key".to_string(),
            secret: "test_secret".to_string(),
        })
        .unwrap()
    }

    fn icon_url() -> Url {
        Url::parse("https://api.thenounproject.com/v2/icon?query=dog&limit=5").unwrap()
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let err = RequestSigner::new(Credentials {
            key: String::new(),
            secret: "secret".to_string(),
        });
        assert!(err.is_err());

        let err = RequestSigner::new(Credentials {
            key: "key".to_string(),
            secret: String::new(),
        });
        assert!(err.is_err());
    }

    #[test]
    fn test_secret_redacted_in_debug() {
        let creds = Credentials {
            key: "public_key".to_string(),
            secret: "super_secret".to_string(),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret"));
    }

    #[test]
    fn test_percent_encode_rfc3986() {
        // Vectors from the OAuth 1.0a signing documentation
        assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
        assert_eq!(percent_encode("Dogs, Cats & Mice"), "Dogs%2C%20Cats%20%26%20Mice");
        assert_eq!(percent_encode("An_encoded~string."), "An_encoded~string.");
        assert_eq!(percent_encode("\u{2603}"), "%E2%98%83");
    }

    #[test]
    fn test_hmac_sha1_known_vector() {
        let digest = hmac_sha1(b"key", b"The quick brown fox jumps over the lazy dog");
        assert_eq!(BASE64.encode(digest), "3nybhbi3iqa8ino29wqQcBydtNk=");
    }

    #[test]
    fn test_base_string_shape() {
        let oauth_params = [
            ("oauth_consumer_key", "test_key"),
            ("oauth_nonce", "abc"),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", "1700000000"),
            ("oauth_version", "1.0"),
        ];
        let base = signature_base_string(&icon_url(), "get", &oauth_params);

        // Uppercased method, encoded base URL without the query string
        assert!(base.starts_with("GET&https%3A%2F%2Fapi.thenounproject.com%2Fv2%2Ficon&"));
        // Sorted parameter string: limit first, query last
        assert!(base.contains("limit%3D5%26oauth_consumer_key%3Dtest_key"));
        assert!(base.ends_with("%26query%3Ddog"));
        // The signature itself never appears in its own base string
        assert!(!base.contains("oauth_signature%3D"));
    }

    #[test]
    fn test_signature_deterministic_for_identical_input() {
        let signer = test_signer();
        let url = icon_url();
        let a = signer.authorization_with(&url, "GET", "nonce123", 1700000000);
        let b = signer.authorization_with(&url, "GET", "nonce123", 1700000000);
        assert_eq!(a, b);
    }

    #[test]
    fn test_signature_changes_with_url_method_and_params() {
        let signer = test_signer();
        let url = icon_url();
        let baseline = signer.authorization_with(&url, "GET", "nonce123", 1700000000);

        let other_query =
            Url::parse("https://api.thenounproject.com/v2/icon?query=cat&limit=5").unwrap();
        assert_ne!(
            baseline,
            signer.authorization_with(&other_query, "GET", "nonce123", 1700000000)
        );

        let other_path = Url::parse("https://api.thenounproject.com/v2/oauth/usage").unwrap();
        assert_ne!(
            baseline,
            signer.authorization_with(&other_path, "GET", "nonce123", 1700000000)
        );

        assert_ne!(
            baseline,
            signer.authorization_with(&url, "POST", "nonce123", 1700000000)
        );
    }

    #[test]
    fn test_header_format() {
        let signer = test_signer();
        let header = signer.authorization(&icon_url(), "GET");
        assert!(header.starts_with("OAuth "));
        assert!(header.contains("oauth_consumer_key=\"test_key\""));
        assert!(header.contains("oauth_signature_method=\"HMAC-SHA1\""));
        assert!(header.contains("oauth_version=\"1.0\""));
        assert!(header.contains("oauth_signature=\""));
        // Single-leg: no token parameter
        assert!(!header.contains("oauth_token"));
    }

    #[test]
    fn test_nonce_varies_between_calls() {
        let signer = test_signer();
        let url = icon_url();
        // Nonces are 32 random alphanumerics; collisions would break
        // upstream replay detection.
        assert_ne!(
            signer.authorization(&url, "GET"),
            signer.authorization(&url, "GET")
        );
    }
}
