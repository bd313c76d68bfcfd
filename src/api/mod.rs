//! Upstream API layer: OAuth 1.0a signing and the Noun Project client.
//!
//! Two collaborating pieces: the [`RequestSigner`] turns a URL + method
//! into an `Authorization` header, and the [`NounProjectClient`] builds
//! one signed GET per operation and returns the JSON body. Both are
//! immutable after construction and shared across concurrent calls.

pub mod client;
pub mod error;
pub mod params;
pub mod signer;

pub use client::NounProjectClient;
pub use error::ApiError;
pub use params::{
    AutocompleteParams, CheckUsageParams, DownloadUrlParams, GetCollectionParams, GetIconParams,
    SearchIconsParams,
};
pub use signer::{Credentials, RequestSigner};
