//! High-level client — `InkflowClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and accessor methods.

use crate::auth::ApiKey;
use crate::domain::embedded::client::Embedded;
use crate::domain::signature_request::client::SignatureRequests;
use crate::domain::template::client::Templates;
use crate::domain::unclaimed_draft::client::UnclaimedDrafts;
use crate::error::SdkError;
use crate::http::InkflowHttp;

// Re-export sub-client types for convenience.
pub use crate::domain::embedded::client::Embedded as EmbeddedClient;
pub use crate::domain::signature_request::client::SignatureRequests as SignatureRequestsClient;
pub use crate::domain::template::client::Templates as TemplatesClient;
pub use crate::domain::unclaimed_draft::client::UnclaimedDrafts as UnclaimedDraftsClient;

/// The primary entry point for the Inkflow SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.signature_requests()`, `client.templates()`, etc. Cheap to
/// clone; clones share the underlying connection pool.
#[derive(Clone, Debug)]
pub struct InkflowClient {
    pub(crate) http: InkflowHttp,
}

impl InkflowClient {
    pub fn builder() -> InkflowClientBuilder {
        InkflowClientBuilder::default()
    }

    /// Shortcut for a client with the default base URL.
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            http: InkflowHttp::new(crate::network::DEFAULT_API_URL, api_key.into()),
        }
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn signature_requests(&self) -> SignatureRequests<'_> {
        SignatureRequests { client: self }
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates { client: self }
    }

    pub fn embedded(&self) -> Embedded<'_> {
        Embedded { client: self }
    }

    pub fn unclaimed_drafts(&self) -> UnclaimedDrafts<'_> {
        UnclaimedDrafts { client: self }
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Default)]
pub struct InkflowClientBuilder {
    base_url: Option<String>,
    api_key: Option<ApiKey>,
}

impl InkflowClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = Some(url.to_string());
        self
    }

    pub fn api_key(mut self, key: impl Into<ApiKey>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn build(self) -> Result<InkflowClient, SdkError> {
        let api_key = self
            .api_key
            .ok_or_else(|| SdkError::Validation("An API key is required".to_string()))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| crate::network::DEFAULT_API_URL.to_string());
        Ok(InkflowClient {
            http: InkflowHttp::new(&base_url, api_key),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_api_key() {
        let err = InkflowClient::builder().build().unwrap_err();
        assert!(matches!(err, SdkError::Validation(_)));
    }

    #[test]
    fn test_builder_trims_trailing_slash() {
        let client = InkflowClient::builder()
            .api_key("key")
            .base_url("https://api.example.com/v3/")
            .build()
            .unwrap();
        assert_eq!(client.http.base_url(), "https://api.example.com/v3");
    }
}
