//! # Inkflow SDK
//!
//! An async Rust SDK for the Inkflow e-signature API: create signature
//! requests, embed signing in web pages, manage templates and unclaimed
//! drafts.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain request models, wire types
//! 2. **HTTP API** — `InkflowHttp` with basic-auth and error normalization
//! 3. **High-Level Client** — `InkflowClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use inkflow_sdk::prelude::*;
//!
//! let client = InkflowClient::builder()
//!     .api_key("your-api-key")
//!     .build()?;
//!
//! let request = SignatureRequest::new()
//!     .test_mode(true)
//!     .title("NDA with Acme Co.")
//!     .signer("jack@example.com", "Jack")
//!     .file("nda.pdf");
//!
//! let response = client.signature_requests().send(&request).await?;
//! println!("sent: {}", response.signature_request_id);
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes used across all domains.
pub mod shared;

/// Domain modules (vertical slices): request models, wire types, conversions.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// API key credentials.
pub mod auth;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with error normalization.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `InkflowClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{SignatureId, SignatureRequestId, TemplateId};

    // Domain types — requests
    pub use crate::domain::embedded::EmbeddedSignatureRequest;
    pub use crate::domain::signature_request::{
        AnySignatureRequest, CustomField, FileSource, SignatureRequest, Signer,
        TemplateSignatureRequest,
    };
    pub use crate::domain::unclaimed_draft::{DraftType, UnclaimedDraft};

    // Domain types — responses
    pub use crate::domain::embedded::wire::SignUrl;
    pub use crate::domain::signature_request::wire::{
        Signature, SignatureRequestResponse, SignatureStatus,
    };
    pub use crate::domain::template::{
        CcRole, CustomFieldDef, FieldType, SignerRole, Template,
    };
    pub use crate::domain::unclaimed_draft::wire::UnclaimedDraftResponse;

    // Errors
    pub use crate::error::{HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // Auth
    pub use crate::auth::ApiKey;

    // HTTP client + sub-clients
    pub use crate::client::{
        EmbeddedClient, InkflowClient, InkflowClientBuilder, SignatureRequestsClient,
        TemplatesClient, UnclaimedDraftsClient,
    };
}
