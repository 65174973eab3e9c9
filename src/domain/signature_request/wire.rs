//! Wire types for signature request responses.

use crate::shared::{serde_util, SignatureId, SignatureRequestId};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope: `{"signature_request": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct SignatureRequestEnvelope {
    pub signature_request: SignatureRequestResponse,
}

/// A signature request as the server reports it, with its assigned id and
/// per-signer signature slots.
#[derive(Deserialize, Debug, Clone)]
pub struct SignatureRequestResponse {
    pub signature_request_id: SignatureRequestId,
    #[serde(with = "serde_util::int_bool", default)]
    pub test_mode: bool,
    pub title: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub requester_email_address: Option<String>,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub has_error: bool,
    pub details_url: Option<String>,
    pub signing_redirect_url: Option<String>,
    #[serde(default)]
    pub cc_email_addresses: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<ResponseCustomField>,
    #[serde(default)]
    pub metadata: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub signatures: Vec<Signature>,
}

/// One signature slot within a request.
#[derive(Deserialize, Debug, Clone)]
pub struct Signature {
    pub signature_id: SignatureId,
    pub signer_email_address: String,
    pub signer_name: String,
    pub order: Option<u32>,
    pub status_code: SignatureStatus,
    #[serde(with = "serde_util::opt_timestamp_secs", default)]
    pub signed_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::opt_timestamp_secs", default)]
    pub last_viewed_at: Option<DateTime<Utc>>,
    #[serde(with = "serde_util::opt_timestamp_secs", default)]
    pub last_reminded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub has_pin: bool,
}

/// Signer progress on a single slot.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SignatureStatus {
    AwaitingSignature,
    Signed,
    Declined,
    ErrorUnknown,
    /// Forward-compatible catch-all for status codes this SDK predates.
    #[serde(other)]
    Unknown,
}

/// A custom field echoed back in a response, with whatever value the
/// document carries (string for text fields, bool for checkboxes).
#[derive(Deserialize, Debug, Clone)]
pub struct ResponseCustomField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub value: Option<serde_json::Value>,
    pub required: Option<bool>,
    pub editor: Option<String>,
}
