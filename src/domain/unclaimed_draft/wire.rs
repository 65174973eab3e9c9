//! Wire types for unclaimed draft responses.

use crate::shared::serde_util;
use serde::Deserialize;

/// Envelope: `{"unclaimed_draft": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct UnclaimedDraftEnvelope {
    pub unclaimed_draft: UnclaimedDraftResponse,
}

/// A created draft: the claim URL is what a human opens to complete it.
#[derive(Deserialize, Debug, Clone)]
pub struct UnclaimedDraftResponse {
    pub claim_url: String,
    pub signing_redirect_url: Option<String>,
    #[serde(with = "serde_util::int_bool", default)]
    pub test_mode: bool,
}
