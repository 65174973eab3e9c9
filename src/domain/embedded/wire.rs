//! Wire types for embedded signing responses.

use crate::shared::serde_util;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Envelope: `{"embedded": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct EmbeddedEnvelope {
    pub embedded: SignUrl,
}

/// An iframe-embeddable signing URL for one signature slot.
#[derive(Deserialize, Debug, Clone)]
pub struct SignUrl {
    pub sign_url: String,
    #[serde(with = "serde_util::timestamp_secs")]
    pub expires_at: DateTime<Utc>,
}
