//! API error envelope and error normalization.
//!
//! Every non-2xx response funnels through [`normalize`], which maps the
//! `(status, body)` pair into the typed error taxonomy with the API's
//! literal message strings intact.

use crate::error::{HttpError, SdkError};
use serde::Deserialize;

/// The server's message when it detects an identical in-flight request.
pub(crate) const DUPLICATE_REQUEST_MSG: &str = "An identical request is already being processed.";

const INVALID_CUSTOM_FIELD_PREFIX: &str = "Invalid custom field: ";

/// Envelope: `{"error": {"error_msg": ..., "error_name": ...}}`.
#[derive(Deserialize, Debug)]
pub struct ErrorEnvelope {
    pub error: ApiErrorBody,
}

#[derive(Deserialize, Debug)]
pub struct ApiErrorBody {
    pub error_msg: String,
    pub error_name: Option<String>,
}

/// Map a failed call into a single typed error.
///
/// - A body that is not the JSON error envelope (error pages, proxies,
///   truncated replies) becomes [`HttpError::MalformedBody`].
/// - The duplicate-request message becomes [`SdkError::DuplicateRequest`].
///   Callers resubmitting a template-drafting request before the first
///   resolves server-side get this instead of the original error.
/// - `Invalid custom field: {name}` becomes
///   [`SdkError::InvalidCustomField`] naming the field.
/// - Anything else carries the server's `error_msg` verbatim.
pub(crate) fn normalize(status: u16, body: &str) -> SdkError {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return HttpError::MalformedBody { status }.into();
    };

    let message = envelope.error.error_msg;
    if message == DUPLICATE_REQUEST_MSG {
        return SdkError::DuplicateRequest;
    }
    if let Some(field) = message.strip_prefix(INVALID_CUSTOM_FIELD_PREFIX) {
        return SdkError::InvalidCustomField {
            field: field.to_string(),
        };
    }
    SdkError::Http(HttpError::Api { status, message })
}
