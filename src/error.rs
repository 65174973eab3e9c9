//! Unified SDK error types.
//!
//! The literal messages on [`SdkError::DuplicateRequest`],
//! [`SdkError::InvalidCustomField`] and [`HttpError::MalformedBody`] are a
//! stable contract: they reproduce the API's wording exactly and calling
//! code may match against them.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// Local pre-submission constraint violation (e.g. mixed signer modes).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A custom-field name not declared by the template. Raised client-side
    /// by [`crate::domain::template::Template::validate_custom_fields`] and
    /// when the server rejects a submission with the same message.
    #[error("Invalid custom field: {field}")]
    InvalidCustomField { field: String },

    /// The server detected an identical in-flight request. Raised when a
    /// template-drafting call is resubmitted before the first completes
    /// server-side; resubmission of such requests is not idempotent.
    #[error("An identical request is already being processed.")]
    DuplicateRequest,

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// Non-2xx response with a well-formed error envelope. The message is
    /// the server's `error_msg`, verbatim.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON shape.
    #[error("Response should be returned in JSON format")]
    MalformedBody { status: u16 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_request_message_is_literal() {
        let err = SdkError::DuplicateRequest;
        assert_eq!(
            err.to_string(),
            "An identical request is already being processed."
        );
    }

    #[test]
    fn test_invalid_custom_field_names_the_field() {
        let err = SdkError::InvalidCustomField {
            field: "invalid_field".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid custom field: invalid_field");
    }

    #[test]
    fn test_malformed_body_message_is_literal() {
        let err = HttpError::MalformedBody { status: 500 };
        assert_eq!(err.to_string(), "Response should be returned in JSON format");
    }

    #[test]
    fn test_api_error_carries_server_message_verbatim() {
        let err = HttpError::Api {
            status: 400,
            message: "Unknown template".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown template");
    }
}
