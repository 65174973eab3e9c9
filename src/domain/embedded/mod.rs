//! Embedded signing domain — in-page signing via a client id.

pub mod client;
pub mod wire;

use crate::domain::signature_request::AnySignatureRequest;
use crate::error::SdkError;
use crate::shared::FormPayload;

/// A signature request configured for in-page (iframe) signing.
///
/// Wraps either request kind with the API app's client id; adds no
/// validation of its own, only the submission endpoint and response shape
/// change (signers get sign URLs instead of emails).
#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedSignatureRequest {
    request: AnySignatureRequest,
    client_id: String,
}

impl EmbeddedSignatureRequest {
    pub fn new(request: impl Into<AnySignatureRequest>, client_id: impl Into<String>) -> Self {
        Self {
            request: request.into(),
            client_id: client_id.into(),
        }
    }

    pub fn request(&self) -> &AnySignatureRequest {
        &self.request
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Whether submission goes to the template endpoint.
    pub fn is_template(&self) -> bool {
        matches!(self.request, AnySignatureRequest::Template(_))
    }

    pub fn to_payload(&self) -> Result<FormPayload, SdkError> {
        let mut payload = self.request.to_payload()?;
        payload.push("client_id", &self.client_id);
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::signature_request::{SignatureRequest, TemplateSignatureRequest};

    #[test]
    fn test_payload_carries_client_id() {
        let request = SignatureRequest::new()
            .test_mode(true)
            .title("Embedded NDA")
            .signer("jack@example.com", "Jack");
        let embedded = EmbeddedSignatureRequest::new(request, "client_abc");

        let payload = embedded.to_payload().unwrap();
        assert_eq!(payload.get("client_id"), Some("client_abc"));
        assert_eq!(payload.get("title"), Some("Embedded NDA"));
        assert!(!embedded.is_template());
    }

    #[test]
    fn test_template_request_routes_to_template_endpoint() {
        let request = TemplateSignatureRequest::new("t_123").signer(
            "Client",
            "george@example.com",
            "George",
        );
        let embedded = EmbeddedSignatureRequest::new(request, "client_abc");
        assert!(embedded.is_template());
        assert_eq!(embedded.to_payload().unwrap().get("template_id"), Some("t_123"));
    }

    #[test]
    fn test_embedded_adds_no_validation_of_its_own() {
        let base = SignatureRequest::new().signer("jack@example.com", "Jack");
        let mixed = TemplateSignatureRequest::from_request(base, "t_123").signer(
            "Client",
            "george@example.com",
            "George",
        );
        let embedded = EmbeddedSignatureRequest::new(mixed, "client_abc");
        // The failure comes from the wrapped request's own validation.
        assert!(matches!(
            embedded.to_payload().unwrap_err(),
            SdkError::Validation(_)
        ));
    }
}
