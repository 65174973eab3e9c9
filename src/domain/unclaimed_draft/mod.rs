//! Unclaimed draft domain — requests a human claims and completes via URL.

pub mod client;
pub mod wire;

use crate::domain::signature_request::SignatureRequest;
use crate::error::SdkError;
use crate::shared::FormPayload;

/// What the claimer does with the draft once opened.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DraftType {
    /// The claimer signs the document themselves.
    #[default]
    SendDocument,
    /// The claimer sets up signers and sends the request out.
    RequestSignature,
}

impl DraftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SendDocument => "send_document",
            Self::RequestSignature => "request_signature",
        }
    }
}

/// A draft signature request awaiting a human to claim it.
///
/// Composes a base [`SignatureRequest`]; with a client id the draft is
/// claimed inside the app's embedded requesting flow, otherwise on the
/// hosted site. Produces a claim URL rather than a signature id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnclaimedDraft {
    request: SignatureRequest,
    client_id: Option<String>,
    draft_type: DraftType,
    is_for_embedded_signing: bool,
}

impl UnclaimedDraft {
    pub fn new(request: SignatureRequest) -> Self {
        Self {
            request,
            ..Self::default()
        }
    }

    /// A draft claimed via the app's embedded requesting flow.
    pub fn embedded(request: SignatureRequest, client_id: impl Into<String>) -> Self {
        Self {
            request,
            client_id: Some(client_id.into()),
            ..Self::default()
        }
    }

    pub fn draft_type(mut self, draft_type: DraftType) -> Self {
        self.draft_type = draft_type;
        self
    }

    /// Have the resulting request signed in-page too, rather than emailing
    /// the signers.
    pub fn is_for_embedded_signing(mut self, enabled: bool) -> Self {
        self.is_for_embedded_signing = enabled;
        self
    }

    pub fn request(&self) -> &SignatureRequest {
        &self.request
    }

    /// Whether submission goes to the embedded endpoint.
    pub fn is_embedded(&self) -> bool {
        self.client_id.is_some()
    }

    pub fn to_payload(&self) -> Result<FormPayload, SdkError> {
        let mut payload = self.request.to_payload()?;
        payload.push("type", self.draft_type.as_str());
        if let Some(client_id) = &self.client_id {
            payload.push("client_id", client_id);
        }
        if self.is_for_embedded_signing {
            payload.push("is_for_embedded_signing", "1");
        }
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_draft_payload() {
        let request = SignatureRequest::new()
            .test_mode(true)
            .requester_email_address("jolene@example.com")
            .file_url("https://example.com/nda.docx");
        let draft = UnclaimedDraft::embedded(request, "client_abc")
            .draft_type(DraftType::RequestSignature);

        assert!(draft.is_embedded());
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.get("client_id"), Some("client_abc"));
        assert_eq!(payload.get("type"), Some("request_signature"));
        assert_eq!(
            payload.get("requester_email_address"),
            Some("jolene@example.com")
        );
        assert_eq!(payload.get("is_for_embedded_signing"), None);
    }

    #[test]
    fn test_embedded_signing_flag_encodes_as_one() {
        let request = SignatureRequest::new().file_url("https://example.com/nda.docx");
        let draft =
            UnclaimedDraft::embedded(request, "client_abc").is_for_embedded_signing(true);
        let payload = draft.to_payload().unwrap();
        assert_eq!(payload.get("is_for_embedded_signing"), Some("1"));
    }

    #[test]
    fn test_plain_draft_defaults_to_send_document() {
        let draft = UnclaimedDraft::new(SignatureRequest::new());
        assert!(!draft.is_embedded());
        assert_eq!(draft.to_payload().unwrap().get("type"), Some("send_document"));
    }
}
