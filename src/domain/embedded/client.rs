//! Embedded sub-client — create embedded requests, fetch sign URLs.

use crate::client::InkflowClient;
use crate::domain::embedded::wire::SignUrl;
use crate::domain::embedded::EmbeddedSignatureRequest;
use crate::domain::signature_request::wire::SignatureRequestResponse;
use crate::error::SdkError;
use crate::shared::SignatureId;

/// Sub-client for embedded signing operations.
pub struct Embedded<'a> {
    pub(crate) client: &'a InkflowClient,
}

impl<'a> Embedded<'a> {
    /// Create a signature request for embedded signing. The response's
    /// signature ids feed [`Embedded::sign_url`].
    pub async fn create(
        &self,
        request: &EmbeddedSignatureRequest,
    ) -> Result<SignatureRequestResponse, SdkError> {
        let payload = request.to_payload()?;
        let envelope = if request.is_template() {
            self.client.http.create_embedded_with_template(payload).await?
        } else {
            self.client.http.create_embedded(payload).await?
        };
        Ok(envelope.signature_request)
    }

    /// Fetch the iframe-embeddable sign URL for one signature slot.
    pub async fn sign_url(&self, signature_id: &SignatureId) -> Result<SignUrl, SdkError> {
        let envelope = self.client.http.get_embedded_sign_url(signature_id).await?;
        Ok(envelope.embedded)
    }
}
