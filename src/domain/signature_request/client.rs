//! Signature requests sub-client — send, fetch, cancel.

use crate::client::InkflowClient;
use crate::domain::signature_request::wire::SignatureRequestResponse;
use crate::domain::signature_request::{SignatureRequest, TemplateSignatureRequest};
use crate::error::SdkError;
use crate::shared::SignatureRequestId;

/// Sub-client for signature request operations.
pub struct SignatureRequests<'a> {
    pub(crate) client: &'a InkflowClient,
}

impl<'a> SignatureRequests<'a> {
    /// Send a signature request. Signers receive an email to sign.
    pub async fn send(
        &self,
        request: &SignatureRequest,
    ) -> Result<SignatureRequestResponse, SdkError> {
        let payload = request.to_payload()?;
        let envelope = self.client.http.send_signature_request(payload).await?;
        Ok(envelope.signature_request)
    }

    /// Send a signature request based on a template.
    pub async fn send_with_template(
        &self,
        request: &TemplateSignatureRequest,
    ) -> Result<SignatureRequestResponse, SdkError> {
        let payload = request.to_payload()?;
        let envelope = self.client.http.send_with_template(payload).await?;
        Ok(envelope.signature_request)
    }

    /// Fetch the current state of a signature request.
    pub async fn get(
        &self,
        id: &SignatureRequestId,
    ) -> Result<SignatureRequestResponse, SdkError> {
        let envelope = self.client.http.get_signature_request(id).await?;
        Ok(envelope.signature_request)
    }

    /// Cancel an incomplete signature request.
    pub async fn cancel(&self, id: &SignatureRequestId) -> Result<(), SdkError> {
        self.client.http.cancel_signature_request(id).await
    }
}
