//! Unclaimed drafts sub-client.

use crate::client::InkflowClient;
use crate::domain::unclaimed_draft::wire::UnclaimedDraftResponse;
use crate::domain::unclaimed_draft::UnclaimedDraft;
use crate::error::SdkError;

/// Sub-client for unclaimed draft operations.
pub struct UnclaimedDrafts<'a> {
    pub(crate) client: &'a InkflowClient,
}

impl<'a> UnclaimedDrafts<'a> {
    /// Create a draft and return its claim URL.
    pub async fn create(&self, draft: &UnclaimedDraft) -> Result<UnclaimedDraftResponse, SdkError> {
        let payload = draft.to_payload()?;
        let envelope = if draft.is_embedded() {
            self.client.http.create_embedded_unclaimed_draft(payload).await?
        } else {
            self.client.http.create_unclaimed_draft(payload).await?
        };
        Ok(envelope.unclaimed_draft)
    }
}
