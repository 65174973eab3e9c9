//! Templates sub-client — list, fetch.

use crate::client::InkflowClient;
use crate::domain::template::{self, Template};
use crate::error::SdkError;
use crate::shared::TemplateId;

/// Sub-client for template operations.
pub struct Templates<'a> {
    pub(crate) client: &'a InkflowClient,
}

impl<'a> Templates<'a> {
    /// List the account's templates, in the server's order.
    pub async fn list(&self, page: Option<u32>) -> Result<Vec<Template>, SdkError> {
        let envelope = self.client.http.list_templates(page, None).await?;
        envelope
            .templates
            .into_iter()
            .map(|t| {
                t.try_into().map_err(|e: template::ValidationError| {
                    SdkError::Validation(e.to_string())
                })
            })
            .collect()
    }

    /// Search the account's templates by title.
    pub async fn search(&self, query: &str) -> Result<Vec<Template>, SdkError> {
        let envelope = self.client.http.list_templates(None, Some(query)).await?;
        envelope
            .templates
            .into_iter()
            .map(|t| {
                t.try_into().map_err(|e: template::ValidationError| {
                    SdkError::Validation(e.to_string())
                })
            })
            .collect()
    }

    /// Fetch a single template by id.
    pub async fn get(&self, id: &TemplateId) -> Result<Template, SdkError> {
        let envelope = self.client.http.get_template(id).await?;
        envelope
            .template
            .try_into()
            .map_err(|e: template::ValidationError| SdkError::Validation(e.to_string()))
    }
}
