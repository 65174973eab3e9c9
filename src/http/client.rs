//! Low-level HTTP client — `InkflowHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain
//! types happens at the sub-client boundary). Internal to the SDK — the
//! high-level client wraps this.

use crate::auth::ApiKey;
use crate::domain::embedded::wire::EmbeddedEnvelope;
use crate::domain::signature_request::wire::SignatureRequestEnvelope;
use crate::domain::template::wire::{TemplateEnvelope, TemplateListEnvelope};
use crate::domain::unclaimed_draft::wire::UnclaimedDraftEnvelope;
use crate::error::{HttpError, SdkError};
use crate::http::response::normalize;
use crate::shared::{FormPayload, SignatureId, SignatureRequestId, TemplateId};

use reqwest::multipart;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Low-level HTTP client for the Inkflow REST API.
#[derive(Clone, Debug)]
pub struct InkflowHttp {
    base_url: String,
    client: Client,
    /// Account API key, sent as the basic-auth username on every request.
    /// NEVER exposed publicly.
    api_key: ApiKey,
}

impl InkflowHttp {
    pub fn new(base_url: &str, api_key: ApiKey) -> Self {
        let builder = Client::builder()
            .timeout(Duration::from_secs(30))
            .pool_max_idle_per_host(10);

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: builder.build().expect("Failed to build HTTP client"),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Signature requests ───────────────────────────────────────────────

    pub async fn send_signature_request(
        &self,
        payload: FormPayload,
    ) -> Result<SignatureRequestEnvelope, SdkError> {
        self.post_form("/signature_request/send", payload).await
    }

    pub async fn send_with_template(
        &self,
        payload: FormPayload,
    ) -> Result<SignatureRequestEnvelope, SdkError> {
        self.post_form("/signature_request/send_with_template", payload)
            .await
    }

    pub async fn get_signature_request(
        &self,
        id: &SignatureRequestId,
    ) -> Result<SignatureRequestEnvelope, SdkError> {
        self.get(&format!("/signature_request/{}", id)).await
    }

    pub async fn cancel_signature_request(
        &self,
        id: &SignatureRequestId,
    ) -> Result<(), SdkError> {
        self.post_empty(&format!("/signature_request/cancel/{}", id))
            .await
    }

    // ── Embedded signing ─────────────────────────────────────────────────

    pub async fn create_embedded(
        &self,
        payload: FormPayload,
    ) -> Result<SignatureRequestEnvelope, SdkError> {
        self.post_form("/signature_request/create_embedded", payload)
            .await
    }

    pub async fn create_embedded_with_template(
        &self,
        payload: FormPayload,
    ) -> Result<SignatureRequestEnvelope, SdkError> {
        self.post_form("/signature_request/create_embedded_with_template", payload)
            .await
    }

    pub async fn get_embedded_sign_url(
        &self,
        signature_id: &SignatureId,
    ) -> Result<EmbeddedEnvelope, SdkError> {
        self.get(&format!("/embedded/sign_url/{}", signature_id))
            .await
    }

    // ── Unclaimed drafts ─────────────────────────────────────────────────

    pub async fn create_unclaimed_draft(
        &self,
        payload: FormPayload,
    ) -> Result<UnclaimedDraftEnvelope, SdkError> {
        self.post_form("/unclaimed_draft/create", payload).await
    }

    pub async fn create_embedded_unclaimed_draft(
        &self,
        payload: FormPayload,
    ) -> Result<UnclaimedDraftEnvelope, SdkError> {
        self.post_form("/unclaimed_draft/create_embedded", payload)
            .await
    }

    // ── Templates ────────────────────────────────────────────────────────

    pub async fn list_templates(
        &self,
        page: Option<u32>,
        query: Option<&str>,
    ) -> Result<TemplateListEnvelope, SdkError> {
        let mut path = "/template/list".to_string();
        let mut params = Vec::new();
        if let Some(p) = page {
            params.push(format!("page={}", p));
        }
        if let Some(q) = query {
            params.push(format!("query={}", urlencoding::encode(q)));
        }
        if !params.is_empty() {
            path = format!("{}?{}", path, params.join("&"));
        }
        self.get(&path).await
    }

    pub async fn get_template(&self, id: &TemplateId) -> Result<TemplateEnvelope, SdkError> {
        self.get(&format!("/template/{}", id)).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SdkError> {
        tracing::debug!(path, "GET");
        let req = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .basic_auth(self.api_key.expose(), Some(""));
        self.send_and_parse(req).await
    }

    /// POST a form payload: urlencoded when it carries no local files,
    /// multipart otherwise. Parameter order is preserved either way.
    async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        payload: FormPayload,
    ) -> Result<T, SdkError> {
        tracing::debug!(path, multipart = payload.has_files(), "POST");
        let mut req = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(self.api_key.expose(), Some(""));

        if payload.has_files() {
            let mut form = multipart::Form::new();
            for (key, value) in payload.params() {
                form = form.text(key.clone(), value.clone());
            }
            for file in payload.files() {
                let bytes = std::fs::read(&file.path)?;
                let file_name = file
                    .path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "document".to_string());
                form = form.part(
                    file.key.clone(),
                    multipart::Part::bytes(bytes).file_name(file_name),
                );
            }
            req = req.multipart(form);
        } else {
            req = req.form(payload.params());
        }

        self.send_and_parse(req).await
    }

    /// POST with no body for endpoints that reply with an empty 2xx.
    async fn post_empty(&self, path: &str) -> Result<(), SdkError> {
        tracing::debug!(path, "POST");
        let resp = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(self.api_key.expose(), Some(""))
            .send()
            .await
            .map_err(HttpError::from)?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), path, "api error");
        Err(normalize(status.as_u16(), &body))
    }

    async fn send_and_parse<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> Result<T, SdkError> {
        let resp = req.send().await.map_err(HttpError::from)?;
        let status = resp.status();

        if status.is_success() {
            let text = resp.text().await.map_err(HttpError::from)?;
            // A 2xx that is not the expected JSON shape surfaces the same
            // malformed-body contract as a garbled error page.
            return serde_json::from_str(&text).map_err(|_| {
                SdkError::Http(HttpError::MalformedBody {
                    status: status.as_u16(),
                })
            });
        }

        let body = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), "api error");
        Err(normalize(status.as_u16(), &body))
    }
}
