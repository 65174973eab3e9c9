//! Signature request domain — request models, signers, files, form encoding.

pub mod client;
pub mod wire;

use crate::error::SdkError;
use crate::shared::{FormPayload, TemplateId};
use std::path::PathBuf;

// ─── Signer ──────────────────────────────────────────────────────────────────

/// A party required to sign, identified by email/name or by a template
/// role name.
///
/// The two identification modes are mutually exclusive per request: plain
/// signers key the `signers[]` array by index, role signers key it by role
/// name, and the API rejects a mix. [`SignatureRequest::validate`] enforces
/// this before any transport work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signer {
    pub email_address: String,
    pub name: String,
    pub role: Option<String>,
}

impl Signer {
    pub fn new(email_address: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email_address: email_address.into(),
            name: name.into(),
            role: None,
        }
    }

    pub fn with_role(
        role: impl Into<String>,
        email_address: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            email_address: email_address.into(),
            name: name.into(),
            role: Some(role.into()),
        }
    }
}

// ─── Files ───────────────────────────────────────────────────────────────────

/// A document attached to a request: a local path (uploaded as a multipart
/// part) or a remote URL the server fetches itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileSource {
    Path(PathBuf),
    Url(String),
}

// ─── Custom fields ───────────────────────────────────────────────────────────

/// A named value substituted into a template document at send time.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CustomField {
    pub name: String,
    pub value: String,
}

// ─── SignatureRequest ────────────────────────────────────────────────────────

/// A signature request under construction.
///
/// Setters are consuming and chainable; nothing touches the network or the
/// filesystem until the request is submitted, at which point it is encoded
/// immutably into a [`FormPayload`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureRequest {
    title: Option<String>,
    subject: Option<String>,
    message: Option<String>,
    requester_email_address: Option<String>,
    signers: Vec<Signer>,
    cc_email_addresses: Vec<String>,
    files: Vec<FileSource>,
    custom_fields: Vec<CustomField>,
    metadata: Vec<(String, String)>,
    test_mode: bool,
}

impl SignatureRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The address that will own an unclaimed draft created from this
    /// request. Ignored by the plain send endpoints.
    pub fn requester_email_address(mut self, email: impl Into<String>) -> Self {
        self.requester_email_address = Some(email.into());
        self
    }

    /// Add a plain (email + name) signer.
    pub fn signer(mut self, email_address: impl Into<String>, name: impl Into<String>) -> Self {
        self.signers.push(Signer::new(email_address, name));
        self
    }

    pub(crate) fn push_signer(&mut self, signer: Signer) {
        self.signers.push(signer);
    }

    /// CC an email address on the finished documents.
    pub fn cc(mut self, email_address: impl Into<String>) -> Self {
        self.cc_email_addresses.push(email_address.into());
        self
    }

    /// Attach a local file; read and uploaded at submission.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.push(FileSource::Path(path.into()));
        self
    }

    /// Attach a file by URL; the server fetches it.
    pub fn file_url(mut self, url: impl Into<String>) -> Self {
        self.files.push(FileSource::Url(url.into()));
        self
    }

    /// Set a custom-field value. Setting the same name again replaces the
    /// value; the order of first insertion is what gets encoded.
    pub fn custom_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_custom_field(name.into(), value.into());
        self
    }

    pub(crate) fn set_custom_field(&mut self, name: String, value: String) {
        if let Some(existing) = self.custom_fields.iter_mut().find(|f| f.name == name) {
            existing.value = value;
        } else {
            self.custom_fields.push(CustomField { name, value });
        }
    }

    /// Attach a metadata key/value pair, stored with the request
    /// server-side and echoed back in responses.
    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.push((key.into(), value.into()));
        self
    }

    /// Flag the request as a test: no legally binding signature, no charge.
    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.test_mode = enabled;
        self
    }

    pub fn signers(&self) -> &[Signer] {
        &self.signers
    }

    pub fn custom_fields(&self) -> &[CustomField] {
        &self.custom_fields
    }

    pub fn files(&self) -> &[FileSource] {
        &self.files
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// Check local constraints. Runs before every submission.
    pub fn validate(&self) -> Result<(), SdkError> {
        let role_based = self.signers.iter().filter(|s| s.role.is_some()).count();
        if role_based > 0 && role_based < self.signers.len() {
            return Err(SdkError::Validation(
                "A role-based signer cannot be combined with a plain signer on the same request"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Common parameters shared by every submission endpoint.
    fn encode_common(&self, payload: &mut FormPayload) {
        if let Some(title) = &self.title {
            payload.push("title", title);
        }
        if let Some(subject) = &self.subject {
            payload.push("subject", subject);
        }
        if let Some(message) = &self.message {
            payload.push("message", message);
        }
        if self.test_mode {
            payload.push("test_mode", "1");
        }
        for (key, value) in &self.metadata {
            payload.push(format!("metadata[{}]", key), value);
        }
    }

    /// JSON-encode the custom-field array in insertion order, the shape the
    /// `custom_fields` parameter expects.
    fn encode_custom_fields(&self, payload: &mut FormPayload) -> Result<(), SdkError> {
        if !self.custom_fields.is_empty() {
            payload.push("custom_fields", serde_json::to_string(&self.custom_fields)?);
        }
        Ok(())
    }

    fn encode_files(&self, payload: &mut FormPayload) {
        let mut file_idx = 0;
        let mut url_idx = 0;
        for source in &self.files {
            match source {
                FileSource::Path(path) => {
                    payload.push_file(format!("file[{}]", file_idx), path.clone());
                    file_idx += 1;
                }
                FileSource::Url(url) => {
                    payload.push(format!("file_url[{}]", url_idx), url);
                    url_idx += 1;
                }
            }
        }
    }

    /// Encode for the plain send endpoints (`signature_request/send`,
    /// `signature_request/create_embedded`, `unclaimed_draft/*`).
    pub fn to_payload(&self) -> Result<FormPayload, SdkError> {
        self.validate()?;
        if self.signers.iter().any(|s| s.role.is_some()) {
            return Err(SdkError::Validation(
                "Role-based signers require a template request".to_string(),
            ));
        }

        let mut payload = FormPayload::new();
        self.encode_common(&mut payload);
        if let Some(requester) = &self.requester_email_address {
            payload.push("requester_email_address", requester);
        }
        for (i, signer) in self.signers.iter().enumerate() {
            payload.push(
                format!("signers[{}][email_address]", i),
                &signer.email_address,
            );
            payload.push(format!("signers[{}][name]", i), &signer.name);
        }
        for (i, cc) in self.cc_email_addresses.iter().enumerate() {
            payload.push(format!("cc_email_addresses[{}]", i), cc);
        }
        self.encode_files(&mut payload);
        self.encode_custom_fields(&mut payload)?;
        Ok(payload)
    }
}

// ─── TemplateSignatureRequest ────────────────────────────────────────────────

/// A signature request bound to a template.
///
/// Composes a base [`SignatureRequest`] with a template id; signers and CCs
/// are keyed by the template's declared role names and documents come from
/// the template, so file attachments are rejected at validation.
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSignatureRequest {
    base: SignatureRequest,
    template_id: TemplateId,
    /// (role, email) pairs for the template's CC roles.
    ccs: Vec<(String, String)>,
}

impl TemplateSignatureRequest {
    pub fn new(template_id: impl Into<TemplateId>) -> Self {
        Self {
            base: SignatureRequest::new(),
            template_id: template_id.into(),
            ccs: Vec::new(),
        }
    }

    /// Bind an existing request to a template, keeping whatever state it
    /// already carries.
    pub fn from_request(request: SignatureRequest, template_id: impl Into<TemplateId>) -> Self {
        Self {
            base: request,
            template_id: template_id.into(),
            ccs: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.base = self.base.title(title);
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.base = self.base.subject(subject);
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.base = self.base.message(message);
        self
    }

    pub fn test_mode(mut self, enabled: bool) -> Self {
        self.base = self.base.test_mode(enabled);
        self
    }

    pub fn metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.base = self.base.metadata(key, value);
        self
    }

    /// Assign a signer to one of the template's declared roles.
    pub fn signer(
        mut self,
        role: impl Into<String>,
        email_address: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        self.base.push_signer(Signer::with_role(role, email_address, name));
        self
    }

    /// CC an email address under one of the template's CC roles.
    pub fn cc(mut self, role: impl Into<String>, email_address: impl Into<String>) -> Self {
        self.ccs.push((role.into(), email_address.into()));
        self
    }

    pub fn custom_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.base.set_custom_field(name.into(), value.into());
        self
    }

    pub fn template_id(&self) -> &TemplateId {
        &self.template_id
    }

    pub fn base(&self) -> &SignatureRequest {
        &self.base
    }

    /// Names of the populated custom fields, in insertion order. Feed these
    /// to [`crate::domain::template::Template::validate_custom_fields`] for
    /// a client-side fast-fail before submission.
    pub fn custom_field_names(&self) -> impl Iterator<Item = &str> {
        self.base.custom_fields.iter().map(|f| f.name.as_str())
    }

    pub fn validate(&self) -> Result<(), SdkError> {
        self.base.validate()?;
        if self.base.signers.iter().any(|s| s.role.is_none()) {
            return Err(SdkError::Validation(
                "Template requests identify signers by role name".to_string(),
            ));
        }
        if !self.base.files.is_empty() {
            return Err(SdkError::Validation(
                "Template requests take their documents from the template; files cannot be attached"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Encode for the template endpoints (`signature_request/send_with_template`,
    /// `signature_request/create_embedded_with_template`).
    pub fn to_payload(&self) -> Result<FormPayload, SdkError> {
        self.validate()?;

        let mut payload = FormPayload::new();
        payload.push("template_id", self.template_id.as_str());
        self.base.encode_common(&mut payload);
        for signer in &self.base.signers {
            // validate() guarantees the role is present
            let role = signer.role.as_deref().unwrap_or_default();
            payload.push(
                format!("signers[{}][email_address]", role),
                &signer.email_address,
            );
            payload.push(format!("signers[{}][name]", role), &signer.name);
        }
        for (role, email) in &self.ccs {
            payload.push(format!("ccs[{}][email_address]", role), email);
        }
        self.base.encode_custom_fields(&mut payload)?;
        Ok(payload)
    }
}

// ─── AnySignatureRequest ─────────────────────────────────────────────────────

/// Either request kind, for flows that accept both (embedded signing).
///
/// Template-ness and embedded-ness are orthogonal, so the embedded wrapper
/// composes over this enum instead of either concrete type.
#[derive(Debug, Clone, PartialEq)]
pub enum AnySignatureRequest {
    Basic(SignatureRequest),
    Template(TemplateSignatureRequest),
}

impl AnySignatureRequest {
    pub fn validate(&self) -> Result<(), SdkError> {
        match self {
            Self::Basic(r) => r.validate(),
            Self::Template(r) => r.validate(),
        }
    }

    pub fn to_payload(&self) -> Result<FormPayload, SdkError> {
        match self {
            Self::Basic(r) => r.to_payload(),
            Self::Template(r) => r.to_payload(),
        }
    }
}

impl From<SignatureRequest> for AnySignatureRequest {
    fn from(r: SignatureRequest) -> Self {
        Self::Basic(r)
    }
}

impl From<TemplateSignatureRequest> for AnySignatureRequest {
    fn from(r: TemplateSignatureRequest) -> Self {
        Self::Template(r)
    }
}
