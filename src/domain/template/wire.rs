//! Wire types for template responses.

use super::FieldType;
use serde::Deserialize;

/// Envelope: `{"templates": [...], "list_info": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct TemplateListEnvelope {
    pub templates: Vec<TemplateResponse>,
    pub list_info: Option<ListInfo>,
}

/// Envelope: `{"template": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct TemplateEnvelope {
    pub template: TemplateResponse,
}

/// Paging metadata on list endpoints.
#[derive(Deserialize, Debug, Clone, Copy)]
pub struct ListInfo {
    pub page: u32,
    pub num_pages: u32,
    pub num_results: u32,
    pub page_size: u32,
}

/// A template as the server sends it. Converted to
/// [`super::Template`] with validation.
#[derive(Deserialize, Debug, Clone)]
pub struct TemplateResponse {
    pub template_id: Option<String>,
    pub title: Option<String>,
    pub message: Option<String>,
    #[serde(default)]
    pub signer_roles: Vec<RoleResponse>,
    #[serde(default)]
    pub cc_roles: Vec<RoleResponse>,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldResponse>,
    #[serde(default)]
    pub is_creator: bool,
    #[serde(default)]
    pub can_edit: bool,
}

/// A signer or CC role entry.
#[derive(Deserialize, Debug, Clone)]
pub struct RoleResponse {
    pub name: Option<String>,
    pub order: Option<u32>,
}

/// A custom-field declaration entry.
#[derive(Deserialize, Debug, Clone)]
pub struct CustomFieldResponse {
    pub name: Option<String>,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
}
