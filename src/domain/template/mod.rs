//! Template domain — template types, validation, conversion.

pub mod client;
mod convert;
pub mod wire;

use crate::error::SdkError;
use crate::shared::TemplateId;
use serde::{Deserialize, Serialize};
use std::fmt;

// ─── Template ────────────────────────────────────────────────────────────────

/// A reusable document definition fetched from the API.
///
/// Role and custom-field lists preserve the server's declared order
/// exactly; template requests reference entries by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: TemplateId,
    pub title: String,
    pub message: String,
    pub signer_roles: Vec<SignerRole>,
    pub cc_roles: Vec<CcRole>,
    pub custom_fields: Vec<CustomFieldDef>,
    pub is_creator: bool,
    pub can_edit: bool,
}

/// A declared signer role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignerRole {
    pub name: String,
    pub order: Option<u32>,
}

/// A declared CC role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CcRole {
    pub name: String,
}

/// A declared custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldDef {
    pub name: String,
    pub field_type: FieldType,
}

/// Custom-field value type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Checkbox,
    /// Forward-compatible catch-all for field types this SDK predates.
    #[serde(other)]
    Unknown,
}

impl Template {
    /// Check a request's populated custom-field names against this
    /// template's declared set.
    ///
    /// A client-side fast-fail: the server performs the same check on
    /// submission and rejects with an identical message, so callers see one
    /// contract whether or not they pre-validate.
    pub fn validate_custom_fields<'a>(
        &self,
        names: impl IntoIterator<Item = &'a str>,
    ) -> Result<(), SdkError> {
        for name in names {
            if !self.custom_fields.iter().any(|f| f.name == name) {
                return Err(SdkError::InvalidCustomField {
                    field: name.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug)]
pub enum ValidationError {
    Multiple(String, Vec<ValidationError>),
    MissingTemplateId,
    UnnamedSignerRole(usize),
    UnnamedCcRole(usize),
    UnnamedCustomField(usize),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Multiple(id, errors) => {
                writeln!(f, "Template validation errors ({id}):")?;
                for err in errors {
                    writeln!(f, "  - {}", err)?;
                }
                Ok(())
            }
            ValidationError::MissingTemplateId => write!(f, "Missing template id"),
            ValidationError::UnnamedSignerRole(i) => write!(f, "Signer role {i} has no name"),
            ValidationError::UnnamedCcRole(i) => write!(f, "CC role {i} has no name"),
            ValidationError::UnnamedCustomField(i) => write!(f, "Custom field {i} has no name"),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn template_with_fields(names: &[&str]) -> Template {
        Template {
            id: TemplateId::new("t_123"),
            title: "Purchase Order".to_string(),
            message: String::new(),
            signer_roles: vec![SignerRole {
                name: "Client".to_string(),
                order: None,
            }],
            cc_roles: vec![],
            custom_fields: names
                .iter()
                .map(|n| CustomFieldDef {
                    name: n.to_string(),
                    field_type: FieldType::Text,
                })
                .collect(),
            is_creator: true,
            can_edit: true,
        }
    }

    #[test]
    fn test_validate_custom_fields_accepts_declared_names() {
        let template = template_with_fields(&["Cost", "Delivery Date"]);
        assert!(template
            .validate_custom_fields(["Cost", "Delivery Date"])
            .is_ok());
    }

    #[test]
    fn test_validate_custom_fields_names_the_offender() {
        let template = template_with_fields(&["Cost"]);
        let err = template
            .validate_custom_fields(["Cost", "invalid_field"])
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid custom field: invalid_field");
        assert!(matches!(
            err,
            SdkError::InvalidCustomField { field } if field == "invalid_field"
        ));
    }

    #[test]
    fn test_validate_custom_fields_empty_request_is_ok() {
        let template = template_with_fields(&[]);
        assert!(template.validate_custom_fields([]).is_ok());
    }
}
