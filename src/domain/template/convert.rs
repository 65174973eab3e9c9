//! Conversion: TemplateResponse → Template (TryFrom + validation).

use super::wire;
use super::{CcRole, CustomFieldDef, SignerRole, Template, ValidationError};
use crate::shared::TemplateId;

impl TryFrom<wire::TemplateResponse> for Template {
    type Error = ValidationError;

    fn try_from(source: wire::TemplateResponse) -> Result<Self, Self::Error> {
        let mut errors: Vec<ValidationError> = Vec::new();

        let id = source.template_id.clone().unwrap_or_else(|| {
            errors.push(ValidationError::MissingTemplateId);
            String::new()
        });

        let mut signer_roles = Vec::with_capacity(source.signer_roles.len());
        for (i, role) in source.signer_roles.into_iter().enumerate() {
            match role.name {
                Some(name) if !name.is_empty() => signer_roles.push(SignerRole {
                    name,
                    order: role.order,
                }),
                _ => errors.push(ValidationError::UnnamedSignerRole(i)),
            }
        }

        let mut cc_roles = Vec::with_capacity(source.cc_roles.len());
        for (i, role) in source.cc_roles.into_iter().enumerate() {
            match role.name {
                Some(name) if !name.is_empty() => cc_roles.push(CcRole { name }),
                _ => errors.push(ValidationError::UnnamedCcRole(i)),
            }
        }

        let mut custom_fields = Vec::with_capacity(source.custom_fields.len());
        for (i, field) in source.custom_fields.into_iter().enumerate() {
            match field.name {
                Some(name) if !name.is_empty() => custom_fields.push(CustomFieldDef {
                    name,
                    field_type: field.field_type,
                }),
                _ => errors.push(ValidationError::UnnamedCustomField(i)),
            }
        }

        if !errors.is_empty() {
            return Err(ValidationError::Multiple(id, errors));
        }

        Ok(Template {
            id: TemplateId::new(id),
            title: source.title.unwrap_or_default(),
            message: source.message.unwrap_or_default(),
            signer_roles,
            cc_roles,
            custom_fields,
            is_creator: source.is_creator,
            can_edit: source.can_edit,
        })
    }
}
