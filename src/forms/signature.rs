//! "Sign the petition" draft

use async_trait::async_trait;
use serde::Serialize;

use super::draft::{require, require_email, Draft, FieldValue, FormError, ValidationIssue};
use super::flow::Submit;
use crate::client::{Backend, ClientResult};
use crate::models::PetitionSignature;

const FIELDS: &[&str] = &["name", "email", "location", "county", "comment", "isAnonymous"];

/// Writable fields of a signature
///
/// The name is required unless the signer chose to stay anonymous.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureDraft {
    pub name: String,
    pub email: String,
    pub location: String,
    pub county: String,
    pub comment: String,
    pub is_anonymous: bool,
}

/// JSON body of `POST /petition/sign`
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRequest<'a> {
    pub name: Option<&'a str>,
    pub email: &'a str,
    pub location: &'a str,
    pub county: &'a str,
    pub comment: &'a str,
    pub is_anonymous: bool,
}

impl SignatureDraft {
    /// Request body; anonymous signers send no name
    pub fn payload(&self) -> SignatureRequest<'_> {
        SignatureRequest {
            name: if self.is_anonymous {
                None
            } else {
                Some(self.name.as_str())
            },
            email: &self.email,
            location: &self.location,
            county: &self.county,
            comment: &self.comment,
            is_anonymous: self.is_anonymous,
        }
    }

    /// The name input is disabled while signing anonymously
    pub fn name_enabled(&self) -> bool {
        !self.is_anonymous
    }
}

impl Draft for SignatureDraft {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let text = |s: &String| Some(FieldValue::Text(s.clone()));
        match name {
            "name" => text(&self.name),
            "email" => text(&self.email),
            "location" => text(&self.location),
            "county" => text(&self.county),
            "comment" => text(&self.comment),
            "isAnonymous" => Some(FieldValue::Flag(self.is_anonymous)),
            _ => None,
        }
    }

    fn set_text(&mut self, name: &str, value: String) -> Result<(), FormError> {
        match name {
            "name" => self.name = value,
            "email" => self.email = value,
            "location" => self.location = value,
            "county" => self.county = value,
            "comment" => self.comment = value,
            "isAnonymous" => {
                return Err(FormError::InvalidValue {
                    field: name.to_string(),
                    value,
                })
            }
            _ => return Err(FormError::UnknownField(name.to_string())),
        }
        Ok(())
    }

    fn set_flag(&mut self, name: &str, value: bool) -> Result<(), FormError> {
        match name {
            "isAnonymous" => {
                self.is_anonymous = value;
                Ok(())
            }
            _ if FIELDS.contains(&name) => Err(FormError::InvalidValue {
                field: name.to_string(),
                value: value.to_string(),
            }),
            _ => Err(FormError::UnknownField(name.to_string())),
        }
    }

    fn issues(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        if !self.is_anonymous {
            require(&mut issues, "name", &self.name);
        }
        require_email(&mut issues, "email", &self.email);
        require(&mut issues, "location", &self.location);
        require(&mut issues, "county", &self.county);
        issues
    }
}

#[async_trait(?Send)]
impl Submit for SignatureDraft {
    type Created = PetitionSignature;
    const KIND: &'static str = "signature";

    async fn send(&self, backend: &dyn Backend) -> ClientResult<PetitionSignature> {
        backend.submit_signature(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{FieldChange, InputKind};

    fn jane() -> SignatureDraft {
        SignatureDraft {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            location: "Nairobi".to_string(),
            county: "Nairobi".to_string(),
            comment: String::new(),
            is_anonymous: false,
        }
    }

    #[test]
    fn test_is_anonymous_checkbox_stores_bool() {
        let mut draft = SignatureDraft::default();
        draft.apply(&FieldChange::checkbox("isAnonymous", true)).unwrap();
        assert_eq!(draft.field("isAnonymous"), Some(FieldValue::Flag(true)));
        assert!(!draft.name_enabled());
    }

    #[test]
    fn test_textarea_stores_string() {
        let mut draft = SignatureDraft::default();
        draft
            .apply(&FieldChange::new("comment", InputKind::TextArea, "Act now"))
            .unwrap();
        assert_eq!(draft.comment, "Act now");
    }

    #[test]
    fn test_payload_matches_wire_format() {
        let json = serde_json::to_value(jane().payload()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jane",
                "email": "jane@x.com",
                "location": "Nairobi",
                "county": "Nairobi",
                "comment": "",
                "isAnonymous": false
            })
        );
    }

    #[test]
    fn test_anonymous_payload_drops_name() {
        let mut draft = jane();
        draft.is_anonymous = true;
        assert_eq!(draft.payload().name, None);
    }

    #[test]
    fn test_name_optional_when_anonymous() {
        let mut draft = jane();
        draft.name.clear();
        assert_eq!(draft.missing_required(), vec!["name"]);

        draft.is_anonymous = true;
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_comment_is_optional() {
        assert!(jane().validate().is_ok());
    }
}
