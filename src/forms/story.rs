//! "Share your story" draft

use async_trait::async_trait;
use serde::Serialize;

use super::draft::{require, require_email, Draft, FieldValue, FormError, ValidationIssue};
use super::flow::Submit;
use crate::client::{Backend, ClientResult};
use crate::models::{Story, StoryCategory};

const FIELDS: &[&str] = &[
    "title", "content", "author", "email", "location", "county", "category", "consent",
];

/// Writable fields of a story. Every field is required and consent must be given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoryDraft {
    pub title: String,
    pub content: String,
    pub author: String,
    pub email: String,
    pub location: String,
    pub county: String,
    pub category: StoryCategory,
    pub consent: bool,
}

impl StoryDraft {
    /// Text parts of the multipart body, in form order
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("content", self.content.clone()),
            ("author", self.author.clone()),
            ("email", self.email.clone()),
            ("location", self.location.clone()),
            ("county", self.county.clone()),
            ("category", self.category.as_str().to_string()),
            ("consent", self.consent.to_string()),
        ]
    }
}

impl Draft for StoryDraft {
    fn field_names(&self) -> &'static [&'static str] {
        FIELDS
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let text = |s: &String| Some(FieldValue::Text(s.clone()));
        match name {
            "title" => text(&self.title),
            "content" => text(&self.content),
            "author" => text(&self.author),
            "email" => text(&self.email),
            "location" => text(&self.location),
            "county" => text(&self.county),
            "category" => Some(FieldValue::Text(self.category.as_str().to_string())),
            "consent" => Some(FieldValue::Flag(self.consent)),
            _ => None,
        }
    }

    fn set_text(&mut self, name: &str, value: String) -> Result<(), FormError> {
        match name {
            "title" => self.title = value,
            "content" => self.content = value,
            "author" => self.author = value,
            "email" => self.email = value,
            "location" => self.location = value,
            "county" => self.county = value,
            "category" => {
                self.category = value.parse().map_err(|_| FormError::InvalidValue {
                    field: name.to_string(),
                    value,
                })?
            }
            "consent" => {
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
            "consent" => {
                self.consent = value;
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
        require(&mut issues, "title", &self.title);
        require(&mut issues, "content", &self.content);
        require(&mut issues, "author", &self.author);
        require_email(&mut issues, "email", &self.email);
        require(&mut issues, "location", &self.location);
        require(&mut issues, "county", &self.county);
        if !self.consent {
            issues.push(ValidationIssue::must_be_checked("consent"));
        }
        issues
    }
}

#[async_trait(?Send)]
impl Submit for StoryDraft {
    type Created = Story;
    const KIND: &'static str = "story";

    async fn send(&self, backend: &dyn Backend) -> ClientResult<Story> {
        backend.submit_story(self).await
    }
}
