//! Field-level draft editing and validation

use thiserror::Error;

/// The `type` of the input element a change came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
    Select,
    Checkbox,
}

impl InputKind {
    /// Map a DOM `type` attribute (`HTMLInputElement.type`, `"select-one"`, `"textarea"`)
    pub fn from_dom(type_attr: &str) -> Self {
        match type_attr {
            "checkbox" => InputKind::Checkbox,
            "email" => InputKind::Email,
            "textarea" => InputKind::TextArea,
            "select-one" | "select" => InputKind::Select,
            _ => InputKind::Text,
        }
    }
}

/// One input event: which field changed and what the element reported
#[derive(Debug, Clone, PartialEq)]
pub struct FieldChange {
    pub name: String,
    pub kind: InputKind,
    pub value: String,
    pub checked: bool,
}

impl FieldChange {
    pub fn new(name: impl Into<String>, kind: InputKind, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            value: value.into(),
            checked: false,
        }
    }

    /// Change from a text input
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, InputKind::Text, value)
    }

    /// Change from a checkbox; `value` carries the element's static value attribute
    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            kind: InputKind::Checkbox,
            value: "on".to_string(),
            checked,
        }
    }
}

/// Current value of a draft field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FieldValue::Flag(b) => Some(*b),
            FieldValue::Text(_) => None,
        }
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    Required,
    InvalidEmail,
    MustBeChecked,
}

/// A field that failed client-side validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub field: &'static str,
    pub kind: IssueKind,
}

impl ValidationIssue {
    pub const fn required(field: &'static str) -> Self {
        Self {
            field,
            kind: IssueKind::Required,
        }
    }

    pub const fn invalid_email(field: &'static str) -> Self {
        Self {
            field,
            kind: IssueKind::InvalidEmail,
        }
    }

    pub const fn must_be_checked(field: &'static str) -> Self {
        Self {
            field,
            kind: IssueKind::MustBeChecked,
        }
    }

    pub fn message(&self) -> &'static str {
        match self.kind {
            IssueKind::Required => "is required",
            IssueKind::InvalidEmail => "must be a valid email address",
            IssueKind::MustBeChecked => "must be checked",
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.message())
    }
}

/// Errors raised while editing or submitting a form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Please check the form: {}", join_issues(.0))]
    Invalid(Vec<ValidationIssue>),

    #[error("A submission is already in progress")]
    Busy,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ValidationIssue::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A flat, editable record mirroring an entity's writable fields
pub trait Draft: Clone + Default + PartialEq {
    /// Names of every field, in form order
    fn field_names(&self) -> &'static [&'static str];

    /// Current value of a field by name
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Set a string-backed field
    fn set_text(&mut self, name: &str, value: String) -> Result<(), FormError>;

    /// Set a checkbox-backed field
    fn set_flag(&mut self, name: &str, value: bool) -> Result<(), FormError>;

    /// Client-side required-field and format checks
    fn issues(&self) -> Vec<ValidationIssue>;

    /// Update exactly the changed field.
    ///
    /// The field's own type decides the stored value: checkbox-backed fields
    /// always store a boolean, every other field stores the string value.
    fn apply(&mut self, change: &FieldChange) -> Result<(), FormError> {
        match self.field(&change.name) {
            None => Err(FormError::UnknownField(change.name.clone())),
            Some(FieldValue::Flag(_)) => {
                let checked = match change.kind {
                    InputKind::Checkbox => change.checked,
                    _ => parse_flag(&change.value),
                };
                self.set_flag(&change.name, checked)
            }
            Some(FieldValue::Text(_)) => self.set_text(&change.name, change.value.clone()),
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        let issues = self.issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(FormError::Invalid(issues))
        }
    }

    /// Names of the required fields that are still empty
    fn missing_required(&self) -> Vec<&'static str> {
        self.issues()
            .into_iter()
            .filter(|issue| issue.kind == IssueKind::Required)
            .map(|issue| issue.field)
            .collect()
    }

    fn reset(&mut self) {
        *self = Self::default();
    }

    fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "on" | "1" | "yes"
    )
}

/// Push a `required` issue when the value is blank
pub(crate) fn require(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        issues.push(ValidationIssue::required(field));
    }
}

/// Required email with the same shape check as `<input type="email">`
pub(crate) fn require_email(issues: &mut Vec<ValidationIssue>, field: &'static str, value: &str) {
    let value = value.trim();
    if value.is_empty() {
        issues.push(ValidationIssue::required(field));
    } else if !looks_like_email(value) {
        issues.push(ValidationIssue::invalid_email(field));
    }
}

fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}
