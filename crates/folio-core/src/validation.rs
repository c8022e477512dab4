//! Form field validation
//!
//! A field is invalid when it is required and empty, or when it is an email
//! field whose non-empty value does not look like `local@domain.tld`. The
//! email check is the simple presence-of-`@`-then-`.` pattern, not RFC 5322.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

/// Input type of a form field, as declared in the markup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    TextArea,
}

impl FieldKind {
    /// Map an element's tag and `type` attribute to a field kind.
    pub fn from_markup(tag: &str, input_type: Option<&str>) -> Self {
        if tag.eq_ignore_ascii_case("textarea") {
            return FieldKind::TextArea;
        }
        match input_type {
            Some(t) if t.eq_ignore_ascii_case("email") => FieldKind::Email,
            _ => FieldKind::Text,
        }
    }
}

/// Static description of a form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Element id of the field
    pub id: String,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn new(id: impl Into<String>, kind: FieldKind, required: bool) -> Self {
        Self {
            id: id.into(),
            kind,
            required,
        }
    }

    pub fn required_email(id: impl Into<String>) -> Self {
        Self::new(id, FieldKind::Email, true)
    }
}

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    /// Inline message shown under the field.
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// Validate one field value against its spec.
pub fn validate_field(spec: &FieldSpec, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if spec.required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if spec.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}
