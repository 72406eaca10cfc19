use std::fmt::{Display, Formatter};

/// A single rejected field. `field` names the offending form field so the
/// caller can surface the error next to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub reason: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Trims and requires a non-empty value.
pub fn parse_required_text(field: &'static str, input: &str) -> Result<String, ValidationError> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ValidationError::new(field, "must not be empty"));
    }
    Ok(s.to_string())
}

/// Trims; an empty value is allowed and stored as the empty string.
#[must_use]
pub fn parse_optional_text(input: &str) -> String {
    input.trim().to_string()
}
