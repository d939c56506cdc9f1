//! Validation error model.

use thiserror::Error;

/// A single failed field check: field name plus the inline message the
/// admin form shows next to that field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Accumulated per-field validation failures.
///
/// Non-fatal by contract: callers surface these as inline field messages
/// and keep the form open. Infrastructure failures belong elsewhere.
#[derive(Debug, Clone, PartialEq, Eq, Default, Error)]
#[error("validation failed: {}", failed_fields(.errors))]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

fn failed_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.field)
        .collect::<Vec<_>>()
        .join(", ")
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record a required-field failure when `value` is blank.
    pub fn require(&mut self, field: &'static str, label: &str, value: &str) {
        if value.trim().is_empty() {
            self.push(field, format!("{label} is required"));
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// The message for one field, if that field failed.
    pub fn message_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_records_blank_fields_only() {
        let mut errors = FieldErrors::new();
        errors.require("title", "Product title", "   ");
        errors.require("code", "Product code", "ODF-R24");
        assert_eq!(errors.errors().len(), 1);
        assert_eq!(
            errors.message_for("title"),
            Some("Product title is required")
        );
        assert_eq!(errors.message_for("code"), None);
    }

    #[test]
    fn display_lists_the_failed_fields() {
        let mut errors = FieldErrors::new();
        errors.require("title", "Product title", "");
        errors.require("code", "Product code", "");
        assert_eq!(errors.to_string(), "validation failed: title, code");
    }

    #[test]
    fn into_result_is_ok_when_no_field_failed() {
        assert!(FieldErrors::new().into_result().is_ok());

        let mut errors = FieldErrors::new();
        errors.require("description", "Product description", "");
        assert!(errors.into_result().is_err());
    }
}
