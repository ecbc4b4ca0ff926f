//! Validation outcome produced by a form-binding layer

/// Result of binding and validating a submitted form
///
/// Workflows consult `has_errors()` before saving; they never validate
/// entities themselves.
pub trait BindingResult {
    fn has_errors(&self) -> bool;
}

/// A rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
}

/// Collected field errors, for callers without their own binding layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: Vec<FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `field` was rejected with `code`
    pub fn reject(&mut self, field: impl Into<String>, code: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            code: code.into(),
        });
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl BindingResult for FieldErrors {
    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
