//! Validation rules shared by the report form and the store.

use crate::error::ValidationError;

/// Validator for incident text fields
pub struct IncidentFormValidator;

impl IncidentFormValidator {
    /// Check that title and description contain something besides whitespace
    ///
    /// The title is checked first, so a form with both fields blank reports
    /// `EmptyTitle`.
    pub fn validate(title: &str, description: &str) -> Result<(), ValidationError> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle);
        }
        if description.trim().is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        Ok(())
    }

    /// Validate, then return both fields trimmed
    pub fn normalized(title: &str, description: &str) -> Result<(String, String), ValidationError> {
        Self::validate(title, description)?;
        Ok((title.trim().to_string(), description.trim().to_string()))
    }
}
