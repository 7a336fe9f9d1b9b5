use thiserror::Error;

use crate::model::api::FieldErrorDto;

/// Request input failed schema validation.
///
/// Carries one entry per offending field so clients can highlight each problem.
/// Results in a 400 Bad Request response with code `VALIDATION_ERROR`.
#[derive(Error, Debug, Default, Clone, PartialEq)]
#[error("Invalid request parameters")]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validation error for a single field.
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut error = Self::new();
        error.push(field, message);
        error
    }

    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Converts into `Err(self)` when any field failed, otherwise `Ok(())`.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    pub fn into_dto(self) -> Vec<FieldErrorDto> {
        self.fields
            .into_iter()
            .map(|f| FieldErrorDto {
                field: f.field,
                message: f.message,
            })
            .collect()
    }
}
