use std::collections::HashMap;

use crate::server::error::validation::ValidationError;

/// How malformed values of recognized query parameters are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    /// Malformed values are collected into a `ValidationError`.
    Strict,
    /// Malformed values are dropped as if the parameter was absent.
    Lenient,
}

/// Typed accessor over raw query string parameters.
///
/// Blank values are treated as absent. Errors accumulate until `finish` so a single
/// response can report every offending field.
pub struct QueryParams<'a> {
    raw: &'a HashMap<String, String>,
    mode: ParseMode,
    errors: ValidationError,
}

impl<'a> QueryParams<'a> {
    pub fn new(raw: &'a HashMap<String, String>, mode: ParseMode) -> Self {
        Self {
            raw,
            mode,
            errors: ValidationError::new(),
        }
    }

    fn value(&self, key: &str) -> Option<&'a str> {
        self.raw
            .get(key)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn reject(&mut self, key: &str, message: String) {
        if self.mode == ParseMode::Strict {
            self.errors.push(key, message);
        }
    }

    /// Parses an integer parameter that must be at least `min`.
    pub fn int(&mut self, key: &str, min: i32) -> Option<i32> {
        let value = self.value(key)?;
        match value.parse::<i32>() {
            Ok(n) if n >= min => Some(n),
            _ => {
                self.reject(key, format!("must be an integer greater than or equal to {}", min));
                None
            }
        }
    }

    /// Parses an integer parameter without a lower bound.
    pub fn any_int(&mut self, key: &str) -> Option<i32> {
        let value = self.value(key)?;
        match value.parse::<i32>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.reject(key, "must be an integer".to_string());
                None
            }
        }
    }

    /// Returns a trimmed, non-empty text parameter.
    pub fn text(&mut self, key: &str) -> Option<String> {
        self.value(key).map(str::to_string)
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        self.errors.into_result()
    }
}
