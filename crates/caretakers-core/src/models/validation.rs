//! Presence checks for draft records.

use thiserror::Error;

/// Message shown when a submit is rejected for missing fields.
pub const REQUIRED_FIELDS_MESSAGE: &str = "Please fill in all required fields";

/// A draft is missing one or more required fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Please fill in all required fields")]
pub struct ValidationError {
    /// Names of the missing fields, in form order.
    pub missing: Vec<&'static str>,
}

/// Accumulates missing required fields.
///
/// Only presence is checked: text counts as missing when it is blank after
/// trimming, other values when they are `None`.
#[derive(Debug, Default)]
pub struct RequiredFields {
    missing: Vec<&'static str>,
}

impl RequiredFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, field: &'static str, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(field);
        }
        self
    }

    pub fn value<T>(mut self, field: &'static str, value: &Option<T>) -> Self {
        if value.is_none() {
            self.missing.push(field);
        }
        self
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                missing: self.missing,
            })
        }
    }
}
