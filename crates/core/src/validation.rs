//! Field-level validation errors.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Path of the offending field, e.g. `order_lines[0].quantity`
    pub field: String,

    /// Human readable reason
    pub message: String,
}

/// All field errors collected while validating one payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    errors: SmallVec<[FieldError; 4]>,
}

impl ValidationErrors {
    /// Creates an empty error collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an error against `field`.
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Records `message` against `field` when `value` is blank.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.push(field, message);
        }
    }

    /// Whether no errors were recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over the recorded errors.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Whether an error was recorded for `field`.
    pub fn contains(&self, field: &str) -> bool {
        self.errors.iter().any(|error| error.field == field)
    }

    /// `Ok(())` when empty, otherwise `Err(self)`.
    ///
    /// # Errors
    ///
    /// Returns the collection itself when at least one error was recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }

            write!(f, "{}: {}", error.field, error.message)?;
        }

        Ok(())
    }
}

/// Loose structural email check: one `@`, a non-empty local part and a dotted domain.
pub fn is_well_formed_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}
