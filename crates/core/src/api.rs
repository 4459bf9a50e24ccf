//! Wire shapes shared by the HTTP server and its clients.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Body of every non-success API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short summary, e.g. `Invalid order payload`
    pub error: String,

    /// Field-level messages, e.g. `customer_email: Invalid email address`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ErrorBody {
    /// An error with no field-level detail.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Vec::new(),
        }
    }

    /// Whether any detail mentions `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.details.iter().any(|detail| detail.contains(needle))
    }
}

impl Display for ErrorBody {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.error)?;

        if !self.details.is_empty() {
            write!(f, ": {}", self.details.join("; "))?;
        }

        Ok(())
    }
}
