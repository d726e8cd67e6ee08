//! Structured error body returned by the service
//!
//! Sent with 400/401/403/404/500 responses and decoded into the error
//! target of a call instead of failing it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Service-reported problem
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Per-field validation problems
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

/// Nested validation error
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, deserialize_with = "null_as_default")]
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl ErrorResponse {
    /// `true` when the body carried no error code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty() && self.message.is_empty() && self.errors.is_empty()
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        if !self.description.is_empty() {
            write!(f, " ({})", self.description)?;
        }
        for error in &self.errors {
            match &error.field {
                Some(field) => write!(f, "; {field}: {} {}", error.code, error.message)?,
                None => write!(f, "; {} {}", error.code, error.message)?,
            }
        }
        Ok(())
    }
}

crate::impl_json_body!(ErrorResponse);
