use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of dish submission failures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SubmitErrorKind {
    /// The draft failed client-side checks; nothing was sent.
    Validation,
    /// The endpoint answered with a non-success status.
    Rejected,
    /// The request never completed (DNS, connect, TLS, ...).
    Transport,
    /// The response body could not be read.
    Decode,
}

impl fmt::Display for SubmitErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitErrorKind::Validation => write!(f, "Validation"),
            SubmitErrorKind::Rejected => write!(f, "Rejected"),
            SubmitErrorKind::Transport => write!(f, "Transport"),
            SubmitErrorKind::Decode => write!(f, "Decode"),
        }
    }
}

/// Structured error produced while assembling or sending a dish.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmitError {
    pub kind: SubmitErrorKind,
    pub message: String,
    /// HTTP status for `Rejected` errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Per-field messages keyed by payload key (`no_of_slices`, ...).
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl SubmitError {
    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: SubmitErrorKind::Validation,
            message: message.into(),
            status: None,
            field_errors,
        }
    }

    pub fn rejected(status: u16, message: impl Into<String>) -> Self {
        Self {
            kind: SubmitErrorKind::Rejected,
            message: message.into(),
            status: Some(status),
            field_errors: HashMap::new(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: SubmitErrorKind::Transport,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self {
            kind: SubmitErrorKind::Decode,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    /// Build a `Rejected` error from a non-success response.
    ///
    /// Prefers the `message` string of a JSON body, then the status reason
    /// phrase, then the bare status code.
    pub fn from_rejection(status: u16, reason: Option<&str>, body: &str) -> Self {
        let message = Self::server_message(body)
            .or_else(|| reason.filter(|r| !r.is_empty()).map(str::to_string))
            .unwrap_or_else(|| format!("HTTP {status}"));
        Self::rejected(status, message)
    }

    /// Extract a non-empty `message` string from a JSON response body.
    pub fn server_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("message")
            .and_then(|m| m.as_str())
            .filter(|m| !m.is_empty())
            .map(str::to_string)
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.field_errors.get(field).map(String::as_str)
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for SubmitError {}

impl From<validator::ValidationErrors> for SubmitError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        SubmitError::validation("Validation failed", field_errors)
    }
}
