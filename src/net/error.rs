//! Uniform API error type and response-body classification.
//!
//! The backend reports failures in two shapes: a list of strings (general
//! errors) or a mapping from field name to a list of strings (validation
//! errors keyed by form field). Classification is a pure function of the
//! HTTP status and the parsed body so it can be tested natively.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;

/// Body keys that carry a general (non-field) message.
const GENERAL_KEYS: &[&str] = &["non_field_errors", "detail"];

/// Error returned by every API helper.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// No response received (connectivity failure or request timeout).
    #[error("Could not reach the server. Please check your connection and try again.")]
    Network,
    /// HTTP 401: credential missing or rejected. Callers treat this as
    /// session expiry.
    #[error("Your session has expired. Please sign in again.")]
    Unauthorized,
    /// 4xx with a structured body: field-keyed messages plus an optional
    /// general message.
    #[error("{}", .0.summary())]
    Validation(FieldErrors),
    /// 5xx, or a body shape the client does not recognize.
    #[error("Something went wrong on the server (status {status}). Please try again.")]
    Server { status: u16 },
}

/// Validation messages distributed by form field, with unmatched keys folded
/// into a single general message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    fields: BTreeMap<String, String>,
    general: Option<String>,
}

impl FieldErrors {
    /// A general message with no per-field entries.
    pub fn general_only(message: impl Into<String>) -> Self {
        Self {
            fields: BTreeMap::new(),
            general: Some(message.into()),
        }
    }

    /// Message attached to a specific form field.
    pub fn field(&self, name: &str) -> Option<String> {
        self.fields.get(name).cloned()
    }

    /// The catch-all message, if any.
    pub fn general(&self) -> Option<String> {
        self.general.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.general.is_none()
    }

    /// Rename a field key, keeping its message. Used to map backend field
    /// names onto the form's own names (e.g. `password1` -> `password`).
    pub fn renamed(mut self, from: &str, to: &str) -> Self {
        if let Some(message) = self.fields.remove(from) {
            self.fields.insert(to.to_owned(), message);
        }
        self
    }

    /// One-line message suitable for an inline alert.
    pub fn summary(&self) -> String {
        self.general
            .clone()
            .unwrap_or_else(|| "Please correct the highlighted fields.".to_owned())
    }

    fn insert(&mut self, key: &str, message: String) {
        if GENERAL_KEYS.contains(&key) {
            match &mut self.general {
                Some(existing) => {
                    existing.push(' ');
                    existing.push_str(&message);
                }
                None => self.general = Some(message),
            }
        } else {
            self.fields.insert(key.to_owned(), message);
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Map a failed response onto the error taxonomy.
pub fn classify(status: u16, body: &Value) -> ApiError {
    if status == 401 {
        return ApiError::Unauthorized;
    }
    if (400..500).contains(&status) {
        if let Some(errors) = field_errors_from_body(body) {
            return ApiError::Validation(errors);
        }
    }
    ApiError::Server { status }
}

/// Parse a structured error body. Returns `None` when the shape is not one
/// the backend produces, in which case the caller falls back to a generic
/// server error.
fn field_errors_from_body(body: &Value) -> Option<FieldErrors> {
    match body {
        Value::Object(map) => {
            let mut errors = FieldErrors::default();
            for (key, value) in map {
                if let Some(message) = join_messages(value) {
                    errors.insert(key, message);
                }
            }
            (!errors.is_empty()).then_some(errors)
        }
        Value::Array(_) => join_messages(body).map(FieldErrors::general_only),
        Value::String(message) if !message.is_empty() => {
            Some(FieldErrors::general_only(message.clone()))
        }
        _ => None,
    }
}

/// Flatten a message value: a string, or a list of strings joined with
/// spaces. Anything else is not a message.
fn join_messages(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(" ");
            (!joined.is_empty()).then_some(joined)
        }
        _ => None,
    }
}
