use std::fmt;

use novatheme_schema::SchemaError;

use crate::scope::Scope;

#[derive(Debug)]
pub enum StoreError {
    /// Key not registered in the schema.
    UnknownKey(String),
    /// Value failed schema validation; nothing was written.
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
    /// No row for the exact (key, scope) pair. Callers that want fallback
    /// semantics use `resolve` instead of `get`.
    NotFound { key: String, scope: Scope },
    /// Underlying SQLite / filesystem failure.
    Storage(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownKey(key) => write!(f, "unknown preference '{key}'"),
            Self::InvalidValue { key, value, expected } => {
                write!(f, "invalid value '{value}' for '{key}' (expected {expected})")
            }
            Self::NotFound { key, scope } => {
                write!(f, "no {scope} value stored for '{key}'")
            }
            Self::Storage(msg) => write!(f, "storage error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<SchemaError> for StoreError {
    fn from(err: SchemaError) -> Self {
        match err {
            SchemaError::UnknownKey(key) => StoreError::UnknownKey(key),
            SchemaError::InvalidValue { key, value, expected } => {
                StoreError::InvalidValue { key, value, expected }
            }
            // Registration errors never flow out of validate/get_default.
            other => StoreError::Storage(other.to_string()),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}
