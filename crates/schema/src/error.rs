use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// Registration conflict: key already registered. Fatal at startup.
    DuplicateKey(String),
    /// Definition rejected at registration (bad default, empty choice list).
    InvalidDefinition { key: String, reason: String },
    /// Operation referenced a key no definition covers.
    UnknownKey(String),
    /// Submitted value failed type or choice validation.
    InvalidValue {
        key: String,
        value: String,
        expected: String,
    },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(f, "preference '{key}' is already registered"),
            Self::InvalidDefinition { key, reason } => {
                write!(f, "invalid definition for '{key}': {reason}")
            }
            Self::UnknownKey(key) => write!(f, "unknown preference '{key}'"),
            Self::InvalidValue { key, value, expected } => {
                write!(f, "invalid value '{value}' for '{key}' (expected {expected})")
            }
        }
    }
}

impl std::error::Error for SchemaError {}
