use serde::{Deserialize, Serialize};

/// How a preference's raw string value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// `"true"` or `"false"`, exactly
    Boolean,
    /// One of a fixed set of string choices
    Enumeration,
    /// Free-form text
    Text,
}

/// A single registered preference: key, type, choices, default.
///
/// Keys are namespaced dotted strings (`nova_theme.mode`) and double as the
/// persisted column key, so they are stable across releases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceDefinition {
    /// Namespaced key, unique within a schema.
    pub key: String,
    /// Human-readable label shown by the settings form.
    pub label: String,
    pub value_type: ValueType,
    /// Legal values (enumeration type only; empty otherwise).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub allowed_values: Vec<String>,
    /// Fallback when no value is stored in any scope.
    pub default_value: String,
}

impl PreferenceDefinition {
    /// Boolean preference. The raw encoding is exactly "true"/"false".
    pub fn boolean(key: &str, label: &str, default: bool) -> Self {
        PreferenceDefinition {
            key: key.to_string(),
            label: label.to_string(),
            value_type: ValueType::Boolean,
            allowed_values: Vec::new(),
            default_value: if default { "true".into() } else { "false".into() },
        }
    }

    /// Enumeration preference with a fixed choice list.
    pub fn enumeration(key: &str, label: &str, allowed: &[&str], default: &str) -> Self {
        PreferenceDefinition {
            key: key.to_string(),
            label: label.to_string(),
            value_type: ValueType::Enumeration,
            allowed_values: allowed.iter().map(|s| s.to_string()).collect(),
            default_value: default.to_string(),
        }
    }

    /// Free-form text preference.
    pub fn text(key: &str, label: &str, default: &str) -> Self {
        PreferenceDefinition {
            key: key.to_string(),
            label: label.to_string(),
            value_type: ValueType::Text,
            allowed_values: Vec::new(),
            default_value: default.to_string(),
        }
    }

    /// Check a raw value against this definition's type.
    pub fn accepts(&self, raw: &str) -> bool {
        match self.value_type {
            ValueType::Boolean => raw == "true" || raw == "false",
            ValueType::Enumeration => self.allowed_values.iter().any(|v| v == raw),
            ValueType::Text => true,
        }
    }

    /// What a valid value looks like, for validation error messages.
    pub fn expected(&self) -> String {
        match self.value_type {
            ValueType::Boolean => "true or false".to_string(),
            ValueType::Enumeration => format!("one of: {}", self.allowed_values.join(", ")),
            ValueType::Text => "any text".to_string(),
        }
    }
}
