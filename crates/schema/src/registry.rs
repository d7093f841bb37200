//! The schema registry
//!
//! Definitions are registered once at startup and iterated generically by
//! the store, the resolver, and the settings form. Registration order is
//! preserved so form fields render deterministically.

use std::collections::HashMap;

use crate::definition::{PreferenceDefinition, ValueType};
use crate::error::SchemaError;

/// Ordered, read-after-build registry of preference definitions.
#[derive(Debug, Clone, Default)]
pub struct PreferenceSchema {
    definitions: Vec<PreferenceDefinition>,
    by_key: HashMap<String, usize>,
}

impl PreferenceSchema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition. Fails on a duplicate key, on an enumeration
    /// with no choices, or on a default that its own type rejects.
    pub fn register(&mut self, def: PreferenceDefinition) -> Result<(), SchemaError> {
        if self.by_key.contains_key(&def.key) {
            return Err(SchemaError::DuplicateKey(def.key));
        }
        if def.value_type == ValueType::Enumeration && def.allowed_values.is_empty() {
            return Err(SchemaError::InvalidDefinition {
                key: def.key,
                reason: "enumeration with no allowed values".to_string(),
            });
        }
        if !def.accepts(&def.default_value) {
            return Err(SchemaError::InvalidDefinition {
                key: def.key.clone(),
                reason: format!(
                    "default '{}' is not a legal value (expected {})",
                    def.default_value,
                    def.expected()
                ),
            });
        }
        self.by_key.insert(def.key.clone(), self.definitions.len());
        self.definitions.push(def);
        Ok(())
    }

    /// Validate a raw value for a key.
    pub fn validate(&self, key: &str, raw_value: &str) -> Result<(), SchemaError> {
        let def = self
            .definition(key)
            .ok_or_else(|| SchemaError::UnknownKey(key.to_string()))?;
        if def.accepts(raw_value) {
            Ok(())
        } else {
            Err(SchemaError::InvalidValue {
                key: key.to_string(),
                value: raw_value.to_string(),
                expected: def.expected(),
            })
        }
    }

    /// The declared default for a key.
    pub fn get_default(&self, key: &str) -> Result<&str, SchemaError> {
        self.definition(key)
            .map(|d| d.default_value.as_str())
            .ok_or_else(|| SchemaError::UnknownKey(key.to_string()))
    }

    pub fn definition(&self, key: &str) -> Option<&PreferenceDefinition> {
        self.by_key.get(key).map(|&i| &self.definitions[i])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Definitions in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &PreferenceDefinition> {
        self.definitions.iter()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> PreferenceSchema {
        let mut schema = PreferenceSchema::new();
        schema
            .register(PreferenceDefinition::enumeration(
                "ui.mode",
                "Mode",
                &["light", "dark"],
                "light",
            ))
            .unwrap();
        schema
            .register(PreferenceDefinition::boolean("ui.animations", "Animations", true))
            .unwrap();
        schema
            .register(PreferenceDefinition::text("ui.font", "Font", "inter"))
            .unwrap();
        schema
    }

    #[test]
    fn duplicate_key_rejected() {
        let mut schema = sample_schema();
        let err = schema
            .register(PreferenceDefinition::boolean("ui.animations", "Again", false))
            .unwrap_err();
        assert!(matches!(err, SchemaError::DuplicateKey(k) if k == "ui.animations"));
    }

    #[test]
    fn enumeration_default_must_be_member() {
        let mut schema = PreferenceSchema::new();
        let err = schema
            .register(PreferenceDefinition::enumeration(
                "ui.mode",
                "Mode",
                &["light", "dark"],
                "sepia",
            ))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition { .. }));
    }

    #[test]
    fn empty_enumeration_rejected() {
        let mut schema = PreferenceSchema::new();
        let err = schema
            .register(PreferenceDefinition::enumeration("ui.mode", "Mode", &[], ""))
            .unwrap_err();
        assert!(matches!(err, SchemaError::InvalidDefinition { .. }));
    }

    #[test]
    fn validate_boolean_is_strict() {
        let schema = sample_schema();
        assert!(schema.validate("ui.animations", "true").is_ok());
        assert!(schema.validate("ui.animations", "false").is_ok());
        // No canonicalization: stored strings round-trip exactly.
        assert!(schema.validate("ui.animations", "True").is_err());
        assert!(schema.validate("ui.animations", "1").is_err());
    }

    #[test]
    fn validate_enumeration_membership() {
        let schema = sample_schema();
        assert!(schema.validate("ui.mode", "dark").is_ok());
        let err = schema.validate("ui.mode", "sepia").unwrap_err();
        assert!(matches!(err, SchemaError::InvalidValue { ref value, .. } if value == "sepia"));
    }

    #[test]
    fn validate_text_accepts_anything() {
        let schema = sample_schema();
        assert!(schema.validate("ui.font", "JetBrains Mono").is_ok());
        assert!(schema.validate("ui.font", "").is_ok());
    }

    #[test]
    fn unknown_key_errors() {
        let schema = sample_schema();
        assert!(matches!(
            schema.validate("ui.missing", "x"),
            Err(SchemaError::UnknownKey(_))
        ));
        assert!(matches!(
            schema.get_default("ui.missing"),
            Err(SchemaError::UnknownKey(_))
        ));
    }

    #[test]
    fn defaults_and_order_preserved() {
        let schema = sample_schema();
        assert_eq!(schema.get_default("ui.font").unwrap(), "inter");
        let keys: Vec<_> = schema.definitions().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, ["ui.mode", "ui.animations", "ui.font"]);
    }
}
