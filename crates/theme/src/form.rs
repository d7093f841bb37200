//! Settings form model
//!
//! The host framework renders the widgets; this models the form as data.
//! One field per registered definition, in schema order. Save validates
//! every submitted field before writing anything, so an invalid submission
//! never partially persists.

use std::fmt;

use novatheme_schema::ValueType;
use novatheme_store::{PreferenceStore, Scope, StoreError};

/// Which widget a field renders as.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldControl {
    /// Boolean toggle
    Toggle,
    /// Dropdown over the enumeration's allowed values
    Dropdown(Vec<String>),
    /// Free-form text input
    Text,
}

/// One row of the settings screen.
#[derive(Debug, Clone)]
pub struct FormField {
    pub key: String,
    pub label: String,
    pub control: FieldControl,
    /// Resolved value currently in effect for the form's scope.
    pub value: String,
}

/// A field-level validation failure, for inline display next to the input.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldError {
    pub key: String,
    pub message: String,
}

#[derive(Debug)]
pub enum FormError {
    /// One or more fields failed validation; nothing was saved.
    Invalid(Vec<FieldError>),
    Store(StoreError),
}

impl fmt::Display for FormError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(errors) => {
                write!(f, "{} field(s) failed validation", errors.len())
            }
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<StoreError> for FormError {
    fn from(err: StoreError) -> Self {
        FormError::Store(err)
    }
}

/// The settings screen, loaded for one scope.
///
/// `Global` is the administrator's settings page; `User(..)` is that user's
/// personal override page (fields show the value in effect for them).
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub scope: Scope,
    pub fields: Vec<FormField>,
}

impl SettingsForm {
    /// Build the form with current resolved values.
    pub fn load(store: &PreferenceStore, scope: &Scope) -> Result<SettingsForm, StoreError> {
        let user = match scope {
            Scope::User(id) => Some(id.as_str()),
            Scope::Global => None,
        };
        let mut fields = Vec::with_capacity(store.schema().len());
        for def in store.schema().definitions() {
            let control = match def.value_type {
                ValueType::Boolean => FieldControl::Toggle,
                ValueType::Enumeration => FieldControl::Dropdown(def.allowed_values.clone()),
                ValueType::Text => FieldControl::Text,
            };
            fields.push(FormField {
                key: def.key.clone(),
                label: def.label.clone(),
                control,
                value: store.resolve(&def.key, user)?,
            });
        }
        Ok(SettingsForm {
            scope: scope.clone(),
            fields,
        })
    }

    /// Save: validate every submitted field, then persist the changed ones.
    ///
    /// Returns how many fields were written. Any validation failure rejects
    /// the whole submission with per-field errors and writes nothing.
    pub fn submit(
        &self,
        store: &PreferenceStore,
        changes: &[(String, String)],
    ) -> Result<usize, FormError> {
        let schema = store.schema();
        let mut errors = Vec::new();
        for (key, value) in changes {
            if let Err(err) = schema.validate(key, value) {
                errors.push(FieldError {
                    key: key.clone(),
                    message: err.to_string(),
                });
            }
        }
        if !errors.is_empty() {
            return Err(FormError::Invalid(errors));
        }

        let mut saved = 0;
        for (key, value) in changes {
            let unchanged = self
                .fields
                .iter()
                .any(|f| &f.key == key && &f.value == value);
            if unchanged {
                continue;
            }
            store.set(key, &self.scope, value)?;
            saved += 1;
        }
        Ok(saved)
    }

    /// Discard edits: reload current resolved values.
    pub fn discard(self, store: &PreferenceStore) -> Result<SettingsForm, StoreError> {
        SettingsForm::load(store, &self.scope)
    }
}
