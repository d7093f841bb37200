// Preference rows in SQLite
// One row per (key, scope); global rows use the empty user_id.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use rusqlite::{params, Connection, OptionalExtension};

use novatheme_schema::PreferenceSchema;

use crate::cache::ResolveCache;
use crate::error::StoreError;
use crate::scope::Scope;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS preferences (
    key        TEXT NOT NULL,
    user_id    TEXT NOT NULL DEFAULT '',   -- '' = global scope
    value      TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    PRIMARY KEY (key, user_id)
);
"#;

const CACHE_CAPACITY: usize = 512;

/// Durable preference store.
///
/// Owns the connection and the schema; the resolver and settings form only
/// read through it. Each write is a single-row upsert, so a concurrent
/// reader sees either the old or the new value, never a partial one.
/// Racing writes to the same (key, scope) resolve last-write-wins.
pub struct PreferenceStore {
    conn: Connection,
    schema: PreferenceSchema,
    cache: RefCell<ResolveCache>,
}

impl PreferenceStore {
    /// Open (creating if needed) a store at the given path.
    pub fn open(path: &Path, schema: PreferenceSchema) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Storage(e.to_string()))?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        Ok(PreferenceStore {
            conn,
            schema,
            cache: RefCell::new(ResolveCache::new(CACHE_CAPACITY)),
        })
    }

    /// In-memory store, used by tests and ephemeral tooling.
    pub fn open_in_memory(schema: PreferenceSchema) -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(PreferenceStore {
            conn,
            schema,
            cache: RefCell::new(ResolveCache::new(CACHE_CAPACITY)),
        })
    }

    /// Default on-disk location: `<config dir>/novatheme/preferences.db`.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("novatheme")
            .join("preferences.db")
    }

    pub fn schema(&self) -> &PreferenceSchema {
        &self.schema
    }

    /// Validate and persist a value for (key, scope). Upsert: last write
    /// wins, no duplicate rows. Invalidates the resolve cache for the key.
    pub fn set(&self, key: &str, scope: &Scope, raw_value: &str) -> Result<(), StoreError> {
        self.schema.validate(key, raw_value)?;
        let stamp = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO preferences (key, user_id, value, updated_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT (key, user_id)
             DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, scope.column_value(), raw_value, stamp],
        )?;
        self.cache.borrow_mut().invalidate_key(key);
        Ok(())
    }

    /// The stored value for exactly (key, scope), without fallback.
    pub fn get(&self, key: &str, scope: &Scope) -> Result<String, StoreError> {
        if !self.schema.contains(key) {
            return Err(StoreError::UnknownKey(key.to_string()));
        }
        self.lookup(key, scope.column_value())?
            .ok_or_else(|| StoreError::NotFound {
                key: key.to_string(),
                scope: scope.clone(),
            })
    }

    /// Precedence walk: per-user override, else global, else schema
    /// default. Never fails for a registered key.
    pub fn resolve(&self, key: &str, user: Option<&str>) -> Result<String, StoreError> {
        if !self.schema.contains(key) {
            return Err(StoreError::UnknownKey(key.to_string()));
        }
        let user = user.filter(|u| !u.is_empty());
        if let Some(hit) = self.cache.borrow().get(key, user) {
            return Ok(hit);
        }

        let mut value = None;
        if let Some(user) = user {
            value = self.lookup(key, user)?;
        }
        if value.is_none() {
            value = self.lookup(key, "")?;
        }
        let value = match value {
            Some(v) => v,
            None => self.schema.get_default(key)?.to_string(),
        };

        self.cache.borrow_mut().insert(key, user, value.clone());
        Ok(value)
    }

    /// Every registered key resolved for the given user, in schema order.
    pub fn resolve_all(&self, user: Option<&str>) -> Result<Vec<(String, String)>, StoreError> {
        let keys: Vec<String> = self.schema.definitions().map(|d| d.key.clone()).collect();
        let mut out = Vec::with_capacity(keys.len());
        for key in keys {
            let value = self.resolve(&key, user)?;
            out.push((key, value));
        }
        Ok(out)
    }

    /// Rewrite (key, scope) to the schema default. The row is rewritten,
    /// not deleted, so `updated_at` records when the reset happened.
    pub fn reset(&self, key: &str, scope: &Scope) -> Result<(), StoreError> {
        let default = self.schema.get_default(key)?.to_string();
        self.set(key, scope, &default)
    }

    fn lookup(&self, key: &str, user_id: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1 AND user_id = ?2",
                params![key, user_id],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use novatheme_schema::PreferenceDefinition;

    fn test_schema() -> PreferenceSchema {
        let mut schema = PreferenceSchema::new();
        schema
            .register(PreferenceDefinition::enumeration(
                "theme.mode",
                "Theme Mode",
                &["light", "dark", "auto"],
                "light",
            ))
            .unwrap();
        schema
            .register(PreferenceDefinition::boolean(
                "theme.animations",
                "Enable Animations",
                true,
            ))
            .unwrap();
        schema
            .register(PreferenceDefinition::text("theme.font", "Font Family", "inter"))
            .unwrap();
        schema
    }

    fn test_store() -> PreferenceStore {
        PreferenceStore::open_in_memory(test_schema()).unwrap()
    }

    fn row_count(store: &PreferenceStore, key: &str) -> i64 {
        store
            .conn
            .query_row(
                "SELECT COUNT(*) FROM preferences WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .unwrap()
    }

    #[test]
    fn set_then_get_round_trips_exact_string() {
        let store = test_store();
        store.set("theme.font", &Scope::Global, "JetBrains Mono").unwrap();
        assert_eq!(
            store.get("theme.font", &Scope::Global).unwrap(),
            "JetBrains Mono"
        );
    }

    #[test]
    fn get_without_row_is_not_found() {
        let store = test_store();
        let err = store.get("theme.mode", &Scope::Global).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        // A global row does not satisfy an exact per-user get.
        store.set("theme.mode", &Scope::Global, "dark").unwrap();
        let err = store.get("theme.mode", &Scope::user("alice")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[test]
    fn repeated_set_is_idempotent_single_row() {
        let store = test_store();
        store.set("theme.mode", &Scope::Global, "dark").unwrap();
        store.set("theme.mode", &Scope::Global, "dark").unwrap();
        assert_eq!(row_count(&store, "theme.mode"), 1);
        assert_eq!(store.resolve("theme.mode", None).unwrap(), "dark");

        // Overwrite, same row.
        store.set("theme.mode", &Scope::Global, "auto").unwrap();
        assert_eq!(row_count(&store, "theme.mode"), 1);
        assert_eq!(store.resolve("theme.mode", None).unwrap(), "auto");
    }

    #[test]
    fn user_override_beats_global_for_that_user_only() {
        let store = test_store();
        store.set("theme.mode", &Scope::Global, "light").unwrap();
        store.set("theme.mode", &Scope::user("alice"), "dark").unwrap();

        assert_eq!(store.resolve("theme.mode", Some("alice")).unwrap(), "dark");
        assert_eq!(store.resolve("theme.mode", Some("bob")).unwrap(), "light");
        assert_eq!(store.resolve("theme.mode", None).unwrap(), "light");
    }

    #[test]
    fn resolve_falls_back_to_schema_default() {
        let store = test_store();
        assert_eq!(store.resolve("theme.font", Some("alice")).unwrap(), "inter");
        assert_eq!(store.resolve("theme.animations", None).unwrap(), "true");
    }

    #[test]
    fn invalid_value_rejected_and_nothing_written() {
        let store = test_store();
        let err = store.set("theme.mode", &Scope::Global, "sepia").unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { .. }));
        assert_eq!(row_count(&store, "theme.mode"), 0);
        assert_eq!(store.resolve("theme.mode", None).unwrap(), "light");
    }

    #[test]
    fn unknown_key_surfaces_on_every_operation() {
        let store = test_store();
        assert!(matches!(
            store.set("theme.nope", &Scope::Global, "x"),
            Err(StoreError::UnknownKey(_))
        ));
        assert!(matches!(
            store.get("theme.nope", &Scope::Global),
            Err(StoreError::UnknownKey(_))
        ));
        assert!(matches!(
            store.resolve("theme.nope", None),
            Err(StoreError::UnknownKey(_))
        ));
    }

    #[test]
    fn reset_rewrites_to_default_keeps_row() {
        let store = test_store();
        store.set("theme.mode", &Scope::Global, "dark").unwrap();
        store.reset("theme.mode", &Scope::Global).unwrap();
        assert_eq!(row_count(&store, "theme.mode"), 1);
        assert_eq!(store.get("theme.mode", &Scope::Global).unwrap(), "light");
    }

    #[test]
    fn global_write_invalidates_cached_user_resolution() {
        let store = test_store();
        store.set("theme.mode", &Scope::Global, "light").unwrap();
        // Prime the cache for a user with no override.
        assert_eq!(store.resolve("theme.mode", Some("alice")).unwrap(), "light");

        store.set("theme.mode", &Scope::Global, "dark").unwrap();
        assert_eq!(store.resolve("theme.mode", Some("alice")).unwrap(), "dark");
    }

    #[test]
    fn empty_user_id_is_global_scope() {
        let store = test_store();
        assert_eq!(Scope::user(""), Scope::Global);
        store.set("theme.mode", &Scope::user(""), "dark").unwrap();
        assert_eq!(store.get("theme.mode", &Scope::Global).unwrap(), "dark");
        // resolve treats an empty user the same way
        assert_eq!(store.resolve("theme.mode", Some("")).unwrap(), "dark");
    }

    #[test]
    fn resolve_all_in_schema_order() {
        let store = test_store();
        store.set("theme.mode", &Scope::Global, "dark").unwrap();
        let all = store.resolve_all(None).unwrap();
        let keys: Vec<_> = all.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["theme.mode", "theme.animations", "theme.font"]);
        assert_eq!(all[0].1, "dark");
        assert_eq!(all[2].1, "inter");
    }
}
