// Durability tests: values must survive close/reopen of the database file.

use novatheme_schema::{PreferenceDefinition, PreferenceSchema};
use novatheme_store::{PreferenceStore, Scope};
use tempfile::TempDir;

fn schema() -> PreferenceSchema {
    let mut schema = PreferenceSchema::new();
    schema
        .register(PreferenceDefinition::enumeration(
            "nova_theme.mode",
            "Theme Mode",
            &["light", "dark", "auto"],
            "light",
        ))
        .unwrap();
    schema
        .register(PreferenceDefinition::boolean(
            "nova_theme.sidebar_collapsed",
            "Sidebar Collapsed by Default",
            false,
        ))
        .unwrap();
    schema
}

#[test]
fn values_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.db");

    {
        let store = PreferenceStore::open(&path, schema()).unwrap();
        store.set("nova_theme.mode", &Scope::Global, "dark").unwrap();
        store
            .set("nova_theme.mode", &Scope::user("alice"), "light")
            .unwrap();
        store
            .set("nova_theme.sidebar_collapsed", &Scope::Global, "true")
            .unwrap();
    }

    let store = PreferenceStore::open(&path, schema()).unwrap();
    assert_eq!(store.resolve("nova_theme.mode", None).unwrap(), "dark");
    assert_eq!(store.resolve("nova_theme.mode", Some("alice")).unwrap(), "light");
    assert_eq!(
        store.get("nova_theme.sidebar_collapsed", &Scope::Global).unwrap(),
        "true"
    );
}

#[test]
fn reopen_after_reset_sees_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.db");

    {
        let store = PreferenceStore::open(&path, schema()).unwrap();
        store.set("nova_theme.mode", &Scope::Global, "dark").unwrap();
        store.reset("nova_theme.mode", &Scope::Global).unwrap();
    }

    let store = PreferenceStore::open(&path, schema()).unwrap();
    // Reset rewrote the row rather than deleting it.
    assert_eq!(store.get("nova_theme.mode", &Scope::Global).unwrap(), "light");
}

#[test]
fn open_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config").join("preferences.db");

    let store = PreferenceStore::open(&path, schema()).unwrap();
    store.set("nova_theme.mode", &Scope::Global, "auto").unwrap();
    assert!(path.exists());
}
