//! The built-in `nova_theme.*` preference set.
//!
//! Key strings are the durable storage layout; renaming one orphans
//! persisted rows.

use novatheme_schema::{PreferenceDefinition, PreferenceSchema};

pub const MODE: &str = "nova_theme.mode";
pub const ACCENT_COLOR: &str = "nova_theme.accent_color";
pub const ANIMATIONS: &str = "nova_theme.animations";
pub const SIDEBAR_COLLAPSED: &str = "nova_theme.sidebar_collapsed";
pub const FONT_SIZE: &str = "nova_theme.font_size";
pub const FONT_FAMILY: &str = "nova_theme.font_family";

/// The schema every Nova store is opened with.
pub fn nova_theme() -> PreferenceSchema {
    let mut schema = PreferenceSchema::new();
    let definitions = [
        PreferenceDefinition::enumeration(
            MODE,
            "Theme Mode",
            &["light", "dark", "auto"],
            "light",
        ),
        PreferenceDefinition::enumeration(
            ACCENT_COLOR,
            "Accent Color",
            &["indigo", "blue", "emerald", "rose", "amber", "violet"],
            "indigo",
        ),
        PreferenceDefinition::boolean(ANIMATIONS, "Enable Animations", true),
        PreferenceDefinition::boolean(
            SIDEBAR_COLLAPSED,
            "Sidebar Collapsed by Default",
            false,
        ),
        PreferenceDefinition::enumeration(
            FONT_SIZE,
            "Font Size",
            &["small", "medium", "large"],
            "medium",
        ),
        PreferenceDefinition::text(FONT_FAMILY, "Font Family", "inter"),
    ];
    for def in definitions {
        // A conflict here is a bug in this list; fatal at startup.
        schema.register(def).expect("built-in nova_theme schema is consistent");
    }
    schema
}
