// Typed presentation directives
// The rendering layer reads these; it never touches raw preference strings.

use serde::Serialize;

/// Theme mode directive.
///
/// `Auto` is forwarded to the client, which resolves it against
/// prefers-color-scheme; the server never guesses the OS preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    Auto,
}

impl ThemeMode {
    /// Parse a stored raw value. Unknown strings (hand-edited rows)
    /// degrade to the default rather than failing render.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "dark" => ThemeMode::Dark,
            "auto" => ThemeMode::Auto,
            _ => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::Auto => "auto",
        }
    }
}

/// Accent color token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Indigo,
    Blue,
    Emerald,
    Rose,
    Amber,
    Violet,
}

impl AccentColor {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "blue" => AccentColor::Blue,
            "emerald" => AccentColor::Emerald,
            "rose" => AccentColor::Rose,
            "amber" => AccentColor::Amber,
            "violet" => AccentColor::Violet,
            _ => AccentColor::Indigo,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Indigo => "indigo",
            AccentColor::Blue => "blue",
            AccentColor::Emerald => "emerald",
            AccentColor::Rose => "rose",
            AccentColor::Amber => "amber",
            AccentColor::Violet => "violet",
        }
    }

    /// The 500-weight hex token the stylesheet variables resolve to.
    pub fn hex(&self) -> &'static str {
        match self {
            AccentColor::Indigo => "#6366f1",
            AccentColor::Blue => "#3b82f6",
            AccentColor::Emerald => "#10b981",
            AccentColor::Rose => "#f43f5e",
            AccentColor::Amber => "#f59e0b",
            AccentColor::Violet => "#8b5cf6",
        }
    }
}

/// Base font size directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl FontSize {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "small" => FontSize::Small,
            "large" => FontSize::Large,
            _ => FontSize::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Root font size in pixels.
    pub fn px(&self) -> f32 {
        match self {
            FontSize::Small => 12.0,
            FontSize::Medium => 13.0,
            FontSize::Large => 15.0,
        }
    }
}

/// The resolved directives for one render.
///
/// All fields are concrete values; precedence and defaults have already
/// been applied. This is what the presentation layer queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationDirectives {
    pub theme_mode: ThemeMode,
    pub accent: AccentColor,
    pub animations: bool,
    pub sidebar_collapsed: bool,
    pub font_size: FontSize,
    pub font_family: String,
}

impl PresentationDirectives {
    /// Data attributes for the page root element. Client scripts read
    /// these on load.
    pub fn root_attributes(&self) -> Vec<(String, String)> {
        vec![
            ("data-nova-mode".into(), self.theme_mode.as_str().into()),
            ("data-nova-accent".into(), self.accent.as_str().into()),
            (
                "data-nova-animations".into(),
                if self.animations { "true".into() } else { "false".into() },
            ),
            ("data-nova-font-size".into(), self.font_size.as_str().into()),
            ("data-nova-font-family".into(), self.font_family.clone()),
        ]
    }

    /// Initial class toggles for the page root. `Auto` mode emits no class;
    /// the client applies `nova-dark` after checking the system preference.
    pub fn root_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.theme_mode == ThemeMode::Dark {
            classes.push("nova-dark");
        }
        if self.sidebar_collapsed {
            classes.push("nova-sidebar-collapsed");
        }
        if !self.animations {
            classes.push("nova-no-animations");
        }
        classes
    }
}
