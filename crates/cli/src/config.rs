// Optional CLI config: ~/.config/novatheme/config.toml
//
//   db = "/srv/app/preferences.db"
//   user = "alice"
//
// Command-line flags win over the file; the file wins over built-ins.

use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub db: Option<PathBuf>,
    pub user: Option<String>,
}

impl CliConfig {
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("novatheme").join("config.toml"))
    }

    /// Load the config file. Missing or unparseable files fall back to
    /// defaults; a broken config must not take the CLI down with it.
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| toml::from_str(&s).ok())
            .unwrap_or_default()
    }
}
