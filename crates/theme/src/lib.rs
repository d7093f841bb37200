//! Theme presentation layer for the Nova backend theme.
//!
//! This crate owns the built-in `nova_theme.*` preference set, the typed
//! directives the page renderer consumes, and the settings-form model the
//! host's settings screen is driven by:
//! - `keys` / `nova_theme()`: the registered preference definitions
//! - `PresentationResolver`: store state → `PresentationDirectives`
//! - `SettingsForm`: load / submit (all-or-nothing) / discard

mod directives;
mod form;
pub mod keys;
mod resolver;

pub use directives::*;
pub use form::*;
pub use keys::nova_theme;
pub use resolver::*;
