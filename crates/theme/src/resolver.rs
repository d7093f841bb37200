//! Render-time resolution: store state → directives.

use novatheme_store::{PreferenceStore, StoreError};

use crate::directives::{AccentColor, FontSize, PresentationDirectives, ThemeMode};
use crate::keys;

/// Pure read-side view over a store.
///
/// `compute_directives` does one `resolve` per registered presentation key,
/// so its cost is bounded by the key count, not by stored data volume.
/// Safe to call on every render.
pub struct PresentationResolver<'a> {
    store: &'a PreferenceStore,
}

impl<'a> PresentationResolver<'a> {
    pub fn new(store: &'a PreferenceStore) -> Self {
        PresentationResolver { store }
    }

    pub fn compute_directives(
        &self,
        user: Option<&str>,
    ) -> Result<PresentationDirectives, StoreError> {
        let resolve = |key| self.store.resolve(key, user);
        Ok(PresentationDirectives {
            theme_mode: ThemeMode::from_raw(&resolve(keys::MODE)?),
            accent: AccentColor::from_raw(&resolve(keys::ACCENT_COLOR)?),
            animations: resolve(keys::ANIMATIONS)? == "true",
            sidebar_collapsed: resolve(keys::SIDEBAR_COLLAPSED)? == "true",
            font_size: FontSize::from_raw(&resolve(keys::FONT_SIZE)?),
            font_family: resolve(keys::FONT_FAMILY)?,
        })
    }
}
