//! Active-theme state with a persisted preference.
//!
//! The setter is the only place persistence happens; rendering reads the
//! store every frame, so applying a theme is just updating the current key.

use crate::theme::{Theme, ThemeColors};
use crate::user_config;

/// Holds the active theme and persists explicit selections.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeStore {
    current: Theme,
}

impl ThemeStore {
    /// Load the persisted preference; invalid or absent keys fall back to
    /// the default theme. Applies exactly one theme per call.
    pub(crate) fn initialize() -> Self {
        let saved = user_config::load_user_config().theme;
        let store = Self::from_saved(saved.as_deref());
        tracing::debug!(theme = %store.current, "theme initialized");
        store
    }

    /// Resolution rule behind [`initialize`](Self::initialize), kept pure
    /// for tests.
    pub(crate) fn from_saved(saved: Option<&str>) -> Self {
        let current = saved.and_then(Theme::from_name).unwrap_or_default();
        Self { current }
    }

    /// Select a theme by key.
    ///
    /// Unknown keys are a silent no-op. Valid keys update the store and
    /// persist the selection; returns whether anything changed.
    pub(crate) fn set_theme(&mut self, name: &str) -> bool {
        let Some(theme) = Theme::from_name(name) else {
            return false;
        };
        self.current = theme;
        user_config::persist_theme(&theme.to_string());
        true
    }

    #[must_use]
    pub(crate) fn current(&self) -> Theme {
        self.current
    }

    /// Palette for the current theme. Total: every key maps to a palette.
    #[must_use]
    pub(crate) fn active(&self) -> &'static ThemeColors {
        self.current.colors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_config::test_support::{env_guard, temp_config_dir, DIR_ENV};
    use std::env;
    use std::fs;

    #[test]
    fn from_saved_accepts_valid_key() {
        let store = ThemeStore::from_saved(Some("crimson"));
        assert_eq!(store.current(), Theme::Crimson);
    }

    #[test]
    fn from_saved_falls_back_on_missing_or_invalid() {
        assert_eq!(ThemeStore::from_saved(None).current(), Theme::Emerald);
        assert_eq!(
            ThemeStore::from_saved(Some("garbage")).current(),
            Theme::Emerald
        );
    }

    #[test]
    fn unknown_key_leaves_state_unchanged() {
        let _guard = env_guard();
        let dir = temp_config_dir("store_noop");
        env::set_var(DIR_ENV, &dir);

        let mut store = ThemeStore::from_saved(Some("rose"));
        assert!(!store.set_theme("nonexistent"));
        assert_eq!(store.current(), Theme::Rose);

        env::remove_var(DIR_ENV);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn selection_persists_across_simulated_reload() {
        let _guard = env_guard();
        let dir = temp_config_dir("store_reload");
        env::set_var(DIR_ENV, &dir);

        let mut store = ThemeStore::initialize();
        assert!(store.set_theme("crimson"));
        assert_eq!(store.active().name, "Crimson");

        // Simulated reload: a fresh store reads the persisted key.
        let reloaded = ThemeStore::initialize();
        assert_eq!(reloaded.current(), Theme::Crimson);
        assert_eq!(reloaded.active().name, "Crimson");

        env::remove_var(DIR_ENV);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn active_reflects_current_theme() {
        let _guard = env_guard();
        let dir = temp_config_dir("store_active");
        env::set_var(DIR_ENV, &dir);

        let mut store = ThemeStore::from_saved(None);
        assert_eq!(store.active().name, "Emerald");
        store.set_theme("amber");
        assert_eq!(store.active().name, "Amber");

        env::remove_var(DIR_ENV);
        let _ = fs::remove_dir_all(dir);
    }
}
