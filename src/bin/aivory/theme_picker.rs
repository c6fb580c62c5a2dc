//! Theme picker overlay that lets users switch palettes without restarting.

use crate::theme::Theme;

/// Theme options with keys and descriptions, in picker order.
pub(crate) const THEME_OPTIONS: &[(Theme, &str, &str)] = &[
    (Theme::Emerald, "emerald", "Fresh green (default)"),
    (Theme::Crimson, "crimson", "Bold red accents"),
    (Theme::Sapphire, "sapphire", "Cool deep blue"),
    (Theme::Amethyst, "amethyst", "Vivid purple"),
    (Theme::Amber, "amber", "Warm golden yellow"),
    (Theme::Rose, "rose", "Soft pink highlights"),
];

/// Cursor state for the picker overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemePickerState {
    pub(crate) selected: usize,
}

impl ThemePickerState {
    /// Open the picker with the cursor on the active theme.
    #[must_use]
    pub(crate) fn open_at(current: Theme) -> Self {
        let selected = THEME_OPTIONS
            .iter()
            .position(|(theme, _, _)| *theme == current)
            .unwrap_or(0);
        Self { selected }
    }

    /// Move the cursor up, wrapping at the top.
    pub(crate) fn select_previous(&mut self) {
        self.selected = self
            .selected
            .checked_sub(1)
            .unwrap_or(THEME_OPTIONS.len() - 1);
    }

    /// Move the cursor down, wrapping at the bottom.
    pub(crate) fn select_next(&mut self) {
        self.selected = (self.selected + 1) % THEME_OPTIONS.len();
    }

    /// Theme under the cursor.
    #[must_use]
    pub(crate) fn selected_theme(&self) -> Theme {
        THEME_OPTIONS
            .get(self.selected)
            .map(|(theme, _, _)| *theme)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_cover_every_available_theme() {
        assert_eq!(THEME_OPTIONS.len(), Theme::available().len());
        for (theme, key, _) in THEME_OPTIONS {
            assert_eq!(Theme::from_name(key), Some(*theme));
        }
    }

    #[test]
    fn opens_on_the_current_theme() {
        let state = ThemePickerState::open_at(Theme::Amber);
        assert_eq!(state.selected_theme(), Theme::Amber);
    }

    #[test]
    fn navigation_wraps_both_directions() {
        let mut state = ThemePickerState::open_at(Theme::Emerald);
        state.select_previous();
        assert_eq!(state.selected_theme(), Theme::Rose);
        state.select_next();
        assert_eq!(state.selected_theme(), Theme::Emerald);
        for _ in 0..THEME_OPTIONS.len() {
            state.select_next();
        }
        assert_eq!(state.selected_theme(), Theme::Emerald);
    }
}
