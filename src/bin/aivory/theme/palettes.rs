//! Static color palettes converted from the shell's HSL design tokens.

use ratatui::style::Color;

use super::ThemeColors;

// Severity colors are shared across palettes; only the accent family changes.
const INFO: Color = Color::Rgb(59, 130, 246);
const SUCCESS: Color = Color::Rgb(34, 197, 94);
const WARNING: Color = Color::Rgb(234, 179, 8);
const ERROR: Color = Color::Rgb(239, 68, 68);
const BORDER: Color = Color::DarkGray;
const TEXT_MUTED: Color = Color::Gray;

macro_rules! palette {
    ($name:literal, $primary:expr, $glow:expr) => {
        ThemeColors {
            name: $name,
            primary: $primary,
            primary_glow: $glow,
            accent: $primary,
            gradient: ($primary, $glow),
            glow: $primary,
            info: INFO,
            success: SUCCESS,
            warning: WARNING,
            error: ERROR,
            border: BORDER,
            text_muted: TEXT_MUTED,
        }
    };
}

/// hsl(158 64% 52%) / hsl(158 64% 42%)
pub(crate) const THEME_EMERALD: ThemeColors = palette!(
    "Emerald",
    Color::Rgb(54, 211, 154),
    Color::Rgb(39, 176, 125)
);

/// hsl(0 84% 60%) / hsl(0 84% 50%)
pub(crate) const THEME_CRIMSON: ThemeColors = palette!(
    "Crimson",
    Color::Rgb(239, 67, 67),
    Color::Rgb(235, 20, 20)
);

/// hsl(217 91% 60%) / hsl(217 91% 50%)
pub(crate) const THEME_SAPPHIRE: ThemeColors = palette!(
    "Sapphire",
    Color::Rgb(60, 131, 246),
    Color::Rgb(11, 100, 244)
);

/// hsl(267 84% 64%) / hsl(267 84% 54%)
pub(crate) const THEME_AMETHYST: ThemeColors = palette!(
    "Amethyst",
    Color::Rgb(156, 86, 240),
    Color::Rgb(128, 39, 236)
);

/// hsl(45 93% 58%) / hsl(45 93% 48%)
pub(crate) const THEME_AMBER: ThemeColors = palette!(
    "Amber",
    Color::Rgb(248, 198, 48),
    Color::Rgb(236, 179, 9)
);

/// hsl(330 81% 60%) / hsl(330 81% 50%)
pub(crate) const THEME_ROSE: ThemeColors = palette!(
    "Rose",
    Color::Rgb(236, 70, 153),
    Color::Rgb(231, 24, 128)
);
