//! Theme registry so users can recolor the shell without changing behavior.
//!
//! Six fixed palettes keyed by name. Every selectable key maps to a palette,
//! so resolving colors for the current theme can never fail.

mod palettes;

use palettes::{
    THEME_AMBER, THEME_AMETHYST, THEME_CRIMSON, THEME_EMERALD, THEME_ROSE, THEME_SAPPHIRE,
};
use ratatui::style::Color;

/// Resolved visual tokens for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ThemeColors {
    /// Display name shown in the preview and picker.
    pub(crate) name: &'static str,
    pub(crate) primary: Color,
    pub(crate) primary_glow: Color,
    pub(crate) accent: Color,
    /// Gradient endpoints for the header/brand accents.
    pub(crate) gradient: (Color, Color),
    pub(crate) glow: Color,
    pub(crate) info: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) error: Color,
    pub(crate) border: Color,
    pub(crate) text_muted: Color,
}

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Theme {
    /// Default fresh-green theme.
    #[default]
    Emerald,
    Crimson,
    Sapphire,
    Amethyst,
    Amber,
    Rose,
}

impl Theme {
    /// Parse a theme name. Unknown names yield `None`.
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "emerald" | "default" => Some(Self::Emerald),
            "crimson" => Some(Self::Crimson),
            "sapphire" => Some(Self::Sapphire),
            "amethyst" => Some(Self::Amethyst),
            "amber" => Some(Self::Amber),
            "rose" => Some(Self::Rose),
            _ => None,
        }
    }

    /// The palette for this theme.
    #[must_use]
    pub(crate) fn colors(&self) -> &'static ThemeColors {
        match self {
            Self::Emerald => &THEME_EMERALD,
            Self::Crimson => &THEME_CRIMSON,
            Self::Sapphire => &THEME_SAPPHIRE,
            Self::Amethyst => &THEME_AMETHYST,
            Self::Amber => &THEME_AMBER,
            Self::Rose => &THEME_ROSE,
        }
    }

    /// All selectable theme keys, in picker order.
    pub(crate) fn available() -> &'static [&'static str] {
        &["emerald", "crimson", "sapphire", "amethyst", "amber", "rose"]
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Emerald => write!(f, "emerald"),
            Self::Crimson => write!(f, "crimson"),
            Self::Sapphire => write!(f, "sapphire"),
            Self::Amethyst => write!(f, "amethyst"),
            Self::Amber => write!(f, "amber"),
            Self::Rose => write!(f, "rose"),
        }
    }
}
