//! CLI flag schema so shell startup behavior is explicit and discoverable.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Parser;

use aivory::lang;

use crate::theme::Theme;

#[derive(Debug, Parser, Clone)]
#[command(name = "aivory", about = "Aivory voice chat shell", author, version)]
pub(crate) struct CliConfig {
    /// Color theme (emerald, crimson, sapphire, amethyst, amber, rose)
    ///
    /// Overrides the persisted preference for this run and is saved as the
    /// new preference once applied.
    #[arg(long = "theme")]
    pub(crate) theme: Option<String>,

    /// Voice input language code (e.g. en-US, fr-FR)
    #[arg(long = "input-lang")]
    pub(crate) input_lang: Option<String>,

    /// Response/playback language code (e.g. en-US, ja-JP)
    #[arg(long = "output-lang")]
    pub(crate) output_lang: Option<String>,

    /// Recognition script file (JSON) replayed when listening starts
    #[arg(long = "script", env = "AIVORY_SCRIPT")]
    pub(crate) script: Option<PathBuf>,

    /// List available themes and exit
    #[arg(long = "list-themes", default_value_t = false)]
    pub(crate) list_themes: bool,

    /// List supported languages and exit
    #[arg(long = "list-languages", default_value_t = false)]
    pub(crate) list_languages: bool,

    /// Enable JSON trace logging (see AIVORY_TRACE_LOG)
    #[arg(long = "logs", default_value_t = false)]
    pub(crate) logs: bool,

    /// Force logging off even if other flags would enable it
    #[arg(long = "no-logs", default_value_t = false)]
    pub(crate) no_logs: bool,
}

impl CliConfig {
    /// Reject flag values that would put the shell in an invalid state.
    ///
    /// # Errors
    ///
    /// Unknown theme names or language codes outside the catalog.
    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(ref name) = self.theme {
            if Theme::from_name(name).is_none() {
                bail!(
                    "unknown theme '{name}'. Available: {}",
                    Theme::available().join(", ")
                );
            }
        }
        for (flag, value) in [
            ("--input-lang", self.input_lang.as_deref()),
            ("--output-lang", self.output_lang.as_deref()),
        ] {
            if let Some(code) = value {
                if !lang::is_valid(code) {
                    bail!("unsupported language code '{code}' for {flag}");
                }
            }
        }
        Ok(())
    }
}

/// Render the `--list-themes` output.
pub(crate) fn format_theme_list() -> String {
    let mut out = String::from("Available themes:\n");
    for key in Theme::available() {
        let colors = Theme::from_name(key)
            .map(|theme| theme.colors())
            .unwrap_or_else(|| Theme::default().colors());
        let marker = if Theme::from_name(key) == Some(Theme::default()) {
            " (default)"
        } else {
            ""
        };
        out.push_str(&format!("  {key:<10} {}{marker}\n", colors.name));
    }
    out
}

/// Render the `--list-languages` output.
pub(crate) fn format_language_list() -> String {
    let mut out = String::from("Supported languages:\n");
    for language in lang::LANGUAGES {
        let marker = if language.code == lang::DEFAULT_LANGUAGE {
            " (default)"
        } else {
            ""
        };
        out.push_str(&format!("  {:<7} {}{marker}\n", language.code, language.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_parse_and_validate() {
        let cfg = CliConfig::parse_from(["test-app"]);
        assert!(cfg.theme.is_none());
        assert!(cfg.script.is_none());
        assert!(!cfg.list_themes);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn valid_flags_pass_validation() {
        let cfg = CliConfig::parse_from([
            "test-app",
            "--theme",
            "crimson",
            "--input-lang",
            "fr-FR",
            "--output-lang",
            "ja-JP",
        ]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn unknown_theme_fails_validation() {
        let cfg = CliConfig::parse_from(["test-app", "--theme", "ocean"]);
        let err = cfg.validate().unwrap_err().to_string();
        assert!(err.contains("ocean"));
        assert!(err.contains("emerald"));
    }

    #[test]
    fn bad_language_codes_fail_validation() {
        let cfg = CliConfig::parse_from(["test-app", "--input-lang", "xx-XX"]);
        assert!(cfg.validate().is_err());
        let cfg = CliConfig::parse_from(["test-app", "--output-lang", "klingon"]);
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn theme_list_names_every_key() {
        let listing = format_theme_list();
        for key in Theme::available() {
            assert!(listing.contains(key), "missing theme {key}");
        }
        assert!(listing.contains("(default)"));
    }

    #[test]
    fn language_list_covers_catalog() {
        let listing = format_language_list();
        assert!(listing.contains("en-US"));
        assert!(listing.contains("Japanese"));
        assert!(listing.contains("(default)"));
    }
}
