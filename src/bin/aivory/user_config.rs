//! Persistent user config (`~/.config/aivory/config.toml`) for core preferences.
//!
//! Loads saved preferences on startup and merges them with CLI flags.
//! CLI flags always take precedence over persisted values. Preferences
//! changed at runtime (theme, languages) are persisted back to disk.

use std::env;
use std::fs;
use std::path::PathBuf;

const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV: &str = "AIVORY_CONFIG_DIR";

/// Persistent user preferences that survive across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct UserConfig {
    pub(crate) theme: Option<String>,
    pub(crate) input_language: Option<String>,
    pub(crate) output_language: Option<String>,
}

/// Resolve the config directory path.
fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = env::var(CONFIG_DIR_ENV) {
        let trimmed = dir.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    let home = env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config").join("aivory"))
}

/// Resolve the full config file path.
pub(crate) fn config_file_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Parse a TOML-like key = value line. Handles quoted and unquoted values.
fn parse_toml_value(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('[') {
        return None;
    }
    let (key, rest) = line.split_once('=')?;
    let key = key.trim();
    let value = rest.trim().trim_matches('"');
    Some((key, value))
}

/// Load user config from disk.
/// Returns a default (all-None) config if the file doesn't exist or can't be read.
pub(crate) fn load_user_config() -> UserConfig {
    let Some(path) = config_file_path() else {
        return UserConfig::default();
    };
    let contents = match fs::read_to_string(&path) {
        Ok(c) => c,
        Err(_) => return UserConfig::default(),
    };
    parse_user_config(&contents)
}

/// Parse config from TOML string content.
fn parse_user_config(contents: &str) -> UserConfig {
    let mut config = UserConfig::default();
    for line in contents.lines() {
        let Some((key, value)) = parse_toml_value(line) else {
            continue;
        };
        match key {
            "theme" => config.theme = Some(value.to_string()),
            "input_language" => config.input_language = Some(value.to_string()),
            "output_language" => config.output_language = Some(value.to_string()),
            _ => {} // Ignore unknown keys for forward compatibility
        }
    }
    config
}

/// Serialize user config to TOML format.
fn serialize_user_config(config: &UserConfig) -> String {
    let mut lines = Vec::new();
    lines.push("# Aivory persistent user config".to_string());
    lines.push("# Managed by the shell; CLI flags override these values.".to_string());
    lines.push(String::new());

    if let Some(ref v) = config.theme {
        lines.push(format!("theme = \"{v}\""));
    }
    if let Some(ref v) = config.input_language {
        lines.push(format!("input_language = \"{v}\""));
    }
    if let Some(ref v) = config.output_language {
        lines.push(format!("output_language = \"{v}\""));
    }

    lines.push(String::new());
    lines.join("\n")
}

/// Save user config to disk. Failures are logged, never surfaced.
pub(crate) fn save_user_config(config: &UserConfig) {
    let Some(path) = config_file_path() else {
        tracing::debug!("user config: cannot resolve config file path");
        return;
    };

    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            tracing::debug!(
                "user config: failed to create config directory {}: {err}",
                parent.display()
            );
            return;
        }
    }

    let body = serialize_user_config(config);
    if let Err(err) = fs::write(&path, body) {
        tracing::debug!("user config: failed to write {}: {err}", path.display());
    }
}

/// Persist a single preference, keeping the other saved values intact.
pub(crate) fn persist_theme(theme_key: &str) {
    let mut config = load_user_config();
    config.theme = Some(theme_key.to_string());
    save_user_config(&config);
}

/// Persist the language pair, keeping the saved theme intact.
pub(crate) fn persist_languages(input: &str, output: &str) {
    let mut config = load_user_config();
    config.input_language = Some(input.to_string());
    config.output_language = Some(output.to_string());
    save_user_config(&config);
}
