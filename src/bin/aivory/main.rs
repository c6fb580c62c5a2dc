//! Aivory shell entrypoint: config resolution, terminal setup, event loop.

mod app;
mod config;
mod event_loop;
mod theme;
mod theme_picker;
mod theme_store;
mod toast;
mod ui;
mod user_config;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use aivory::lang;
use aivory::speech::scripted::{RecognitionScript, ScriptedRecognition};
use aivory::telemetry;

use crate::app::App;
use crate::config::CliConfig;
use crate::theme_store::ThemeStore;

fn main() -> Result<()> {
    let cli = CliConfig::parse();
    cli.validate()?;

    if cli.list_themes {
        print!("{}", config::format_theme_list());
        return Ok(());
    }
    if cli.list_languages {
        print!("{}", config::format_language_list());
        return Ok(());
    }

    telemetry::init_tracing(cli.logs, cli.no_logs);
    tracing::debug!("aivory starting");

    // Persisted preferences fill in whatever the CLI left unspecified.
    let saved = user_config::load_user_config();
    let mut theme_store = ThemeStore::initialize();
    if let Some(ref name) = cli.theme {
        theme_store.set_theme(name);
    }
    let input_language = resolve_language(cli.input_lang.as_deref(), saved.input_language.as_deref());
    let output_language =
        resolve_language(cli.output_lang.as_deref(), saved.output_language.as_deref());

    let script = match cli.script {
        Some(ref path) => RecognitionScript::load(path)?,
        None => RecognitionScript::demo(),
    };

    let mut app = App::new(
        theme_store,
        &input_language,
        &output_language,
        ScriptedRecognition::new(script),
    );

    run_tui(&mut app)?;

    tracing::debug!("aivory exiting");
    Ok(())
}

/// First valid candidate wins: CLI flag, then persisted value, then default.
fn resolve_language(cli: Option<&str>, saved: Option<&str>) -> String {
    [cli, saved]
        .into_iter()
        .flatten()
        .find(|code| lang::is_valid(code))
        .unwrap_or(lang::DEFAULT_LANGUAGE)
        .to_string()
}

/// Configure the terminal, run the event loop, restore the screen on exit.
fn run_tui(app: &mut App) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to init terminal backend")?;

    let result = event_loop::run_event_loop(&mut terminal, app);

    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("failed to leave alternate screen")?;
    terminal.show_cursor().context("failed to show cursor")?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flag_wins_over_saved_value() {
        assert_eq!(resolve_language(Some("fr-FR"), Some("de-DE")), "fr-FR");
    }

    #[test]
    fn saved_value_fills_in_when_flag_absent() {
        assert_eq!(resolve_language(None, Some("de-DE")), "de-DE");
    }

    #[test]
    fn invalid_candidates_are_skipped() {
        assert_eq!(resolve_language(Some("bogus"), Some("ja-JP")), "ja-JP");
        assert_eq!(resolve_language(Some("bogus"), None), "en-US");
        assert_eq!(resolve_language(None, None), "en-US");
    }
}
