//! Redraw/input/tick loop driving the shell.
//!
//! Single-threaded: each iteration redraws, polls for a key with a short
//! timeout, and advances the time-driven state (scripted engines, pending
//! replies, toast expiry) via `App::on_tick`.

use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use crate::app::App;
use crate::ui;

/// Poll timeout; doubles as the tick cadence.
const TICK_MS: u64 = 100;

/// Drive the loop until the user quits.
pub(crate) fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if event::poll(Duration::from_millis(TICK_MS)).context("failed to poll events")? {
            if let Event::Key(key) = event::read().context("failed to read key event")? {
                if key.kind != KeyEventKind::Release {
                    handle_key_event(app, key);
                }
            }
        }

        app.on_tick();
    }
    Ok(())
}

/// Dispatch one key press against the current mode.
pub(crate) fn handle_key_event(app: &mut App, key: KeyEvent) {
    if app.picker.is_some() {
        handle_picker_key(app, key);
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.should_quit = true,
            KeyCode::Char('v') => app.toggle_listening(),
            KeyCode::Char('s') => app.stop_or_test_speak(),
            KeyCode::Char('t') => app.toggle_picker(),
            KeyCode::Char('u') => app.toggle_upload_panel(),
            KeyCode::Char('l') => app.cycle_input_language(),
            KeyCode::Char('o') => app.cycle_output_language(),
            KeyCode::Char('d') => {
                app.toasts.dismiss_latest();
            }
            _ => {}
        }
        return;
    }

    if app.show_upload {
        handle_upload_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Enter => {
            // Modifier-Enter is the line-break path; plain Enter submits.
            if key
                .modifiers
                .intersects(KeyModifiers::SHIFT | KeyModifiers::ALT)
            {
                app.composer.insert_newline();
            } else {
                app.submit();
            }
        }
        KeyCode::Backspace => app.composer.pop_char(),
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(c) => app.composer.push_char(c),
        _ => {}
    }
}

fn handle_picker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            if let Some(picker) = app.picker.as_mut() {
                picker.select_previous();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if let Some(picker) = app.picker.as_mut() {
                picker.select_next();
            }
        }
        KeyCode::Enter => app.apply_picker_selection(),
        KeyCode::Esc => app.picker = None,
        KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.picker = None;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        _ => {}
    }
}

fn handle_upload_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.attach_typed_path(),
        KeyCode::Backspace => {
            app.upload_input.pop();
        }
        KeyCode::Esc => app.toggle_upload_panel(),
        KeyCode::Char(c) => app.upload_input.push(c),
        _ => {}
    }
}
