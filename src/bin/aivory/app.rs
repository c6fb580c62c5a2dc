//! Shell state: composer, voice controller, responder, toasts, theme store.
//!
//! One mutable struct driven by the event loop. Input dispatch mutates it,
//! `on_tick` advances the time-driven parts (scripted engines, pending
//! replies, toast expiry) and converts voice notices to user feedback.

use std::fs;
use std::path::Path;

use aivory::lang;
use aivory::speech::scripted::{ScriptedRecognition, ScriptedSynthesis};
use aivory::{Attachment, Composer, ResponseSimulator, VoiceNotice, VoiceSessionController};

use crate::theme::ThemeColors;
use crate::theme_picker::ThemePickerState;
use crate::theme_store::ThemeStore;
use crate::toast::{ToastCenter, ToastSeverity};
use crate::user_config;

/// Transcript toasts show at most this many characters.
const TRANSCRIPT_PREVIEW_MAX: usize = 50;

/// Utterance spoken by Ctrl+S when playback is idle.
const TEST_UTTERANCE: &str = "Voice output is working.";

pub(crate) struct App {
    pub(crate) composer: Composer,
    pub(crate) voice: VoiceSessionController<ScriptedRecognition, ScriptedSynthesis>,
    pub(crate) responder: ResponseSimulator,
    pub(crate) toasts: ToastCenter,
    pub(crate) theme_store: ThemeStore,
    pub(crate) show_upload: bool,
    /// Path being typed into the upload panel.
    pub(crate) upload_input: String,
    pub(crate) picker: Option<ThemePickerState>,
    pub(crate) should_quit: bool,
}

impl App {
    pub(crate) fn new(
        theme_store: ThemeStore,
        input_language: &str,
        output_language: &str,
        recognizer: ScriptedRecognition,
    ) -> Self {
        let composer = Composer::new(input_language, output_language);
        let voice =
            VoiceSessionController::new(recognizer, ScriptedSynthesis::new(), composer.input_language());
        Self {
            composer,
            voice,
            responder: ResponseSimulator::new(),
            toasts: ToastCenter::new(),
            theme_store,
            show_upload: false,
            upload_input: String::new(),
            picker: None,
            should_quit: false,
        }
    }

    pub(crate) fn colors(&self) -> &'static ThemeColors {
        self.theme_store.active()
    }

    /// Advance everything time-driven by one tick.
    pub(crate) fn on_tick(&mut self) {
        self.voice.recognizer_mut().pump();
        self.voice.synthesizer_mut().pump();

        let notices = self.voice.drain();
        for notice in notices {
            self.handle_notice(notice);
        }

        for reply in self.responder.tick() {
            if let Err(err) = self.voice.speak(&reply.text, &reply.language) {
                self.toasts
                    .push(ToastSeverity::Error, format!("Playback failed: {err}"));
            }
        }

        // The send affordance stays disabled while a reply is pending.
        self.composer.set_disabled(self.responder.is_pending());

        self.toasts.tick();
    }

    fn handle_notice(&mut self, notice: VoiceNotice) {
        match notice {
            VoiceNotice::ListeningStarted => {
                self.toasts.push(ToastSeverity::Info, "Listening...");
            }
            VoiceNotice::ListeningStopped => {
                self.toasts.push(ToastSeverity::Info, "Stopped listening");
            }
            VoiceNotice::Transcript(text) => {
                let preview = truncate_preview(&text, TRANSCRIPT_PREVIEW_MAX);
                self.toasts
                    .push(ToastSeverity::Success, format!("Heard: {preview}"));
                self.composer.append_transcript(&text);
            }
            VoiceNotice::RecognitionError(message) => {
                self.toasts
                    .push(ToastSeverity::Error, format!("Recognition error: {message}"));
            }
            VoiceNotice::SpeakingStarted => {
                self.toasts.push(ToastSeverity::Info, "Speaking reply...");
            }
            VoiceNotice::SpeakingStopped => {}
            VoiceNotice::SynthesisError(message) => {
                self.toasts
                    .push(ToastSeverity::Error, format!("Speech error: {message}"));
            }
        }
    }

    /// Ctrl+V: start or stop the recognition session.
    pub(crate) fn toggle_listening(&mut self) {
        if self.voice.is_listening() {
            self.voice.stop_listening();
            self.toasts.push(ToastSeverity::Info, "Stopped listening");
            return;
        }
        if let Err(err) = self.voice.start_listening() {
            self.toasts
                .push(ToastSeverity::Error, format!("Cannot listen: {err}"));
        }
    }

    /// Ctrl+S: cancel playback, or replay a test utterance when idle.
    pub(crate) fn stop_or_test_speak(&mut self) {
        if self.voice.is_speaking() {
            self.voice.stop_speaking();
            self.toasts.push(ToastSeverity::Info, "Playback stopped");
            return;
        }
        let language = self.composer.output_language().to_string();
        if let Err(err) = self.voice.speak(TEST_UTTERANCE, &language) {
            self.toasts
                .push(ToastSeverity::Error, format!("Cannot speak: {err}"));
        }
    }

    /// Enter: submit the draft and schedule the reply.
    pub(crate) fn submit(&mut self) {
        let Some(message) = self.composer.submit() else {
            return;
        };
        self.responder.on_message_sent(&message);
        self.composer.set_disabled(true);
        self.show_upload = false;
        self.toasts.push(ToastSeverity::Success, "Message sent");
    }

    /// Attach a file from disk while the upload panel is open.
    pub(crate) fn attach_path(&mut self, path: &Path) {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let attachment = match fs::metadata(path) {
            Ok(meta) => Attachment::new(name, meta.len()),
            Err(err) => {
                self.toasts
                    .push(ToastSeverity::Error, format!("Cannot read {name}: {err}"));
                return;
            }
        };
        self.attach_batch(vec![attachment]);
    }

    /// Attach pre-built descriptors, surfacing per-file rejections.
    pub(crate) fn attach_batch(&mut self, batch: Vec<Attachment>) {
        let count = batch.len();
        let rejected = self.composer.attach(batch);
        for file in &rejected {
            self.toasts.push(
                ToastSeverity::Warning,
                format!("{} exceeds 10MB limit", file.name),
            );
        }
        let accepted = count - rejected.len();
        if accepted > 0 {
            self.toasts
                .push(ToastSeverity::Success, format!("Attached {accepted} file(s)"));
        }
    }

    /// Ctrl+L: advance the voice input language and rebind the controller.
    pub(crate) fn cycle_input_language(&mut self) {
        let next = lang::next_code(self.composer.input_language());
        let output = self.composer.output_language().to_string();
        self.composer.set_languages(next, &output);
        self.voice.set_language(next);
        self.persist_languages();
        self.toasts.push(
            ToastSeverity::Info,
            format!("Input language: {}", lang::display_name(next)),
        );
    }

    /// Ctrl+O: advance the response language.
    pub(crate) fn cycle_output_language(&mut self) {
        let next = lang::next_code(self.composer.output_language());
        let input = self.composer.input_language().to_string();
        self.composer.set_languages(&input, next);
        self.persist_languages();
        self.toasts.push(
            ToastSeverity::Info,
            format!("Output language: {}", lang::display_name(next)),
        );
    }

    fn persist_languages(&self) {
        user_config::persist_languages(
            self.composer.input_language(),
            self.composer.output_language(),
        );
    }

    /// Ctrl+T: open or close the theme picker overlay.
    pub(crate) fn toggle_picker(&mut self) {
        self.picker = match self.picker {
            Some(_) => None,
            None => Some(ThemePickerState::open_at(self.theme_store.current())),
        };
    }

    /// Apply the picker's selection through the store and close the overlay.
    pub(crate) fn apply_picker_selection(&mut self) {
        if let Some(picker) = self.picker.take() {
            let theme = picker.selected_theme();
            if self.theme_store.set_theme(&theme.to_string()) {
                self.toasts
                    .push(ToastSeverity::Success, format!("Theme: {}", self.colors().name));
            }
        }
    }

    pub(crate) fn toggle_upload_panel(&mut self) {
        self.show_upload = !self.show_upload;
        self.upload_input.clear();
    }

    /// Enter inside the upload panel: attach the typed path.
    pub(crate) fn attach_typed_path(&mut self) {
        let raw = self.upload_input.trim().to_string();
        if raw.is_empty() {
            return;
        }
        self.attach_path(Path::new(&raw));
        self.upload_input.clear();
    }
}

fn truncate_preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars).collect();
    format!("{head}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::user_config::test_support::{env_guard, temp_config_dir, DIR_ENV};
    use aivory::speech::scripted::{RecognitionScript, ScriptLine};
    use std::env;

    fn app() -> App {
        app_with_script(RecognitionScript::default())
    }

    fn app_with_script(script: RecognitionScript) -> App {
        App::new(
            ThemeStore::from_saved(None),
            "en-US",
            "en-US",
            ScriptedRecognition::new(script),
        )
    }

    #[test]
    fn submit_schedules_reply_and_disables_composer() {
        let mut app = app();
        app.composer.set_text("hello");
        app.submit();
        assert!(app.responder.is_pending());
        assert!(app.composer.is_disabled());
        // The tick keeps it disabled until the reply fires.
        app.on_tick();
        assert!(app.composer.is_disabled());
    }

    #[test]
    fn empty_submit_is_silent() {
        let mut app = app();
        app.submit();
        assert!(!app.responder.is_pending());
        assert_eq!(app.toasts.active().count(), 0);
    }

    #[test]
    fn immediate_script_line_lands_in_the_draft() {
        let script = RecognitionScript {
            lines: vec![ScriptLine {
                after_ms: 0,
                transcript: "weather report".to_string(),
            }],
            fail_with: None,
        };
        let mut app = app_with_script(script);
        app.toggle_listening();
        assert!(app.voice.is_listening());
        app.on_tick();
        assert_eq!(app.composer.text(), "weather report");
        let messages: Vec<_> = app.toasts.active().map(|t| t.message.clone()).collect();
        assert!(messages.iter().any(|m| m.contains("Heard: weather report")));
    }

    #[test]
    fn long_transcripts_get_a_truncated_toast_preview() {
        let long = "a".repeat(80);
        let script = RecognitionScript {
            lines: vec![ScriptLine {
                after_ms: 0,
                transcript: long.clone(),
            }],
            fail_with: None,
        };
        let mut app = app_with_script(script);
        app.toggle_listening();
        app.on_tick();
        assert_eq!(app.composer.text(), long);
        let preview = app
            .toasts
            .active()
            .find(|t| t.message.starts_with("Heard:"))
            .map(|t| t.message.clone())
            .expect("transcript toast");
        assert!(preview.ends_with("..."));
        assert!(preview.len() < long.len());
    }

    #[test]
    fn unsupported_recognizer_surfaces_a_toast() {
        let mut app = app();
        app.voice.recognizer_mut().mark_unsupported();
        app.toggle_listening();
        assert!(!app.voice.is_listening());
        let messages: Vec<_> = app.toasts.active().map(|t| t.message.clone()).collect();
        assert!(messages.iter().any(|m| m.starts_with("Cannot listen:")));
    }

    #[test]
    fn oversized_attachment_is_named_in_a_warning() {
        const MIB: u64 = 1024 * 1024;
        let mut app = app();
        app.attach_batch(vec![
            Attachment::new("video.mov", 12 * MIB),
            Attachment::new("notes.txt", 2 * MIB),
        ]);
        assert_eq!(app.composer.files().len(), 1);
        let messages: Vec<_> = app.toasts.active().map(|t| t.message.clone()).collect();
        assert!(messages
            .iter()
            .any(|m| m.contains("video.mov exceeds 10MB limit")));
        assert!(messages.iter().any(|m| m.contains("Attached 1 file(s)")));
    }

    #[test]
    fn input_language_cycle_rebinds_the_controller() {
        let _guard = env_guard();
        let dir = temp_config_dir("app_lang");
        env::set_var(DIR_ENV, &dir);

        let mut app = app();
        app.cycle_input_language();
        assert_eq!(app.composer.input_language(), "es-ES");
        assert_eq!(app.voice.language(), "es-ES");
        assert!(!app.voice.is_listening());

        env::remove_var(DIR_ENV);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn picker_selection_applies_through_the_store() {
        let _guard = env_guard();
        let dir = temp_config_dir("app_picker");
        env::set_var(DIR_ENV, &dir);

        let mut app = app();
        app.toggle_picker();
        let picker = app.picker.as_mut().expect("picker open");
        picker.select_next();
        app.apply_picker_selection();
        assert!(app.picker.is_none());
        assert_eq!(app.theme_store.current(), Theme::Crimson);

        env::remove_var(DIR_ENV);
        let _ = std::fs::remove_dir_all(dir);
    }

    #[test]
    fn stop_or_test_speak_starts_playback_when_idle() {
        let mut app = app();
        app.stop_or_test_speak();
        app.on_tick();
        assert!(app.voice.is_speaking());
        app.stop_or_test_speak();
        assert!(!app.voice.is_speaking());
    }

    #[test]
    fn truncate_preview_is_char_safe() {
        assert_eq!(truncate_preview("short", 50), "short");
        let wide = "日本語のテスト".repeat(10);
        let preview = truncate_preview(&wide, 50);
        assert_eq!(preview.chars().count(), 53); // 50 + "..."
    }
}
