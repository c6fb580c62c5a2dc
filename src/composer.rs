//! Draft message state: text, attachments, and the two language selections.
//!
//! The composer owns the in-progress turn. Submitting hands a snapshot to the
//! caller and clears text and files together; language selections persist
//! across turns until changed.

use crate::files::{self, Attachment};
use crate::lang;

/// Snapshot handed to the send path on a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingMessage {
    pub text: String,
    pub files: Vec<Attachment>,
    pub input_language: String,
    pub output_language: String,
}

/// In-progress, unsent message state.
#[derive(Debug, Clone)]
pub struct Composer {
    text: String,
    files: Vec<Attachment>,
    input_language: String,
    output_language: String,
    disabled: bool,
}

impl Composer {
    /// Create a composer; invalid language codes fall back to the default.
    #[must_use]
    pub fn new(input_language: &str, output_language: &str) -> Self {
        let valid = |code: &str| {
            if lang::is_valid(code) {
                code.to_string()
            } else {
                lang::DEFAULT_LANGUAGE.to_string()
            }
        };
        Self {
            text: String::new(),
            files: Vec::new(),
            input_language: valid(input_language),
            output_language: valid(output_language),
            disabled: false,
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn files(&self) -> &[Attachment] {
        &self.files
    }

    #[must_use]
    pub fn input_language(&self) -> &str {
        &self.input_language
    }

    #[must_use]
    pub fn output_language(&self) -> &str {
        &self.output_language
    }

    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Set by an external collaborator, e.g. while a response is pending.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn push_char(&mut self, ch: char) {
        self.text.push(ch);
    }

    pub fn pop_char(&mut self) {
        self.text.pop();
    }

    /// The line-break-modifier path of the keyboard contract.
    pub fn insert_newline(&mut self) {
        self.text.push('\n');
    }

    /// Update both language selections; invalid codes leave the current
    /// selection untouched so the catalog invariant holds.
    pub fn set_languages(&mut self, input: &str, output: &str) {
        if lang::is_valid(input) {
            self.input_language = input.to_string();
        }
        if lang::is_valid(output) {
            self.output_language = output.to_string();
        }
    }

    /// Append a recognized transcript to the draft.
    ///
    /// A separating space is inserted when the draft is non-empty and does
    /// not already end in whitespace.
    pub fn append_transcript(&mut self, transcript: &str) {
        let transcript = transcript.trim();
        if transcript.is_empty() {
            return;
        }
        if self
            .text
            .chars()
            .last()
            .is_some_and(|last| !last.is_whitespace())
        {
            self.text.push(' ');
        }
        self.text.push_str(transcript);
    }

    /// Attach a batch of files, enforcing the per-file size ceiling.
    ///
    /// Accepted files are appended in batch order; the rejected ones are
    /// returned so the caller can notify the user by name.
    pub fn attach(&mut self, batch: Vec<Attachment>) -> Vec<Attachment> {
        let (accepted, rejected) = files::split_valid(batch);
        self.files.extend(accepted);
        rejected
    }

    /// Remove one attachment by position.
    pub fn remove_file(&mut self, index: usize) -> Option<Attachment> {
        if index < self.files.len() {
            Some(self.files.remove(index))
        } else {
            None
        }
    }

    /// Submit the draft.
    ///
    /// Returns `None` (a silent no-op) when the trimmed text is empty or the
    /// composer is disabled. Otherwise returns the outgoing snapshot and
    /// clears text and files together; languages persist.
    pub fn submit(&mut self) -> Option<OutgoingMessage> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() || self.disabled {
            return None;
        }
        let message = OutgoingMessage {
            text: trimmed.to_string(),
            files: std::mem::take(&mut self.files),
            input_language: self.input_language.clone(),
            output_language: self.output_language.clone(),
        };
        self.text.clear();
        Some(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    fn composer() -> Composer {
        Composer::new("en-US", "en-US")
    }

    #[test]
    fn invalid_construction_languages_fall_back_to_default() {
        let c = Composer::new("nope", "also-nope");
        assert_eq!(c.input_language(), "en-US");
        assert_eq!(c.output_language(), "en-US");
    }

    #[test]
    fn empty_or_whitespace_submit_is_a_no_op() {
        let mut c = composer();
        c.attach(vec![Attachment::new("keep.txt", MIB)]);
        assert!(c.submit().is_none());
        c.set_text("   \n  ");
        assert!(c.submit().is_none());
        // Attachments survive the failed submit.
        assert_eq!(c.files().len(), 1);
    }

    #[test]
    fn disabled_composer_refuses_submit() {
        let mut c = composer();
        c.set_text("hello");
        c.set_disabled(true);
        assert!(c.submit().is_none());
        c.set_disabled(false);
        assert!(c.submit().is_some());
    }

    #[test]
    fn submit_trims_clears_and_keeps_languages() {
        let mut c = composer();
        c.set_languages("fr-FR", "ja-JP");
        c.set_text("  hello  ");
        c.attach(vec![Attachment::new("doc.pdf", MIB)]);

        let message = c.submit().expect("submit should fire");
        assert_eq!(message.text, "hello");
        assert_eq!(message.files, vec![Attachment::new("doc.pdf", MIB)]);
        assert_eq!(message.input_language, "fr-FR");
        assert_eq!(message.output_language, "ja-JP");

        assert!(c.text().is_empty());
        assert!(c.files().is_empty());
        assert_eq!(c.input_language(), "fr-FR");
        assert_eq!(c.output_language(), "ja-JP");
    }

    #[test]
    fn newline_keypress_inserts_literal_newline_without_submitting() {
        let mut c = composer();
        c.set_text("hello");
        c.insert_newline();
        assert_eq!(c.text(), "hello\n");
    }

    #[test]
    fn append_transcript_spaces_between_chunks() {
        let mut c = composer();
        c.append_transcript("hello");
        c.append_transcript("world");
        assert_eq!(c.text(), "hello world");

        c.set_text("draft ");
        c.append_transcript("tail");
        assert_eq!(c.text(), "draft tail");

        c.set_text(String::new());
        c.append_transcript("   ");
        assert_eq!(c.text(), "");
    }

    #[test]
    fn attach_rejects_oversized_files_but_keeps_rest() {
        let mut c = composer();
        let rejected = c.attach(vec![
            Attachment::new("huge.mov", 12 * MIB),
            Attachment::new("small.txt", 2 * MIB),
        ]);
        assert_eq!(rejected, vec![Attachment::new("huge.mov", 12 * MIB)]);
        assert_eq!(c.files(), &[Attachment::new("small.txt", 2 * MIB)]);
    }

    #[test]
    fn remove_file_by_index() {
        let mut c = composer();
        c.attach(vec![
            Attachment::new("a", 1),
            Attachment::new("b", 2),
        ]);
        assert_eq!(c.remove_file(0), Some(Attachment::new("a", 1)));
        assert_eq!(c.files(), &[Attachment::new("b", 2)]);
        assert_eq!(c.remove_file(5), None);
    }

    #[test]
    fn set_languages_ignores_invalid_codes() {
        let mut c = composer();
        c.set_languages("de-DE", "bogus");
        assert_eq!(c.input_language(), "de-DE");
        assert_eq!(c.output_language(), "en-US");
    }
}
