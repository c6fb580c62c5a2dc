//! Core library for the aivory chat shell.
//!
//! Holds the pieces with actual state-transition behavior: the language
//! catalog, the voice session controller over abstract speech engines, the
//! message composer, attachment validation, and the canned-response
//! simulator. The terminal front end lives in `src/bin/aivory`.

pub mod composer;
pub mod files;
pub mod lang;
pub mod responder;
pub mod speech;
pub mod telemetry;

pub use composer::{Composer, OutgoingMessage};
pub use files::{Attachment, MAX_ATTACHMENT_BYTES};
pub use responder::{ResponseSimulator, RESPONSE_DELAY_MS};
pub use speech::{SpeechError, VoiceNotice, VoicePhase, VoiceSessionController};
