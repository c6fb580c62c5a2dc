//! Capability seam over the platform speech engines.
//!
//! The recognition and synthesis engines are external collaborators (a
//! browser API, an OS service, a model runtime). This module abstracts them
//! behind traits whose notifications arrive on channels, so the session
//! controller can be driven by a scripted implementation in tests and in the
//! demo shell.

pub mod scripted;
mod session;

pub use session::{VoiceNotice, VoicePhase, VoiceSessionController};

use crossbeam_channel::Receiver;
use std::fmt;

/// Monotonic identifier for one recognition session.
///
/// Every signal an engine emits carries the session it belongs to; the
/// controller drops signals from sessions it has already stopped or aborted.
pub type SessionId = u64;

/// Monotonic identifier for one synthesis playback.
pub type UtteranceId = u64;

/// Asynchronous notification from a recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// The session began listening.
    Started,
    /// A finalized transcript chunk.
    Finalized { transcript: String },
    /// The platform reported a failure; the session is dead.
    Error { message: String },
    /// The session ended (platform-initiated or after an explicit stop).
    Ended,
}

/// A recognition event tagged with its originating session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionSignal {
    pub session: SessionId,
    pub event: RecognitionEvent,
}

/// Asynchronous notification from a synthesis playback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisEvent {
    Started,
    Ended,
    Error { message: String },
}

/// A synthesis event tagged with its originating utterance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisSignal {
    pub utterance: UtteranceId,
    pub event: SynthesisEvent,
}

/// One text-to-speech playback request.
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    /// Resolved voice tag (see [`crate::lang::voice_for`]).
    pub voice: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    /// Build an utterance with the shell's fixed rate and pitch.
    #[must_use]
    pub fn new(text: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            voice: voice.into(),
            rate: 0.9,
            pitch: 1.0,
        }
    }
}

/// Failures surfaced at the speech boundary.
///
/// None of these are fatal and none are retried automatically; the caller
/// notifies the user and waits for the next explicit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechError {
    /// The platform lacks the recognition or synthesis capability.
    CapabilityUnsupported,
    /// Microphone access was refused.
    PermissionDenied,
    /// The platform reported a session failure.
    Session(String),
}

impl fmt::Display for SpeechError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapabilityUnsupported => write!(f, "speech capability not supported"),
            Self::PermissionDenied => write!(f, "microphone access denied"),
            Self::Session(message) => write!(f, "speech session error: {message}"),
        }
    }
}

impl std::error::Error for SpeechError {}

/// Speech-to-text engine surface.
///
/// `start` binds a session to a language tag; result/error/end notifications
/// for that session arrive on the [`signals`](Self::signals) channel tagged
/// with the session id.
pub trait RecognitionEngine {
    /// Whether the platform provides speech recognition at all.
    fn supported(&self) -> bool;

    /// Begin a new session bound to `language`.
    ///
    /// # Errors
    ///
    /// `CapabilityUnsupported` when the platform lacks recognition,
    /// `PermissionDenied` when microphone access is refused, or
    /// `Session` for any other platform failure to start.
    fn start(&mut self, session: SessionId, language: &str) -> Result<(), SpeechError>;

    /// Gracefully stop `session`; the engine should emit `Ended` for it.
    fn stop(&mut self, session: SessionId);

    /// Abort `session` immediately, releasing the microphone without
    /// emitting further events.
    fn abort(&mut self, session: SessionId);

    /// Channel carrying this engine's notifications.
    fn signals(&self) -> Receiver<RecognitionSignal>;
}

/// Text-to-speech engine surface.
pub trait SpeechSynthesizer {
    /// Whether the platform provides speech synthesis at all.
    fn supported(&self) -> bool;

    /// Begin playback of `utterance`. At most one playback is active; the
    /// caller cancels any previous one first.
    ///
    /// # Errors
    ///
    /// `CapabilityUnsupported` when the platform lacks synthesis, or
    /// `Session` for a platform failure to start playback.
    fn speak(&mut self, utterance_id: UtteranceId, utterance: &Utterance)
        -> Result<(), SpeechError>;

    /// Cancel the active playback, if any. Idempotent.
    fn cancel(&mut self);

    /// Channel carrying this engine's notifications.
    fn signals(&self) -> Receiver<SynthesisSignal>;
}
