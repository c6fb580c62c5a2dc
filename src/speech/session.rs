//! Voice session controller: one recognition session, one synthesis playback.
//!
//! The controller is the sole owner of both exclusive resources. Recognition
//! follows an explicit state machine (`Idle` / `Listening`; platform errors
//! collapse straight back to `Idle`), while speaking is an independent flag
//! driven by synthesis events. Engine notifications are drained each tick and
//! converted to [`VoiceNotice`] values in receipt order.

use crossbeam_channel::Receiver;

use super::{
    RecognitionEngine, RecognitionEvent, RecognitionSignal, SessionId, SpeechError,
    SpeechSynthesizer, SynthesisEvent, SynthesisSignal, Utterance, UtteranceId,
};
use crate::lang;

/// Recognition phase of the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoicePhase {
    #[default]
    Idle,
    Listening,
}

/// User-facing outcome produced by draining engine signals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoiceNotice {
    /// The recognition session confirmed it is listening.
    ListeningStarted,
    /// The recognition session ended (platform end-of-session).
    ListeningStopped,
    /// A finalized transcript to append to the draft.
    Transcript(String),
    /// The recognition session failed; already back in `Idle`.
    RecognitionError(String),
    /// Synthesis playback began.
    SpeakingStarted,
    /// Synthesis playback finished.
    SpeakingStopped,
    /// Synthesis playback failed.
    SynthesisError(String),
}

/// Owns the recognition and synthesis engines and arbitrates access to them.
pub struct VoiceSessionController<R: RecognitionEngine, S: SpeechSynthesizer> {
    recognizer: R,
    synthesizer: S,
    recognition_rx: Receiver<RecognitionSignal>,
    synthesis_rx: Receiver<SynthesisSignal>,
    language: String,
    phase: VoicePhase,
    speaking: bool,
    next_session: SessionId,
    active_session: Option<SessionId>,
    next_utterance: UtteranceId,
    active_utterance: Option<UtteranceId>,
}

impl<R: RecognitionEngine, S: SpeechSynthesizer> VoiceSessionController<R, S> {
    /// Create a controller bound to `language` (a valid catalog code).
    pub fn new(recognizer: R, synthesizer: S, language: &str) -> Self {
        let recognition_rx = recognizer.signals();
        let synthesis_rx = synthesizer.signals();
        Self {
            recognizer,
            synthesizer,
            recognition_rx,
            synthesis_rx,
            language: language.to_string(),
            phase: VoicePhase::Idle,
            speaking: false,
            next_session: 0,
            active_session: None,
            next_utterance: 0,
            active_utterance: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> VoicePhase {
        self.phase
    }

    #[must_use]
    pub fn is_listening(&self) -> bool {
        self.phase == VoicePhase::Listening
    }

    #[must_use]
    pub fn is_speaking(&self) -> bool {
        self.speaking
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn recognizer_mut(&mut self) -> &mut R {
        &mut self.recognizer
    }

    pub fn synthesizer_mut(&mut self) -> &mut S {
        &mut self.synthesizer
    }

    /// Start listening in the current language.
    ///
    /// If a session is still active (restart races, language churn) it is
    /// aborted first so two platform sessions never coexist.
    ///
    /// # Errors
    ///
    /// `CapabilityUnsupported` when recognition is unavailable, otherwise
    /// whatever the engine reports (`PermissionDenied`, `Session`). The
    /// controller stays in `Idle` on error.
    pub fn start_listening(&mut self) -> Result<(), SpeechError> {
        if !self.recognizer.supported() {
            return Err(SpeechError::CapabilityUnsupported);
        }
        if let Some(active) = self.active_session.take() {
            self.recognizer.abort(active);
        }
        self.next_session += 1;
        let session = self.next_session;
        match self.recognizer.start(session, &self.language) {
            Ok(()) => {
                self.active_session = Some(session);
                self.phase = VoicePhase::Listening;
                tracing::debug!(session, language = %self.language, "recognition session started");
                Ok(())
            }
            Err(err) => {
                self.phase = VoicePhase::Idle;
                Err(err)
            }
        }
    }

    /// Stop listening.
    ///
    /// The platform handle is invalidated immediately, so any event already
    /// in flight for the stopped session is ignored.
    pub fn stop_listening(&mut self) {
        if let Some(active) = self.active_session.take() {
            self.recognizer.stop(active);
        }
        self.phase = VoicePhase::Idle;
    }

    /// Rebind the controller to a new language.
    ///
    /// Any active session is torn down (aborted, not stopped) and the phase
    /// returns to `Idle`; listening is never auto-resumed, the user restarts
    /// explicitly. Invalid codes are ignored.
    pub fn set_language(&mut self, code: &str) {
        if !lang::is_valid(code) {
            return;
        }
        if let Some(active) = self.active_session.take() {
            self.recognizer.abort(active);
        }
        self.phase = VoicePhase::Idle;
        self.language = code.to_string();
    }

    /// Speak `text` with the voice resolved for `language`.
    ///
    /// Cancel-then-start: a new call preempts any in-flight playback, never
    /// queues behind it.
    ///
    /// # Errors
    ///
    /// `CapabilityUnsupported` when synthesis is unavailable, or the engine's
    /// start failure.
    pub fn speak(&mut self, text: &str, language: &str) -> Result<(), SpeechError> {
        if !self.synthesizer.supported() {
            return Err(SpeechError::CapabilityUnsupported);
        }
        self.synthesizer.cancel();
        self.active_utterance = None;
        self.speaking = false;

        self.next_utterance += 1;
        let id = self.next_utterance;
        let utterance = Utterance::new(text, lang::voice_for(language));
        self.synthesizer.speak(id, &utterance)?;
        self.active_utterance = Some(id);
        Ok(())
    }

    /// Cancel active playback. Idempotent when nothing is playing.
    pub fn stop_speaking(&mut self) {
        self.synthesizer.cancel();
        self.active_utterance = None;
        self.speaking = false;
    }

    /// Drain pending engine signals into ordered notices.
    ///
    /// Signals tagged with anything other than the current session/utterance
    /// are stale (already stopped, aborted, or preempted) and are dropped.
    pub fn drain(&mut self) -> Vec<VoiceNotice> {
        let mut notices = Vec::new();

        while let Ok(signal) = self.recognition_rx.try_recv() {
            if self.active_session != Some(signal.session) {
                continue;
            }
            match signal.event {
                RecognitionEvent::Started => {
                    self.phase = VoicePhase::Listening;
                    notices.push(VoiceNotice::ListeningStarted);
                }
                RecognitionEvent::Finalized { transcript } => {
                    if self.phase == VoicePhase::Listening {
                        notices.push(VoiceNotice::Transcript(transcript));
                    }
                }
                RecognitionEvent::Error { message } => {
                    // Transient Error state collapses straight to Idle; the
                    // user re-initiates, nothing retries on its own.
                    self.phase = VoicePhase::Idle;
                    self.active_session = None;
                    notices.push(VoiceNotice::RecognitionError(message));
                }
                RecognitionEvent::Ended => {
                    self.phase = VoicePhase::Idle;
                    self.active_session = None;
                    notices.push(VoiceNotice::ListeningStopped);
                }
            }
        }

        while let Ok(signal) = self.synthesis_rx.try_recv() {
            if self.active_utterance != Some(signal.utterance) {
                continue;
            }
            match signal.event {
                SynthesisEvent::Started => {
                    self.speaking = true;
                    notices.push(VoiceNotice::SpeakingStarted);
                }
                SynthesisEvent::Ended => {
                    self.speaking = false;
                    self.active_utterance = None;
                    notices.push(VoiceNotice::SpeakingStopped);
                }
                SynthesisEvent::Error { message } => {
                    self.speaking = false;
                    self.active_utterance = None;
                    notices.push(VoiceNotice::SynthesisError(message));
                }
            }
        }

        notices
    }
}

impl<R: RecognitionEngine, S: SpeechSynthesizer> Drop for VoiceSessionController<R, S> {
    fn drop(&mut self) {
        // Abort rather than stop so the microphone is released immediately.
        if let Some(active) = self.active_session.take() {
            self.recognizer.abort(active);
        }
        self.synthesizer.cancel();
    }
}
