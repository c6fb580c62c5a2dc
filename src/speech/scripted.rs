//! Deterministic speech engines driven by a script instead of hardware.
//!
//! The shell has no real microphone or speaker integration; these engines
//! stand in for the platform so the session controller can be exercised
//! end-to-end. A recognition script is a sequence of transcript lines with
//! offsets from session start, loadable from JSON via `--script`.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossbeam_channel::{unbounded, Receiver, Sender};
use serde::Deserialize;

use super::{
    RecognitionEngine, RecognitionEvent, RecognitionSignal, SessionId, SpeechError,
    SpeechSynthesizer, SynthesisEvent, SynthesisSignal, Utterance, UtteranceId,
};

/// Simulated playback pacing: duration grows with utterance length.
const SYNTH_MS_PER_CHAR: u64 = 55;
const SYNTH_MIN_MS: u64 = 400;
const SYNTH_MAX_MS: u64 = 6_000;

/// One scripted transcript line.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptLine {
    /// Offset from session start after which the line finalizes.
    #[serde(default)]
    pub after_ms: u64,
    pub transcript: String,
}

/// A full recognition script.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct RecognitionScript {
    pub lines: Vec<ScriptLine>,
    /// Optional error injected after the last line finalizes.
    #[serde(default)]
    pub fail_with: Option<String>,
}

impl RecognitionScript {
    /// Script used by the shell when `--script` is not given.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            lines: vec![
                ScriptLine {
                    after_ms: 900,
                    transcript: "What can you tell me".to_string(),
                },
                ScriptLine {
                    after_ms: 2_000,
                    transcript: "about response times".to_string(),
                },
            ],
            fail_with: None,
        }
    }

    /// Load a script from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or does not parse.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("failed to parse script {}", path.display()))
    }
}

struct ActiveScript {
    session: SessionId,
    started_at: Instant,
    next_line: usize,
    failed: bool,
}

/// Recognition engine that replays a [`RecognitionScript`].
///
/// Each `start` replays the script from the beginning; `pump` must be called
/// periodically (the event-loop tick) to deliver due lines.
pub struct ScriptedRecognition {
    script: RecognitionScript,
    supported: bool,
    permission_granted: bool,
    active: Option<ActiveScript>,
    tx: Sender<RecognitionSignal>,
    rx: Receiver<RecognitionSignal>,
}

impl ScriptedRecognition {
    #[must_use]
    pub fn new(script: RecognitionScript) -> Self {
        let (tx, rx) = unbounded();
        Self {
            script,
            supported: true,
            permission_granted: true,
            active: None,
            tx,
            rx,
        }
    }

    /// Simulate a platform without speech recognition.
    pub fn mark_unsupported(&mut self) {
        self.supported = false;
    }

    /// Simulate a refused microphone-permission prompt.
    pub fn deny_permission(&mut self) {
        self.permission_granted = false;
    }

    /// Deliver any script lines that have come due.
    pub fn pump(&mut self) {
        self.pump_at(Instant::now());
    }

    fn pump_at(&mut self, now: Instant) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        let elapsed = now.saturating_duration_since(active.started_at);
        while let Some(line) = self.script.lines.get(active.next_line) {
            if elapsed < Duration::from_millis(line.after_ms) {
                return;
            }
            let _ = self.tx.send(RecognitionSignal {
                session: active.session,
                event: RecognitionEvent::Finalized {
                    transcript: line.transcript.clone(),
                },
            });
            active.next_line += 1;
        }
        if let Some(message) = self.script.fail_with.clone() {
            if !active.failed {
                active.failed = true;
                let session = active.session;
                self.active = None;
                let _ = self.tx.send(RecognitionSignal {
                    session,
                    event: RecognitionEvent::Error { message },
                });
            }
        }
    }
}

impl RecognitionEngine for ScriptedRecognition {
    fn supported(&self) -> bool {
        self.supported
    }

    fn start(&mut self, session: SessionId, _language: &str) -> Result<(), SpeechError> {
        if !self.supported {
            return Err(SpeechError::CapabilityUnsupported);
        }
        if !self.permission_granted {
            return Err(SpeechError::PermissionDenied);
        }
        self.active = Some(ActiveScript {
            session,
            started_at: Instant::now(),
            next_line: 0,
            failed: false,
        });
        let _ = self.tx.send(RecognitionSignal {
            session,
            event: RecognitionEvent::Started,
        });
        Ok(())
    }

    fn stop(&mut self, session: SessionId) {
        if self.active.as_ref().map(|a| a.session) == Some(session) {
            self.active = None;
            let _ = self.tx.send(RecognitionSignal {
                session,
                event: RecognitionEvent::Ended,
            });
        }
    }

    fn abort(&mut self, session: SessionId) {
        // Abort releases the session without emitting further events.
        if self.active.as_ref().map(|a| a.session) == Some(session) {
            self.active = None;
        }
    }

    fn signals(&self) -> Receiver<RecognitionSignal> {
        self.rx.clone()
    }
}

struct ActiveUtterance {
    id: UtteranceId,
    ends_at: Instant,
}

/// Synthesizer that simulates playback timing from text length.
pub struct ScriptedSynthesis {
    supported: bool,
    active: Option<ActiveUtterance>,
    tx: Sender<SynthesisSignal>,
    rx: Receiver<SynthesisSignal>,
}

impl ScriptedSynthesis {
    #[must_use]
    pub fn new() -> Self {
        let (tx, rx) = unbounded();
        Self {
            supported: true,
            active: None,
            tx,
            rx,
        }
    }

    /// Simulate a platform without speech synthesis.
    pub fn mark_unsupported(&mut self) {
        self.supported = false;
    }

    /// Deliver the `Ended` signal once simulated playback has run its course.
    pub fn pump(&mut self) {
        self.pump_at(Instant::now());
    }

    fn pump_at(&mut self, now: Instant) {
        let due = self
            .active
            .as_ref()
            .is_some_and(|active| now >= active.ends_at);
        if due {
            if let Some(active) = self.active.take() {
                let _ = self.tx.send(SynthesisSignal {
                    utterance: active.id,
                    event: SynthesisEvent::Ended,
                });
            }
        }
    }

    fn playback_duration(text: &str) -> Duration {
        let chars = text.chars().count() as u64;
        Duration::from_millis((chars * SYNTH_MS_PER_CHAR).clamp(SYNTH_MIN_MS, SYNTH_MAX_MS))
    }
}

impl Default for ScriptedSynthesis {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSynthesizer for ScriptedSynthesis {
    fn supported(&self) -> bool {
        self.supported
    }

    fn speak(
        &mut self,
        utterance_id: UtteranceId,
        utterance: &Utterance,
    ) -> Result<(), SpeechError> {
        if !self.supported {
            return Err(SpeechError::CapabilityUnsupported);
        }
        self.active = Some(ActiveUtterance {
            id: utterance_id,
            ends_at: Instant::now() + Self::playback_duration(&utterance.text),
        });
        let _ = self.tx.send(SynthesisSignal {
            utterance: utterance_id,
            event: SynthesisEvent::Started,
        });
        Ok(())
    }

    fn cancel(&mut self) {
        self.active = None;
    }

    fn signals(&self) -> Receiver<SynthesisSignal> {
        self.rx.clone()
    }
}
