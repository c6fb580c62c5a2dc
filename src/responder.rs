//! Canned, language-keyed response simulation.
//!
//! Stands in for a real generation backend: a submitted message schedules a
//! fixed reply string after a fixed delay, which the shell then hands to the
//! synthesis path. A real implementation would plug in here with the same
//! contract (message in, asynchronous reply text out).

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use crate::composer::OutgoingMessage;
use crate::lang::DEFAULT_LANGUAGE;

/// Fixed delay before the canned reply is delivered.
pub const RESPONSE_DELAY_MS: u64 = 1_000;

/// Canned replies keyed by output language.
const CANNED_REPLIES: &[(&str, &str)] = &[
    (
        "en-US",
        "I received your message and I'm ready to help you with your request.",
    ),
    (
        "es-ES",
        "Recibí tu mensaje y estoy listo para ayudarte con tu solicitud.",
    ),
    (
        "fr-FR",
        "J'ai reçu votre message et je suis prêt à vous aider avec votre demande.",
    ),
    (
        "de-DE",
        "Ich habe Ihre Nachricht erhalten und bin bereit, Ihnen bei Ihrer Anfrage zu helfen.",
    ),
    (
        "it-IT",
        "Ho ricevuto il tuo messaggio e sono pronto ad aiutarti con la tua richiesta.",
    ),
    (
        "pt-BR",
        "Recebi sua mensagem e estou pronto para ajudá-lo com sua solicitação.",
    ),
    ("ja-JP", "メッセージを受信しました。ご要望にお応えする準備ができています。"),
    ("zh-CN", "我收到了您的消息，准备好帮助您处理您的请求。"),
];

/// Reply text for an output language, falling back to the default language's
/// entry when the code has no canned mapping.
#[must_use]
pub fn canned_reply(language: &str) -> &'static str {
    CANNED_REPLIES
        .iter()
        .find(|(code, _)| *code == language)
        .or_else(|| CANNED_REPLIES.iter().find(|(code, _)| *code == DEFAULT_LANGUAGE))
        .map(|(_, reply)| *reply)
        .unwrap_or_default()
}

/// A reply whose delay has elapsed, ready to be spoken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadyReply {
    pub text: String,
    /// The requested output language; playback is tagged with it even when
    /// the reply text fell back to the default entry.
    pub language: String,
}

#[derive(Debug)]
struct PendingReply {
    due_at: Instant,
    language: String,
}

/// Schedules canned replies and releases them once due.
#[derive(Debug, Default)]
pub struct ResponseSimulator {
    pending: VecDeque<PendingReply>,
}

impl ResponseSimulator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the deferred reply for a sent message.
    ///
    /// The delay is fixed and non-cancelable; a scheduled reply fires even if
    /// the user moves on.
    pub fn on_message_sent(&mut self, message: &OutgoingMessage) {
        tracing::debug!(
            text = %message.text,
            files = message.files.len(),
            input = %message.input_language,
            output = %message.output_language,
            "message sent"
        );
        self.pending.push_back(PendingReply {
            due_at: Instant::now() + Duration::from_millis(RESPONSE_DELAY_MS),
            language: message.output_language.clone(),
        });
    }

    /// Whether a reply is still pending (the composer disables while true).
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Release replies that have come due, in schedule order.
    pub fn tick(&mut self) -> Vec<ReadyReply> {
        self.tick_at(Instant::now())
    }

    fn tick_at(&mut self, now: Instant) -> Vec<ReadyReply> {
        let mut ready = Vec::new();
        while let Some(front) = self.pending.front() {
            if now < front.due_at {
                break;
            }
            let Some(pending) = self.pending.pop_front() else {
                break;
            };
            ready.push(ReadyReply {
                text: canned_reply(&pending.language).to_string(),
                language: pending.language,
            });
        }
        ready
    }
}
