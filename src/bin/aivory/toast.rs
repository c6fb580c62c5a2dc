//! Toast notification center with auto-dismiss, severity, and history.
//!
//! Runtime surface for transient user feedback: voice lifecycle changes,
//! recognition errors, file rejections, theme switches. Toasts auto-dismiss
//! after a severity-dependent duration; a bounded history ring is kept.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::style::Color;

use crate::theme::ThemeColors;

/// Maximum number of toasts kept in the history ring.
pub(crate) const TOAST_HISTORY_MAX: usize = 50;

/// Default auto-dismiss duration for info/success toasts.
pub(crate) const DEFAULT_DISMISS_MS: u64 = 4_000;

/// Auto-dismiss duration for warning toasts.
pub(crate) const WARNING_DISMISS_MS: u64 = 6_000;

/// Auto-dismiss duration for error toasts.
pub(crate) const ERROR_DISMISS_MS: u64 = 8_000;

/// Maximum number of toasts visible simultaneously.
pub(crate) const MAX_VISIBLE_TOASTS: usize = 3;

/// Toast severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ToastSeverity {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    /// Accent color for this severity from the active palette.
    #[must_use]
    pub(crate) fn color(&self, colors: &ThemeColors) -> Color {
        match self {
            Self::Info => colors.info,
            Self::Success => colors.success,
            Self::Warning => colors.warning,
            Self::Error => colors.error,
        }
    }

    /// Severity label for display.
    #[must_use]
    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Default auto-dismiss duration for this severity.
    #[must_use]
    pub(crate) fn default_dismiss_duration(&self) -> Duration {
        match self {
            Self::Info | Self::Success => Duration::from_millis(DEFAULT_DISMISS_MS),
            Self::Warning => Duration::from_millis(WARNING_DISMISS_MS),
            Self::Error => Duration::from_millis(ERROR_DISMISS_MS),
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub(crate) struct Toast {
    pub(crate) severity: ToastSeverity,
    pub(crate) message: String,
    pub(crate) dismiss_at: Instant,
    /// Whether the user explicitly dismissed this toast.
    pub(crate) dismissed: bool,
}

/// Toast notification center state.
#[derive(Debug, Default)]
pub(crate) struct ToastCenter {
    active: VecDeque<Toast>,
    history: VecDeque<Toast>,
}

impl ToastCenter {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Push a new toast notification.
    pub(crate) fn push(&mut self, severity: ToastSeverity, message: impl Into<String>) {
        self.push_with_duration(severity, message, severity.default_dismiss_duration());
    }

    /// Push a toast with a custom dismiss duration.
    pub(crate) fn push_with_duration(
        &mut self,
        severity: ToastSeverity,
        message: impl Into<String>,
        dismiss_after: Duration,
    ) {
        let toast = Toast {
            severity,
            message: message.into(),
            dismiss_at: Instant::now() + dismiss_after,
            dismissed: false,
        };

        // Evict oldest active toast if at capacity.
        if self.active.len() >= MAX_VISIBLE_TOASTS {
            if let Some(mut evicted) = self.active.pop_front() {
                evicted.dismissed = true;
                self.push_history(evicted);
            }
        }

        self.active.push_back(toast);
    }

    /// Dismiss expired toasts. Returns `true` if anything changed (caller
    /// should redraw).
    pub(crate) fn tick(&mut self) -> bool {
        let now = Instant::now();
        let before = self.active.len();
        let mut expired = Vec::new();

        self.active.retain(|toast| {
            if toast.dismissed || now >= toast.dismiss_at {
                expired.push(toast.clone());
                false
            } else {
                true
            }
        });

        for mut toast in expired {
            toast.dismissed = true;
            self.push_history(toast);
        }

        self.active.len() != before
    }

    /// Dismiss the most recent active toast (user action).
    pub(crate) fn dismiss_latest(&mut self) -> bool {
        if let Some(mut toast) = self.active.pop_back() {
            toast.dismissed = true;
            self.push_history(toast);
            true
        } else {
            false
        }
    }

    /// Currently visible toasts, oldest first.
    pub(crate) fn active(&self) -> impl Iterator<Item = &Toast> {
        self.active.iter()
    }

    #[must_use]
    pub(crate) fn history_len(&self) -> usize {
        self.history.len()
    }

    fn push_history(&mut self, toast: Toast) {
        if self.history.len() >= TOAST_HISTORY_MAX {
            self.history.pop_front();
        }
        self.history.push_back(toast);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_keeps_insertion_order() {
        let mut center = ToastCenter::new();
        center.push(ToastSeverity::Info, "a");
        center.push(ToastSeverity::Error, "b");
        let messages: Vec<_> = center.active().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["a", "b"]);
    }

    #[test]
    fn capacity_evicts_oldest_into_history() {
        let mut center = ToastCenter::new();
        for i in 0..=MAX_VISIBLE_TOASTS {
            center.push(ToastSeverity::Info, format!("toast {i}"));
        }
        assert_eq!(center.active().count(), MAX_VISIBLE_TOASTS);
        assert_eq!(center.history_len(), 1);
        let first = center.active().next().map(|t| t.message.clone());
        assert_eq!(first.as_deref(), Some("toast 1"));
    }

    #[test]
    fn tick_dismisses_expired_toasts() {
        let mut center = ToastCenter::new();
        center.push_with_duration(ToastSeverity::Info, "gone", Duration::from_millis(0));
        center.push(ToastSeverity::Warning, "stays");
        assert!(center.tick());
        let remaining: Vec<_> = center.active().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["stays"]);
        assert_eq!(center.history_len(), 1);
        assert!(!center.tick());
    }

    #[test]
    fn dismiss_latest_pops_newest() {
        let mut center = ToastCenter::new();
        assert!(!center.dismiss_latest());
        center.push(ToastSeverity::Info, "old");
        center.push(ToastSeverity::Info, "new");
        assert!(center.dismiss_latest());
        let remaining: Vec<_> = center.active().map(|t| t.message.as_str()).collect();
        assert_eq!(remaining, vec!["old"]);
    }

    #[test]
    fn severity_durations_are_tiered() {
        assert!(
            ToastSeverity::Error.default_dismiss_duration()
                > ToastSeverity::Warning.default_dismiss_duration()
        );
        assert!(
            ToastSeverity::Warning.default_dismiss_duration()
                > ToastSeverity::Info.default_dismiss_duration()
        );
        assert_eq!(
            ToastSeverity::Success.default_dismiss_duration(),
            ToastSeverity::Info.default_dismiss_duration()
        );
    }

    #[test]
    fn history_ring_is_bounded() {
        let mut center = ToastCenter::new();
        for i in 0..(TOAST_HISTORY_MAX + 20) {
            center.push_with_duration(
                ToastSeverity::Info,
                format!("t{i}"),
                Duration::from_millis(0),
            );
            center.tick();
        }
        assert_eq!(center.history_len(), TOAST_HISTORY_MAX);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(ToastSeverity::Info.label(), "INFO");
        assert_eq!(ToastSeverity::Success.label(), "OK");
        assert_eq!(ToastSeverity::Warning.label(), "WARN");
        assert_eq!(ToastSeverity::Error.label(), "ERR");
    }
}
