use serde::{Deserialize, Serialize};

use crate::config::Timings;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Unknown names fall back to `Info`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "var(--success-500)",
            Self::Error => "var(--error-500)",
            Self::Info => "var(--primary-500)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, NotificationKind::Error)
    }

    /// Inline styles for the banner before it slides in.
    pub fn style_declarations(&self) -> [(&'static str, &'static str); 12] {
        [
            ("position", "fixed"),
            ("top", "20px"),
            ("right", "20px"),
            ("background", self.kind.background()),
            ("color", "white"),
            ("padding", "1rem 1.5rem"),
            ("border-radius", "var(--radius-lg)"),
            ("box-shadow", "var(--shadow-xl)"),
            ("z-index", "var(--z-tooltip)"),
            ("transform", OFFSCREEN_TRANSFORM),
            ("transition", TRANSITION),
            ("max-width", "300px"),
        ]
    }
}

pub const OFFSCREEN_TRANSFORM: &str = "translateX(100%)";
pub const ONSCREEN_TRANSFORM: &str = "translateX(0)";
pub const TRANSITION: &str = "transform var(--transition-normal)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationPhase {
    Entering,
    Visible,
    Leaving,
    Removed,
}

/// Per-banner lifecycle: `Entering -> Visible -> Leaving -> Removed`.
///
/// Transitions that no longer apply (a slide-in timer firing after the user
/// already closed the banner, or the auto-dismiss timer firing after a manual
/// close) are rejected, so each DOM mutation happens at most once.
#[derive(Debug, Clone)]
pub struct NotificationLifecycle {
    phase: NotificationPhase,
    enter_ms: u32,
    auto_dismiss_ms: u32,
    exit_ms: u32,
}

impl NotificationLifecycle {
    pub fn new(timings: &Timings) -> Self {
        Self {
            phase: NotificationPhase::Entering,
            enter_ms: timings.toast_enter_ms,
            auto_dismiss_ms: timings.toast_auto_dismiss_ms,
            exit_ms: timings.toast_exit_ms,
        }
    }

    pub fn phase(&self) -> NotificationPhase {
        self.phase
    }

    pub fn enter_delay_ms(&self) -> u32 {
        self.enter_ms
    }

    pub fn auto_dismiss_delay_ms(&self) -> u32 {
        self.auto_dismiss_ms
    }

    pub fn exit_delay_ms(&self) -> u32 {
        self.exit_ms
    }

    /// Latest point, measured from creation, at which an untouched banner
    /// is gone from the document.
    pub fn removal_deadline_ms(&self) -> u32 {
        self.auto_dismiss_ms.saturating_add(self.exit_ms)
    }

    pub fn slide_in(&mut self) -> bool {
        if self.phase != NotificationPhase::Entering {
            return false;
        }
        self.phase = NotificationPhase::Visible;
        true
    }

    pub fn request_close(&mut self) -> bool {
        match self.phase {
            NotificationPhase::Entering | NotificationPhase::Visible => {
                self.phase = NotificationPhase::Leaving;
                true
            }
            NotificationPhase::Leaving | NotificationPhase::Removed => false,
        }
    }

    pub fn finish_exit(&mut self) -> bool {
        if self.phase != NotificationPhase::Leaving {
            return false;
        }
        self.phase = NotificationPhase::Removed;
        true
    }

    /// Replays the timers an untouched banner goes through up to
    /// `elapsed_ms` after creation.
    pub fn advance_untouched(&mut self, elapsed_ms: u32) {
        if elapsed_ms >= self.enter_ms {
            self.slide_in();
        }
        if elapsed_ms >= self.auto_dismiss_ms {
            self.request_close();
        }
        if elapsed_ms >= self.removal_deadline_ms() {
            self.finish_exit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_parsing_falls_back_to_info() {
        assert_eq!(NotificationKind::parse("success"), NotificationKind::Success);
        assert_eq!(NotificationKind::parse(" ERROR "), NotificationKind::Error);
        assert_eq!(NotificationKind::parse("warning"), NotificationKind::Info);
        assert_eq!(NotificationKind::parse(""), NotificationKind::Info);
    }

    #[test]
    fn kinds_map_to_classes_and_colors() {
        assert_eq!(
            NotificationKind::Success.class_name(),
            "notification notification-success"
        );
        assert_eq!(NotificationKind::Error.background(), "var(--error-500)");
        assert_eq!(NotificationKind::Info.background(), "var(--primary-500)");

        let styles = Notification::error("nope").style_declarations();
        assert!(styles.contains(&("background", "var(--error-500)")));
        assert!(styles.contains(&("transform", OFFSCREEN_TRANSFORM)));
    }

    #[test]
    fn manual_close_wins_over_late_timers() {
        let mut lifecycle = NotificationLifecycle::new(&Timings::default());
        assert!(lifecycle.request_close());
        assert!(!lifecycle.slide_in());
        assert!(!lifecycle.request_close());
        assert!(lifecycle.finish_exit());
        assert!(!lifecycle.finish_exit());
        assert_eq!(lifecycle.phase(), NotificationPhase::Removed);
    }

    #[test]
    fn untouched_banner_walks_every_phase() {
        let mut lifecycle = NotificationLifecycle::new(&Timings::default());
        lifecycle.advance_untouched(50);
        assert_eq!(lifecycle.phase(), NotificationPhase::Entering);
        lifecycle.advance_untouched(100);
        assert_eq!(lifecycle.phase(), NotificationPhase::Visible);
        lifecycle.advance_untouched(4_999);
        assert_eq!(lifecycle.phase(), NotificationPhase::Visible);
        lifecycle.advance_untouched(5_000);
        assert_eq!(lifecycle.phase(), NotificationPhase::Leaving);
        lifecycle.advance_untouched(5_300);
        assert_eq!(lifecycle.phase(), NotificationPhase::Removed);
    }
}
