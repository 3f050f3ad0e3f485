use crate::analytics::AnalyticsEvent;
use crate::config::Messages;
use crate::email::is_valid_email;
use crate::notification::Notification;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// Invalid address: show the notification, leave the form alone.
    Rejected(Notification),
    /// A signup is already in flight.
    Busy,
    /// Show `submitting_label_html`, disable the button, and fulfil the
    /// signup for `email`.
    Accepted {
        email: String,
        submitting_label_html: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded,
    Failed(String),
}

/// Effects to apply once a signup settles. The button is always restored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub notification: Notification,
    pub restore_label_html: String,
    pub reset_form: bool,
    pub event: Option<AnalyticsEvent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum FormState {
    #[default]
    Idle,
    Submitting {
        email: String,
        original_label_html: String,
    },
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    state: FormState,
}

impl NewsletterForm {
    pub fn is_submitting(&self) -> bool {
        matches!(self.state, FormState::Submitting { .. })
    }

    pub fn submit(&mut self, email: &str, current_label_html: &str, messages: &Messages) -> SubmitDecision {
        if self.is_submitting() {
            return SubmitDecision::Busy;
        }
        if !is_valid_email(email) {
            return SubmitDecision::Rejected(Notification::error(messages.invalid_email.clone()));
        }
        self.state = FormState::Submitting {
            email: email.to_string(),
            original_label_html: current_label_html.to_string(),
        };
        SubmitDecision::Accepted {
            email: email.to_string(),
            submitting_label_html: messages.submitting_label_html.clone(),
        }
    }

    /// Drops an accepted signup that never started and returns the label to
    /// put back on the button.
    pub fn abandon(&mut self) -> Option<String> {
        match std::mem::take(&mut self.state) {
            FormState::Submitting {
                original_label_html,
                ..
            } => Some(original_label_html),
            FormState::Idle => None,
        }
    }

    /// Returns `None` when no signup is in flight.
    pub fn complete(&mut self, outcome: SubmissionOutcome, messages: &Messages) -> Option<Completion> {
        let FormState::Submitting {
            email,
            original_label_html,
        } = std::mem::take(&mut self.state)
        else {
            return None;
        };

        let completion = match outcome {
            SubmissionOutcome::Succeeded => Completion {
                notification: Notification::success(messages.signup_success.clone()),
                restore_label_html: original_label_html,
                reset_form: true,
                event: Some(AnalyticsEvent::newsletter_signup(&email)),
            },
            SubmissionOutcome::Failed(reason) => {
                tracing::warn!(%reason, "newsletter signup failed");
                Completion {
                    notification: Notification::error(messages.signup_failure.clone()),
                    restore_label_html: original_label_html,
                    reset_form: false,
                    event: None,
                }
            }
        };
        Some(completion)
    }
}
