//! Behavior core for the link hub page.
//!
//! Everything in this crate is free of browser bindings so it can be tested
//! natively; `linkhub-web` applies these decisions to the live DOM.

pub mod analytics;
pub mod back_to_top;
pub mod config;
pub mod diagnostics;
pub mod email;
pub mod error;
pub mod keyboard;
pub mod metrics;
pub mod newsletter;
pub mod notification;
pub mod reveal;
pub mod throttle;

pub use analytics::{AnalyticsEvent, AnalyticsSink, track};
pub use back_to_top::BackToTop;
pub use config::{
    Classes, HubConfig, Messages, NewsletterSubmission, ObserverConfig, Selectors, Timings,
};
pub use diagnostics::{HubComponent, HubDiagnostics, HubPhase, ServiceWorkerStatus};
pub use email::is_valid_email;
pub use error::{HubError, HubResult};
pub use keyboard::{KeyIntent, skip_link_target};
pub use metrics::{OBSERVED_ENTRY_TYPES, PerformanceMetric};
pub use newsletter::{Completion, NewsletterForm, SubmissionOutcome, SubmitDecision};
pub use notification::{Notification, NotificationKind, NotificationLifecycle, NotificationPhase};
pub use reveal::{RevealDecision, RevealTracker};
pub use throttle::ThrottleGate;
