use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::HubResult;

pub const EVENT_EXTERNAL_LINK_CLICK: &str = "external_link_click";
pub const EVENT_VIDEO_VIEW: &str = "video_view";
pub const EVENT_NEWSLETTER_SIGNUP: &str = "newsletter_signup";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub name: String,
    #[serde(default)]
    pub params: Map<String, Value>,
}

impl AnalyticsEvent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Map::new(),
        }
    }

    pub fn with_param(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// Builds an event from page-supplied JSON. Anything other than a JSON
    /// object degrades to an empty parameter map.
    pub fn from_parts(name: impl Into<String>, params_json: &str) -> Self {
        let params = match serde_json::from_str::<Value>(params_json) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self {
            name: name.into(),
            params,
        }
    }

    pub fn external_link_click(link_text: &str, link_url: &str) -> Self {
        Self::new(EVENT_EXTERNAL_LINK_CLICK)
            .with_param("link_text", link_text.trim())
            .with_param("link_url", link_url)
    }

    pub fn video_view(video_title: &str) -> Self {
        Self::new(EVENT_VIDEO_VIEW).with_param("video_title", video_title)
    }

    pub fn newsletter_signup(email: &str) -> Self {
        Self::new(EVENT_NEWSLETTER_SIGNUP).with_param("email", email)
    }

    pub fn params_json(&self) -> String {
        serde_json::to_string(&self.params).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Destination for tracked events, usually the page's global `gtag`.
pub trait AnalyticsSink {
    /// Returns `Ok(false)` when the backend is absent, which is not an error.
    fn dispatch(&self, event: &AnalyticsEvent) -> HubResult<bool>;
}

/// Forwards `event` to `sink` and always logs it. Sink failures are logged
/// and swallowed; tracking never breaks the page.
pub fn track(sink: &dyn AnalyticsSink, event: &AnalyticsEvent) -> bool {
    let forwarded = match sink.dispatch(event) {
        Ok(forwarded) => forwarded,
        Err(error) => {
            tracing::warn!(event = %event.name, %error, "analytics dispatch failed");
            false
        }
    };
    tracing::info!("Event tracked: {} {}", event.name, event.params_json());
    forwarded
}
