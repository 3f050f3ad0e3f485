use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{HubError, HubResult};

/// Name of the optional page global holding configuration overrides.
pub const CONFIG_GLOBAL: &str = "__LINKHUB_CONFIG__";

pub const DEFAULT_SERVICE_WORKER_PATH: &str = "/sw.js";
pub const DEFAULT_VIDEO_TITLE: &str = "VOCÊ TEM SORTE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    pub selectors: Selectors,
    pub classes: Classes,
    pub timings: Timings,
    pub back_to_top_offset_px: f64,
    pub reveal: ObserverConfig,
    pub video: ObserverConfig,
    pub messages: Messages,
    pub video_title: String,
    pub service_worker_path: String,
    pub newsletter: NewsletterSubmission,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            classes: Classes::default(),
            timings: Timings::default(),
            back_to_top_offset_px: 300.0,
            reveal: ObserverConfig {
                threshold: 0.1,
                root_margin: "0px 0px -50px 0px".to_string(),
            },
            video: ObserverConfig {
                threshold: 0.5,
                root_margin: String::new(),
            },
            messages: Messages::default(),
            video_title: DEFAULT_VIDEO_TITLE.to_string(),
            service_worker_path: DEFAULT_SERVICE_WORKER_PATH.to_string(),
            newsletter: NewsletterSubmission::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub loading_id: String,
    pub back_to_top_id: String,
    pub animated: String,
    pub newsletter_form: String,
    pub email_input: String,
    pub newsletter_button: String,
    pub tracked_links: String,
    pub video_iframe: String,
    pub skip_link: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            loading_id: "loading".to_string(),
            back_to_top_id: "backToTop".to_string(),
            animated: ".link-button, .quick-action, .video-section, .newsletter-section"
                .to_string(),
            newsletter_form: ".newsletter-form".to_string(),
            email_input: "input[type=\"email\"]".to_string(),
            newsletter_button: ".btn-newsletter".to_string(),
            tracked_links: ".link-button, .quick-action".to_string(),
            video_iframe: ".video-container iframe".to_string(),
            skip_link: ".skip-link".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Classes {
    pub loading_hidden: String,
    pub back_to_top_visible: String,
    pub revealed: String,
    pub keyboard_navigation: String,
}

impl Default for Classes {
    fn default() -> Self {
        Self {
            loading_hidden: "hidden".to_string(),
            back_to_top_visible: "visible".to_string(),
            revealed: "fade-in-up".to_string(),
            keyboard_navigation: "keyboard-navigation".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub loading_fade_ms: u32,
    pub loading_remove_ms: u32,
    pub scroll_throttle_ms: u32,
    pub toast_enter_ms: u32,
    pub toast_auto_dismiss_ms: u32,
    pub toast_exit_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            loading_fade_ms: 500,
            loading_remove_ms: 300,
            scroll_throttle_ms: 100,
            toast_enter_ms: 100,
            toast_auto_dismiss_ms: 5_000,
            toast_exit_ms: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObserverConfig {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.0,
            root_margin: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub invalid_email: String,
    pub signup_success: String,
    pub signup_failure: String,
    /// Inner HTML shown on the newsletter button while a signup is in flight.
    pub submitting_label_html: String,
    pub close_label: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_email: "Por favor, insira um email válido.".to_string(),
            signup_success: "Inscrição realizada com sucesso! 🎉".to_string(),
            signup_failure: "Não foi possível concluir a inscrição. Tente novamente.".to_string(),
            submitting_label_html: "<i class=\"fas fa-spinner fa-spin\"></i> Inscrevendo..."
                .to_string(),
            close_label: "Fechar notificação".to_string(),
        }
    }
}

/// How a valid newsletter signup is fulfilled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum NewsletterSubmission {
    /// No network call; succeed after a fixed delay.
    Simulated {
        #[serde(default = "default_simulated_delay_ms")]
        delay_ms: u32,
    },
    /// POST `{"email": ...}` as JSON to `url`.
    Endpoint { url: String },
}

fn default_simulated_delay_ms() -> u32 {
    2_000
}

impl Default for NewsletterSubmission {
    fn default() -> Self {
        Self::Simulated {
            delay_ms: default_simulated_delay_ms(),
        }
    }
}

impl HubConfig {
    /// Decodes page-provided overrides on top of the defaults. Nested objects
    /// merge key by key; unknown keys are ignored.
    pub fn from_json(raw: &str) -> HubResult<Self> {
        let overrides: Value = serde_json::from_str(raw)?;
        let mut merged = serde_json::to_value(Self::default())?;
        merge_overrides(&mut merged, overrides);
        let config: Self = serde_json::from_value(merged)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HubResult<()> {
        for (name, observer) in [("reveal", &self.reveal), ("video", &self.video)] {
            if !(0.0..=1.0).contains(&observer.threshold) {
                return Err(HubError::InvalidConfig(format!(
                    "{name}.threshold must be within 0..=1 (got {})",
                    observer.threshold
                )));
            }
        }
        if !self.back_to_top_offset_px.is_finite() || self.back_to_top_offset_px < 0.0 {
            return Err(HubError::InvalidConfig(
                "back_to_top_offset_px must be a non-negative number".to_string(),
            ));
        }
        if self.service_worker_path.trim().is_empty() {
            return Err(HubError::InvalidConfig(
                "service_worker_path must not be empty".to_string(),
            ));
        }
        if let NewsletterSubmission::Endpoint { url } = &self.newsletter {
            let url = url.trim();
            if !(url.starts_with('/') || url.starts_with("https://") || url.starts_with("http://"))
            {
                return Err(HubError::InvalidConfig(format!(
                    "newsletter endpoint must be a path or http(s) url (got `{url}`)"
                )));
            }
        }
        Ok(())
    }
}

fn merge_overrides(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_overrides(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_the_page_contract() {
        let config = HubConfig::default();
        assert!((config.back_to_top_offset_px - 300.0).abs() < f64::EPSILON);
        assert!((config.reveal.threshold - 0.1).abs() < f64::EPSILON);
        assert!((config.video.threshold - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.timings.loading_fade_ms, 500);
        assert_eq!(config.timings.loading_remove_ms, 300);
        assert_eq!(config.timings.scroll_throttle_ms, 100);
        assert_eq!(config.service_worker_path, "/sw.js");
        assert_eq!(
            config.newsletter,
            NewsletterSubmission::Simulated { delay_ms: 2_000 }
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_overrides_merge_onto_defaults() {
        let raw = json!({
            "back_to_top_offset_px": 120,
            "timings": { "toast_auto_dismiss_ms": 3000 },
            "messages": { "signup_success": "Done!" },
            "unknown_key": true
        })
        .to_string();

        let config = HubConfig::from_json(&raw).expect("valid overrides");
        assert!((config.back_to_top_offset_px - 120.0).abs() < f64::EPSILON);
        assert_eq!(config.timings.toast_auto_dismiss_ms, 3_000);
        assert_eq!(config.timings.toast_exit_ms, 300);
        assert_eq!(config.messages.signup_success, "Done!");
        assert_eq!(
            config.messages.invalid_email,
            "Por favor, insira um email válido."
        );
        assert_eq!(config.selectors.back_to_top_id, "backToTop");
    }

    #[test]
    fn nested_observer_overrides_keep_sibling_defaults() {
        let raw = json!({ "reveal": { "threshold": 0.2 } }).to_string();
        let config = HubConfig::from_json(&raw).expect("threshold override");
        assert!((config.reveal.threshold - 0.2).abs() < f64::EPSILON);
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");

        let raw = json!({ "video": { "root_margin": "10px" } }).to_string();
        let config = HubConfig::from_json(&raw).expect("margin override");
        assert_eq!(config.video.root_margin, "10px");
        assert!((config.video.threshold - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn simulated_mode_without_delay_uses_default_delay() {
        let raw = json!({
            "newsletter": { "mode": "simulated" },
            "video_title": "Outro vídeo"
        })
        .to_string();
        let config = HubConfig::from_json(&raw).expect("simulated without delay");
        assert_eq!(
            config.newsletter,
            NewsletterSubmission::Simulated { delay_ms: 2_000 }
        );
        assert_eq!(config.video_title, "Outro vídeo");

        let raw = json!({ "newsletter": { "mode": "simulated", "delay_ms": 50 } }).to_string();
        let config = HubConfig::from_json(&raw).expect("simulated with delay");
        assert_eq!(
            config.newsletter,
            NewsletterSubmission::Simulated { delay_ms: 50 }
        );
    }

    #[test]
    fn endpoint_mode_is_tagged() {
        let raw = json!({
            "newsletter": { "mode": "endpoint", "url": "/api/newsletter" }
        })
        .to_string();
        let config = HubConfig::from_json(&raw).expect("valid endpoint");
        assert_eq!(
            config.newsletter,
            NewsletterSubmission::Endpoint {
                url: "/api/newsletter".to_string()
            }
        );
    }

    #[test]
    fn rejects_out_of_range_values() {
        let raw = json!({ "reveal": { "threshold": 1.5 } }).to_string();
        assert!(matches!(
            HubConfig::from_json(&raw),
            Err(HubError::InvalidConfig(_))
        ));

        let raw = json!({ "newsletter": { "mode": "endpoint", "url": "ftp://x" } }).to_string();
        assert!(matches!(
            HubConfig::from_json(&raw),
            Err(HubError::InvalidConfig(_))
        ));

        let raw = json!({ "back_to_top_offset_px": -1 }).to_string();
        assert!(matches!(
            HubConfig::from_json(&raw),
            Err(HubError::InvalidConfig(_))
        ));
    }

    #[test]
    fn malformed_json_is_a_decode_error() {
        assert!(matches!(
            HubConfig::from_json("{\"timings\": 5}"),
            Err(HubError::ConfigDecode(_))
        ));
    }
}
