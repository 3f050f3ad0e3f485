use serde::Serialize;

/// The independently installed behaviors of the hub page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HubComponent {
    Loading,
    BackToTop,
    Animations,
    Newsletter,
    Analytics,
    Accessibility,
}

impl HubComponent {
    pub const ALL: [Self; 6] = [
        Self::Loading,
        Self::BackToTop,
        Self::Animations,
        Self::Newsletter,
        Self::Analytics,
        Self::Accessibility,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::BackToTop => "back_to_top",
            Self::Animations => "animations",
            Self::Newsletter => "newsletter",
            Self::Analytics => "analytics",
            Self::Accessibility => "accessibility",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HubPhase {
    #[default]
    Booting,
    Ready,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ServiceWorkerStatus {
    #[default]
    Pending,
    Unsupported,
    Registered {
        scope: String,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct HubDiagnostics {
    pub phase: HubPhase,
    pub components_ready: Vec<HubComponent>,
    pub components_skipped: Vec<HubComponent>,
    pub events_tracked: u64,
    pub notifications_shown: u64,
    pub elements_revealed: u64,
    pub service_worker: ServiceWorkerStatus,
    pub last_error: Option<String>,
}

impl HubDiagnostics {
    pub fn record_component_ready(&mut self, component: HubComponent) {
        if !self.components_ready.contains(&component) {
            self.components_ready.push(component);
        }
    }

    /// A component whose anchor element is absent from the page.
    pub fn record_component_skipped(&mut self, component: HubComponent) {
        if !self.components_skipped.contains(&component) {
            self.components_skipped.push(component);
        }
    }

    pub fn record_error(&mut self, message: impl Into<String>) {
        self.last_error = Some(message.into());
    }

    pub fn finish_boot(&mut self) {
        self.phase = if self.components_ready.is_empty() && self.last_error.is_some() {
            HubPhase::Error
        } else {
            HubPhase::Ready
        };
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| {
            "{\"phase\":\"error\",\"last_error\":\"diagnostics serialization failed\"}".to_string()
        })
    }
}
