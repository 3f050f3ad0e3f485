/// Most verbose level written to the browser console.
pub const CONSOLE_MAX_LEVEL: tracing::Level = tracing::Level::INFO;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use gloo_timers::future::sleep;
    use js_sys::Reflect;
    use linkhub_core::{
        AnalyticsEvent, HubComponent, HubConfig, HubDiagnostics, HubError, HubResult,
        Notification, NotificationKind,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::spawn_local;
    use web_sys::{Element, HtmlElement};
    use web_time::{Duration, Instant};

    mod accessibility;
    mod analytics;
    mod animations;
    mod back_to_top;
    mod config;
    mod dom;
    mod loading;
    mod logging;
    mod newsletter;
    mod notification;
    mod performance;
    mod service_worker;

    use dom::*;

    thread_local! {
        static CONFIG: RefCell<Rc<HubConfig>> = RefCell::new(Rc::new(HubConfig::default()));
        static DIAGNOSTICS: RefCell<HubDiagnostics> = RefCell::new(HubDiagnostics::default());
        static PAGE_CLOCK: Instant = Instant::now();
        static EVENT_LISTENERS: RefCell<Vec<Closure<dyn FnMut(web_sys::Event)>>> = const { RefCell::new(Vec::new()) };
        static INTERSECTION_CALLBACKS: RefCell<Vec<Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>>> = const { RefCell::new(Vec::new()) };
        static PERFORMANCE_CALLBACK: RefCell<Option<Closure<dyn FnMut(web_sys::PerformanceObserverEntryList, web_sys::PerformanceObserver)>>> = const { RefCell::new(None) };
        static HUB_INSTALLED: Cell<bool> = const { Cell::new(false) };
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        logging::init();

        let config = Rc::new(config::load_config());
        CONFIG.with(|slot| *slot.borrow_mut() = Rc::clone(&config));

        if let Err(error) = performance::observe_web_vitals() {
            report_error("performance observer", &error);
        }
        service_worker::register_after_load(&config.service_worker_path);

        if let Err(error) = on_dom_ready(install_hub) {
            report_error("dom ready hook", &error);
            finish_boot();
        }
    }

    #[wasm_bindgen]
    pub fn hub_diagnostics_json() -> String {
        DIAGNOSTICS.with(|state| state.borrow().to_json())
    }

    #[wasm_bindgen]
    pub fn show_notification(message: String, kind: String) {
        let config = current_config();
        let notification = Notification::new(message, NotificationKind::parse(&kind));
        if let Err(error) = notification::show(&notification, &config) {
            report_error("notification", &error);
        }
    }

    #[wasm_bindgen]
    pub fn track_event(name: String, params_json: String) {
        analytics::track_event(&AnalyticsEvent::from_parts(name, &params_json));
    }

    /// Wires every hub component. Each one binds independently; a failure
    /// in one leaves the others working.
    fn install_hub() {
        let already_installed = HUB_INSTALLED.with(|flag| flag.replace(true));
        if already_installed {
            return;
        }

        let config = current_config();
        for component in HubComponent::ALL {
            let result = match component {
                HubComponent::Loading => loading::setup(&config),
                HubComponent::BackToTop => back_to_top::setup(&config),
                HubComponent::Animations => animations::setup(&config),
                HubComponent::Newsletter => newsletter::setup(&config),
                HubComponent::Analytics => analytics::setup(&config),
                HubComponent::Accessibility => accessibility::setup(&config),
            };
            match result {
                Ok(true) => {
                    tracing::debug!(component = component.as_str(), "component ready");
                    with_diagnostics(|state| state.record_component_ready(component));
                }
                Ok(false) => {
                    tracing::debug!(component = component.as_str(), "component skipped");
                    with_diagnostics(|state| state.record_component_skipped(component));
                }
                Err(error) if error.is_missing_element() => {
                    with_diagnostics(|state| state.record_component_skipped(component));
                }
                Err(error) => report_error(component.as_str(), &error),
            }
        }
        finish_boot();
    }

    fn finish_boot() {
        with_diagnostics(HubDiagnostics::finish_boot);
    }

    pub(super) fn current_config() -> Rc<HubConfig> {
        CONFIG.with(|slot| Rc::clone(&slot.borrow()))
    }

    pub(super) fn with_diagnostics(update: impl FnOnce(&mut HubDiagnostics)) {
        DIAGNOSTICS.with(|state| update(&mut state.borrow_mut()));
    }

    pub(super) fn report_error(context: &str, error: &HubError) {
        tracing::warn!(%context, %error, "link hub setup failed");
        with_diagnostics(|state| state.record_error(format!("{context}: {error}")));
    }

    pub(super) fn now_ms() -> f64 {
        PAGE_CLOCK.with(|started| started.elapsed().as_secs_f64() * 1_000.0)
    }

    pub(super) async fn sleep_ms(ms: u32) {
        sleep(Duration::from_millis(u64::from(ms))).await;
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::hub_diagnostics_json;

#[cfg(not(target_arch = "wasm32"))]
pub fn hub_diagnostics_json() -> String {
    let mut diagnostics = linkhub_core::HubDiagnostics::default();
    diagnostics.record_error("link hub behaviors only run in the browser (wasm32)");
    diagnostics.to_json()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_keeps_info_lines_and_drops_debug() {
        assert!(tracing::Level::INFO <= CONSOLE_MAX_LEVEL);
        assert!(tracing::Level::WARN <= CONSOLE_MAX_LEVEL);
        assert!(tracing::Level::DEBUG > CONSOLE_MAX_LEVEL);
    }

    #[test]
    fn native_diagnostics_explain_the_missing_runtime() {
        let value: serde_json::Value =
            serde_json::from_str(&hub_diagnostics_json()).expect("diagnostics json");
        assert_eq!(value["phase"], serde_json::json!("booting"));
        assert!(
            value["last_error"]
                .as_str()
                .is_some_and(|message| message.contains("wasm32"))
        );
    }
}
