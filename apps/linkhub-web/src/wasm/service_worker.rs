use linkhub_core::ServiceWorkerStatus;
use wasm_bindgen_futures::JsFuture;
use web_sys::ServiceWorkerRegistration;

use super::*;

/// Best-effort registration once the page has loaded. Failures are logged
/// and otherwise ignored.
pub(super) fn register_after_load(script_path: &str) {
    let Ok(window) = window() else {
        return;
    };
    let navigator = window.navigator();
    let supported = Reflect::has(&navigator, &JsValue::from_str("serviceWorker")).unwrap_or(false);
    if !supported {
        with_diagnostics(|state| state.service_worker = ServiceWorkerStatus::Unsupported);
        return;
    }

    let script_path = script_path.to_string();
    let scheduled = on_window_load(move || {
        spawn_local(async move {
            let status = match register(&script_path).await {
                Ok(scope) => {
                    tracing::info!("SW registered: {scope}");
                    ServiceWorkerStatus::Registered { scope }
                }
                Err(error) => {
                    tracing::warn!("SW registration failed: {error}");
                    ServiceWorkerStatus::Failed {
                        reason: error.to_string(),
                    }
                }
            };
            with_diagnostics(|state| state.service_worker = status);
        });
    });
    if let Err(error) = scheduled {
        report_error("service worker", &error);
    }
}

async fn register(script_path: &str) -> HubResult<String> {
    let container = window()?.navigator().service_worker();
    let registration = JsFuture::from(container.register(script_path))
        .await
        .map_err(js_error)?
        .dyn_into::<ServiceWorkerRegistration>()
        .map_err(|_| HubError::Js("service worker registration has an unexpected type".to_string()))?;
    Ok(registration.scope())
}
