use linkhub_core::{OBSERVED_ENTRY_TYPES, PerformanceMetric};
use web_sys::{PerformanceEntry, PerformanceObserver, PerformanceObserverEntryList};

use super::*;

/// Logs LCP and FID as the browser reports them.
pub(super) fn observe_web_vitals() -> HubResult<()> {
    let window = window()?;
    let supported =
        Reflect::has(&window, &JsValue::from_str("PerformanceObserver")).unwrap_or(false);
    if !supported {
        tracing::debug!("PerformanceObserver unsupported; web vitals not logged");
        return Ok(());
    }

    let callback = Closure::<dyn FnMut(PerformanceObserverEntryList, PerformanceObserver)>::wrap(
        Box::new(|list: PerformanceObserverEntryList, _observer: PerformanceObserver| {
            for entry in list.get_entries().iter() {
                let Ok(entry) = entry.dyn_into::<PerformanceEntry>() else {
                    continue;
                };
                let processing_start = Reflect::get(&entry, &JsValue::from_str("processingStart"))
                    .ok()
                    .and_then(|value| value.as_f64());
                if let Some(metric) = PerformanceMetric::from_entry(
                    &entry.entry_type(),
                    entry.start_time(),
                    processing_start,
                ) {
                    tracing::info!("{metric}");
                }
            }
        }),
    );

    let observer =
        PerformanceObserver::new(callback.as_ref().unchecked_ref()).map_err(js_error)?;
    let entry_types: js_sys::Array = OBSERVED_ENTRY_TYPES
        .iter()
        .map(|entry_type| JsValue::from_str(entry_type))
        .collect();
    let options = js_options(&[("entryTypes", entry_types.into())])?;
    observer.observe_with_options(options.unchecked_ref());

    PERFORMANCE_CALLBACK.with(|slot| *slot.borrow_mut() = Some(callback));
    Ok(())
}
