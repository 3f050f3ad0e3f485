use linkhub_core::{ObserverConfig, RevealDecision, RevealTracker};
use web_sys::{IntersectionObserver, IntersectionObserverEntry};

use super::*;

pub(super) fn setup(config: &Rc<HubConfig>) -> HubResult<bool> {
    let elements = query_all(&config.selectors.animated)?;
    if elements.is_empty() {
        return Ok(false);
    }
    let revealed_class = config.classes.revealed.clone();
    observe_once(elements, &config.reveal, move |element| {
        set_class(element, &revealed_class, true);
        with_diagnostics(|state| state.elements_revealed = state.elements_revealed.saturating_add(1));
    })?;
    Ok(true)
}

/// Calls `on_first_visible` the first time each element intersects the
/// viewport under `options`, then stops observing it.
pub(super) fn observe_once(
    elements: Vec<Element>,
    options: &ObserverConfig,
    mut on_first_visible: impl FnMut(&Element) + 'static,
) -> HubResult<()> {
    let mut tracker = RevealTracker::default();
    for key in 0..elements.len() {
        tracker.register(key as u32);
    }
    let targets = elements.clone();

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(key) = targets
                    .iter()
                    .position(|candidate| js_sys::Object::is(candidate, &target))
                else {
                    continue;
                };
                if tracker.on_entry(key as u32, entry.is_intersecting()) == RevealDecision::Reveal {
                    on_first_visible(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ));

    let mut init = vec![("threshold", JsValue::from_f64(options.threshold))];
    if !options.root_margin.trim().is_empty() {
        init.push(("rootMargin", JsValue::from_str(&options.root_margin)));
    }
    let init = js_options(&init)?;
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), init.unchecked_ref())
            .map_err(js_error)?;
    for element in &elements {
        observer.observe(element);
    }

    INTERSECTION_CALLBACKS.with(|callbacks| callbacks.borrow_mut().push(callback));
    Ok(())
}
