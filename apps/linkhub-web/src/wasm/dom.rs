use super::*;

pub(super) fn window() -> HubResult<web_sys::Window> {
    web_sys::window().ok_or(HubError::DomUnavailable("window"))
}

pub(super) fn document() -> HubResult<web_sys::Document> {
    window()?
        .document()
        .ok_or(HubError::DomUnavailable("document"))
}

pub(super) fn body() -> HubResult<HtmlElement> {
    document()?
        .body()
        .ok_or(HubError::DomUnavailable("document body"))
}

pub(super) fn js_error(value: JsValue) -> HubError {
    let message = value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|error| String::from(error.message()))
        })
        .unwrap_or_else(|| format!("{value:?}"));
    HubError::Js(message)
}

pub(super) fn query(selector: &str) -> HubResult<Option<Element>> {
    document()?.query_selector(selector).map_err(js_error)
}

pub(super) fn query_all(selector: &str) -> HubResult<Vec<Element>> {
    let nodes = document()?.query_selector_all(selector).map_err(js_error)?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(super) fn as_html(element: &Element) -> Option<&HtmlElement> {
    element.dyn_ref::<HtmlElement>()
}

/// Binds `handler` for the lifetime of the page.
pub(super) fn listen(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::Event) + 'static,
) -> HubResult<()> {
    let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(js_error)?;
    EVENT_LISTENERS.with(|listeners| listeners.borrow_mut().push(callback));
    Ok(())
}

/// One-shot listener; the closure frees itself after it runs.
pub(super) fn listen_once(
    target: &web_sys::EventTarget,
    event: &str,
    handler: impl FnOnce() + 'static,
) -> HubResult<()> {
    let callback = Closure::once_into_js(move |_event: web_sys::Event| handler());
    target
        .add_event_listener_with_callback(event, callback.unchecked_ref())
        .map_err(js_error)
}

fn ready_state() -> HubResult<String> {
    let value = Reflect::get(&document()?, &JsValue::from_str("readyState")).map_err(js_error)?;
    Ok(value.as_string().unwrap_or_default())
}

/// Runs `handler` once the DOM is parsed, immediately if that already
/// happened before the module loaded.
pub(super) fn on_dom_ready(handler: impl FnOnce() + 'static) -> HubResult<()> {
    if ready_state()? == "loading" {
        return listen_once(&document()?, "DOMContentLoaded", handler);
    }
    handler();
    Ok(())
}

/// Runs `handler` after the window `load` event, immediately if the page
/// already finished loading.
pub(super) fn on_window_load(handler: impl FnOnce() + 'static) -> HubResult<()> {
    if ready_state()? == "complete" {
        handler();
        return Ok(());
    }
    listen_once(&window()?, "load", handler)
}

/// Plain JS object for dictionary arguments (`IntersectionObserverInit`,
/// `ScrollToOptions`, ...).
pub(super) fn js_options(entries: &[(&str, JsValue)]) -> HubResult<js_sys::Object> {
    let options = js_sys::Object::new();
    for (key, value) in entries {
        Reflect::set(&options, &JsValue::from_str(key), value).map_err(js_error)?;
    }
    Ok(options)
}

pub(super) fn set_class(element: &Element, class: &str, enabled: bool) {
    let _ = element.class_list().toggle_with_force(class, enabled);
}

pub(super) fn smooth_scroll_to_top() -> HubResult<()> {
    let options = js_options(&[
        ("top", JsValue::from_f64(0.0)),
        ("behavior", JsValue::from_str("smooth")),
    ])?;
    window()?.scroll_to_with_scroll_to_options(options.unchecked_ref());
    Ok(())
}

pub(super) fn smooth_scroll_into_view(element: &Element) -> HubResult<()> {
    let options = js_options(&[("behavior", JsValue::from_str("smooth"))])?;
    element.scroll_into_view_with_scroll_into_view_options(options.unchecked_ref());
    Ok(())
}
