use linkhub_core::{AnalyticsSink, track};
use web_sys::HtmlAnchorElement;

use super::animations::observe_once;
use super::*;

/// Forwards events to the page's global `gtag`, when one is installed.
struct GtagSink;

impl AnalyticsSink for GtagSink {
    fn dispatch(&self, event: &AnalyticsEvent) -> HubResult<bool> {
        let gtag = Reflect::get(&window()?, &JsValue::from_str("gtag")).map_err(js_error)?;
        let Some(gtag) = gtag.dyn_ref::<js_sys::Function>() else {
            return Ok(false);
        };
        let params = js_sys::JSON::parse(&event.params_json()).map_err(js_error)?;
        gtag.call3(
            &JsValue::UNDEFINED,
            &JsValue::from_str("event"),
            &JsValue::from_str(&event.name),
            &params,
        )
        .map_err(js_error)?;
        Ok(true)
    }
}

pub(super) fn track_event(event: &AnalyticsEvent) {
    track(&GtagSink, event);
    with_diagnostics(|state| state.events_tracked = state.events_tracked.saturating_add(1));
}

pub(super) fn setup(config: &Rc<HubConfig>) -> HubResult<bool> {
    let links = query_all(&config.selectors.tracked_links)?;
    for link in &links {
        let clicked = link.clone();
        listen(link, "click", move |_event| {
            let text = clicked.text_content().unwrap_or_default();
            track_event(&AnalyticsEvent::external_link_click(&text, &link_url(&clicked)));
        })?;
    }

    let video = query(&config.selectors.video_iframe)?;
    if let Some(iframe) = &video {
        let title = config.video_title.clone();
        observe_once(vec![iframe.clone()], &config.video, move |_iframe| {
            track_event(&AnalyticsEvent::video_view(&title));
        })?;
    }

    Ok(!links.is_empty() || video.is_some())
}

/// Resolved `href` for anchors, the raw attribute for anything else.
fn link_url(element: &Element) -> String {
    match element.dyn_ref::<HtmlAnchorElement>() {
        Some(anchor) => anchor.href(),
        None => element.get_attribute("href").unwrap_or_default(),
    }
}
