use linkhub_core::{KeyIntent, skip_link_target};

use super::*;

pub(super) fn setup(config: &Rc<HubConfig>) -> HubResult<bool> {
    for element in query_all(&config.selectors.tracked_links)? {
        let target = element.clone();
        listen(&element, "keydown", move |event| {
            let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if KeyIntent::from_key(&event.key()) != KeyIntent::Activate {
                return;
            }
            event.prevent_default();
            if let Some(target) = as_html(&target) {
                target.click();
            }
        })?;
    }

    let document = document()?;
    let keyboard_class = config.classes.keyboard_navigation.clone();
    listen(&document, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        if KeyIntent::from_key(&event.key()) == KeyIntent::KeyboardNavigation {
            if let Ok(body) = body() {
                set_class(&body, &keyboard_class, true);
            }
        }
    })?;

    let keyboard_class = config.classes.keyboard_navigation.clone();
    listen(&document, "mousedown", move |_event| {
        if let Ok(body) = body() {
            set_class(&body, &keyboard_class, false);
        }
    })?;

    if let Some(skip_link) = query(&config.selectors.skip_link)? {
        let link = skip_link.clone();
        listen(&skip_link, "click", move |event| {
            event.prevent_default();
            if let Err(error) = jump_to_skip_target(&link) {
                tracing::debug!(%error, "skip link target unavailable");
            }
        })?;
    }

    Ok(true)
}

fn jump_to_skip_target(link: &Element) -> HubResult<()> {
    let href = link.get_attribute("href").unwrap_or_default();
    let Some(selector) = skip_link_target(Some(&href)) else {
        return Err(HubError::missing(href.as_str()));
    };
    let target = query(selector)?.ok_or_else(|| HubError::missing(selector))?;
    if let Some(target) = as_html(&target) {
        target.focus().map_err(js_error)?;
    }
    smooth_scroll_into_view(&target)
}
