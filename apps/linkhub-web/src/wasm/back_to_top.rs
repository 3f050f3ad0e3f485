use linkhub_core::BackToTop;

use super::*;

pub(super) fn setup(config: &Rc<HubConfig>) -> HubResult<bool> {
    let Some(button) = document()?.get_element_by_id(&config.selectors.back_to_top_id) else {
        return Ok(false);
    };
    let window = window()?;

    let control = RefCell::new(BackToTop::new(
        config.back_to_top_offset_px,
        config.timings.scroll_throttle_ms,
    ));
    let visible_class = config.classes.back_to_top_visible.clone();
    let scroll_button = button.clone();
    let scroll_window = window.clone();
    listen(&window, "scroll", move |_event| {
        let offset = scroll_window.page_y_offset().unwrap_or(0.0);
        if let Some(visible) = control.borrow_mut().on_scroll(now_ms(), offset) {
            set_class(&scroll_button, &visible_class, visible);
        }
    })?;

    listen(&button, "click", move |_event| {
        if let Err(error) = smooth_scroll_to_top() {
            tracing::warn!(%error, "scroll to top failed");
        }
    })?;
    Ok(true)
}
