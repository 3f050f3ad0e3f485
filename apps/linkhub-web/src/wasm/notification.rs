use std::rc::Weak;

use linkhub_core::NotificationLifecycle;
use linkhub_core::notification::{OFFSCREEN_TRANSFORM, ONSCREEN_TRANSFORM};

use super::*;

struct Toast {
    banner: HtmlElement,
    close_button: Element,
    lifecycle: RefCell<NotificationLifecycle>,
    close_handler: RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>,
}

/// Builds the banner, slides it in, and schedules its dismissal.
pub(super) fn show(notification: &Notification, config: &HubConfig) -> HubResult<()> {
    let document = document()?;
    let banner = document
        .create_element("div")
        .map_err(js_error)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| HubError::Js("notification banner is not an HtmlElement".to_string()))?;
    banner.set_class_name(&notification.kind.class_name());

    let content = document.create_element("div").map_err(js_error)?;
    content.set_class_name("notification-content");

    let message = document.create_element("span").map_err(js_error)?;
    message.set_class_name("notification-message");
    message.set_text_content(Some(&notification.message));

    let close_button = document.create_element("button").map_err(js_error)?;
    close_button.set_class_name("notification-close");
    close_button
        .set_attribute("aria-label", &config.messages.close_label)
        .map_err(js_error)?;
    let icon = document.create_element("i").map_err(js_error)?;
    icon.set_class_name("fas fa-times");

    close_button.append_child(&icon).map_err(js_error)?;
    content.append_child(&message).map_err(js_error)?;
    content.append_child(&close_button).map_err(js_error)?;
    banner.append_child(&content).map_err(js_error)?;

    let style = banner.style();
    for (property, value) in notification.style_declarations() {
        style.set_property(property, value).map_err(js_error)?;
    }

    body()?.append_child(&banner).map_err(js_error)?;
    with_diagnostics(|state| {
        state.notifications_shown = state.notifications_shown.saturating_add(1);
    });

    let toast = Rc::new(Toast {
        banner,
        close_button,
        lifecycle: RefCell::new(NotificationLifecycle::new(&config.timings)),
        close_handler: RefCell::new(None),
    });

    let weak: Weak<Toast> = Rc::downgrade(&toast);
    let handler = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(move |_event| {
        if let Some(toast) = weak.upgrade() {
            begin_close(&toast);
        }
    }));
    toast
        .close_button
        .add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
        .map_err(js_error)?;
    *toast.close_handler.borrow_mut() = Some(handler);

    let (enter_ms, auto_dismiss_ms) = {
        let lifecycle = toast.lifecycle.borrow();
        (lifecycle.enter_delay_ms(), lifecycle.auto_dismiss_delay_ms())
    };

    let entering = Rc::clone(&toast);
    spawn_local(async move {
        sleep_ms(enter_ms).await;
        if entering.lifecycle.borrow_mut().slide_in() {
            let _ = entering
                .banner
                .style()
                .set_property("transform", ONSCREEN_TRANSFORM);
        }
    });

    spawn_local(async move {
        sleep_ms(auto_dismiss_ms).await;
        begin_close(&toast);
    });
    Ok(())
}

fn begin_close(toast: &Rc<Toast>) {
    if !toast.lifecycle.borrow_mut().request_close() {
        return;
    }
    let _ = toast
        .banner
        .style()
        .set_property("transform", OFFSCREEN_TRANSFORM);

    let exit_ms = toast.lifecycle.borrow().exit_delay_ms();
    let leaving = Rc::clone(toast);
    spawn_local(async move {
        sleep_ms(exit_ms).await;
        finish_close(&leaving);
    });
}

fn finish_close(toast: &Toast) {
    if !toast.lifecycle.borrow_mut().finish_exit() {
        return;
    }
    if toast.banner.parent_node().is_some() {
        toast.banner.remove();
    }
    if let Some(handler) = toast.close_handler.borrow_mut().take() {
        let _ = toast
            .close_button
            .remove_event_listener_with_callback("click", handler.as_ref().unchecked_ref());
    }
}
