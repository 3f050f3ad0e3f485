use super::*;

/// Fades the splash out after `load`, then drops it from the document.
pub(super) fn setup(config: &Rc<HubConfig>) -> HubResult<bool> {
    let config = Rc::clone(config);
    on_window_load(move || {
        let Ok(document) = document() else {
            return;
        };
        let Some(loading) = document.get_element_by_id(&config.selectors.loading_id) else {
            return;
        };
        spawn_local(async move {
            sleep_ms(config.timings.loading_fade_ms).await;
            set_class(&loading, &config.classes.loading_hidden, true);
            sleep_ms(config.timings.loading_remove_ms).await;
            loading.remove();
            tracing::debug!("loading overlay removed");
        });
    })?;
    Ok(true)
}
