use linkhub_core::config::CONFIG_GLOBAL;

use super::*;

/// Page overrides from `window.__LINKHUB_CONFIG__` merged onto defaults.
/// Bad overrides are reported and ignored as a whole.
pub(super) fn load_config() -> HubConfig {
    match read_page_config() {
        Ok(Some(config)) => {
            tracing::debug!("using page-provided link hub configuration");
            config
        }
        Ok(None) => HubConfig::default(),
        Err(error) => {
            report_error("configuration", &error);
            HubConfig::default()
        }
    }
}

fn read_page_config() -> HubResult<Option<HubConfig>> {
    let value = Reflect::get(&window()?, &JsValue::from_str(CONFIG_GLOBAL)).map_err(js_error)?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    let raw = String::from(js_sys::JSON::stringify(&value).map_err(js_error)?);
    HubConfig::from_json(&raw).map(Some)
}
