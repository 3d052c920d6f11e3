//! Runtime Configuration
//!
//! Build-time defaults from `studio_core::config`, optionally overridden by a
//! `window.__DECOR_STUDIO_CONFIG__` object set by the hosting page.

use studio_core::config::{AppConfig, ConfigOverrides};
use wasm_bindgen::JsValue;

const CONFIG_GLOBAL: &str = "__DECOR_STUDIO_CONFIG__";

/// Resolve the config for this page load
pub fn load_config() -> AppConfig {
    let config = AppConfig::default();
    match read_overrides() {
        Ok(Some(overrides)) => {
            log::debug!("applying {CONFIG_GLOBAL}: {overrides:?}");
            config.with_overrides(overrides)
        }
        Ok(None) => config,
        Err(err) => {
            log::warn!("ignoring malformed {CONFIG_GLOBAL}: {err}");
            config
        }
    }
}

fn read_overrides() -> Result<Option<ConfigOverrides>, String> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| format!("{:?}", e))?;
    if value.is_undefined() || value.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(value)
        .map(Some)
        .map_err(|e| e.to_string())
}
