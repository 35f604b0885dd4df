//! # theme-toggle-client
//!
//! Browser side of the theme switch. Binds the `theme-toggle` core to
//! `window.localStorage` and `document.documentElement`, builds the live
//! switch element for plain host pages, and offers a Leptos component for
//! Leptos hosts.
//!
//! Everything that touches the DOM is gated on the `hydrate` feature; without
//! it the helpers compile to no-ops so SSR and native tests stay
//! deterministic.


pub mod components;
#[cfg(feature = "hydrate")]
pub mod control;
pub mod util;

#[cfg(feature = "hydrate")]
use wasm_bindgen::prelude::*;

/// Build the theme switch for a host page.
///
/// `config_json` is an optional `ToggleConfig` JSON object; omitted fields
/// take their defaults. The returned element is not attached anywhere: the
/// host inserts it into its layout.
///
/// # Errors
///
/// Returns the error message as a `JsValue` when the config is invalid or a
/// browser facility (window, document, localStorage) is unavailable.
#[cfg(feature = "hydrate")]
#[wasm_bindgen(js_name = mountThemeToggle)]
pub fn mount_theme_toggle(config_json: Option<String>) -> Result<web_sys::Element, JsValue> {
    init_logging();
    build_switch(config_json.as_deref()).map_err(|err| {
        log::error!("theme toggle mount failed: {err}");
        JsValue::from_str(&err.to_string())
    })
}

#[cfg(feature = "hydrate")]
fn build_switch(config_json: Option<&str>) -> Result<web_sys::Element, theme_toggle::ThemeError> {
    use theme_toggle::{ThemeError, ThemeToggle, ToggleConfig};

    use crate::util::browser::{DocumentRoot, LocalStore};

    let config = match config_json {
        Some(raw) => ToggleConfig::from_json(raw)?,
        None => ToggleConfig::default(),
    };
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(ThemeError::Unavailable("document"))?;
    let toggle = ThemeToggle::init(LocalStore::open()?, DocumentRoot::open()?, config)?;
    control::build_control(&document, toggle)
}

/// Most verbose level forwarded to the console. The core logs init and
/// toggle events at `debug`.
#[cfg(feature = "hydrate")]
const CONSOLE_LOG_LEVEL: log::Level = log::Level::Debug;

/// Route panics and `log`/`tracing` records to the browser console.
#[cfg(feature = "hydrate")]
fn init_logging() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(CONSOLE_LOG_LEVEL) {
        // A logger is already installed by the host; keep using it.
        log::debug!("console logger not installed: {err}");
    }
}
