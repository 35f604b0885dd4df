//! One-shot theme helpers for components.
//!
//! Loads the stored preference from `localStorage` and toggles the
//! `data-theme` attribute on `<html>`, persisting the result. Requires a
//! browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Each call opens fresh storage/root handles instead of holding a
//! `ThemeToggle`, so components need no shared state. SSR paths no-op to keep
//! server rendering deterministic.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use theme_toggle::{Theme, ThemeError, ToggleConfig};

/// Read the theme preference from localStorage, writing it to the root
/// attribute when `config.apply_on_load` is set.
///
/// Falls back to `config.default_theme` when nothing usable is stored or the
/// browser is unavailable.
pub fn load_preference(config: &ToggleConfig) -> Theme {
    #[cfg(feature = "hydrate")]
    {
        match open(config) {
            Ok(toggle) => toggle.preference(),
            Err(err) => {
                log::warn!("theme preference unavailable: {err}");
                config.default_theme
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        config.default_theme
    }
}

/// Toggle the document theme and persist the new value to localStorage.
///
/// # Errors
///
/// Returns the store/root error from the underlying toggle, or
/// [`ThemeError::Unavailable`] outside a browser.
pub fn toggle(config: &ToggleConfig) -> Result<Theme, ThemeError> {
    #[cfg(feature = "hydrate")]
    {
        open(config)
            .and_then(|mut toggle| toggle.toggle())
            .inspect_err(|err| log::error!("theme toggle failed: {err}"))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        config.validate()?;
        Err(ThemeError::Unavailable("browser document"))
    }
}

#[cfg(feature = "hydrate")]
fn open(
    config: &ToggleConfig,
) -> Result<
    theme_toggle::ThemeToggle<super::browser::LocalStore, super::browser::DocumentRoot>,
    ThemeError,
> {
    use super::browser::{DocumentRoot, LocalStore};

    theme_toggle::ThemeToggle::init(LocalStore::open()?, DocumentRoot::open()?, config.clone())
}
