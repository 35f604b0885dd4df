//! Theme toggle component.
//!
//! [`ThemeToggle::init`] loads the persisted preference once per page load.
//! [`ThemeToggle::toggle`] runs on every checkbox click: it flips the root
//! attribute and persists the new value under the storage key.
//!
//! TRADE-OFFS
//! ==========
//! The loaded preference is not applied to the page during init unless
//! `apply_on_load` is set. A fresh visit therefore leaves the root attribute
//! unset until the first toggle; stylesheets see no `data-theme` until then.

#[cfg(test)]
#[path = "toggle_test.rs"]
mod toggle_test;

use crate::config::ToggleConfig;
use crate::control::SwitchControl;
use crate::error::ThemeError;
use crate::root::ThemeRoot;
use crate::store::PreferenceStore;
use crate::theme::Theme;

/// Theme switch bound to a preference store and a document root.
#[derive(Debug)]
pub struct ThemeToggle<S, R> {
    store: S,
    root: R,
    config: ToggleConfig,
    attribute: String,
    preference: Theme,
    control: SwitchControl,
}

impl<S: PreferenceStore, R: ThemeRoot> ThemeToggle<S, R> {
    /// Read the stored preference and build the switch control.
    ///
    /// An absent or unrecognized stored value falls back to
    /// `config.default_theme`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] for an unusable config, any
    /// error from reading the store, and, with `apply_on_load`, any error
    /// from writing the root attribute.
    pub fn init(store: S, mut root: R, config: ToggleConfig) -> Result<Self, ThemeError> {
        config.validate()?;
        let attribute = config.data_attribute();

        let preference = match store.get(&config.storage_key)? {
            Some(raw) => Theme::parse(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    key = %config.storage_key,
                    value = %raw,
                    fallback = %config.default_theme,
                    "ignoring unrecognized stored theme"
                );
                config.default_theme
            }),
            None => config.default_theme,
        };

        if config.apply_on_load {
            root.set_attribute(&attribute, preference.as_str())?;
        }

        tracing::debug!(
            %preference,
            applied = config.apply_on_load,
            key = %config.storage_key,
            "theme toggle initialized"
        );

        let control = SwitchControl::from_config(&config.control);
        Ok(Self { store, root, config, attribute, preference, control })
    }

    /// Flip the root attribute and persist the result.
    ///
    /// `dark` becomes `light`; `light`, an unset attribute, or any other
    /// value becomes `dark`. Returns the theme now in effect.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Attribute`] if the root rejects the write, or
    /// [`ThemeError::StorageWrite`] if persisting fails. In the latter case
    /// the root attribute has already changed.
    pub fn toggle(&mut self) -> Result<Theme, ThemeError> {
        let raw = self.root.attribute(&self.attribute);
        let next = Theme::after(raw.as_deref().and_then(Theme::parse));

        self.root.set_attribute(&self.attribute, next.as_str())?;
        self.store.set(&self.config.storage_key, next.as_str())?;
        self.preference = next;

        tracing::debug!(
            from = raw.as_deref().unwrap_or("<unset>"),
            to = %next,
            "theme toggled"
        );
        Ok(next)
    }

    /// Theme currently on the root attribute, `None` when unset or unknown.
    #[must_use]
    pub fn current(&self) -> Option<Theme> {
        self.root.attribute(&self.attribute).as_deref().and_then(Theme::parse)
    }
}

impl<S, R> ThemeToggle<S, R> {
    /// Preference loaded at init, or the last value persisted by a toggle.
    #[must_use]
    pub fn preference(&self) -> Theme {
        self.preference
    }

    #[must_use]
    pub fn control(&self) -> &SwitchControl {
        &self.control
    }

    #[must_use]
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn root(&self) -> &R {
        &self.root
    }

    /// Give back the store and root.
    #[must_use]
    pub fn into_parts(self) -> (S, R) {
        (self.store, self.root)
    }
}
