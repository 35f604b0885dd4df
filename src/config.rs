//! Toggle configuration.
//!
//! Every field has a default (`theme` key, `data-theme` attribute, dark
//! fallback, `div.switch#toggleTheme`), so an empty JSON object or no config
//! at all gives the stock switch. Hosts pass overrides as JSON to the
//! client's mount entry point.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::Theme;

pub const DEFAULT_STORAGE_KEY: &str = "theme";
pub const DEFAULT_ATTRIBUTE: &str = "theme";
pub const DEFAULT_CONTROL_ID: &str = "toggleTheme";
pub const DEFAULT_SWITCH_CLASS: &str = "switch";
pub const DEFAULT_SLIDER_CLASS: &str = "slider";
pub const DEFAULT_ICON_CLASS: &str = "fas fa-sun";

/// Theme toggle settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToggleConfig {
    /// Key the preference is persisted under.
    pub storage_key: String,
    /// Data attribute suffix on the root element (`theme` -> `data-theme`).
    pub attribute: String,
    /// Preference assumed when nothing usable is stored.
    pub default_theme: Theme,
    /// Write the loaded preference to the root attribute during init.
    /// Off by default: the loaded preference is only computed, and the root
    /// attribute stays unset until the first toggle.
    pub apply_on_load: bool,
    pub control: ControlConfig,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            default_theme: Theme::Dark,
            apply_on_load: false,
            control: ControlConfig::default(),
        }
    }
}

/// Identifiers stamped onto the switch control for host styling.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControlConfig {
    pub id: String,
    pub class: String,
    pub slider_class: String,
    /// Space-separated classes of the decorative icon.
    pub icon_class: String,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            id: DEFAULT_CONTROL_ID.to_owned(),
            class: DEFAULT_SWITCH_CLASS.to_owned(),
            slider_class: DEFAULT_SLIDER_CLASS.to_owned(),
            icon_class: DEFAULT_ICON_CLASS.to_owned(),
        }
    }
}

impl ToggleConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::ConfigParse`] for malformed JSON or unknown
    /// fields, and [`ThemeError::InvalidConfig`] when validation fails.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Full attribute name on the root element, e.g. `data-theme`.
    #[must_use]
    pub fn data_attribute(&self) -> String {
        format!("data-{}", self.attribute)
    }

    /// Check that every field can be used as a storage key, attribute name
    /// or DOM identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::InvalidConfig`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ThemeError> {
        if self.storage_key.is_empty() {
            return Err(invalid("storage_key", "must not be empty"));
        }
        if !is_data_attribute_suffix(&self.attribute) {
            return Err(invalid(
                "attribute",
                "must be lowercase ascii letters, digits or '-', starting with a letter",
            ));
        }
        require_token("control.id", &self.control.id)?;
        require_token("control.class", &self.control.class)?;
        require_token("control.slider_class", &self.control.slider_class)?;
        if self.control.icon_class.split_whitespace().next().is_none() {
            return Err(invalid("control.icon_class", "must name at least one class"));
        }
        Ok(())
    }
}

fn is_data_attribute_suffix(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    first.is_ascii_lowercase() && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

fn require_token(field: &'static str, value: &str) -> Result<(), ThemeError> {
    if value.is_empty() || value.chars().any(char::is_whitespace) {
        return Err(invalid(field, "must be a single non-empty token"));
    }
    Ok(())
}

fn invalid(field: &'static str, reason: &str) -> ThemeError {
    ThemeError::InvalidConfig { field, reason: reason.to_owned() }
}
