//! Switch control description and markup.
//!
//! The control is a container (`div.switch#toggleTheme` by default) holding a
//! checkbox wrapped in a label, a sibling slider span for styling, and a
//! decorative icon. Placing it in the page is the host's job; the client
//! crate turns this markup into a live element and wires the checkbox.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use maud::{Markup, html};

use crate::config::ControlConfig;

/// CSS selector locating the checkbox inside the rendered control.
pub const CHECKBOX_SELECTOR: &str = "input[type=\"checkbox\"]";

/// Renderable switch control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SwitchControl {
    id: String,
    class: String,
    slider_class: String,
    icon_class: String,
}

impl Default for SwitchControl {
    fn default() -> Self {
        Self::from_config(&ControlConfig::default())
    }
}

impl SwitchControl {
    #[must_use]
    pub fn from_config(config: &ControlConfig) -> Self {
        Self {
            id: config.id.clone(),
            class: config.class.clone(),
            slider_class: config.slider_class.clone(),
            icon_class: config.icon_class.clone(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    #[must_use]
    pub fn slider_class(&self) -> &str {
        &self.slider_class
    }

    #[must_use]
    pub fn icon_class(&self) -> &str {
        &self.icon_class
    }

    /// Children of the container: label with checkbox and slider, then icon.
    #[must_use]
    pub fn inner_markup(&self) -> Markup {
        html! {
            label {
                input type="checkbox";
                span class=(self.slider_class) {}
            }
            i class=(self.icon_class) {}
        }
    }

    /// The whole container, for hosts that render HTML ahead of time.
    #[must_use]
    pub fn markup(&self) -> Markup {
        html! {
            div class=(self.class) id=(self.id) {
                (self.inner_markup())
            }
        }
    }
}
