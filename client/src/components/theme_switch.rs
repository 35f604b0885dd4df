//! Theme switch as a Leptos component.

#[cfg(test)]
#[path = "theme_switch_test.rs"]
mod theme_switch_test;

use leptos::prelude::*;
use theme_toggle::{SwitchControl, ToggleConfig};

use crate::util::theme_dom;

/// Checkbox switch that flips the page theme on click.
///
/// Renders the same structure as the core `SwitchControl` markup so the
/// host's `.switch`/`.slider` styles apply unchanged. With
/// `config.apply_on_load` the stored preference is written to the root
/// attribute once the component mounts in the browser.
#[component]
pub fn ThemeSwitch(#[prop(optional)] config: Option<ToggleConfig>) -> impl IntoView {
    let config = config.unwrap_or_default();
    let control = SwitchControl::from_config(&config.control);

    if config.apply_on_load {
        let load_config = config.clone();
        Effect::new(move |_| {
            let theme = theme_dom::load_preference(&load_config);
            leptos::logging::log!("theme preference {theme} applied");
        });
    }

    let on_click = move |_| {
        if let Ok(theme) = theme_dom::toggle(&config) {
            leptos::logging::log!("theme switched to {theme}");
        }
    };

    view! {
        <div class=control.class().to_owned() id=control.id().to_owned()>
            <label>
                <input type="checkbox" on:click=on_click/>
                <span class=control.slider_class().to_owned()></span>
            </label>
            <i class=control.icon_class().to_owned()></i>
        </div>
    }
}
