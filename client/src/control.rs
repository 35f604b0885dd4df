//! Live switch element for plain host pages.
//!
//! Builds the container from the core markup and hands ownership of the
//! [`ThemeToggle`] to the checkbox click listener. Events are dispatched on
//! the single UI thread, so each click runs its toggle to completion.

use theme_toggle::control::CHECKBOX_SELECTOR;
use theme_toggle::{PreferenceStore, ThemeError, ThemeRoot, ThemeToggle};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event};

use crate::util::browser::js_reason;

/// Create the switch container and wire its checkbox to `toggle`.
///
/// The element is returned detached; inserting it is up to the caller.
///
/// # Errors
///
/// Returns [`ThemeError::Control`] when the element cannot be created or the
/// click listener cannot be attached.
pub fn build_control<S, R>(document: &Document, mut toggle: ThemeToggle<S, R>) -> Result<Element, ThemeError>
where
    S: PreferenceStore + 'static,
    R: ThemeRoot + 'static,
{
    let control = toggle.control().clone();

    let container = document.create_element("div").map_err(control_error)?;
    container.class_list().add_1(control.class()).map_err(control_error)?;
    container.set_id(control.id());
    container.set_inner_html(&control.inner_markup().into_string());

    let checkbox = container
        .query_selector(CHECKBOX_SELECTOR)
        .map_err(control_error)?
        .ok_or_else(|| ThemeError::Control("checkbox missing from switch markup".to_owned()))?;

    let on_click = Closure::<dyn FnMut(Event)>::new(move |_event: Event| match toggle.toggle() {
        Ok(theme) => log::info!("theme switched to {theme}"),
        Err(err) => log::error!("theme toggle failed: {err}"),
    });
    checkbox
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(control_error)?;
    // The listener lives as long as the page.
    on_click.forget();

    Ok(container)
}

fn control_error(err: JsValue) -> ThemeError {
    ThemeError::Control(js_reason(&err))
}
