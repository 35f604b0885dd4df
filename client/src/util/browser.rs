//! `web-sys` implementations of the core store and root traits.

use theme_toggle::{PreferenceStore, ThemeError, ThemeRoot};
use wasm_bindgen::JsValue;
use web_sys::{Element, Storage};

/// [`PreferenceStore`] over `window.localStorage`.
pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// Open the origin's local storage.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Unavailable`] when there is no window or storage
    /// is disabled by browser policy.
    pub fn open() -> Result<Self, ThemeError> {
        let window = web_sys::window().ok_or(ThemeError::Unavailable("window"))?;
        let storage = window
            .local_storage()
            .map_err(|_| ThemeError::Unavailable("localStorage"))?
            .ok_or(ThemeError::Unavailable("localStorage"))?;
        Ok(Self { storage })
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, ThemeError> {
        self.storage.get_item(key).map_err(|err| ThemeError::StorageRead {
            key: key.to_owned(),
            reason: js_reason(&err),
        })
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), ThemeError> {
        self.storage.set_item(key, value).map_err(|err| ThemeError::StorageWrite {
            key: key.to_owned(),
            reason: js_reason(&err),
        })
    }
}

/// [`ThemeRoot`] over `document.documentElement` (the `<html>` element).
pub struct DocumentRoot {
    element: Element,
}

impl DocumentRoot {
    /// Locate the document's root element.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Unavailable`] when there is no document or it has
    /// no root element.
    pub fn open() -> Result<Self, ThemeError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ThemeError::Unavailable("document"))?;
        let element = document
            .document_element()
            .ok_or(ThemeError::Unavailable("root element"))?;
        Ok(Self { element })
    }
}

impl ThemeRoot for DocumentRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.element.get_attribute(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.element.set_attribute(name, value).map_err(|err| ThemeError::Attribute {
            name: name.to_owned(),
            reason: js_reason(&err),
        })
    }
}

/// Human-readable text for a thrown JS value (usually a `DOMException`).
pub fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
