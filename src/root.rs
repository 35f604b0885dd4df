//! Document root attribute seam.
//!
//! The root element's `data-*` attribute is what stylesheets key off; the
//! client crate implements [`ThemeRoot`] over `document.documentElement`.

#[cfg(test)]
#[path = "root_test.rs"]
mod root_test;

use std::collections::HashMap;

use crate::error::ThemeError;

/// Read/write access to attributes on the unique root document element.
pub trait ThemeRoot {
    /// Current value of attribute `name`, `None` when unset.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Set attribute `name` to `value`.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Attribute`] when the element rejects the write.
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError>;
}

/// In-memory [`ThemeRoot`].
#[derive(Clone, Debug, Default)]
pub struct MemoryRoot {
    attributes: HashMap<String, String>,
}

impl MemoryRoot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Root element with one attribute already present.
    #[must_use]
    pub fn with_attribute(name: &str, value: &str) -> Self {
        let mut attributes = HashMap::new();
        attributes.insert(name.to_owned(), value.to_owned());
        Self { attributes }
    }
}

impl ThemeRoot for MemoryRoot {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<(), ThemeError> {
        self.attributes.insert(name.to_owned(), value.to_owned());
        Ok(())
    }
}
