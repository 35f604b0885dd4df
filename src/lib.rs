//! Light/dark theme toggle with a persisted preference.
//!
//! This crate owns the browser-independent half of the theme switch: the
//! two-valued [`Theme`], the storage and document-root seams, the switch
//! control markup, and the toggle operation itself. The `client/` crate
//! plugs `localStorage` and `<html>` into these seams for the real page.
//!
//! DESIGN
//! ======
//! The store and the root attribute are traits passed into [`ThemeToggle`]
//! instead of ambient globals, so every rule here is testable natively with
//! [`MemoryStore`] and [`MemoryRoot`].

pub mod config;
pub mod control;
pub mod error;
pub mod root;
pub mod store;
pub mod theme;
pub mod toggle;

pub use config::{ControlConfig, ToggleConfig};
pub use control::SwitchControl;
pub use error::ThemeError;
pub use root::{MemoryRoot, ThemeRoot};
pub use store::{MemoryStore, PreferenceStore};
pub use theme::Theme;
pub use toggle::ThemeToggle;
