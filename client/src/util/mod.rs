//! Browser helpers for the theme switch.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` adapts `web-sys` handles to the core store/root traits;
//! `theme_dom` offers one-shot read/toggle helpers for components.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod theme_dom;
