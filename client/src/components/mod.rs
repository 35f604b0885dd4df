//! Leptos components for hosts that render with Leptos.

pub mod theme_switch;
