//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the tagging surfaces while reading/writing shared state
//! from Leptos context providers. Cross-component communication goes through
//! the bus only; no component imports another widget's module.

pub mod related_panel;
pub mod tag_editor;
pub mod toast_tray;
