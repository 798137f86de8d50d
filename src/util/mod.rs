//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate timer and lookup concerns from component logic so
//! the interesting behavior stays testable off the browser.

pub mod debounce;
pub mod icons;
