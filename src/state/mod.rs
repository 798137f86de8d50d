//! Shared widget state modules.
//!
//! DESIGN
//! ======
//! State is split by widget (`tags`, `related`, `toasts`) so each component
//! depends on a small focused model. The interesting decision logic lives
//! here as plain methods, off the rendering path, so it tests natively.

pub mod related;
pub mod tags;
pub mod toasts;
