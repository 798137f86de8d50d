//! Routed page modules.

pub mod home;
pub mod record;
