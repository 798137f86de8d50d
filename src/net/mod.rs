//! Network layer: wire types and REST API helpers for the tag service.

pub mod api;
pub mod types;
