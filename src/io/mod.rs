//! Filesystem layout, JSON encoding, and deferred writes

pub mod json;
pub mod layout;
pub mod plan;
