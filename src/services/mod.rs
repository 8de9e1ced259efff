//! Core services for injection, tallying, statistics, and asset relocation

pub mod assets;
pub mod children;
pub mod inject;
pub mod statistics;
