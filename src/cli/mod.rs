//! Command-line parsing and output

pub mod args;
pub mod output;
