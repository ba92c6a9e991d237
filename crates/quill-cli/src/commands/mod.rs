//! CLI command implementations

pub mod completions;
pub mod config;
pub mod operations;
pub mod run;
pub mod serve;
