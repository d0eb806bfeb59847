//! CLI subcommand implementations.

pub mod clear;
pub mod insights;
pub mod log;
pub mod recent;
pub mod util;
