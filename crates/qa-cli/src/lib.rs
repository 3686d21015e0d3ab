//! Library side of the `qa-desk` command-line review desk.

pub mod commands;
pub mod config;
pub mod logging;
pub mod summary;
