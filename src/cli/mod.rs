//! Command-line interface
//!
//! `transform` runs the migration; `verify` checks its output.

pub mod commands;
pub mod error;
pub mod logging;

pub use error::CliError;
