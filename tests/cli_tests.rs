//! CLI command tests

#[cfg(feature = "cli")]
mod cli;
