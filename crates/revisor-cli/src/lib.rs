//! Revisor CLI library.
//!
//! This library provides the core functionality for the `revisor` command-line
//! interface: configuration management, command execution and output
//! formatting around the review and reconciliation crates.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
