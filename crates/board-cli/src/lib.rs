//! Command-line front end for the board rules.
//!
//! This crate holds the turn and the board on behalf of a terminal user and
//! delegates every legality decision to `rules-engine`.

pub mod commands;
pub mod config;
pub mod report;

pub use commands::CommandError;
pub use config::{CliConfig, ConfigError};
