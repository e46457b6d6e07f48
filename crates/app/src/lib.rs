//! # lifetube
//!
//! Command-line client for a LifeTube backend.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use commands::run;
pub use error::{CliError, CliResult};
