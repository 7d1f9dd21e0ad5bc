//! euromc service layer
//!
//! Configuration loading and command implementations behind the `euromc`
//! binary. Commands print JSON to stdout; logs go to stderr.

pub mod commands;
pub mod config;
pub mod error;

pub use error::{CliError, Result};
