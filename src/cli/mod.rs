//! Command-line interface: argument definitions and command handlers.

pub mod commands;
pub mod handlers;

pub use commands::{Cli, Commands};
