//! # ytrello - Trello cards checked against Bugzilla
//!
//! ytrello scans a fixed set of lists on the Agile YaST Trello boards and
//! cross-references each card with the SUSE Bugzilla bugs it mentions.
//!
//! ## Quick Start
//!
//! ```bash
//! export TRELLO_DEVELOPER_PUBLIC_KEY=...
//! export TRELLO_MEMBER_TOKEN=...
//!
//! # Make sure credentials are in place
//! ytrello check
//!
//! # Which lists get scanned
//! ytrello lists
//!
//! # Cards whose bugs are already resolved
//! ytrello report
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`client`]: Trello and Bugzilla HTTP clients
//! - [`config`]: Configuration loading and run settings
//! - [`credentials`]: Trello credentials from the environment
//! - [`error`]: Error types and result aliases
//! - [`model`]: Board and list identifiers, cards, bugs
//! - [`report`]: The card/bug cross-reference
//! - [`session`]: Setup of both service handles
//! - [`verify`]: Checked lists still present on their boards

/// Command-line interface definitions using clap.
pub mod cli;

/// Read-only HTTP clients for Trello and Bugzilla.
pub mod client;

/// Configuration loading and management.
///
/// Handles `.ytrello.yml` files and the [`config::Settings`] passed to every command.
pub mod config;

pub mod credentials;

/// Error types and result aliases.
///
/// Defines `YtrelloError` enum and `Result<T>` type alias.
pub mod error;

pub mod bugref;
pub mod logging;
pub mod model;
pub mod report;
pub mod session;
pub mod verify;
