use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ytrello")]
#[command(
    author,
    version,
    about = "Cross-reference Trello board cards against linked Bugzilla bugs"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file (searches upward for .ytrello.yml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check that Trello credentials are set and both services can be set up
    Check,

    /// Show the checked lists, grouped by board
    #[command(visible_alias = "ls")]
    Lists {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Confirm every checked list still exists on its board
    Verify {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check cards on the checked lists against their Bugzilla bugs
    Report {
        /// Only check this list ID
        #[arg(long)]
        list: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show Bugzilla bugs by ID
    Bug {
        /// Bug IDs
        #[arg(required = true)]
        ids: Vec<u64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
