use anyhow::{Context, Result};
use clap::Parser;

use ytrello::cli::handlers::{
    CommandContext, handle_bug, handle_check, handle_lists, handle_report, handle_verify,
};
use ytrello::cli::{Cli, Commands};
use ytrello::config::Settings;
use ytrello::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(cli.config.as_deref(), &cwd)
        .context("Failed to load ytrello configuration")?;
    if cli.verbose {
        settings.verbose = true;
    }
    if cli.log_file.is_some() {
        settings.log_file = cli.log_file;
    }

    logging::init(settings.verbose, settings.log_file.clone())
        .context("Failed to set up logging")?;
    match &settings.config_path {
        Some(path) => tracing::debug!(path = %path.display(), "Loaded configuration"),
        None => tracing::debug!("No configuration file, using built-in lists"),
    }

    let ctx = CommandContext::new(settings);

    match cli.command {
        Commands::Check => handle_check(&ctx),
        Commands::Lists { json } => handle_lists(&ctx, json),
        Commands::Verify { json } => handle_verify(&ctx, json),
        Commands::Report { list, json } => handle_report(&ctx, list, json),
        Commands::Bug { ids, json } => handle_bug(&ctx, ids, json),
    }
}
