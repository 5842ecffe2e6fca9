use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use crate::credentials::{ENV_TRELLO_KEY, ENV_TRELLO_TOKEN, check_trello_credentials};
use crate::logging::debug;
use crate::model::board::BUGZILLA_ACCOUNT;
use crate::session::Session;

pub fn handle_check(ctx: &CommandContext) -> Result<()> {
    check_trello_credentials();
    debug(&ctx.settings, "Trello credentials present");

    let session = Session::setup().context("Failed to set up service clients")?;

    println!(
        "{} {} and {} are set",
        "Ok".green(),
        ENV_TRELLO_KEY.cyan(),
        ENV_TRELLO_TOKEN.cyan()
    );
    println!("Trello:   {}", session.trello.base_url());
    println!(
        "Bugzilla: {} ({})",
        session.bugzilla.base_url(),
        BUGZILLA_ACCOUNT.dimmed()
    );
    println!(
        "Lists:    {} checked",
        ctx.settings.checked_lists.len().to_string().cyan()
    );
    Ok(())
}
