use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use crate::credentials::check_trello_credentials;
use crate::logging::debug;
use crate::session::setup_trello;
use crate::verify::{ListPresence, missing_count, verify_lists};

pub fn handle_verify(ctx: &CommandContext, json: bool) -> Result<()> {
    check_trello_credentials();
    let trello = setup_trello().context("Failed to set up Trello session")?;

    let lists = &ctx.settings.checked_lists;
    debug(&ctx.settings, &format!("Verifying {} lists", lists.len()));
    let results = verify_lists(&trello, lists)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        for r in &results {
            let presence = match r.presence {
                ListPresence::Present => "present".green(),
                ListPresence::Archived => "archived".yellow(),
                ListPresence::Missing => "missing".red(),
            };
            let name = r.remote_name.as_deref().unwrap_or(&r.list.name);
            println!("{} {} {}", presence, r.list.id.cyan(), name);
        }
    }

    let missing = missing_count(&results);
    if missing > 0 {
        anyhow::bail!("{} checked list(s) not found on their boards", missing);
    }
    Ok(())
}
