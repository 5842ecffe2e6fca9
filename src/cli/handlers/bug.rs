use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::print_bug;
use crate::logging::debug;
use crate::session::setup_bugzilla;

pub fn handle_bug(ctx: &CommandContext, ids: Vec<u64>, json: bool) -> Result<()> {
    let bugzilla = setup_bugzilla()?;
    debug(&ctx.settings, &format!("Looking up {} bug(s)", ids.len()));

    let bugs = bugzilla
        .get_bugs(&ids)
        .context("Failed to query Bugzilla")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&bugs)?);
        return Ok(());
    }

    for id in &ids {
        match bugs.iter().find(|b| b.id == *id) {
            Some(bug) => print_bug(bug),
            None => println!("{} {}", format!("bsc#{}", id).cyan(), "not accessible".dimmed()),
        }
    }
    Ok(())
}
