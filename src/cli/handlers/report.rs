use anyhow::{Context, Result};
use colored::Colorize;

use super::CommandContext;
use super::utils::{format_bug_status, format_state};
use crate::credentials::check_trello_credentials;
use crate::report::{CardState, Report, build_report};
use crate::session::Session;

pub fn handle_report(ctx: &CommandContext, list: Option<String>, json: bool) -> Result<()> {
    check_trello_credentials();
    let session = Session::setup().context("Failed to set up service clients")?;
    let lists = ctx.settings.select_lists(list.as_deref())?;

    let report = build_report(&session, &ctx.settings, &lists)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn print_report(report: &Report) {
    for list_report in &report.lists {
        let list = &list_report.list;
        println!(
            "{} {} {}",
            list.board_label().dimmed(),
            list.name.bold(),
            list.id.dimmed()
        );
        if list_report.cards.is_empty() {
            println!("  No cards.");
        }
        for check in &list_report.cards {
            println!("  {} {}", format_state(check.state), check.card.name);
            for bug in &check.bugs {
                println!(
                    "      {} {} {}",
                    format!("bsc#{}", bug.id).cyan(),
                    format_bug_status(&bug.status),
                    bug.summary.dimmed()
                );
            }
            if check.state == CardState::Resolved && !check.card.url.is_empty() {
                println!("      {}", check.card.url.underline());
            }
        }
        println!();
    }

    let summary: Vec<String> = report
        .summary()
        .into_iter()
        .map(|(state, n)| format!("{} {}", n, format_state(state)))
        .collect();
    println!("{}", summary.join(", "));
}
