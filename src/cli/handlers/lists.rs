use anyhow::Result;
use colored::Colorize;

use super::CommandContext;
use crate::model::board::{board_name, group_by_board};

pub fn handle_lists(ctx: &CommandContext, json: bool) -> Result<()> {
    let lists = &ctx.settings.checked_lists;

    if json {
        println!("{}", serde_json::to_string_pretty(lists)?);
        return Ok(());
    }

    for (board, members) in group_by_board(lists) {
        match board_name(board) {
            Some(name) => println!("{} {}", name.bold(), board.dimmed()),
            None => println!("{}", board.bold()),
        }
        for l in members {
            println!("  {} {}", l.id.cyan(), l.name);
        }
    }
    Ok(())
}
