use colored::Colorize;

use crate::model::{Bug, BugStatus};
use crate::report::CardState;

/// Format a card state with color coding
pub fn format_state(state: CardState) -> colored::ColoredString {
    match state {
        CardState::Resolved => "resolved".green().bold(),
        CardState::Inaccessible => "inaccessible".red(),
        CardState::Open => "open".yellow(),
        CardState::NoBugReference => "no-bug".dimmed(),
    }
}

/// Format a bug status with color coding
pub fn format_bug_status(status: &BugStatus) -> colored::ColoredString {
    let text = status.to_string();
    match status {
        s if s.is_closed() => text.green(),
        BugStatus::Reopened => text.red(),
        BugStatus::InProgress => text.yellow(),
        _ => text.white(),
    }
}

/// One-line bug summary: `bsc#123 RESOLVED FIXED title`
pub fn print_bug(bug: &Bug) {
    let resolution = if bug.resolution.is_empty() {
        String::new()
    } else {
        format!(" {}", bug.resolution)
    };
    println!(
        "{} {}{} {}",
        format!("bsc#{}", bug.id).cyan(),
        format_bug_status(&bug.status),
        resolution,
        bug.summary
    );
}
