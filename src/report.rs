//! Cross-referencing cards on the checked lists with their Bugzilla bugs.
//!
//! The report only reads from both services.

use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

use crate::bugref::extract_bug_ids;
use crate::client::materialize;
use crate::config::Settings;
use crate::error::Result;
use crate::logging::debug;
use crate::model::{Bug, Card, CheckedList};
use crate::session::Session;

/// How a card relates to the bugs it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardState {
    /// The card mentions no bug.
    NoBugReference,
    /// Every referenced bug is still open.
    Open,
    /// At least one referenced bug is resolved, verified or closed.
    Resolved,
    /// A referenced bug was not returned by Bugzilla.
    Inaccessible,
}

impl fmt::Display for CardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardState::NoBugReference => write!(f, "no-bug"),
            CardState::Open => write!(f, "open"),
            CardState::Resolved => write!(f, "resolved"),
            CardState::Inaccessible => write!(f, "inaccessible"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CardCheck {
    pub card: Card,
    pub bug_ids: Vec<u64>,
    pub bugs: Vec<Bug>,
    pub state: CardState,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListReport {
    pub list: CheckedList,
    pub cards: Vec<CardCheck>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    pub lists: Vec<ListReport>,
}

impl Report {
    /// Number of cards in each state, in a fixed order.
    pub fn summary(&self) -> Vec<(CardState, usize)> {
        let states = [
            CardState::Resolved,
            CardState::Inaccessible,
            CardState::Open,
            CardState::NoBugReference,
        ];
        states
            .into_iter()
            .map(|s| {
                let n = self
                    .lists
                    .iter()
                    .flat_map(|l| &l.cards)
                    .filter(|c| c.state == s)
                    .count();
                (s, n)
            })
            .collect()
    }
}

/// Decide a card's state from the bugs it references and the bugs Bugzilla returned.
pub fn classify(bug_ids: &[u64], bugs: &HashMap<u64, Bug>) -> CardState {
    if bug_ids.is_empty() {
        return CardState::NoBugReference;
    }
    let mut state = CardState::Open;
    for id in bug_ids {
        match bugs.get(id) {
            None => return CardState::Inaccessible,
            Some(bug) if bug.status.is_closed() => state = CardState::Resolved,
            Some(_) => {}
        }
    }
    state
}

/// Check every card on `lists`.
///
/// Bugs are fetched once per list, for all cards on it together.
pub fn build_report(
    session: &Session,
    settings: &Settings,
    lists: &[CheckedList],
) -> Result<Report> {
    let mut report = Report::default();

    for list in lists {
        debug(settings, &format!("Checking list {} ({})", list.id, list.name));
        let cards = materialize(session.trello.list_cards(&list.id)?);

        let refs: Vec<(Card, Vec<u64>)> = cards
            .into_iter()
            .map(|card| {
                let ids = extract_bug_ids(&card.text());
                (card, ids)
            })
            .collect();

        let mut wanted: Vec<u64> = refs.iter().flat_map(|(_, ids)| ids.iter().copied()).collect();
        wanted.sort_unstable();
        wanted.dedup();

        let bugs: HashMap<u64, Bug> = session
            .bugzilla
            .get_bugs(&wanted)?
            .into_iter()
            .map(|b| (b.id, b))
            .collect();

        let checks = refs
            .into_iter()
            .map(|(card, bug_ids)| {
                let state = classify(&bug_ids, &bugs);
                let card_bugs = bug_ids.iter().filter_map(|id| bugs.get(id).cloned()).collect();
                CardCheck {
                    card,
                    bug_ids,
                    bugs: card_bugs,
                    state,
                }
            })
            .collect::<Vec<_>>();

        tracing::info!(list = %list.id, cards = checks.len(), bugs = bugs.len(), "List checked");
        report.lists.push(ListReport {
            list: list.clone(),
            cards: checks,
        });
    }

    Ok(report)
}
