//! Checking that the checked lists still exist on their boards.

use serde::Serialize;

use crate::client::{TrelloClient, materialize};
use crate::error::Result;
use crate::model::CheckedList;
use crate::model::board::group_by_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ListPresence {
    Present,
    Archived,
    Missing,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListVerification {
    pub list: CheckedList,
    pub presence: ListPresence,
    /// Name the list currently has on the board.
    pub remote_name: Option<String>,
}

/// Look every list up on its board. Boards are fetched once each.
///
/// Results come back grouped by board, in first-seen board order.
pub fn verify_lists(
    trello: &TrelloClient,
    lists: &[CheckedList],
) -> Result<Vec<ListVerification>> {
    let mut results = Vec::new();
    for (board, members) in group_by_board(lists) {
        let remote = materialize(trello.board_lists(board)?);

        for list in members {
            let found = remote.iter().find(|r| r.id == list.id);
            let presence = match found {
                Some(r) if r.closed => ListPresence::Archived,
                Some(_) => ListPresence::Present,
                None => ListPresence::Missing,
            };
            results.push(ListVerification {
                list: list.clone(),
                presence,
                remote_name: found.map(|r| r.name.clone()),
            });
        }
    }
    Ok(results)
}

/// How many lists were not found at all.
pub fn missing_count(results: &[ListVerification]) -> usize {
    results
        .iter()
        .filter(|r| r.presence == ListPresence::Missing)
        .count()
}
