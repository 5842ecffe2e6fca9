use serde::{Deserialize, Serialize};

/// Agile YaST Incoming Board
pub const INC_BOARD_ID: &str = "5507f013b863aa041618871d";
/// Agile YaST: Team 1
pub const TEAM_1_BOARD_ID: &str = "5502d5dd8eb45fb4581c1a0f";
/// Agile YaST: Team A
pub const TEAM_A_BOARD_ID: &str = "557833ad6be7b9634f089201";

pub const BUGZILLA_URL: &str = "https://bugzilla.suse.com";
/// Service account on the Bugzilla side. Not used for authentication here.
pub const BUGZILLA_ACCOUNT: &str = "yast-internal@suse.de";

/// A list on one of the boards, as written in the built-in table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRef {
    pub board: &'static str,
    pub id: &'static str,
    pub name: &'static str,
}

const fn list(board: &'static str, id: &'static str, name: &'static str) -> ListRef {
    ListRef { board, id, name }
}

/// The lists whose cards get checked, in the order they are scanned.
///
/// List IDs can be looked up with `GET /1/boards/{board}/lists`, or with
/// `ytrello verify` once a board ID is known.
pub const CHECKED_LISTS: &[ListRef] = &[
    // Incoming board
    list(INC_BOARD_ID, "5502d691d05c3b3817317566", "Backlog Team A"),
    list(INC_BOARD_ID, "5502d6719b0d5db70bcf6655", "SLE12-SP1 development"),
    list(INC_BOARD_ID, "5507f28d31c1cfac7a83eb72", "Generic Ideas"),
    list(INC_BOARD_ID, "5538994821027776154180eb", "SLE12-SP2 development"),
    list(INC_BOARD_ID, "55f921f1cc340f0d071fa4dc", "SLE-13"),
    list(INC_BOARD_ID, "5507f04f2c885ffbdd53208a", "SLE12-maintenance"),
    list(INC_BOARD_ID, "5507f0549c920252e89da5ad", "SLE11-SP4 development"),
    list(INC_BOARD_ID, "5507f140ab44b6bcfcc6c561", "SLE11-maintenance"),
    list(INC_BOARD_ID, "550800984de3079fa9ded12a", "openSUSE"),
    list(INC_BOARD_ID, "5507f04ba946797c971ecde3", "SLE12-SP1 maintenance"),
    // Team 1
    list(TEAM_1_BOARD_ID, "557835b5cb9c13dcd032ecbb", "Backlog Team 1"),
    list(TEAM_1_BOARD_ID, "5577ed07930f16fb224ca248", "Sprint Backlog"),
    list(TEAM_1_BOARD_ID, "5502d6b29a7a2ab8025a4c56", "Doing"),
    // Team A
    list(TEAM_A_BOARD_ID, "5502d69d3e68ab3d1729337e", "Sprint Backlog"),
    list(TEAM_A_BOARD_ID, "557833dde4f1218b7d1cf831", "Doing"),
];

/// Human-readable name of a known board, if any.
pub fn board_name(board_id: &str) -> Option<&'static str> {
    match board_id {
        INC_BOARD_ID => Some("Agile YaST Incoming Board"),
        TEAM_1_BOARD_ID => Some("Agile YaST: Team 1"),
        TEAM_A_BOARD_ID => Some("Agile YaST: Team A"),
        _ => None,
    }
}

/// Owned, serde-loadable form of a checked list.
///
/// The configuration file uses this shape, so a custom table can replace
/// [`CHECKED_LISTS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckedList {
    pub board: String,
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl From<&ListRef> for CheckedList {
    fn from(r: &ListRef) -> Self {
        Self {
            board: r.board.to_string(),
            id: r.id.to_string(),
            name: r.name.to_string(),
        }
    }
}

impl CheckedList {
    /// The built-in table as owned values, in source order.
    pub fn builtin() -> Vec<CheckedList> {
        CHECKED_LISTS.iter().map(CheckedList::from).collect()
    }

    /// Board name for display, falling back to the raw ID.
    pub fn board_label(&self) -> &str {
        board_name(&self.board).unwrap_or(&self.board)
    }
}

/// Group lists by board, keeping boards in first-seen order and lists in
/// their original order within each board.
pub fn group_by_board(lists: &[CheckedList]) -> Vec<(&str, Vec<&CheckedList>)> {
    let mut groups: Vec<(&str, Vec<&CheckedList>)> = Vec::new();
    for l in lists {
        match groups.iter_mut().find(|(board, _)| *board == l.board) {
            Some((_, members)) => members.push(l),
            None => groups.push((l.board.as_str(), vec![l])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_lists_span_three_boards() {
        assert_eq!(CHECKED_LISTS.len(), 15);
        let count = |board| CHECKED_LISTS.iter().filter(|l| l.board == board).count();
        assert_eq!(count(INC_BOARD_ID), 10);
        assert_eq!(count(TEAM_1_BOARD_ID), 3);
        assert_eq!(count(TEAM_A_BOARD_ID), 2);
    }

    #[test]
    fn test_identifiers_are_non_empty_and_unique() {
        let mut ids: Vec<&str> = CHECKED_LISTS.iter().map(|l| l.id).collect();
        assert!(ids.iter().all(|id| id.len() == 24));
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), CHECKED_LISTS.len());
        for board in [INC_BOARD_ID, TEAM_1_BOARD_ID, TEAM_A_BOARD_ID] {
            assert!(!board.is_empty());
            assert!(board_name(board).is_some());
        }
    }

    #[test]
    fn test_builtin_preserves_order() {
        let lists = CheckedList::builtin();
        assert_eq!(lists.first().unwrap().id, "5502d691d05c3b3817317566");
        assert_eq!(lists.last().unwrap().id, "557833dde4f1218b7d1cf831");
    }

    #[test]
    fn test_group_by_board() {
        let lists = CheckedList::builtin();
        let groups = group_by_board(&lists);
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].0, INC_BOARD_ID);
        assert_eq!(groups[1].1.len(), 3);
        assert_eq!(groups[2].1[1].name, "Doing");
    }

    #[test]
    fn test_board_label_falls_back_to_id() {
        let l = CheckedList {
            board: "unknown".to_string(),
            id: "x".to_string(),
            name: String::new(),
        };
        assert_eq!(l.board_label(), "unknown");
    }
}
