//! Data models.
//!
//! - [`board`]: board and list identifiers, service constants, [`CheckedList`]
//! - [`Card`], [`TrelloList`]: Trello payloads
//! - [`Bug`], [`BugStatus`]: Bugzilla payloads

pub mod board;
mod bug;
mod card;

pub use board::{CHECKED_LISTS, CheckedList, ListRef};
pub use bug::{Bug, BugStatus};
pub use card::{Card, TrelloList};
