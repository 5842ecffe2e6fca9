//! Read-only HTTP clients for the two services.
//!
//! - [`TrelloClient`]: cards and lists on Trello boards
//! - [`BugzillaClient`]: bug records on a Bugzilla instance
//! - [`Association`] / [`materialize`]: the collection type Trello calls return

mod association;
mod bugzilla;
mod transport;
mod trello;

pub use association::{Association, materialize};
pub use bugzilla::BugzillaClient;
pub use trello::{TRELLO_API_URL, TrelloClient};
