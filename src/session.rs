//! Setup of the two service handles.
//!
//! Both handles are created once and then only read, so they live in a
//! [`Session`] value passed by reference instead of in globals.

use crate::client::{BugzillaClient, TrelloClient};
use crate::credentials::TrelloCredentials;
use crate::error::Result;
use crate::model::board::BUGZILLA_URL;

/// Connect to the SUSE Bugzilla. Always uses [`BUGZILLA_URL`].
pub fn setup_bugzilla() -> Result<BugzillaClient> {
    tracing::debug!(url = BUGZILLA_URL, "Setting up Bugzilla connection");
    BugzillaClient::new(BUGZILLA_URL)
}

/// Configure a Trello session from the credential environment variables.
///
/// Values are taken as they are. Call
/// [`check_trello_credentials`](crate::credentials::check_trello_credentials)
/// first; otherwise an unset variable yields an unauthenticated session that
/// fails on its first request.
pub fn setup_trello() -> Result<TrelloClient> {
    setup_trello_from(|name| std::env::var(name).ok())
}

/// [`setup_trello`] over an arbitrary variable source.
pub fn setup_trello_from(lookup: impl Fn(&str) -> Option<String>) -> Result<TrelloClient> {
    tracing::debug!("Setting up Trello session");
    TrelloClient::new(TrelloCredentials::from_lookup_unchecked(lookup))
}

/// The Bugzilla connection and Trello session for one run.
#[derive(Debug, Clone)]
pub struct Session {
    pub bugzilla: BugzillaClient,
    pub trello: TrelloClient,
}

impl Session {
    /// Set up both services, Bugzilla first.
    pub fn setup() -> Result<Self> {
        let bugzilla = setup_bugzilla()?;
        let trello = setup_trello()?;
        Ok(Self { bugzilla, trello })
    }

    pub fn new(bugzilla: BugzillaClient, trello: TrelloClient) -> Self {
        Self { bugzilla, trello }
    }
}
