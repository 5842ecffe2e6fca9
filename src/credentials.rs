//! Trello credentials taken from the environment.

use crate::error::{Result, YtrelloError};

pub const ENV_TRELLO_KEY: &str = "TRELLO_DEVELOPER_PUBLIC_KEY";
pub const ENV_TRELLO_TOKEN: &str = "TRELLO_MEMBER_TOKEN";

/// Developer public key and member token for the Trello API.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TrelloCredentials {
    pub developer_public_key: String,
    pub member_token: String,
}

// Keep secrets out of debug logs.
impl std::fmt::Debug for TrelloCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrelloCredentials")
            .field("developer_public_key", &"<redacted>")
            .field("member_token", &"<redacted>")
            .finish()
    }
}

impl TrelloCredentials {
    pub fn new(developer_public_key: impl Into<String>, member_token: impl Into<String>) -> Self {
        Self {
            developer_public_key: developer_public_key.into(),
            member_token: member_token.into(),
        }
    }

    /// Read both credentials, failing if either is missing or empty.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let present = |name| lookup(name).filter(|v| !v.is_empty());
        match (present(ENV_TRELLO_KEY), present(ENV_TRELLO_TOKEN)) {
            (Some(key), Some(token)) => Ok(Self::new(key, token)),
            _ => Err(YtrelloError::MissingCredentials {
                key_var: ENV_TRELLO_KEY,
                token_var: ENV_TRELLO_TOKEN,
            }),
        }
    }

    /// Read both values as they are, empty when unset. No validation.
    pub fn from_env_unchecked() -> Self {
        Self::from_lookup_unchecked(|name| std::env::var(name).ok())
    }

    pub fn from_lookup_unchecked(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::new(
            lookup(ENV_TRELLO_KEY).unwrap_or_default(),
            lookup(ENV_TRELLO_TOKEN).unwrap_or_default(),
        )
    }
}

/// Exit with status 1 unless both Trello credentials are set.
///
/// Must run before any Trello request is made.
pub fn check_trello_credentials() {
    if let Err(e) = TrelloCredentials::from_env() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
