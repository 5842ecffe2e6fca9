//! Trello REST API v1 client.
//!
//! Only reads. Credentials travel as the `key` and `token` query
//! parameters, which is how Trello authenticates API-key clients.

use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use url::Url;

use super::association::Association;
use super::transport::{http_client, join_path};
use crate::credentials::TrelloCredentials;
use crate::error::{Result, YtrelloError};
use crate::model::{Card, TrelloList};

/// Base URL for the Trello API v1.
pub const TRELLO_API_URL: &str = "https://api.trello.com/1";

const CARD_FIELDS: &str = "id,name,desc,url,idList,dateLastActivity";
const LIST_FIELDS: &str = "id,name,closed,idBoard";

/// An authenticated Trello session.
///
/// The credentials are stored as given; nothing checks them until the
/// first request, where Trello rejects bad ones with `401`.
#[derive(Debug, Clone)]
pub struct TrelloClient {
    http: Client,
    base_url: Url,
    credentials: TrelloCredentials,
}

impl TrelloClient {
    pub fn new(credentials: TrelloCredentials) -> Result<Self> {
        Self::with_base_url(TRELLO_API_URL, credentials)
    }

    /// Point the client at another API root, e.g. a mock server.
    pub fn with_base_url(base_url: &str, credentials: TrelloCredentials) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: Url::parse(base_url)?,
            credentials,
        })
    }

    pub fn credentials(&self) -> &TrelloCredentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Cards currently on a list.
    pub fn list_cards(&self, list_id: &str) -> Result<Association<Card>> {
        let url = self.endpoint(&["lists", list_id, "cards"], CARD_FIELDS)?;
        let cards: Vec<Card> = self.get(url)?;
        tracing::debug!(list_id, count = cards.len(), "Fetched Trello cards");
        Ok(Association::new(cards))
    }

    /// Open and closed lists on a board.
    pub fn board_lists(&self, board_id: &str) -> Result<Association<TrelloList>> {
        let mut url = self.endpoint(&["boards", board_id, "lists"], LIST_FIELDS)?;
        url.query_pairs_mut().append_pair("filter", "all");
        let lists: Vec<TrelloList> = self.get(url)?;
        tracing::debug!(board_id, count = lists.len(), "Fetched Trello lists");
        Ok(Association::new(lists))
    }

    fn endpoint(&self, segments: &[&str], fields: &str) -> Result<Url> {
        let mut url = join_path(&self.base_url, segments)?;
        url.query_pairs_mut()
            .append_pair("key", &self.credentials.developer_public_key)
            .append_pair("token", &self.credentials.member_token)
            .append_pair("fields", fields);
        Ok(url)
    }

    fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        // The query carries the token, so neither logs nor errors may show it.
        tracing::trace!(path = url.path(), "Trello GET");
        let resp = self.http.get(url).send().map_err(reqwest::Error::without_url)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().map_err(reqwest::Error::without_url)?;
            return Err(YtrelloError::Trello {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<T>().map_err(reqwest::Error::without_url)?)
    }
}
