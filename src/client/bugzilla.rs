//! Bugzilla REST client.

use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use super::transport::{http_client, join_path};
use crate::error::{Result, YtrelloError};
use crate::model::Bug;

const BUG_FIELDS: &str = "id,summary,status,resolution";

#[derive(Debug, Deserialize)]
struct BugsResponse {
    #[serde(default)]
    bugs: Vec<Bug>,
    #[serde(default)]
    error: bool,
    code: Option<i64>,
    message: Option<String>,
}

/// Connection to a Bugzilla instance. Anonymous; no login is attached.
#[derive(Debug, Clone)]
pub struct BugzillaClient {
    http: Client,
    base_url: Url,
}

impl BugzillaClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self {
            http: http_client()?,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Fetch the given bugs.
    ///
    /// Bugs the anonymous user cannot see, or that do not exist, are left
    /// out of the result rather than failing the whole request.
    pub fn get_bugs(&self, ids: &[u64]) -> Result<Vec<Bug>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let id_list = ids
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let mut url = join_path(&self.base_url, &["rest", "bug"])?;
        url.query_pairs_mut()
            .append_pair("id", &id_list)
            .append_pair("include_fields", BUG_FIELDS)
            .append_pair("permissive", "1");

        tracing::debug!(ids = %id_list, "Querying Bugzilla");
        let resp = self.http.get(url).send()?;
        let status = resp.status();
        let body = resp.text()?;

        let parsed: BugsResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(YtrelloError::Bugzilla {
                    code: i64::from(status.as_u16()),
                    message: body,
                });
            }
            Err(e) => return Err(e.into()),
        };

        if parsed.error || !status.is_success() {
            return Err(YtrelloError::Bugzilla {
                code: parsed.code.unwrap_or(i64::from(status.as_u16())),
                message: parsed.message.unwrap_or_default(),
            });
        }

        Ok(parsed.bugs)
    }
}
