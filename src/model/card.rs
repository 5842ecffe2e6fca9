use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card as returned by `GET /1/lists/{id}/cards`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub id_list: String,
    #[serde(default)]
    pub date_last_activity: Option<DateTime<Utc>>,
}

impl Card {
    /// Name and description joined, the text bug references are looked for in.
    pub fn text(&self) -> String {
        if self.desc.is_empty() {
            self.name.clone()
        } else {
            format!("{}\n{}", self.name, self.desc)
        }
    }
}

/// A list (column) as returned by `GET /1/boards/{id}/lists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrelloList {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub id_board: String,
}
