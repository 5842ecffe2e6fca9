use serde::{Deserialize, Serialize};
use std::fmt;

/// Bugzilla bug states. Anything unrecognized is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BugStatus {
    New,
    Confirmed,
    InProgress,
    Reopened,
    Resolved,
    Verified,
    Closed,
    Other(String),
}

impl BugStatus {
    /// Whether the bug no longer needs work.
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            BugStatus::Resolved | BugStatus::Verified | BugStatus::Closed
        )
    }
}

impl From<&str> for BugStatus {
    fn from(s: &str) -> Self {
        match s.to_uppercase().as_str() {
            "NEW" | "UNCONFIRMED" => BugStatus::New,
            "CONFIRMED" => BugStatus::Confirmed,
            "IN_PROGRESS" | "ASSIGNED" => BugStatus::InProgress,
            "REOPENED" => BugStatus::Reopened,
            "RESOLVED" => BugStatus::Resolved,
            "VERIFIED" => BugStatus::Verified,
            "CLOSED" => BugStatus::Closed,
            _ => BugStatus::Other(s.to_string()),
        }
    }
}

impl fmt::Display for BugStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BugStatus::New => write!(f, "NEW"),
            BugStatus::Confirmed => write!(f, "CONFIRMED"),
            BugStatus::InProgress => write!(f, "IN_PROGRESS"),
            BugStatus::Reopened => write!(f, "REOPENED"),
            BugStatus::Resolved => write!(f, "RESOLVED"),
            BugStatus::Verified => write!(f, "VERIFIED"),
            BugStatus::Closed => write!(f, "CLOSED"),
            BugStatus::Other(s) => write!(f, "{}", s),
        }
    }
}

impl Serialize for BugStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BugStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(BugStatus::from(s.as_str()))
    }
}

/// A bug as returned by the Bugzilla REST API, reduced to the fields we ask for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bug {
    pub id: u64,
    #[serde(default)]
    pub summary: String,
    pub status: BugStatus,
    #[serde(default)]
    pub resolution: String,
}
