//! Teams

use super::decode_record;
use crate::accumulate::{
    accumulate, fetch_one, identifier_segment, CollectionRequest, Entity, FromRecord,
    RecordFactory,
};
use crate::error::Result;
use crate::http::Connection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};

/// Public team pages live under this URL
pub const TEAM_URL_BASE: &str = "http://www.twitch.tv/team";

/// A team of channels
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "_id")]
    pub id: u64,
    pub name: String,
    pub display_name: String,
    /// HTML description
    #[serde(default)]
    pub info: Option<String>,
    #[serde(rename = "background", default)]
    pub background_url: Option<String>,
    #[serde(rename = "banner", default)]
    pub banner_url: Option<String>,
    #[serde(rename = "logo", default)]
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Team {
    /// Get a team by name, `None` if it does not exist
    pub async fn get(conn: &Connection, name: &str) -> Result<Option<Team>> {
        let name = identifier_segment("name", name)?;
        fetch_one(conn, &format!("teams/{name}"), &RecordFactory::new()).await
    }

    /// The team's public page
    pub fn url(&self) -> String {
        format!("{TEAM_URL_BASE}/{}", self.name)
    }
}

impl FromRecord for Team {
    fn from_record(record: &Value, _conn: &Connection) -> Result<Self> {
        decode_record(record)
    }
}

impl Entity for Team {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Team {}

impl Hash for Team {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Options for [`Teams::all`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamsQuery {
    /// Maximum number of teams (0 = all)
    pub limit: usize,
}

/// The collection of all teams
#[derive(Debug, Clone, Copy)]
pub struct Teams;

impl Teams {
    /// List teams in server order
    pub async fn all(conn: &Connection, query: TeamsQuery) -> Result<Vec<Team>> {
        let request = CollectionRequest::new("teams", "teams").limit(query.limit);
        accumulate(conn, &request, &RecordFactory::new()).await
    }
}
