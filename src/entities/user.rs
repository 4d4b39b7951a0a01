//! Users

use super::channel::Channel;
use super::{decode_record, null_as_default};
use crate::accumulate::{
    accumulate, encode_segment, fetch_one, identifier_segment, CollectionRequest, Dedup, Entity,
    FromRecord, RecordFactory,
};
use crate::error::Result;
use crate::http::{Connection, Transport};
use crate::types::StringMap;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

#[derive(Deserialize)]
struct UserRecord {
    #[serde(rename = "_id")]
    id: u64,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    display_name: String,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    staff: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// A registered user
#[derive(Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    pub logo_url: Option<String>,
    /// Member of the platform's staff
    pub staff: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    conn: Connection,
}

/// Options for [`User::following`]
#[derive(Debug, Clone, Copy, Default)]
pub struct FollowingQuery {
    /// Maximum number of channels (0 = all)
    pub limit: usize,
}

impl User {
    /// Get a user by login name, `None` if it does not exist
    pub async fn get(conn: &Connection, name: &str) -> Result<Option<User>> {
        let name = identifier_segment("name", name)?;
        fetch_one(conn, &format!("users/{name}"), &RecordFactory::new()).await
    }

    /// Channels this user follows.
    ///
    /// The follows listing can repeat a channel across page boundaries, so
    /// each channel is returned once.
    pub async fn following(&self, query: FollowingQuery) -> Result<Vec<Channel>> {
        let request = CollectionRequest::new(self.follows_path(), "follows")
            .record_path("channel")
            .dedup(Dedup::ById)
            .limit(query.limit);
        accumulate(&self.conn, &request, &RecordFactory::new()).await
    }

    /// Does this user follow `channel`?
    pub async fn is_following(&self, channel: &str) -> Result<bool> {
        let channel = identifier_segment("channel", channel)?;
        let path = format!("{}/{channel}", self.follows_path());
        let following = self
            .conn
            .get(&path, &StringMap::new())
            .await?
            .into_entity()
            .is_some();
        debug!("{}: following {channel} = {following}", self.name);
        Ok(following)
    }

    fn follows_path(&self) -> String {
        format!("users/{}/follows/channels", encode_segment(&self.name))
    }
}

impl FromRecord for User {
    fn from_record(record: &Value, conn: &Connection) -> Result<Self> {
        let record: UserRecord = decode_record(record)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            display_name: record.display_name,
            logo_url: record.logo,
            staff: record.staff,
            created_at: record.created_at,
            updated_at: record.updated_at,
            conn: conn.clone(),
        })
    }
}

impl Entity for User {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("staff", &self.staff)
            .finish_non_exhaustive()
    }
}
