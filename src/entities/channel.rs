//! Channels

use super::video::Video;
use super::{decode_record, null_as_default};
use crate::accumulate::{
    accumulate, encode_segment, fetch_one, identifier_segment, CollectionRequest, Entity,
    FromRecord, RecordFactory,
};
use crate::error::Result;
use crate::http::Connection;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Deserialize)]
struct ChannelRecord {
    #[serde(rename = "_id")]
    id: u64,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    display_name: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    game: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    banner: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    mature: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    views: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    followers: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// A broadcaster's channel
#[derive(Clone, Serialize)]
pub struct Channel {
    pub id: u64,
    pub name: String,
    pub display_name: String,
    /// Current stream title
    pub status: Option<String>,
    /// Game currently or last played
    pub game_name: Option<String>,
    pub url: String,
    pub logo_url: Option<String>,
    pub banner_url: Option<String>,
    pub mature: bool,
    pub views: u64,
    pub followers: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    conn: Connection,
}

/// Options for [`Channel::videos`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ChannelVideosQuery {
    /// Maximum number of videos (0 = all)
    pub limit: usize,
    /// Past broadcasts instead of highlights
    pub broadcasts: bool,
}

impl Channel {
    /// Get a channel by name, `None` if it does not exist
    pub async fn get(conn: &Connection, name: &str) -> Result<Option<Channel>> {
        let name = identifier_segment("name", name)?;
        fetch_one(conn, &format!("channels/{name}"), &RecordFactory::new()).await
    }

    /// Videos recorded on this channel, newest first
    pub async fn videos(&self, query: ChannelVideosQuery) -> Result<Vec<Video>> {
        let path = format!("channels/{}/videos", encode_segment(&self.name));
        let mut request = CollectionRequest::new(path, "videos").limit(query.limit);
        if query.broadcasts {
            request = request.param("broadcasts", "true");
        }
        accumulate(&self.conn, &request, &RecordFactory::new()).await
    }
}

impl FromRecord for Channel {
    fn from_record(record: &Value, conn: &Connection) -> Result<Self> {
        let record: ChannelRecord = decode_record(record)?;
        Ok(Self {
            id: record.id,
            name: record.name,
            display_name: record.display_name,
            status: record.status,
            game_name: record.game,
            url: record.url,
            logo_url: record.logo,
            banner_url: record.banner,
            mature: record.mature,
            views: record.views,
            followers: record.followers,
            created_at: record.created_at,
            updated_at: record.updated_at,
            conn: conn.clone(),
        })
    }
}

impl Entity for Channel {
    type Id = u64;

    fn id(&self) -> &u64 {
        &self.id
    }
}

impl PartialEq for Channel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Channel {}

impl Hash for Channel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Channel")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("status", &self.status)
            .field("game_name", &self.game_name)
            .field("url", &self.url)
            .field("mature", &self.mature)
            .field("views", &self.views)
            .field("followers", &self.followers)
            .finish_non_exhaustive()
    }
}
