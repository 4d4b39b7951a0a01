//! Videos

use super::channel_ref::ChannelRef;
use super::{decode_record, null_as_default};
use crate::accumulate::{
    accumulate, fetch_one, identifier_segment, CollectionRequest, Entity, FromRecord,
    RecordFactory,
};
use crate::error::Result;
use crate::http::Connection;
use crate::types::{OptionStringExt, VideoPeriod};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hash::{Hash, Hasher};

#[derive(Deserialize)]
struct ChannelStub {
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    display_name: String,
}

#[derive(Deserialize)]
struct VideoRecord {
    #[serde(rename = "_id")]
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default)]
    description: Option<String>,
    recorded_at: DateTime<Utc>,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    views: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    length: u64,
    #[serde(default)]
    game: Option<String>,
    #[serde(default)]
    preview: Option<String>,
    channel: ChannelStub,
}

/// A recorded broadcast or highlight
#[derive(Debug, Clone, Serialize)]
pub struct Video {
    /// Opaque id, e.g. `a396294648`
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub url: String,
    pub view_count: u64,
    /// Length in seconds
    pub length: u64,
    pub game_name: Option<String>,
    pub preview_url: Option<String>,
    /// The channel that owns the video, fetched on first use
    pub channel: ChannelRef,
}

impl Video {
    /// Get a video by id, `None` if it does not exist
    pub async fn get(conn: &Connection, id: &str) -> Result<Option<Video>> {
        let id = identifier_segment("id", id)?;
        fetch_one(conn, &format!("videos/{id}"), &RecordFactory::new()).await
    }
}

impl FromRecord for Video {
    fn from_record(record: &Value, conn: &Connection) -> Result<Self> {
        let record: VideoRecord = decode_record(record)?;
        Ok(Self {
            id: record.id,
            title: record.title,
            description: record.description,
            recorded_at: record.recorded_at,
            url: record.url,
            view_count: record.views,
            length: record.length,
            game_name: record.game,
            preview_url: record.preview,
            channel: ChannelRef::new(
                record.channel.name,
                record.channel.display_name,
                conn.clone(),
            ),
        })
    }
}

impl Entity for Video {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

impl PartialEq for Video {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Video {}

impl Hash for Video {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Options for [`Videos::top`]
#[derive(Debug, Clone, Default)]
pub struct TopVideosQuery {
    /// Maximum number of videos (0 = all)
    pub limit: usize,
    /// Only videos of this game
    pub game: Option<String>,
    /// Time window to rank over
    pub period: VideoPeriod,
}

/// Site-wide video listings
#[derive(Debug, Clone, Copy)]
pub struct Videos;

impl Videos {
    /// Most viewed videos in `query.period`
    pub async fn top(conn: &Connection, query: TopVideosQuery) -> Result<Vec<Video>> {
        let mut request = CollectionRequest::new("videos/top", "videos")
            .limit(query.limit)
            .param("period", query.period.as_str());
        if let Some(game) = query.game.none_if_empty() {
            request = request.param("game", game);
        }
        accumulate(conn, &request, &RecordFactory::new()).await
    }
}
