//! Entities module
//!
//! Typed views of the API's teams, users, channels and videos.
//!
//! # Overview
//!
//! Every entity is built from one raw record through [`FromRecord`] and
//! compares, hashes and de-duplicates by its `id` alone. Entities that can
//! reach further into the API (a user's follows, a channel's videos) keep the
//! [`Connection`](crate::http::Connection) they were fetched with.
//!
//! [`FromRecord`]: crate::accumulate::FromRecord

mod channel;
mod channel_ref;
mod team;
mod user;
mod video;

pub use channel::{Channel, ChannelVideosQuery};
pub use channel_ref::ChannelRef;
pub use team::{Team, Teams, TeamsQuery, TEAM_URL_BASE};
pub use user::{FollowingQuery, User};
pub use video::{TopVideosQuery, Video, Videos};

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize one raw record into its API shape
pub(crate) fn decode_record<T: DeserializeOwned>(record: &Value) -> Result<T> {
    Ok(T::deserialize(record)?)
}

/// Treat an explicit `null` like a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
