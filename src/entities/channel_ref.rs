//! Deferred channel references
//!
//! Video records embed only the owning channel's name and display name. A
//! [`ChannelRef`] exposes those right away and fetches the full [`Channel`]
//! the first time it is asked for.

use super::channel::Channel;
use crate::error::Result;
use crate::http::Connection;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use tokio::sync::OnceCell;
use tracing::debug;

/// A channel known by name, resolved on first access
#[derive(Clone)]
pub struct ChannelRef {
    name: String,
    display_name: String,
    conn: Connection,
    resolved: OnceCell<Option<Channel>>,
}

impl ChannelRef {
    /// Reference the channel called `name`
    pub fn new(name: impl Into<String>, display_name: impl Into<String>, conn: Connection) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            conn,
            resolved: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Whether the channel has already been fetched
    pub fn is_resolved(&self) -> bool {
        self.resolved.initialized()
    }

    /// The full channel, `None` if it no longer exists.
    ///
    /// The first successful lookup is kept for the life of this value;
    /// concurrent callers share it. A failed lookup is not kept and the next
    /// call tries again.
    pub async fn channel(&self) -> Result<Option<&Channel>> {
        let channel = self
            .resolved
            .get_or_try_init(|| async {
                debug!("Resolving channel {}", self.name);
                Channel::get(&self.conn, &self.name).await
            })
            .await?;
        Ok(channel.as_ref())
    }
}

impl fmt::Debug for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelRef")
            .field("name", &self.name)
            .field("display_name", &self.display_name)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl Serialize for ChannelRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChannelRef", 2)?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("display_name", &self.display_name)?;
        state.end()
    }
}
