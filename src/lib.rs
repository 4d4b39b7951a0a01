// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Twitch API Client
//!
//! A typed, async client for the paginated v2 JSON API of a live-streaming
//! platform: teams, users, channels and videos.
//!
//! ## Features
//!
//! - **Bounded Accumulation**: Fetch "up to N" entities from any paginated
//!   collection with the fewest possible requests
//! - **Offset and Cursor Paging**: One paginator, two continuation styles
//! - **Injectable Transport**: Every operation takes an explicit
//!   [`Connection`](http::Connection); swap in a fake for tests
//! - **Deferred References**: A video's channel is fetched only when asked for
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use twitch_client::{TopVideosQuery, TwitchClient, VideoPeriod};
//!
//! #[tokio::main]
//! async fn main() -> twitch_client::Result<()> {
//!     let client = TwitchClient::with_defaults()?;
//!
//!     if let Some(user) = client.user("colcatz").await? {
//!         for channel in user.following(Default::default()).await? {
//!             println!("{}", channel.name);
//!         }
//!     }
//!
//!     let query = TopVideosQuery { limit: 10, period: VideoPeriod::Month, ..Default::default() };
//!     for video in client.top_videos(query).await? {
//!         let owner = video.channel.channel().await?;
//!         println!("{} ({:?})", video.title, owner.map(|c| c.followers));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         TwitchClient                            │
//! │  team()  teams()  user()  channel()  video()  top_videos()      │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │        Entities: Team  User  Channel  Video  ChannelRef         │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌───────────────┬──────────────┴────────────┬────────────────────┐
//! │  Accumulate   │        Paginate           │     Transport      │
//! ├───────────────┼───────────────────────────┼────────────────────┤
//! │ Limit         │ Offset                    │ HttpClient         │
//! │ Dedup         │ Cursor                    │ (or any fake)      │
//! │ fetch_one     │ Total / short page stop   │                    │
//! └───────────────┴───────────────────────────┴────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Transport contract and the default HTTP transport
pub mod http;

/// Paginated collection traversal
pub mod pagination;

/// Entity accumulation and single-entity lookups
pub mod accumulate;

/// Teams, users, channels and videos
pub mod entities;

/// Client facade
pub mod client;

/// YAML client configuration
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use client::TwitchClient;
pub use config::ClientConfig;
pub use entities::{
    Channel, ChannelRef, ChannelVideosQuery, FollowingQuery, Team, Teams, TeamsQuery,
    TopVideosQuery, User, Video, Videos,
};
pub use http::{Connection, HttpClient, Transport};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
