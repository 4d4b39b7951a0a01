//! CLI module
//!
//! Command-line interface over [`TwitchClient`](crate::client::TwitchClient).
//!
//! # Commands
//!
//! - `team` / `teams` - Show one team or list them
//! - `user` - Show a user
//! - `following` / `is-following` - A user's followed channels
//! - `channel` / `channel-videos` - Show a channel or list its videos
//! - `video` / `top-videos` - Show a video or list the most viewed ones

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
