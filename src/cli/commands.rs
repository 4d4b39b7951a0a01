//! CLI commands and argument parsing

use crate::types::VideoPeriod;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Look up teams, users, channels and videos
#[derive(Parser, Debug)]
#[command(name = "twitch-client")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// API root, overrides the config file and environment
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Application client id, overrides the config file and environment
    #[arg(long, global = true)]
    pub client_id: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a team
    Team {
        /// Team name
        name: String,
    },

    /// List teams
    Teams {
        /// Maximum number of teams (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },

    /// Show a user
    User {
        /// Login name
        name: String,
    },

    /// List the channels a user follows
    Following {
        /// Login name
        user: String,

        /// Maximum number of channels (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,
    },

    /// Check whether a user follows a channel
    IsFollowing {
        /// Login name
        user: String,

        /// Channel name
        channel: String,
    },

    /// Show a channel
    Channel {
        /// Channel name
        name: String,
    },

    /// List a channel's videos
    ChannelVideos {
        /// Channel name
        name: String,

        /// Maximum number of videos (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Past broadcasts instead of highlights
        #[arg(long)]
        broadcasts: bool,
    },

    /// Show a video
    Video {
        /// Video id (e.g. a396294648)
        id: String,
    },

    /// List the most viewed videos
    TopVideos {
        /// Maximum number of videos (0 = all)
        #[arg(short, long, default_value = "0")]
        limit: usize,

        /// Only videos of this game
        #[arg(short, long)]
        game: Option<String>,

        /// Time window
        #[arg(short, long, default_value = "week")]
        period: VideoPeriod,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per entity
    Text,
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
