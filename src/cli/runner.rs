//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::TwitchClient;
use crate::config::ClientConfig;
use crate::entities::{
    Channel, ChannelVideosQuery, FollowingQuery, Team, TeamsQuery, TopVideosQuery, User, Video,
};
use crate::error::{Error, Result, ResultExt};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = TwitchClient::from_config(&self.client_config()?)
            .context("Failed to set up the API client")?;
        let output = self.execute(&client).await?;
        println!("{output}");
        Ok(())
    }

    /// Run the command against `client` and render its output
    pub async fn execute(&self, client: &TwitchClient) -> Result<String> {
        match &self.cli.command {
            Commands::Team { name } => {
                let team = found("Team", name, client.team(name).await?)?;
                self.render_one(&team, team_line)
            }
            Commands::Teams { limit } => {
                let teams = client.teams(TeamsQuery { limit: *limit }).await?;
                self.render_list(&teams, team_line)
            }
            Commands::User { name } => {
                let user = found("User", name, client.user(name).await?)?;
                self.render_one(&user, user_line)
            }
            Commands::Following { user, limit } => {
                let user = found("User", user, client.user(user).await?)?;
                let channels = user.following(FollowingQuery { limit: *limit }).await?;
                self.render_list(&channels, channel_line)
            }
            Commands::IsFollowing { user, channel } => {
                let user = found("User", user, client.user(user).await?)?;
                let following = user.is_following(channel).await?;
                let answer = json!({
                    "user": user.name,
                    "channel": channel,
                    "following": following
                });
                let line = if following { "yes" } else { "no" };
                self.render_one(&answer, |_| line.to_string())
            }
            Commands::Channel { name } => {
                let channel = found("Channel", name, client.channel(name).await?)?;
                self.render_one(&channel, channel_line)
            }
            Commands::ChannelVideos {
                name,
                limit,
                broadcasts,
            } => {
                let channel = found("Channel", name, client.channel(name).await?)?;
                let videos = channel
                    .videos(ChannelVideosQuery {
                        limit: *limit,
                        broadcasts: *broadcasts,
                    })
                    .await?;
                self.render_list(&videos, video_line)
            }
            Commands::Video { id } => {
                let video = found("Video", id, client.video(id).await?)?;
                self.render_one(&video, video_line)
            }
            Commands::TopVideos {
                limit,
                game,
                period,
            } => {
                let query = TopVideosQuery {
                    limit: *limit,
                    game: game.clone(),
                    period: *period,
                };
                let videos = client.top_videos(query).await?;
                self.render_list(&videos, video_line)
            }
        }
    }

    /// Build the client configuration: file (or defaults), then environment,
    /// then command-line flags
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match &self.cli.config {
            Some(path) => ClientConfig::load(path)?,
            None => ClientConfig::default().with_env_overrides(),
        };

        if let Some(base_url) = &self.cli.base_url {
            config.base_url.clone_from(base_url);
        }
        if let Some(client_id) = &self.cli.client_id {
            config.client_id = Some(client_id.clone());
        }

        config.validate()?;
        debug!("Using API at {}", config.base_url);
        Ok(config)
    }

    fn render_one<T: Serialize>(&self, value: &T, line: impl Fn(&T) -> String) -> Result<String> {
        match self.cli.format {
            OutputFormat::Text => Ok(line(value)),
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::Pretty => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn render_list<T: Serialize>(
        &self,
        values: &[T],
        line: impl Fn(&T) -> String,
    ) -> Result<String> {
        match self.cli.format {
            OutputFormat::Text => Ok(values.iter().map(line).collect::<Vec<_>>().join("\n")),
            OutputFormat::Json => Ok(serde_json::to_string(values)?),
            OutputFormat::Pretty => Ok(serde_json::to_string_pretty(values)?),
        }
    }
}

fn found<T>(kind: &str, name: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| Error::Other(format!("{kind} '{name}' not found")))
}

fn team_line(team: &Team) -> String {
    format!("{}\t{}\t{}", team.name, team.display_name, team.url())
}

fn user_line(user: &User) -> String {
    let staff = if user.staff { "\tstaff" } else { "" };
    format!("{}\t{}\t{}{staff}", user.name, user.display_name, user.id)
}

fn channel_line(channel: &Channel) -> String {
    format!(
        "{}\t{}\t{} followers\t{}",
        channel.name,
        channel.display_name,
        channel.followers,
        channel.game_name.as_deref().unwrap_or("-")
    )
}

fn video_line(video: &Video) -> String {
    format!(
        "{}\t{}\t{}\t{} views",
        video.id,
        video.channel.display_name(),
        video.title,
        video.view_count
    )
}
