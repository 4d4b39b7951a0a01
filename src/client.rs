//! Client facade
//!
//! [`TwitchClient`] bundles a [`Connection`] with the entity operations so
//! callers do not have to thread the connection through every call. It is
//! also the only place that knows how to build a default connection.

use crate::config::ClientConfig;
use crate::entities::{Channel, Team, Teams, TeamsQuery, TopVideosQuery, User, Video, Videos};
use crate::error::Result;
use crate::http::{Connection, HttpClient, Transport};
use std::sync::Arc;

/// Entry point for API lookups
#[derive(Clone)]
pub struct TwitchClient {
    conn: Connection,
}

impl TwitchClient {
    /// Use `transport` for every request
    pub fn new(transport: impl Transport + 'static) -> Self {
        Self::from_connection(Arc::new(transport))
    }

    /// Share an existing connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Build the default HTTP transport from `config`
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = HttpClient::with_config(config.to_http_config())?;
        Ok(Self::new(http))
    }

    /// Public API root, v2 media type, environment overrides applied
    pub fn with_defaults() -> Result<Self> {
        Self::from_config(&ClientConfig::default().with_env_overrides())
    }

    /// The connection entities fetched through this client keep
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub async fn team(&self, name: &str) -> Result<Option<Team>> {
        Team::get(&self.conn, name).await
    }

    pub async fn teams(&self, query: TeamsQuery) -> Result<Vec<Team>> {
        Teams::all(&self.conn, query).await
    }

    pub async fn user(&self, name: &str) -> Result<Option<User>> {
        User::get(&self.conn, name).await
    }

    pub async fn channel(&self, name: &str) -> Result<Option<Channel>> {
        Channel::get(&self.conn, name).await
    }

    pub async fn video(&self, id: &str) -> Result<Option<Video>> {
        Video::get(&self.conn, id).await
    }

    pub async fn top_videos(&self, query: TopVideosQuery) -> Result<Vec<Video>> {
        Videos::top(&self.conn, query).await
    }
}

impl std::fmt::Debug for TwitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitchClient").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::testing::{found, team_json, ScriptedTransport};

    #[tokio::test]
    async fn test_client_uses_injected_transport() {
        let (transport, conn) = ScriptedTransport::sequence(vec![found(team_json(1))]).into_shared();
        let client = TwitchClient::from_connection(conn);

        let team = client.team("team1").await.unwrap().unwrap();

        assert_eq!(team.id, 1);
        assert_eq!(transport.request_count(), 1);

        client.connection().get("teams/x", &Default::default()).await.unwrap_err();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_client_new_wraps_transport() {
        let client = TwitchClient::new(ScriptedTransport::sequence(vec![]));

        let err = client.video(" ").await.unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_from_config_rejects_bad_base_url() {
        let config = ClientConfig {
            base_url: "not a url".into(),
            ..ClientConfig::default()
        };
        let err = TwitchClient::from_config(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_from_config_default() {
        assert!(TwitchClient::from_config(&ClientConfig::default()).is_ok());
    }
}
