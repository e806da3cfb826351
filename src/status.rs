//! Tranquility server-status client.
//!
//! A single stateless query against the game's status service; no polling,
//! no caching.

use serde::Deserialize;

use crate::error::Error;

/// Figures returned by the status endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerStatus {
    pub server_open: bool,
    /// Current server time as a unix timestamp.
    pub current_time: i64,
    pub online_players: i32,
}

#[derive(Clone)]
pub struct StatusClient {
    http: reqwest::Client,
    base_url: String,
}

impl StatusClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Fetch the current server status.
    pub async fn server_status(&self) -> Result<ServerStatus, Error> {
        let url = format!("{}/server/status", self.base_url);
        let status = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<ServerStatus>()
            .await?;

        Ok(status)
    }
}
