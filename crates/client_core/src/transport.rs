//! HTTP transport seam for the two server endpoints the controllers use.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::GameId,
    protocol::{GameStateResponse, RoomCreatedResponse},
};

#[async_trait]
pub trait GameDirectory: Send + Sync {
    /// Fetch the full state of one game. Any failure (unreachable server,
    /// non-success status, undecodable body) is reported as an error; the
    /// caller treats all of them as "no data".
    async fn fetch_game(&self, game_id: &GameId) -> Result<GameStateResponse>;

    /// Create a new room with an empty request body and return its
    /// server-allocated identifier.
    async fn create_room(&self) -> Result<RoomCreatedResponse>;
}

pub struct HttpGameDirectory {
    http: Client,
    server_url: String,
}

impl HttpGameDirectory {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }
}

#[async_trait]
impl GameDirectory for HttpGameDirectory {
    async fn fetch_game(&self, game_id: &GameId) -> Result<GameStateResponse> {
        let state = self
            .http
            .get(format!("{}/api/games/{game_id}", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(state)
    }

    async fn create_room(&self) -> Result<RoomCreatedResponse> {
        let created = self
            .http
            .post(format!("{}/rooms", self.server_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(created)
    }
}

#[cfg(test)]
#[path = "tests/transport_tests.rs"]
mod tests;
