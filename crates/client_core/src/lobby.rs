//! Lobby flow: create a room on a "start" gesture, render it into the
//! room list, and enter a room by replacing the current history entry.

use std::sync::Arc;

use shared::domain::RoomId;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::{
    page::{LobbyPage, Navigator},
    transport::GameDirectory,
};

#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("room creation request failed: {0}")]
    RoomCreation(String),
}

/// One rendered room list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomEntry {
    pub room_id: RoomId,
}

impl RoomEntry {
    /// The text displayed on the entry, which is also what `enter`
    /// receives back after click delegation.
    pub fn label(&self) -> &str {
        self.room_id.as_str()
    }
}

pub fn room_location(room_id: &str) -> String {
    format!("/rooms/{room_id}")
}

/// The room list here is purely a rendering cache of what this page has
/// created; it is never re-synchronized from the server after load.
// TODO: seed the cache from a server room listing once the lobby exposes
// that endpoint.
pub struct LobbyController {
    directory: Arc<dyn GameDirectory>,
    page: Arc<dyn LobbyPage>,
    navigator: Arc<dyn Navigator>,
    rooms: Mutex<Vec<RoomEntry>>,
}

impl LobbyController {
    pub fn new(
        directory: Arc<dyn GameDirectory>,
        page: Arc<dyn LobbyPage>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            directory,
            page,
            navigator,
            rooms: Mutex::new(Vec::new()),
        }
    }

    /// "Start" gesture: request a new room and append it to the visible
    /// list. A failed request leaves the list untouched and surfaces a
    /// recoverable error for the page to present.
    pub async fn create_room(&self) -> Result<RoomId, LobbyError> {
        let created = self.directory.create_room().await.map_err(|err| {
            warn!("room creation failed: {err:#}");
            LobbyError::RoomCreation(err.to_string())
        })?;

        info!("room {} created", created.room_id);
        let entry = RoomEntry {
            room_id: created.room_id.clone(),
        };
        self.page.append_room_entry(&entry);
        self.rooms.lock().await.push(entry);
        Ok(created.room_id)
    }

    /// Click on a room entry: navigate to its page, replacing the current
    /// history entry so back-navigation does not return to the lobby.
    pub fn enter(&self, entry_label: &str) {
        self.navigator.replace(&room_location(entry_label));
    }

    pub async fn rooms(&self) -> Vec<RoomEntry> {
        self.rooms.lock().await.clone()
    }
}

#[cfg(test)]
#[path = "tests/lobby_tests.rs"]
mod tests;
