//! Client-side controllers for the chess web game: the one-shot game
//! session bootstrap and the lobby room-creation flow.
//!
//! Rendering, move legality, and server persistence live behind the trait
//! seams in [`board`], [`page`], and [`transport`]; the controllers own
//! only the sequencing and failure handling between them.

pub mod board;
pub mod bootstrap;
pub mod lobby;
pub mod page;
pub mod transport;

pub use board::{Board, BoardFactory, Piece};
pub use bootstrap::{
    game_id_from_path, BootstrapOutcome, DragOverDisposition, GameBootstrapController,
    PieceInteraction, SOURCE_POSITION_KEY,
};
pub use lobby::{room_location, LobbyController, LobbyError, RoomEntry};
pub use page::{DragTransfer, GamePage, LobbyPage, Navigator, Notifier};
pub use transport::{GameDirectory, HttpGameDirectory};
