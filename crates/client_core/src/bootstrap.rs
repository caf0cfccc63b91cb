//! One-shot game session bootstrap: fetch the session, gate on its
//! finished flag, build the board, fill the player regions, and install
//! the drop-gesture handler.

use std::sync::Arc;

use shared::domain::{GameId, Side};
use tracing::{debug, warn};

use crate::{
    board::{Board, BoardFactory},
    page::{DragTransfer, GamePage, Navigator, Notifier},
    transport::GameDirectory,
};

pub const CANNOT_LOAD_NOTICE: &str = "Cannot load the game. Returning to the previous page.";
pub const ALREADY_ENDED_NOTICE: &str =
    "This game has already ended. Returning to the previous page.";

const BLACK_RECORD_LABEL: &str = "Black player";
const WHITE_RECORD_LABEL: &str = "White player";

/// Drag-transfer key under which the drag source coordinate travels.
pub const SOURCE_POSITION_KEY: &str = "sourcePosition";

/// Extract a game identifier from a page path's final segment. Returns
/// `None` when the final segment is empty; no further format validation
/// happens client-side. Meant for the composition root, so the controller
/// itself never reads ambient location state.
pub fn game_id_from_path(path: &str) -> Option<GameId> {
    let segment = path.rsplit('/').next().unwrap_or(path);
    if segment.is_empty() {
        None
    } else {
        Some(GameId(segment.to_string()))
    }
}

/// Terminal state of one bootstrap run.
#[derive(Clone)]
pub enum BootstrapOutcome {
    /// Session is playable; the board is live and the drop target is
    /// installed on the page.
    Ready(Arc<PieceInteraction>),
    /// No usable response from the server. Notice shown, navigated back.
    SessionUnavailable,
    /// Valid response with the finished flag set. Notice shown, navigated
    /// back, board never built.
    AlreadyFinished,
}

pub struct GameBootstrapController {
    game_id: GameId,
    directory: Arc<dyn GameDirectory>,
    board_factory: Arc<dyn BoardFactory>,
    page: Arc<dyn GamePage>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
}

impl GameBootstrapController {
    pub fn new(
        game_id: GameId,
        directory: Arc<dyn GameDirectory>,
        board_factory: Arc<dyn BoardFactory>,
        page: Arc<dyn GamePage>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            game_id,
            directory,
            board_factory,
            page,
            navigator,
            notifier,
        }
    }

    /// Run the bootstrap sequence once. The single suspension point is the
    /// session fetch; every failure there collapses to the unavailable
    /// path, so nothing propagates past this call.
    pub async fn bootstrap(&self) -> BootstrapOutcome {
        let session = match self.directory.fetch_game(&self.game_id).await {
            Ok(session) => session,
            Err(err) => {
                warn!("session fetch failed for game {}: {err:#}", self.game_id);
                self.notifier.notice(CANNOT_LOAD_NOTICE);
                self.navigator.back();
                return BootstrapOutcome::SessionUnavailable;
            }
        };

        if session.is_finished {
            debug!("game {} already concluded", self.game_id);
            self.notifier.notice(ALREADY_ENDED_NOTICE);
            self.navigator.back();
            return BootstrapOutcome::AlreadyFinished;
        }

        let board = self
            .board_factory
            .create(&session.piece_response_dtos, session.turn);

        // Guest always renders black, host always white.
        self.page.set_name_tag(Side::Black, &session.guest.name);
        self.page.set_record_tag(Side::Black, BLACK_RECORD_LABEL);
        self.page.set_name_tag(Side::White, &session.host.name);
        self.page.set_record_tag(Side::White, WHITE_RECORD_LABEL);

        let interaction = Arc::new(PieceInteraction::new(board));
        self.page.install_drop_target(Arc::clone(&interaction));
        BootstrapOutcome::Ready(interaction)
    }
}

/// What a drag-over handler must do with the platform's default behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOverDisposition {
    /// Suppress the default drop rejection so the drop event fires.
    SuppressDefault,
}

/// Drop-gesture surface for a live board. Exclusively owned by the page
/// instance that installed it.
pub struct PieceInteraction {
    board: Arc<dyn Board>,
}

impl PieceInteraction {
    pub fn new(board: Arc<dyn Board>) -> Self {
        Self { board }
    }

    /// Drag-over handling: drops must be allowed anywhere on the page
    /// body.
    pub fn allow_drop(&self) -> DragOverDisposition {
        DragOverDisposition::SuppressDefault
    }

    /// Drop handling: resolve the piece recorded at the gesture's source
    /// coordinate and clear its highlight. A missing transfer datum, an
    /// unknown coordinate, or an already-cleared piece are all silent
    /// no-ops; the page has no surface to report them on.
    pub fn handle_drop(&self, transfer: &dyn DragTransfer) {
        let Some(source) = transfer.data(SOURCE_POSITION_KEY) else {
            return;
        };
        if let Some(piece) = self.board.find_piece_by_source_position(&source) {
            piece.unhighlight();
        }
    }
}

#[cfg(test)]
#[path = "tests/bootstrap_tests.rs"]
mod tests;
