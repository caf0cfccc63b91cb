//! Seam to the board/piece rendering layer. The controllers never look
//! inside a board; they only hand it the server's piece list and resolve
//! pieces back out of it by source coordinate.

use std::sync::Arc;

use shared::{domain::Side, protocol::PiecePlacement};

pub trait Piece: Send + Sync {
    /// Clear the piece's selected/highlighted visual state. Must be safe
    /// to call on a piece that is not highlighted.
    fn unhighlight(&self);
}

pub trait Board: Send + Sync {
    /// Resolve the piece currently associated with a drag gesture's source
    /// coordinate. `None` when no piece is recorded there.
    fn find_piece_by_source_position(&self, source: &str) -> Option<Arc<dyn Piece>>;
}

pub trait BoardFactory: Send + Sync {
    /// Build a board from the server's placement list and whose-turn
    /// indicator. Only called for sessions that are still playable.
    fn create(&self, pieces: &[PiecePlacement], turn: Side) -> Arc<dyn Board>;
}
