//! Seams to the hosting page: rendered regions, navigation, notices, and
//! the platform drag-transfer channel.

use std::sync::Arc;

use shared::domain::Side;

use crate::{bootstrap::PieceInteraction, lobby::RoomEntry};

/// Browser-history style navigation.
pub trait Navigator: Send + Sync {
    /// Return to the previous page.
    fn back(&self);
    /// Navigate to `location`, replacing the current history entry so
    /// back-navigation does not return here.
    fn replace(&self, location: &str);
}

/// Blocking user-facing notice (the page's alert surface).
pub trait Notifier: Send + Sync {
    fn notice(&self, message: &str);
}

/// The game page's rendered regions and its drop-target hookup.
pub trait GamePage: Send + Sync {
    fn set_name_tag(&self, side: Side, text: &str);
    fn set_record_tag(&self, side: Side, text: &str);
    /// Wire the page body's drag-over and drop events to `interaction`.
    /// The drag-over handler must honor
    /// [`PieceInteraction::allow_drop`](crate::bootstrap::PieceInteraction::allow_drop)
    /// so a drop can land anywhere on the body.
    fn install_drop_target(&self, interaction: Arc<PieceInteraction>);
}

/// The lobby page's growable room list. Click delegation (resolving a
/// click inside the list to the nearest entry's label) is the adapter's
/// job; the controller receives the resolved label.
pub trait LobbyPage: Send + Sync {
    fn append_room_entry(&self, entry: &RoomEntry);
}

/// Platform drag-transfer channel: small string data carried from a drag
/// gesture's start to its matching drop, inaccessible outside that window.
pub trait DragTransfer {
    fn data(&self, key: &str) -> Option<String>;
}
