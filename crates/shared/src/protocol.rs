use serde::{Deserialize, Serialize};

use crate::domain::{RoomId, Side};

/// One player as reported by the game endpoint. Side assignment is not
/// part of the wire format: the guest always renders as black, the host
/// as white.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSummary {
    pub name: String,
}

/// A piece identity at a board coordinate. Opaque to the controllers;
/// the board abstraction is the only consumer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PiecePlacement {
    pub piece: String,
    pub position: String,
}

/// Full state of one game as returned by `GET /api/games/{gameId}`.
/// Immutable after deserialization; exactly one per page instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStateResponse {
    pub piece_response_dtos: Vec<PiecePlacement>,
    pub host: PlayerSummary,
    pub guest: PlayerSummary,
    /// Session display name; carried on the wire but unused downstream.
    pub name: String,
    pub turn: Side,
    pub is_finished: bool,
}

/// Response to `POST /rooms`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreatedResponse {
    pub room_id: RoomId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_state_uses_camel_case_wire_names() {
        let raw = r#"{
            "pieceResponseDtos": [
                {"piece": "BLACK_ROOK", "position": "a8"},
                {"piece": "WHITE_KING", "position": "e1"}
            ],
            "host": {"name": "Ada"},
            "guest": {"name": "Lin"},
            "name": "room-42",
            "turn": "WHITE",
            "isFinished": false
        }"#;

        let state: GameStateResponse = serde_json::from_str(raw).expect("decode");
        assert_eq!(state.piece_response_dtos.len(), 2);
        assert_eq!(state.piece_response_dtos[0].position, "a8");
        assert_eq!(state.host.name, "Ada");
        assert_eq!(state.guest.name, "Lin");
        assert_eq!(state.turn, Side::White);
        assert!(!state.is_finished);
    }

    #[test]
    fn game_state_round_trips_field_names() {
        let state = GameStateResponse {
            piece_response_dtos: vec![],
            host: PlayerSummary { name: "Ada".into() },
            guest: PlayerSummary { name: "Lin".into() },
            name: "room-42".into(),
            turn: Side::Black,
            is_finished: true,
        };

        let encoded = serde_json::to_string(&state).expect("encode");
        assert!(encoded.contains("\"pieceResponseDtos\""));
        assert!(encoded.contains("\"isFinished\":true"));
        assert!(encoded.contains("\"turn\":\"BLACK\""));
    }

    #[test]
    fn room_created_reads_room_id() {
        let created: RoomCreatedResponse =
            serde_json::from_str(r#"{"roomId": "7"}"#).expect("decode");
        assert_eq!(created.room_id, RoomId("7".into()));
    }
}
