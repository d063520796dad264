//! Events emitted by the engine for the presentation layer
//!
//! The engine queues these as it resolves requests; a front-end drains them
//! with [`crate::game::engine::TurnEngine::drain_events`] and animates,
//! highlights or announces accordingly. Nothing a reader does with an event
//! feeds back into rule state.

use crate::game::components::Piece;
use crate::game::resources::WinReason;
use crate::game::types::{Position, Team};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum GameEvent {
    /// Selected piece or its destination set changed
    SelectionChanged {
        selected: Option<Position>,
        destinations: Vec<Position>,
    },

    /// A piece left `from` and now stands on `to`
    PieceMoved {
        piece: Piece,
        from: Position,
        to: Position,
    },

    /// A piece was removed from the board
    PieceCaptured { piece: Piece, at: Position },

    /// A piece was replaced by a stronger one of the same team
    PiecePromoted { old_piece: Piece, new_piece: Piece },

    /// The other team is now on move
    TurnChanged { new_team: Team },

    /// The same piece must keep capturing
    ChainCaptureContinues {
        piece: Piece,
        destinations: Vec<Position>,
    },

    GameEnded { winning_team: Team, reason: WinReason },

    /// Board restored to its starting layout
    GameReset,
}
