//! Selection tracking for the piece currently chosen by the team on move

use crate::game::components::PieceId;
use crate::game::types::Position;

/// Currently selected piece and its legal destinations
///
/// Holds the piece's id and position rather than a reference; the engine
/// re-resolves both through the board on every use so a captured or
/// promoted piece can never be acted on through a stale selection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_piece: Option<PieceId>,
    pub selected_position: Option<Position>,
    pub possible_moves: Vec<Position>,
}

impl Selection {
    pub fn select(&mut self, piece: PieceId, position: Position, moves: Vec<Position>) {
        self.selected_piece = Some(piece);
        self.selected_position = Some(position);
        self.possible_moves = moves;
    }

    pub fn clear(&mut self) {
        self.selected_piece = None;
        self.selected_position = None;
        self.possible_moves.clear();
    }
}
