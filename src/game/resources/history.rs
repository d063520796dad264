//! Move history tracking
//!
//! Maintains a chronological record of every resolved move so a front-end
//! can list the game or highlight the last move.

use crate::game::components::PieceKind;
use crate::game::types::{Position, Team};
use serde::{Deserialize, Serialize};

/// One resolved `move_to`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub kind: PieceKind,
    pub team: Team,
    pub from: Position,
    pub to: Position,
    pub captured: Option<PieceKind>,
    pub promoted_to: Option<PieceKind>,
    /// The move was a continuation hop of a multi-jump
    pub chain: bool,
}

/// Complete move history for the current game
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveHistory {
    /// Chronological list of all moves; multi-jump hops are separate entries
    pub moves: Vec<MoveRecord>,
}

impl MoveHistory {
    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    /// Get the most recent move, if any
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Number of moves that captured something
    pub fn capture_count(&self) -> usize {
        self.moves.iter().filter(|m| m.captured.is_some()).count()
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(captured: Option<PieceKind>) -> MoveRecord {
        MoveRecord {
            kind: PieceKind::Checker,
            team: Team::Checkers,
            from: Position::new(2, 2),
            to: Position::new(4, 4),
            captured,
            promoted_to: None,
            chain: false,
        }
    }

    #[test]
    fn test_history_records_in_order() {
        let mut history = MoveHistory::default();
        assert!(history.last_move().is_none());

        history.add_move(record(None));
        history.add_move(record(Some(PieceKind::Pawn)));

        assert_eq!(history.len(), 2);
        assert_eq!(history.last_move().unwrap().captured, Some(PieceKind::Pawn));
        assert_eq!(history.capture_count(), 1);

        history.clear();
        assert!(history.is_empty());
    }
}
