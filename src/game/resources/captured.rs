//! Captured pieces tracking
//!
//! Records every piece each team has taken. The number of checker-family
//! pieces taken by the chess team drives the chess win condition.

use crate::game::components::PieceKind;
use crate::game::types::Team;
use serde::{Deserialize, Serialize};

/// Pieces captured by each side
///
/// # Fields
///
/// - `by_chess`: checker pieces the chess team has taken
/// - `by_checkers`: chess pieces the checkers team has taken
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedPieces {
    pub by_chess: Vec<PieceKind>,
    pub by_checkers: Vec<PieceKind>,
}

impl CapturedPieces {
    /// Record a capture
    ///
    /// # Arguments
    ///
    /// * `captured_team` - Team of the piece that was captured
    /// * `kind` - Kind of piece that was captured
    pub fn add_capture(&mut self, captured_team: Team, kind: PieceKind) {
        match captured_team {
            Team::Checkers => self.by_chess.push(kind),
            Team::Chess => self.by_checkers.push(kind),
        }
    }

    /// Checker-family pieces taken so far
    pub fn captured_checkers_count(&self) -> usize {
        self.by_chess
            .iter()
            .filter(|kind| kind.is_checker_family())
            .count()
    }

    /// Whether the checkers team has taken a king
    pub fn king_captured(&self) -> bool {
        self.by_checkers.contains(&PieceKind::King)
    }

    /// Clear all captured pieces (for new game)
    pub fn clear(&mut self) {
        self.by_chess.clear();
        self.by_checkers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captured_pieces_default() {
        let captured = CapturedPieces::default();
        assert!(captured.by_chess.is_empty());
        assert!(captured.by_checkers.is_empty());
        assert_eq!(captured.captured_checkers_count(), 0);
    }

    #[test]
    fn test_add_capture_credits_opponent() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(Team::Checkers, PieceKind::Checker);
        captured.add_capture(Team::Checkers, PieceKind::CrownedChecker);
        captured.add_capture(Team::Chess, PieceKind::Rook);

        assert_eq!(captured.by_chess.len(), 2);
        assert_eq!(captured.by_checkers, vec![PieceKind::Rook]);
        assert_eq!(captured.captured_checkers_count(), 2);
        assert!(!captured.king_captured());
    }

    #[test]
    fn test_king_capture_and_clear() {
        let mut captured = CapturedPieces::default();
        captured.add_capture(Team::Chess, PieceKind::King);
        assert!(captured.king_captured());

        captured.clear();
        assert!(!captured.king_captured());
        assert!(captured.by_checkers.is_empty());
    }
}
