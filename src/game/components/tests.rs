//! Component module unit tests
//!
//! Components are plain data, so these tests cover the small helpers hung
//! off them: glyph mapping, team affinity and movement policy lookup.

use super::*;
use crate::game::rules::deltas::MoveMode;
use crate::game::types::{Position, Team};

#[test]
fn test_glyph_roundtrip_for_every_kind() {
    //! Every kind maps to a distinct glyph and back
    for kind in PieceKind::ALL {
        assert_eq!(PieceKind::from_glyph(kind.glyph()), Some(kind));
    }
    assert_eq!(PieceKind::from_glyph('.'), None);
    assert_eq!(PieceKind::from_glyph('x'), None);
}

#[test]
fn test_checker_family() {
    assert!(PieceKind::Checker.is_checker_family());
    assert!(PieceKind::CrownedChecker.is_checker_family());
    assert!(!PieceKind::Pawn.is_checker_family());
    assert!(!PieceKind::King.is_checker_family());
}

#[test]
fn test_home_team() {
    assert_eq!(PieceKind::Queen.home_team(), Team::Chess);
    assert_eq!(PieceKind::Checker.home_team(), Team::Checkers);
    assert_eq!(PieceKind::CrownedChecker.home_team(), Team::Checkers);
}

#[test]
fn test_new_piece_has_not_moved() {
    //! Freshly spawned pieces are eligible for the pawn double step
    let piece = Piece::new(PieceId(3), PieceKind::Pawn, Team::Chess, Position::new(6, 0));
    assert!(!piece.has_moved);
    assert_eq!(piece.deltas()[0].mode, MoveMode::EmptyOnly);
}
