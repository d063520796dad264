//! Declarative movement policies
//!
//! Each piece kind is described by an ordered list of deltas: a relative
//! `(row, col)` step plus a [`MoveMode`] saying how the step may be used.
//! The move generator in [`super::piece_moves`] interprets these tables; no
//! per-kind movement code exists outside them apart from the pawn double
//! step and the checker hop.

use crate::game::components::PieceKind;
use serde::{Deserialize, Serialize};

/// How a delta may be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MoveMode {
    /// Repeat until off-board, blocked by a friend, or after capturing an enemy
    Slide = 0,
    /// Once, onto an empty or enemy cell
    Step = 1,
    /// Once, only onto an enemy
    AttackOnly = 2,
    /// Once, only onto an empty cell
    EmptyOnly = 3,
}

/// Relative step plus movement mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Delta {
    pub d_row: i8,
    pub d_col: i8,
    pub mode: MoveMode,
}

impl Delta {
    pub const fn new(d_row: i8, d_col: i8, mode: MoveMode) -> Self {
        Delta { d_row, d_col, mode }
    }
}

use MoveMode::{AttackOnly, EmptyOnly, Slide, Step};

pub const PAWN_DELTAS: [Delta; 3] = [
    Delta::new(-1, 0, EmptyOnly),
    Delta::new(-1, -1, AttackOnly),
    Delta::new(-1, 1, AttackOnly),
];

pub const ROOK_DELTAS: [Delta; 4] = [
    Delta::new(1, 0, Slide),
    Delta::new(-1, 0, Slide),
    Delta::new(0, 1, Slide),
    Delta::new(0, -1, Slide),
];

pub const BISHOP_DELTAS: [Delta; 4] = [
    Delta::new(1, 1, Slide),
    Delta::new(1, -1, Slide),
    Delta::new(-1, 1, Slide),
    Delta::new(-1, -1, Slide),
];

pub const QUEEN_DELTAS: [Delta; 8] = [
    Delta::new(1, 0, Slide),
    Delta::new(-1, 0, Slide),
    Delta::new(0, 1, Slide),
    Delta::new(0, -1, Slide),
    Delta::new(1, 1, Slide),
    Delta::new(1, -1, Slide),
    Delta::new(-1, 1, Slide),
    Delta::new(-1, -1, Slide),
];

pub const KING_DELTAS: [Delta; 8] = [
    Delta::new(1, 0, Step),
    Delta::new(-1, 0, Step),
    Delta::new(0, 1, Step),
    Delta::new(0, -1, Step),
    Delta::new(1, 1, Step),
    Delta::new(1, -1, Step),
    Delta::new(-1, 1, Step),
    Delta::new(-1, -1, Step),
];

pub const KNIGHT_DELTAS: [Delta; 8] = [
    Delta::new(-2, -1, Step),
    Delta::new(-2, 1, Step),
    Delta::new(-1, -2, Step),
    Delta::new(-1, 2, Step),
    Delta::new(1, -2, Step),
    Delta::new(1, 2, Step),
    Delta::new(2, -1, Step),
    Delta::new(2, 1, Step),
];

/// Checkers only advance toward increasing rows
pub const CHECKER_DELTAS: [Delta; 2] = [Delta::new(1, 1, Step), Delta::new(1, -1, Step)];

pub const CROWNED_CHECKER_DELTAS: [Delta; 4] = [
    Delta::new(1, 1, Step),
    Delta::new(1, -1, Step),
    Delta::new(-1, 1, Step),
    Delta::new(-1, -1, Step),
];

/// Movement policy table lookup
pub fn movement_policy(kind: PieceKind) -> &'static [Delta] {
    match kind {
        PieceKind::Pawn => &PAWN_DELTAS,
        PieceKind::Rook => &ROOK_DELTAS,
        PieceKind::Bishop => &BISHOP_DELTAS,
        PieceKind::Knight => &KNIGHT_DELTAS,
        PieceKind::Queen => &QUEEN_DELTAS,
        PieceKind::King => &KING_DELTAS,
        PieceKind::Checker => &CHECKER_DELTAS,
        PieceKind::CrownedChecker => &CROWNED_CHECKER_DELTAS,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queen_is_rook_plus_bishop() {
        let mut combined: Vec<Delta> = ROOK_DELTAS.iter().chain(BISHOP_DELTAS.iter()).copied().collect();
        let mut queen = QUEEN_DELTAS.to_vec();
        combined.sort_by_key(|d| (d.d_row, d.d_col));
        queen.sort_by_key(|d| (d.d_row, d.d_col));
        assert_eq!(combined, queen);
    }

    #[test]
    fn test_mode_discriminants() {
        assert_eq!(MoveMode::Slide as u8, 0);
        assert_eq!(MoveMode::Step as u8, 1);
        assert_eq!(MoveMode::AttackOnly as u8, 2);
        assert_eq!(MoveMode::EmptyOnly as u8, 3);
    }

    #[test]
    fn test_knight_offsets_are_distinct_l_shapes() {
        for delta in KNIGHT_DELTAS {
            let (r, c) = (delta.d_row.abs(), delta.d_col.abs());
            assert!((r, c) == (1, 2) || (r, c) == (2, 1));
        }
        let mut seen: Vec<_> = KNIGHT_DELTAS.iter().map(|d| (d.d_row, d.d_col)).collect();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 8);
    }
}
