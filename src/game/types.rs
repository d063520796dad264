//! Type definitions and utilities for board coordinates and teams
//!
//! Provides the value types shared by every other game module: the board
//! size, the `(row, col)` cell coordinate and the two opposing teams.
//!
//! # Orientation
//!
//! Row 0 is the far edge from the chess side. Team 1 (chess) starts on rows
//! 6-7 and its pawns advance toward decreasing rows; team 2 (checkers)
//! starts on rows 0-2 and advances toward increasing rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Width and height of the board in cells
pub const BOARD_SIZE: i8 = 8;

/// Check whether a position lies inside `[0, BOARD_SIZE)²`
#[inline]
pub fn check_on_board(position: Position) -> bool {
    position.row >= 0 && position.row < BOARD_SIZE && position.col >= 0 && position.col < BOARD_SIZE
}

/// Board cell coordinate `(row, col)`
///
/// Signed so that delta arithmetic can step past the edge; anything produced
/// that way must go through [`check_on_board`] before touching the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    /// Create a position from row and column indices
    pub const fn new(row: i8, col: i8) -> Self {
        Position { row, col }
    }

    /// Shift by a relative offset (no bounds check)
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Self {
        Position {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        check_on_board(self)
    }

    /// Cell halfway between two positions two steps apart on a diagonal
    ///
    /// Returns `None` unless `other` is exactly a two-cell diagonal hop away,
    /// which is the only geometry with a single jumped-over cell.
    pub fn hopped_over(self, other: Position) -> Option<Position> {
        let d_row = other.row - self.row;
        let d_col = other.col - self.col;
        if d_row.abs() == 2 && d_col.abs() == 2 {
            Some(self.offset(d_row / 2, d_col / 2))
        } else {
            None
        }
    }

    /// Create a position from algebraic notation (e.g., "a1" = row 7, col 0)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chesskers::game::types::Position;
    /// let pos = Position::from_algebraic("e2").unwrap();
    /// assert_eq!(pos, Position::new(6, 4));
    /// ```
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_num = chars.as_str().parse::<i8>().ok()?;
        if !('a'..='h').contains(&file_char) || !(1..=BOARD_SIZE).contains(&rank_num) {
            return None;
        }
        Some(Position {
            row: BOARD_SIZE - rank_num,
            col: (file_char as u8 - b'a') as i8,
        })
    }

    /// Convert to algebraic notation; `None` for off-board positions
    pub fn to_algebraic(self) -> Option<String> {
        if !self.is_on_board() {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        Some(format!("{}{}", file, BOARD_SIZE - self.row))
    }

    /// Parse either `row,col` or algebraic notation
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().ok()?;
            let col = col.trim().parse().ok()?;
            return Some(Position::new(row, col));
        }
        Position::from_algebraic(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i8, i8)> for Position {
    fn from((row, col): (i8, i8)) -> Self {
        Position::new(row, col)
    }
}

impl From<Position> for (i8, i8) {
    fn from(pos: Position) -> Self {
        (pos.row, pos.col)
    }
}

/// One of the two rule sets sharing the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Team {
    /// Chess pieces (Pawn, Rook, Bishop, Knight, Queen, King)
    Chess = 1,
    /// Checker pieces (Checker, CrownedChecker)
    Checkers = 2,
}

impl Team {
    /// The opposing team
    pub fn opponent(self) -> Team {
        match self {
            Team::Chess => Team::Checkers,
            Team::Checkers => Team::Chess,
        }
    }

    /// Numeric team id (1 or 2)
    pub fn id(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Chess => write!(f, "Chess"),
            Team::Checkers => write!(f, "Checkers"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_on_board_matches_range() {
        for row in -2..10 {
            for col in -2..10 {
                let expected = (0..8).contains(&row) && (0..8).contains(&col);
                assert_eq!(check_on_board(Position::new(row, col)), expected);
            }
        }
    }

    #[test]
    fn test_algebraic_roundtrip_corners() {
        assert_eq!(Position::from_algebraic("a1"), Some(Position::new(7, 0)));
        assert_eq!(Position::from_algebraic("h8"), Some(Position::new(0, 7)));
        assert_eq!(Position::new(6, 4).to_algebraic().as_deref(), Some("e2"));
        assert_eq!(Position::from_algebraic("i1"), None);
        assert_eq!(Position::from_algebraic("a9"), None);
        assert_eq!(Position::new(8, 0).to_algebraic(), None);
    }

    #[test]
    fn test_parse_accepts_both_forms() {
        assert_eq!(Position::parse("2,0"), Some(Position::new(2, 0)));
        assert_eq!(Position::parse(" 3 , 1 "), Some(Position::new(3, 1)));
        assert_eq!(Position::parse("b5"), Some(Position::new(3, 1)));
        assert_eq!(Position::parse("nope"), None);
    }

    #[test]
    fn test_hopped_over() {
        let from = Position::new(2, 2);
        assert_eq!(from.hopped_over(Position::new(4, 4)), Some(Position::new(3, 3)));
        assert_eq!(from.hopped_over(Position::new(0, 4)), Some(Position::new(1, 3)));
        assert_eq!(from.hopped_over(Position::new(3, 3)), None);
        assert_eq!(from.hopped_over(Position::new(2, 4)), None);
    }

    #[test]
    fn test_team_opponent() {
        assert_eq!(Team::Chess.opponent(), Team::Checkers);
        assert_eq!(Team::Checkers.opponent(), Team::Chess);
        assert_eq!(Team::Chess.id(), 1);
        assert_eq!(Team::Checkers.id(), 2);
    }
}
