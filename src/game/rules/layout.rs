//! Starting layouts as data
//!
//! A [`StartingLayout`] is a table of placements applied to an empty board.
//! The standard layout puts the chess army on rows 6-7 and twelve checkers on
//! the even-parity cells of rows 0-2; variants can be loaded from settings or
//! written as a text diagram.

use crate::game::components::PieceKind;
use crate::game::error::{GameError, GameResult};
use crate::game::types::{Position, Team, BOARD_SIZE};
use serde::{Deserialize, Serialize};

/// Chess back rank, file a through h
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

const CHESS_BACK_ROW: i8 = 7;
const CHESS_PAWN_ROW: i8 = 6;
const CHECKER_ROWS: std::ops::Range<i8> = 0..3;

/// One entry of a layout table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub kind: PieceKind,
    pub team: Team,
    pub row: i8,
    pub col: i8,
}

impl Placement {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }
}

/// Table of pieces placed on a fresh board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingLayout {
    pub placements: Vec<Placement>,
}

impl Default for StartingLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl StartingLayout {
    /// Chess army on rows 6-7, checkers on even-parity cells of rows 0-2
    pub fn standard() -> Self {
        let mut placements = Vec::with_capacity(28);

        for row in CHECKER_ROWS {
            for col in 0..BOARD_SIZE {
                if (row + col) % 2 == 0 {
                    placements.push(Placement {
                        kind: PieceKind::Checker,
                        team: Team::Checkers,
                        row,
                        col,
                    });
                }
            }
        }

        for col in 0..BOARD_SIZE {
            placements.push(Placement {
                kind: PieceKind::Pawn,
                team: Team::Chess,
                row: CHESS_PAWN_ROW,
                col,
            });
            placements.push(Placement {
                kind: BACK_RANK[col as usize],
                team: Team::Chess,
                row: CHESS_BACK_ROW,
                col,
            });
        }

        StartingLayout { placements }
    }

    /// An empty layout
    pub fn empty() -> Self {
        StartingLayout { placements: Vec::new() }
    }

    /// Parse a text diagram, one string per row starting at row 0
    ///
    /// Glyphs are those of [`PieceKind::glyph`]; `.` marks an empty cell and
    /// whitespace is ignored. Each piece joins its kind's home team. Rows and
    /// columns beyond the diagram are left empty.
    ///
    /// ```rust
    /// use chesskers::game::rules::StartingLayout;
    /// let layout = StartingLayout::from_diagram(&[
    ///     "....",
    ///     "..o.",
    ///     "...P",
    /// ]).unwrap();
    /// assert_eq!(layout.placements.len(), 2);
    /// ```
    pub fn from_diagram(rows: &[&str]) -> GameResult<Self> {
        if rows.len() > BOARD_SIZE as usize {
            return Err(GameError::InvalidLayout {
                message: format!("diagram has {} rows, board has {}", rows.len(), BOARD_SIZE),
            });
        }

        let mut placements = Vec::new();
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() > BOARD_SIZE as usize {
                return Err(GameError::InvalidLayout {
                    message: format!("row {} has {} cells, board has {}", row, cells.len(), BOARD_SIZE),
                });
            }
            for (col, glyph) in cells.into_iter().enumerate() {
                if glyph == '.' {
                    continue;
                }
                let kind = PieceKind::from_glyph(glyph).ok_or_else(|| GameError::InvalidLayout {
                    message: format!("unknown glyph '{}' at ({}, {})", glyph, row, col),
                })?;
                placements.push(Placement {
                    kind,
                    team: kind.home_team(),
                    row: row as i8,
                    col: col as i8,
                });
            }
        }

        Ok(StartingLayout { placements })
    }

    /// Reject out-of-board entries, doubly-occupied cells and pieces fielded
    /// by the wrong team
    ///
    /// Movement direction, promotion rows and win conditions are all tied to
    /// a kind's home team, so a checkers king or a chess checker is refused.
    pub fn validate(&self) -> GameResult<()> {
        let mut seen = std::collections::HashSet::new();
        for placement in &self.placements {
            let pos = placement.position();
            if !pos.is_on_board() {
                return Err(GameError::out_of_bounds(pos));
            }
            if placement.team != placement.kind.home_team() {
                return Err(GameError::InvalidLayout {
                    message: format!(
                        "{} at {} must belong to {}, not {}",
                        placement.kind,
                        pos,
                        placement.kind.home_team(),
                        placement.team
                    ),
                });
            }
            if !seen.insert(pos) {
                return Err(GameError::InvalidLayout {
                    message: format!("cell {} is listed twice", pos),
                });
            }
        }
        Ok(())
    }

    /// Number of checker-family pieces the table places
    pub fn checker_count(&self) -> usize {
        self.placements
            .iter()
            .filter(|p| p.kind.is_checker_family())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_layout_counts() {
        let layout = StartingLayout::standard();
        assert_eq!(layout.placements.len(), 28);
        assert_eq!(layout.checker_count(), 12);
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_standard_checkers_share_parity() {
        let layout = StartingLayout::standard();
        for p in layout.placements.iter().filter(|p| p.kind == PieceKind::Checker) {
            assert_eq!((p.row + p.col) % 2, 0);
            assert!(p.row < 3);
            assert_eq!(p.team, Team::Checkers);
        }
    }

    #[test]
    fn test_standard_back_rank_order() {
        let layout = StartingLayout::standard();
        let king = layout
            .placements
            .iter()
            .find(|p| p.kind == PieceKind::King)
            .unwrap();
        assert_eq!((king.row, king.col), (7, 4));
        let queen = layout
            .placements
            .iter()
            .find(|p| p.kind == PieceKind::Queen)
            .unwrap();
        assert_eq!((queen.row, queen.col), (7, 3));
    }

    #[test]
    fn test_diagram_rejects_unknown_glyph() {
        let err = StartingLayout::from_diagram(&["..x"]).unwrap_err();
        assert!(matches!(err, GameError::InvalidLayout { .. }));
    }

    #[test]
    fn test_diagram_rejects_wide_rows() {
        assert!(StartingLayout::from_diagram(&["........."]).is_err());
    }

    #[test]
    fn test_validate_rejects_duplicates_and_out_of_bounds() {
        let dup = Placement {
            kind: PieceKind::Rook,
            team: Team::Chess,
            row: 1,
            col: 1,
        };
        let layout = StartingLayout {
            placements: vec![dup, dup],
        };
        assert!(matches!(layout.validate(), Err(GameError::InvalidLayout { .. })));

        let off = StartingLayout {
            placements: vec![Placement { row: 8, ..dup }],
        };
        assert_eq!(off.validate(), Err(GameError::OutOfBounds { row: 8, col: 1 }));
    }

    #[test]
    fn test_validate_rejects_piece_on_foreign_team() {
        //! Every kind must be fielded by its home team
        //!
        //! A king handed to the checkers side would let a chess capture of it
        //! be scored as a checkers win, so such tables never reach the board.
        let misplaced_king = StartingLayout {
            placements: vec![
                Placement { kind: PieceKind::King, team: Team::Checkers, row: 3, col: 3 },
                Placement { kind: PieceKind::Rook, team: Team::Chess, row: 7, col: 3 },
            ],
        };
        assert!(
            matches!(misplaced_king.validate(), Err(GameError::InvalidLayout { .. })),
            "Checkers king should be rejected"
        );
        assert!(
            crate::game::rules::BoardState::with_layout(&misplaced_king).is_err(),
            "Board should refuse a layout that fails validation"
        );

        let chess_checker = StartingLayout {
            placements: vec![Placement { kind: PieceKind::Checker, team: Team::Chess, row: 0, col: 0 }],
        };
        assert!(
            matches!(chess_checker.validate(), Err(GameError::InvalidLayout { .. })),
            "Chess-team checker should be rejected"
        );
    }

    #[test]
    fn test_layout_serde_roundtrip() {
        let layout = StartingLayout::from_diagram(&["o.@", "...", "PK."]).unwrap();
        let json = serde_json::to_string(&layout).unwrap();
        let back: StartingLayout = serde_json::from_str(&json).unwrap();
        assert_eq!(layout, back);
    }
}
