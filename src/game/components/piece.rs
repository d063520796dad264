//! Piece data: kind, team, identity and position

use crate::game::rules::deltas::{movement_policy, Delta};
use crate::game::types::{Position, Team};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every kind of piece either rule set can field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
    Checker,
    CrownedChecker,
}

impl PieceKind {
    pub const ALL: [PieceKind; 8] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Checker,
        PieceKind::CrownedChecker,
    ];

    /// Checkers capture by hopping and never by landing on the target
    pub fn is_checker_family(self) -> bool {
        matches!(self, PieceKind::Checker | PieceKind::CrownedChecker)
    }

    /// Team that fields this kind in the standard game
    pub fn home_team(self) -> Team {
        if self.is_checker_family() {
            Team::Checkers
        } else {
            Team::Chess
        }
    }

    /// Single-character board glyph
    ///
    /// Chess pieces use the usual uppercase letters, a plain checker is `o`
    /// and a crowned checker `@`.
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
            PieceKind::Checker => 'o',
            PieceKind::CrownedChecker => '@',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        PieceKind::ALL.into_iter().find(|kind| kind.glyph() == c)
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Rook => "rook",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
            PieceKind::Checker => "checker",
            PieceKind::CrownedChecker => "crowned checker",
        };
        f.write_str(name)
    }
}

/// Board-unique piece identity
///
/// Handed out by [`crate::game::rules::BoardState`] when a piece is spawned.
/// Promotion spawns a fresh id, so an id never changes kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece standing on the board
///
/// Owned by exactly one [`crate::game::rules::Cell`]; `position` always
/// mirrors the owning cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub team: Team,
    pub position: Position,
    /// Only consulted for the pawn double step
    pub has_moved: bool,
}

impl Piece {
    pub(crate) fn new(id: PieceId, kind: PieceKind, team: Team, position: Position) -> Self {
        Piece {
            id,
            kind,
            team,
            position,
            has_moved: false,
        }
    }

    /// Ordered movement policy for this piece's kind
    pub fn deltas(&self) -> &'static [Delta] {
        movement_policy(self.kind)
    }

    pub fn is_checker_family(&self) -> bool {
        self.kind.is_checker_family()
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} at {}", self.team, self.kind, self.id, self.position)
    }
}
