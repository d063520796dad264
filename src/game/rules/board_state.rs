//! Authoritative board representation
//!
//! [`BoardState`] owns a `BOARD_SIZE × BOARD_SIZE` grid of [`Cell`]s. Each
//! piece lives inside exactly one cell and its `position` field always equals
//! that cell's position; [`BoardState::place`] is the single mutation path
//! and re-stamps the position on every write.

use crate::game::components::{Piece, PieceId, PieceKind};
use crate::game::error::{GameError, GameResult};
use crate::game::rules::layout::StartingLayout;
use crate::game::types::{check_on_board, Position, Team, BOARD_SIZE};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// One square of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    piece: Option<Piece>,
    /// Highlight flag for the presentation layer; no gameplay effect
    is_active: bool,
}

impl Cell {
    fn new(position: Position) -> Self {
        Cell {
            position,
            piece: None,
            is_active: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

/// Represents the state of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    cells: Vec<Cell>,
    next_id: u32,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardState {
    /// An empty board
    pub fn new() -> Self {
        let cells = (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(Position::new(row, col))))
            .collect();
        BoardState { cells, next_id: 0 }
    }

    /// A board populated with `layout`
    pub fn with_layout(layout: &StartingLayout) -> GameResult<Self> {
        let mut board = Self::new();
        board.initialize(layout)?;
        Ok(board)
    }

    /// Populate the board from a layout table
    ///
    /// The layout is validated first; on error the board is left untouched.
    pub fn initialize(&mut self, layout: &StartingLayout) -> GameResult<()> {
        layout.validate()?;
        self.clear();
        for placement in &layout.placements {
            self.spawn(placement.kind, placement.team, placement.position())?;
        }
        debug!("[BOARD] Initialized with {} pieces", layout.placements.len());
        Ok(())
    }

    /// Clear every cell and re-apply `layout`
    pub fn reset(&mut self, layout: &StartingLayout) -> GameResult<()> {
        layout.validate()?;
        self.next_id = 0;
        self.initialize(layout)
    }

    /// Side length of the grid
    pub fn size(&self) -> i8 {
        BOARD_SIZE
    }

    fn index(position: Position) -> GameResult<usize> {
        if !check_on_board(position) {
            return Err(GameError::out_of_bounds(position));
        }
        Ok(position.row as usize * BOARD_SIZE as usize + position.col as usize)
    }

    /// Cell at `position`
    pub fn cell(&self, position: Position) -> GameResult<&Cell> {
        Ok(&self.cells[Self::index(position)?])
    }

    /// Piece at `position`, if any
    pub fn piece_at(&self, position: Position) -> GameResult<Option<&Piece>> {
        Ok(self.cell(position)?.piece.as_ref())
    }

    pub fn is_empty(&self, position: Position) -> GameResult<bool> {
        Ok(self.piece_at(position)?.is_none())
    }

    /// True when `position` holds a piece of the other team
    pub fn is_enemy(&self, position: Position, team: Team) -> GameResult<bool> {
        Ok(self.piece_at(position)?.is_some_and(|p| p.team != team))
    }

    /// Put `piece` (or nothing) on `position`, returning the previous occupant
    ///
    /// The stored piece's `position` is rewritten to match the cell. Callers
    /// moving a piece must take it from its old cell first so that no piece
    /// is ever held by two cells.
    pub fn place(&mut self, position: Position, piece: Option<Piece>) -> GameResult<Option<Piece>> {
        let index = Self::index(position)?;
        let piece = piece.map(|mut p| {
            p.position = position;
            p
        });
        Ok(std::mem::replace(&mut self.cells[index].piece, piece))
    }

    /// Remove and return whatever stands on `position`
    pub fn take(&mut self, position: Position) -> GameResult<Option<Piece>> {
        self.place(position, None)
    }

    /// Create a new piece with a fresh id on `position`
    ///
    /// Anything already on the cell is dropped.
    pub fn spawn(&mut self, kind: PieceKind, team: Team, position: Position) -> GameResult<PieceId> {
        Self::index(position)?;
        let id = self.next_piece_id();
        self.place(position, Some(Piece::new(id, kind, team, position)))?;
        Ok(id)
    }

    fn next_piece_id(&mut self) -> PieceId {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Destroy the piece on `position` and spawn a `kind` of the same team
    ///
    /// Returns `(old, new)`, or `None` when the cell is empty.
    pub fn replace(&mut self, position: Position, kind: PieceKind) -> GameResult<Option<(Piece, Piece)>> {
        let Some(old) = self.take(position)? else {
            return Ok(None);
        };
        let mut new = Piece::new(self.next_piece_id(), kind, old.team, position);
        new.has_moved = old.has_moved;
        self.place(position, Some(new.clone()))?;
        Ok(Some((old, new)))
    }

    /// Every piece on the board, row-major
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.cells.iter().filter_map(|c| c.piece.as_ref())
    }

    pub fn pieces_of(&self, team: Team) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.team == team)
    }

    /// Look a piece up by identity
    pub fn find(&self, id: PieceId) -> Option<&Piece> {
        self.pieces().find(|p| p.id == id)
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Count checker-family pieces still on the board
    pub fn checker_count(&self) -> usize {
        self.pieces().filter(|p| p.is_checker_family()).count()
    }

    pub fn set_active(&mut self, position: Position, active: bool) -> GameResult<()> {
        let index = Self::index(position)?;
        self.cells[index].is_active = active;
        Ok(())
    }

    pub fn clear_active(&mut self) {
        for cell in &mut self.cells {
            cell.is_active = false;
        }
    }

    /// Positions of highlighted cells
    pub fn active_cells(&self) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.is_active)
            .map(|c| c.position)
            .collect()
    }

    /// Cell and piece positions agree and no id appears twice
    pub fn is_consistent(&self) -> bool {
        let mut ids = HashSet::new();
        self.cells.iter().all(|cell| match &cell.piece {
            Some(piece) => piece.position == cell.position && ids.insert(piece.id),
            None => true,
        })
    }

    fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.piece = None;
            cell.is_active = false;
        }
    }
}

impl fmt::Display for BoardState {
    /// Glyph grid labelled with ranks on the left and files below, row 0 on top
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let cell = &self.cells[row as usize * BOARD_SIZE as usize + col as usize];
                let glyph = match (&cell.piece, cell.is_active) {
                    (Some(piece), _) => piece.kind.glyph(),
                    (None, true) => '*',
                    (None, false) => '.',
                };
                write!(f, " {}", glyph)?;
            }
            writeln!(f)?;
        }
        write!(f, "  ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)
    }
}
