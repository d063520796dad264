//! Error types for game module
//!
//! Provides custom error types for board access, piece selection and move
//! resolution. Every error is returned before any mutation happens, so a
//! rejected request never leaves the board half-updated.

use super::types::{Position, Team};

/// Why a selection request was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionRejected {
    /// Nothing stands on the requested cell
    #[error("no piece at {0}")]
    EmptyCell(Position),

    /// The piece belongs to the team that is not on move
    #[error("piece at {position} belongs to {owner}, but it is {current}'s turn")]
    WrongTeam {
        position: Position,
        owner: Team,
        current: Team,
    },

    /// The game has already ended
    #[error("the game is over")]
    GameOver,

    /// A multi-jump is underway and only the jumping piece may act
    #[error("piece at {0} must continue its capture")]
    ChainCaptureInProgress(Position),
}

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Position outside the grid
    #[error("Position ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// Selection refused
    #[error("Invalid selection: {0}")]
    InvalidSelection(SelectionRejected),

    /// A move was requested without an active selection
    #[error("No piece selected")]
    NoPieceSelected,

    /// Destination is not among the selected piece's legal moves
    #[error("Illegal destination: {from} cannot move to {to}")]
    IllegalDestination { from: Position, to: Position },

    /// Starting layout table could not be applied
    #[error("Invalid layout: {message}")]
    InvalidLayout { message: String },
}

impl GameError {
    pub fn out_of_bounds(position: Position) -> Self {
        GameError::OutOfBounds {
            row: position.row,
            col: position.col,
        }
    }
}

impl From<SelectionRejected> for GameError {
    fn from(reason: SelectionRejected) -> Self {
        GameError::InvalidSelection(reason)
    }
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
