//! Turn state management for game flow control
//!
//! Tracks whose turn it is and where we are within that turn, so the engine
//! can refuse requests that do not fit the current phase.

use crate::game::types::Team;
use serde::{Deserialize, Serialize};

/// Turn flow state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the team on move to select a piece
    ///
    /// Valid transitions: → PieceSelected
    #[default]
    AwaitingSelection,

    /// A piece is selected and its destinations are exposed
    ///
    /// Valid transitions: → PieceSelected (reselect), → AwaitingSelection
    /// (cancel or turn switch), → ChainCapture, → GameOver
    PieceSelected,

    /// A checker just captured and must keep hopping with the same piece
    ///
    /// Valid transitions: → ChainCapture, → AwaitingSelection, → GameOver
    ChainCapture,

    /// Game has ended
    ///
    /// Terminal state
    GameOver,
}

impl TurnPhase {
    /// Check if this state allows piece selection
    pub fn accepts_selection(&self) -> bool {
        matches!(
            self,
            TurnPhase::AwaitingSelection | TurnPhase::PieceSelected | TurnPhase::ChainCapture
        )
    }

    /// Check if a piece is currently selected
    pub fn has_selection(&self) -> bool {
        matches!(self, TurnPhase::PieceSelected | TurnPhase::ChainCapture)
    }
}

/// Combines current team with turn phase
///
/// Provides context about both WHOSE turn it is and WHAT PHASE of the turn
/// we're in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStateContext {
    /// Whose turn is it?
    pub current_team: Team,

    /// What phase of the turn are we in?
    pub phase: TurnPhase,

    /// Move number (increments when play returns to the first team)
    pub move_number: u32,

    /// Team that opened the game
    pub first_team: Team,
}

impl Default for TurnStateContext {
    fn default() -> Self {
        Self::new(Team::Checkers)
    }
}

impl TurnStateContext {
    pub fn new(first_team: Team) -> Self {
        Self {
            current_team: first_team,
            phase: TurnPhase::AwaitingSelection,
            move_number: 1,
            first_team,
        }
    }

    /// Transition to the next turn phase
    ///
    /// # Panics
    /// In debug builds, panics if the transition is invalid
    pub fn transition_to(&mut self, next_phase: TurnPhase) {
        #[cfg(debug_assertions)]
        {
            let valid = match (self.phase, next_phase) {
                (TurnPhase::AwaitingSelection, TurnPhase::PieceSelected) => true,
                (TurnPhase::PieceSelected, TurnPhase::PieceSelected) => true,
                (TurnPhase::PieceSelected, TurnPhase::AwaitingSelection) => true,
                (TurnPhase::PieceSelected, TurnPhase::ChainCapture) => true,
                (TurnPhase::PieceSelected, TurnPhase::GameOver) => true,
                (TurnPhase::ChainCapture, TurnPhase::ChainCapture) => true,
                (TurnPhase::ChainCapture, TurnPhase::AwaitingSelection) => true,
                (TurnPhase::ChainCapture, TurnPhase::GameOver) => true,
                (TurnPhase::GameOver, _) => false, // Terminal state
                _ => false,
            };

            if !valid {
                panic!(
                    "Invalid turn state transition: {:?} -> {:?}",
                    self.phase, next_phase
                );
            }
        }

        self.phase = next_phase;
    }

    /// Switch to the other team's turn
    ///
    /// Increments move number when play returns to the first team and resets
    /// to AwaitingSelection.
    pub fn switch_turn(&mut self) {
        self.current_team = self.current_team.opponent();
        if self.current_team == self.first_team {
            self.move_number += 1;
        }
        self.transition_to(TurnPhase::AwaitingSelection);
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == TurnPhase::GameOver
    }
}
