//! Game over state tracking
//!
//! The hybrid game has exactly two ways to end, and neither involves check:
//!
//! - **King captured**: a checker hops the chess king, checkers win at once
//! - **All checkers captured**: the chess team has taken every checker-family
//!   piece that started the game, chess wins
//!
//! # State Transitions
//!
//! ```text
//! Playing → Won { winner, reason }
//! ```
//!
//! `Won` is terminal; only a reset returns to `Playing`.

use crate::game::types::Team;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WinReason {
    /// The chess king was captured
    KingCaptured,
    /// Every checker-family piece was captured
    AllCheckersCaptured,
}

impl WinReason {
    /// Team that wins for this reason
    pub fn winner(self) -> Team {
        match self {
            WinReason::KingCaptured => Team::Checkers,
            WinReason::AllCheckersCaptured => Team::Chess,
        }
    }
}

impl fmt::Display for WinReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinReason::KingCaptured => f.write_str("king captured"),
            WinReason::AllCheckersCaptured => f.write_str("all checkers captured"),
        }
    }
}

/// The game's end state
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum GameOverState {
    /// Game is still in progress
    #[default]
    Playing,

    /// One team has won
    Won { winner: Team, reason: WinReason },
}

impl GameOverState {
    pub fn from_reason(reason: WinReason) -> Self {
        GameOverState::Won {
            winner: reason.winner(),
            reason,
        }
    }

    /// Check if the game has ended
    pub fn is_game_over(&self) -> bool {
        !matches!(self, GameOverState::Playing)
    }

    /// Get the winner of the game, if there is one
    pub fn winner(&self) -> Option<Team> {
        match self {
            GameOverState::Won { winner, .. } => Some(*winner),
            GameOverState::Playing => None,
        }
    }

    /// Human-readable result message
    pub fn message(&self) -> String {
        match self {
            GameOverState::Playing => "Game in progress".to_string(),
            GameOverState::Won { winner, reason } => format!("{} wins: {}!", winner, reason),
        }
    }
}
