//! Game resources - engine-wide state singletons
//!
//! Each resource is a single instance owned by the
//! [`crate::game::engine::TurnEngine`].
//!
//! # Resource Categories
//!
//! ## Turn Management
//! - [`TurnStateContext`] - Team on move, move number and turn phase
//! - [`TurnPhase`] - AwaitingSelection / PieceSelected / ChainCapture / GameOver
//!
//! ## Player Interaction
//! - [`Selection`] - Currently selected piece and its legal destinations
//!
//! ## Game History
//! - [`MoveHistory`] - Chronological move records
//! - [`CapturedPieces`] - Pieces taken by each team
//!
//! ## Game Status
//! - [`GameOverState`] - Win conditions

pub mod captured;
pub mod game_over;
pub mod history;
pub mod selection;
pub mod turn_state;

pub use captured::*;
pub use game_over::*;
pub use history::*;
pub use selection::*;
pub use turn_state::*;
