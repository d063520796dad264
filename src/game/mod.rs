//! Hybrid chess/checkers game logic
//!
//! A chess army and a checkers army share one 8×8 board. Pure rule code lives
//! in `rules`, turn state in `resources`, and [`engine::TurnEngine`] ties them
//! together behind a select/move API.
//!
//! # Module Organization
//!
//! - `types` - Board coordinates and teams
//! - `components` - Piece data (kind, team, id, position)
//! - `rules` - Board state, movement tables and move generation
//! - `resources` - Turn phase, selection, captures, history, game over
//! - `events` - Notifications for the presentation layer
//! - `engine` - Turn orchestration, chain capture, promotion, win detection
//! - `error` - Error types shared by all of the above

pub mod components;
pub mod engine;
pub mod error;
pub mod events;
pub mod resources;
pub mod rules;
pub mod types;

pub use engine::{MoveOutcome, SelectableEntities, TurnEngine};
pub use error::{GameError, GameResult, SelectionRejected};
pub use events::GameEvent;
pub use types::{Position, Team};
