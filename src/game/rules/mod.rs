//! Game rules module - Pure rule logic without engine coupling
//!
//! Implements board storage, starting layouts and move generation as plain
//! data plus pure functions, so everything here can be tested without a
//! running [`crate::game::engine::TurnEngine`].
//!
//! # Module Structure
//!
//! - `deltas` - Declarative movement policy per piece kind
//! - `piece_moves` - Delta interpreter, checker hop generator, capture and promotion rules
//! - `board_state` - Authoritative grid of cells and piece lifecycle
//! - `layout` - Starting layout tables

pub mod board_state;
pub mod deltas;
pub mod layout;
pub mod piece_moves;


pub use board_state::{BoardState, Cell};
pub use deltas::{movement_policy, Delta, MoveMode};
pub use layout::{Placement, StartingLayout};
pub use piece_moves::{capture_square, get_attack_moves, get_possible_moves, promotion_for};
