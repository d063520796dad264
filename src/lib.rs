//! Rules engine for a hybrid of chess and checkers
//!
//! One team fields a standard chess army, the other twelve checkers. Each
//! side moves by its own rules, checkers capture by hopping, and the game
//! ends when the king falls or every checker has been taken.
//!
//! ```
//! use chesskers::game::{Position, Team, TurnEngine};
//!
//! let mut engine = TurnEngine::standard();
//! engine.select_piece(Position::new(2, 0)).unwrap();
//! engine.move_to(Position::new(3, 1)).unwrap();
//! assert_eq!(engine.current_team(), Team::Chess);
//! ```

pub mod core;
pub mod game;
