//! Game components module
//!
//! Components are plain data structures with no rule logic.

pub mod piece;

#[cfg(test)]
mod tests;

pub use piece::*;
