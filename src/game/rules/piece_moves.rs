//! Piece movement rules
//!
//! Interprets a piece's delta table against the board to produce its legal
//! destinations. Pure functions with no side effects - easy to test.
//!
//! Two interpreters exist:
//! - the generic one for chess kinds (slide / step / attack-only /
//!   empty-only, plus the unmoved-pawn double step)
//! - the checker one, where a plain step needs an empty cell and the only
//!   capture is a hop over an adjacent enemy onto the empty cell beyond

use super::board_state::BoardState;
use super::deltas::{Delta, MoveMode};
use crate::game::components::{Piece, PieceKind};
use crate::game::types::{Position, Team, BOARD_SIZE};

/// What a candidate destination holds, from the mover's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    OffBoard,
    Empty,
    Friendly,
    Enemy,
}

fn classify(board: &BoardState, position: Position, team: Team) -> Target {
    if !position.is_on_board() {
        return Target::OffBoard;
    }
    match board.piece_at(position) {
        Ok(None) => Target::Empty,
        Ok(Some(piece)) if piece.team == team => Target::Friendly,
        Ok(Some(_)) => Target::Enemy,
        Err(_) => Target::OffBoard,
    }
}

/// Get all legal destinations for a piece
pub fn get_possible_moves(piece: &Piece, board: &BoardState) -> Vec<Position> {
    if piece.is_checker_family() {
        checker_moves(piece, board, false)
    } else {
        policy_moves(piece, board)
    }
}

/// Get the capturing destinations for a piece
///
/// For checkers these are the hops used to continue a multi-jump. For chess
/// kinds it is the subset of [`get_possible_moves`] landing on an enemy.
pub fn get_attack_moves(piece: &Piece, board: &BoardState) -> Vec<Position> {
    if piece.is_checker_family() {
        checker_moves(piece, board, true)
    } else {
        policy_moves(piece, board)
            .into_iter()
            .filter(|&to| classify(board, to, piece.team) == Target::Enemy)
            .collect()
    }
}

/// Generic delta interpreter for chess kinds
fn policy_moves(piece: &Piece, board: &BoardState) -> Vec<Position> {
    let mut moves = Vec::new();

    for &Delta { d_row, d_col, mode } in piece.deltas() {
        let first = piece.position.offset(d_row, d_col);
        match mode {
            MoveMode::Slide => {
                let mut to = first;
                loop {
                    match classify(board, to, piece.team) {
                        Target::OffBoard | Target::Friendly => break,
                        Target::Empty => moves.push(to),
                        Target::Enemy => {
                            moves.push(to);
                            break;
                        }
                    }
                    to = to.offset(d_row, d_col);
                }
            }
            MoveMode::Step => {
                if matches!(classify(board, first, piece.team), Target::Empty | Target::Enemy) {
                    moves.push(first);
                }
            }
            MoveMode::AttackOnly => {
                if classify(board, first, piece.team) == Target::Enemy {
                    moves.push(first);
                }
            }
            MoveMode::EmptyOnly => {
                if classify(board, first, piece.team) == Target::Empty {
                    moves.push(first);
                    // Unmoved pawns may advance two cells
                    if piece.kind == PieceKind::Pawn && !piece.has_moved {
                        let second = first.offset(d_row, d_col);
                        if classify(board, second, piece.team) == Target::Empty {
                            moves.push(second);
                        }
                    }
                }
            }
        }
    }

    moves
}

/// Two-phase checker generator
///
/// With `attack_only` set the plain diagonal steps are skipped, leaving just
/// the hops.
fn checker_moves(piece: &Piece, board: &BoardState, attack_only: bool) -> Vec<Position> {
    let mut moves = Vec::new();

    for &Delta { d_row, d_col, .. } in piece.deltas() {
        let step = piece.position.offset(d_row, d_col);
        match classify(board, step, piece.team) {
            Target::Empty if !attack_only => moves.push(step),
            Target::Enemy => {
                let hop = step.offset(d_row, d_col);
                if classify(board, hop, piece.team) == Target::Empty {
                    moves.push(hop);
                }
            }
            _ => {}
        }
    }

    moves
}

/// Cell whose occupant is captured when `piece` moves from `from` to `to`
///
/// Checkers capture the cell they hop over; everything else captures on the
/// destination. A plain checker step has no capture square.
pub fn capture_square(kind: PieceKind, from: Position, to: Position) -> Option<Position> {
    if kind.is_checker_family() {
        from.hopped_over(to)
    } else {
        Some(to)
    }
}

/// Kind a piece becomes on reaching `destination`, if it promotes there
pub fn promotion_for(kind: PieceKind, destination: Position) -> Option<PieceKind> {
    match kind {
        PieceKind::Pawn if destination.row == 0 => Some(PieceKind::Queen),
        PieceKind::Checker if destination.row == BOARD_SIZE - 1 => Some(PieceKind::CrownedChecker),
        _ => None,
    }
}
