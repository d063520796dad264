//! Turn engine - selection, move resolution and win detection
//!
//! [`TurnEngine`] owns the board and every piece of turn state. A front-end
//! drives it with two intents, "select the piece on this cell" and "move the
//! selected piece to this cell", and reads back either the typed result or
//! the queued [`GameEvent`]s.
//!
//! # Move Resolution
//!
//! 1. Re-derive the selected piece's legal destinations and reject anything else
//! 2. Vacate the origin cell
//! 3. Remove whatever stands on the capture square (the hopped cell for checkers)
//! 4. Place the mover, then promote it if it reached its far row
//! 5. King captured → checkers win
//! 6. Checker captured and can capture again → same piece continues
//! 7. Every checker captured → chess wins, otherwise the turn passes

use crate::game::components::Piece;
use crate::game::error::{GameError, GameResult, SelectionRejected};
use crate::game::events::GameEvent;
use crate::game::resources::{
    CapturedPieces, GameOverState, MoveHistory, MoveRecord, Selection, TurnPhase,
    TurnStateContext, WinReason,
};
use crate::game::rules::{
    capture_square, get_attack_moves, get_possible_moves, promotion_for, BoardState,
    StartingLayout,
};
use crate::game::types::{Position, Team};
use serde::Serialize;
use tracing::{debug, info, warn};

/// What a `move_to` call changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    /// The piece now standing on `to` (the new piece after a promotion)
    pub piece: Piece,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Piece>,
    /// The piece that was replaced by promotion
    pub promoted_from: Option<Piece>,
    /// The same piece must capture again before the turn passes
    pub chain_capture: bool,
    pub game_over: GameOverState,
}

/// Everything a picking layer should treat as interactive
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SelectableEntities {
    /// Highlighted destination cells
    pub cells: Vec<Position>,
    /// Pieces the team on move may select
    pub pieces: Vec<Piece>,
}

/// Board plus turn state for one game
#[derive(Debug, Clone)]
pub struct TurnEngine {
    board: BoardState,
    layout: StartingLayout,
    turn: TurnStateContext,
    selection: Selection,
    captured: CapturedPieces,
    history: MoveHistory,
    game_over: GameOverState,
    /// Checker-family pieces at the start; capturing this many wins for chess
    checkers_total: usize,
    events: Vec<GameEvent>,
}

impl TurnEngine {
    /// Create a game from a layout with `first_team` on move
    pub fn new(layout: StartingLayout, first_team: Team) -> GameResult<Self> {
        let board = BoardState::with_layout(&layout)?;
        let checkers_total = board.checker_count();
        info!(
            "[GAME] New game: {} pieces, {} checkers, {} to move",
            board.pieces().count(),
            checkers_total,
            first_team
        );
        Ok(TurnEngine {
            board,
            layout,
            turn: TurnStateContext::new(first_team),
            selection: Selection::default(),
            captured: CapturedPieces::default(),
            history: MoveHistory::default(),
            game_over: GameOverState::Playing,
            checkers_total,
            events: Vec::new(),
        })
    }

    /// Standard layout, checkers move first
    pub fn standard() -> Self {
        Self::new(StartingLayout::standard(), Team::Checkers)
            .unwrap_or_else(|e| unreachable!("standard layout is valid: {e}"))
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn turn(&self) -> &TurnStateContext {
        &self.turn
    }

    pub fn current_team(&self) -> Team {
        self.turn.current_team
    }

    pub fn phase(&self) -> TurnPhase {
        self.turn.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn captured(&self) -> &CapturedPieces {
        &self.captured
    }

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn game_over(&self) -> GameOverState {
        self.game_over
    }

    /// Checker-family pieces taken by the chess team
    pub fn captured_checkers_count(&self) -> usize {
        self.captured.captured_checkers_count()
    }

    pub fn checkers_total(&self) -> usize {
        self.checkers_total
    }

    /// Hand queued events to the caller, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Legal destinations of whatever stands on `position`, ignoring turn order
    pub fn legal_moves_for(&self, position: Position) -> GameResult<Vec<Position>> {
        let piece = self
            .board
            .piece_at(position)?
            .ok_or(SelectionRejected::EmptyCell(position))?;
        Ok(get_possible_moves(piece, &self.board))
    }

    /// Whether any piece of `team` has a legal destination
    pub fn has_any_move(&self, team: Team) -> bool {
        self.board
            .pieces_of(team)
            .any(|piece| !get_possible_moves(piece, &self.board).is_empty())
    }

    /// Select the piece on `position` and expose its destinations
    ///
    /// Selecting another own piece replaces the current selection. During a
    /// multi-jump only the jumping piece may be (re)selected.
    pub fn select_piece(&mut self, position: Position) -> GameResult<Vec<Position>> {
        if !self.turn.phase.accepts_selection() {
            warn!("[SELECT] Rejected {}: game is over", position);
            return Err(SelectionRejected::GameOver.into());
        }

        let piece = self
            .board
            .piece_at(position)?
            .cloned()
            .ok_or(SelectionRejected::EmptyCell(position))?;

        if self.turn.phase == TurnPhase::ChainCapture {
            return match self.selection.selected_position {
                Some(jumping) if jumping == position => Ok(self.selection.possible_moves.clone()),
                Some(jumping) => {
                    warn!("[SELECT] Rejected {}: {} is mid multi-jump", position, jumping);
                    Err(SelectionRejected::ChainCaptureInProgress(jumping).into())
                }
                None => Err(GameError::NoPieceSelected),
            };
        }

        if piece.team != self.turn.current_team {
            warn!(
                "[SELECT] Rejected {}: {} piece on {}'s turn",
                position, piece.team, self.turn.current_team
            );
            return Err(SelectionRejected::WrongTeam {
                position,
                owner: piece.team,
                current: self.turn.current_team,
            }
            .into());
        }

        let moves = get_possible_moves(&piece, &self.board);
        debug!("[SELECT] {} can reach {:?}", piece, moves);

        self.turn.transition_to(TurnPhase::PieceSelected);
        self.set_selection(&piece, moves.clone())?;
        info!("[SELECT] Selected {} ({} destinations)", piece, moves.len());
        Ok(moves)
    }

    /// Cancel the current selection
    pub fn deselect(&mut self) -> GameResult<()> {
        match self.turn.phase {
            TurnPhase::PieceSelected => {
                self.turn.transition_to(TurnPhase::AwaitingSelection);
                self.clear_selection();
                Ok(())
            }
            TurnPhase::ChainCapture => match self.selection.selected_position {
                Some(jumping) => Err(SelectionRejected::ChainCaptureInProgress(jumping).into()),
                None => Err(GameError::NoPieceSelected),
            },
            TurnPhase::AwaitingSelection => Err(GameError::NoPieceSelected),
            TurnPhase::GameOver => Err(SelectionRejected::GameOver.into()),
        }
    }

    /// Move the selected piece to `destination`
    ///
    /// The destination is checked against a freshly generated move set, so
    /// callers cannot push an illegal move through a stale or forged list.
    pub fn move_to(&mut self, destination: Position) -> GameResult<MoveOutcome> {
        if !self.turn.phase.has_selection() {
            warn!("[MOVE] Rejected move to {}: nothing selected", destination);
            return Err(GameError::NoPieceSelected);
        }
        if !destination.is_on_board() {
            return Err(GameError::out_of_bounds(destination));
        }

        let (Some(id), Some(from)) = (self.selection.selected_piece, self.selection.selected_position) else {
            return Err(GameError::NoPieceSelected);
        };
        let piece = match self.board.piece_at(from)? {
            Some(piece) if piece.id == id => piece.clone(),
            _ => {
                warn!("[MOVE] Selected piece {} is no longer on {}", id, from);
                return Err(GameError::NoPieceSelected);
            }
        };

        let chain = self.turn.phase == TurnPhase::ChainCapture;
        let legal = if chain {
            get_attack_moves(&piece, &self.board)
        } else {
            get_possible_moves(&piece, &self.board)
        };
        if !legal.contains(&destination) {
            warn!("[MOVE] Rejected {} -> {}: not a legal destination", from, destination);
            return Err(GameError::IllegalDestination { from, to: destination });
        }

        // Past this point the move is legal and every board access is in bounds.
        let mut moving = self.board.take(from)?.ok_or(GameError::NoPieceSelected)?;

        let capture_at = capture_square(moving.kind, from, destination);
        let captured = match capture_at {
            Some(square) => self.board.take(square)?,
            None => None,
        };

        moving.has_moved = true;
        self.board.place(destination, Some(moving.clone()))?;
        moving.position = destination;
        info!("[MOVE] {} {} {} -> {}", moving.team, moving.kind, from, destination);
        self.events.push(GameEvent::PieceMoved {
            piece: moving.clone(),
            from,
            to: destination,
        });

        if let (Some(victim), Some(at)) = (&captured, capture_at) {
            self.captured.add_capture(victim.team, victim.kind);
            info!("[CAPTURE] {} took {} {} on {}", moving.team, victim.team, victim.kind, at);
            self.events.push(GameEvent::PieceCaptured {
                piece: victim.clone(),
                at,
            });
        }

        let promoted = match promotion_for(moving.kind, destination) {
            Some(kind) => self.board.replace(destination, kind)?,
            None => None,
        };
        let (piece, promoted_from) = match promoted {
            Some((old_piece, new_piece)) => {
                info!("[PROMOTION] {} on {} becomes {}", old_piece.kind, destination, new_piece.kind);
                self.events.push(GameEvent::PiecePromoted {
                    old_piece: old_piece.clone(),
                    new_piece: new_piece.clone(),
                });
                (new_piece, Some(old_piece))
            }
            None => (moving, None),
        };

        self.history.add_move(MoveRecord {
            kind: promoted_from.as_ref().map_or(piece.kind, |old| old.kind),
            team: piece.team,
            from,
            to: destination,
            captured: captured.as_ref().map(|c| c.kind),
            promoted_to: promoted_from.as_ref().map(|_| piece.kind),
            chain,
        });

        let mut chain_capture = false;
        if self.captured.king_captured() {
            self.end_game(WinReason::KingCaptured);
        } else if captured.is_some() && piece.is_checker_family() {
            let hops = get_attack_moves(&piece, &self.board);
            if hops.is_empty() {
                self.finish_turn();
            } else {
                info!("[TURN] {} must continue capturing: {:?}", piece, hops);
                self.turn.transition_to(TurnPhase::ChainCapture);
                self.set_selection(&piece, hops.clone())?;
                self.events.push(GameEvent::ChainCaptureContinues {
                    piece: piece.clone(),
                    destinations: hops,
                });
                chain_capture = true;
            }
        } else {
            self.finish_turn();
        }

        debug_assert!(self.board.is_consistent());

        Ok(MoveOutcome {
            piece,
            from,
            to: destination,
            captured,
            promoted_from,
            chain_capture,
            game_over: self.game_over,
        })
    }

    /// Everything the picking layer should treat as clickable
    pub fn selectable_entities(&self) -> SelectableEntities {
        if self.turn.is_game_over() {
            return SelectableEntities::default();
        }
        let pieces = match (self.turn.phase, self.selection.selected_position) {
            (TurnPhase::ChainCapture, Some(jumping)) => self
                .board
                .piece_at(jumping)
                .ok()
                .flatten()
                .cloned()
                .into_iter()
                .collect(),
            _ => self.board.pieces_of(self.turn.current_team).cloned().collect(),
        };
        SelectableEntities {
            cells: self.board.active_cells(),
            pieces,
        }
    }

    /// Restore the starting layout and clear all turn state
    pub fn reset(&mut self) -> GameResult<()> {
        self.board.reset(&self.layout)?;
        self.turn = TurnStateContext::new(self.turn.first_team);
        self.selection.clear();
        self.captured.clear();
        self.history.clear();
        self.game_over = GameOverState::Playing;
        self.checkers_total = self.board.checker_count();
        self.events.push(GameEvent::GameReset);
        info!("[GAME] Reset, {} to move", self.turn.current_team);
        Ok(())
    }

    /// End of a turn that did not finish the game by king capture
    fn finish_turn(&mut self) {
        if self.checkers_total > 0 && self.captured_checkers_count() >= self.checkers_total {
            self.end_game(WinReason::AllCheckersCaptured);
            return;
        }
        self.turn.switch_turn();
        info!(
            "[TURN] {} to move (move {})",
            self.turn.current_team, self.turn.move_number
        );
        self.events.push(GameEvent::TurnChanged {
            new_team: self.turn.current_team,
        });
        self.clear_selection();
    }

    fn end_game(&mut self, reason: WinReason) {
        self.game_over = GameOverState::from_reason(reason);
        self.turn.transition_to(TurnPhase::GameOver);
        info!("[GAME] {}", self.game_over.message());
        self.events.push(GameEvent::GameEnded {
            winning_team: reason.winner(),
            reason,
        });
        self.clear_selection();
    }

    fn set_selection(&mut self, piece: &Piece, moves: Vec<Position>) -> GameResult<()> {
        self.board.clear_active();
        for &to in &moves {
            self.board.set_active(to, true)?;
        }
        self.events.push(GameEvent::SelectionChanged {
            selected: Some(piece.position),
            destinations: moves.clone(),
        });
        self.selection.select(piece.id, piece.position, moves);
        Ok(())
    }

    fn clear_selection(&mut self) {
        self.board.clear_active();
        self.selection.clear();
        self.events.push(GameEvent::SelectionChanged {
            selected: None,
            destinations: Vec::new(),
        });
    }
}
