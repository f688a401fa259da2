//! A single game between two players.
//!
//! `ChessGame` is the stateful wrapper a front end talks to: it only accepts
//! legal moves for the side to move, keeps the game status current after
//! every move and undo, and refuses further play once the game is over.

use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::game_status::game_classifier::{classify, DrawReason, GameStatus};
use crate::move_generation::legal_move_apply::{apply_move, undo_move};
use crate::move_generation::legal_move_generator::{is_legal, legal_moves_from};
use crate::session::game_config::GameConfig;

#[derive(Debug, Clone)]
pub struct ChessGame {
    state: GameState,
    config: GameConfig,
    status: GameStatus,
    started_at: DateTime<Utc>,
    finished_at: Option<DateTime<Utc>>,
}

impl Default for ChessGame {
    fn default() -> Self {
        Self::new()
    }
}

impl ChessGame {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self::from_state(GameState::new_game(), config)
    }

    /// Starts a session from an arbitrary position. The position is
    /// classified immediately, so it may already be finished.
    pub fn from_state(state: GameState, config: GameConfig) -> Self {
        let now = Utc::now();
        let status = classify(&state, config.insufficient_material);
        Self {
            state,
            config,
            status,
            started_at: now,
            finished_at: status.is_finished().then_some(now),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.state.side_to_move()
    }

    #[inline]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[inline]
    pub fn finished_at(&self) -> Option<DateTime<Utc>> {
        self.finished_at
    }

    /// Destinations for the piece on `square`. Empty unless it belongs to
    /// the side to move and the game is still going.
    pub fn legal_moves(&self, square: Square) -> Vec<Square> {
        if self.status.is_finished() {
            return Vec::new();
        }
        match self.state.piece_at(square) {
            Some(piece) if piece.color == self.side_to_move() => {
                legal_moves_from(&self.state, square)
            }
            _ => Vec::new(),
        }
    }

    pub fn play(&mut self, from: Square, to: Square) -> ChessResult<GameStatus> {
        if self.status.is_finished() {
            return Err(ChessError::GameFinished);
        }
        let mover = self.side_to_move();
        if !is_legal(&self.state, from, to, mover) {
            return Err(ChessError::IllegalMove { from, to });
        }

        apply_move(&mut self.state, from, to)?;
        debug!("{mover} played {from}{to}");

        self.reclassify();
        Ok(self.status)
    }

    /// Takes back one ply. Returns `false` when there is nothing to undo, or
    /// when the game is over and the config does not allow reopening it.
    pub fn undo(&mut self) -> bool {
        if self.status.is_finished() && !self.config.undo_after_game_over {
            return false;
        }
        if !undo_move(&mut self.state) {
            return false;
        }
        debug!("undo, {} to move", self.side_to_move());

        self.finished_at = None;
        self.reclassify();
        true
    }

    /// Ends an ongoing game as a draw. Returns the resulting status.
    pub fn agree_draw(&mut self) -> ChessResult<GameStatus> {
        if self.status.is_finished() {
            return Err(ChessError::GameFinished);
        }
        self.finish(GameStatus::Draw(DrawReason::Agreement));
        Ok(self.status)
    }

    fn reclassify(&mut self) {
        let status = classify(&self.state, self.config.insufficient_material);
        if status.is_finished() {
            self.finish(status);
        } else {
            self.status = status;
        }
    }

    fn finish(&mut self, status: GameStatus) {
        self.status = status;
        self.finished_at = Some(Utc::now());
        info!(
            "game over after {} plies: {status}",
            self.state.move_history().len()
        );
    }
}
