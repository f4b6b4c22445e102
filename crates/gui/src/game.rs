//! Game session: the rules state plus whose turn it is to act

use crate::input::{CandidateMove, InputHandler, Selection};
use chess_core::{color_name, ChessError, Color, Game, Move, Square};
use tracing::{debug, info, warn};

/// Top-level state of the play loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Pointer input goes to the input handler
    HumanToMove,
    /// An engine request is in flight; pointer input is ignored
    AwaitingEngine,
    /// The position is terminal
    Finished,
}

/// Human versus engine game state
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    input: InputHandler,
    human: Color,
    phase: Phase,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(Game::new(), Color::White)
    }
}

impl GameSession {
    pub fn new(game: Game, human: Color) -> Self {
        let mut session = Self {
            game,
            input: InputHandler::new(human),
            human,
            phase: Phase::HumanToMove,
        };
        session.phase = session.next_phase();
        session
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> Selection {
        self.input.selection()
    }

    /// Snapshot for the engine when it is the engine's turn.
    pub fn engine_request(&self) -> Option<Game> {
        (self.phase == Phase::AwaitingEngine).then(|| self.game.clone())
    }

    pub fn pointer_pressed(&mut self, square: Option<Square>) {
        if self.phase != Phase::HumanToMove {
            debug!(phase = ?self.phase, "ignoring press");
            return;
        }
        self.input.press(square, &self.game);
    }

    /// Handle a release. Returns the position to send to the engine when the
    /// human's move was accepted and the game goes on.
    pub fn pointer_released(&mut self, square: Option<Square>) -> Option<Game> {
        if self.phase != Phase::HumanToMove {
            self.input.reset();
            return None;
        }
        let candidate = self.input.release(square)?;
        self.try_human_move(candidate);
        self.engine_request()
    }

    /// Illegal candidates are dropped without a message.
    fn try_human_move(&mut self, candidate: CandidateMove) {
        let Some(mv) = self.game.find_move(candidate.from, candidate.to) else {
            debug!(from = %candidate.from, to = %candidate.to, "discarding illegal move");
            return;
        };
        if let Err(e) = self.apply(mv) {
            // find_move only returns legal moves
            warn!(error = %e, "rules rejected a generated move");
        }
    }

    /// Apply the engine's reply. Replies outside `AwaitingEngine` are stale
    /// and ignored.
    pub fn engine_replied(&mut self, mv: Move) -> Result<(), ChessError> {
        if self.phase != Phase::AwaitingEngine {
            warn!(%mv, phase = ?self.phase, "ignoring engine move");
            return Ok(());
        }
        self.apply(mv)
    }

    fn apply(&mut self, mv: Move) -> Result<(), ChessError> {
        let mover = self.game.side_to_move();
        self.game.push(mv)?;
        if let Some(uci) = self.game.played_moves().last() {
            info!(side = color_name(mover), mv = %uci, "move played");
        }
        self.phase = self.next_phase();
        if let Some(outcome) = self.game.outcome() {
            info!(?outcome, "game over");
        }
        Ok(())
    }

    fn next_phase(&self) -> Phase {
        if self.game.is_game_over() {
            Phase::Finished
        } else if self.game.side_to_move() == self.human {
            Phase::HumanToMove
        } else {
            Phase::AwaitingEngine
        }
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
