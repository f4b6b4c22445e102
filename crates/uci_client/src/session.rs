//! Request/response driver for one UCI conversation.

use crate::error::EngineError;
use crate::protocol::{Command, Reply};
use chess_core::{parse_uci_move, Game, Move};
use std::io::{BufRead, Write};
use std::time::Duration;
use tracing::{debug, trace};

/// One conversation with an engine over a reader/writer pair.
///
/// Every call blocks until the engine produces the reply it waits for; there
/// is no timeout and no cancellation.
pub struct UciSession<R, W> {
    reader: R,
    writer: W,
    engine_name: Option<String>,
}

impl<R: BufRead, W: Write> UciSession<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader,
            writer,
            engine_name: None,
        }
    }

    /// Name the engine announced during the handshake.
    pub fn engine_name(&self) -> Option<&str> {
        self.engine_name.as_deref()
    }

    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    pub fn send(&mut self, command: Command<'_>) -> Result<(), EngineError> {
        debug!(target: "uci", "> {command}");
        writeln!(self.writer, "{command}")?;
        self.writer.flush()?;
        Ok(())
    }

    fn read_reply(&mut self, waiting_for: &'static str) -> Result<Reply, EngineError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(EngineError::Closed(waiting_for));
        }
        trace!(target: "uci", "< {}", line.trim_end());
        Ok(Reply::parse(&line))
    }

    /// `uci` / `uciok`, then options, then `ucinewgame` and a ready check.
    pub fn handshake(&mut self, options: &[(String, String)]) -> Result<(), EngineError> {
        self.send(Command::Uci)?;
        loop {
            match self.read_reply("uciok")? {
                Reply::UciOk => break,
                Reply::IdName(name) => self.engine_name = Some(name),
                _ => {}
            }
        }

        for (name, value) in options {
            self.send(Command::SetOption {
                name: name.as_str(),
                value: value.as_str(),
            })?;
        }
        self.send(Command::UciNewGame)?;
        self.sync()
    }

    /// `isready` / `readyok`.
    pub fn sync(&mut self) -> Result<(), EngineError> {
        self.send(Command::IsReady)?;
        while self.read_reply("readyok")? != Reply::ReadyOk {}
        Ok(())
    }

    /// Ask for a move in `position` (the arguments of a `position` command)
    /// and return it in UCI notation.
    pub fn best_move(&mut self, position: &str, budget: Duration) -> Result<String, EngineError> {
        self.send(Command::Position(position))?;
        self.sync()?;
        self.send(Command::GoMoveTime(budget))?;
        loop {
            if let Reply::BestMove { mv, .. } = self.read_reply("bestmove")? {
                return mv.ok_or_else(|| EngineError::NoMove(position.to_string()));
            }
        }
    }

    /// Engine reply for `game`, checked against the game's legal moves.
    pub fn request_move(&mut self, game: &Game, budget: Duration) -> Result<Move, EngineError> {
        let position = game.uci_position();
        let txt = self.best_move(&position, budget)?;
        parse_uci_move(game.board(), &txt)
            .ok_or_else(|| EngineError::IllegalMove { mv: txt, position })
    }

    pub fn quit(&mut self) -> Result<(), EngineError> {
        self.send(Command::Quit)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
