//! UCI commands we send and the replies we understand.

use std::fmt;
use std::time::Duration;

/// A GUI-to-engine command. `Display` renders the exact protocol line
/// without the trailing newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    Uci,
    IsReady,
    UciNewGame,
    SetOption { name: &'a str, value: &'a str },
    /// Arguments after `position`, e.g. `startpos moves e2e4`
    Position(&'a str),
    GoMoveTime(Duration),
    Quit,
}

impl fmt::Display for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Uci => write!(f, "uci"),
            Command::IsReady => write!(f, "isready"),
            Command::UciNewGame => write!(f, "ucinewgame"),
            Command::SetOption { name, value } => {
                write!(f, "setoption name {name} value {value}")
            }
            Command::Position(args) => write!(f, "position {args}"),
            // Engines reject a zero movetime, so round up to at least 1ms
            Command::GoMoveTime(budget) => {
                write!(f, "go movetime {}", budget.as_millis().max(1))
            }
            Command::Quit => write!(f, "quit"),
        }
    }
}

/// An engine-to-GUI line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    IdName(String),
    UciOk,
    ReadyOk,
    /// `bestmove`; `mv` is `None` for `(none)` or `0000`
    BestMove {
        mv: Option<String>,
        ponder: Option<String>,
    },
    Info(String),
    Other(String),
}

impl Reply {
    pub fn parse(line: &str) -> Reply {
        let line = line.trim();
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.is_empty() {
            return Reply::Other(String::new());
        }

        match parts[0] {
            "uciok" => Reply::UciOk,
            "readyok" => Reply::ReadyOk,
            "id" if parts.get(1) == Some(&"name") => Reply::IdName(parts[2..].join(" ")),
            "info" => Reply::Info(parts[1..].join(" ")),
            "bestmove" => {
                let mv = parts
                    .get(1)
                    .filter(|m| !matches!(**m, "(none)" | "0000"))
                    .map(|m| m.to_string());
                let ponder = match parts.get(2) {
                    Some(&"ponder") => parts.get(3).map(|m| m.to_string()),
                    _ => None,
                };
                Reply::BestMove { mv, ponder }
            }
            _ => Reply::Other(line.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod protocol_tests;
