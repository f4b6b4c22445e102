use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures talking to the engine. None of them are retried.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start engine {}", .path.display())]
    Spawn {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("engine process has no {0} pipe")]
    MissingPipe(&'static str),

    #[error("engine I/O failed")]
    Io(#[from] io::Error),

    #[error("engine closed its output while we waited for {0}")]
    Closed(&'static str),

    #[error("engine reported no move for position {0:?}")]
    NoMove(String),

    #[error("engine played {mv:?}, which is not legal in position {position:?}")]
    IllegalMove { mv: String, position: String },

    #[error("engine handle was poisoned by an earlier panic")]
    Poisoned,

    #[error("engine has already been shut down")]
    ShutDown,
}
