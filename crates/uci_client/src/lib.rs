//! Client side of the Universal Chess Interface.
//!
//! [`UciSession`] speaks the line protocol over any reader/writer pair;
//! [`EngineProcess`] owns a spawned engine and its pipes and guarantees the
//! child is told to quit (or killed) exactly once.

pub mod error;
pub mod process;
pub mod protocol;
pub mod session;

pub use error::EngineError;
pub use process::EngineProcess;
pub use protocol::{Command, Reply};
pub use session::UciSession;
