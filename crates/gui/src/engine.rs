//! Engine handle shared between the UI thread and the blocking worker

use chess_core::{Game, Move};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uci_client::{EngineError, EngineProcess};

/// Cheap to clone; every clone drives the same subprocess.
#[derive(Clone)]
pub struct SharedEngine {
    inner: Arc<Mutex<EngineProcess>>,
}

impl SharedEngine {
    pub fn new(engine: EngineProcess) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    /// Blocks the calling thread for up to `budget` plus engine latency.
    pub fn request_move(&self, game: &Game, budget: Duration) -> Result<Move, EngineError> {
        let mut engine = self.inner.lock().map_err(|_| EngineError::Poisoned)?;
        engine.request_move(game, budget)
    }

    /// Idempotent. Waits for an in-flight request to finish first.
    pub fn shutdown(&self) {
        let mut engine = match self.inner.lock() {
            Ok(engine) => engine,
            Err(poisoned) => poisoned.into_inner(),
        };
        engine.shutdown();
    }
}
