//! A spawned engine subprocess.

use crate::error::EngineError;
use crate::session::UciSession;
use chess_core::{Game, Move};
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// How long the engine gets to exit on its own after `quit`.
const QUIT_GRACE: Duration = Duration::from_secs(1);
const QUIT_POLL: Duration = Duration::from_millis(20);

/// Long-lived engine subprocess, started once and shut down once.
///
/// Dropping the value shuts the engine down if [`EngineProcess::shutdown`]
/// was not called, so the child never outlives its owner.
pub struct EngineProcess {
    path: PathBuf,
    child: Child,
    session: UciSession<BufReader<ChildStdout>, ChildStdin>,
    shut_down: bool,
}

impl EngineProcess {
    /// Start the engine and complete the UCI handshake.
    pub fn spawn(
        path: &Path,
        args: &[String],
        options: &[(String, String)],
    ) -> Result<Self, EngineError> {
        let mut child = Command::new(path)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| EngineError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        let stdin = child.stdin.take().ok_or(EngineError::MissingPipe("stdin"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or(EngineError::MissingPipe("stdout"))?;

        let mut engine = Self {
            path: path.to_path_buf(),
            child,
            session: UciSession::new(BufReader::new(stdout), stdin),
            shut_down: false,
        };
        // On failure `engine` drops here, which reaps the child
        engine.session.handshake(options)?;

        info!(
            engine = engine.session.engine_name().unwrap_or("unknown"),
            path = %engine.path.display(),
            "engine ready"
        );
        Ok(engine)
    }

    pub fn name(&self) -> Option<&str> {
        self.session.engine_name()
    }

    /// Blocking request for the engine's move in `game`.
    pub fn request_move(&mut self, game: &Game, budget: Duration) -> Result<Move, EngineError> {
        if self.shut_down {
            return Err(EngineError::ShutDown);
        }
        self.session.request_move(game, budget)
    }

    /// Send `quit` and reap the child, killing it if it lingers.
    /// Later calls are no-ops.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;

        if let Err(e) = self.session.quit() {
            warn!(error = %e, "engine did not accept quit");
        }

        let deadline = Instant::now() + QUIT_GRACE;
        loop {
            match self.child.try_wait() {
                Ok(Some(status)) => {
                    info!(%status, "engine exited");
                    return;
                }
                Ok(None) if Instant::now() < deadline => thread::sleep(QUIT_POLL),
                Ok(None) => break,
                Err(e) => {
                    warn!(error = %e, "could not poll engine process");
                    break;
                }
            }
        }

        warn!(path = %self.path.display(), "engine ignored quit, killing it");
        if let Err(e) = self.child.kill() {
            warn!(error = %e, "failed to kill engine");
        }
        let _ = self.child.wait();
    }
}

impl Drop for EngineProcess {
    fn drop(&mut self) {
        self.shutdown();
    }
}
