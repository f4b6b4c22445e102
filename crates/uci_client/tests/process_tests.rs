//! Engine subprocess lifecycle against a scripted shell "engine".

use chess_core::{Game, Square};
use std::path::Path;
use std::time::Duration;
use uci_client::{EngineError, EngineProcess};

/// Answers the handshake and always plays e7e5.
#[cfg(unix)]
const FAKE_ENGINE: &str = r#"
while read -r line; do
  case "$line" in
    uci) echo "id name FakeFish"; echo "uciok" ;;
    isready) echo "readyok" ;;
    go*) echo "bestmove e7e5" ;;
    quit) exit 0 ;;
  esac
done
"#;

#[cfg(unix)]
fn spawn_fake() -> EngineProcess {
    let args = vec!["-c".to_string(), FAKE_ENGINE.to_string()];
    EngineProcess::spawn(Path::new("/bin/sh"), &args, &[]).expect("fake engine starts")
}

#[cfg(unix)]
#[test]
fn test_fake_engine_round_trip() {
    let mut engine = spawn_fake();
    assert_eq!(engine.name(), Some("FakeFish"));

    let mut game = Game::new();
    let e4 = game.find_move(Square::E2, Square::E4).unwrap();
    game.push(e4).unwrap();

    let reply = engine
        .request_move(&game, Duration::from_millis(50))
        .expect("engine replies");
    assert_eq!((reply.from, reply.to), (Square::E7, Square::E5));

    engine.shutdown();
    assert!(matches!(
        engine.request_move(&game, Duration::from_millis(50)),
        Err(EngineError::ShutDown)
    ));
    // Second shutdown is a no-op
    engine.shutdown();
}

#[cfg(unix)]
#[test]
fn test_drop_releases_engine() {
    let engine = spawn_fake();
    drop(engine);
}

#[test]
fn test_missing_executable() {
    let err = EngineProcess::spawn(Path::new("/definitely/not/an/engine"), &[], &[])
        .err()
        .expect("spawn must fail");
    assert!(matches!(err, EngineError::Spawn { .. }));
}
