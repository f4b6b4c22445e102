//! Chess board GUI
//!
//! Play White against a UCI engine:
//! - Drag a piece with the mouse to move it
//! - The engine answers as Black after every legal move
//! - Check, checkmate and draws are highlighted on the board
//!
//! Usage: `chess_board [CONFIG.toml]`

mod app;
mod board;
mod config;
mod engine;
mod game;
mod input;
mod render;
mod sprites;
mod styles;

use anyhow::{bail, Context};
use app::{ChessApp, FatalSlot};
use config::AppConfig;
use engine::SharedEngine;
use sprites::SpriteSet;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uci_client::EngineProcess;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = AppConfig::resolve(config_path.as_deref()).context("loading configuration")?;

    let sprites = SpriteSet::load(&config.assets_dir).with_context(|| {
        format!(
            "loading piece sprites from {}",
            config.assets_dir.display()
        )
    })?;

    let engine = EngineProcess::spawn(
        &config.engine_path,
        &config.engine_args,
        &config.uci_options(),
    )
    .with_context(|| format!("starting engine {}", config.engine_path.display()))?;
    let engine = SharedEngine::new(engine);

    let fatal = FatalSlot::default();
    let board_size = config.board_size();
    let app_engine = engine.clone();
    let app_fatal = fatal.clone();

    let result = iced::application("Chess", ChessApp::update, ChessApp::view)
        .subscription(ChessApp::subscription)
        .theme(ChessApp::theme)
        .window_size((board_size, board_size))
        .resizable(false)
        .exit_on_close_request(false)
        .run_with(move || ChessApp::new(&config, sprites, app_engine, app_fatal));

    // No-op when the app already released the engine
    engine.shutdown();
    result.context("window system failed")?;

    if let Some(reason) = fatal.get() {
        bail!("engine failure: {reason}");
    }
    Ok(())
}
