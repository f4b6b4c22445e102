//! Main application state and logic

use crate::board::BoardView;
use crate::config::AppConfig;
use crate::engine::SharedEngine;
use crate::game::GameSession;
use crate::input::square_at;
use crate::render::RenderFrame;
use crate::sprites::SpriteSet;

use chess_core::{Game, Move, Square};
use iced::widget::mouse_area;
use iced::{keyboard, window, Element, Point, Subscription, Task, Theme};
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use tracing::{debug, error, info};

/// Reason the application gave up, read by `main` after the window closes.
pub type FatalSlot = Arc<OnceLock<String>>;

/// Main application state
pub struct ChessApp {
    /// Rules state and play-loop phase
    session: GameSession,
    /// Piece images
    sprites: SpriteSet,
    /// Black's engine
    engine: SharedEngine,
    /// Engine thinking time per move
    think_time: Duration,
    /// Pixels per board square
    square_size: f32,
    /// Last pointer position over the board
    pointer: Option<Point>,
    fatal: FatalSlot,
}

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // Pointer over the board
    PointerMoved(Point),
    PointerLeft,
    PointerPressed,
    PointerReleased,

    // Engine
    EngineMoved(Result<Move, String>),

    // Window close request or Escape
    Quit,
}

impl ChessApp {
    pub fn new(
        config: &AppConfig,
        sprites: SpriteSet,
        engine: SharedEngine,
        fatal: FatalSlot,
    ) -> (Self, Task<Message>) {
        let app = Self {
            session: GameSession::default(),
            sprites,
            engine,
            think_time: config.think_time(),
            square_size: config.square_size,
            pointer: None,
            fatal,
        };
        // Only non-empty when the engine has the first move
        let task = match app.session.engine_request() {
            Some(game) => app.request_engine_move(game),
            None => Task::none(),
        };
        (app, task)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            window::close_requests().map(|_id| Message::Quit),
            keyboard::on_key_press(|key, _modifiers| match key {
                keyboard::Key::Named(keyboard::key::Named::Escape) => Some(Message::Quit),
                _ => None,
            }),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PointerMoved(point) => {
                self.pointer = Some(point);
                Task::none()
            }

            Message::PointerLeft => {
                self.pointer = None;
                Task::none()
            }

            Message::PointerPressed => {
                let square = self.pointer_square();
                self.session.pointer_pressed(square);
                debug!(?square, selection = ?self.session.selection(), "press");
                Task::none()
            }

            Message::PointerReleased => {
                let square = self.pointer_square();
                let request = self.session.pointer_released(square);
                debug!(?square, phase = ?self.session.phase(), "release");
                match request {
                    Some(game) => self.request_engine_move(game),
                    None => Task::none(),
                }
            }

            Message::EngineMoved(Ok(mv)) => {
                if let Err(e) = self.session.engine_replied(mv) {
                    return self.fail(format!("engine move rejected: {e}"));
                }
                Task::none()
            }

            Message::EngineMoved(Err(reason)) => self.fail(reason),

            Message::Quit => {
                info!("quit requested");
                self.engine.shutdown();
                iced::exit()
            }
        }
    }

    fn pointer_square(&self) -> Option<Square> {
        let point = self.pointer?;
        square_at(point.x, point.y, self.square_size)
    }

    /// Ask the engine for its move on tokio's blocking pool.
    fn request_engine_move(&self, game: Game) -> Task<Message> {
        let engine = self.engine.clone();
        let budget = self.think_time;
        info!(position = %game.uci_position(), "engine thinking");

        Task::perform(
            async move {
                tokio::task::spawn_blocking(move || engine.request_move(&game, budget))
                    .await
                    .map_err(|e| format!("engine worker failed: {e}"))?
                    .map_err(|e| format!("{:#}", anyhow::Error::new(e)))
            },
            Message::EngineMoved,
        )
    }

    /// Engine failures end the program: record why, release the engine and
    /// close the window.
    fn fail(&mut self, reason: String) -> Task<Message> {
        error!(%reason, "fatal engine error");
        let _ = self.fatal.set(reason);
        self.engine.shutdown();
        iced::exit()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let frame = RenderFrame::compute(self.session.game());
        let board = BoardView::new(frame, &self.sprites, self.square_size).view();

        mouse_area(board)
            .on_move(Message::PointerMoved)
            .on_exit(Message::PointerLeft)
            .on_press(Message::PointerPressed)
            .on_release(Message::PointerReleased)
            .into()
    }
}
