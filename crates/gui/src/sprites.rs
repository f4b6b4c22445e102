//! Piece sprites, loaded once at startup

use chess_core::{piece_symbol, Color, Piece};
use iced::widget::svg;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum SpriteError {
    #[error("cannot read sprite {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("sprite {} is not an SVG image", .path.display())]
    NotSvg { path: PathBuf },
}

/// One of the twelve piece images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteKey {
    pub color: Color,
    pub piece: Piece,
}

impl SpriteKey {
    pub const COUNT: usize = 12;

    pub fn new(color: Color, piece: Piece) -> Self {
        Self { color, piece }
    }

    /// All keys, in [`SpriteKey::index`] order.
    pub fn all() -> impl Iterator<Item = SpriteKey> {
        Color::ALL
            .into_iter()
            .flat_map(|color| Piece::ALL.into_iter().map(move |piece| SpriteKey { color, piece }))
    }

    pub fn index(self) -> usize {
        self.color as usize * Piece::ALL.len() + self.piece as usize
    }

    /// `P.svg` for a white pawn, `p.svg` for a black one, and so on.
    pub fn file_name(self) -> String {
        format!("{}.svg", piece_symbol(self.color, self.piece))
    }
}

/// Sprite handles indexed by [`SpriteKey::index`].
#[derive(Debug, Clone)]
pub struct SpriteSet {
    handles: Vec<svg::Handle>,
}

impl SpriteSet {
    /// Read every sprite from `dir`. Any missing, empty or non-SVG file fails
    /// the whole load.
    pub fn load(dir: &Path) -> Result<Self, SpriteError> {
        let mut handles = Vec::with_capacity(SpriteKey::COUNT);
        for key in SpriteKey::all() {
            let path = dir.join(key.file_name());
            let bytes = std::fs::read(&path).map_err(|source| SpriteError::Read {
                path: path.clone(),
                source,
            })?;
            if !looks_like_svg(&bytes) {
                return Err(SpriteError::NotSvg { path });
            }
            debug!(path = %path.display(), bytes = bytes.len(), "loaded sprite");
            handles.push(svg::Handle::from_memory(bytes));
        }
        Ok(Self { handles })
    }

    pub fn get(&self, key: SpriteKey) -> &svg::Handle {
        &self.handles[key.index()]
    }
}

fn looks_like_svg(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes)
        .map(|s| s.contains("<svg"))
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "sprites_tests.rs"]
mod sprites_tests;
