//! Colors and dimensions of the board and the result banner

use iced::Color;

// Board colors
pub const LIGHT_SQUARE: Color = Color::from_rgb(240.0 / 255.0, 234.0 / 255.0, 214.0 / 255.0); // Off-white
pub const DARK_SQUARE: Color = Color::from_rgb(118.0 / 255.0, 150.0 / 255.0, 86.0 / 255.0); // Green
pub const CHECK_SQUARE: Color = Color::from_rgb(1.0, 0.0, 0.0); // King in check
pub const ATTACKER_SQUARE: Color = Color::from_rgb(1.0, 165.0 / 255.0, 0.0); // Checking piece

// Banner colors (text, background)
pub const CHECKMATE_BANNER: (Color, Color) = (Color::WHITE, Color::from_rgb(1.0, 0.0, 0.0));
pub const DRAW_BANNER: (Color, Color) = (Color::WHITE, Color::BLACK);
pub const CHECK_BANNER: (Color, Color) = (Color::BLACK, Color::from_rgb(1.0, 1.0, 0.0));
pub const GAME_OVER_BANNER: (Color, Color) = (
    Color::BLACK,
    Color::from_rgb(200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0),
);

// Dimensions
pub const BANNER_TEXT_SIZE: f32 = 36.0;
pub const BANNER_PADDING: f32 = 10.0;
