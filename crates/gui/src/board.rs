//! Chess board widget rendering

use crate::render::{Banner, Cell, RenderFrame};
use crate::sprites::SpriteSet;
use crate::styles;
use iced::widget::{center, column, container, horizontal_space, row, stack, svg, text};
use iced::{Background, Element};

/// Renders a computed frame
pub struct BoardView<'a> {
    frame: RenderFrame,
    sprites: &'a SpriteSet,
    square_size: f32,
}

impl<'a> BoardView<'a> {
    pub fn new(frame: RenderFrame, sprites: &'a SpriteSet, square_size: f32) -> Self {
        Self {
            frame,
            sprites,
            square_size,
        }
    }

    /// Create the board view element
    pub fn view<Message: 'a>(&self) -> Element<'a, Message> {
        let mut board_column = column![].spacing(0);

        for cells in &self.frame.rows {
            let mut rank_row = row![].spacing(0);
            for cell in cells {
                rank_row = rank_row.push(self.render_square(cell));
            }
            board_column = board_column.push(rank_row);
        }

        match &self.frame.banner {
            Some(banner) => stack![board_column, center(banner_view(banner))].into(),
            None => board_column.into(),
        }
    }

    /// Render a single square
    fn render_square<Message: 'a>(&self, cell: &Cell) -> Element<'a, Message> {
        let size = self.square_size;
        let fill = cell.fill;

        let content: Element<'a, Message> = match cell.piece {
            Some(key) => svg(self.sprites.get(key).clone())
                .width(size)
                .height(size)
                .into(),
            None => horizontal_space().width(size).into(),
        };

        container(content)
            .width(size)
            .height(size)
            .style(move |_theme| container::Style {
                background: Some(Background::Color(fill)),
                ..Default::default()
            })
            .into()
    }
}

fn banner_view<'a, Message: 'a>(banner: &Banner) -> Element<'a, Message> {
    let background = banner.background;
    container(
        text(banner.text.clone())
            .size(styles::BANNER_TEXT_SIZE)
            .color(banner.text_color),
    )
    .padding(styles::BANNER_PADDING)
    .style(move |_theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    })
    .into()
}
