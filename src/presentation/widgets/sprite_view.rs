//! Sprite drawing.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::Sprite;

/// Draws a sprite centered in its area, or a placeholder when there is none.
pub struct SpriteView<'a> {
    sprite: Option<Sprite>,
    color: Color,
    placeholder: &'a str,
    style: Style,
}

impl<'a> SpriteView<'a> {
    /// Creates a view for `sprite`; `None` draws the placeholder.
    #[must_use]
    pub fn new(sprite: Option<Sprite>) -> Self {
        Self {
            sprite,
            color: Color::Reset,
            placeholder: "",
            style: Style::default(),
        }
    }

    /// Sets the sprite color.
    #[must_use]
    pub const fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Sets the text drawn when there is no sprite.
    #[must_use]
    pub const fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Base style the sprite is drawn on.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

fn centered_origin(area: Rect, width: usize, height: usize) -> (u16, u16) {
    let width = u16::try_from(width).unwrap_or(u16::MAX);
    let height = u16::try_from(height).unwrap_or(u16::MAX);
    (
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
    )
}

impl Widget for SpriteView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let Some(sprite) = self.sprite else {
            let (x, y) = centered_origin(area, self.placeholder.width(), 1);
            buf.set_stringn(
                x,
                y,
                self.placeholder,
                usize::from(area.right().saturating_sub(x)),
                self.style,
            );
            return;
        };

        let style = self.style.fg(self.color);
        let (x, y) = centered_origin(area, sprite.width(), sprite.height());
        let max_width = usize::from(area.right().saturating_sub(x));

        for (row, line) in (y..area.bottom()).zip(sprite.art.iter()) {
            buf.set_stringn(x, row, line, max_width, style);
        }
    }
}
