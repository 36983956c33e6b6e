use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{Notification, NotificationLevel};
use crate::presentation::theme::Theme;

/// Toast in the top right corner.
pub struct NotificationPopup<'a> {
    notification: &'a Notification,
    title: &'a str,
    theme: &'a Theme,
}

#[allow(missing_docs)]
impl<'a> NotificationPopup<'a> {
    #[must_use]
    pub const fn new(notification: &'a Notification, title: &'a str, theme: &'a Theme) -> Self {
        Self {
            notification,
            title,
            theme,
        }
    }
}

impl Widget for NotificationPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" {} ", self.title);
        let message = &self.notification.message;

        let max_popup_width = 60.min(area.width.saturating_sub(2));
        let width = u16::try_from(message.width())
            .unwrap_or(u16::MAX)
            .max(u16::try_from(title.width()).unwrap_or(0))
            .saturating_add(4)
            .min(max_popup_width);

        let inner_width = width.saturating_sub(2).max(1);
        let content_width = u16::try_from(message.width()).unwrap_or(0);

        let lines = content_width.div_ceil(inner_width);

        let height = lines.saturating_add(3).min(10).max(3);

        let x = area.x + area.width.saturating_sub(width).saturating_sub(2);
        let y = area.y + 2;

        let popup_area = Rect::new(x, y, width, height);

        let intersection = area.intersection(popup_area);
        if intersection.area() == 0 {
            return;
        }

        let color = match self.notification.level {
            NotificationLevel::Info => self.theme.accent,
            NotificationLevel::Warn => Color::Yellow,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(self.theme.base_style.fg(color));

        let para = Paragraph::new(message.as_str())
            .block(block)
            .wrap(Wrap { trim: true })
            .style(Style::default().add_modifier(Modifier::BOLD));

        Clear.render(intersection, buf);
        para.render(intersection, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_in_top_right() {
        let area = Rect::new(0, 0, 80, 10);
        let mut buf = Buffer::empty(area);
        let notice = Notification::info("Se ha seleccionado: Pikmin rojo");

        NotificationPopup::new(&notice, "Pikdex", &Theme::default()).render(area, &mut buf);

        let row: String = (0..area.width).map(|x| buf[(x, 3)].symbol().to_string()).collect();
        assert!(row.contains("Se ha seleccionado: Pikmin rojo"));
        assert_eq!(buf[(0, 3)].symbol(), " ");
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        let notice = Notification::warn("x");
        NotificationPopup::new(&notice, "t", &Theme::default()).render(area, &mut buf);
    }
}
