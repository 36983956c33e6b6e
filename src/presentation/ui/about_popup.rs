//! About dialog.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::theme::Theme;

/// Modal with the app name and version, the author and an OK hint.
pub struct AboutPopup<'a> {
    title: &'a str,
    body: &'a str,
    ok_label: &'a str,
    version: &'a str,
    theme: &'a Theme,
}

#[allow(missing_docs)]
impl<'a> AboutPopup<'a> {
    #[must_use]
    pub const fn new(title: &'a str, body: &'a str, theme: &'a Theme) -> Self {
        Self {
            title,
            body,
            ok_label: "OK",
            version: "",
            theme,
        }
    }

    #[must_use]
    pub const fn ok_label(mut self, label: &'a str) -> Self {
        self.ok_label = label;
        self
    }

    #[must_use]
    pub const fn version(mut self, version: &'a str) -> Self {
        self.version = version;
        self
    }
}

impl Widget for AboutPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [popup] = Layout::horizontal([Constraint::Max(48)])
            .flex(Flex::Center)
            .areas(area);
        let [popup] = Layout::vertical([Constraint::Length(8)])
            .flex(Flex::Center)
            .areas(popup);

        if popup.is_empty() {
            return;
        }

        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(self.theme.border_style)
            .title(Line::styled(format!(" {} ", self.title), self.theme.title_style))
            .title_alignment(Alignment::Center);

        let lines = vec![
            Line::styled(
                format!("{} {}", crate::NAME, self.version).trim_end().to_string(),
                self.theme.title_style,
            ),
            Line::default(),
            Line::raw(self.body.to_string()),
            Line::default(),
            Line::styled(format!("[ {} ]", self.ok_label), self.theme.selection_style),
        ];

        Clear.render(popup, buf);
        Paragraph::new(lines)
            .block(block)
            .style(self.theme.base_style)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(popup, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_popup_shows_author_and_ok() {
        let area = Rect::new(0, 0, 80, 20);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();

        AboutPopup::new("Acerca de", "Desarrollado por alguien", &theme)
            .ok_label("Aceptar")
            .version("0.1.0")
            .render(area, &mut buf);

        let text: String = (0..area.height)
            .flat_map(|y| (0..area.width).map(move |x| (x, y)))
            .map(|pos| buf[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Acerca de"));
        assert!(text.contains("pikdex 0.1.0"));
        assert!(text.contains("Desarrollado por alguien"));
        assert!(text.contains("[ Aceptar ]"));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let area = Rect::new(0, 0, 0, 0);
        let mut buf = Buffer::empty(area);
        AboutPopup::new("a", "b", &Theme::default()).render(area, &mut buf);
    }
}
