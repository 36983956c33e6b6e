use crate::domain::keybinding::Keybind;
use crate::domain::{Locale, TextResolver};
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// One footer hint: a localized label and the key that triggers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterItem {
    /// Localized action name.
    pub label: String,
    /// Display name of the key.
    pub key: String,
}

impl FooterItem {
    /// Resolves the footer-visible bindings in `locale`.
    #[must_use]
    pub fn from_bindings(
        bindings: &[Keybind],
        text: &dyn TextResolver,
        locale: Locale,
    ) -> Vec<Self> {
        bindings
            .iter()
            .filter(|binding| binding.visible_in_bar)
            .map(|binding| Self {
                label: text.resolve(&binding.label, locale),
                key: binding.key_name(),
            })
            .collect()
    }
}

/// Colors of the footer bar.
#[allow(missing_docs)]
pub struct FooterBarStyle {
    pub background: Style,
    pub label_style: Style,
    pub key_style: Style,
    pub info: Style,
}

impl FooterBarStyle {
    /// Derives the footer colors from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        use crate::presentation::theme::adapter::ColorConverter;

        let accent = theme.accent;
        let mut key_bg_hsl = ColorConverter::to_hsl(accent);
        key_bg_hsl.l = if theme.is_dark() { 0.08 } else { 0.9 };
        key_bg_hsl.s = 0.5;
        let key_bg = ColorConverter::to_ratatui(key_bg_hsl);

        Self {
            background: theme.base_style,
            label_style: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default()
                .bg(key_bg)
                .fg(theme.base_style.fg.unwrap_or(Color::Reset)),
            info: theme.dimmed_style,
        }
    }
}

impl Default for FooterBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            label_style: Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
            key_style: Style::default().fg(Color::White).bg(Color::DarkGray),
            info: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Key hints on the left, optional info on the right.
pub struct FooterBar<'a> {
    items: &'a [FooterItem],
    right_info: Option<&'a str>,
    style: FooterBarStyle,
}

#[allow(missing_docs)]
impl<'a> FooterBar<'a> {
    #[must_use]
    pub fn new(items: &'a [FooterItem]) -> Self {
        Self {
            items,
            right_info: None,
            style: FooterBarStyle::default(),
        }
    }

    #[must_use]
    pub const fn right_info(mut self, info: Option<&'a str>) -> Self {
        self.right_info = info;
        self
    }

    #[must_use]
    pub const fn style(mut self, style: FooterBarStyle) -> Self {
        self.style = style;
        self
    }

    fn build_left_spans(&self) -> Vec<Span<'_>> {
        let mut spans = Vec::new();

        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }

            spans.push(Span::styled(
                format!(" {} ", item.label),
                self.style.label_style,
            ));
            spans.push(Span::styled(format!(" {} ", item.key), self.style.key_style));
        }

        spans
    }
}

impl Widget for FooterBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let right_width = self
            .right_info
            .map_or(0, |s| u16::try_from(s.width()).unwrap_or(u16::MAX));
        let left_width = area.width.saturating_sub(right_width.saturating_add(1));

        let left_area = Rect::new(area.x, area.y, left_width, 1);
        Paragraph::new(Line::from(self.build_left_spans())).render(left_area, buf);

        if let Some(info) = self.right_info
            && right_width < area.width
        {
            let right_x = area.right().saturating_sub(right_width);
            let right_area = Rect::new(right_x, area.y, right_width, 1);
            Paragraph::new(Span::styled(info, self.style.info)).render(right_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TextRef;
    use crate::domain::keybinding::{KeyContext, bindings_for};

    struct KeyEcho;

    impl TextResolver for KeyEcho {
        fn resolve(&self, reference: &TextRef, _locale: Locale) -> String {
            reference.key().to_uppercase()
        }
    }

    #[test]
    fn test_hidden_bindings_are_skipped() {
        let items = FooterItem::from_bindings(&bindings_for(KeyContext::Detail), &KeyEcho, Locale::Es);

        assert_eq!(
            items,
            vec![FooterItem {
                label: "KEY_BACK".to_string(),
                key: "Esc".to_string(),
            }]
        );
    }

    #[test]
    fn test_render_items_and_info() {
        let items = vec![
            FooterItem {
                label: "Abrir".to_string(),
                key: "Enter".to_string(),
            },
            FooterItem {
                label: "Salir".to_string(),
                key: "q".to_string(),
            },
        ];
        let area = Rect::new(0, 0, 50, 1);
        let mut buf = Buffer::empty(area);

        FooterBar::new(&items)
            .right_info(Some("1/23"))
            .render(area, &mut buf);

        let text: String = (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect();
        assert!(text.starts_with(" Abrir  Enter   Salir  q "));
        assert!(text.ends_with("1/23"));
    }
}
