use crate::domain::Locale;
use crate::presentation::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Colors of the header bar.
#[allow(missing_docs)]
pub struct HeaderBarStyle {
    pub background: Style,
    pub app_name: Style,
    pub version: Style,
    pub title: Style,
    pub locale: Style,
}

impl HeaderBarStyle {
    /// Derives the header colors from `theme`.
    #[must_use]
    pub fn from_theme(theme: &Theme) -> Self {
        use crate::presentation::theme::adapter::ColorConverter;

        let accent = theme.accent;
        let mut version_bg_hsl = ColorConverter::to_hsl(accent);
        version_bg_hsl.l = if theme.is_dark() { 0.12 } else { 0.88 };
        version_bg_hsl.s = 0.5;
        let version_bg = ColorConverter::to_ratatui(version_bg_hsl);
        let foreground = theme.base_style.fg.unwrap_or(Color::Reset);

        Self {
            background: theme.base_style,
            app_name: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            version: Style::default().bg(version_bg).fg(foreground),
            title: theme.title_style,
            locale: Style::default()
                .bg(version_bg)
                .fg(accent)
                .add_modifier(Modifier::BOLD),
        }
    }
}

impl Default for HeaderBarStyle {
    fn default() -> Self {
        Self {
            background: Style::default(),
            app_name: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            version: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
            locale: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Top bar with the app name, the current screen and the active locale.
pub struct HeaderBar<'a> {
    app_name: &'a str,
    version: &'a str,
    title: &'a str,
    locale: Option<Locale>,
    style: HeaderBarStyle,
}

impl<'a> HeaderBar<'a> {
    /// Creates a header with no title.
    #[must_use]
    pub fn new(app_name: &'a str, version: &'a str) -> Self {
        Self {
            app_name,
            version,
            title: "",
            locale: None,
            style: HeaderBarStyle::default(),
        }
    }

    /// Sets the screen title shown after the version.
    #[must_use]
    pub const fn title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }

    /// Shows `locale` on the right.
    #[must_use]
    pub const fn locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    /// Sets the colors.
    #[must_use]
    pub const fn style(mut self, style: HeaderBarStyle) -> Self {
        self.style = style;
        self
    }
}

impl Widget for HeaderBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        for x in area.left()..area.right() {
            buf[(x, area.y)]
                .set_char(' ')
                .set_style(self.style.background);
        }

        let mut left_spans = vec![
            Span::styled(
                format!(" {} ", self.app_name.to_uppercase()),
                self.style.app_name,
            ),
            Span::raw(" "),
            Span::styled(format!(" v{} ", self.version), self.style.version),
        ];
        if !self.title.is_empty() {
            left_spans.push(Span::raw("  "));
            left_spans.push(Span::styled(self.title, self.style.title));
        }

        let left_line = Line::from(left_spans);
        let left_width = u16::try_from(left_line.width()).unwrap_or(u16::MAX);
        let left_area = Rect::new(area.x, area.y, left_width.min(area.width), 1);
        Paragraph::new(left_line).render(left_area, buf);

        if let Some(locale) = self.locale {
            let text = format!(" {} ", locale.code().to_uppercase());
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);

            if width < area.width.saturating_sub(left_width) {
                let right_x = area.right().saturating_sub(width);
                let right_area = Rect::new(right_x, area.y, width, 1);
                Paragraph::new(Span::styled(text, self.style.locale)).render(right_area, buf);
            }
        }
    }
}
