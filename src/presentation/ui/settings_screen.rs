//! Settings screen.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::domain::{Locale, TextRef, TextResolver};
use crate::presentation::theme::Theme;

/// One on/off switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchRow {
    /// Localized label.
    pub label: String,
    /// Key that flips the switch.
    pub key: char,
    /// Current state.
    pub on: bool,
}

/// Resolved contents of the settings screen.
///
/// The language switch reads "Spanish language" and is on while the live
/// locale is Spanish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsView {
    /// Screen title.
    pub title: String,
    /// Dark mode switch.
    pub dark_mode: SwitchRow,
    /// Language switch.
    pub language: SwitchRow,
    on_label: String,
    off_label: String,
}

impl SettingsView {
    /// Resolves every label in `locale`.
    #[must_use]
    pub fn new(dark_mode: bool, locale: Locale, text: &dyn TextResolver) -> Self {
        let label = |key: &'static str| text.resolve(&TextRef::from_static(key), locale);
        Self {
            title: label("settings_title"),
            dark_mode: SwitchRow {
                label: label("settings_dark_mode"),
                key: 'd',
                on: dark_mode,
            },
            language: SwitchRow {
                label: label("settings_language"),
                key: 'l',
                on: locale == Locale::Es,
            },
            on_label: label("settings_on"),
            off_label: label("settings_off"),
        }
    }

    fn state_label(&self, on: bool) -> &str {
        if on { &self.on_label } else { &self.off_label }
    }
}

/// Centered panel with the two switches.
pub struct SettingsScreen<'a> {
    view: &'a SettingsView,
    theme: &'a Theme,
}

#[allow(missing_docs)]
impl<'a> SettingsScreen<'a> {
    #[must_use]
    pub const fn new(view: &'a SettingsView, theme: &'a Theme) -> Self {
        Self { view, theme }
    }

    fn switch_line(&self, row: &SwitchRow) -> Line<'static> {
        let (mark, mark_style) = if row.on {
            ("[●]", self.theme.title_style)
        } else {
            ("[ ]", self.theme.dimmed_style)
        };

        Line::from(vec![
            Span::styled(mark, mark_style),
            Span::raw(format!(" {}  ", row.label)),
            Span::styled(
                self.view.state_label(row.on).to_string(),
                self.theme.dimmed_style.add_modifier(Modifier::ITALIC),
            ),
            Span::styled(format!("  ({})", row.key), self.theme.dimmed_style),
        ])
    }
}

impl Widget for SettingsScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let [panel] = Layout::horizontal([Constraint::Max(60)])
            .flex(ratatui::layout::Flex::Center)
            .areas(area);
        let [panel] = Layout::vertical([Constraint::Length(6)])
            .flex(ratatui::layout::Flex::Center)
            .areas(panel);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style)
            .title(Line::styled(
                format!(" {} ", self.view.title),
                self.theme.title_style,
            ));

        let lines = vec![
            Line::default(),
            self.switch_line(&self.view.dark_mode),
            Line::default(),
            self.switch_line(&self.view.language),
        ];

        Paragraph::new(lines)
            .block(block)
            .style(self.theme.base_style)
            .render(panel, buf);
    }
}
