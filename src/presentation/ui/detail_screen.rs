//! Detail screen for one creature.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget, Wrap},
};

use crate::application::services::DetailViewModel;
use crate::domain::{Locale, TextRef, TextResolver};
use crate::presentation::theme::Theme;
use crate::presentation::widgets::SpriteView;

const SPRITE_PANEL_WIDTH: u16 = 24;

/// Field captions of the detail screen, resolved in one locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct DetailLabels {
    pub family: String,
    pub scientific_name: String,
    pub description: String,
    pub habitat: String,
    pub no_image: String,
}

impl DetailLabels {
    /// Resolves every caption in `locale`.
    #[must_use]
    pub fn resolve(text: &dyn TextResolver, locale: Locale) -> Self {
        let label = |key: &'static str| text.resolve(&TextRef::from_static(key), locale);
        Self {
            family: label("label_family"),
            scientific_name: label("label_scientific_name"),
            description: label("label_description"),
            habitat: label("label_habitat"),
            no_image: label("no_image"),
        }
    }
}

/// Sprite panel next to the creature's fields.
pub struct DetailScreen<'a> {
    view: &'a DetailViewModel,
    labels: &'a DetailLabels,
    theme: &'a Theme,
}

#[allow(missing_docs)]
impl<'a> DetailScreen<'a> {
    #[must_use]
    pub const fn new(view: &'a DetailViewModel, labels: &'a DetailLabels, theme: &'a Theme) -> Self {
        Self {
            view,
            labels,
            theme,
        }
    }

    fn caption(&self, caption: &str) -> Span<'static> {
        Span::styled(
            format!("{caption}: "),
            self.theme.dimmed_style.add_modifier(Modifier::BOLD),
        )
    }

    fn habitat_line(&self) -> Line<'static> {
        let mut spans = vec![self.caption(&self.labels.habitat)];
        for (i, habitat) in self.view.habitats.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            let (mark, style) = if habitat.checked {
                ("[x]", self.theme.title_style)
            } else {
                ("[ ]", self.theme.dimmed_style)
            };
            spans.push(Span::styled(mark, style));
            spans.push(Span::raw(format!(" {}", habitat.label)));
        }
        Line::from(spans)
    }

    /// Text lines of the info panel. Hidden characteristic rows produce no
    /// line at all.
    fn info_lines(&self) -> Vec<Line<'static>> {
        let view = self.view;
        let mut lines = vec![
            Line::styled(view.name.clone(), self.theme.title_style),
            Line::styled(
                view.scientific_name.clone(),
                Style::default().add_modifier(Modifier::ITALIC),
            ),
            Line::default(),
            Line::from(vec![
                self.caption(&self.labels.family),
                Span::raw(view.family.clone()),
            ]),
            Line::from(vec![
                self.caption(&self.labels.scientific_name),
                Span::raw(view.scientific_name.clone()),
            ]),
            self.habitat_line(),
            Line::default(),
            Line::from(self.caption(&self.labels.description)),
            Line::raw(view.description.clone()),
        ];

        let mut characteristics = view.visible_characteristics().peekable();
        if characteristics.peek().is_some() {
            lines.push(Line::default());
        }
        for row in characteristics {
            lines.push(Line::from(vec![
                self.caption(&row.label),
                Span::raw(row.value.clone()),
            ]));
        }

        lines
    }
}

impl Widget for DetailScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let [sprite_area, info_area] =
            Layout::horizontal([Constraint::Length(SPRITE_PANEL_WIDTH), Constraint::Fill(1)])
                .areas(area);

        let sprite_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_style);
        let sprite_inner = sprite_block.inner(sprite_area);
        sprite_block.render(sprite_area, buf);

        let color = self
            .view
            .sprite
            .map_or(self.theme.accent, |sprite| self.theme.sprite_color(sprite.tint));
        SpriteView::new(self.view.sprite)
            .color(color)
            .placeholder(&self.labels.no_image)
            .style(self.theme.dimmed_style)
            .render(sprite_inner, buf);

        let info_block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.dimmed_style);
        Paragraph::new(self.info_lines())
            .block(info_block)
            .style(self.theme.base_style)
            .wrap(Wrap { trim: true })
            .render(info_area, buf);
    }
}
