//! Catalog grid screen.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::Line,
    widgets::{Block, BorderType, StatefulWidget, Widget},
};

use crate::application::ListPresenter;
use crate::application::services::{GRID_COLUMNS, RowViewModel, SelectEvent};
use crate::domain::keybinding::Action;
use crate::domain::list_entities;
use crate::presentation::theme::Theme;
use crate::presentation::widgets::SpriteView;

/// Height of one grid cell, borders included.
pub const CELL_HEIGHT: u16 = 11;

/// Cursor over a row-major grid of `len` cells.
///
/// Every move is clamped: the cursor never leaves `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    index: usize,
    len: usize,
    columns: usize,
}

#[allow(missing_docs)]
impl GridCursor {
    #[must_use]
    pub fn new(len: usize, columns: usize) -> Self {
        Self {
            index: 0,
            len,
            columns: columns.max(1),
        }
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn row(&self) -> usize {
        self.index / self.columns
    }

    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn move_left(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.index + 1 < self.len {
            self.index += 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.index >= self.columns {
            self.index -= self.columns;
        }
    }

    /// Moves one row down, landing on the last cell when the next row is
    /// shorter than the current column.
    pub fn move_down(&mut self) {
        if self.is_empty() {
            return;
        }
        let last_row = (self.len - 1) / self.columns;
        if self.row() < last_row {
            self.index = (self.index + self.columns).min(self.len - 1);
        }
    }

    /// Applies a navigation action. Returns whether it was one.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::NavigateUp => self.move_up(),
            Action::NavigateDown => self.move_down(),
            Action::NavigateLeft => self.move_left(),
            Action::NavigateRight => self.move_right(),
            _ => return false,
        }
        true
    }
}

/// State of the grid: rendered rows, cursor and scroll offset.
pub struct ListScreenState {
    presenter: ListPresenter,
    cursor: GridCursor,
    first_row: usize,
}

impl ListScreenState {
    /// Renders the whole catalog with `presenter`.
    #[must_use]
    pub fn new(mut presenter: ListPresenter) -> Self {
        let len = presenter.render(list_entities()).len();
        Self {
            presenter,
            cursor: GridCursor::new(len, GRID_COLUMNS),
            first_row: 0,
        }
    }

    /// Swaps in a presenter for another locale, keeping the cursor.
    pub fn relocalize(&mut self, mut presenter: ListPresenter) {
        presenter.render(list_entities());
        self.presenter = presenter;
    }

    /// Rows of the current locale.
    #[must_use]
    pub fn rows(&self) -> &[RowViewModel] {
        self.presenter.rows()
    }

    /// Grid cursor.
    #[must_use]
    pub const fn cursor(&self) -> &GridCursor {
        &self.cursor
    }

    /// Handles a list action. `Select` yields the entity under the cursor.
    pub fn handle_action(&mut self, action: Action) -> Option<SelectEvent> {
        if action == Action::Select {
            return self.presenter.select(self.cursor.index());
        }
        self.cursor.apply(action);
        None
    }

    fn scroll_to_cursor(&mut self, visible_rows: usize) {
        let row = self.cursor.row();
        let visible_rows = visible_rows.max(1);
        if row < self.first_row {
            self.first_row = row;
        } else if row >= self.first_row + visible_rows {
            self.first_row = row + 1 - visible_rows;
        }
    }
}

/// Catalog grid drawn from a [`ListScreenState`].
pub struct ListScreen<'a> {
    theme: &'a Theme,
    no_image: &'a str,
}

#[allow(missing_docs)]
impl<'a> ListScreen<'a> {
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            no_image: "",
        }
    }

    #[must_use]
    pub const fn no_image(mut self, label: &'a str) -> Self {
        self.no_image = label;
        self
    }

    fn render_cell(&self, row: &RowViewModel, selected: bool, area: Rect, buf: &mut Buffer) {
        let (border_type, border_style, title_style) = if selected {
            (
                BorderType::Thick,
                self.theme.border_style.add_modifier(Modifier::BOLD),
                self.theme.selection_style,
            )
        } else {
            (
                BorderType::Rounded,
                self.theme.dimmed_style,
                self.theme.base_style,
            )
        };

        let block = Block::bordered()
            .border_type(border_type)
            .border_style(border_style)
            .title_bottom(Line::styled(format!(" {} ", row.name), title_style))
            .title_alignment(Alignment::Center);
        let inner = block.inner(area);
        block.render(area, buf);

        let color = row
            .sprite
            .map_or(self.theme.accent, |sprite| self.theme.sprite_color(sprite.tint));
        SpriteView::new(row.sprite)
            .color(color)
            .placeholder(self.no_image)
            .style(self.theme.dimmed_style)
            .render(inner, buf);
    }
}

impl StatefulWidget for ListScreen<'_> {
    type State = ListScreenState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }

        let visible_rows = usize::from((area.height / CELL_HEIGHT).max(1));
        state.scroll_to_cursor(visible_rows);

        let columns = state.cursor.columns();
        let row_areas =
            Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); visible_rows]).split(area);
        let column_constraints =
            vec![Constraint::Ratio(1, u32::try_from(columns).unwrap_or(1)); columns];
        let selected = state.cursor.index();

        for (grid_row, row_area) in (state.first_row..).zip(row_areas.iter()) {
            let cells = Layout::horizontal(column_constraints.clone()).split(*row_area);
            for (column, cell_area) in cells.iter().enumerate() {
                let index = grid_row * columns + column;
                if let Some(row) = state.rows().get(index) {
                    self.render_cell(row, index == selected, *cell_area, buf);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::CATALOG_LEN;
    use crate::domain::ports::{MockImageResolver, MockTextResolver};
    use crate::domain::{Locale, Sprite};
    use std::sync::Arc;
    use test_case::test_case;

    fn cursor_at(index: usize) -> GridCursor {
        let mut cursor = GridCursor::new(CATALOG_LEN, GRID_COLUMNS);
        cursor.index = index;
        cursor
    }

    #[test_case(0, Action::NavigateUp, 0 ; "top_edge")]
    #[test_case(0, Action::NavigateLeft, 0 ; "first_cell")]
    #[test_case(22, Action::NavigateRight, 22 ; "last_cell")]
    #[test_case(21, Action::NavigateDown, 21 ; "bottom_row")]
    #[test_case(20, Action::NavigateDown, 22 ; "short_last_row")]
    #[test_case(4, Action::NavigateDown, 7 ; "down_one_row")]
    #[test_case(7, Action::NavigateUp, 4 ; "up_one_row")]
    #[test_case(2, Action::NavigateRight, 3 ; "right_wraps_to_next_row")]
    fn test_cursor_is_clamped(start: usize, action: Action, expected: usize) {
        let mut cursor = cursor_at(start);
        assert!(cursor.apply(action));
        assert_eq!(cursor.index(), expected);
    }

    #[test]
    fn test_cursor_ignores_other_actions() {
        let mut cursor = cursor_at(5);
        assert!(!cursor.apply(Action::Quit));
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn test_empty_grid_stays_put() {
        let mut cursor = GridCursor::new(0, GRID_COLUMNS);
        for action in [
            Action::NavigateDown,
            Action::NavigateRight,
            Action::NavigateUp,
            Action::NavigateLeft,
        ] {
            cursor.apply(action);
            assert_eq!(cursor.index(), 0);
        }
    }

    const ART: &[&str] = &["o"];

    fn state() -> ListScreenState {
        let mut text = MockTextResolver::new();
        text.expect_resolve()
            .returning(|reference, _| reference.key().to_string());
        let mut images = MockImageResolver::new();
        images
            .expect_resolve()
            .returning(|_| Some(Sprite::new(ART, (200, 0, 0))));

        ListScreenState::new(ListPresenter::new(
            Arc::new(text),
            Arc::new(images),
            Locale::Es,
        ))
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_select_emits_entity_under_cursor() {
        let mut state = state();
        state.handle_action(Action::NavigateDown);
        let event = state.handle_action(Action::Select).unwrap();

        assert_eq!(event.index, 3);
        assert_eq!(event.creature, &list_entities()[3]);
    }

    #[test]
    fn test_render_first_rows() {
        let mut state = state();
        let theme = Theme::default();
        let area = Rect::new(0, 0, 90, CELL_HEIGHT * 2);
        let mut buf = Buffer::empty(area);

        ListScreen::new(&theme).render(area, &mut buf, &mut state);

        let text = buffer_text(&buf);
        assert!(text.contains("red_pikmin"));
        assert!(text.contains("white_pikmin"));
        assert!(!text.contains("winged_pikmin"));
    }

    #[test]
    fn test_render_scrolls_to_cursor() {
        let mut state = state();
        for _ in 0..7 {
            state.handle_action(Action::NavigateDown);
        }
        let theme = Theme::default();
        let area = Rect::new(0, 0, 90, CELL_HEIGHT);
        let mut buf = Buffer::empty(area);

        ListScreen::new(&theme).render(area, &mut buf, &mut state);

        let text = buffer_text(&buf);
        assert_eq!(state.cursor().index(), 21);
        assert!(text.contains("toady_bloyster"));
        assert!(!text.contains("red_pikmin"));
    }
}
