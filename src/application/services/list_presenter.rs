//! Grid list view models.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Creature, Sprite};
use crate::domain::ports::{ImageResolver, TextResolver};
use crate::domain::settings::Locale;

/// Number of columns in the catalog grid.
pub const GRID_COLUMNS: usize = 3;

/// One cell of the catalog grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    /// Position in the catalog.
    pub index: usize,
    /// Display name in the active locale.
    pub name: String,
    /// Resolved sprite, `None` when the creature has no image.
    pub sprite: Option<Sprite>,
    /// Source record.
    pub creature: &'static Creature,
}

/// Emitted when the user picks a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectEvent {
    /// Position of the picked cell in the catalog.
    pub index: usize,
    /// Picked creature.
    pub creature: &'static Creature,
}

/// Builds the view model for a single cell.
#[must_use]
pub fn row_for(
    index: usize,
    creature: &'static Creature,
    text: &dyn TextResolver,
    images: &dyn ImageResolver,
    locale: Locale,
) -> RowViewModel {
    RowViewModel {
        index,
        name: text.resolve(creature.name(), locale),
        sprite: images.resolve(creature.image()),
        creature,
    }
}

/// Turns the catalog into grid cells for one locale.
///
/// The presenter never reorders or filters: cell `n` is catalog entry `n`.
pub struct ListPresenter {
    text: Arc<dyn TextResolver>,
    images: Arc<dyn ImageResolver>,
    locale: Locale,
    rows: Vec<RowViewModel>,
}

impl ListPresenter {
    /// Creates a presenter with no rows; call [`ListPresenter::render`] next.
    #[must_use]
    pub fn new(
        text: Arc<dyn TextResolver>,
        images: Arc<dyn ImageResolver>,
        locale: Locale,
    ) -> Self {
        Self {
            text,
            images,
            locale,
            rows: Vec::new(),
        }
    }

    /// Locale the rows are resolved in.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Builds and keeps the cells for `entities`.
    pub fn render(&mut self, entities: &'static [Creature]) -> &[RowViewModel] {
        self.rows = entities
            .iter()
            .enumerate()
            .map(|(index, creature)| {
                row_for(
                    index,
                    creature,
                    self.text.as_ref(),
                    self.images.as_ref(),
                    self.locale,
                )
            })
            .collect();
        debug!(rows = self.rows.len(), locale = %self.locale, "Rendered catalog grid");
        &self.rows
    }

    /// Rows from the last render.
    #[must_use]
    pub fn rows(&self) -> &[RowViewModel] {
        &self.rows
    }

    /// Emits the selection for the cell at `index`.
    #[must_use]
    pub fn select(&self, index: usize) -> Option<SelectEvent> {
        self.rows.get(index).map(|row| SelectEvent {
            index: row.index,
            creature: row.creature,
        })
    }
}
