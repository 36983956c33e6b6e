//! Presenters and UI-facing services.

pub mod detail_presenter;
pub mod list_presenter;
pub mod notification_manager;

pub use detail_presenter::{
    CharacteristicRow, DetailActivation, DetailPresenter, DetailViewModel, HabitatIndicator,
    is_visible,
};
pub use list_presenter::{GRID_COLUMNS, ListPresenter, RowViewModel, SelectEvent, row_for};
pub use notification_manager::NotificationManager;
