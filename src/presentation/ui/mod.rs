//! UI screens.

mod about_popup;
mod app;
mod detail_screen;
mod list_screen;
mod notification_popup;
mod settings_screen;
mod splash_screen;

pub use about_popup::AboutPopup;
pub use app::{App, AppOptions};
pub use detail_screen::{DetailLabels, DetailScreen};
pub use list_screen::{CELL_HEIGHT, GridCursor, ListScreen, ListScreenState};
pub use notification_popup::NotificationPopup;
pub use settings_screen::{SettingsScreen, SettingsView, SwitchRow};
pub use splash_screen::{LoadingState, SplashScreen};
