mod footer_bar;
mod header_bar;
mod sprite_view;

pub use footer_bar::{FooterBar, FooterBarStyle, FooterItem};
pub use header_bar::{HeaderBar, HeaderBarStyle};
pub use sprite_view::SpriteView;
