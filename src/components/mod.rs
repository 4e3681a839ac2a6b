//! UI components and the glue between them and the player core.

mod app;
mod controller;
mod icons;
mod lyrics_panel;
pub mod media_bridge;
mod player;
mod sidebar;

pub use app::*;
pub use controller::*;
pub use icons::*;
pub use lyrics_panel::*;
pub use player::*;
pub use sidebar::*;
