mod app_theme;
mod palette;

pub use app_theme::app_theme;
pub use palette::{palette_from_mode, PaletteColors};
