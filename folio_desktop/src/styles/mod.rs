mod button;
mod container;
mod input;

pub use button::{icon_button_style, nav_link_style, primary_button_style};
pub use container::{card_style, nav_bar_style, section_style, toast_style};
pub use input::input_style;
