//! Folio Desktop - the portfolio page rendered with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod layout;
pub mod styles;
pub mod theme;
pub mod visitor;

pub use animation::{ConfettiState, HeroState, ParticleBackdropState, TiltCardState};
pub use constants::*;
pub use layout::{SectionLayout, HERO_SECTION};
pub use styles::*;
pub use theme::{app_theme, palette_from_mode, PaletteColors};
pub use visitor::client_details;
