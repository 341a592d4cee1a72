mod confetti_overlay;
mod particle_backdrop;
mod tilt_card;

pub use confetti_overlay::ConfettiOverlay;
pub use particle_backdrop::ParticleBackdrop;
pub use tilt_card::{card_canvas_size, wrap_words, TiltCardCanvas};
