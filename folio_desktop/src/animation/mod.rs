mod states;

pub use states::{ConfettiState, HeroState, ParticleBackdropState, TiltCardState};
