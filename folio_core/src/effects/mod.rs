//! The page effect components.
//!
//! Each component is a leaf: it owns its state, is driven by the host through
//! plain method calls, and releases everything it holds on
//! [`Teardown::teardown`](crate::animation::Teardown::teardown).

pub mod confetti;
pub mod particles;
pub mod reveal;
pub mod scroll;
pub mod tilt;

pub use confetti::{ConfettiBurst, ConfettiPiece, PieceShape};
pub use particles::{
    Circle, DrawList, Particle, ParticleField, Quad, Rgba, Surface, ViewportMetrics,
};
pub use reveal::{RevealPhase, TextReveal};
pub use scroll::{resolve_active, AnchorRect, ScrollSectionTracker, ScrollState, SectionAnchors};
pub use tilt::{normalized_offset, ElementBounds, PointerTiltTransform, TiltRotation, TiltVector};
