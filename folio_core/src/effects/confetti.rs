//! One-shot confetti burst.
//!
//! Pieces launch from a point on the viewport inside a cone, slow down by a
//! constant factor per frame, fall under constant gravity, tumble and fade
//! out. Each piece lives a fixed number of frames; the loop stops by itself
//! once the last one expires.

use super::particles::{Circle, Quad, Rgba, Surface, ViewportMetrics};
use crate::animation::{FrameLoop, Teardown};
use crate::constants::{
    CONFETTI_ANGLE_DEG, CONFETTI_COLORS, CONFETTI_DECAY, CONFETTI_GRAVITY, CONFETTI_ORIGIN_X,
    CONFETTI_ORIGIN_Y, CONFETTI_PARTICLE_COUNT, CONFETTI_SPREAD_DEG, CONFETTI_START_VELOCITY,
    CONFETTI_TICKS, CONFETTI_WOBBLE_PX,
};
use std::f32::consts::PI;

const TILT_STEP: f32 = 0.1;
const OVAL_SCALE: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceShape {
    Square,
    Circle,
}

/// A single piece of confetti.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    pub x: f32,
    pub y: f32,
    /// Heading in radians, screen coordinates (y grows downward)
    pub angle: f32,
    pub velocity: f32,
    pub color: (u8, u8, u8),
    pub shape: PieceShape,
    wobble: f32,
    wobble_speed: f32,
    wobble_x: f32,
    wobble_y: f32,
    tilt_angle: f32,
    shimmer: f32,
    tick: u32,
}

impl ConfettiPiece {
    /// Launches a piece from `(x, y)` in a random direction within the cone.
    pub fn spawn(rng: &mut fastrand::Rng, x: f32, y: f32) -> Self {
        let spread = CONFETTI_SPREAD_DEG.to_radians();
        Self {
            x,
            y,
            angle: -CONFETTI_ANGLE_DEG.to_radians() + (0.5 * spread - rng.f32() * spread),
            velocity: CONFETTI_START_VELOCITY * 0.5 + rng.f32() * CONFETTI_START_VELOCITY,
            color: CONFETTI_COLORS[rng.usize(..CONFETTI_COLORS.len())],
            shape: if rng.bool() {
                PieceShape::Square
            } else {
                PieceShape::Circle
            },
            wobble: rng.f32() * 10.0,
            wobble_speed: (rng.f32() * 0.1 + 0.05).min(0.11),
            wobble_x: x,
            wobble_y: y,
            tilt_angle: (rng.f32() * 0.5 + 0.25) * PI,
            shimmer: 2.0,
            tick: 0,
        }
    }

    /// Moves one frame. Returns false once the piece has used up its frames.
    pub fn advance(&mut self, rng: &mut fastrand::Rng) -> bool {
        self.x += self.angle.cos() * self.velocity;
        self.y += self.angle.sin() * self.velocity + CONFETTI_GRAVITY;
        self.velocity *= CONFETTI_DECAY;

        self.wobble += self.wobble_speed;
        self.wobble_x = self.x + CONFETTI_WOBBLE_PX * self.wobble.cos();
        self.wobble_y = self.y + CONFETTI_WOBBLE_PX * self.wobble.sin();
        self.tilt_angle += TILT_STEP;
        self.shimmer = rng.f32() + 2.0;

        self.tick += 1;
        self.tick < CONFETTI_TICKS
    }

    /// Linear fade over the piece's lifetime.
    pub fn opacity(&self) -> f32 {
        (1.0 - self.tick as f32 / CONFETTI_TICKS as f32).max(0.0)
    }

    pub fn age(&self) -> u32 {
        self.tick
    }

    fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (r, g, b) = self.color;
        let color = Rgba {
            r,
            g,
            b,
            a: self.opacity(),
        };
        let (tilt_sin, tilt_cos) = self.tilt_angle.sin_cos();
        let x1 = self.x + self.shimmer * tilt_cos;
        let y1 = self.y + self.shimmer * tilt_sin;
        let x2 = self.wobble_x + self.shimmer * tilt_cos;
        let y2 = self.wobble_y + self.shimmer * tilt_sin;

        match self.shape {
            PieceShape::Square => surface.fill_quad(Quad {
                corners: [
                    (self.x, self.y),
                    (self.wobble_x, y1),
                    (x2, y2),
                    (x1, self.wobble_y),
                ],
                color,
            }),
            PieceShape::Circle => surface.fill_circle(Circle {
                x: self.x,
                y: self.y,
                radius: ((x2 - x1).abs().max((y2 - y1).abs()) * OVAL_SCALE).max(0.5),
                color,
            }),
        }
    }
}

/// Celebration burst fired after a successful contact message.
///
/// `fire` adds a batch of pieces and starts the frame loop if it is idle.
/// Firing again while pieces are still in the air adds to them.
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    rng: fastrand::Rng,
    frame_loop: FrameLoop,
}

impl Default for ConfettiBurst {
    fn default() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }
}

impl ConfettiBurst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            pieces: Vec::new(),
            rng,
            frame_loop: FrameLoop::default(),
        }
    }

    pub fn fire(&mut self, viewport: ViewportMetrics) {
        let x = viewport.width as f32 * CONFETTI_ORIGIN_X;
        let y = viewport.height as f32 * CONFETTI_ORIGIN_Y;
        let rng = &mut self.rng;
        self.pieces
            .extend((0..CONFETTI_PARTICLE_COUNT).map(|_| ConfettiPiece::spawn(rng, x, y)));

        if !self.frame_loop.is_running() {
            self.frame_loop.restart();
        }
        tracing::debug!(pieces = self.pieces.len(), x, y, "confetti fired");
    }

    /// One animation frame. Returns false (and touches nothing) when idle.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.frame_loop.is_running() {
            return false;
        }
        surface.clear();
        self.step();
        self.render(surface);

        if self.pieces.is_empty() {
            self.frame_loop.cancel();
            tracing::debug!("confetti burst finished");
        }
        true
    }

    /// Physics only. Expired pieces are dropped.
    pub fn step(&mut self) {
        let rng = &mut self.rng;
        self.pieces.retain_mut(|piece| piece.advance(rng));
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        for piece in &self.pieces {
            piece.paint(surface);
        }
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn loop_generation(&self) -> u64 {
        self.frame_loop.generation()
    }
}

impl Teardown for ConfettiBurst {
    fn teardown(&mut self) {
        self.frame_loop.cancel();
        self.pieces.clear();
    }

    fn has_active_resources(&self) -> bool {
        self.frame_loop.is_running() || !self.pieces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::DrawList;

    const VIEWPORT: ViewportMetrics = ViewportMetrics {
        width: 1000,
        height: 800,
    };

    fn fired(seed: u64) -> ConfettiBurst {
        let mut burst = ConfettiBurst::with_seed(seed);
        burst.fire(VIEWPORT);
        burst
    }

    #[test]
    fn test_fire_launches_full_batch_from_origin() {
        let burst = fired(1);
        assert_eq!(burst.pieces().len(), CONFETTI_PARTICLE_COUNT);
        assert!(burst.is_running());
        assert!(burst
            .pieces()
            .iter()
            .all(|piece| piece.x == 500.0 && piece.y == 480.0));
    }

    #[test]
    fn test_launch_angles_stay_inside_spread() {
        let burst = fired(2);
        let up = -CONFETTI_ANGLE_DEG.to_radians();
        let half = (CONFETTI_SPREAD_DEG / 2.0).to_radians() + 1e-5;
        for piece in burst.pieces() {
            assert!((piece.angle - up).abs() <= half, "angle {}", piece.angle);
            assert!(piece.velocity >= CONFETTI_START_VELOCITY * 0.5);
            assert!(piece.velocity < CONFETTI_START_VELOCITY * 1.5);
        }
    }

    #[test]
    fn test_pieces_rise_then_fall() {
        let mut burst = fired(3);
        burst.step();
        assert!(burst.pieces().iter().all(|piece| piece.y < 480.0));

        for _ in 0..59 {
            burst.step();
        }
        let before: Vec<f32> = burst.pieces().iter().map(|piece| piece.y).collect();
        burst.step();
        for (piece, previous) in burst.pieces().iter().zip(before) {
            assert!(piece.y > previous, "{} !> {previous}", piece.y);
        }
    }

    #[test]
    fn test_every_piece_expires_after_its_frames() {
        let mut burst = fired(4);
        let mut frame = DrawList::default();

        for _ in 1..CONFETTI_TICKS {
            assert!(burst.tick(&mut frame));
        }
        assert_eq!(burst.pieces().len(), CONFETTI_PARTICLE_COUNT);
        assert!(burst.is_running());

        assert!(burst.tick(&mut frame));
        assert!(burst.pieces().is_empty());
        assert!(frame.is_empty());
        assert!(!burst.is_running());
        assert!(!burst.has_active_resources());
        assert!(!burst.tick(&mut frame));
    }

    #[test]
    fn test_opacity_fades_linearly() {
        let mut burst = fired(5);
        let mut frame = DrawList::default();

        for k in 1..=10u32 {
            burst.tick(&mut frame);
            let expected = 1.0 - k as f32 / CONFETTI_TICKS as f32;
            let alphas = frame
                .circles()
                .iter()
                .map(|circle| circle.color.a)
                .chain(frame.quads().iter().map(|quad| quad.color.a));
            for alpha in alphas {
                assert!((alpha - expected).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_one_shape_per_piece() {
        let mut burst = fired(6);
        let mut frame = DrawList::default();
        burst.tick(&mut frame);
        assert_eq!(frame.circles().len() + frame.quads().len(), burst.pieces().len());
    }

    #[test]
    fn test_second_fire_joins_running_burst() {
        let mut burst = fired(7);
        let generation = burst.loop_generation();
        for _ in 0..10 {
            burst.step();
        }
        burst.fire(VIEWPORT);

        assert_eq!(burst.pieces().len(), 2 * CONFETTI_PARTICLE_COUNT);
        assert_eq!(burst.loop_generation(), generation);
    }

    #[test]
    fn test_seeded_bursts_match() {
        assert_eq!(fired(8).pieces(), fired(8).pieces());
    }

    #[test]
    fn test_teardown_clears_everything() {
        let mut burst = fired(9);
        burst.teardown();
        burst.teardown();

        assert!(!burst.has_active_resources());
        assert!(burst.pieces().is_empty());
        assert!(!burst.tick(&mut DrawList::default()));
    }

    #[test]
    fn test_idle_burst_does_not_paint() {
        let mut burst = ConfettiBurst::with_seed(10);
        let mut frame = DrawList::default();
        assert!(!burst.tick(&mut frame));
        assert!(!burst.has_active_resources());
    }
}
