//! Ambient particle backdrop.
//!
//! A batch of slowly drifting dots sized to the viewport. Motion is a constant
//! per-particle velocity with toroidal wrap-around; nothing collides and no
//! particle changes velocity, radius or opacity after it is created.

use crate::animation::{FrameLoop, Teardown};
use crate::constants::{
    PARTICLE_COLOR_RGB, PARTICLE_MAX_SPEED, PARTICLE_MIN_OPACITY, PARTICLE_MIN_RADIUS,
    PARTICLE_OPACITY_SPAN, PARTICLE_RADIUS_SPAN, PARTICLE_SPACING_PX,
};

/// Viewport size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewportMetrics {
    pub width: u32,
    pub height: u32,
}

impl ViewportMetrics {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of particles for this viewport: one per 15 px of width.
    pub fn particle_count(&self) -> usize {
        if self.width == 0 || self.height == 0 {
            return 0;
        }
        (self.width / PARTICLE_SPACING_PX) as usize
    }
}

/// An RGBA colour with straight alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

/// A filled circle in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub color: Rgba,
}

/// A filled quadrilateral, corners in drawing order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub corners: [(f32, f32); 4],
    pub color: Rgba,
}

/// A 2D drawable target covering the viewport.
pub trait Surface {
    /// Erases the whole surface.
    fn clear(&mut self);

    fn fill_circle(&mut self, circle: Circle);

    fn fill_quad(&mut self, quad: Quad);
}

/// Surface that records one frame so a retained-mode host can replay it.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    circles: Vec<Circle>,
    quads: Vec<Quad>,
}

impl DrawList {
    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn is_empty(&self) -> bool {
        self.circles.is_empty() && self.quads.is_empty()
    }
}

impl Surface for DrawList {
    fn clear(&mut self) {
        self.circles.clear();
        self.quads.clear();
    }

    fn fill_circle(&mut self, circle: Circle) {
        self.circles.push(circle);
    }

    fn fill_quad(&mut self, quad: Quad) {
        self.quads.push(quad);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl Particle {
    /// Spawns a particle uniformly over the viewport.
    pub fn spawn(rng: &mut fastrand::Rng, viewport: ViewportMetrics) -> Self {
        Self {
            x: wrap(rng.f32() * viewport.width as f32, viewport.width as f32),
            y: wrap(rng.f32() * viewport.height as f32, viewport.height as f32),
            vx: (rng.f32() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            vy: (rng.f32() - 0.5) * 2.0 * PARTICLE_MAX_SPEED,
            radius: rng.f32() * PARTICLE_RADIUS_SPAN + PARTICLE_MIN_RADIUS,
            opacity: rng.f32() * PARTICLE_OPACITY_SPAN + PARTICLE_MIN_OPACITY,
        }
    }

    /// Moves one tick and wraps each axis independently.
    pub fn advance(&mut self, viewport: ViewportMetrics) {
        self.x = wrap(self.x + self.vx, viewport.width as f32);
        self.y = wrap(self.y + self.vy, viewport.height as f32);
    }
}

/// Wraps `value` into `[0, extent)`.
fn wrap(value: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !value.is_finite() {
        return 0.0;
    }
    let wrapped = value.rem_euclid(extent);
    // rem_euclid rounds tiny negatives up to `extent` itself
    if wrapped >= extent {
        0.0
    } else {
        wrapped
    }
}

/// Continuously animated particle backdrop.
///
/// Lifecycle: `mount` allocates the batch and starts the frame loop,
/// `resize` cancels the loop, reallocates from scratch and restarts it,
/// `teardown` cancels the loop and stops listening for resizes.
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: ViewportMetrics,
    rng: fastrand::Rng,
    frame_loop: FrameLoop,
    listening: bool,
    color: (u8, u8, u8),
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::with_rng(fastrand::Rng::new())
    }
}

impl ParticleField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deterministic field for reproducible layouts.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(fastrand::Rng::with_seed(seed))
    }

    fn with_rng(rng: fastrand::Rng) -> Self {
        Self {
            particles: Vec::new(),
            viewport: ViewportMetrics::default(),
            rng,
            frame_loop: FrameLoop::default(),
            listening: false,
            color: PARTICLE_COLOR_RGB,
        }
    }

    /// Allocates the first batch, subscribes to resizes and starts the loop.
    pub fn mount(&mut self, viewport: ViewportMetrics) {
        self.listening = true;
        self.reinitialize(viewport);
    }

    /// Handles a viewport resize. Ignored once torn down.
    pub fn resize(&mut self, viewport: ViewportMetrics) {
        if !self.listening {
            return;
        }
        self.reinitialize(viewport);
    }

    fn reinitialize(&mut self, viewport: ViewportMetrics) {
        self.frame_loop.cancel();
        self.viewport = viewport;

        let count = viewport.particle_count();
        let rng = &mut self.rng;
        self.particles = (0..count).map(|_| Particle::spawn(rng, viewport)).collect();

        let generation = self.frame_loop.restart();
        tracing::debug!(
            width = viewport.width,
            height = viewport.height,
            count,
            generation,
            "particle batch allocated"
        );
    }

    /// One animation frame: clear, advance every particle, then paint.
    ///
    /// Returns false (and touches nothing) when the loop is not running.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if !self.frame_loop.is_running() {
            return false;
        }
        surface.clear();
        self.step();
        self.render(surface);
        true
    }

    /// Runs a frame only if it belongs to the current loop generation.
    pub fn tick_generation<S: Surface + ?Sized>(&mut self, generation: u64, surface: &mut S) -> bool {
        if !self.frame_loop.accepts(generation) {
            return false;
        }
        self.tick(surface)
    }

    /// Physics only.
    pub fn step(&mut self) {
        let viewport = self.viewport;
        for particle in &mut self.particles {
            particle.advance(viewport);
        }
    }

    /// Paints the current positions without moving anything.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let (r, g, b) = self.color;
        for particle in &self.particles {
            surface.fill_circle(Circle {
                x: particle.x,
                y: particle.y,
                radius: particle.radius,
                color: Rgba {
                    r,
                    g,
                    b,
                    a: particle.opacity,
                },
            });
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn viewport(&self) -> ViewportMetrics {
        self.viewport
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    pub fn loop_generation(&self) -> u64 {
        self.frame_loop.generation()
    }

    pub fn is_mounted(&self) -> bool {
        self.listening
    }
}

impl Teardown for ParticleField {
    fn teardown(&mut self) {
        self.frame_loop.cancel();
        self.listening = false;
    }

    fn has_active_resources(&self) -> bool {
        self.frame_loop.is_running() || self.listening
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that logs call order.
    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<&'static str>,
        circles: Vec<Circle>,
    }

    impl Surface for RecordingSurface {
        fn clear(&mut self) {
            self.calls.push("clear");
            self.circles.clear();
        }

        fn fill_circle(&mut self, circle: Circle) {
            self.calls.push("fill");
            self.circles.push(circle);
        }

        fn fill_quad(&mut self, _quad: Quad) {
            self.calls.push("quad");
        }
    }

    #[test]
    fn test_particle_count_is_width_over_fifteen() {
        for width in [0u32, 1, 14, 15, 16, 29, 30, 375, 1280, 1920, 3840] {
            let mut field = ParticleField::with_seed(7);
            field.mount(ViewportMetrics::new(width, 800));
            assert_eq!(field.particles().len(), (width / 15) as usize, "width {width}");
        }
    }

    #[test]
    fn test_degenerate_viewport_has_no_particles() {
        let mut field = ParticleField::with_seed(1);
        field.mount(ViewportMetrics::new(1280, 0));
        assert!(field.particles().is_empty());

        let mut surface = DrawList::default();
        assert!(field.tick(&mut surface));
        assert!(surface.is_empty());
    }

    #[test]
    fn test_particles_spawn_inside_viewport_with_fixed_ranges() {
        let mut field = ParticleField::with_seed(42);
        field.mount(ViewportMetrics::new(900, 600));
        for p in field.particles() {
            assert!((0.0..900.0).contains(&p.x));
            assert!((0.0..600.0).contains(&p.y));
            assert!(p.vx.abs() <= PARTICLE_MAX_SPEED);
            assert!(p.vy.abs() <= PARTICLE_MAX_SPEED);
            assert!((0.5..=2.5).contains(&p.radius));
            assert!((0.1..=0.6).contains(&p.opacity));
        }
    }

    #[test]
    fn test_positions_stay_in_bounds_across_ticks() {
        let viewport = ViewportMetrics::new(45, 3);
        let mut field = ParticleField::with_seed(3);
        field.mount(viewport);
        let mut surface = DrawList::default();

        for _ in 0..5_000 {
            field.tick(&mut surface);
            for p in field.particles() {
                assert!(p.x >= 0.0 && p.x < 45.0, "x out of range: {}", p.x);
                assert!(p.y >= 0.0 && p.y < 3.0, "y out of range: {}", p.y);
            }
        }
    }

    #[test]
    fn test_wrap_crosses_to_opposite_edge() {
        let viewport = ViewportMetrics::new(100, 100);
        let mut p = Particle {
            x: 0.05,
            y: 99.95,
            vx: -0.1,
            vy: 0.1,
            radius: 1.0,
            opacity: 0.5,
        };
        p.advance(viewport);
        assert!((p.x - 99.95).abs() < 1e-3);
        assert!((p.y - 0.05).abs() < 1e-3);
    }

    #[test]
    fn test_wrap_never_returns_extent() {
        assert_eq!(wrap(-1e-9, 100.0), 0.0);
        assert_eq!(wrap(100.0, 100.0), 0.0);
        assert_eq!(wrap(5.0, 0.0), 0.0);
        assert_eq!(wrap(f32::NAN, 10.0), 0.0);
    }

    #[test]
    fn test_tick_clears_before_painting_updated_positions() {
        let mut field = ParticleField::with_seed(11);
        field.mount(ViewportMetrics::new(150, 150));
        let before: Vec<Particle> = field.particles().to_vec();

        let mut surface = RecordingSurface::default();
        field.tick(&mut surface);

        assert_eq!(surface.calls.first(), Some(&"clear"));
        assert_eq!(surface.calls.len(), 1 + before.len());
        for (circle, old) in surface.circles.iter().zip(&before) {
            let mut expected = *old;
            expected.advance(field.viewport());
            assert_eq!(circle.x, expected.x);
            assert_eq!(circle.y, expected.y);
            assert_eq!(circle.color.a, old.opacity);
            assert_eq!((circle.color.r, circle.color.g, circle.color.b), PARTICLE_COLOR_RGB);
        }
    }

    #[test]
    fn test_attributes_fixed_after_creation() {
        let mut field = ParticleField::with_seed(5);
        field.mount(ViewportMetrics::new(300, 200));
        let before: Vec<Particle> = field.particles().to_vec();
        let mut surface = DrawList::default();
        for _ in 0..100 {
            field.tick(&mut surface);
        }
        for (now, then) in field.particles().iter().zip(&before) {
            assert_eq!(now.vx, then.vx);
            assert_eq!(now.vy, then.vy);
            assert_eq!(now.radius, then.radius);
            assert_eq!(now.opacity, then.opacity);
        }
    }

    #[test]
    fn test_resize_restarts_single_loop_with_new_batch() {
        let mut field = ParticleField::with_seed(9);
        field.mount(ViewportMetrics::new(300, 300));
        let first_generation = field.loop_generation();

        field.resize(ViewportMetrics::new(600, 300));
        assert_eq!(field.particles().len(), 40);
        assert!(field.is_running());
        assert!(field.loop_generation() > first_generation);

        // A frame queued by the old loop is dropped.
        let mut surface = DrawList::default();
        assert!(!field.tick_generation(first_generation, &mut surface));
        assert!(field.tick_generation(field.loop_generation(), &mut surface));
    }

    #[test]
    fn test_teardown_is_idempotent_and_stops_everything() {
        let mut field = ParticleField::with_seed(2);
        field.mount(ViewportMetrics::new(300, 300));
        assert!(field.has_active_resources());

        field.teardown();
        field.teardown();
        assert!(!field.has_active_resources());

        let mut surface = DrawList::default();
        assert!(!field.tick(&mut surface));

        let before = field.particles().len();
        field.resize(ViewportMetrics::new(1500, 900));
        assert_eq!(field.particles().len(), before);
        assert!(!field.is_running());
    }

    #[test]
    fn test_remount_after_teardown() {
        let mut field = ParticleField::with_seed(4);
        field.mount(ViewportMetrics::new(300, 300));
        field.teardown();
        field.mount(ViewportMetrics::new(150, 300));
        assert!(field.is_running());
        assert_eq!(field.particles().len(), 10);
    }
}
