use crate::constants::{SPRING_THRESHOLD, TILT_SPRING_DAMPING, TILT_SPRING_STIFFNESS};
use std::time::Duration;

/// A damped-oscillator value that follows a target.
///
/// Unit mass. Each [`Spring::update`] advances the closed-form solution of
/// `x'' = -stiffness * (x - target) - damping * x'` by `dt`, so the result does
/// not depend on how the host slices time.
#[derive(Debug, Clone, Copy)]
pub struct Spring {
    pub position: f32,
    pub velocity: f32,
    pub target: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Default for Spring {
    fn default() -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness: TILT_SPRING_STIFFNESS,
            damping: TILT_SPRING_DAMPING,
        }
    }
}

impl Spring {
    /// Creates a new spring with custom parameters.
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            stiffness: stiffness.max(0.0),
            damping: damping.max(0.0),
            ..Default::default()
        }
    }

    /// Creates a spring damped exactly at the critical value for `stiffness`.
    pub fn critically_damped(stiffness: f32) -> Self {
        let stiffness = stiffness.max(0.0);
        Self::new(stiffness, 2.0 * stiffness.sqrt())
    }

    /// Damping ratio (1.0 = critical).
    pub fn damping_ratio(&self) -> f32 {
        let omega = self.stiffness.sqrt();
        if omega == 0.0 {
            return f32::INFINITY;
        }
        self.damping / (2.0 * omega)
    }

    /// Advances the spring by `dt`. Returns true if still animating.
    pub fn update(&mut self, dt: Duration) -> bool {
        let t = dt.as_secs_f32();
        if t > 0.0 && self.stiffness > 0.0 {
            let (x, v) = self.solve(self.position - self.target, self.velocity, t);
            self.position = self.target + x;
            self.velocity = v;
        }

        let distance = (self.target - self.position).abs();
        if distance < SPRING_THRESHOLD && self.velocity.abs() < SPRING_THRESHOLD {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }

    /// Offset and velocity after `t` seconds, starting from offset `x0`, velocity `v0`.
    fn solve(&self, x0: f32, v0: f32, t: f32) -> (f32, f32) {
        let omega = self.stiffness.sqrt();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-4 {
            let decay = (-omega * t).exp();
            let b = v0 + omega * x0;
            let x = (x0 + b * t) * decay;
            let v = (v0 - omega * b * t) * decay;
            (x, v)
        } else if zeta < 1.0 {
            let omega_d = omega * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * omega * t).exp();
            let (sin, cos) = (omega_d * t).sin_cos();
            let x = decay * (x0 * cos + (v0 + zeta * omega * x0) / omega_d * sin);
            let v = decay * (v0 * cos - (zeta * omega * v0 + omega * omega * x0) / omega_d * sin);
            (x, v)
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            let b = (v0 - r1 * x0) / (r2 - r1);
            let a = x0 - b;
            let (e1, e2) = ((r1 * t).exp(), (r2 * t).exp());
            (a * e1 + b * e2, a * r1 * e1 + b * r2 * e2)
        }
    }

    /// Sets the target value for the spring to animate towards.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jumps to `value` with no motion.
    pub fn snap_to(&mut self, value: f32) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// True when resting on the target.
    pub fn is_settled(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }
}
