//! Pointer-driven 3D tilt for card elements.

use crate::animation::{Spring, Teardown};
use crate::constants::{TILT_MAX_ANGLE_DEG, TILT_SPRING_DAMPING, TILT_SPRING_STIFFNESS};
use std::time::Duration;

/// Normalized pointer offset from an element's centre, each axis in [-0.5, 0.5].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltVector {
    pub x: f32,
    pub y: f32,
}

impl TiltVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Element rectangle in the same coordinate space as the pointer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ElementBounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Bounds anchored at the origin, for pointers already in local coordinates.
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }
}

/// Maps a pointer position to a [`TiltVector`].
///
/// A zero or non-finite dimension yields 0 on that axis. Pointers outside the
/// element clamp to the nearest edge.
pub fn normalized_offset(pointer_x: f32, pointer_y: f32, bounds: ElementBounds) -> TiltVector {
    TiltVector {
        x: axis_offset(pointer_x - bounds.left, bounds.width),
        y: axis_offset(pointer_y - bounds.top, bounds.height),
    }
}

fn axis_offset(local: f32, extent: f32) -> f32 {
    if !(extent.is_finite() && extent > 0.0) || !local.is_finite() {
        return 0.0;
    }
    (local / extent - 0.5).clamp(-0.5, 0.5)
}

/// Rotation applied to the card, in degrees.
///
/// Positive pitch pushes the top edge away from the viewer; positive yaw the
/// right edge. The side under the pointer sinks.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TiltRotation {
    pub pitch_deg: f32,
    pub yaw_deg: f32,
}

impl TiltRotation {
    pub fn from_vector(vector: TiltVector, max_angle_deg: f32) -> Self {
        Self {
            pitch_deg: -vector.y * 2.0 * max_angle_deg,
            yaw_deg: vector.x * 2.0 * max_angle_deg,
        }
    }

    /// Projects a point relative to the card centre through the rotation and a
    /// perspective camera `perspective` units in front of the card.
    ///
    /// Returns the screen-space `(x, y)` offset from the centre.
    pub fn project(&self, point: [f32; 3], perspective: f32) -> (f32, f32) {
        let [x, y, z] = point;
        let (sin_y, cos_y) = self.yaw_deg.to_radians().sin_cos();
        let (sin_x, cos_x) = self.pitch_deg.to_radians().sin_cos();

        // rotateY then rotateX, screen y pointing down
        let x1 = x * cos_y + z * sin_y;
        let z1 = -x * sin_y + z * cos_y;
        let y2 = y * cos_x - z1 * sin_x;
        let z2 = y * sin_x + z1 * cos_x;

        let depth = perspective - z2;
        if perspective <= 0.0 || depth <= f32::EPSILON {
            return (x1, y2);
        }
        let scale = perspective / depth;
        (x1 * scale, y2 * scale)
    }
}

/// Spring-smoothed tilt that follows the pointer while it hovers the element
/// and eases back to flat when it leaves.
#[derive(Debug, Clone)]
pub struct PointerTiltTransform {
    x: Spring,
    y: Spring,
    max_angle_deg: f32,
    hovering: bool,
    animating: bool,
}

impl Default for PointerTiltTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl PointerTiltTransform {
    pub fn new() -> Self {
        Self::with_spring(TILT_SPRING_STIFFNESS, TILT_SPRING_DAMPING)
    }

    pub fn with_spring(stiffness: f32, damping: f32) -> Self {
        Self {
            x: Spring::new(stiffness, damping),
            y: Spring::new(stiffness, damping),
            max_angle_deg: TILT_MAX_ANGLE_DEG,
            hovering: false,
            animating: false,
        }
    }

    pub fn with_max_angle(mut self, max_angle_deg: f32) -> Self {
        self.max_angle_deg = max_angle_deg;
        self
    }

    /// Pointer moved over the element. Sets the raw target immediately.
    pub fn on_pointer_move(&mut self, pointer_x: f32, pointer_y: f32, bounds: ElementBounds) {
        let target = normalized_offset(pointer_x, pointer_y, bounds);
        self.hovering = true;
        self.set_target(target);
    }

    /// Pointer left the element. The springs ease back to flat.
    pub fn on_pointer_leave(&mut self) {
        self.hovering = false;
        self.set_target(TiltVector::ZERO);
    }

    fn set_target(&mut self, target: TiltVector) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
        self.animating = true;
    }

    /// Advances the springs. Returns true while still moving.
    pub fn step(&mut self, dt: Duration) -> bool {
        if !self.animating {
            return false;
        }
        let moving_x = self.x.update(dt);
        let moving_y = self.y.update(dt);
        self.animating = moving_x || moving_y;
        self.animating
    }

    /// Raw target, as last set by the pointer.
    pub fn target(&self) -> TiltVector {
        TiltVector::new(self.x.target, self.y.target)
    }

    /// Spring-smoothed value currently driving the rotation.
    pub fn smoothed(&self) -> TiltVector {
        TiltVector::new(self.x.position, self.y.position)
    }

    pub fn rotation(&self) -> TiltRotation {
        TiltRotation::from_vector(self.smoothed(), self.max_angle_deg)
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }
}

impl Teardown for PointerTiltTransform {
    fn teardown(&mut self) {
        self.hovering = false;
        self.animating = false;
        self.x.snap_to(0.0);
        self.y.snap_to(0.0);
    }

    fn has_active_resources(&self) -> bool {
        self.animating
    }
}
