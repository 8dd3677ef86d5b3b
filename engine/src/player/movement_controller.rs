//! Player Movement
//!
//! Walk displacement for one frame, relative to the camera's look direction.
//!
//! # Movement Model
//!
//! - Forward/back follow the camera forward vector, strafing follows
//!   `normalize(forward × up)`
//! - Displacement is `speed × Δt` per held direction; no acceleration ramp
//! - With `normalize_diagonal` off, holding forward + strafe moves √2 faster
//!   than a single key
//! - Only the horizontal part is applied: looking down while walking slows
//!   horizontal travel, and height is owned by the jump integrator

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::input::MoveIntent;

/// Configuration for walking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    /// Base speed in units per second.
    pub speed: f32,
    /// Eye height above the ground plane.
    pub eye_height: f32,
    /// Normalize the combined direction when several keys are held.
    pub normalize_diagonal: bool,
    /// Longest frame step accepted, in seconds. Longer frames are clamped.
    pub max_delta_time: f32,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            speed: 3.0,
            eye_height: 0.5,
            normalize_diagonal: false,
            max_delta_time: 0.25,
        }
    }
}

impl MovementConfig {
    /// Clamp a raw frame time into `[0, max_delta_time]`.
    ///
    /// Negative and NaN inputs become 0. A negative or NaN limit clamps
    /// everything to 0.
    #[inline]
    pub fn clamp_delta(&self, delta_time: f32) -> f32 {
        // f32::max returns the non-NaN operand
        delta_time.max(0.0).min(self.max_delta_time.max(0.0))
    }
}

/// Unscaled move direction from held keys.
///
/// Forward adds `+forward`, back adds `-forward`, left adds `-right`, right
/// adds `+right`. Normalized only when `normalize` is set (zero stays zero).
pub fn move_direction(intent: MoveIntent, forward: Vec3, right: Vec3, normalize: bool) -> Vec3 {
    let mut direction = Vec3::ZERO;

    if intent.forward {
        direction += forward;
    }
    if intent.back {
        direction -= forward;
    }
    if intent.left {
        direction -= right;
    }
    if intent.right {
        direction += right;
    }

    if normalize {
        direction.normalize_or_zero()
    } else {
        direction
    }
}

/// Horizontal displacement for one frame.
///
/// `delta_time` is expected to be already clamped.
pub fn horizontal_displacement(
    intent: MoveIntent,
    forward: Vec3,
    right: Vec3,
    config: &MovementConfig,
    delta_time: f32,
) -> Vec3 {
    let velocity = config.speed * delta_time;
    let step = move_direction(intent, forward, right, config.normalize_diagonal) * velocity;
    Vec3::new(step.x, 0.0, step.z)
}
