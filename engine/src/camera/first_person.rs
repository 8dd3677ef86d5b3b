//! First-Person Camera State
//!
//! Mouse-look camera for walking through the scene. Orientation is kept as
//! yaw/pitch in degrees and the forward vector is recomputed from them after
//! every rotation, so it always stays unit length.
//!
//! Key features:
//! - Cursor delta (pixels) scaled by a sensitivity in degrees per pixel
//! - Yaw unbounded, pitch clamped to ±89 degrees to prevent flipping over the poles
//! - Constant world up vector (0, 1, 0)
//! - Vertical motion (jump/gravity) carried alongside the position it moves

use glam::Vec3;

use super::view::ViewTransform;
use crate::player::jump::VerticalMotion;

/// World up vector. The camera never rolls.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Default pitch limit in degrees.
pub const DEFAULT_PITCH_LIMIT: f32 = 89.0;

/// Default yaw in degrees. With pitch 0 this looks down -Z.
pub const DEFAULT_YAW: f32 = -90.0;

/// Computes the unit look direction for yaw/pitch given in degrees.
///
/// `(cos(yaw)cos(pitch), sin(pitch), sin(yaw)cos(pitch))`, normalized.
#[inline]
pub fn direction_from_angles(yaw_degrees: f32, pitch_degrees: f32) -> Vec3 {
    let yaw = yaw_degrees.to_radians();
    let pitch = pitch_degrees.to_radians();
    Vec3::new(
        yaw.cos() * pitch.cos(),
        pitch.sin(),
        yaw.sin() * pitch.cos(),
    )
    .normalize()
}

/// Camera position and orientation for the walking player.
///
/// ## Usage
/// ```rust,ignore
/// let mut camera = CameraState::new(Vec3::new(0.0, 0.5, 5.0), -90.0, 0.0);
///
/// // Scaled cursor delta, vertical already inverted (positive = look up)
/// camera.rotate(1.0, -0.5);
///
/// let forward = camera.forward();
/// let right = camera.right();
/// ```
#[derive(Clone, Debug)]
pub struct CameraState {
    /// Eye position in world space
    pub position: Vec3,
    /// Vertical velocity and jump phase
    pub vertical: VerticalMotion,
    /// Horizontal angle (degrees) - unrestricted
    yaw: f32,
    /// Vertical angle (degrees) - clamped to ±pitch_limit
    pitch: f32,
    /// Pitch limit in degrees, strictly below 90
    pitch_limit: f32,
    /// Unit look direction derived from yaw/pitch
    forward: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(Vec3::ZERO, DEFAULT_YAW, 0.0)
    }
}

impl CameraState {
    /// Create a camera at `position` looking along the given yaw/pitch (degrees).
    pub fn new(position: Vec3, yaw: f32, pitch: f32) -> Self {
        Self::with_pitch_limit(position, yaw, pitch, DEFAULT_PITCH_LIMIT)
    }

    /// Create a camera with a custom pitch limit (degrees).
    ///
    /// The limit is clamped into `[0, 89.9]` so the forward vector can never
    /// become parallel to the up vector. A NaN limit falls back to
    /// [`DEFAULT_PITCH_LIMIT`] and NaN angles to 0.
    pub fn with_pitch_limit(position: Vec3, yaw: f32, pitch: f32, pitch_limit: f32) -> Self {
        let pitch_limit = if pitch_limit.is_nan() {
            DEFAULT_PITCH_LIMIT
        } else {
            pitch_limit.clamp(0.0, 89.9)
        };
        let yaw = if yaw.is_finite() { yaw } else { 0.0 };
        let pitch = if pitch.is_nan() { 0.0 } else { pitch.clamp(-pitch_limit, pitch_limit) };
        Self {
            position,
            vertical: VerticalMotion::default(),
            yaw,
            pitch,
            pitch_limit,
            forward: direction_from_angles(yaw, pitch),
        }
    }

    /// Current yaw in degrees.
    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Pitch limit in degrees.
    #[inline]
    pub fn pitch_limit(&self) -> f32 {
        self.pitch_limit
    }

    /// Unit look direction.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    /// Constant up vector.
    #[inline]
    pub fn up(&self) -> Vec3 {
        WORLD_UP
    }

    /// Unit right vector, `normalize(forward × up)`.
    ///
    /// Perpendicular to both forward and up. Well defined because the pitch
    /// clamp keeps forward off the up axis.
    #[inline]
    pub fn right(&self) -> Vec3 {
        self.forward.cross(WORLD_UP).normalize()
    }

    /// Add yaw/pitch deltas in degrees and recompute the forward vector.
    ///
    /// Positive pitch looks up. Pitch is clamped to ±pitch_limit.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-self.pitch_limit, self.pitch_limit);
        self.forward = direction_from_angles(self.yaw, self.pitch);
    }

    /// Apply a cursor delta in pixels.
    ///
    /// `dx` positive turns right, `dy` positive looks up (screen Y is already
    /// inverted by the cursor tracker). `sensitivity` is degrees per pixel.
    pub fn apply_look_delta(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        self.rotate(dx * sensitivity, dy * sensitivity);
    }

    /// Eye/target/up triple for the renderer.
    pub fn view(&self) -> ViewTransform {
        ViewTransform::new(self.position, self.forward, WORLD_UP)
    }
}
