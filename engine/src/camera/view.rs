//! View transform handed to the renderer.

use glam::{Mat4, Vec3};

/// Eye/target/up triple built from the camera every frame.
///
/// `target = eye + forward`, so the look direction is `target - eye`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl ViewTransform {
    /// Build a view transform from an eye position and a unit forward vector.
    pub fn new(eye: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            target: eye + forward,
            up,
        }
    }

    /// Right-handed look-at matrix (OpenGL convention).
    pub fn matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_is_one_unit_ahead() {
        let view = ViewTransform::new(Vec3::new(1.0, 0.5, 5.0), Vec3::NEG_Z, Vec3::Y);
        assert_eq!(view.target, Vec3::new(1.0, 0.5, 4.0));
        assert_eq!(view.up, Vec3::Y);
    }

    #[test]
    fn test_matrix_moves_eye_to_origin() {
        let eye = Vec3::new(3.0, 0.5, -2.0);
        let view = ViewTransform::new(eye, Vec3::NEG_Z, Vec3::Y);
        let in_view = view.matrix().transform_point3(eye);
        assert!(in_view.length() < 1e-5);
    }

    #[test]
    fn test_matrix_puts_target_in_front() {
        let view = ViewTransform::new(Vec3::ZERO, Vec3::X, Vec3::Y);
        let in_view = view.matrix().transform_point3(view.target);
        // Right-handed view space looks down -Z
        assert!((in_view - Vec3::NEG_Z).length() < 1e-5);
    }
}
