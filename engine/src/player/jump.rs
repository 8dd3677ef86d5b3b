//! Jump and Gravity
//!
//! Two-state vertical motion: the player stands at eye height (Grounded)
//! until a jump launches them (Airborne); gravity then brings them back.
//!
//! Integration is semi-implicit Euler at the frame's Δt with no fixed
//! timestep: `y += v·Δt`, then `v -= g·Δt`. Landing clamps to the floor and
//! zeroes the velocity exactly.

use serde::{Deserialize, Serialize};

/// Jump tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JumpConfig {
    /// When false the eye height is pinned every frame and jump presses are ignored.
    pub enabled: bool,
    /// Upward velocity at launch, units per second.
    pub launch_speed: f32,
    /// Downward acceleration, units per second squared.
    pub gravity: f32,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            launch_speed: 4.0,
            gravity: 9.8,
        }
    }
}

impl JumpConfig {
    /// Peak height above the floor for a full jump, `v² / 2g`.
    pub fn apex_height(&self) -> f32 {
        self.launch_speed * self.launch_speed / (2.0 * self.gravity)
    }
}

/// Jump state machine states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpPhase {
    #[default]
    Grounded,
    Airborne,
}

/// Vertical velocity and jump phase of the player.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerticalMotion {
    phase: JumpPhase,
    velocity: f32,
}

impl VerticalMotion {
    /// Current phase.
    #[inline]
    pub fn phase(&self) -> JumpPhase {
        self.phase
    }

    /// Current vertical velocity (positive = up).
    #[inline]
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.phase == JumpPhase::Grounded
    }

    /// Launch a jump if grounded.
    ///
    /// Returns `true` if the jump started. A trigger while airborne is ignored.
    pub fn try_jump(&mut self, config: &JumpConfig) -> bool {
        if self.phase != JumpPhase::Grounded {
            return false;
        }
        self.phase = JumpPhase::Airborne;
        self.velocity = config.launch_speed;
        tracing::debug!(launch_speed = config.launch_speed, "jump");
        true
    }

    /// Advance height `y` by one frame.
    ///
    /// Grounded: `y` is pinned to `floor`. Airborne: integrate, and land once
    /// the player is at or below `floor` while not rising.
    pub fn integrate(&mut self, y: &mut f32, floor: f32, config: &JumpConfig, dt: f32) {
        match self.phase {
            JumpPhase::Grounded => {
                *y = floor;
            }
            JumpPhase::Airborne => {
                *y += self.velocity * dt;
                self.velocity -= config.gravity * dt;

                if *y <= floor && self.velocity <= 0.0 {
                    *y = floor;
                    self.velocity = 0.0;
                    self.phase = JumpPhase::Grounded;
                    tracing::debug!("landed");
                }
            }
        }
    }

    /// Drop back to the ground state immediately.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FLOOR: f32 = 0.5;

    #[test]
    fn test_default_grounded() {
        let motion = VerticalMotion::default();
        assert_eq!(motion.phase(), JumpPhase::Grounded);
        assert_eq!(motion.velocity(), 0.0);
    }

    #[test]
    fn test_jump_sets_launch_velocity() {
        let config = JumpConfig::default();
        let mut motion = VerticalMotion::default();

        assert!(motion.try_jump(&config));
        assert_eq!(motion.phase(), JumpPhase::Airborne);
        assert_eq!(motion.velocity(), config.launch_speed);
    }

    #[test]
    fn test_no_double_jump() {
        let config = JumpConfig::default();
        let mut motion = VerticalMotion::default();
        let mut y = FLOOR;

        motion.try_jump(&config);
        motion.integrate(&mut y, FLOOR, &config, 0.1);
        let velocity = motion.velocity();

        assert!(!motion.try_jump(&config));
        assert_eq!(motion.velocity(), velocity);
    }

    #[test]
    fn test_full_jump_returns_to_ground() {
        let config = JumpConfig::default();
        let mut motion = VerticalMotion::default();
        let mut y = FLOOR;
        let mut peak = y;

        motion.try_jump(&config);
        let mut frames = 0;
        while !motion.is_grounded() {
            motion.integrate(&mut y, FLOOR, &config, 1.0 / 60.0);
            peak = peak.max(y);
            frames += 1;
            assert!(frames < 1000, "jump never landed");
        }

        assert_eq!(y, FLOOR);
        assert_eq!(motion.velocity(), 0.0);
        assert_eq!(motion.phase(), JumpPhase::Grounded);
        // Discrete integration overshoots the analytic apex slightly
        assert!((peak - FLOOR - config.apex_height()).abs() < 0.1);
    }

    #[test]
    fn test_zero_dt_does_not_land_on_launch_frame() {
        let config = JumpConfig::default();
        let mut motion = VerticalMotion::default();
        let mut y = FLOOR;

        motion.try_jump(&config);
        motion.integrate(&mut y, FLOOR, &config, 0.0);

        assert_eq!(y, FLOOR);
        assert_eq!(motion.phase(), JumpPhase::Airborne);
        assert_eq!(motion.velocity(), config.launch_speed);
    }

    #[test]
    fn test_grounded_pins_height() {
        let config = JumpConfig::default();
        let mut motion = VerticalMotion::default();
        let mut y = 3.0;
        motion.integrate(&mut y, FLOOR, &config, 0.016);
        assert_eq!(y, FLOOR);
    }

    #[test]
    fn test_large_step_clamps_to_floor() {
        let config = JumpConfig::default();
        let mut motion = VerticalMotion::default();
        let mut y = FLOOR;

        motion.try_jump(&config);
        // 2.5, 2.05, then far below the floor on the third step
        for _ in 0..3 {
            motion.integrate(&mut y, FLOOR, &config, 0.5);
        }

        assert_eq!(y, FLOOR);
        assert!(motion.is_grounded());
        assert_eq!(motion.velocity(), 0.0);
    }

    #[test]
    fn test_apex_height() {
        let config = JumpConfig {
            enabled: true,
            launch_speed: 4.0,
            gravity: 8.0,
        };
        assert_eq!(config.apex_height(), 1.0);
    }
}
