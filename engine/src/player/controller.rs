//! First-Person Controller
//!
//! Owns everything the walk needs between frames: the camera, the cursor
//! baseline, the obstacle set and the config. The caller's loop forwards
//! cursor events as they arrive and calls [`FirstPersonController::update`]
//! once per frame.
//!
//! # Frame order
//!
//! 1. Clamp Δt
//! 2. Jump trigger (edge press while grounded)
//! 3. Horizontal move from held keys, resolved against obstacles at eye
//!    height whatever the jump phase
//! 4. Vertical integration (never collision-tested)
//!
//! # Usage
//!
//! ```rust,ignore
//! let scenery = Scenery::generate(&config.scenery);
//! let mut controller = FirstPersonController::new(config, &scenery);
//!
//! controller.handle_cursor_position(x, y);   // on every cursor-moved event
//! controller.update(delta_time, &keyboard);  // once per frame
//! let view = controller.view();
//! ```

use glam::Vec3;

use super::jump::JumpPhase;
use super::movement_controller::horizontal_displacement;
use crate::camera::{CameraState, ViewTransform};
use crate::config::WalkConfig;
use crate::input::{CursorTracker, KeyboardState};
use crate::physics::{MoveResolution, ObstacleSet};
use crate::world::Scenery;

/// What happened during one [`FirstPersonController::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Δt actually used, after clamping.
    pub delta_time: f32,
    /// Horizontal displacement that was applied.
    pub moved: Vec3,
    /// How the horizontal move was resolved.
    pub resolution: MoveResolution,
    /// A jump started this frame.
    pub jumped: bool,
    /// Jump phase at the end of the frame.
    pub phase: JumpPhase,
}

/// First-person walk controller.
#[derive(Debug, Clone)]
pub struct FirstPersonController {
    config: WalkConfig,
    camera: CameraState,
    cursor: CursorTracker,
    cursor_captured: bool,
    obstacles: ObstacleSet,
}

impl FirstPersonController {
    /// Create a controller at the configured spawn point.
    ///
    /// Obstacles are built from `scenery` once here when collision is enabled.
    pub fn new(config: WalkConfig, scenery: &Scenery) -> Self {
        let obstacles = if config.collision.enabled {
            ObstacleSet::from_scenery(scenery, &config.collision)
        } else {
            ObstacleSet::default()
        };
        Self::with_obstacles(config, obstacles)
    }

    /// Create a controller with an explicit obstacle set.
    pub fn with_obstacles(config: WalkConfig, obstacles: ObstacleSet) -> Self {
        let camera = spawn_camera(&config);
        tracing::info!(
            position = ?camera.position,
            yaw = camera.yaw(),
            obstacles = obstacles.len(),
            jump = config.jump.enabled,
            jump_apex = config.jump.apex_height(),
            collision = config.collision.enabled,
            "first-person controller ready"
        );
        Self {
            config,
            camera,
            cursor: CursorTracker::new(),
            cursor_captured: true,
            obstacles,
        }
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn obstacles(&self) -> &ObstacleSet {
        &self.obstacles
    }

    /// Current eye position.
    pub fn position(&self) -> Vec3 {
        self.camera.position
    }

    /// Current unit look direction.
    pub fn forward(&self) -> Vec3 {
        self.camera.forward()
    }

    /// View transform for the renderer.
    pub fn view(&self) -> ViewTransform {
        self.camera.view()
    }

    /// Feed a raw cursor position (pixels) from a cursor-moved event.
    ///
    /// Ignored while the cursor is released. The first sample after creation
    /// or recapture only sets the baseline.
    pub fn handle_cursor_position(&mut self, x: f64, y: f64) {
        if !self.cursor_captured {
            return;
        }
        let (dx, dy) = self.cursor.sample(x, y);
        self.camera.apply_look_delta(dx, dy, self.config.look.sensitivity);
    }

    /// Capture or release the cursor for mouse-look.
    ///
    /// The baseline is dropped on every change so regaining capture cannot
    /// snap the view.
    pub fn set_cursor_captured(&mut self, captured: bool) {
        if captured != self.cursor_captured {
            tracing::debug!(captured, "cursor capture changed");
        }
        self.cursor_captured = captured;
        self.cursor.reset();
    }

    pub fn is_cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Advance one frame.
    pub fn update(&mut self, delta_time: f32, keyboard: &KeyboardState) -> FrameReport {
        let dt = self.config.movement.clamp_delta(delta_time);
        let eye_height = self.config.movement.eye_height;

        let jumped = self.config.jump.enabled
            && keyboard.jump_triggered()
            && self.camera.vertical.try_jump(&self.config.jump);

        let old = self.camera.position;
        let intent = keyboard.move_intent();
        let step = horizontal_displacement(
            intent,
            self.camera.forward(),
            self.camera.right(),
            &self.config.movement,
            dt,
        );

        // Horizontal candidates are always tested at eye height
        let ground = Vec3::new(old.x, eye_height, old.z);
        let tentative = ground + step;
        let (resolved, resolution) = if self.config.collision.enabled && intent.any() {
            self.obstacles
                .resolve_horizontal(ground, tentative, self.config.collision.player_radius)
        } else {
            (tentative, MoveResolution::Full)
        };
        if resolution != MoveResolution::Full {
            tracing::debug!(?resolution, ?old, ?tentative, "move blocked by obstacle");
        }
        self.camera.position = Vec3::new(resolved.x, old.y, resolved.z);

        if self.config.jump.enabled {
            self.camera.vertical.integrate(
                &mut self.camera.position.y,
                eye_height,
                &self.config.jump,
                dt,
            );
        } else {
            self.camera.position.y = eye_height;
        }

        FrameReport {
            delta_time: dt,
            moved: Vec3::new(resolved.x - old.x, 0.0, resolved.z - old.z),
            resolution,
            jumped,
            phase: self.camera.vertical.phase(),
        }
    }

    /// Put the player back at the spawn point, grounded, facing the spawn direction.
    pub fn respawn(&mut self) {
        self.camera = spawn_camera(&self.config);
        self.cursor.reset();
    }
}

fn spawn_camera(config: &WalkConfig) -> CameraState {
    CameraState::with_pitch_limit(
        Vec3::new(config.spawn.x, config.movement.eye_height, config.spawn.z),
        config.spawn.yaw,
        config.spawn.pitch,
        config.look.pitch_limit,
    )
}
