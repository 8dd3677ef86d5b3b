//! Forest Walk Engine
//!
//! First-person walk controller for a small outdoor scene: a free-look camera
//! driven by cursor motion, WASD movement relative to the view, an optional
//! jump with gravity, and sliding collision against static scenery boxes.
//!
//! The crate is windowing-agnostic apart from the key binding table, which
//! accepts `winit` key codes. Rendering is left to the caller, which reads a
//! [`camera::ViewTransform`] every frame.
//!
//! # Modules
//!
//! - [`camera`] - Camera state, mouse-look orientation, view transform
//! - [`input`] - Logical keys, key bindings, held-key state, cursor tracking
//! - [`player`] - Movement, jump/gravity and the per-frame controller
//! - [`physics`] - Obstacle boxes and sliding collision resolution
//! - [`world`] - Seeded scenery placement
//! - [`config`] - Tunable parameters and JSON loading
//!
//! # Example
//!
//! ```ignore
//! use forest_walk_engine::config::WalkConfig;
//! use forest_walk_engine::input::{KeyBindings, KeyboardState};
//! use forest_walk_engine::player::FirstPersonController;
//! use forest_walk_engine::world::Scenery;
//!
//! let config = WalkConfig::default();
//! let scenery = Scenery::generate(&config.scenery);
//! let mut controller = FirstPersonController::new(config, &scenery);
//! let bindings = KeyBindings::default();
//! let mut keyboard = KeyboardState::new();
//!
//! // In the event loop:
//! keyboard.handle_key(&bindings, winit::keyboard::KeyCode::KeyW, true);
//! controller.handle_cursor_position(640.0, 360.0);
//!
//! // Once per frame:
//! controller.update(delta_time, &keyboard);
//! keyboard.end_frame();
//! let view = controller.view();
//! ```

pub mod camera;
pub mod config;
pub mod input;
pub mod physics;
pub mod player;
pub mod world;

pub use camera::{CameraState, ViewTransform};
pub use config::{ConfigError, WalkConfig};
pub use input::{InputAction, KeyBindings, KeyboardState};
pub use physics::{ObstacleBox, ObstacleSet};
pub use player::FirstPersonController;
pub use world::{Placement, Scenery, SceneryKind};
