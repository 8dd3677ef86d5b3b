//! Player Module
//!
//! Walking, jumping and the per-frame first-person controller.
//!
//! # Components
//!
//! - [`FirstPersonController`] - Owns camera, cursor baseline and obstacles; one `update` per frame
//! - [`MovementConfig`] - Walk speed, eye height and Δt clamping
//! - [`VerticalMotion`] - Jump state machine with constant gravity

pub mod controller;
pub mod jump;
pub mod movement_controller;

pub use controller::{FirstPersonController, FrameReport};
pub use jump::{JumpConfig, JumpPhase, VerticalMotion};
pub use movement_controller::{MovementConfig, horizontal_displacement, move_direction};
