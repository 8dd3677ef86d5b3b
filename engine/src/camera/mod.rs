//! Camera Module
//!
//! First-person camera state and the view transform handed to the renderer.
//! This module is window-system agnostic - it only deals with camera state and math.

pub mod first_person;
pub mod view;

pub use first_person::{CameraState, WORLD_UP};
pub use view::ViewTransform;
