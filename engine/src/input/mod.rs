//! Input Module
//!
//! Turns raw window events into the per-frame input the controller consumes:
//! held logical keys, a debounced jump trigger, a quit request and cursor
//! deltas. Only [`bindings`] knows about `winit`; everything downstream works
//! on [`InputAction`].
//!
//! # Example
//!
//! ```rust,ignore
//! use forest_walk_engine::input::{CursorTracker, KeyBindings, KeyboardState};
//! use winit::keyboard::KeyCode;
//!
//! let bindings = KeyBindings::default();
//! let mut keyboard = KeyboardState::new();
//! let mut cursor = CursorTracker::new();
//!
//! keyboard.handle_key(&bindings, KeyCode::KeyW, true);
//! let (dx, dy) = cursor.sample(640.0, 360.0); // first sample: (0, 0)
//!
//! if keyboard.quit_requested() {
//!     // leave the loop
//! }
//! keyboard.end_frame();
//! ```

pub mod bindings;
pub mod keyboard;
pub mod mouse_state;

pub use bindings::{InputAction, KeyBindings};
pub use keyboard::{KeyboardState, MoveIntent};
pub use mouse_state::CursorTracker;
