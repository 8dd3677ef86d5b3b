//! Keyboard Input Module
//!
//! Held-state tracking for logical actions. Continuous actions (movement)
//! stay active while any bound key is down; the jump action also raises a
//! one-frame trigger on the press edge, and quit latches until reset.

use std::collections::{HashMap, HashSet};

use winit::keyboard::KeyCode;

use super::bindings::{InputAction, KeyBindings};

/// Movement intent derived from the held movement actions.
///
/// Opposing keys cancel out (forward + back = no forward motion).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntent {
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
}

impl MoveIntent {
    /// No movement keys held.
    pub fn none() -> Self {
        Self::default()
    }

    /// Check if any movement key is held.
    pub fn any(&self) -> bool {
        self.forward || self.back || self.left || self.right
    }
}

/// Per-frame keyboard state for the walk controller.
///
/// A press is recorded per source key, so releasing `ArrowUp` while `W` is
/// still down keeps the player walking. Actions set directly through
/// [`KeyboardState::handle_action`] use their own source slot.
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    /// Keys currently holding each action (`None` = set directly, no key)
    held: HashMap<InputAction, HashSet<Option<KeyCode>>>,
    /// Jump pressed this frame (edge, cleared by `end_frame`)
    jump_triggered: bool,
    /// Quit pressed since the last reset
    quit_requested: bool,
}

impl KeyboardState {
    /// Create a keyboard state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a physical key event through a binding table.
    ///
    /// Returns `true` if the key is bound. Unbound keys are ignored.
    pub fn handle_key(&mut self, bindings: &KeyBindings, key: KeyCode, pressed: bool) -> bool {
        match bindings.get_action(key) {
            Some(action) => {
                self.set_held(action, Some(key), pressed);
                true
            }
            None => false,
        }
    }

    /// Press or release a logical action directly (scripted input, tests).
    pub fn handle_action(&mut self, action: InputAction, pressed: bool) {
        self.set_held(action, None, pressed);
    }

    fn set_held(&mut self, action: InputAction, source: Option<KeyCode>, pressed: bool) {
        let was_held = self.is_held(action);
        let sources = self.held.entry(action).or_default();
        if pressed {
            sources.insert(source);
        } else {
            sources.remove(&source);
        }

        if pressed && !was_held {
            match action {
                InputAction::Jump => self.jump_triggered = true,
                InputAction::Quit => self.quit_requested = true,
                _ => {}
            }
        }
    }

    /// Check if an action is held by any source.
    pub fn is_held(&self, action: InputAction) -> bool {
        self.held.get(&action).is_some_and(|sources| !sources.is_empty())
    }

    /// Current movement intent.
    pub fn move_intent(&self) -> MoveIntent {
        MoveIntent {
            forward: self.is_held(InputAction::Forward),
            back: self.is_held(InputAction::Back),
            left: self.is_held(InputAction::Left),
            right: self.is_held(InputAction::Right),
        }
    }

    /// Jump was pressed this frame (edge-triggered).
    pub fn jump_triggered(&self) -> bool {
        self.jump_triggered
    }

    /// Quit was pressed.
    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Clear per-frame edges. Held actions persist until released.
    pub fn end_frame(&mut self) {
        self.jump_triggered = false;
    }

    /// Release everything, e.g. when the window loses focus.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
