//! Input Bindings Module
//!
//! Maps `winit` physical key codes to the logical actions the walk
//! controller understands. Several keys may drive the same action (WASD and
//! the arrow keys both move).

use std::collections::HashMap;

use winit::keyboard::KeyCode;

/// Logical input actions, independent of their physical keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Move forward (default: W, ArrowUp)
    Forward,
    /// Move backward (default: S, ArrowDown)
    Back,
    /// Strafe left (default: A, ArrowLeft)
    Left,
    /// Strafe right (default: D, ArrowRight)
    Right,
    /// Jump (default: Space)
    Jump,
    /// Leave the walk loop (default: Escape)
    Quit,
}

impl InputAction {
    /// All actions, in a stable order.
    pub const ALL: [InputAction; 6] = [
        InputAction::Forward,
        InputAction::Back,
        InputAction::Left,
        InputAction::Right,
        InputAction::Jump,
        InputAction::Quit,
    ];
}

/// Maps physical keys to logical actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    key_to_action: HashMap<KeyCode, InputAction>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings with the default layout.
    ///
    /// - W / ArrowUp = Forward
    /// - S / ArrowDown = Back
    /// - A / ArrowLeft = Left
    /// - D / ArrowRight = Right
    /// - Space = Jump
    /// - Escape = Quit
    pub fn new() -> Self {
        let mut bindings = Self::empty();

        bindings.bind(KeyCode::KeyW, InputAction::Forward);
        bindings.bind(KeyCode::KeyS, InputAction::Back);
        bindings.bind(KeyCode::KeyA, InputAction::Left);
        bindings.bind(KeyCode::KeyD, InputAction::Right);
        bindings.bind(KeyCode::ArrowUp, InputAction::Forward);
        bindings.bind(KeyCode::ArrowDown, InputAction::Back);
        bindings.bind(KeyCode::ArrowLeft, InputAction::Left);
        bindings.bind(KeyCode::ArrowRight, InputAction::Right);
        bindings.bind(KeyCode::Space, InputAction::Jump);
        bindings.bind(KeyCode::Escape, InputAction::Quit);

        bindings
    }

    /// Bindings with no keys mapped.
    pub fn empty() -> Self {
        Self {
            key_to_action: HashMap::new(),
        }
    }

    /// Bind a physical key to an action, replacing any previous binding of that key.
    pub fn bind(&mut self, key: KeyCode, action: InputAction) {
        self.key_to_action.insert(key, action);
    }

    /// Remove the binding for a key.
    pub fn unbind_key(&mut self, key: KeyCode) {
        self.key_to_action.remove(&key);
    }

    /// Action bound to a key. Unbound keys yield `None` and are ignored by callers.
    pub fn get_action(&self, key: KeyCode) -> Option<InputAction> {
        self.key_to_action.get(&key).copied()
    }

    /// All keys bound to an action, sorted for stable display.
    pub fn keys_for(&self, action: InputAction) -> Vec<KeyCode> {
        let mut keys: Vec<KeyCode> = self
            .key_to_action
            .iter()
            .filter(|(_, a)| **a == action)
            .map(|(k, _)| *k)
            .collect();
        keys.sort_by_key(|k| format!("{k:?}"));
        keys
    }
}
