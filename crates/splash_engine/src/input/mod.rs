//! Input management system
//!
//! The window layer feeds key events into an [`InputState`]; gameplay only
//! ever sees the [`InputSource`] view of it, polled once per frame.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only view of keyboard state for one frame
pub trait InputSource {
    /// Whether the key is currently held down
    fn is_key_held(&self, key: KeyCode) -> bool;

    /// Whether the key went down since the previous frame
    fn was_key_pressed(&self, key: KeyCode) -> bool;
}

/// Keyboard state tracker
#[derive(Debug, Default, Clone)]
pub struct InputState {
    held: HashSet<KeyCode>,
    pressed: HashSet<KeyCode>,
}

impl InputState {
    /// Create an input state with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame: forget the previous frame's key-down edges
    pub fn begin_frame(&mut self) {
        self.pressed.clear();
    }

    /// Handle key input
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            // Auto-repeat events for an already held key are not new presses
            if self.held.insert(key) {
                self.pressed.insert(key);
            }
        } else {
            self.held.remove(&key);
        }
    }

    /// Press and release a key within the same frame
    pub fn tap(&mut self, key: KeyCode) {
        self.handle_key_input(key, true);
        self.handle_key_input(key, false);
    }

    /// Release every key
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputSource for InputState {
    fn is_key_held(&self, key: KeyCode) -> bool {
        self.held.contains(&key)
    }

    fn was_key_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }
}

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// A key
    A,
    /// B key
    B,
    /// C key
    C,
    /// D key
    D,
    /// E key
    E,
    /// F key
    F,
    /// G key
    G,
    /// H key
    H,
    /// I key
    I,
    /// J key
    J,
    /// K key
    K,
    /// L key
    L,
    /// M key
    M,
    /// N key
    N,
    /// O key
    O,
    /// P key
    P,
    /// Q key
    Q,
    /// R key
    R,
    /// S key
    S,
    /// T key
    T,
    /// U key
    U,
    /// V key
    V,
    /// W key
    W,
    /// X key
    X,
    /// Y key
    Y,
    /// Z key
    Z,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_held_and_edge() {
        let mut input = InputState::new();
        input.handle_key_input(KeyCode::W, true);

        assert!(input.is_key_held(KeyCode::W));
        assert!(input.was_key_pressed(KeyCode::W));
    }

    #[test]
    fn test_edge_cleared_next_frame_but_still_held() {
        let mut input = InputState::new();
        input.handle_key_input(KeyCode::E, true);
        input.begin_frame();

        assert!(input.is_key_held(KeyCode::E));
        assert!(!input.was_key_pressed(KeyCode::E));
    }

    #[test]
    fn test_repeat_event_is_not_a_new_press() {
        let mut input = InputState::new();
        input.handle_key_input(KeyCode::O, true);
        input.begin_frame();
        input.handle_key_input(KeyCode::O, true);

        assert!(!input.was_key_pressed(KeyCode::O));
    }

    #[test]
    fn test_tap_registers_press_without_hold() {
        let mut input = InputState::new();
        input.tap(KeyCode::Enter);

        assert!(input.was_key_pressed(KeyCode::Enter));
        assert!(!input.is_key_held(KeyCode::Enter));
    }
}
