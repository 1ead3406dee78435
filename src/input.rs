//! Input snapshot mutated by platform events
//!
//! The platform layer forwards key and pointer events; the session reads the
//! resulting held-state snapshot once per frame. Pointer positions are screen
//! coordinates and only tracked while the button is held.

use std::collections::{HashMap, HashSet};

use glam::Vec2;

/// Primary pointer button (fires the weapon while held)
pub const PRIMARY_BUTTON: u8 = 0;

/// Keys the simulation cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Move up
    KeyW,
    /// Move left
    KeyA,
    /// Move down
    KeyS,
    /// Move right
    KeyD,
    /// Pause
    Escape,
    /// Start / resume
    Enter,
}

/// Currently-held keys and pointer buttons
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<KeyCode>,
    pointers: HashMap<u8, Vec2>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, code: KeyCode) {
        self.keys.insert(code);
    }

    pub fn key_up(&mut self, code: KeyCode) {
        self.keys.remove(&code);
    }

    pub fn is_held(&self, code: KeyCode) -> bool {
        self.keys.contains(&code)
    }

    pub fn pointer_down(&mut self, button: u8, pos: Vec2) {
        self.pointers.insert(button, pos);
    }

    pub fn pointer_up(&mut self, button: u8) {
        self.pointers.remove(&button);
    }

    /// Update the last known position of every held button
    pub fn pointer_moved(&mut self, pos: Vec2) {
        for held in self.pointers.values_mut() {
            *held = pos;
        }
    }

    /// Last known position of a held button, if held
    pub fn pointer(&self, button: u8) -> Option<Vec2> {
        self.pointers.get(&button).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_held_until_released() {
        let mut input = InputState::new();
        assert!(!input.is_held(KeyCode::KeyW));
        input.key_down(KeyCode::KeyW);
        assert!(input.is_held(KeyCode::KeyW));
        input.key_up(KeyCode::KeyW);
        assert!(!input.is_held(KeyCode::KeyW));
    }

    #[test]
    fn test_pointer_tracked_while_held() {
        let mut input = InputState::new();
        assert_eq!(input.pointer(PRIMARY_BUTTON), None);

        input.pointer_down(PRIMARY_BUTTON, Vec2::new(10.0, 20.0));
        assert_eq!(input.pointer(PRIMARY_BUTTON), Some(Vec2::new(10.0, 20.0)));

        input.pointer_moved(Vec2::new(30.0, 40.0));
        assert_eq!(input.pointer(PRIMARY_BUTTON), Some(Vec2::new(30.0, 40.0)));

        input.pointer_up(PRIMARY_BUTTON);
        assert_eq!(input.pointer(PRIMARY_BUTTON), None);
    }

    #[test]
    fn test_move_ignored_when_nothing_held() {
        let mut input = InputState::new();
        input.pointer_moved(Vec2::new(5.0, 5.0));
        assert_eq!(input.pointer(PRIMARY_BUTTON), None);
    }
}
