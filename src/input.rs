//! Keyboard and pointer state tracking over raw winit events.
//!
//! Tracks held keys so OS auto-repeat never re-fires a press, and keeps the
//! latest pointer position for the starfield drift. Key transitions are
//! surfaced to the caller, which routes them to the spacecraft intent.

use glam::Vec2;
use std::collections::HashSet;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

/// The keys this scene reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    Other,
}

impl From<WinitKeyCode> for KeyCode {
    fn from(key: WinitKeyCode) -> Self {
        match key {
            WinitKeyCode::ArrowUp => KeyCode::Up,
            WinitKeyCode::ArrowDown => KeyCode::Down,
            WinitKeyCode::ArrowLeft => KeyCode::Left,
            WinitKeyCode::ArrowRight => KeyCode::Right,
            WinitKeyCode::KeyW => KeyCode::W,
            WinitKeyCode::KeyS => KeyCode::S,
            _ => KeyCode::Other,
        }
    }
}

/// A debounced key state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyTransition {
    pub key: KeyCode,
    pub pressed: bool,
}

#[derive(Debug, Default)]
pub struct Input {
    keys_held: HashSet<KeyCode>,
    mouse_position: Vec2,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a key is currently held down.
    pub fn key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Latest pointer position in physical pixels.
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Process a winit window event. Returns a transition when a key of
    /// interest actually changed state (auto-repeat presses are swallowed).
    pub fn handle_event(&mut self, event: &WindowEvent) -> Option<KeyTransition> {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return None;
                };
                let key = KeyCode::from(keycode);
                if key == KeyCode::Other {
                    return None;
                }
                match event.state {
                    ElementState::Pressed => {
                        if self.keys_held.insert(key) {
                            Some(KeyTransition { key, pressed: true })
                        } else {
                            None
                        }
                    }
                    ElementState::Released => {
                        self.keys_held.remove(&key);
                        Some(KeyTransition {
                            key,
                            pressed: false,
                        })
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.mouse_position = Vec2::new(position.x as f32, position.y as f32);
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracked_key_mapping() {
        assert_eq!(KeyCode::from(WinitKeyCode::ArrowUp), KeyCode::Up);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyW), KeyCode::W);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyS), KeyCode::S);
        // Everything outside the flight vocabulary collapses to Other.
        assert_eq!(KeyCode::from(WinitKeyCode::Space), KeyCode::Other);
        assert_eq!(KeyCode::from(WinitKeyCode::KeyA), KeyCode::Other);
    }

    #[test]
    fn held_state_round_trips() {
        let mut input = Input::new();
        assert!(!input.key_held(KeyCode::Right));

        input.keys_held.insert(KeyCode::Right);
        assert!(input.key_held(KeyCode::Right));

        input.keys_held.remove(&KeyCode::Right);
        assert!(!input.key_held(KeyCode::Right));
    }
}
