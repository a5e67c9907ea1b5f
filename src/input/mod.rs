//! Platform-agnostic input system
//!
//! Defines keyboard types and a state container that do not depend on any
//! windowing library. Platform adapters (e.g., the Winit adapter behind the
//! `winit` feature) translate platform events into these types, and
//! [`MenuBindings`] reduces the raw key state to the five logical buttons the
//! quick menu reacts to.

mod bindings;
#[cfg(feature = "winit")]
pub mod winit_adapter;

pub use bindings::{MenuBindings, MenuButton, MenuInput};

use std::collections::HashSet;

/// Keyboard key enumeration (platform-agnostic)
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Key {
    // Letter keys
    A,
    D,
    E,
    Q,
    S,
    W,
    X,
    Z,

    // Function keys
    F1,
    F2,
    F3,
    F4,

    // Control keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Numpad
    Numpad2,
    Numpad8,
    NumpadEnter,
}

/// Button state
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Platform-agnostic keyboard state container
#[derive(Debug, Clone, Default)]
pub struct Input {
    pressed_keys: HashSet<Key>,
    just_pressed_keys: HashSet<Key>,
    just_released_keys: HashSet<Key>,
}

impl Input {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // ========== System API (called by Host/Adapter) ==========

    /// Clears transient state at the start of each frame (JustPressed/JustReleased)
    pub fn start_frame(&mut self) {
        self.just_pressed_keys.clear();
        self.just_released_keys.clear();
    }

    /// Injects a keyboard event
    pub fn inject_key(&mut self, key: Key, state: ButtonState) {
        match state {
            ButtonState::Pressed => {
                if self.pressed_keys.insert(key) {
                    self.just_pressed_keys.insert(key);
                }
            }
            ButtonState::Released => {
                if self.pressed_keys.remove(&key) {
                    self.just_released_keys.insert(key);
                }
            }
        }
    }

    // ========== User API (for menu/game logic queries) ==========

    /// Checks whether a key is currently held down
    #[must_use]
    pub fn get_key(&self, key: Key) -> bool {
        self.pressed_keys.contains(&key)
    }

    /// Checks whether a key was just pressed this frame
    #[must_use]
    pub fn get_key_down(&self, key: Key) -> bool {
        self.just_pressed_keys.contains(&key)
    }

    /// Checks whether a key was just released this frame
    #[must_use]
    pub fn get_key_up(&self, key: Key) -> bool {
        self.just_released_keys.contains(&key)
    }
}
