use serde::{Deserialize, Serialize};

use super::{Input, Key};

/// Logical buttons the quick menu reacts to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MenuButton {
    Up,
    Down,
    Confirm,
    Cancel,
    /// Opens the menu on release. May share a key with `Cancel`.
    Open,
}

/// Maps logical menu buttons to keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuBindings {
    pub up: Key,
    pub down: Key,
    pub confirm: Key,
    pub cancel: Key,
    pub open: Key,
}

impl Default for MenuBindings {
    fn default() -> Self {
        Self {
            up: Key::ArrowUp,
            down: Key::ArrowDown,
            confirm: Key::Space,
            cancel: Key::Escape,
            open: Key::Escape,
        }
    }
}

impl MenuBindings {
    #[must_use]
    pub fn key_for(&self, button: MenuButton) -> Key {
        match button {
            MenuButton::Up => self.up,
            MenuButton::Down => self.down,
            MenuButton::Confirm => self.confirm,
            MenuButton::Cancel => self.cancel,
            MenuButton::Open => self.open,
        }
    }

    /// Samples the logical buttons for this frame.
    #[must_use]
    pub fn sample(&self, input: &Input) -> MenuInput {
        MenuInput {
            up: input.get_key(self.up),
            down: input.get_key(self.down),
            confirm: input.get_key(self.confirm),
            cancel: input.get_key(self.cancel),
            open_released: input.get_key_up(self.open),
        }
    }
}

/// Logical input snapshot for one frame.
///
/// Up/Down/Confirm/Cancel are level-triggered (held). Opening is
/// edge-triggered on release so the press that opens the menu cannot also
/// act inside it.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct MenuInput {
    pub up: bool,
    pub down: bool,
    pub confirm: bool,
    pub cancel: bool,
    pub open_released: bool,
}

impl MenuInput {
    #[must_use]
    pub fn held(button: MenuButton) -> Self {
        let mut input = Self::default();
        match button {
            MenuButton::Up => input.up = true,
            MenuButton::Down => input.down = true,
            MenuButton::Confirm => input.confirm = true,
            MenuButton::Cancel => input.cancel = true,
            MenuButton::Open => input.open_released = true,
        }
        input
    }
}
