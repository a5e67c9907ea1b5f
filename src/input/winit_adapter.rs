//! Winit input event adapter
//!
//! Translates Winit keyboard events into the crate's platform-agnostic input types.

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use crate::input::{ButtonState, Input, Key};

/// Converts a Winit `PhysicalKey` into a [`Key`]
#[must_use]
pub fn translate_key(physical_key: PhysicalKey) -> Option<Key> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };

    let key = match code {
        KeyCode::KeyA => Key::A,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyZ => Key::Z,

        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,

        KeyCode::Space => Key::Space,
        KeyCode::Enter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Tab => Key::Tab,

        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,

        KeyCode::Numpad2 => Key::Numpad2,
        KeyCode::Numpad8 => Key::Numpad8,
        KeyCode::NumpadEnter => Key::NumpadEnter,

        _ => return None,
    };

    Some(key)
}

/// Converts a Winit `ElementState` into a [`ButtonState`]
#[must_use]
pub fn translate_element_state(state: ElementState) -> ButtonState {
    match state {
        ElementState::Pressed => ButtonState::Pressed,
        ElementState::Released => ButtonState::Released,
    }
}

/// Feeds a Winit window event into [`Input`]. Non-keyboard events are ignored.
pub fn process_window_event(input: &mut Input, event: &WindowEvent) {
    if let WindowEvent::KeyboardInput { event, .. } = event {
        if let Some(key) = translate_key(event.physical_key) {
            input.inject_key(key, translate_element_state(event.state));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::keyboard::NativeKeyCode;

    #[test]
    fn maps_menu_keys_and_drops_unknown_ones() {
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::ArrowUp)), Some(Key::ArrowUp));
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::Escape)), Some(Key::Escape));
        assert_eq!(translate_key(PhysicalKey::Code(KeyCode::KeyP)), None);
        assert_eq!(
            translate_key(PhysicalKey::Unidentified(NativeKeyCode::Unidentified)),
            None
        );
        assert_eq!(translate_element_state(ElementState::Released), ButtonState::Released);
    }
}
