// Keyboard-to-controller mapping. A single player only; the real NES'
// second controller port is out of scope here.

use super::Controller;
use std::collections::HashSet;
use winit::keyboard::{KeyCode, PhysicalKey};

/// NES controller button enum for mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    A,
    B,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard mapping configuration for the controller.
#[derive(Debug, Clone)]
pub struct KeyboardMapping {
    pub button_a: KeyCode,
    pub button_b: KeyCode,
    pub select: KeyCode,
    pub start: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
}

impl KeyboardMapping {
    /// Default bindings: arrow keys for the D-pad, X/Z for A/B, S for
    /// Start, A for Select.
    pub fn default_bindings() -> Self {
        Self {
            button_a: KeyCode::KeyX,
            button_b: KeyCode::KeyZ,
            select: KeyCode::KeyA,
            start: KeyCode::KeyS,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
        }
    }

    fn get_button(&self, key: KeyCode) -> Option<Button> {
        if key == self.button_a {
            Some(Button::A)
        } else if key == self.button_b {
            Some(Button::B)
        } else if key == self.select {
            Some(Button::Select)
        } else if key == self.start {
            Some(Button::Start)
        } else if key == self.up {
            Some(Button::Up)
        } else if key == self.down {
            Some(Button::Down)
        } else if key == self.left {
            Some(Button::Left)
        } else if key == self.right {
            Some(Button::Right)
        } else {
            None
        }
    }
}

impl Default for KeyboardMapping {
    fn default() -> Self {
        Self::default_bindings()
    }
}

/// Tracks currently-pressed keys and turns them into a `Controller` snapshot.
pub struct KeyboardHandler {
    mapping: KeyboardMapping,
    pressed_keys: HashSet<KeyCode>,
}

impl KeyboardHandler {
    pub fn new() -> Self {
        Self {
            mapping: KeyboardMapping::default_bindings(),
            pressed_keys: HashSet::new(),
        }
    }

    pub fn with_mapping(mapping: KeyboardMapping) -> Self {
        Self {
            mapping,
            pressed_keys: HashSet::new(),
        }
    }

    pub fn handle_key_press(&mut self, physical_key: PhysicalKey) {
        if let PhysicalKey::Code(key_code) = physical_key {
            self.pressed_keys.insert(key_code);
        }
    }

    pub fn handle_key_release(&mut self, physical_key: PhysicalKey) {
        if let PhysicalKey::Code(key_code) = physical_key {
            self.pressed_keys.remove(&key_code);
        }
    }

    fn is_button_pressed(&self, button: Button) -> bool {
        self.pressed_keys
            .iter()
            .any(|&key| self.mapping.get_button(key) == Some(button))
    }

    pub fn controller_state(&self) -> Controller {
        Controller {
            button_a: self.is_button_pressed(Button::A),
            button_b: self.is_button_pressed(Button::B),
            select: self.is_button_pressed(Button::Select),
            start: self.is_button_pressed(Button::Start),
            up: self.is_button_pressed(Button::Up),
            down: self.is_button_pressed(Button::Down),
            left: self.is_button_pressed(Button::Left),
            right: self.is_button_pressed(Button::Right),
        }
    }

    pub fn mapping(&self) -> &KeyboardMapping {
        &self.mapping
    }

    pub fn set_mapping(&mut self, mapping: KeyboardMapping) {
        self.mapping = mapping;
    }
}

impl Default for KeyboardHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_match_spec() {
        let mapping = KeyboardMapping::default_bindings();
        assert_eq!(mapping.button_a, KeyCode::KeyX);
        assert_eq!(mapping.button_b, KeyCode::KeyZ);
        assert_eq!(mapping.select, KeyCode::KeyA);
        assert_eq!(mapping.start, KeyCode::KeyS);
        assert_eq!(mapping.up, KeyCode::ArrowUp);
        assert_eq!(mapping.down, KeyCode::ArrowDown);
        assert_eq!(mapping.left, KeyCode::ArrowLeft);
        assert_eq!(mapping.right, KeyCode::ArrowRight);
    }

    #[test]
    fn no_keys_pressed_yields_empty_controller() {
        let handler = KeyboardHandler::new();
        let controller = handler.controller_state();
        assert_eq!(controller, Controller::new());
    }

    #[test]
    fn pressing_x_sets_button_a() {
        let mut handler = KeyboardHandler::new();
        handler.handle_key_press(PhysicalKey::Code(KeyCode::KeyX));
        assert!(handler.controller_state().button_a);
    }

    #[test]
    fn release_clears_button() {
        let mut handler = KeyboardHandler::new();
        handler.handle_key_press(PhysicalKey::Code(KeyCode::KeyX));
        handler.handle_key_release(PhysicalKey::Code(KeyCode::KeyX));
        assert!(!handler.controller_state().button_a);
    }

    #[test]
    fn simultaneous_presses_are_all_reported() {
        let mut handler = KeyboardHandler::new();
        handler.handle_key_press(PhysicalKey::Code(KeyCode::KeyX));
        handler.handle_key_press(PhysicalKey::Code(KeyCode::ArrowUp));
        handler.handle_key_press(PhysicalKey::Code(KeyCode::ArrowRight));
        let controller = handler.controller_state();
        assert!(controller.button_a);
        assert!(controller.up);
        assert!(controller.right);
    }

    #[test]
    fn custom_mapping_overrides_defaults() {
        let custom = KeyboardMapping {
            button_a: KeyCode::Space,
            ..KeyboardMapping::default_bindings()
        };
        let mut handler = KeyboardHandler::with_mapping(custom);
        handler.handle_key_press(PhysicalKey::Code(KeyCode::Space));
        assert!(handler.controller_state().button_a);
    }
}
