use std::collections::HashMap;

use serde::{Deserialize, Serialize};

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const LEFT  = 1 << 0;
        const RIGHT = 1 << 1;
        const UP    = 1 << 2;
        const DOWN  = 1 << 3;
        const JUMP  = 1 << 4;
        const RESET = 1 << 5; // debug: snap back to the reset point
    }
}

/// Key identifiers (as reported by the host, e.g. `KeyboardEvent.key`)
/// for each button.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left: String,
    pub right: String,
    pub up: String,
    pub down: String,
    pub jump: String,
    pub reset: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: "a".into(),
            right: "d".into(),
            up: "w".into(),
            down: "s".into(),
            jump: " ".into(),
            reset: "r".into(),
        }
    }
}

impl KeyBindings {
    fn pairs(&self) -> [(&str, Buttons); 6] {
        [
            (self.left.as_str(), Buttons::LEFT),
            (self.right.as_str(), Buttons::RIGHT),
            (self.up.as_str(), Buttons::UP),
            (self.down.as_str(), Buttons::DOWN),
            (self.jump.as_str(), Buttons::JUMP),
            (self.reset.as_str(), Buttons::RESET),
        ]
    }
}

/// Pressed-state per key, written by host key events and sampled once per
/// tick. Later writes win; there is no queueing between ticks.
#[derive(Clone, Debug, Default)]
pub struct Keyboard {
    keys: HashMap<String, bool>,
}

impl Keyboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: &str) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: &str) {
        self.set(key, false);
    }

    pub fn set(&mut self, key: &str, pressed: bool) {
        match self.keys.get_mut(key) {
            Some(state) => *state = pressed,
            None => {
                self.keys.insert(key.to_owned(), pressed);
            }
        }
    }

    pub fn is_down(&self, key: &str) -> bool {
        self.keys.get(key).copied().unwrap_or(false)
    }

    pub fn release_all(&mut self) {
        self.keys.values_mut().for_each(|v| *v = false);
    }

    pub fn buttons(&self, bindings: &KeyBindings) -> Buttons {
        bindings
            .pairs()
            .into_iter()
            .filter(|(key, _)| self.is_down(key))
            .fold(Buttons::empty(), |acc, (_, b)| acc | b)
    }
}
