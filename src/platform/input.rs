//! Keyboard input mapping

/// Actions the player can trigger from the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value to an action
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " => Some(KeyAction::Jump),
            _ => None,
        }
    }
}
