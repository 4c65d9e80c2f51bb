//! Keyboard mapping
//!
//! Translates DOM-style key codes (`ArrowLeft`, `Space`, `KeyR`, `Digit7`, ...) into the
//! semantic actions a session understands. Unknown codes map to nothing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum InputAction {
    AimLeft,
    AimRight,
    AimUp,
    AimDown,
    /// Keypad layout: 1 = left-top, 9 = right-bottom.
    AimZone { digit: u8 },
    Shoot,
    Reset,
}

pub fn map_key(code: &str) -> Option<InputAction> {
    match code {
        "ArrowLeft" | "KeyA" => Some(InputAction::AimLeft),
        "ArrowRight" | "KeyD" => Some(InputAction::AimRight),
        "ArrowUp" | "KeyW" => Some(InputAction::AimUp),
        "ArrowDown" | "KeyS" => Some(InputAction::AimDown),
        "Space" | "Enter" => Some(InputAction::Shoot),
        "KeyR" => Some(InputAction::Reset),
        _ => {
            let digit = code.strip_prefix("Digit").or_else(|| code.strip_prefix("Numpad"))?;
            match digit.parse::<u8>() {
                Ok(d @ 1..=9) => Some(InputAction::AimZone { digit: d }),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key("ArrowLeft"), Some(InputAction::AimLeft));
        assert_eq!(map_key("ArrowRight"), Some(InputAction::AimRight));
        assert_eq!(map_key("ArrowUp"), Some(InputAction::AimUp));
        assert_eq!(map_key("ArrowDown"), Some(InputAction::AimDown));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key("Space"), Some(InputAction::Shoot));
        assert_eq!(map_key("KeyR"), Some(InputAction::Reset));
    }

    #[test]
    fn test_digit_keys() {
        assert_eq!(map_key("Digit1"), Some(InputAction::AimZone { digit: 1 }));
        assert_eq!(map_key("Numpad9"), Some(InputAction::AimZone { digit: 9 }));
        assert_eq!(map_key("Digit0"), None);
        assert_eq!(map_key("Numpad10"), None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        assert_eq!(map_key("KeyQ"), None);
        assert_eq!(map_key(""), None);
        assert_eq!(map_key("Digit"), None);
    }
}
