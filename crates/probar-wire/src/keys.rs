//! WebDriver key codes and modifier key actions.
//!
//! Key down / key up only make sense for modifier keys: any other key would
//! stay "pressed" on the remote end. [`KeyAction`] can therefore only be
//! built through a validating constructor.

use serde::Serialize;

use crate::result::{WireError, WireResult};

/// WebDriver key code points (Unicode private use area)
#[derive(Debug, Clone, Copy)]
pub struct Keys;

impl Keys {
    /// Release all modifiers
    pub const NULL: &'static str = "\u{E000}";
    /// Cancel
    pub const CANCEL: &'static str = "\u{E001}";
    /// Help
    pub const HELP: &'static str = "\u{E002}";
    /// Backspace
    pub const BACKSPACE: &'static str = "\u{E003}";
    /// Tab
    pub const TAB: &'static str = "\u{E004}";
    /// Clear
    pub const CLEAR: &'static str = "\u{E005}";
    /// Return
    pub const RETURN: &'static str = "\u{E006}";
    /// Enter
    pub const ENTER: &'static str = "\u{E007}";
    /// Shift
    pub const SHIFT: &'static str = "\u{E008}";
    /// Left shift
    pub const LEFT_SHIFT: &'static str = Self::SHIFT;
    /// Control
    pub const CONTROL: &'static str = "\u{E009}";
    /// Left control
    pub const LEFT_CONTROL: &'static str = Self::CONTROL;
    /// Alt
    pub const ALT: &'static str = "\u{E00A}";
    /// Left alt
    pub const LEFT_ALT: &'static str = Self::ALT;
    /// Pause
    pub const PAUSE: &'static str = "\u{E00B}";
    /// Escape
    pub const ESCAPE: &'static str = "\u{E00C}";
    /// Space
    pub const SPACE: &'static str = "\u{E00D}";
    /// Page up
    pub const PAGE_UP: &'static str = "\u{E00E}";
    /// Page down
    pub const PAGE_DOWN: &'static str = "\u{E00F}";
    /// End
    pub const END: &'static str = "\u{E010}";
    /// Home
    pub const HOME: &'static str = "\u{E011}";
    /// Arrow left
    pub const ARROW_LEFT: &'static str = "\u{E012}";
    /// Arrow up
    pub const ARROW_UP: &'static str = "\u{E013}";
    /// Arrow right
    pub const ARROW_RIGHT: &'static str = "\u{E014}";
    /// Arrow down
    pub const ARROW_DOWN: &'static str = "\u{E015}";
    /// Insert
    pub const INSERT: &'static str = "\u{E016}";
    /// Delete
    pub const DELETE: &'static str = "\u{E017}";
    /// F1
    pub const F1: &'static str = "\u{E031}";
    /// F2
    pub const F2: &'static str = "\u{E032}";
    /// F3
    pub const F3: &'static str = "\u{E033}";
    /// F4
    pub const F4: &'static str = "\u{E034}";
    /// F5
    pub const F5: &'static str = "\u{E035}";
    /// F6
    pub const F6: &'static str = "\u{E036}";
    /// F7
    pub const F7: &'static str = "\u{E037}";
    /// F8
    pub const F8: &'static str = "\u{E038}";
    /// F9
    pub const F9: &'static str = "\u{E039}";
    /// F10
    pub const F10: &'static str = "\u{E03A}";
    /// F11
    pub const F11: &'static str = "\u{E03B}";
    /// F12
    pub const F12: &'static str = "\u{E03C}";
    /// Meta
    pub const META: &'static str = "\u{E03D}";
    /// Command (macOS alias of meta)
    pub const COMMAND: &'static str = Self::META;

    /// Modifier key code points
    pub const MODIFIERS: [&'static str; 8] = [
        Self::SHIFT,
        Self::CONTROL,
        Self::ALT,
        Self::META,
        Self::COMMAND,
        Self::LEFT_ALT,
        Self::LEFT_CONTROL,
        Self::LEFT_SHIFT,
    ];

    /// Symbolic modifier names and their code points
    pub const MODIFIER_NAMES: [(&'static str, &'static str); 8] = [
        ("shift", Self::SHIFT),
        ("control", Self::CONTROL),
        ("alt", Self::ALT),
        ("meta", Self::META),
        ("command", Self::COMMAND),
        ("left_alt", Self::LEFT_ALT),
        ("left_control", Self::LEFT_CONTROL),
        ("left_shift", Self::LEFT_SHIFT),
    ];

    /// Resolve a modifier given as a code point or symbolic name
    #[must_use]
    pub fn resolve_modifier(key: &str) -> Option<&'static str> {
        Self::MODIFIERS
            .into_iter()
            .find(|code| *code == key)
            .or_else(|| {
                Self::MODIFIER_NAMES
                    .into_iter()
                    .find(|(name, _)| *name == key)
                    .map(|(_, code)| code)
            })
    }

    /// Whether the key is a modifier
    #[must_use]
    pub fn is_modifier(key: &str) -> bool {
        Self::resolve_modifier(key).is_some()
    }
}

/// Check that a key is a modifier key
///
/// # Errors
///
/// [`WireError::InvalidModifierKey`] for any key outside the modifier set.
pub fn validate_modifier(key: &str) -> WireResult<()> {
    if Keys::is_modifier(key) {
        Ok(())
    } else {
        Err(WireError::InvalidModifierKey {
            key: key.to_string(),
        })
    }
}

/// Direction of a key action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KeyActionKind {
    /// Press
    KeyDown,
    /// Release
    KeyUp,
}

/// A validated key down / key up action on a modifier key
///
/// Serializes to a W3C key action item: `{"type": "keyDown", "value": "\u{E008}"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyAction {
    #[serde(rename = "type")]
    kind: KeyActionKind,
    #[serde(rename = "value")]
    key: &'static str,
}

impl KeyAction {
    fn build(kind: KeyActionKind, key: &str) -> WireResult<Self> {
        let key = Keys::resolve_modifier(key).ok_or_else(|| WireError::InvalidModifierKey {
            key: key.to_string(),
        })?;
        Ok(Self { kind, key })
    }

    /// Press a modifier key
    ///
    /// # Errors
    ///
    /// [`WireError::InvalidModifierKey`] if `key` is not a modifier.
    pub fn key_down(key: &str) -> WireResult<Self> {
        Self::build(KeyActionKind::KeyDown, key)
    }

    /// Release a modifier key
    ///
    /// # Errors
    ///
    /// [`WireError::InvalidModifierKey`] if `key` is not a modifier.
    pub fn key_up(key: &str) -> WireResult<Self> {
        Self::build(KeyActionKind::KeyUp, key)
    }

    /// Press or release
    #[must_use]
    pub const fn kind(&self) -> KeyActionKind {
        self.kind
    }

    /// Modifier code point
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    mod validate_tests {
        use super::*;

        #[test]
        fn test_shift_by_name() {
            assert!(validate_modifier("shift").is_ok());
        }

        #[test]
        fn test_all_code_points() {
            for key in Keys::MODIFIERS {
                assert!(validate_modifier(key).is_ok());
            }
        }

        #[test]
        fn test_all_names() {
            for (name, _) in Keys::MODIFIER_NAMES {
                assert!(validate_modifier(name).is_ok(), "{name} rejected");
            }
        }

        #[test]
        fn test_letter_rejected() {
            let err = validate_modifier("a").unwrap_err();
            assert!(matches!(err, WireError::InvalidModifierKey { ref key } if key == "a"));
        }

        #[test]
        fn test_non_modifier_code_points_rejected() {
            for key in [Keys::ENTER, Keys::TAB, Keys::NULL, Keys::ESCAPE, Keys::F1] {
                assert!(validate_modifier(key).is_err());
            }
        }

        #[test]
        fn test_names_are_case_sensitive() {
            assert!(validate_modifier("Shift").is_err());
            assert!(validate_modifier("").is_err());
        }

        #[test]
        fn test_resolve_modifier() {
            assert_eq!(Keys::resolve_modifier("command"), Some(Keys::META));
            assert_eq!(Keys::resolve_modifier("left_shift"), Some(Keys::SHIFT));
            assert_eq!(Keys::resolve_modifier(Keys::ALT), Some(Keys::ALT));
            assert_eq!(Keys::resolve_modifier("x"), None);
        }
    }

    mod action_tests {
        use super::*;

        #[test]
        fn test_key_down_serializes() {
            let action = KeyAction::key_down(Keys::SHIFT).unwrap();
            assert_eq!(
                serde_json::to_value(&action).unwrap(),
                json!({"type": "keyDown", "value": "\u{E008}"})
            );
        }

        #[test]
        fn test_key_up_by_name() {
            let action = KeyAction::key_up("control").unwrap();
            assert_eq!(action.kind(), KeyActionKind::KeyUp);
            assert_eq!(action.key(), Keys::CONTROL);
        }

        #[test]
        fn test_construction_refused_for_non_modifier() {
            assert!(matches!(
                KeyAction::key_down("a"),
                Err(WireError::InvalidModifierKey { .. })
            ));
            assert!(KeyAction::key_up(Keys::ENTER).is_err());
        }
    }
}
