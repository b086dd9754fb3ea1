//! Raw key events delivered by the host

use super::modifiers::ModifierSet;

/// One key-down as reported by the host toolkit.
///
/// The character fields are the host's best-effort translation and are only
/// used for descriptions, never for matching.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyEvent {
    /// Raw host key code (HID usage value)
    pub key_code: u16,
    /// Modifier keys held, already truncated to the known six
    pub modifiers: ModifierSet,
    /// Characters produced by the key press, modifiers applied
    pub characters: Option<String>,
    /// Characters the key would produce with no modifiers held
    pub characters_ignoring_modifiers: Option<String>,
}

impl KeyEvent {
    /// Creates an event without character information
    pub fn new(key_code: u16, modifiers: ModifierSet) -> Self {
        Self {
            key_code,
            modifiers,
            characters: None,
            characters_ignoring_modifiers: None,
        }
    }

    /// Creates an event from a host's raw modifier mask
    pub fn from_raw(key_code: u16, raw_modifiers: u32, characters: Option<String>) -> Self {
        Self {
            key_code,
            modifiers: ModifierSet::from_raw(raw_modifiers),
            characters,
            characters_ignoring_modifiers: None,
        }
    }

    pub fn with_characters(mut self, characters: impl Into<String>) -> Self {
        self.characters = Some(characters.into());
        self
    }

    pub fn with_characters_ignoring_modifiers(mut self, characters: impl Into<String>) -> Self {
        self.characters_ignoring_modifiers = Some(characters.into());
        self
    }

    /// Modifier tags followed by the unmodified characters, falling back to
    /// the modified characters, e.g. `"<Command><Shift>q"`.
    pub fn description(&self) -> String {
        let chars = self
            .characters_ignoring_modifiers
            .as_deref()
            .or(self.characters.as_deref())
            .unwrap_or("");
        format!("{}{}", self.modifiers.description(), chars)
    }
}
