//! Key combinations used as dispatch keys

use super::key_codes::KeyCode;
use super::modifiers::ModifierSet;
use std::fmt;

/// A key together with the exact set of modifiers held.
///
/// Two combinations are equal only if both the key and the full modifier set
/// match; there is no subset matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Combination {
    pub key_code: KeyCode,
    pub modifiers: ModifierSet,
}

impl Combination {
    pub const fn new(key_code: KeyCode, modifiers: ModifierSet) -> Self {
        Self {
            key_code,
            modifiers,
        }
    }

    /// Combination with no modifiers held
    pub const fn key(key_code: KeyCode) -> Self {
        Self::new(key_code, ModifierSet::empty())
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}",
            self.modifiers.description(),
            self.key_code.description(self.modifiers)
        )
    }
}
