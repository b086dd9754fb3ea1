//! Modifier key sets

use std::fmt;

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    ///
    /// Bit positions match the device-independent modifier flags shared by
    /// AppKit and UIKit, so a host can hand its raw mask to
    /// [`ModifierSet::from_raw`] without translation.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierSet: u32 {
        const CAPS_LOCK = 1 << 16;
        const SHIFT     = 1 << 17;
        const CONTROL   = 1 << 18;
        const OPTION    = 1 << 19;
        const COMMAND   = 1 << 20;
        const NUM_LOCK  = 1 << 21;
    }
}

/// Canonical rendering order and tag for each modifier
const CANONICAL_TAGS: [(ModifierSet, &str); 6] = [
    (ModifierSet::CAPS_LOCK, "<CapsLock>"),
    (ModifierSet::OPTION, "<Option>"),
    (ModifierSet::COMMAND, "<Command>"),
    (ModifierSet::CONTROL, "<Control>"),
    (ModifierSet::NUM_LOCK, "<NumLock>"),
    (ModifierSet::SHIFT, "<Shift>"),
];

impl ModifierSet {
    /// Touch-platform name for [`ModifierSet::OPTION`]
    pub const ALTERNATE: ModifierSet = ModifierSet::OPTION;
    /// Touch-platform name for [`ModifierSet::CAPS_LOCK`]
    pub const ALPHA_SHIFT: ModifierSet = ModifierSet::CAPS_LOCK;
    /// Host name for [`ModifierSet::NUM_LOCK`]
    pub const NUMERIC_PAD: ModifierSet = ModifierSet::NUM_LOCK;

    /// Build a set from a host modifier mask, dropping device-dependent and
    /// any other bits outside the six known modifiers.
    pub const fn from_raw(raw: u32) -> Self {
        Self::from_bits_truncate(raw)
    }

    /// Renders the set as bracketed tags in the fixed order
    /// `<CapsLock><Option><Command><Control><NumLock><Shift>`.
    ///
    /// Sets with the same members always render the same string.
    pub fn description(self) -> String {
        CANONICAL_TAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, tag)| *tag)
            .collect()
    }
}

impl fmt::Display for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}
