//! Per-platform key tables

use super::key_codes::KeyCode;
use super::modifiers::ModifierSet;
use std::fmt;

/// Platform family whose key table and modifier names are in use.
///
/// Raw key codes are only meaningful within one family. The table is picked
/// once when a registry is built, so lookups never branch on the target OS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// Keyboard-first desktops (AppKit style). Includes vendor media keys.
    Desktop,
    /// Touch devices with hardware keyboards (UIKit style).
    Touch,
}

impl Platform {
    /// Family of the platform this crate was compiled for
    pub const fn current() -> Self {
        if cfg!(any(target_os = "ios", target_os = "android")) {
            Platform::Touch
        } else {
            Platform::Desktop
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Platform::Desktop => "desktop",
            Platform::Touch => "touch",
        }
    }

    /// Whether `code` exists in this platform's table.
    pub const fn contains(self, code: KeyCode) -> bool {
        match self {
            Platform::Desktop => true,
            Platform::Touch => !code.is_media_key(),
        }
    }

    /// Resolves a raw host key code. Codes outside this platform's table
    /// resolve to [`KeyCode::Empty`] instead of failing.
    pub fn lookup(self, raw: u16) -> KeyCode {
        match KeyCode::from_raw(raw) {
            Some(code) if self.contains(code) => code,
            _ => KeyCode::Empty,
        }
    }

    /// Keys in this platform's table, in ascending raw order.
    pub fn keys(self) -> impl Iterator<Item = KeyCode> {
        KeyCode::ALL
            .iter()
            .copied()
            .filter(move |code| self.contains(*code))
    }

    /// Native name of a single modifier flag on this platform.
    ///
    /// Diagnostics only; descriptions always use the canonical tags.
    pub fn modifier_name(self, flag: ModifierSet) -> Option<&'static str> {
        let name = if flag == ModifierSet::SHIFT {
            "Shift"
        } else if flag == ModifierSet::CONTROL {
            "Control"
        } else if flag == ModifierSet::COMMAND {
            "Command"
        } else if flag == ModifierSet::NUM_LOCK {
            "NumericPad"
        } else if flag == ModifierSet::OPTION {
            match self {
                Platform::Desktop => "Option",
                Platform::Touch => "Alternate",
            }
        } else if flag == ModifierSet::CAPS_LOCK {
            match self {
                Platform::Desktop => "CapsLock",
                Platform::Touch => "AlphaShift",
            }
        } else {
            return None;
        };
        Some(name)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_code() {
        assert_eq!(Platform::Desktop.lookup(4), KeyCode::KeyA);
        assert_eq!(Platform::Touch.lookup(4), KeyCode::KeyA);
        assert_eq!(Platform::Touch.lookup(144), KeyCode::Lang1);
    }

    #[test]
    fn test_unknown_code_is_empty() {
        assert_eq!(Platform::Desktop.lookup(0xA5), KeyCode::Empty);
        assert_eq!(Platform::Desktop.lookup(u16::MAX), KeyCode::Empty);
    }

    #[test]
    fn test_media_keys_are_desktop_only() {
        assert_eq!(Platform::Desktop.lookup(0xE8), KeyCode::MediaPlayPause);
        assert_eq!(Platform::Touch.lookup(0xE8), KeyCode::Empty);
        assert!(Platform::Touch.keys().all(|code| !code.is_media_key()));
        assert_eq!(
            Platform::Desktop.keys().count() - Platform::Touch.keys().count(),
            20
        );
    }

    #[test]
    fn test_modifier_names() {
        assert_eq!(
            Platform::Desktop.modifier_name(ModifierSet::OPTION),
            Some("Option")
        );
        assert_eq!(
            Platform::Touch.modifier_name(ModifierSet::ALTERNATE),
            Some("Alternate")
        );
        assert_eq!(
            Platform::Touch.modifier_name(ModifierSet::CAPS_LOCK),
            Some("AlphaShift")
        );
        assert_eq!(
            Platform::Desktop.modifier_name(ModifierSet::SHIFT | ModifierSet::CONTROL),
            None
        );
    }
}
