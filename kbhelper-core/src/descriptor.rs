//! Shortcut descriptor parsing and rendering
//!
//! A descriptor is zero or more bracketed modifier tags followed (or
//! interleaved) with one base-key token, e.g. `"<Command><Shift>Q"`.
//! Tags are matched case-sensitively as plain substrings, so a base token
//! that itself contains a tag's bracketed text gets mangled; descriptors
//! must avoid such collisions.

use crate::error::{Error, Result};
use crate::types::{Combination, KeyCode, ModifierSet};
use std::str::FromStr;

/// Recognized modifier tags
pub const MODIFIER_TAGS: [(&str, ModifierSet); 6] = [
    ("<Command>", ModifierSet::COMMAND),
    ("<Control>", ModifierSet::CONTROL),
    ("<NumLock>", ModifierSet::NUM_LOCK),
    ("<Shift>", ModifierSet::SHIFT),
    ("<CapsLock>", ModifierSet::CAPS_LOCK),
    ("<Option>", ModifierSet::OPTION),
];

/// Parse a descriptor like `"<Control><Shift>A"` into a [`Combination`].
///
/// # Examples
/// ```
/// use kbhelper_core::descriptor::parse;
/// use kbhelper_core::{KeyCode, ModifierSet};
///
/// let combo = parse("<Shift><Command>q").unwrap();
/// assert_eq!(combo.key_code, KeyCode::KeyQ);
/// assert_eq!(combo.modifiers, ModifierSet::COMMAND | ModifierSet::SHIFT);
/// ```
pub fn parse(descriptor: &str) -> Result<Combination> {
    let (modifiers, token) = strip_modifiers(descriptor);
    if token.is_empty() {
        return Err(Error::EmptyDescriptor(descriptor.to_string()));
    }
    let key_code = parse_key(&token)?;
    Ok(Combination::new(key_code, modifiers))
}

/// Render a combination back to text, for logs and diagnostics.
///
/// The result is canonical (fixed modifier order, lowercase letters) but is
/// not guaranteed to parse again, e.g. `"Undecoded 40"`.
pub fn render(combination: &Combination) -> String {
    combination.to_string()
}

/// Render a raw host key code, including codes missing from the key table.
pub fn render_raw(key_code: u16, modifiers: ModifierSet) -> String {
    match KeyCode::from_raw(key_code) {
        Some(code) => render(&Combination::new(code, modifiers)),
        None => format!("{}Undecoded {}", modifiers.description(), key_code),
    }
}

/// Remove every recognized tag from `descriptor`, returning the collected
/// modifiers and whatever text remains.
pub fn strip_modifiers(descriptor: &str) -> (ModifierSet, String) {
    let mut modifiers = ModifierSet::empty();
    let mut remainder = descriptor.to_string();

    for (tag, flag) in MODIFIER_TAGS {
        if remainder.contains(tag) {
            modifiers.insert(flag);
            remainder = remainder.replace(tag, "");
        }
    }

    (modifiers, remainder)
}

/// Resolve a base-key token, case-insensitively
pub fn parse_key(token: &str) -> Result<KeyCode> {
    let upper = token.to_uppercase();
    let unknown = || Error::UnknownKey(token.to_string());

    let code = match upper.as_str() {
        // Single letters and digits
        s if s.len() == 1 && s.as_bytes()[0].is_ascii_uppercase() => {
            let offset = u16::from(s.as_bytes()[0] - b'A');
            KeyCode::from_raw(KeyCode::KeyA.raw() + offset).ok_or_else(unknown)?
        }
        "0" => KeyCode::Key0,
        s if s.len() == 1 && s.as_bytes()[0].is_ascii_digit() => {
            let offset = u16::from(s.as_bytes()[0] - b'1');
            KeyCode::from_raw(KeyCode::Key1.raw() + offset).ok_or_else(unknown)?
        }

        // Function keys
        s if s.starts_with('F') && s.len() > 1 => parse_function_key(s).ok_or_else(unknown)?,

        // Punctuation
        " " => KeyCode::Spacebar,
        "-" => KeyCode::Hyphen,
        "=" => KeyCode::EqualSign,
        "," => KeyCode::Comma,
        "." => KeyCode::Period,
        "/" => KeyCode::Slash,

        // Named keys
        "ESC" => KeyCode::Escape,
        "TAB" => KeyCode::Tab,
        "CAPSLOCK" => KeyCode::CapsLock,
        "PAUSE" => KeyCode::Pause,
        "INSERT" => KeyCode::Insert,
        "HOME" => KeyCode::Home,
        "PAGEUP" => KeyCode::PageUp,
        "DELETEFORWARD" => KeyCode::DeleteForward,
        "END" => KeyCode::End,
        "PAGEDOWN" => KeyCode::PageDown,
        "RIGHTARROW" => KeyCode::RightArrow,
        "LEFTARROW" => KeyCode::LeftArrow,
        "DOWNARROW" => KeyCode::DownArrow,
        "UPARROW" => KeyCode::UpArrow,
        "HELP" => KeyCode::Help,
        "MENU" => KeyCode::Menu,
        "SELECT" => KeyCode::Select,

        // Media
        "MUTE" => KeyCode::Mute,
        "VOLUMEUP" => KeyCode::VolumeUp,
        "VOLUMEDOWN" => KeyCode::VolumeDown,

        // Modifier keys pressed on their own
        "LEFTCONTROL" => KeyCode::LeftControl,
        "LEFTSHIFT" => KeyCode::LeftShift,
        "LEFTOPTION" => KeyCode::LeftOption,
        "LEFTCOMMAND" | "LEFTCMD" => KeyCode::LeftCommand,

        _ => return Err(unknown()),
    };

    Ok(code)
}

/// `F1`..`F24`, rejecting signs, leading zeros and anything past 24
fn parse_function_key(token: &str) -> Option<KeyCode> {
    let digits = token.strip_prefix('F')?;
    if digits.starts_with('0') || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let n: u16 = digits.parse().ok()?;
    match n {
        1..=12 => KeyCode::from_raw(KeyCode::F1.raw() + n - 1),
        13..=24 => KeyCode::from_raw(KeyCode::F13.raw() + n - 13),
        _ => None,
    }
}

impl FromStr for Combination {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}
