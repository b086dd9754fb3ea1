//! Physical key codes
//!
//! Discriminants are USB HID keyboard-page usage values, so a raw code from
//! the host maps onto a variant without translation. The vendor media range
//! (`0xE8..=0xFB`) is included but only valid on desktop tables, see
//! [`Platform`](super::Platform).

use super::modifiers::ModifierSet;

macro_rules! key_codes {
    ($($(#[$meta:meta])* $name:ident = $value:literal,)+) => {
        #[repr(u16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum KeyCode {
            $($(#[$meta])* $name = $value,)+
        }

        impl KeyCode {
            /// Every enumerated key, in ascending raw order.
            pub const ALL: &'static [KeyCode] = &[$(KeyCode::$name,)+];

            /// Platform-neutral lookup of a raw HID usage value.
            pub const fn from_raw(raw: u16) -> Option<KeyCode> {
                match raw {
                    $($value => Some(KeyCode::$name),)+
                    _ => None,
                }
            }
        }
    };
}

key_codes! {
    /// No key. Hosts report this for synthetic or empty events.
    Empty = 0,
    ErrorRollOver = 1,
    PostFail = 2,
    ErrorUndefined = 3,

    // Letters
    KeyA = 4,
    KeyB = 5,
    KeyC = 6,
    KeyD = 7,
    KeyE = 8,
    KeyF = 9,
    KeyG = 10,
    KeyH = 11,
    KeyI = 12,
    KeyJ = 13,
    KeyK = 14,
    KeyL = 15,
    KeyM = 16,
    KeyN = 17,
    KeyO = 18,
    KeyP = 19,
    KeyQ = 20,
    KeyR = 21,
    KeyS = 22,
    KeyT = 23,
    KeyU = 24,
    KeyV = 25,
    KeyW = 26,
    KeyX = 27,
    KeyY = 28,
    KeyZ = 29,

    // Top-row digits (1 first, 0 last)
    Key1 = 30,
    Key2 = 31,
    Key3 = 32,
    Key4 = 33,
    Key5 = 34,
    Key6 = 35,
    Key7 = 36,
    Key8 = 37,
    Key9 = 38,
    Key0 = 39,

    ReturnOrEnter = 40,
    Escape = 41,
    DeleteOrBackspace = 42,
    Tab = 43,
    Spacebar = 44,
    Hyphen = 45,
    EqualSign = 46,
    OpenBracket = 47,
    CloseBracket = 48,
    Backslash = 49,
    NonUsPound = 50,
    Semicolon = 51,
    Quote = 52,
    GraveAccentAndTilde = 53,
    Comma = 54,
    Period = 55,
    Slash = 56,
    CapsLock = 57,

    F1 = 58,
    F2 = 59,
    F3 = 60,
    F4 = 61,
    F5 = 62,
    F6 = 63,
    F7 = 64,
    F8 = 65,
    F9 = 66,
    F10 = 67,
    F11 = 68,
    F12 = 69,

    PrintScreen = 70,
    ScrollLock = 71,
    Pause = 72,
    Insert = 73,
    Home = 74,
    PageUp = 75,
    DeleteForward = 76,
    End = 77,
    PageDown = 78,

    RightArrow = 79,
    LeftArrow = 80,
    DownArrow = 81,
    UpArrow = 82,

    // Keypad
    KeypadNumLock = 83,
    KeypadSlash = 84,
    KeypadAsterisk = 85,
    KeypadHyphen = 86,
    KeypadPlus = 87,
    KeypadEnter = 88,
    Keypad1 = 89,
    Keypad2 = 90,
    Keypad3 = 91,
    Keypad4 = 92,
    Keypad5 = 93,
    Keypad6 = 94,
    Keypad7 = 95,
    Keypad8 = 96,
    Keypad9 = 97,
    /// Keypad 0, doubling as Insert when NumLock is off.
    Keypad0 = 98,
    KeypadPeriod = 99,

    NonUsBackslash = 100,
    Application = 101,
    Power = 102,
    KeypadEqualSign = 103,

    F13 = 104,
    F14 = 105,
    F15 = 106,
    F16 = 107,
    F17 = 108,
    F18 = 109,
    F19 = 110,
    F20 = 111,
    F21 = 112,
    F22 = 113,
    F23 = 114,
    F24 = 115,

    Execute = 116,
    Help = 117,
    Menu = 118,
    Select = 119,
    Stop = 120,
    Again = 121,
    Undo = 122,
    Cut = 123,
    Copy = 124,
    Paste = 125,
    Find = 126,
    Mute = 127,
    VolumeUp = 128,
    VolumeDown = 129,

    LockingCapsLock = 130,
    LockingNumLock = 131,
    LockingScrollLock = 132,
    KeypadComma = 133,
    KeypadEqualSignAs400 = 134,

    // Locale and IME keys
    International1 = 135,
    International2 = 136,
    International3 = 137,
    International4 = 138,
    International5 = 139,
    International6 = 140,
    International7 = 141,
    International8 = 142,
    International9 = 143,
    /// Kana switch on Japanese Apple keyboards, Hangul/English on Korean ones.
    Lang1 = 144,
    /// Alphanumeric (eisu) on Japanese Apple keyboards, Hanja on Korean ones.
    Lang2 = 145,
    Lang3 = 146,
    Lang4 = 147,
    Lang5 = 148,
    Lang6 = 149,
    Lang7 = 150,
    Lang8 = 151,
    Lang9 = 152,

    AlternateErase = 153,
    SysReqOrAttention = 154,
    Cancel = 155,
    Clear = 156,
    Prior = 157,
    Return = 158,
    Separator = 159,
    Out = 160,
    Oper = 161,
    ClearOrAgain = 162,
    CrSelOrProps = 163,
    ExSel = 164,

    // 0xA5..=0xDF reserved

    LeftControl = 224,
    LeftShift = 225,
    LeftOption = 226,
    LeftCommand = 227,
    RightControl = 228,
    RightShift = 229,
    RightOption = 230,
    RightCommand = 231,

    // Vendor media keys (desktop only)
    MediaPlayPause = 0xE8,
    MediaStopCd = 0xE9,
    MediaPreviousSong = 0xEA,
    MediaNextSong = 0xEB,
    MediaEjectCd = 0xEC,
    MediaVolumeUp = 0xED,
    MediaVolumeDown = 0xEE,
    MediaMute = 0xEF,
    MediaWww = 0xF0,
    MediaBack = 0xF1,
    MediaForward = 0xF2,
    MediaStop = 0xF3,
    MediaFind = 0xF4,
    MediaScrollUp = 0xF5,
    MediaScrollDown = 0xF6,
    MediaEdit = 0xF7,
    MediaSleep = 0xF8,
    MediaCoffee = 0xF9,
    MediaRefresh = 0xFA,
    MediaCalc = 0xFB,
}

impl KeyCode {
    /// Raw HID usage value of this key
    pub const fn raw(self) -> u16 {
        self as u16
    }

    /// Returns true for F1 through F24 and nothing else.
    pub const fn is_function_key(self) -> bool {
        matches!(
            self,
            KeyCode::F1
                | KeyCode::F2
                | KeyCode::F3
                | KeyCode::F4
                | KeyCode::F5
                | KeyCode::F6
                | KeyCode::F7
                | KeyCode::F8
                | KeyCode::F9
                | KeyCode::F10
                | KeyCode::F11
                | KeyCode::F12
                | KeyCode::F13
                | KeyCode::F14
                | KeyCode::F15
                | KeyCode::F16
                | KeyCode::F17
                | KeyCode::F18
                | KeyCode::F19
                | KeyCode::F20
                | KeyCode::F21
                | KeyCode::F22
                | KeyCode::F23
                | KeyCode::F24
        )
    }

    /// Vendor media keys, only present in desktop tables
    pub const fn is_media_key(self) -> bool {
        let raw = self as u16;
        raw >= KeyCode::MediaPlayPause as u16 && raw <= KeyCode::MediaCalc as u16
    }

    /// Display token for this key.
    ///
    /// Letters render lowercase, whatever the modifiers. Keypad 0 is the only
    /// key whose token depends on `modifiers`: `"0"` with NumLock, `"Insert"`
    /// without.
    pub fn description(self, modifiers: ModifierSet) -> String {
        let raw = self.raw();
        match raw {
            0 => String::new(),
            4..=29 => char::from(b'a' + (raw - 4) as u8).to_string(),
            30..=38 => (raw - 29).to_string(),
            39 => "0".to_string(),
            41 => "Esc".to_string(),
            43 => "Tab".to_string(),
            44 => " ".to_string(),
            45 => "-".to_string(),
            46 => "=".to_string(),
            54 => ",".to_string(),
            55 => ".".to_string(),
            56 => "/".to_string(),
            57 => "CapsLock".to_string(),
            58..=69 => format!("F{}", raw - 57),
            72 => "Pause".to_string(),
            73 => "Insert".to_string(),
            74 => "Home".to_string(),
            75 => "PageUp".to_string(),
            76 => "DeleteForward".to_string(),
            77 => "End".to_string(),
            78 => "PageDown".to_string(),
            79 => "RightArrow".to_string(),
            80 => "LeftArrow".to_string(),
            81 => "DownArrow".to_string(),
            82 => "UpArrow".to_string(),
            89..=97 => (raw - 88).to_string(),
            98 => {
                if modifiers.contains(ModifierSet::NUM_LOCK) {
                    "0".to_string()
                } else {
                    "Insert".to_string()
                }
            }
            104..=115 => format!("F{}", raw - 91),
            117 => "Help".to_string(),
            118 => "Menu".to_string(),
            119 => "Select".to_string(),
            127 => "Mute".to_string(),
            128 => "VolumeUp".to_string(),
            129 => "VolumeDown".to_string(),
            224 => "LeftControl".to_string(),
            225 => "LeftShift".to_string(),
            226 => "LeftOption".to_string(),
            227 => "LeftCMD".to_string(),
            _ => format!("Undecoded {}", raw),
        }
    }
}

impl From<KeyCode> for u16 {
    fn from(code: KeyCode) -> Self {
        code as u16
    }
}

impl TryFrom<u16> for KeyCode {
    type Error = u16;

    fn try_from(raw: u16) -> Result<Self, Self::Error> {
        KeyCode::from_raw(raw).ok_or(raw)
    }
}
