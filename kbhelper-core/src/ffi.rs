//! Foreign Function Interface for KbHelper Core
//!
//! This module provides a C-compatible API so that host toolkits written in
//! other languages (Swift and Objective-C through a C header, C, C++) can
//! register shortcuts and forward key-down events.
//!
//! Callbacks run on the thread that calls `kbhelper_dispatch`, while the
//! registry lock is held. A callback must not call back into the same handle.

use crate::descriptor;
use crate::registry::{Callback, Registry};
use crate::types::{KeyCode, KeyEvent, ModifierSet, Platform};
use crate::Error;
use log::error;
use std::ffi::{c_void, CStr, CString};
use std::os::raw::{c_char, c_int};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::Mutex;

/// Opaque handle to a shortcut registry
pub struct RegistryHandle {
    registry: Mutex<Registry>,
}

/// Result codes for FFI functions
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum KbResult {
    Success = 0,
    ErrorInvalidHandle = -1,
    ErrorInvalidParameter = -2,
    ErrorUtf8Conversion = -3,
    ErrorUnknownKey = -4,
    ErrorEmptyDescriptor = -5,
    ErrorLockPoisoned = -6,
    ErrorCallbackPanicked = -7,
}

impl From<&Error> for KbResult {
    fn from(err: &Error) -> Self {
        match err {
            Error::UnknownKey(_) => KbResult::ErrorUnknownKey,
            Error::EmptyDescriptor(_) => KbResult::ErrorEmptyDescriptor,
        }
    }
}

/// Key event passed to callbacks. `characters` is only valid for the
/// duration of the callback and may be NULL.
#[repr(C)]
pub struct KbKeyEvent {
    pub key_code: u16,
    pub modifiers: u32,
    pub characters: *const c_char,
}

/// A parsed combination
#[repr(C)]
#[derive(Debug, Default, PartialEq)]
pub struct KbCombination {
    pub key_code: u16,
    pub modifiers: u32,
}

/// Callback signature for registered shortcuts
pub type KbCallback = extern "C" fn(event: *const KbKeyEvent, user_data: *mut c_void);

/// Caller-owned context pointer handed back to the callback untouched.
struct UserData(*mut c_void);

// The pointer is never dereferenced on the Rust side; keeping it valid and
// thread-safe is the caller's contract.
unsafe impl Send for UserData {}
unsafe impl Sync for UserData {}

impl UserData {
    fn as_ptr(&self) -> *mut c_void {
        self.0
    }
}

fn c_callback(callback: Option<KbCallback>, user_data: *mut c_void) -> Callback {
    let Some(callback) = callback else {
        return Callback::noop();
    };
    let user_data = UserData(user_data);
    Callback::new(move |event: &KeyEvent| {
        let characters = event
            .characters
            .as_deref()
            .and_then(|s| CString::new(s).ok());
        let c_event = KbKeyEvent {
            key_code: event.key_code,
            modifiers: event.modifiers.bits(),
            characters: characters.as_ref().map_or(ptr::null(), |c| c.as_ptr()),
        };
        callback(&c_event, user_data.as_ptr());
    })
}

fn platform_from_c(platform: c_int) -> Option<Platform> {
    match platform {
        0 => Some(Platform::current()),
        1 => Some(Platform::Desktop),
        2 => Some(Platform::Touch),
        _ => None,
    }
}

fn into_c_string(s: String) -> *mut c_char {
    match CString::new(s) {
        Ok(c_string) => c_string.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Creates a new registry.
/// `platform`: 0 = current platform, 1 = desktop, 2 = touch.
/// Returns NULL for an unknown platform.
#[no_mangle]
pub extern "C" fn kbhelper_registry_new(platform: c_int) -> *mut RegistryHandle {
    let Some(platform) = platform_from_c(platform) else {
        return ptr::null_mut();
    };
    let handle = Box::new(RegistryHandle {
        registry: Mutex::new(Registry::with_platform(platform)),
    });
    Box::into_raw(handle)
}

/// Frees a registry
#[no_mangle]
pub extern "C" fn kbhelper_registry_free(handle: *mut RegistryHandle) {
    if !handle.is_null() {
        unsafe {
            let _ = Box::from_raw(handle);
        }
    }
}

/// Registers a shortcut descriptor such as `"<Command><Shift>Q"`.
/// A NULL callback registers a shortcut that is consumed without action.
#[no_mangle]
pub extern "C" fn kbhelper_register_descriptor(
    handle: *mut RegistryHandle,
    descriptor: *const c_char,
    callback: Option<KbCallback>,
    user_data: *mut c_void,
) -> KbResult {
    if handle.is_null() {
        return KbResult::ErrorInvalidHandle;
    }
    if descriptor.is_null() {
        return KbResult::ErrorInvalidParameter;
    }

    let handle = unsafe { &*handle };
    let text = match unsafe { CStr::from_ptr(descriptor) }.to_str() {
        Ok(s) => s,
        Err(_) => return KbResult::ErrorUtf8Conversion,
    };

    match handle.registry.lock() {
        Ok(mut registry) => {
            match registry.try_register_descriptor(text, c_callback(callback, user_data)) {
                Ok(_) => KbResult::Success,
                Err(e) => KbResult::from(&e),
            }
        }
        Err(_) => KbResult::ErrorLockPoisoned,
    }
}

/// Registers `len` raw key codes sharing one modifier mask and callback.
/// Fails without registering anything if any code is missing from the
/// handle's platform key table.
#[no_mangle]
pub extern "C" fn kbhelper_register_codes(
    handle: *mut RegistryHandle,
    key_codes: *const u16,
    len: usize,
    modifiers: u32,
    callback: Option<KbCallback>,
    user_data: *mut c_void,
) -> KbResult {
    if handle.is_null() {
        return KbResult::ErrorInvalidHandle;
    }
    if key_codes.is_null() && len != 0 {
        return KbResult::ErrorInvalidParameter;
    }

    let handle = unsafe { &*handle };
    let raw_codes = if len == 0 {
        &[][..]
    } else {
        unsafe { std::slice::from_raw_parts(key_codes, len) }
    };

    let Ok(mut registry) = handle.registry.lock() else {
        return KbResult::ErrorLockPoisoned;
    };
    let platform = registry.platform();
    let codes: Option<Vec<KeyCode>> = raw_codes
        .iter()
        .map(|&raw| KeyCode::from_raw(raw).filter(|code| platform.contains(*code)))
        .collect();
    let Some(codes) = codes else {
        return KbResult::ErrorUnknownKey;
    };

    registry.register_codes(
        codes,
        ModifierSet::from_raw(modifiers),
        c_callback(callback, user_data),
    );
    KbResult::Success
}

/// Dispatches one key-down.
/// Returns 1 if a shortcut handled it, 0 if the host should process it,
/// or a negative `KbResult` on error. `characters` may be NULL. A panic
/// raised while running callbacks is caught and reported as
/// `ErrorCallbackPanicked`.
#[no_mangle]
pub extern "C" fn kbhelper_dispatch(
    handle: *mut RegistryHandle,
    key_code: u16,
    modifiers: u32,
    characters: *const c_char,
) -> c_int {
    if handle.is_null() {
        return KbResult::ErrorInvalidHandle as c_int;
    }

    let handle = unsafe { &*handle };
    let characters = if characters.is_null() {
        None
    } else {
        match unsafe { CStr::from_ptr(characters) }.to_str() {
            Ok(s) => Some(s.to_string()),
            Err(_) => return KbResult::ErrorUtf8Conversion as c_int,
        }
    };

    let event = KeyEvent::from_raw(key_code, modifiers, characters);
    let Ok(mut registry) = handle.registry.lock() else {
        return KbResult::ErrorLockPoisoned as c_int;
    };
    // The guard lives outside the closure, so a caught panic does not poison it
    match panic::catch_unwind(AssertUnwindSafe(|| registry.dispatch(&event))) {
        Ok(true) => 1,
        Ok(false) => 0,
        Err(_) => {
            error!("Shortcut callback panicked while handling key code {}", key_code);
            KbResult::ErrorCallbackPanicked as c_int
        }
    }
}

/// Copies the most recently matched event's code and modifiers.
/// Returns 1 if an event has matched since creation, 0 otherwise.
#[no_mangle]
pub extern "C" fn kbhelper_last_matched(
    handle: *mut RegistryHandle,
    out: *mut KbCombination,
) -> c_int {
    if handle.is_null() || out.is_null() {
        return 0;
    }

    let handle = unsafe { &*handle };
    let Ok(registry) = handle.registry.lock() else {
        return 0;
    };
    match registry.last_matched() {
        Some(event) => {
            unsafe {
                (*out).key_code = event.key_code;
                (*out).modifiers = event.modifiers.bits();
            }
            1
        }
        None => 0,
    }
}

/// Parses a descriptor without registering it
#[no_mangle]
pub extern "C" fn kbhelper_parse_descriptor(
    descriptor: *const c_char,
    out: *mut KbCombination,
) -> KbResult {
    if descriptor.is_null() || out.is_null() {
        return KbResult::ErrorInvalidParameter;
    }

    let text = match unsafe { CStr::from_ptr(descriptor) }.to_str() {
        Ok(s) => s,
        Err(_) => return KbResult::ErrorUtf8Conversion,
    };

    match descriptor::parse(text) {
        Ok(combination) => {
            unsafe {
                (*out).key_code = combination.key_code.raw();
                (*out).modifiers = combination.modifiers.bits();
            }
            KbResult::Success
        }
        Err(e) => KbResult::from(&e),
    }
}

/// Renders a key code and modifier mask, e.g. `"<Command><Shift>q"`.
/// Returns a newly allocated C string that must be freed with kbhelper_free_string
#[no_mangle]
pub extern "C" fn kbhelper_describe_key(key_code: u16, modifiers: u32) -> *mut c_char {
    into_c_string(descriptor::render_raw(key_code, ModifierSet::from_raw(modifiers)))
}

/// Renders a modifier mask as canonical tags, e.g. `"<Option><Shift>"`.
/// Returns a newly allocated C string that must be freed with kbhelper_free_string
#[no_mangle]
pub extern "C" fn kbhelper_describe_modifiers(modifiers: u32) -> *mut c_char {
    into_c_string(ModifierSet::from_raw(modifiers).description())
}

/// Returns 1 for F1 through F24, 0 otherwise
#[no_mangle]
pub extern "C" fn kbhelper_is_function_key(key_code: u16) -> c_int {
    match KeyCode::from_raw(key_code) {
        Some(code) if code.is_function_key() => 1,
        _ => 0,
    }
}

/// Frees a string allocated by this library
#[no_mangle]
pub extern "C" fn kbhelper_free_string(s: *mut c_char) {
    if !s.is_null() {
        unsafe {
            let _ = CString::from_raw(s);
        }
    }
}

/// Get library version
#[no_mangle]
pub extern "C" fn kbhelper_get_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
