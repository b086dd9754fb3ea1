mod common;

use common::*;
use kbhelper_core::{Callback, Combination, KeyCode, KeyEvent, ModifierSet, Platform, Registry};
use pretty_assertions::assert_eq;

#[test]
fn test_last_registration_wins() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let log = call_log();
    registry.register_descriptor("<Command>w", logging_callback(&log, "f1"));
    registry.register_descriptor("<Command>W", logging_callback(&log, "f2"));
    assert_eq!(registry.len(), 1);

    assert!(registry.dispatch(&key_down(KeyCode::KeyW, ModifierSet::COMMAND)));
    assert_eq!(*log.lock().unwrap(), vec!["f2".to_string()]);
}

#[test]
fn test_unregistered_event_invokes_nothing() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let (count, callback) = counting_callback();
    registry.register_descriptor("<Control>c", callback);
    let (observed, observer) = counting_callback();
    registry.subscribe(observer);

    assert!(!registry.dispatch(&key_down(KeyCode::KeyC, ModifierSet::empty())));
    assert!(!registry.dispatch(&key_down(KeyCode::KeyV, ModifierSet::CONTROL)));
    assert_eq!(calls(&count), 0);
    assert_eq!(calls(&observed), 0);
    assert!(registry.last_matched().is_none());
}

#[test]
fn test_modifiers_must_match_exactly() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let (count, callback) = counting_callback();
    registry.register_descriptor("<Command>s", callback);

    let extra_shift = key_down(KeyCode::KeyS, ModifierSet::COMMAND | ModifierSet::SHIFT);
    let with_caps = key_down(KeyCode::KeyS, ModifierSet::COMMAND | ModifierSet::CAPS_LOCK);
    assert!(!registry.dispatch(&extra_shift));
    assert!(!registry.dispatch(&with_caps));
    assert_eq!(calls(&count), 0);
}

#[test]
fn test_device_dependent_bits_are_ignored() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let (count, callback) = counting_callback();
    registry.register_descriptor("<Command>q", callback);

    // left-command device bit plus the device-independent command flag
    let raw = ModifierSet::COMMAND.bits() | 0x0008;
    let event = KeyEvent::from_raw(KeyCode::KeyQ.raw(), raw, Some("q".to_string()));
    assert!(registry.dispatch(&event));
    assert_eq!(calls(&count), 1);
}

#[test]
fn test_batch_registration_shares_callback() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let (count, callback) = counting_callback();
    registry.register_descriptors(["<Command>=", "<Command><Shift>="], callback);
    assert_eq!(registry.len(), 2);

    registry.dispatch(&key_down(KeyCode::EqualSign, ModifierSet::COMMAND));
    registry.dispatch(&key_down(KeyCode::EqualSign, ModifierSet::COMMAND | ModifierSet::SHIFT));
    assert_eq!(calls(&count), 2);
}

#[test]
#[should_panic(expected = "invalid shortcut descriptor")]
fn test_batch_registration_panics_on_bad_entry() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    registry.register_descriptors(["<Command>a", "<Command>Return"], Callback::noop());
}

#[test]
fn test_try_batch_stops_at_first_error() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let result = registry.try_register_descriptors(
        ["<Command>a", "<Command>Nope", "<Command>b"],
        Callback::noop(),
    );
    assert_eq!(
        result.unwrap_err(),
        kbhelper_core::Error::UnknownKey("Nope".to_string())
    );
    assert!(registry.contains(&Combination::new(KeyCode::KeyA, ModifierSet::COMMAND)));
    assert!(!registry.contains(&Combination::new(KeyCode::KeyB, ModifierSet::COMMAND)));
}

#[test]
fn test_try_batch_returns_combinations_in_order() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let combos = registry
        .try_register_descriptors(["<Option>F5", "Esc"], Callback::noop())
        .unwrap();
    assert_eq!(
        combos,
        vec![
            Combination::new(KeyCode::F5, ModifierSet::OPTION),
            Combination::key(KeyCode::Escape),
        ]
    );
}

#[test]
fn test_register_codes_for_digit_row() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let digits = [
        KeyCode::Key1,
        KeyCode::Key2,
        KeyCode::Key3,
        KeyCode::Key4,
        KeyCode::Key5,
    ];
    let seen = std::sync::Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    registry.register_codes(digits, ModifierSet::COMMAND, move |event: &KeyEvent| {
        sink.lock().unwrap().push(event.key_code);
    });

    for code in digits.iter().rev() {
        assert!(registry.dispatch(&key_down(*code, ModifierSet::COMMAND)));
    }
    assert_eq!(*seen.lock().unwrap(), vec![34, 33, 32, 31, 30]);
}

#[test]
fn test_observers_run_after_callback() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let log = call_log();
    registry.register_descriptor("<Control>Tab", logging_callback(&log, "callback"));
    registry.subscribe(logging_callback(&log, "first observer"));
    registry.subscribe(logging_callback(&log, "second observer"));

    registry.dispatch(&key_down(KeyCode::Tab, ModifierSet::CONTROL));
    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "callback".to_string(),
            "first observer".to_string(),
            "second observer".to_string(),
        ]
    );
}

#[test]
fn test_last_matched_tracks_most_recent_hit() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    registry.register_descriptors(["<Command>c", "<Command>v"], Callback::noop());

    let copy = key_down(KeyCode::KeyC, ModifierSet::COMMAND).with_characters("c");
    let paste = key_down(KeyCode::KeyV, ModifierSet::COMMAND).with_characters("v");
    registry.dispatch(&copy);
    registry.dispatch(&paste);
    registry.dispatch(&key_down(KeyCode::KeyX, ModifierSet::COMMAND));

    assert_eq!(registry.last_matched(), Some(&paste));
}

#[test]
fn test_media_keys_only_match_on_desktop() {
    let event = KeyEvent::new(KeyCode::MediaPlayPause.raw(), ModifierSet::empty());

    let mut desktop = Registry::with_platform(Platform::Desktop);
    desktop.register(Combination::key(KeyCode::MediaPlayPause), Callback::noop());
    assert!(desktop.dispatch(&event));

    let mut touch = Registry::with_platform(Platform::Touch);
    touch.register(Combination::key(KeyCode::MediaPlayPause), Callback::noop());
    assert!(!touch.dispatch(&event));
}

#[test]
fn test_unknown_raw_code_resolves_to_empty() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    let (count, callback) = counting_callback();
    registry.register(Combination::key(KeyCode::Empty), callback);

    assert_eq!(
        registry.combination_for(&KeyEvent::new(0x1FF, ModifierSet::empty())),
        Combination::key(KeyCode::Empty)
    );
    assert!(registry.dispatch(&KeyEvent::new(0x1FF, ModifierSet::empty())));
    assert_eq!(calls(&count), 1);
}

#[test]
fn test_combinations_lists_every_entry() {
    let mut registry = Registry::with_platform(Platform::Desktop);
    registry.register_descriptors(["a", "<Shift>a", "<Option>a"], Callback::noop());

    let mut rendered: Vec<String> = registry.combinations().map(|c| c.to_string()).collect();
    rendered.sort();
    assert_eq!(rendered, vec!["<Option>a", "<Shift>a", "a"]);
    assert!(registry.get(&Combination::key(KeyCode::KeyA)).is_some());
    assert!(registry.get(&Combination::key(KeyCode::KeyB)).is_none());
}
