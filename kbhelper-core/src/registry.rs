//! Combination registry
//!
//! Maps [`Combination`]s to callbacks and dispatches raw key events to them.
//! Registration happens at configuration time, dispatch once per key-down on
//! the host's event thread. Every operation is a synchronous table lookup.

use crate::descriptor;
use crate::error::Result;
use crate::types::{Combination, KeyCode, KeyEvent, ModifierSet, Platform};
use log::{debug, trace, warn};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Handler invoked with the event that matched its combination
#[derive(Clone)]
pub struct Callback(Arc<dyn Fn(&KeyEvent) + Send + Sync>);

impl Callback {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&KeyEvent) + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A callback that does nothing. A match still updates the last matched
    /// event and notifies observers.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn call(&self, event: &KeyEvent) {
        (self.0)(event)
    }
}

impl<F> From<F> for Callback
where
    F: Fn(&KeyEvent) + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}

/// Handle returned by [`Registry::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Table of registered shortcuts
pub struct Registry {
    platform: Platform,
    entries: HashMap<Combination, Callback>,
    last_matched: Option<KeyEvent>,
    observers: Vec<(SubscriptionId, Callback)>,
    next_subscription: u64,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry using the key table of the current platform
    pub fn new() -> Self {
        Self::with_platform(Platform::current())
    }

    pub fn with_platform(platform: Platform) -> Self {
        Self {
            platform,
            entries: HashMap::new(),
            last_matched: None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Register a single combination. An existing entry is replaced.
    pub fn register(&mut self, combination: Combination, callback: impl Into<Callback>) {
        let callback = callback.into();
        debug!("Registered shortcut {}", combination);
        if self.entries.insert(combination, callback).is_some() {
            debug!("Replaced existing handler for {}", combination);
        }
    }

    /// Register every code in `codes` with the same modifiers and callback.
    /// Codes outside this registry's platform table are still stored but can
    /// never be produced by [`Registry::dispatch`].
    pub fn register_codes<I>(&mut self, codes: I, modifiers: ModifierSet, callback: impl Into<Callback>)
    where
        I: IntoIterator<Item = KeyCode>,
    {
        let callback = callback.into();
        for key_code in codes {
            if !self.platform.contains(key_code) {
                warn!(
                    "{:?} is not in the {} key table and will never match",
                    key_code, self.platform
                );
            }
            self.register(Combination::new(key_code, modifiers), callback.clone());
        }
    }

    /// Register a shortcut from a descriptor known at build time.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor's base key is not recognized. Shortcut tables
    /// are static configuration, so a bad entry is a programming error that
    /// should surface at startup. Use [`Registry::try_register_descriptor`]
    /// for text that comes from users.
    pub fn register_descriptor(&mut self, descriptor: &str, callback: impl Into<Callback>) {
        if let Err(e) = self.try_register_descriptor(descriptor, callback) {
            panic!("invalid shortcut descriptor: {}", e);
        }
    }

    /// Register each descriptor with the same callback.
    ///
    /// # Panics
    ///
    /// Panics on the first unrecognized descriptor. Entries before it stay
    /// registered.
    pub fn register_descriptors<I, S>(&mut self, descriptors: I, callback: impl Into<Callback>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if let Err(e) = self.try_register_descriptors(descriptors, callback) {
            panic!("invalid shortcut descriptor: {}", e);
        }
    }

    /// Recoverable form of [`Registry::register_descriptor`].
    pub fn try_register_descriptor(
        &mut self,
        descriptor: &str,
        callback: impl Into<Callback>,
    ) -> Result<Combination> {
        let combination = descriptor::parse(descriptor)?;
        self.register(combination, callback);
        Ok(combination)
    }

    /// Recoverable form of [`Registry::register_descriptors`]. Stops at the
    /// first error; earlier descriptors remain registered.
    pub fn try_register_descriptors<I, S>(
        &mut self,
        descriptors: I,
        callback: impl Into<Callback>,
    ) -> Result<Vec<Combination>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let callback = callback.into();
        descriptors
            .into_iter()
            .map(|d| self.try_register_descriptor(d.as_ref(), callback.clone()))
            .collect()
    }

    pub fn contains(&self, combination: &Combination) -> bool {
        self.entries.contains_key(combination)
    }

    pub fn get(&self, combination: &Combination) -> Option<&Callback> {
        self.entries.get(combination)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered combinations, in no particular order
    pub fn combinations(&self) -> impl Iterator<Item = &Combination> {
        self.entries.keys()
    }

    /// Resolve the event's raw code against this registry's platform table
    pub fn combination_for(&self, event: &KeyEvent) -> Combination {
        let key_code = self.platform.lookup(event.key_code);
        if key_code == KeyCode::Empty && event.key_code != 0 {
            debug!(
                "Key code {} is not in the {} key table",
                event.key_code, self.platform
            );
        }
        Combination::new(key_code, event.modifiers)
    }

    /// Match `event` and run its callback.
    ///
    /// On a match the event becomes the last matched event, the registered
    /// callback runs, then every observer runs, and `true` is returned. On a
    /// miss nothing changes and the host should apply its default handling.
    pub fn dispatch(&mut self, event: &KeyEvent) -> bool {
        let combination = self.combination_for(event);
        let Some(callback) = self.entries.get(&combination).cloned() else {
            trace!("No shortcut for {}", combination);
            return false;
        };

        debug!("Matched shortcut {} ({})", combination, event.description());
        self.last_matched = Some(event.clone());
        callback.call(event);
        for (_, observer) in &self.observers {
            observer.call(event);
        }
        true
    }

    /// The most recently matched event, if any
    pub fn last_matched(&self) -> Option<&KeyEvent> {
        self.last_matched.as_ref()
    }

    /// Observe every successful match. Observers run after the matched
    /// callback, in subscription order.
    pub fn subscribe(&mut self, observer: impl Into<Callback>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer.into()));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(existing, _)| *existing != id);
        self.observers.len() != before
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("platform", &self.platform)
            .field("entries", &self.entries.len())
            .field("last_matched", &self.last_matched)
            .field("observers", &self.observers.len())
            .finish()
    }
}
