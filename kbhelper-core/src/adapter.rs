//! Host toolkit boundary
//!
//! ```text
//! host key-down → KeyboardHost::key_event → Registry::dispatch → callback
//!                                                  ↘ miss → KeyboardHost::forward
//! ```

use crate::registry::Registry;
use crate::types::{KeyEvent, Platform};

/// The GUI toolkit delivering key-down events.
///
/// Implementations translate the toolkit's own event type into a
/// [`KeyEvent`] and know how to hand an event back for default processing
/// (text entry, system shortcuts).
pub trait KeyboardHost {
    type Event;

    /// Extract the raw key code, modifier mask and characters.
    fn key_event(&self, event: &Self::Event) -> KeyEvent;

    /// Apply the toolkit's default handling to an unmatched event.
    fn forward(&mut self, event: Self::Event);
}

/// What happened to a key-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// A registered shortcut consumed the event
    Handled,
    /// No shortcut matched; the host handled the event as usual
    Forwarded,
}

impl Disposition {
    pub fn is_handled(self) -> bool {
        self == Disposition::Handled
    }
}

/// Passes each key-down from a host to a [`Registry`], one event per call.
pub struct DispatchAdapter<H: KeyboardHost> {
    registry: Registry,
    host: H,
}

impl<H: KeyboardHost> DispatchAdapter<H> {
    pub fn new(host: H) -> Self {
        Self::with_registry(host, Registry::new())
    }

    pub fn with_platform(host: H, platform: Platform) -> Self {
        Self::with_registry(host, Registry::with_platform(platform))
    }

    pub fn with_registry(host: H, registry: Registry) -> Self {
        Self { registry, host }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registry access for registering shortcuts
    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Handle one key-down from the host.
    pub fn key_down(&mut self, event: H::Event) -> Disposition {
        let key_event = self.host.key_event(&event);
        if self.registry.dispatch(&key_event) {
            Disposition::Handled
        } else {
            self.host.forward(event);
            Disposition::Forwarded
        }
    }

    pub fn into_parts(self) -> (H, Registry) {
        (self.host, self.registry)
    }
}
