//! Keyboard controller
//!
//! Process-wide catalog of every keyboard known to any adaptor. Owns the
//! "active keyboard" concept and the identifier resolution rules. All
//! mutation happens on the main thread; there is no interior locking.

mod registry;
mod resolver;

use std::rc::Rc;

use tracing::{debug, trace, warn};

use crate::adaptors::KeyboardAdaptor;
use crate::error::{Error, Result};
use crate::sink::ErrorSink;
use crate::types::{KeyboardDescription, KeyboardFormat};
use registry::KeyboardRegistry;

/// The keyboard catalog and activation coordinator.
///
/// Construct once, `initialize` with the adaptors for the current platform,
/// `shutdown` when done. Shutdown followed by re-initialization is
/// equivalent to a fresh start; tests rely on that to catch leaked adaptor
/// state.
pub struct KeyboardController {
    registry: KeyboardRegistry,
    error_sink: Option<Rc<dyn ErrorSink>>,
    null_keyboard: KeyboardDescription,
    initialized: bool,
}

impl Default for KeyboardController {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardController {
    pub fn new() -> Self {
        Self {
            registry: KeyboardRegistry::default(),
            error_sink: None,
            null_keyboard: KeyboardDescription::null(),
            initialized: false,
        }
    }

    /// Installs the sink used to tell the user about recoverable native
    /// failures.
    pub fn set_error_sink(&mut self, sink: Rc<dyn ErrorSink>) {
        self.error_sink = Some(sink);
    }

    /// Registers the adaptor pairs in order and enumerates keyboards from
    /// every applicable one. Rebuilds the registry from scratch; calling it
    /// again replaces everything.
    ///
    /// Two adaptors reporting the same keyboard id is corrupted
    /// registration data and fails hard.
    pub fn initialize(&mut self, adaptors: Vec<Rc<dyn KeyboardAdaptor>>) -> Result<()> {
        self.shutdown();
        if let Err(err) = self.populate(adaptors) {
            self.shutdown();
            return Err(err);
        }
        self.initialized = true;
        Ok(())
    }

    fn populate(&mut self, adaptors: Vec<Rc<dyn KeyboardAdaptor>>) -> Result<()> {
        for adaptor in adaptors {
            if !adaptor.is_applicable() {
                debug!(kind = adaptor.kind().name(), "adaptor not applicable, skipping");
                continue;
            }
            let keyboards = adaptor.retrieve_keyboards();
            debug!(
                kind = adaptor.kind().name(),
                count = keyboards.len(),
                "registered adaptor"
            );
            self.registry.register_adaptor(adaptor);
            for keyboard in keyboards {
                self.registry.add(keyboard)?;
            }
        }
        Ok(())
    }

    /// Clears the registry and the active keyboard. Safe to call repeatedly
    /// and before any `initialize`.
    pub fn shutdown(&mut self) {
        if self.initialized {
            trace!("shutting down keyboard controller");
        }
        self.registry = KeyboardRegistry::default();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// All registered keyboards, in enumeration order.
    pub fn available_keyboards(&self) -> &[KeyboardDescription] {
        self.registry.keyboards()
    }

    /// Resolves `identifier` through the legacy identifier schemes. Returns
    /// the null keyboard sentinel when nothing matches; check with
    /// [`KeyboardDescription::is_null`].
    pub fn get_keyboard(&self, identifier: &str) -> &KeyboardDescription {
        resolver::resolve(self.registry.keyboards(), identifier).unwrap_or(&self.null_keyboard)
    }

    /// Resolves a native input-language handle (locale plus native layout
    /// name). Unmatched pairs yield the null keyboard.
    pub fn get_keyboard_for_input_language(
        &self,
        locale: &str,
        layout: &str,
    ) -> &KeyboardDescription {
        resolver::resolve_input_language(self.registry.keyboards(), locale, layout)
            .unwrap_or(&self.null_keyboard)
    }

    /// Returns the registered keyboard for `id`, or registers an ad-hoc
    /// description synthesized by the first adaptor (marked unavailable).
    pub fn create_keyboard(
        &mut self,
        id: &str,
        format: KeyboardFormat,
        other_ids: &[&str],
    ) -> Result<KeyboardDescription> {
        if let Some(existing) = self.registry.get(id) {
            return Ok(existing.clone());
        }
        let adaptor = self.registry.adaptors().first().ok_or(Error::NoAdaptors)?;
        let mut keyboard = adaptor.create_keyboard(id);
        keyboard.format = format;
        keyboard.other_ids = other_ids.iter().map(|s| s.to_string()).collect();
        self.registry.add(keyboard.clone())?;
        debug!(id, "created ad-hoc keyboard");
        Ok(keyboard)
    }

    /// The currently active keyboard, if any.
    pub fn active_keyboard(&self) -> Option<&KeyboardDescription> {
        self.registry.active()
    }

    /// Resolves and activates a keyboard. `Ok(false)` means the identifier
    /// did not resolve or the native subsystem declined the switch; the
    /// previously active keyboard stays active in both cases.
    pub fn activate_keyboard(&mut self, identifier: &str) -> Result<bool> {
        let keyboard = self.get_keyboard(identifier).clone();
        if keyboard.is_null() {
            warn!(identifier, "cannot activate unknown keyboard");
            return Ok(false);
        }
        self.activate(&keyboard)
    }

    /// Activates the default keyboard of the first registered adaptor.
    pub fn activate_default_keyboard(&mut self) -> Result<bool> {
        let keyboard = self.default_keyboard();
        if keyboard.adaptor.is_none() {
            // placeholder, nothing to switch to
            return Ok(false);
        }
        self.activate(&keyboard)
    }

    /// The default keyboard as computed by the first registered adaptor;
    /// the `(default)` placeholder when no adaptors are registered.
    pub fn default_keyboard(&self) -> KeyboardDescription {
        match self.registry.adaptors().first() {
            Some(adaptor) => adaptor.default_keyboard(self.registry.keyboards()),
            None => KeyboardDescription::placeholder(),
        }
    }

    fn activate(&mut self, keyboard: &KeyboardDescription) -> Result<bool> {
        if self.registry.active().map(|kb| kb.id.as_str()) == Some(keyboard.id.as_str()) {
            return Ok(true);
        }
        let kind = keyboard
            .adaptor
            .ok_or_else(|| Error::UnownedKeyboard(keyboard.id.clone()))?;
        let adaptor = self
            .registry
            .adaptor(kind)
            .ok_or(Error::UnknownAdaptor(kind))?
            .clone();

        // Activate the new keyboard before deactivating the old one so a
        // declined switch leaves the previous keyboard in place.
        if !adaptor.activate_keyboard(keyboard) {
            self.notify(&format!("Could not activate keyboard '{}'", keyboard.name));
            return Ok(false);
        }
        if let Some(previous) = self.registry.active().cloned() {
            // Switching within one subsystem implicitly replaces the old
            // keyboard; an explicit deactivation here would undo the switch
            // that just happened.
            if previous.adaptor != keyboard.adaptor {
                if let Some(prev_kind) = previous.adaptor {
                    if let Some(prev_adaptor) = self.registry.adaptor(prev_kind) {
                        prev_adaptor.deactivate_keyboard(&previous);
                    }
                }
            }
        }
        trace!(id = %keyboard.id, "activated keyboard");
        self.registry.set_active(Some(&keyboard.id));
        Ok(true)
    }

    fn notify(&self, message: &str) {
        warn!("{message}");
        if let Some(sink) = &self.error_sink {
            sink.notify_user(message);
        }
    }
}
