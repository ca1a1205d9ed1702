//! Native keyboard subsystem adaptors
//!
//! Every native subsystem integration provides a pair of roles: a retrieving
//! adaptor that enumerates native keyboards into [`KeyboardDescription`]s and
//! a switching adaptor that activates one of them. A single concrete type
//! implements both roles; the registry stores it behind
//! `Rc<dyn KeyboardAdaptor>` keyed by its [`AdaptorKind`] tag.
//!
//! Native calls go through the backend traits in [`backend`], which the host
//! (or a test) injects. The model is single-threaded, so adaptors share
//! backends via `Rc` and backends use interior mutability.

pub mod backend;

mod ibus;
mod keyman;
mod windows;
mod xkb;

pub use ibus::IbusAdaptor;
pub use keyman::KeymanAdaptor;
pub use windows::WindowsAdaptor;
pub use xkb::XkbAdaptor;

use crate::types::{AdaptorKind, KeyboardDescription, KeyboardFormat, NativeHandle};

/// Enumeration role of a native subsystem integration.
pub trait KeyboardRetrievingAdaptor {
    fn kind(&self) -> AdaptorKind;

    /// Whether this adaptor can work at all in the current environment.
    /// Non-applicable adaptors are skipped during controller initialization.
    fn is_applicable(&self) -> bool;

    /// Enumerates the subsystem's installed keyboards.
    fn retrieve_keyboards(&self) -> Vec<KeyboardDescription>;

    /// Synthesizes a description for an ad-hoc keyboard id that no subsystem
    /// reported. The result is marked unavailable.
    fn create_keyboard(&self, id: &str) -> KeyboardDescription {
        let (locale, layout) = id.split_once('_').unwrap_or(("", id));
        KeyboardDescription {
            id: id.to_string(),
            name: id.to_string(),
            layout: layout.to_string(),
            variant: None,
            locale: locale.to_string(),
            is_available: false,
            adaptor: Some(self.kind()),
            handle: NativeHandle::None,
            format: KeyboardFormat::Unknown,
            other_ids: Vec::new(),
        }
    }
}

/// Activation role of a native subsystem integration.
///
/// Activation never errors out of this layer: an adaptor that cannot find
/// its OS counterpart returns `false` and the previously active keyboard
/// stays active.
pub trait KeyboardSwitchingAdaptor {
    /// Activates `keyboard` against the native subsystem. Returns whether
    /// the subsystem accepted the switch.
    fn activate_keyboard(&self, keyboard: &KeyboardDescription) -> bool;

    /// Deactivates `keyboard`. Most subsystems need nothing here; switching
    /// to another keyboard implicitly replaces the old one.
    fn deactivate_keyboard(&self, keyboard: &KeyboardDescription) -> bool {
        let _ = keyboard;
        true
    }

    /// The keyboard this adaptor considers the default among `available`.
    /// Never fails; with nothing to offer it returns the `(default)`
    /// placeholder.
    fn default_keyboard(&self, available: &[KeyboardDescription]) -> KeyboardDescription;
}

/// The full adaptor pair, as stored in the registry.
pub trait KeyboardAdaptor: KeyboardRetrievingAdaptor + KeyboardSwitchingAdaptor {}

impl<T: KeyboardRetrievingAdaptor + KeyboardSwitchingAdaptor> KeyboardAdaptor for T {}

/// First enumerated keyboard of `kind`, or the placeholder. The shared
/// tail of every adaptor's default-keyboard fallback chain.
pub(crate) fn first_of_kind(
    kind: AdaptorKind,
    available: &[KeyboardDescription],
) -> KeyboardDescription {
    available
        .iter()
        .find(|kb| kb.adaptor == Some(kind))
        .cloned()
        .unwrap_or_else(KeyboardDescription::placeholder)
}
