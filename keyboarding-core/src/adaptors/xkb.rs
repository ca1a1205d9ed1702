//! X11/XKB layout group adaptor

use std::rc::Rc;

use tracing::{debug, warn};

use super::backend::XkbBackend;
use super::{KeyboardRetrievingAdaptor, KeyboardSwitchingAdaptor};
use crate::types::{AdaptorKind, KeyboardDescription, NativeHandle};

/// Adaptor for plain XKB layout groups.
///
/// Carries a configured default layout/variant used when a default keyboard
/// has to be picked and when IBus activation needs a fallback group.
pub struct XkbAdaptor {
    backend: Rc<dyn XkbBackend>,
    default_layout: String,
    default_variant: Option<String>,
}

impl XkbAdaptor {
    pub fn new(backend: Rc<dyn XkbBackend>) -> Self {
        Self {
            backend,
            default_layout: "us".to_string(),
            default_variant: None,
        }
    }

    /// Overrides the configured default layout/variant (e.g. "de", "neo").
    pub fn with_default_layout(mut self, layout: &str, variant: Option<&str>) -> Self {
        self.default_layout = layout.to_string();
        self.default_variant = variant.map(str::to_string);
        self
    }
}

impl KeyboardRetrievingAdaptor for XkbAdaptor {
    fn kind(&self) -> AdaptorKind {
        AdaptorKind::Xkb
    }

    fn is_applicable(&self) -> bool {
        self.backend.is_available()
    }

    fn retrieve_keyboards(&self) -> Vec<KeyboardDescription> {
        let layouts = self.backend.layouts();
        debug!(count = layouts.len(), "enumerated XKB layout groups");
        layouts
            .iter()
            .map(|info| {
                KeyboardDescription::new(&info.locale, &info.layout, &info.name, AdaptorKind::Xkb)
                    .with_variant(info.variant.as_deref())
                    .with_handle(NativeHandle::XkbGroup(info.group))
            })
            .collect()
    }
}

impl KeyboardSwitchingAdaptor for XkbAdaptor {
    fn activate_keyboard(&self, keyboard: &KeyboardDescription) -> bool {
        let NativeHandle::XkbGroup(group) = keyboard.handle else {
            warn!(id = %keyboard.id, "keyboard has no XKB group handle");
            return false;
        };
        self.backend.set_group(group)
    }

    /// Exact (layout, variant) match wins; then the first keyboard with the
    /// configured layout ignoring variant; then the first enumerated XKB
    /// keyboard; then the placeholder.
    fn default_keyboard(&self, available: &[KeyboardDescription]) -> KeyboardDescription {
        let candidates: Vec<&KeyboardDescription> = available
            .iter()
            .filter(|kb| kb.adaptor == Some(AdaptorKind::Xkb))
            .collect();

        candidates
            .iter()
            .find(|kb| {
                kb.layout == self.default_layout
                    && kb.variant.as_deref() == self.default_variant.as_deref()
            })
            .or_else(|| candidates.iter().find(|kb| kb.layout == self.default_layout))
            .or_else(|| candidates.first())
            .map(|kb| (*kb).clone())
            .unwrap_or_else(KeyboardDescription::placeholder)
    }
}
