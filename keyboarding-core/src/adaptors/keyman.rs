//! Keyman keyboard package adaptor
//!
//! Keyman keyboards are distributed as packages on top of the platform's
//! input stack; from this crate's point of view they are another
//! engine-based subsystem with their own identifier space.

use std::rc::Rc;

use tracing::{debug, warn};

use super::backend::EngineBackend;
use super::{first_of_kind, KeyboardRetrievingAdaptor, KeyboardSwitchingAdaptor};
use crate::types::{AdaptorKind, KeyboardDescription, KeyboardFormat, NativeHandle};

pub struct KeymanAdaptor {
    backend: Rc<dyn EngineBackend>,
}

impl KeymanAdaptor {
    pub fn new(backend: Rc<dyn EngineBackend>) -> Self {
        Self { backend }
    }
}

impl KeyboardRetrievingAdaptor for KeymanAdaptor {
    fn kind(&self) -> AdaptorKind {
        AdaptorKind::Keyman
    }

    fn is_applicable(&self) -> bool {
        self.backend.is_available()
    }

    fn retrieve_keyboards(&self) -> Vec<KeyboardDescription> {
        let packages = self.backend.engines();
        debug!(count = packages.len(), "enumerated Keyman keyboards");
        packages
            .iter()
            .map(|package| {
                let mut kb = KeyboardDescription::new(
                    &package.language,
                    &package.layout,
                    &package.name,
                    AdaptorKind::Keyman,
                )
                .with_handle(NativeHandle::InputProcessor(package.longname.clone()));
                kb.format = KeyboardFormat::Keyman;
                kb
            })
            .collect()
    }

    fn create_keyboard(&self, id: &str) -> KeyboardDescription {
        let (locale, layout) = id.split_once('_').unwrap_or(("", id));
        KeyboardDescription {
            id: id.to_string(),
            name: id.to_string(),
            layout: layout.to_string(),
            variant: None,
            locale: locale.to_string(),
            is_available: false,
            adaptor: Some(AdaptorKind::Keyman),
            handle: NativeHandle::None,
            format: KeyboardFormat::Keyman,
            other_ids: Vec::new(),
        }
    }
}

impl KeyboardSwitchingAdaptor for KeymanAdaptor {
    fn activate_keyboard(&self, keyboard: &KeyboardDescription) -> bool {
        let NativeHandle::InputProcessor(package) = &keyboard.handle else {
            warn!(id = %keyboard.id, "keyboard has no Keyman package handle");
            return false;
        };
        self.backend.is_available() && self.backend.activate_engine(package)
    }

    fn default_keyboard(&self, available: &[KeyboardDescription]) -> KeyboardDescription {
        first_of_kind(AdaptorKind::Keyman, available)
    }
}
