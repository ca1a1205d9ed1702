//! Windows TSF/IME input processor adaptor

use std::rc::Rc;

use tracing::{debug, warn};

use super::backend::EngineBackend;
use super::{first_of_kind, KeyboardRetrievingAdaptor, KeyboardSwitchingAdaptor};
use crate::types::{AdaptorKind, KeyboardDescription, NativeHandle};

pub struct WindowsAdaptor {
    backend: Rc<dyn EngineBackend>,
}

impl WindowsAdaptor {
    pub fn new(backend: Rc<dyn EngineBackend>) -> Self {
        Self { backend }
    }
}

impl KeyboardRetrievingAdaptor for WindowsAdaptor {
    fn kind(&self) -> AdaptorKind {
        AdaptorKind::Windows
    }

    fn is_applicable(&self) -> bool {
        self.backend.is_available()
    }

    fn retrieve_keyboards(&self) -> Vec<KeyboardDescription> {
        let profiles = self.backend.engines();
        debug!(count = profiles.len(), "enumerated TSF input processors");
        profiles
            .iter()
            .map(|profile| {
                KeyboardDescription::new(
                    &profile.language,
                    &profile.layout,
                    &profile.name,
                    AdaptorKind::Windows,
                )
                .with_handle(NativeHandle::InputProcessor(profile.longname.clone()))
            })
            .collect()
    }
}

impl KeyboardSwitchingAdaptor for WindowsAdaptor {
    fn activate_keyboard(&self, keyboard: &KeyboardDescription) -> bool {
        let NativeHandle::InputProcessor(profile) = &keyboard.handle else {
            warn!(id = %keyboard.id, "keyboard has no input processor handle");
            return false;
        };
        self.backend.is_available() && self.backend.activate_engine(profile)
    }

    fn default_keyboard(&self, available: &[KeyboardDescription]) -> KeyboardDescription {
        first_of_kind(AdaptorKind::Windows, available)
    }
}
