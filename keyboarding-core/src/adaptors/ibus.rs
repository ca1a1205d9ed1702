//! IBus engine adaptor
//!
//! IBus engines sit on top of an XKB layout: activating one must also switch
//! the XKB group to whatever installed layout matches the layout the engine
//! declares, transparently to the caller. The coordination is one-way;
//! activating a plain XKB keyboard never touches IBus.

use std::rc::Rc;

use tracing::{debug, trace, warn};

use super::backend::{EngineBackend, XkbBackend};
use super::{first_of_kind, KeyboardRetrievingAdaptor, KeyboardSwitchingAdaptor};
use crate::types::{AdaptorKind, KeyboardDescription, NativeHandle};

pub struct IbusAdaptor {
    backend: Rc<dyn EngineBackend>,
    xkb: Rc<dyn XkbBackend>,
    default_layout: String,
}

impl IbusAdaptor {
    pub fn new(backend: Rc<dyn EngineBackend>, xkb: Rc<dyn XkbBackend>) -> Self {
        Self {
            backend,
            xkb,
            default_layout: "us".to_string(),
        }
    }

    /// Overrides the XKB layout used when an engine's declared layout is not
    /// installed.
    pub fn with_default_layout(mut self, layout: &str) -> Self {
        self.default_layout = layout.to_string();
        self
    }

    /// Switches the XKB group underneath an engine whose declared layout is
    /// `layout`. Falls back to the configured default layout, then to the
    /// first installed layout; with no installed layouts at all the group
    /// change is skipped. Never a hard failure.
    fn set_group_for_layout(&self, layout: &str) {
        if !self.xkb.is_available() {
            return;
        }
        let installed = self.xkb.layouts();
        let group = installed
            .iter()
            .find(|l| l.layout == layout)
            .or_else(|| installed.iter().find(|l| l.layout == self.default_layout))
            .or_else(|| installed.first())
            .map(|l| l.group);
        match group {
            Some(group) => {
                trace!(layout, group, "setting XKB group for IBus engine");
                if !self.xkb.set_group(group) {
                    warn!(group, "XKB server rejected group change");
                }
            }
            None => trace!(layout, "no installed XKB layouts, skipping group change"),
        }
    }
}

impl KeyboardRetrievingAdaptor for IbusAdaptor {
    fn kind(&self) -> AdaptorKind {
        AdaptorKind::Ibus
    }

    fn is_applicable(&self) -> bool {
        self.backend.is_available()
    }

    fn retrieve_keyboards(&self) -> Vec<KeyboardDescription> {
        let engines = self.backend.engines();
        debug!(count = engines.len(), "enumerated IBus engines");
        engines
            .iter()
            .map(|engine| {
                KeyboardDescription::new(
                    &engine.language,
                    &engine.longname,
                    &engine.name,
                    AdaptorKind::Ibus,
                )
                .with_handle(NativeHandle::IbusEngine {
                    longname: engine.longname.clone(),
                    layout: engine.layout.clone(),
                })
            })
            .collect()
    }
}

impl KeyboardSwitchingAdaptor for IbusAdaptor {
    fn activate_keyboard(&self, keyboard: &KeyboardDescription) -> bool {
        let NativeHandle::IbusEngine { longname, layout } = &keyboard.handle else {
            warn!(id = %keyboard.id, "keyboard has no IBus engine handle");
            return false;
        };
        if !self.backend.is_available() {
            return false;
        }
        self.set_group_for_layout(layout);
        self.backend.activate_engine(longname)
    }

    fn deactivate_keyboard(&self, _keyboard: &KeyboardDescription) -> bool {
        self.backend.deactivate_engine()
    }

    fn default_keyboard(&self, available: &[KeyboardDescription]) -> KeyboardDescription {
        first_of_kind(AdaptorKind::Ibus, available)
    }
}
