//! Process-wide keyboard registry
//!
//! Rebuilt wholesale on every controller initialization, never patched
//! incrementally; shutdown discards it entirely. Insertion order of the
//! keyboard list is significant: "first keyboard wins" when a default has to
//! be picked with no better match.

use std::collections::HashMap;
use std::rc::Rc;

use crate::adaptors::KeyboardAdaptor;
use crate::error::{Error, Result};
use crate::types::{AdaptorKind, KeyboardDescription};

#[derive(Default)]
pub(crate) struct KeyboardRegistry {
    adaptors: Vec<Rc<dyn KeyboardAdaptor>>,
    keyboards: Vec<KeyboardDescription>,
    index: HashMap<String, usize>,
    active: Option<String>,
}

impl KeyboardRegistry {
    pub(crate) fn register_adaptor(&mut self, adaptor: Rc<dyn KeyboardAdaptor>) {
        self.adaptors.push(adaptor);
    }

    pub(crate) fn adaptors(&self) -> &[Rc<dyn KeyboardAdaptor>] {
        &self.adaptors
    }

    pub(crate) fn adaptor(&self, kind: AdaptorKind) -> Option<&Rc<dyn KeyboardAdaptor>> {
        self.adaptors.iter().find(|a| a.kind() == kind)
    }

    /// Registers a keyboard description. A duplicate id means two adaptors
    /// claim the same identity, which is corrupted registration data.
    pub(crate) fn add(&mut self, keyboard: KeyboardDescription) -> Result<()> {
        if self.index.contains_key(&keyboard.id) {
            return Err(Error::DuplicateKeyboard(keyboard.id));
        }
        self.index.insert(keyboard.id.clone(), self.keyboards.len());
        self.keyboards.push(keyboard);
        Ok(())
    }

    pub(crate) fn keyboards(&self) -> &[KeyboardDescription] {
        &self.keyboards
    }

    pub(crate) fn get(&self, id: &str) -> Option<&KeyboardDescription> {
        self.index.get(id).map(|&i| &self.keyboards[i])
    }

    pub(crate) fn active(&self) -> Option<&KeyboardDescription> {
        self.active.as_deref().and_then(|id| self.get(id))
    }

    pub(crate) fn set_active(&mut self, id: Option<&str>) {
        self.active = id.map(str::to_string);
    }
}
