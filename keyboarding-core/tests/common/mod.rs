//! Shared fakes and helpers for the integration tests

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use keyboarding_core::{
    EngineBackend, EngineInfo, ErrorSink, Selection, TextSink, XkbBackend, XkbLayoutInfo,
};

/// In-memory text sink standing in for a focused text control.
pub struct BufferSink {
    text: String,
    selection: Selection,
}

impl BufferSink {
    pub fn new(text: &str, start: usize, length: usize) -> Self {
        Self {
            text: text.to_string(),
            selection: Selection::new(start, length),
        }
    }
}

impl TextSink for BufferSink {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = selection;
    }
}

/// Asserts sink text and selection in one go.
pub fn assert_sink(sink: &BufferSink, text: &str, start: usize, length: usize) {
    assert_eq!(sink.text(), text, "sink text");
    assert_eq!(sink.selection(), Selection::new(start, length), "sink selection");
}

/// Error sink that records every notification.
#[derive(Default)]
pub struct RecordingErrorSink {
    pub messages: RefCell<Vec<String>>,
}

impl ErrorSink for RecordingErrorSink {
    fn notify_user(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Fake XKB server.
pub struct FakeXkb {
    pub available: Cell<bool>,
    pub layouts: RefCell<Vec<XkbLayoutInfo>>,
    pub group: Cell<Option<u32>>,
    pub accept_group_change: Cell<bool>,
}

impl FakeXkb {
    pub fn new(layouts: Vec<XkbLayoutInfo>) -> Rc<Self> {
        Rc::new(Self {
            available: Cell::new(true),
            layouts: RefCell::new(layouts),
            group: Cell::new(None),
            accept_group_change: Cell::new(true),
        })
    }
}

impl XkbBackend for FakeXkb {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn layouts(&self) -> Vec<XkbLayoutInfo> {
        self.layouts.borrow().clone()
    }

    fn set_group(&self, group: u32) -> bool {
        if !self.accept_group_change.get() {
            return false;
        }
        self.group.set(Some(group));
        true
    }
}

pub fn xkb_layout(
    group: u32,
    layout: &str,
    variant: Option<&str>,
    locale: &str,
) -> XkbLayoutInfo {
    XkbLayoutInfo {
        group,
        name: layout.to_string(),
        layout: layout.to_string(),
        variant: variant.map(str::to_string),
        locale: locale.to_string(),
    }
}

/// Fake engine-based subsystem (IBus daemon, TSF, Keyman).
pub struct FakeEngines {
    pub available: Cell<bool>,
    pub engines: RefCell<Vec<EngineInfo>>,
    pub active: RefCell<Option<String>>,
    pub accept_activation: Cell<bool>,
}

impl FakeEngines {
    pub fn new(engines: Vec<EngineInfo>) -> Rc<Self> {
        Rc::new(Self {
            available: Cell::new(true),
            engines: RefCell::new(engines),
            active: RefCell::new(None),
            accept_activation: Cell::new(true),
        })
    }
}

impl EngineBackend for FakeEngines {
    fn is_available(&self) -> bool {
        self.available.get()
    }

    fn engines(&self) -> Vec<EngineInfo> {
        self.engines.borrow().clone()
    }

    fn activate_engine(&self, longname: &str) -> bool {
        if !self.accept_activation.get() {
            return false;
        }
        *self.active.borrow_mut() = Some(longname.to_string());
        true
    }

    fn deactivate_engine(&self) -> bool {
        *self.active.borrow_mut() = None;
        true
    }
}

pub fn engine(longname: &str, name: &str, language: &str, layout: &str) -> EngineInfo {
    EngineInfo {
        longname: longname.to_string(),
        name: name.to_string(),
        language: language.to_string(),
        layout: layout.to_string(),
    }
}
