//! Keyboarding core - keyboard identity and IME composition
//!
//! This crate provides the two pieces a desktop application needs to work
//! with platform input methods: a process-wide keyboard registry that
//! reconciles the historically-accumulated keyboard identifier schemes and
//! coordinates the native keyboard subsystems (XKB, IBus, Windows TSF,
//! Keyman), and a composition engine that turns an IME's preedit/commit
//! event stream into deterministic edits against a host text control.

pub mod adaptors;
pub mod composition;
pub mod controller;
pub mod error;
pub mod sink;
pub mod types;

pub use types::{AdaptorKind, KeyboardDescription, KeyboardFormat, NativeHandle, Selection};

// Re-export commonly used types
pub use adaptors::backend::{EngineBackend, EngineInfo, XkbBackend, XkbLayoutInfo};
pub use adaptors::{
    IbusAdaptor, KeyboardAdaptor, KeyboardRetrievingAdaptor, KeyboardSwitchingAdaptor,
    KeymanAdaptor, WindowsAdaptor, XkbAdaptor,
};
pub use composition::{CompositionEngine, ImeEvent, PreeditAttr, PreeditText, UnderlineStyle};
pub use controller::KeyboardController;
pub use error::{Error, Result};
pub use sink::{ErrorSink, TextSink};
