//! IME composition handling
//!
//! The event types an input-method engine delivers while a keyboard is
//! active, and the state machine that applies them to a text sink.

mod engine;
mod event;

pub use engine::CompositionEngine;
pub use event::{ImeEvent, PreeditAttr, PreeditText, UnderlineStyle};
