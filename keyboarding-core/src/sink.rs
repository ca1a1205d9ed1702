//! Interfaces to the host application
//!
//! These are the only two capabilities this crate requires of its host: a
//! text sink for the focused control and a channel for telling the user
//! about recoverable native failures.

use crate::types::Selection;

/// Text buffer with a caret/selection, owned by the focused control.
///
/// All offsets are character counts. The composition engine assumes
/// exclusive access for the duration of a single event.
pub trait TextSink {
    fn text(&self) -> String;
    fn set_text(&mut self, text: &str);
    fn selection(&self) -> Selection;
    fn set_selection(&mut self, selection: Selection);
}

/// Recoverable-failure notifications (e.g. "could not connect to the IME
/// engine daemon"). Used by the registry/adaptor layer only; the
/// composition engine never fails.
pub trait ErrorSink {
    fn notify_user(&self, message: &str);
}
