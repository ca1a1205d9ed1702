//! Composition state machine
//!
//! Two states, `Idle` and `Composing`, modelled as an `Option` of the
//! episode bookkeeping. Every handler produces a well-defined (possibly
//! no-op) edit: one `set_text` and one `set_selection` per event, offsets
//! clamped, never an error. All offsets are character counts.

use tracing::trace;

use super::event::{ImeEvent, PreeditText};
use crate::sink::TextSink;
use crate::types::Selection;

/// Bookkeeping for one composition episode, alive from the first preedit
/// update until commit or reset.
struct ActiveComposition {
    /// Char offset where the preedit lives in the sink. This is the *end*
    /// of the selection captured at episode start: a preedit goes after a
    /// range selection without destroying it, and for a plain caret the
    /// selection end is just the caret.
    anchor: usize,
    /// Sink selection at the first preedit update of the episode
    original_selection: Selection,
    /// Latest preedit revision: the string currently present in the sink
    /// and its attributes
    preedit: PreeditText,
}

/// Applies an IME's composition events to a text sink.
///
/// One engine instance serves one focused sink at a time; events must be
/// applied in delivery order.
#[derive(Default)]
pub struct CompositionEngine {
    composition: Option<ActiveComposition>,
}

impl CompositionEngine {
    pub fn new() -> Self {
        Self { composition: None }
    }

    pub fn is_composing(&self) -> bool {
        self.composition.is_some()
    }

    /// Event-channel entry point. Returns whether the event was consumed;
    /// raw key events are not (the host forwards them to normal key
    /// processing).
    pub fn handle(&mut self, sink: &mut dyn TextSink, event: ImeEvent) -> bool {
        match event {
            ImeEvent::UpdatePreedit(preedit) => {
                self.update_preedit(sink, &preedit);
                true
            }
            ImeEvent::Commit(text) => {
                self.commit(sink, &text);
                true
            }
            ImeEvent::DeleteSurrounding { offset, n_chars } => {
                self.delete_surrounding(sink, offset, n_chars);
                true
            }
            ImeEvent::Key { .. } => false,
        }
    }

    /// Replaces the in-progress preedit with a new revision.
    ///
    /// The first update of an episode captures the sink's selection and
    /// inserts the preedit at its end; later updates replace exactly the
    /// span the previous update wrote. A range selection captured at
    /// episode start is preserved across preedit updates (it only collapses
    /// on commit); for a plain caret the caret tracks `cursor_pos` relative
    /// to the anchor.
    pub fn update_preedit(&mut self, sink: &mut dyn TextSink, preedit: &PreeditText) {
        if self.composition.is_none() {
            let original_selection = sink.selection();
            trace!(
                start = original_selection.start,
                length = original_selection.length,
                "starting composition episode"
            );
            self.composition = Some(ActiveComposition {
                anchor: original_selection.end(),
                original_selection,
                preedit: PreeditText::new("", 0),
            });
        }
        let Some(comp) = self.composition.as_mut() else {
            return;
        };

        let buffer = sink.text();
        let updated =
            replace_chars(&buffer, comp.anchor, char_len(&comp.preedit.text), &preedit.text);
        let updated_len = char_len(&updated);
        sink.set_text(&updated);
        if comp.original_selection.is_range() {
            sink.set_selection(comp.original_selection);
        } else {
            let caret = (comp.anchor + preedit.cursor_pos).min(updated_len);
            sink.set_selection(Selection::caret(caret));
        }
        comp.preedit = preedit.clone();
    }

    /// Inserts finalized text.
    ///
    /// With no composition in progress (some engines commit every keystroke
    /// without ever sending a preedit) the sink's current selection is
    /// replaced. With one in progress, the preedit is removed and the
    /// selection captured at episode start is replaced. Either way the
    /// caret ends up after the inserted text with no range selected.
    pub fn commit(&mut self, sink: &mut dyn TextSink, text: &str) {
        let buffer = sink.text();
        match self.composition.take() {
            None => {
                let selection = sink.selection();
                let updated = replace_chars(&buffer, selection.start, selection.length, text);
                sink.set_text(&updated);
                sink.set_selection(Selection::caret(selection.start + char_len(text)));
            }
            Some(comp) => {
                // The anchor sits at the end of the original selection, so
                // removing the preedit first leaves the selection offsets
                // intact.
                let without_preedit =
                    replace_chars(&buffer, comp.anchor, char_len(&comp.preedit.text), "");
                let original = comp.original_selection;
                let updated = replace_chars(&without_preedit, original.start, original.length, text);
                sink.set_text(&updated);
                sink.set_selection(Selection::caret(original.start + char_len(text)));
                trace!("committed composition");
            }
        }
    }

    /// Deletes text around the caret, independent of composition state.
    ///
    /// The requested range is `[caret + offset, caret + offset + n_chars)`;
    /// both ends are clamped to the buffer, so over-long deletions remove
    /// only what exists and offsets before the start of text are truncated
    /// rather than wrapped. `n_chars <= 0` is a no-op. The caret moves left
    /// by the number of removed chars that were before it.
    pub fn delete_surrounding(&mut self, sink: &mut dyn TextSink, offset: i32, n_chars: i32) {
        if n_chars <= 0 {
            return;
        }
        let buffer = sink.text();
        let len = char_len(&buffer) as i64;
        let caret = (sink.selection().start as i64).min(len);
        let start = (caret + offset as i64).clamp(0, len);
        let end = (caret + offset as i64 + n_chars as i64).clamp(0, len);
        if start >= end {
            return;
        }

        let updated = replace_chars(&buffer, start as usize, (end - start) as usize, "");
        let caret_after = if caret <= start {
            caret
        } else if caret >= end {
            caret - (end - start)
        } else {
            start
        };
        sink.set_text(&updated);
        sink.set_selection(Selection::caret(caret_after as usize));
    }

    /// Commits or discards the pending preedit based on its attributes:
    /// an un-underlined preedit has been finalized by the engine and is
    /// committed as-is; an underlined one is still tentative and is reset.
    /// Returns whether text was (or already had been) committed.
    pub fn commit_or_reset(&mut self, sink: &mut dyn TextSink) -> bool {
        let Some(comp) = self.composition.as_ref() else {
            return true;
        };
        if comp.preedit.is_tentative() {
            self.reset(sink);
            false
        } else {
            let text = comp.preedit.text.clone();
            self.commit(sink, &text);
            true
        }
    }

    /// Cancels the composition episode: removes the preedit from the sink
    /// and restores the selection exactly as captured at episode start.
    pub fn reset(&mut self, sink: &mut dyn TextSink) {
        let Some(comp) = self.composition.take() else {
            return;
        };
        let buffer = sink.text();
        let updated = replace_chars(&buffer, comp.anchor, char_len(&comp.preedit.text), "");
        sink.set_text(&updated);
        sink.set_selection(comp.original_selection);
        trace!("reset composition");
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Replaces the char range `[start, start + len)` of `s` with
/// `replacement`, clamping the range to the string.
fn replace_chars(s: &str, start: usize, len: usize, replacement: &str) -> String {
    let total = char_len(s);
    let start = start.min(total);
    let end = (start + len).min(total);
    let byte_start = byte_offset(s, start);
    let byte_end = byte_offset(s, end);
    let mut out = String::with_capacity(s.len() + replacement.len());
    out.push_str(&s[..byte_start]);
    out.push_str(replacement);
    out.push_str(&s[byte_end..]);
    out
}

fn byte_offset(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
