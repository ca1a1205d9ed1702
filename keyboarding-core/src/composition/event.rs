//! Composition event representation

/// Underline style of a preedit segment.
///
/// IME convention: a single underline marks text that is still tentative; a
/// segment with no underline has been finalized by the engine even though it
/// was delivered as preedit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderlineStyle {
    None,
    Single,
    Double,
    Low,
    Error,
}

/// Style attribute over a char range of the preedit string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreeditAttr {
    pub underline: UnderlineStyle,
    /// Start char offset within the preedit string
    pub start: usize,
    /// Exclusive end char offset
    pub end: usize,
}

impl PreeditAttr {
    pub fn new(underline: UnderlineStyle, start: usize, end: usize) -> Self {
        Self { underline, start, end }
    }
}

/// One update-preedit payload: the whole in-progress string, its style
/// attributes, and the engine's requested caret position within it (chars).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreeditText {
    pub text: String,
    pub attributes: Vec<PreeditAttr>,
    pub cursor_pos: usize,
}

impl PreeditText {
    pub fn new(text: &str, cursor_pos: usize) -> Self {
        Self {
            text: text.to_string(),
            attributes: Vec::new(),
            cursor_pos,
        }
    }

    pub fn with_attributes(mut self, attributes: Vec<PreeditAttr>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Whether any segment is still underlined, i.e. the engine has not
    /// finalized this preedit.
    pub fn is_tentative(&self) -> bool {
        self.attributes
            .iter()
            .any(|attr| attr.underline != UnderlineStyle::None)
    }
}

/// The event stream an input-method engine delivers for the focused sink.
///
/// The host event loop owns delivery order; events must be handed to the
/// composition engine in the order they arrive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImeEvent {
    UpdatePreedit(PreeditText),
    Commit(String),
    DeleteSurrounding { offset: i32, n_chars: i32 },
    Key { keysym: u32, scancode: u32, state: u32 },
}
