//! Shared data types

mod keyboard;

pub use keyboard::KeyboardDescription;

/// The closed set of native keyboard subsystems an adaptor can integrate.
///
/// The registry keys its adaptor pairs by this tag instead of relying on
/// runtime type checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdaptorKind {
    /// X11/XKB layout groups
    Xkb,
    /// IBus engines (Linux, over D-Bus)
    Ibus,
    /// Windows TSF/IME input processors
    Windows,
    /// Keyman keyboard packages
    Keyman,
}

impl AdaptorKind {
    pub fn name(&self) -> &'static str {
        match self {
            AdaptorKind::Xkb => "XKB",
            AdaptorKind::Ibus => "IBus",
            AdaptorKind::Windows => "Windows",
            AdaptorKind::Keyman => "Keyman",
        }
    }
}

/// Source format of an ad-hoc keyboard definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardFormat {
    #[default]
    Unknown,
    Keyman,
    CompiledKeyman,
    Msklc,
    Ldml,
}

/// Adaptor-specific native handle attached to a keyboard description.
///
/// Opaque to the controller; only the owning adaptor interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum NativeHandle {
    #[default]
    None,
    /// XKB layout group number
    XkbGroup(u32),
    /// IBus engine descriptor: bus longname plus the layout the engine
    /// declares, which drives the XKB group coordination on activation
    IbusEngine { longname: String, layout: String },
    /// Windows TSF / Keyman input processor profile id
    InputProcessor(String),
}

/// A selection range in a text sink, measured in characters.
///
/// `length == 0` is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// A collapsed selection at `pos`
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, length: 0 }
    }

    /// Exclusive end of the selected range
    pub fn end(&self) -> usize {
        self.start + self.length
    }

    pub fn is_range(&self) -> bool {
        self.length > 0
    }
}
