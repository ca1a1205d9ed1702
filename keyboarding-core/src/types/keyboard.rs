//! Keyboard description record

use super::{AdaptorKind, KeyboardFormat, NativeHandle};

/// One selectable keyboard, as enumerated by a retrieving adaptor.
///
/// Descriptions are never mutated once registered; re-enumeration replaces
/// them wholesale. The canonical id is `{locale}_{layout}`.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyboardDescription {
    /// Unique id within a registry snapshot
    pub id: String,
    /// Display name
    pub name: String,
    /// Native layout name
    pub layout: String,
    /// Native layout variant, if the subsystem has one (e.g. XKB "intl")
    pub variant: Option<String>,
    /// Language tag
    pub locale: String,
    pub is_available: bool,
    /// Owning switching adaptor; `None` only for the null sentinel and the
    /// `(default)` placeholder
    pub adaptor: Option<AdaptorKind>,
    /// Adaptor-specific native handle, opaque to the controller
    pub handle: NativeHandle,
    /// Source format for ad-hoc keyboards
    pub format: KeyboardFormat,
    /// Alternate identifiers this keyboard is also known by
    pub other_ids: Vec<String>,
}

impl KeyboardDescription {
    /// Creates a registered keyboard description with the canonical id.
    pub fn new(locale: &str, layout: &str, name: &str, adaptor: AdaptorKind) -> Self {
        Self {
            id: Self::canonical_id(locale, layout),
            name: name.to_string(),
            layout: layout.to_string(),
            variant: None,
            locale: locale.to_string(),
            is_available: true,
            adaptor: Some(adaptor),
            handle: NativeHandle::None,
            format: KeyboardFormat::Unknown,
            other_ids: Vec::new(),
        }
    }

    /// The `{locale}_{layout}` id form.
    pub fn canonical_id(locale: &str, layout: &str) -> String {
        format!("{}_{}", locale, layout)
    }

    /// The sentinel returned for identifiers that do not resolve.
    pub fn null() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            layout: String::new(),
            variant: None,
            locale: String::new(),
            is_available: false,
            adaptor: None,
            handle: NativeHandle::None,
            format: KeyboardFormat::Unknown,
            other_ids: Vec::new(),
        }
    }

    /// The placeholder an adaptor hands out when it has nothing to offer as
    /// a default keyboard.
    pub fn placeholder() -> Self {
        Self {
            name: "(default)".to_string(),
            ..Self::null()
        }
    }

    pub fn is_null(&self) -> bool {
        self.id.is_empty() && self.adaptor.is_none()
    }

    pub fn with_handle(mut self, handle: NativeHandle) -> Self {
        self.handle = handle;
        self
    }

    pub fn with_variant(mut self, variant: Option<&str>) -> Self {
        self.variant = variant.map(str::to_string);
        self
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }
}
