//! Error types for the keyboarding core

use thiserror::Error;

use crate::types::AdaptorKind;

/// Fatal error conditions.
///
/// Anything recoverable is absorbed before it gets here: an identifier that
/// does not resolve yields the null keyboard sentinel, a native subsystem
/// that is unavailable reports through the error sink, and a malformed
/// composition event is clamped. What remains indicates corrupted
/// registration data with no safe default.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate keyboard id in registry: {0}")]
    DuplicateKeyboard(String),

    #[error("No keyboard adaptors are registered")]
    NoAdaptors,

    #[error("No adaptor of kind {0:?} is registered")]
    UnknownAdaptor(AdaptorKind),

    #[error("Keyboard '{0}' has no owning adaptor")]
    UnownedKeyboard(String),
}

pub type Result<T> = std::result::Result<T, Error>;
