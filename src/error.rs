use thiserror::Error;

/// Failure surfaced by [`crate::hash`] or [`crate::shake`] before any state
/// is touched.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum KeccakError {
    #[error("unsupported output size: {0} (expected one of 224, 256, 384, 512)")]
    UnsupportedOutputSize(usize),
    #[error("unsupported security level: {0} (expected 128 or 256)")]
    UnsupportedSecurityLevel(usize),
    #[error("invalid output length: {0} bits (must be a positive multiple of 8)")]
    InvalidOutputLength(usize),
}
