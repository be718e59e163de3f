use thiserror::Error;

/// Failure raised while scanning a buffer.
///
/// The offset pinpoints the first offending byte (or the end of the buffer
/// for truncated input). Events delivered before the failure describe fully
/// scanned tokens and remain valid; no event is delivered for the offending
/// token itself.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at offset {offset}")]
pub struct ScanError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Byte offset into the input at which the problem was detected.
    pub offset: usize,
}

/// The ways a scan can fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The buffer ended inside a token, a container or an escape.
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    /// A byte that fits no grammar production at its position.
    #[error("unexpected character '{}'", .0.escape_ascii())]
    UnexpectedCharacter(u8),
    /// A backslash escape naming no escapable character, or a `\u` sequence
    /// missing one of its four hex digits.
    #[error("invalid escape character '{}'", .0.escape_ascii())]
    InvalidEscape(u8),
    /// A numeric token cut short where the grammar requires a digit.
    #[error("invalid number")]
    InvalidNumber,
    /// Non-whitespace bytes after the end of the top-level value.
    #[error("trailing characters")]
    TrailingData,
}
