//! The traversal core: one pass, one visitor, an explicit context stack.

use alloc::vec::Vec;

use crate::{
    error::{ErrorKind, ScanError},
    event::Event,
    scanner::Scanner,
};

/// Container kind for one level of nesting. The stack of these is the only
/// traversal state besides the cursor; its length is the current depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Object,
    Array,
}

impl Kind {
    #[inline]
    fn close_byte(self) -> u8 {
        match self {
            Kind::Object => b'}',
            Kind::Array => b']',
        }
    }
}

/// Scans `input` once, invoking `visitor` for every structural token in
/// document order: each scalar, each container open, each container close.
///
/// Events borrow `input` directly; see [`Event`] for the exact slicing
/// rules. The visitor's return value matters only on container-open events:
/// `true` descends, `false` skips the entire subtree, after which the next
/// event delivered is the container's following sibling. No close event is
/// delivered for a skipped container. The return value is ignored for
/// scalar and close events.
///
/// Nesting depth is bounded by one heap-allocated stack entry per level, so
/// deeply nested documents cannot exhaust the call stack.
///
/// # Errors
///
/// Returns a [`ScanError`] locating the first offending byte. Events
/// already delivered remain valid; no event is delivered for the token the
/// error is positioned in.
///
/// # Examples
///
/// ```
/// use jsonwalk::walk;
///
/// let mut depths = Vec::new();
/// walk(br#"{"a":1,"b":[2,3]}"#, |event| {
///     depths.push(event.depth);
///     true
/// })?;
/// assert_eq!(depths, [0, 1, 1, 2, 2, 1, 0]);
/// # Ok::<(), jsonwalk::ScanError>(())
/// ```
pub fn walk<'buf, F>(input: &'buf [u8], mut visitor: F) -> Result<(), ScanError>
where
    F: FnMut(Event<'buf>) -> bool,
{
    const NO_KEY: &[u8] = b"";

    let mut scanner = Scanner::new(input);
    let mut stack: Vec<Kind> = Vec::new();
    let mut key: &'buf [u8] = NO_KEY;

    'value: loop {
        // A value is expected here; `key` was settled by whoever sent us.
        scanner.skip_whitespace();
        let depth = stack.len();
        let Some(byte) = scanner.peek() else {
            return Err(scanner.error_here(ErrorKind::UnexpectedEndOfInput));
        };

        match byte {
            b'{' | b'[' => {
                let kind = if byte == b'{' { Kind::Object } else { Kind::Array };
                let value = scanner.take_byte();
                if visitor(Event { depth, key, value }) {
                    stack.push(kind);
                    key = NO_KEY;
                    // First element boundary: the one place a close may
                    // directly follow the open.
                    scanner.skip_whitespace();
                    match scanner.peek() {
                        Some(b) if b == kind.close_byte() => {
                            let value = scanner.take_byte();
                            stack.pop();
                            visitor(Event { depth, key: NO_KEY, value });
                        }
                        Some(_) => {
                            if kind == Kind::Object {
                                key = scanner.scan_member_key()?;
                            }
                            continue 'value;
                        }
                        None => return Err(scanner.error_here(ErrorKind::UnexpectedEndOfInput)),
                    }
                } else {
                    scanner.skip_balanced()?;
                }
            }
            _ => {
                let value = scanner.scan_scalar()?;
                visitor(Event { depth, key, value });
            }
        }

        // A value has just completed (scanned, skipped, or closed); consume
        // separators and closes until the next value position or the end.
        loop {
            let Some(kind) = stack.last().copied() else {
                scanner.skip_whitespace();
                return match scanner.peek() {
                    None => Ok(()),
                    Some(_) => Err(scanner.error_here(ErrorKind::TrailingData)),
                };
            };
            scanner.skip_whitespace();
            match scanner.peek() {
                Some(b',') => {
                    scanner.bump();
                    scanner.skip_whitespace();
                    key = match kind {
                        Kind::Object => scanner.scan_member_key()?,
                        Kind::Array => NO_KEY,
                    };
                    continue 'value;
                }
                Some(b) if b == kind.close_byte() => {
                    let value = scanner.take_byte();
                    stack.pop();
                    visitor(Event { depth: stack.len(), key: NO_KEY, value });
                }
                Some(other) => {
                    return Err(scanner.error_here(ErrorKind::UnexpectedCharacter(other)));
                }
                None => return Err(scanner.error_here(ErrorKind::UnexpectedEndOfInput)),
            }
        }
    }
}
