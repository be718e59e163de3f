//! Compact reconstruction of a document from its own walk events.

use alloc::vec::Vec;

use crate::{comma::should_add_comma, error::ScanError, walker::walk};

/// Rebuilds `input` as compact JSON, all insignificant whitespace removed,
/// in a single pass and without decoding any token.
///
/// Already-compact input comes back byte-for-byte identical; in particular
/// numbers keep their exact source digits and strings their escapes.
///
/// # Errors
///
/// Propagates the walk's [`ScanError`] for malformed input; partial output
/// is discarded.
///
/// ```
/// use jsonwalk::reconstruct;
///
/// let out = reconstruct(b" { \"a\" : 1 ,\n \"b\" : [ 2 , 3 ] } ")?;
/// assert_eq!(out, br#"{"a":1,"b":[2,3]}"#);
/// # Ok::<(), jsonwalk::ScanError>(())
/// ```
pub fn reconstruct(input: &[u8]) -> Result<Vec<u8>, ScanError> {
    let mut out = Vec::with_capacity(input.len());
    walk(input, |event| {
        if let Some(&last) = out.last() {
            if should_add_comma(event.value, last) {
                out.push(b',');
            }
        }
        if !event.key.is_empty() {
            out.extend_from_slice(event.key);
            out.push(b':');
        }
        out.extend_from_slice(event.value);
        true
    })?;
    Ok(out)
}
