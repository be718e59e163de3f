//! Separator advice for callers rebuilding output from walk events.

/// Reports whether a comma belongs before `next_value`, given the last byte
/// already written.
///
/// The decision needs no traversal state: nothing follows an opening
/// bracket directly, and nothing precedes a closing bracket, so the pair of
/// bytes settles it. `next_value` is the upcoming token as it will be
/// written (for a keyed member, its value; the comma goes before the key).
/// Callers consult this only once some output exists; after any pruning,
/// what was written is what counts, which is exactly what the last byte
/// reflects.
///
/// ```
/// use jsonwalk::should_add_comma;
///
/// assert!(!should_add_comma(b"5", b'{'));
/// assert!(!should_add_comma(b"}", b'2'));
/// assert!(should_add_comma(b"5", b'2'));
/// assert!(should_add_comma(b"{", b'"'));
/// ```
#[must_use]
pub fn should_add_comma(next_value: &[u8], last_written: u8) -> bool {
    if matches!(last_written, b'{' | b'[') {
        return false;
    }
    !matches!(next_value.first(), Some(b'}' | b']'))
}
