//! The flat traversal event handed to visitors.

use core::fmt;

use bstr::BStr;

/// One structural token of the document, in document order.
///
/// `value` is always a sub-slice of the input buffer: for scalars it is the
/// complete literal exactly as authored (strings keep their quotes and
/// escapes, numbers keep their exact digits), for container boundaries it is
/// the single byte `{`, `}`, `[` or `]`.
///
/// `key` is the member key, quotes included, when the value sits in an
/// object; it is empty for array elements, for the top-level value and for
/// close events. The quotes make the empty slice unambiguous: a member with
/// an empty key string still carries the two-byte key `""`.
///
/// `depth` is the nesting level of the value itself. A container's open and
/// close events share one depth, and its children are one level deeper.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Event<'buf> {
    /// Nesting level, `0` for the top-level value.
    pub depth: usize,
    /// Raw key bytes including quotes; empty when there is no key.
    pub key: &'buf [u8],
    /// Raw value bytes.
    pub value: &'buf [u8],
}

impl<'buf> Event<'buf> {
    /// Returns `true` for an object- or array-open event.
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.value, [b'{'] | [b'['])
    }

    /// Returns `true` for an object- or array-close event.
    #[must_use]
    pub fn is_close(&self) -> bool {
        matches!(self.value, [b'}'] | [b']'])
    }

    /// The key with its surrounding quotes removed, still unescaped; empty
    /// when the event has no key.
    ///
    /// ```
    /// use jsonwalk::walk;
    ///
    /// let mut keys = Vec::new();
    /// walk(br#"{"a":{"b":1}}"#, |event| {
    ///     if !event.key.is_empty() {
    ///         keys.push(event.bare_key());
    ///     }
    ///     true
    /// })?;
    /// assert_eq!(keys, [b"a".as_slice(), b"b".as_slice()]);
    /// # Ok::<(), jsonwalk::ScanError>(())
    /// ```
    #[must_use]
    pub fn bare_key(&self) -> &'buf [u8] {
        match self.key {
            [b'"', inner @ .., b'"'] => inner,
            other => other,
        }
    }
}

// Manual Debug so keys and values read as text rather than byte lists in
// assertion output, with invalid UTF-8 rendered lossily.
impl fmt::Debug for Event<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("depth", &self.depth)
            .field("key", &BStr::new(self.key))
            .field("value", &BStr::new(self.value))
            .finish()
    }
}

// Custom serialization so an event renders as a readable map, omitting the
// key when there is none.
#[cfg(any(test, feature = "serde"))]
mod serde_impls {
    use bstr::ByteSlice;
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::Event;

    impl Serialize for Event<'_> {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            let fields = if self.key.is_empty() { 2 } else { 3 };
            let mut state = serializer.serialize_struct("Event", fields)?;
            state.serialize_field("depth", &self.depth)?;
            if !self.key.is_empty() {
                state.serialize_field("key", &self.key.to_str_lossy())?;
            }
            state.serialize_field("value", &self.value.to_str_lossy())?;
            state.end()
        }
    }
}
