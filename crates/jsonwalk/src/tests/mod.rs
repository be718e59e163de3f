mod walk_good;

use alloc::{string::String, vec::Vec};
use core::fmt::Write;

use bstr::BStr;

use crate::{ScanError, walk};

/// Collected form of one delivered event, with the slices copied out of the
/// buffer so tests can hold them past the walk.
pub(crate) type Collected = (usize, Vec<u8>, Vec<u8>);

pub(crate) fn ev(depth: usize, key: &[u8], value: &[u8]) -> Collected {
    (depth, key.to_vec(), value.to_vec())
}

pub(crate) fn collect(input: &[u8]) -> Result<Vec<Collected>, ScanError> {
    let mut events = Vec::new();
    walk(input, |event| {
        events.push(ev(event.depth, event.key, event.value));
        true
    })?;
    Ok(events)
}

/// One line per event, `depth key value`, lossily decoded. Keyless events
/// render a doubled space, which keeps the columns honest.
pub(crate) fn trace(input: &[u8]) -> Result<String, ScanError> {
    let mut out = String::new();
    walk(input, |event| {
        writeln!(
            out,
            "{} {} {}",
            event.depth,
            BStr::new(event.key),
            BStr::new(event.value)
        )
        .unwrap();
        true
    })?;
    Ok(out)
}
