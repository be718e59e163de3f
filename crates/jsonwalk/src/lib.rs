//! Scan, prune and rewrite JSON without building a document tree.
//!
//! [`walk`] makes a single pass over a byte buffer of JSON text and hands
//! every structural token, container boundaries and scalar values alike, to
//! a visitor closure as a zero-copy [`Event`]. The visitor returns `true` to
//! keep going, or `false` on a container-open event to skip that entire
//! subtree. Nothing is decoded along the way: strings keep their quotes and
//! escapes, numbers keep their exact source digits, so a 64-bit integer
//! survives a rewrite untouched.
//!
//! Output construction stays on the caller's side. [`should_add_comma`]
//! answers the only bookkeeping question (does a separator go before this
//! token?) from the last written byte alone, and [`reconstruct`] bundles the
//! common case of rebuilding a compact document.
//!
//! ```rust
//! use jsonwalk::{should_add_comma, walk};
//!
//! // Drop the "debug" member, keep everything else byte-for-byte.
//! let doc = br#"{"id":9007199254740993,"debug":{"trace":[1,2]},"ok":true}"#;
//! let mut out = Vec::new();
//! walk(doc, |event| {
//!     if event.bare_key() == b"debug" {
//!         return false;
//!     }
//!     if let Some(&last) = out.last() {
//!         if should_add_comma(event.value, last) {
//!             out.push(b',');
//!         }
//!     }
//!     if !event.key.is_empty() {
//!         out.extend_from_slice(event.key);
//!         out.push(b':');
//!     }
//!     out.extend_from_slice(event.value);
//!     true
//! })?;
//! assert_eq!(out, br#"{"id":9007199254740993,"ok":true}"#);
//! # Ok::<(), jsonwalk::ScanError>(())
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod comma;
mod error;
mod event;
mod rebuild;
mod scanner;
mod walker;

#[cfg(test)]
mod tests;

pub use comma::should_add_comma;
pub use error::{ErrorKind, ScanError};
pub use event::Event;
pub use rebuild::reconstruct;
pub use walker::walk;
