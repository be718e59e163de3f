//! Scrubs credential fields out of a captured request body without ever
//! decoding the payload.
//!
//! The input is the kind of body an API gateway writes to its audit log: it
//! mixes public fields with secrets that must never reach storage, and it
//! carries a primary key wider than 2^53. A parse-then-serialize scrub
//! would quietly turn `"user_id": 9007199254740993` into
//! `9007199254740992` on the way through an f64; walking the raw bytes and
//! copying the survivors cannot.
//!
//! Run with
//!
//! ```bash
//! cargo run -p jsonwalk --example strip_fields
//! ```

use jsonwalk::{should_add_comma, walk};

const BODY: &[u8] = br#"{
  "user_id": 9007199254740993,
  "name": "Dana",
  "password": "hunter2",
  "session": {
    "token": "eyJhbGciOiJIUzI1NiJ9.c2Vzc2lvbg.sig",
    "expires": 1735689600
  },
  "prefs": {"theme": "dark", "lang": "en"}
}"#;

// `password` is a scalar, `session` a whole subtree; returning `false`
// drops either without touching what follows.
const DENY: &[&[u8]] = &[b"password", b"session"];

fn main() {
    let mut scrubbed = Vec::new();
    walk(BODY, |event| {
        if DENY.contains(&event.bare_key()) {
            return false;
        }
        if let Some(&last) = scrubbed.last() {
            if should_add_comma(event.value, last) {
                scrubbed.push(b',');
            }
        }
        if !event.key.is_empty() {
            scrubbed.extend_from_slice(event.key);
            scrubbed.push(b':');
        }
        scrubbed.extend_from_slice(event.value);
        true
    })
    .expect("audit body is valid JSON");

    let scrubbed = String::from_utf8(scrubbed).expect("body was UTF-8");
    println!("scrubbed audit record: {scrubbed}");

    // Verify the rewrite stays stable; `cargo insta review` to approve.
    insta::assert_snapshot!(
        scrubbed,
        @r#"{"user_id":9007199254740993,"name":"Dana","prefs":{"theme":"dark","lang":"en"}}"#
    );
}
