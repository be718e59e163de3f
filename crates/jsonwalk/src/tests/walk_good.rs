use alloc::{vec, vec::Vec};
use core::time::Duration;

use rstest::rstest;

use super::{collect, ev, trace};
use crate::walk;

#[test]
fn events_for_members_and_elements() {
    let events = collect(br#"{"a":1,"b":[2,3]}"#).unwrap();
    assert_eq!(
        events,
        vec![
            ev(0, b"", b"{"),
            ev(1, b"\"a\"", b"1"),
            ev(1, b"\"b\"", b"["),
            ev(2, b"", b"2"),
            ev(2, b"", b"3"),
            ev(1, b"", b"]"),
            ev(0, b"", b"}"),
        ]
    );
}

#[test]
fn top_level_scalars_emit_one_event() {
    for doc in [&b"42"[..], b"-0.5e2", b"\"hi\"", b"true", b"false", b"null"] {
        assert_eq!(collect(doc).unwrap(), vec![ev(0, b"", doc)], "doc {doc:?}");
    }
}

#[test]
fn whitespace_between_tokens_is_invisible() {
    let airy = b" {\t\"a\" :\n1 ,\r\"b\" : [ 2 , 3 ] } ";
    assert_eq!(trace(airy).unwrap(), trace(br#"{"a":1,"b":[2,3]}"#).unwrap());
}

#[test]
fn empty_containers_close_immediately() {
    assert_eq!(collect(b"{}").unwrap(), vec![ev(0, b"", b"{"), ev(0, b"", b"}")]);
    assert_eq!(collect(b"[]").unwrap(), vec![ev(0, b"", b"["), ev(0, b"", b"]")]);
    assert_eq!(
        collect(br#"{"a":{}}"#).unwrap(),
        vec![
            ev(0, b"", b"{"),
            ev(1, b"\"a\"", b"{"),
            ev(1, b"", b"}"),
            ev(0, b"", b"}"),
        ]
    );
    assert_eq!(
        collect(b"[[]]").unwrap(),
        vec![
            ev(0, b"", b"["),
            ev(1, b"", b"["),
            ev(1, b"", b"]"),
            ev(0, b"", b"]"),
        ]
    );
}

#[test]
fn array_elements_carry_no_key() {
    let events = collect(br#"{"rows":[{"id":1},{"id":2}]}"#).unwrap();
    assert_eq!(
        events,
        vec![
            ev(0, b"", b"{"),
            ev(1, b"\"rows\"", b"["),
            ev(2, b"", b"{"),
            ev(3, b"\"id\"", b"1"),
            ev(2, b"", b"}"),
            ev(2, b"", b"{"),
            ev(3, b"\"id\"", b"2"),
            ev(2, b"", b"}"),
            ev(1, b"", b"]"),
            ev(0, b"", b"}"),
        ]
    );
}

#[test]
fn numbers_keep_their_exact_source_digits() {
    let doc = b"[9007199254740993, -0.0, 1e308, 5E-324, 12345678901234567890123456789]";
    let events = collect(doc).unwrap();
    let values: Vec<_> = events[1..events.len() - 1]
        .iter()
        .map(|(_, _, value)| value.clone())
        .collect();
    assert_eq!(
        values,
        vec![
            b"9007199254740993".to_vec(),
            b"-0.0".to_vec(),
            b"1e308".to_vec(),
            b"5E-324".to_vec(),
            b"12345678901234567890123456789".to_vec(),
        ]
    );
}

#[test]
fn strings_pass_through_with_quotes_and_escapes() {
    let events = collect(r#"{"s":"a\n\"b\"é\\"}"#.as_bytes()).unwrap();
    assert_eq!(events[1], ev(1, b"\"s\"", r#""a\n\"b\"é\\""#.as_bytes()));
}

#[test]
fn raw_utf8_and_even_invalid_bytes_pass_through() {
    // One real UTF-8 sequence and one stray continuation byte; neither is
    // inspected on the way through.
    let doc = b"[\"caf\xc3\xa9\", \"\xff\"]";
    let events = collect(doc).unwrap();
    assert_eq!(events[1].2, b"\"caf\xc3\xa9\"".to_vec());
    assert_eq!(events[2].2, b"\"\xff\"".to_vec());
}

#[test]
fn event_slices_alias_the_input_buffer() {
    let input: &[u8] = br#"{"a":[1,"x"],"b":null}"#;
    let range = input.as_ptr_range();
    walk(input, |event| {
        assert!(range.contains(&event.value.as_ptr()));
        if !event.key.is_empty() {
            assert!(range.contains(&event.key.as_ptr()));
        }
        true
    })
    .unwrap();
}

#[test]
fn depths_count_open_containers() {
    let mut open_depths: Vec<usize> = Vec::new();
    walk(br#"{"a":[{"b":[]}],"c":0}"#, |event| {
        if event.is_close() {
            assert_eq!(open_depths.pop(), Some(event.depth));
        } else {
            assert_eq!(event.depth, open_depths.len());
            if event.is_open() {
                open_depths.push(event.depth);
            }
        }
        true
    })
    .unwrap();
    assert!(open_depths.is_empty());
}

#[test]
fn trace_renders_depth_key_value_lines() {
    let rendered = trace(br#"{"a":1,"b":[2,3]}"#).unwrap();
    let expected = "\
0  {
1 \"a\" 1
1 \"b\" [
2  2
2  3
1  ]
0  }
";
    assert_eq!(rendered, expected);
}

// Depth is bounded by the heap, not the call stack; this blows up a
// recursive-descent implementation long before 65k levels.
#[rstest]
#[timeout(Duration::from_secs(10))]
fn deep_nesting_does_not_recurse() {
    const LEVELS: usize = 65_536;
    let mut doc = vec![b'['; LEVELS];
    doc.extend(core::iter::repeat_n(b']', LEVELS));

    let mut count = 0usize;
    walk(&doc, |event| {
        assert!(event.depth < LEVELS);
        count += 1;
        true
    })
    .unwrap();
    assert_eq!(count, LEVELS * 2);
}
