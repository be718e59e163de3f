#![allow(missing_docs)]

/// An order record in exactly the shape that goes wrong under tree parsers:
/// the two ids overflow an f64 mantissa, so any parse-then-serialize pass
/// that decodes numbers corrupts them.
pub const ORDER: &[u8] = br#"{"order_id": 12345678901234, "number": 12, "item_id": 12345678905678, "counting": [1,2,3]}"#;
