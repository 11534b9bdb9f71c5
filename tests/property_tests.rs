//! Property-based tests for the write-then-read guarantee and the container rules
//! that must hold for any element values.

use chrono::{DateTime, NaiveDateTime, Utc};
use num_bigint::BigInt;
use proptest::prelude::*;
use rawlit::{from_literal, parse_mapping, parse_sequence, to_literal, Error, FromLiteral, Parser, ToLiteral};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;
use std::ops::{Range, RangeInclusive};

fn roundtrip<T: ToLiteral + FromLiteral + PartialEq + Debug>(value: &T) -> bool {
    match to_literal(value) {
        Ok(literal) => match from_literal::<T>(&literal) {
            Ok(parsed) => *value == parsed,
            Err(e) => {
                eprintln!("Parse failed: {}", e);
                eprintln!("Literal was: {}", literal);
                false
            }
        },
        Err(e) => {
            eprintln!("Write failed: {}", e);
            false
        }
    }
}

/// Text built from pieces that are structural outside quotes.
fn tricky_text() -> impl Strategy<Value = String> {
    let piece = prop_oneof![
        Just("...".to_string()),
        Just("..<".to_string()),
        Just(":".to_string()),
        Just(",".to_string()),
        Just("[".to_string()),
        Just("]".to_string()),
        Just(" ".to_string()),
        "[^']{1,3}",
    ];
    prop::collection::vec(piece, 0..6).prop_map(|pieces| pieces.concat())
}

fn timestamp() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..4_000_000_000, 0u32..1_000_000_000)
        .prop_map(|(secs, nanos)| DateTime::from_timestamp(secs, nanos).unwrap_or_default())
}

fn int(token: &str) -> rawlit::Result<i32> {
    Parser::default().scalar(token)
}

proptest! {
    #[test]
    fn prop_vec_i32(v in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_nested_vec_i64(v in prop::collection::vec(prop::collection::vec(any::<i64>(), 0..5), 0..5)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_f64(v in prop::collection::vec(prop::num::f64::NORMAL | prop::num::f64::INFINITE, 0..10)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_vec_text(v in prop::collection::vec("[^']{0,12}", 0..8)) {
        prop_assert!(roundtrip(&v));
    }

    #[test]
    fn prop_set_u8(s in prop::collection::btree_set(any::<u8>(), 0..20)) {
        let s: BTreeSet<u8> = s;
        prop_assert!(roundtrip(&s));
    }

    #[test]
    fn prop_map_i32_text(m in prop::collection::btree_map(any::<i32>(), "[^']{0,8}", 0..10)) {
        let m: BTreeMap<i32, String> = m;
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_map_text_keys(m in prop::collection::btree_map(tricky_text(), any::<i32>(), 0..8)) {
        let m: BTreeMap<String, i32> = m;
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_text_range_bounds(a in tricky_text(), b in tricky_text()) {
        let closed: RangeInclusive<String> = a.clone().min(b.clone())..=a.clone().max(b.clone());
        prop_assert!(roundtrip(&closed));

        let half_open: Range<String> = a.clone().min(b.clone())..a.max(b);
        prop_assert!(roundtrip(&half_open));
    }

    #[test]
    fn prop_map_of_text_ranges(m in prop::collection::btree_map(
        tricky_text(),
        (tricky_text(), tricky_text()).prop_map(|(a, b)| a.clone().min(b.clone())..=a.max(b)),
        0..5,
    )) {
        let m: BTreeMap<String, RangeInclusive<String>> = m;
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_timestamp_keys(m in prop::collection::btree_map(timestamp(), any::<u8>(), 0..6)) {
        let naive: BTreeMap<NaiveDateTime, u8> =
            m.iter().map(|(stamp, v)| (stamp.naive_utc(), *v)).collect();
        prop_assert!(roundtrip(&naive));
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_bigint_keys(m in prop::collection::btree_map(any::<i128>().prop_map(BigInt::from), any::<bool>(), 0..6)) {
        let m: BTreeMap<BigInt, bool> = m;
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_nested_map(m in prop::collection::btree_map(
        any::<i16>(),
        prop::collection::btree_map(any::<i16>(), any::<bool>(), 0..4),
        0..4,
    )) {
        prop_assert!(roundtrip(&m));
    }

    #[test]
    fn prop_closed_range(a in any::<i64>(), b in any::<i64>()) {
        let range: RangeInclusive<i64> = a.min(b)..=a.max(b);
        prop_assert!(roundtrip(&range));
    }

    #[test]
    fn prop_half_open_range(a in -1.0e9f64..1.0e9, b in -1.0e9f64..1.0e9) {
        let range: Range<f64> = a.min(b)..a.max(b);
        prop_assert!(roundtrip(&range));
    }

    #[test]
    fn prop_sequence_order_is_preserved(v in prop::collection::vec(any::<i32>(), 1..20)) {
        let literal = format!(
            "[{}]",
            v.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(",")
        );
        prop_assert_eq!(parse_sequence(&literal, int).unwrap(), v);
    }

    #[test]
    fn prop_repeated_key_is_rejected(keys in prop::collection::vec(any::<i32>(), 1..10), pick in any::<prop::sample::Index>()) {
        let repeated = keys[pick.index(keys.len())];
        let mut entries: Vec<String> = keys.iter().map(|k| format!("{}: 0", k)).collect();
        entries.push(format!("{}: 1", repeated));
        let literal = format!("[{}]", entries.join(", "));

        let err = parse_mapping(&literal, int, int).unwrap_err();
        prop_assert!(matches!(err, Error::DuplicateKey { .. }), "expected DuplicateKey error");
    }

    #[test]
    fn prop_inverted_range_is_rejected(a in any::<i32>(), b in any::<i32>()) {
        prop_assume!(a != b);
        let literal = format!("{}...{}", a.max(b), a.min(b));
        prop_assert!(matches!(
            from_literal::<RangeInclusive<i32>>(&literal),
            Err(Error::InvertedRange { .. })
        ), "expected InvertedRange error");
    }

    #[test]
    fn prop_arbitrary_input_never_panics(s in "\\PC{0,40}") {
        let _ = from_literal::<Vec<Vec<i32>>>(&s);
        let _ = from_literal::<BTreeMap<String, Vec<String>>>(&s);
        let _ = from_literal::<RangeInclusive<f64>>(&s);
    }
}
