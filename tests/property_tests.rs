//! Property-based tests of the encoding invariants.
//!
//! A small reader for integers and headers lives here so the encoder can be
//! checked against the format rules without a full decoder.

use proptest::prelude::*;
use serde_packstream::{encode, to_vec, Dictionary, Value};

/// Reads one encoded integer, returning the value and the bytes consumed.
fn read_int(bytes: &[u8]) -> Option<(i64, usize)> {
    let marker = *bytes.first()?;
    match marker {
        0x00..=0x7F | 0xF0..=0xFF => Some((i64::from(marker as i8), 1)),
        0xC8 => Some((i64::from(*bytes.get(1)? as i8), 2)),
        0xC9 => {
            let raw: [u8; 2] = bytes.get(1..3)?.try_into().ok()?;
            Some((i64::from(i16::from_be_bytes(raw)), 3))
        }
        0xCA => {
            let raw: [u8; 4] = bytes.get(1..5)?.try_into().ok()?;
            Some((i64::from(i32::from_be_bytes(raw)), 5))
        }
        0xCB => {
            let raw: [u8; 8] = bytes.get(1..9)?.try_into().ok()?;
            Some((i64::from_be_bytes(raw), 9))
        }
        _ => None,
    }
}

fn minimal_int_len(n: i64) -> usize {
    if (-16..=127).contains(&n) {
        1
    } else if i8::try_from(n).is_ok() {
        2
    } else if i16::try_from(n).is_ok() {
        3
    } else if i32::try_from(n).is_ok() {
        5
    } else {
        9
    }
}

/// Length of a sized header for the given payload length.
fn header_len(len: usize) -> usize {
    match len {
        0..=15 => 1,
        16..=255 => 2,
        256..=65_535 => 3,
        _ => 5,
    }
}

proptest! {
    #[test]
    fn prop_integer_reads_back(n in any::<i64>()) {
        let bytes = encode(&n).unwrap();
        prop_assert_eq!(read_int(&bytes), Some((n, bytes.len())));
    }

    #[test]
    fn prop_integer_uses_smallest_tier(n in any::<i64>()) {
        prop_assert_eq!(encode(&n).unwrap().len(), minimal_int_len(n));
    }

    #[test]
    fn prop_narrow_types_match_i64(n in any::<i16>()) {
        prop_assert_eq!(encode(&n).unwrap(), encode(&i64::from(n)).unwrap());
        prop_assert_eq!(to_vec(&n).unwrap(), encode(&i64::from(n)).unwrap());
    }

    #[test]
    fn prop_float_is_nine_bytes(f in any::<f64>()) {
        let bytes = encode(&f).unwrap();
        prop_assert_eq!(bytes.len(), 9);
        prop_assert_eq!(bytes[0], 0xC1);
        prop_assert_eq!(&bytes[1..], &f.to_be_bytes()[..]);
    }

    #[test]
    fn prop_string_length(s in ".{0,300}") {
        let bytes = encode(s.as_str()).unwrap();
        prop_assert_eq!(bytes.len(), header_len(s.len()) + s.len());
        prop_assert_eq!(&bytes[header_len(s.len())..], s.as_bytes());
    }

    #[test]
    fn prop_list_of_small_ints(v in prop::collection::vec(-16i64..=127, 0..300)) {
        let bytes = encode(&v).unwrap();
        prop_assert_eq!(bytes.len(), header_len(v.len()) + v.len());
    }

    #[test]
    fn prop_dictionary_order_independent(
        entries in prop::collection::btree_map("[a-z]{1,8}", any::<i64>(), 0..40)
    ) {
        let forward: Dictionary = entries
            .iter()
            .map(|(k, v)| (k.clone(), Value::Integer(*v)))
            .collect();
        let backward: Dictionary = entries
            .iter()
            .rev()
            .map(|(k, v)| (k.clone(), Value::Integer(*v)))
            .collect();

        let a = encode(&forward).unwrap();
        prop_assert_eq!(&a, &encode(&backward).unwrap());
        prop_assert_eq!(&a, &to_vec(&entries).unwrap());
    }

    #[test]
    fn prop_serde_and_pack_agree(v in prop::collection::vec(proptest::option::of(any::<i32>()), 0..40)) {
        prop_assert_eq!(to_vec(&v).unwrap(), encode(&v).unwrap());
    }
}
