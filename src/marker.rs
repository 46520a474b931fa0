//! PackStream marker bytes.
//!
//! Every encoded value starts with a marker byte identifying its type and, for
//! sized types, the width of the length that follows.
//!
//! # Marker Table
//!
//! | Meaning | Marker(s) |
//! |---------|-----------|
//! | Null | `0xC0` |
//! | Float64 | `0xC1` |
//! | False / True | `0xC2` / `0xC3` |
//! | Int8 / Int16 / Int32 / Int64 | `0xC8` / `0xC9` / `0xCA` / `0xCB` |
//! | Tiny int | the value itself, `-16..=127` |
//! | Bytes (8/16/32-bit length) | `0xCC` / `0xCD` / `0xCE` |
//! | Tiny string (length 0-15) | `0x80..=0x8F` |
//! | String (8/16/32-bit length) | `0xD0` / `0xD1` / `0xD2` |
//! | Tiny list (length 0-15) | `0x90..=0x9F` |
//! | List (8/16/32-bit length) | `0xD4` / `0xD5` / `0xD6` |
//! | Tiny dictionary (length 0-15) | `0xA0..=0xAF` |
//! | Dictionary (8/16/32-bit length) | `0xD8` / `0xD9` / `0xDA` |
//! | Structure (0-15 fields) | `0xB0..=0xBF`, then a one-byte tag |
//!
//! # Size Tiers
//!
//! Strings, lists and dictionaries share four tiers chosen by length:
//!
//! - `len < 16`: the length lives in the low nibble of the marker
//! - `len < 2^8`: marker + `u8` length
//! - `len < 2^16`: marker + big-endian `u16` length
//! - `len < 2^32`: marker + big-endian `u32` length
//!
//! Byte arrays have no tiny tier: even an empty array is written as `CC 00`.
//! String lengths count UTF-8 bytes, not characters.

pub const NULL: u8 = 0xC0;
pub const FLOAT_64: u8 = 0xC1;
pub const FALSE: u8 = 0xC2;
pub const TRUE: u8 = 0xC3;

pub const INT_8: u8 = 0xC8;
pub const INT_16: u8 = 0xC9;
pub const INT_32: u8 = 0xCA;
pub const INT_64: u8 = 0xCB;

/// Smallest integer written as a single raw byte.
pub const TINY_INT_MIN: i64 = -16;
/// Largest integer written as a single raw byte.
pub const TINY_INT_MAX: i64 = 127;

pub const BYTES_8: u8 = 0xCC;
pub const BYTES_16: u8 = 0xCD;
pub const BYTES_32: u8 = 0xCE;

pub const STRING_8: u8 = 0xD0;
pub const STRING_16: u8 = 0xD1;
pub const STRING_32: u8 = 0xD2;

pub const LIST_8: u8 = 0xD4;
pub const LIST_16: u8 = 0xD5;
pub const LIST_32: u8 = 0xD6;

pub const DICTIONARY_8: u8 = 0xD8;
pub const DICTIONARY_16: u8 = 0xD9;
pub const DICTIONARY_32: u8 = 0xDA;

/// Markers for strings of 0 to 15 bytes.
pub const TINY_STRING: [u8; 16] = [
    0x80, 0x81, 0x82, 0x83, 0x84, 0x85, 0x86, 0x87, 0x88, 0x89, 0x8A, 0x8B, 0x8C, 0x8D, 0x8E, 0x8F,
];

/// Markers for lists of 0 to 15 elements.
pub const TINY_LIST: [u8; 16] = [
    0x90, 0x91, 0x92, 0x93, 0x94, 0x95, 0x96, 0x97, 0x98, 0x99, 0x9A, 0x9B, 0x9C, 0x9D, 0x9E, 0x9F,
];

/// Markers for dictionaries of 0 to 15 entries.
pub const TINY_DICTIONARY: [u8; 16] = [
    0xA0, 0xA1, 0xA2, 0xA3, 0xA4, 0xA5, 0xA6, 0xA7, 0xA8, 0xA9, 0xAA, 0xAB, 0xAC, 0xAD, 0xAE, 0xAF,
];

/// Markers for structures of 0 to 15 fields.
pub const TINY_STRUCT: [u8; 16] = [
    0xB0, 0xB1, 0xB2, 0xB3, 0xB4, 0xB5, 0xB6, 0xB7, 0xB8, 0xB9, 0xBA, 0xBB, 0xBC, 0xBD, 0xBE, 0xBF,
];

/// Largest field count a structure header can carry.
pub const MAX_STRUCT_FIELDS: usize = TINY_STRUCT.len() - 1;

/// Largest length any sized value can carry.
pub const MAX_LENGTH: u64 = u32::MAX as u64;

/// The marker bytes of one size-tiered type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerFamily {
    /// Name used in error messages.
    pub kind: &'static str,
    /// Embedded-length markers, absent for byte arrays.
    pub tiny: Option<&'static [u8; 16]>,
    pub sized_8: u8,
    pub sized_16: u8,
    pub sized_32: u8,
}

pub const STRING: MarkerFamily = MarkerFamily {
    kind: "string",
    tiny: Some(&TINY_STRING),
    sized_8: STRING_8,
    sized_16: STRING_16,
    sized_32: STRING_32,
};

pub const BYTES: MarkerFamily = MarkerFamily {
    kind: "bytes",
    tiny: None,
    sized_8: BYTES_8,
    sized_16: BYTES_16,
    sized_32: BYTES_32,
};

pub const LIST: MarkerFamily = MarkerFamily {
    kind: "list",
    tiny: Some(&TINY_LIST),
    sized_8: LIST_8,
    sized_16: LIST_16,
    sized_32: LIST_32,
};

pub const DICTIONARY: MarkerFamily = MarkerFamily {
    kind: "dictionary",
    tiny: Some(&TINY_DICTIONARY),
    sized_8: DICTIONARY_8,
    sized_16: DICTIONARY_16,
    sized_32: DICTIONARY_32,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tiny_tables_are_contiguous() {
        for (base, table) in [
            (0x80u8, &TINY_STRING),
            (0x90, &TINY_LIST),
            (0xA0, &TINY_DICTIONARY),
            (0xB0, &TINY_STRUCT),
        ] {
            for (len, marker) in table.iter().enumerate() {
                assert_eq!(*marker, base + len as u8);
            }
        }
    }

    #[test]
    fn test_tiny_ranges_do_not_overlap_fixed_markers() {
        let fixed = [NULL, FLOAT_64, FALSE, TRUE, INT_8, INT_16, INT_32, INT_64];
        for table in [&TINY_STRING, &TINY_LIST, &TINY_DICTIONARY, &TINY_STRUCT] {
            assert!(table.iter().all(|m| !fixed.contains(m)));
        }
    }

    #[test]
    fn test_struct_table_limits_field_count() {
        assert_eq!(MAX_STRUCT_FIELDS, 15);
    }
}
