//! # serde_packstream
//!
//! A PackStream encoder with Serde support.
//!
//! ## What is PackStream?
//!
//! PackStream is the binary value format carried by graph database client
//! protocols. Every value starts with a marker byte that names its type and,
//! for small values, its size; larger values follow the marker with a
//! big-endian length. Records such as nodes, relationships and dates travel
//! as tagged structures.
//!
//! ## Key Features
//!
//! - **Smallest encoding**: integers and container headers always use the
//!   narrowest tier that fits
//! - **Serde Compatible**: encode any `#[derive(Serialize)]` type
//! - **Typed structures**: graph, temporal and spatial records with their
//!   standard tags
//! - **Reproducible output**: dictionary entries are sorted by key unless
//!   insertion order is requested
//! - **No Unsafe Code**
//!
//! ## Quick Start
//!
//! ```rust
//! use serde::Serialize;
//! use serde_packstream::to_vec;
//!
//! #[derive(Serialize)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! let bytes = to_vec(&Point { x: 1, y: 2 }).unwrap();
//! assert_eq!(bytes, vec![0xA2, 0x81, b'x', 0x01, 0x81, b'y', 0x02]);
//! ```
//!
//! ### Dynamic Values
//!
//! ```rust
//! use serde_packstream::{encode, packstream, Value};
//!
//! let value = packstream!({ "name": "Alice", "tags": ["a", "b"] });
//! let bytes = encode(&value).unwrap();
//! assert_eq!(bytes[0], 0xA2);
//! ```
//!
//! ### Structures
//!
//! ```rust
//! use serde_packstream::{encode, Dictionary, Node};
//!
//! let node = Node::new(1, vec!["Person".to_string()], Dictionary::new());
//! let bytes = encode(&node).unwrap();
//! assert_eq!(&bytes[..2], &[0xB3, 0x4E]);
//! ```
//!
//! ## Two Ways In
//!
//! [`encode`] takes anything implementing [`Pack`]: [`Value`] trees, the
//! structure types and common Rust types. [`to_vec`] takes anything
//! implementing `Serialize` and maps the serde data model onto PackStream
//! (see [`ser`] for the table). Both produce identical bytes for the same data.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Encoding derived types
//! - **`graph_values.rs`** - Nodes, relationships and paths
//! - **`temporal_values.rs`** - Dates, times and durations from chrono
//!
//! Run any demo with: `cargo run --example <name>`

pub mod error;
pub mod macros;
pub mod map;
pub mod marker;
pub mod options;
pub mod packer;
pub mod ser;
pub mod structure;
pub mod value;

pub use error::{Error, Result};
pub use map::Dictionary;
pub use options::{KeyOrder, PackOptions};
pub use packer::{Pack, Packer};
pub use ser::{Serializer, ValueSerializer};
pub use structure::{
    Date, DateTime, DateTimeZoneId, Duration, GenericStructure, LocalDateTime, LocalTime, Node,
    Path, Point2D, Point3D, Relationship, Structure, StructureType, Time, UnboundRelationship,
};
pub use value::{List, Value};

use serde::Serialize;
use std::io;
use tracing::{debug, trace};

fn finish(result: Result<Vec<u8>>) -> Result<Vec<u8>> {
    match &result {
        Ok(bytes) => trace!(len = bytes.len(), "encoded packstream value"),
        Err(err) => debug!(error = %err, "packstream encoding failed"),
    }
    result
}

/// Encode any `T: Pack` with default options.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::{encode, Value};
///
/// assert_eq!(encode(&Value::Null).unwrap(), vec![0xC0]);
/// assert_eq!(encode(&-16i64).unwrap(), vec![0xF0]);
/// assert_eq!(encode("hi").unwrap(), vec![0x82, b'h', b'i']);
/// ```
///
/// # Errors
///
/// Returns an error if any part of the value cannot be encoded. Nothing is
/// returned for a partially encoded value.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Pack,
{
    encode_with_options(value, PackOptions::default())
}

/// Encode any `T: Pack` with custom options.
///
/// # Errors
///
/// Returns an error if any part of the value cannot be encoded.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn encode_with_options<T>(value: &T, options: PackOptions) -> Result<Vec<u8>>
where
    T: ?Sized + Pack,
{
    let mut packer = Packer::new(options);
    finish(value.pack(&mut packer).map(|()| packer.into_inner()))
}

/// Serialize any `T: Serialize` to PackStream bytes.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::to_vec;
///
/// assert_eq!(to_vec(&vec![1, 2, 3]).unwrap(), vec![0x93, 0x01, 0x02, 0x03]);
/// assert_eq!(to_vec(&Some(300)).unwrap(), vec![0xC9, 0x01, 0x2C]);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized, e.g. a map with
/// non-string keys or a `u64` above `i64::MAX`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    to_vec_with_options(value, PackOptions::default())
}

/// Serialize any `T: Serialize` to PackStream bytes with custom options.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_packstream::{to_vec_with_options, PackOptions};
///
/// #[derive(Serialize)]
/// struct Pair {
///     b: bool,
///     a: bool,
/// }
///
/// let bytes = to_vec_with_options(&Pair { b: true, a: false }, PackOptions::insertion_order())
///     .unwrap();
/// assert_eq!(bytes, vec![0xA2, 0x81, b'b', 0xC3, 0x81, b'a', 0xC2]);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_vec_with_options<T>(value: &T, options: PackOptions) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    let mut serializer = Serializer::new(options);
    finish(
        value
            .serialize(&mut serializer)
            .map(|()| serializer.into_inner()),
    )
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Structures come back as [`Structure::Generic`] with the same tag and
/// fields, which encode to the same bytes.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_packstream::{to_value, Value};
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let value = to_value(&Point { x: 1, y: 2 }).unwrap();
/// assert_eq!(
///     value.as_dictionary().and_then(|d| d.get("x")),
///     Some(&Value::Integer(1))
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(ValueSerializer)
}

/// Serialize any `T: Serialize` to a writer.
///
/// The value is fully encoded before anything is written, so a failed encode
/// leaves the writer untouched.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::to_writer;
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &true).unwrap();
/// assert_eq!(buffer, vec![0xC3]);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, PackOptions::default())
}

/// Serialize any `T: Serialize` to a writer with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: PackOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let bytes = to_vec_with_options(value, options)?;
    writer.write_all(&bytes)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use std::collections::HashMap;

    #[derive(Serialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
    }

    fn user() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
        }
    }

    #[test]
    fn test_to_vec_matches_encode_of_value() {
        let user = user();
        let value = to_value(&user).unwrap();
        assert_eq!(to_vec(&user).unwrap(), encode(&value).unwrap());
    }

    #[test]
    fn test_structure_paths_agree() {
        let node = Node::new(
            5,
            vec!["A".to_string()],
            [("k".to_string(), Value::from(1))].into_iter().collect(),
        );
        assert_eq!(to_vec(&node).unwrap(), encode(&node).unwrap());
        assert_eq!(
            encode(&to_value(&node).unwrap()).unwrap(),
            encode(&node).unwrap()
        );
    }

    #[test]
    fn test_to_value() {
        let value = to_value(&user()).unwrap();
        let dict = value.as_dictionary().unwrap();
        assert_eq!(dict.get("id"), Some(&Value::Integer(123)));
        assert_eq!(dict.get("active"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_hash_map_is_sorted() {
        let mut map = HashMap::new();
        for key in ["delta", "alpha", "charlie", "bravo"] {
            map.insert(key.to_string(), key.len());
        }
        let bytes = to_vec(&map).unwrap();
        let mut expected = vec![0xA4];
        for key in ["alpha", "bravo", "charlie", "delta"] {
            expected.push(0x80 + key.len() as u8);
            expected.extend_from_slice(key.as_bytes());
            expected.push(key.len() as u8);
        }
        assert_eq!(bytes, expected);
        assert_eq!(encode(&map).unwrap(), expected);
    }

    #[test]
    fn test_to_writer_leaves_writer_untouched_on_error() {
        let mut buffer = Vec::new();
        let err = to_writer(&mut buffer, &u64::MAX).unwrap_err();
        assert!(matches!(err, Error::IntegerOutOfRange(_)));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_encode_with_options() {
        let mut dict = Dictionary::new();
        dict.insert("z".to_string(), Value::Null);
        dict.insert("a".to_string(), Value::Null);

        let sorted = encode(&dict).unwrap();
        let inserted = encode_with_options(&dict, PackOptions::insertion_order()).unwrap();
        assert_eq!(sorted, vec![0xA2, 0x81, b'a', 0xC0, 0x81, b'z', 0xC0]);
        assert_eq!(inserted, vec![0xA2, 0x81, b'z', 0xC0, 0x81, b'a', 0xC0]);
    }
}
