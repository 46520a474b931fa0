//! Error types for PackStream encoding.
//!
//! Every error is fatal to the encode call that produced it. The first failure
//! anywhere in a nested value aborts the whole call and the partially written
//! buffer is dropped, never returned.
//!
//! ## Error Categories
//!
//! - **Unsupported types**: a value reached the serializer with a shape the
//!   format cannot express (for example a map with integer keys)
//! - **Length limits**: strings, byte arrays, lists and dictionaries are capped by
//!   the 32-bit length field
//! - **Field counts**: structures carry at most 15 fields
//! - **Integer range**: integers wider than 64 bits that do not fit `i64`
//!
//! ## Examples
//!
//! ```rust
//! use serde_packstream::{to_vec, Error};
//! use std::collections::HashMap;
//!
//! let mut by_id = HashMap::new();
//! by_id.insert(1, "one");
//!
//! let err = to_vec(&by_id).unwrap_err();
//! assert!(matches!(err, Error::UnsupportedType(_)));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur during PackStream encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The value has no representation in the format.
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// A string, byte array, list or dictionary is too long for a 32-bit length.
    #[error("Cannot encode {kind} of length {len}: maximum is 4294967295")]
    LengthExceeded { kind: &'static str, len: usize },

    /// A structure declares more fields than the header can express.
    #[error("Cannot encode structure 0x{tag:02X} with {count} fields: maximum is 15")]
    FieldCountExceeded { tag: u8, count: usize },

    /// An integer does not fit the signed 64-bit range of the format.
    #[error("Integer out of range: {0} does not fit in a signed 64-bit integer")]
    IntegerOutOfRange(String),

    /// IO error while writing encoded output
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an unsupported type error naming the offending type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_packstream::Error;
    ///
    /// let err = Error::unsupported_type("i32 map key");
    /// assert!(err.to_string().contains("i32 map key"));
    /// ```
    pub fn unsupported_type(name: &str) -> Self {
        Error::UnsupportedType(name.to_string())
    }

    /// Creates a length error for a sized value of the given kind.
    pub fn length_exceeded(kind: &'static str, len: usize) -> Self {
        Error::LengthExceeded { kind, len }
    }

    /// Creates a field count error for the structure with the given tag.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_packstream::Error;
    ///
    /// let err = Error::field_count_exceeded(0x4E, 16);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "Cannot encode structure 0x4E with 16 fields: maximum is 15"
    /// );
    /// ```
    pub fn field_count_exceeded(tag: u8, count: usize) -> Self {
        Error::FieldCountExceeded { tag, count }
    }

    /// Creates an integer range error for a value wider than `i64`.
    pub fn integer_out_of_range<T: fmt::Display>(value: T) -> Self {
        Error::IntegerOutOfRange(value.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
