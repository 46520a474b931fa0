//! Configuration options for PackStream encoding.
//!
//! This module provides types to customize the encoder:
//!
//! - [`PackOptions`]: Main configuration struct
//! - [`KeyOrder`]: Order in which dictionary entries are emitted
//!
//! The wire format itself has no knobs; options only affect choices the format
//! leaves open, such as dictionary entry order.
//!
//! ## Examples
//!
//! ```rust
//! use serde_packstream::{to_vec_with_options, KeyOrder, PackOptions};
//! use std::collections::BTreeMap;
//!
//! let mut data = BTreeMap::new();
//! data.insert("b", true);
//! data.insert("a", false);
//!
//! // Keep the order the entries were produced in
//! let options = PackOptions::new().with_key_order(KeyOrder::Insertion);
//! let bytes = to_vec_with_options(&data, options).unwrap();
//! assert_eq!(bytes[0], 0xA2);
//! ```

/// Order in which dictionary entries are written.
///
/// The format does not assign meaning to entry order, so either choice decodes
/// to the same dictionary.
///
/// - **Sorted**: Default, entries in ascending byte order of their keys. Two
///   dictionaries with the same entries always encode to the same bytes.
/// - **Insertion**: Entries in the order they were inserted into the
///   [`Dictionary`](crate::Dictionary).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KeyOrder {
    #[default]
    Sorted,
    Insertion,
}

/// Configuration options for PackStream encoding.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::{KeyOrder, PackOptions};
///
/// // Default canonical options
/// let options = PackOptions::new();
/// assert_eq!(options.key_order, KeyOrder::Sorted);
///
/// // Custom configuration
/// let options = PackOptions::new()
///     .with_key_order(KeyOrder::Insertion)
///     .with_initial_capacity(4096);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PackOptions {
    pub key_order: KeyOrder,
    pub initial_capacity: usize,
}

impl Default for PackOptions {
    fn default() -> Self {
        PackOptions {
            key_order: KeyOrder::default(),
            initial_capacity: 256,
        }
    }
}

impl PackOptions {
    /// Creates default options (sorted dictionary keys, 256-byte initial buffer).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_packstream::PackOptions;
    ///
    /// let options = PackOptions::new();
    /// assert_eq!(options.initial_capacity, 256);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that keep dictionary entries in insertion order.
    #[must_use]
    pub fn insertion_order() -> Self {
        PackOptions {
            key_order: KeyOrder::Insertion,
            ..Default::default()
        }
    }

    /// Sets the order in which dictionary entries are written.
    #[must_use]
    pub fn with_key_order(mut self, key_order: KeyOrder) -> Self {
        self.key_order = key_order;
        self
    }

    /// Sets the number of bytes reserved for the output buffer up front.
    ///
    /// The buffer still grows as needed; this only avoids reallocations for
    /// callers who know their typical payload size.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
