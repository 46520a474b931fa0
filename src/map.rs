//! Dictionary type for PackStream maps.
//!
//! This module provides [`Dictionary`], a wrapper around [`IndexMap`] holding
//! string keys and [`Value`](crate::Value) entries.
//!
//! ## Entry Order
//!
//! The format gives no meaning to entry order. `Dictionary` remembers insertion
//! order so callers can opt into it with
//! [`KeyOrder::Insertion`](crate::KeyOrder::Insertion); by default entries are
//! written sorted by key so equal dictionaries always produce equal bytes.
//!
//! ## Examples
//!
//! ```rust
//! use serde_packstream::{Dictionary, Pack, Value};
//!
//! let mut map = Dictionary::new();
//! map.insert("name".to_string(), Value::from("Alice"));
//! map.insert("age".to_string(), Value::from(30));
//!
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("name").and_then(|v| v.as_str()), Some("Alice"));
//!
//! // "age" sorts before "name"
//! let bytes = map.to_packstream().unwrap();
//! assert_eq!(&bytes[..5], &[0xA2, 0x83, b'a', b'g', b'e']);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;

use crate::packer::{pack_entries, Pack, Packer};
use crate::Result;

/// A map of string keys to PackStream values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order.
/// Equality ignores order.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::{Dictionary, Value};
///
/// let mut map = Dictionary::new();
/// map.insert("first".to_string(), Value::from(1));
/// map.insert("second".to_string(), Value::from(2));
///
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dictionary(IndexMap<String, crate::Value>);

impl Dictionary {
    /// Creates an empty `Dictionary`.
    #[must_use]
    pub fn new() -> Self {
        Dictionary(IndexMap::new())
    }

    /// Creates an empty `Dictionary` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Dictionary(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned and the
    /// key keeps its original position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_packstream::{Dictionary, Value};
    ///
    /// let mut map = Dictionary::new();
    /// assert!(map.insert("key".to_string(), Value::from(42)).is_none());
    /// assert!(map.insert("key".to_string(), Value::from(43)).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: crate::Value) -> Option<crate::Value> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&crate::Value> {
        self.0.get(key)
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes a key, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<crate::Value> {
        self.0.shift_remove(key)
    }

    /// Returns the number of elements in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, crate::Value> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, crate::Value> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, crate::Value> {
        self.0.iter()
    }
}

impl Pack for Dictionary {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        pack_entries(
            packer,
            self.len(),
            self.iter().map(|(k, v)| (k.as_str(), v)),
            true,
        )
    }
}

impl From<HashMap<String, crate::Value>> for Dictionary {
    fn from(map: HashMap<String, crate::Value>) -> Self {
        Dictionary(map.into_iter().collect())
    }
}

impl From<Dictionary> for HashMap<String, crate::Value> {
    fn from(map: Dictionary) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for Dictionary {
    type Item = (String, crate::Value);
    type IntoIter = indexmap::map::IntoIter<String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = (&'a String, &'a crate::Value);
    type IntoIter = indexmap::map::Iter<'a, String, crate::Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, crate::Value)> for Dictionary {
    fn from_iter<T: IntoIterator<Item = (String, crate::Value)>>(iter: T) -> Self {
        Dictionary(IndexMap::from_iter(iter))
    }
}
