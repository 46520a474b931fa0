//! Low-level PackStream writer.
//!
//! [`Packer`] owns the output buffer and knows how to write every scalar and
//! every size-tiered header. [`Pack`] is the self-encoding capability: any type
//! that can write itself through a `Packer` can be encoded, nested inside a
//! list, or used as a structure field.
//!
//! ## Integer Tiers
//!
//! Integers always use the narrowest representation that holds them:
//!
//! | Range | Bytes | Marker |
//! |-------|-------|--------|
//! | `-16..=127` | 1 | none, the byte is the value |
//! | `-128..=-17` | 2 | `0xC8` |
//! | `i16` range | 3 | `0xC9` |
//! | `i32` range | 5 | `0xCA` |
//! | `i64` range | 9 | `0xCB` |
//!
//! ## Direct Packer Usage
//!
//! ```rust
//! use serde_packstream::{PackOptions, Packer};
//!
//! let mut packer = Packer::new(PackOptions::default());
//! packer.write_list_header(2).unwrap();
//! packer.write_int(1).unwrap();
//! packer.write_string("a").unwrap();
//!
//! assert_eq!(packer.into_inner(), vec![0x92, 0x01, 0x81, 0x61]);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use byteorder::{BigEndian, WriteBytesExt};

use crate::marker::{self, MarkerFamily};
use crate::{Error, KeyOrder, PackOptions, Result};

/// The PackStream writer.
///
/// Writes are appended to an in-memory buffer. Encoding never emits partial
/// output to a caller: on error the whole packer is dropped.
#[derive(Debug, Clone)]
pub struct Packer {
    buf: Vec<u8>,
    options: PackOptions,
}

impl Default for Packer {
    fn default() -> Self {
        Packer::new(PackOptions::default())
    }
}

impl Packer {
    pub fn new(options: PackOptions) -> Self {
        Packer {
            buf: Vec::with_capacity(options.initial_capacity),
            options,
        }
    }

    pub fn options(&self) -> &PackOptions {
        &self.options
    }

    /// Returns the written bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }

    /// Returns a reference to the written bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Returns the number of bytes written.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if no bytes have been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn write_null(&mut self) {
        self.buf.push(marker::NULL);
    }

    #[inline]
    pub fn write_bool(&mut self, value: bool) {
        self.buf
            .push(if value { marker::TRUE } else { marker::FALSE });
    }

    /// Writes an integer in the narrowest tier that holds it.
    pub fn write_int(&mut self, value: i64) -> Result<()> {
        if (marker::TINY_INT_MIN..=marker::TINY_INT_MAX).contains(&value) {
            self.buf.push(value as i8 as u8);
        } else if let Ok(v) = i8::try_from(value) {
            self.buf.push(marker::INT_8);
            self.buf.write_i8(v)?;
        } else if let Ok(v) = i16::try_from(value) {
            self.buf.push(marker::INT_16);
            self.buf.write_i16::<BigEndian>(v)?;
        } else if let Ok(v) = i32::try_from(value) {
            self.buf.push(marker::INT_32);
            self.buf.write_i32::<BigEndian>(v)?;
        } else {
            self.buf.push(marker::INT_64);
            self.buf.write_i64::<BigEndian>(value)?;
        }
        Ok(())
    }

    /// Writes a big-endian IEEE-754 double. Floats have a single fixed width.
    pub fn write_float(&mut self, value: f64) -> Result<()> {
        self.buf.push(marker::FLOAT_64);
        self.buf.write_f64::<BigEndian>(value)?;
        Ok(())
    }

    pub fn write_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.write_sized_header(&marker::BYTES, value.len())?;
        self.buf.extend_from_slice(value);
        Ok(())
    }

    /// Writes a UTF-8 string; the length is its byte length.
    pub fn write_string(&mut self, value: &str) -> Result<()> {
        self.write_sized_header(&marker::STRING, value.len())?;
        self.buf.extend_from_slice(value.as_bytes());
        Ok(())
    }

    /// Writes a list header. The caller writes `len` elements after it.
    pub fn write_list_header(&mut self, len: usize) -> Result<()> {
        self.write_sized_header(&marker::LIST, len)
    }

    /// Writes a dictionary header. The caller writes `len` key/value pairs after it.
    pub fn write_dictionary_header(&mut self, len: usize) -> Result<()> {
        self.write_sized_header(&marker::DICTIONARY, len)
    }

    /// Writes a structure header: the field-count marker followed by the tag.
    pub fn write_structure_header(&mut self, tag: u8, field_count: usize) -> Result<()> {
        let header = marker::TINY_STRUCT
            .get(field_count)
            .copied()
            .ok_or_else(|| Error::field_count_exceeded(tag, field_count))?;
        self.buf.push(header);
        self.buf.push(tag);
        Ok(())
    }

    fn write_sized_header(&mut self, family: &MarkerFamily, len: usize) -> Result<()> {
        if let Some(tiny) = family.tiny {
            if let Some(&m) = tiny.get(len) {
                self.buf.push(m);
                return Ok(());
            }
        }

        if let Ok(n) = u8::try_from(len) {
            self.buf.push(family.sized_8);
            self.buf.push(n);
        } else if let Ok(n) = u16::try_from(len) {
            self.buf.push(family.sized_16);
            self.buf.write_u16::<BigEndian>(n)?;
        } else if let Ok(n) = u32::try_from(len) {
            self.buf.push(family.sized_32);
            self.buf.write_u32::<BigEndian>(n)?;
        } else {
            return Err(Error::length_exceeded(family.kind, len));
        }
        Ok(())
    }
}

/// A value that can write its own PackStream encoding.
///
/// Lists, dictionaries, [`Value`](crate::Value) and every structure type
/// implement `Pack`, as do the Rust primitives that map onto the format.
/// References and `Box` are transparent; `None` encodes as null.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::Pack;
///
/// assert_eq!(true.to_packstream().unwrap(), vec![0xC3]);
/// assert_eq!("abc".to_packstream().unwrap(), vec![0x83, 0x61, 0x62, 0x63]);
/// assert_eq!(None::<i64>.to_packstream().unwrap(), vec![0xC0]);
/// ```
pub trait Pack {
    fn pack(&self, packer: &mut Packer) -> Result<()>;

    /// Encodes this value on its own with default options.
    fn to_packstream(&self) -> Result<Vec<u8>> {
        let mut packer = Packer::default();
        self.pack(&mut packer)?;
        Ok(packer.into_inner())
    }
}

/// Writes a dictionary header followed by its entries.
///
/// `insertion_ordered` says whether `entries` arrives in a meaningful order.
/// Unordered sources (hash maps) are always sorted so output stays reproducible.
pub(crate) fn pack_entries<'a, V, I>(
    packer: &mut Packer,
    len: usize,
    entries: I,
    insertion_ordered: bool,
) -> Result<()>
where
    V: Pack + ?Sized + 'a,
    I: Iterator<Item = (&'a str, &'a V)>,
{
    packer.write_dictionary_header(len)?;
    if insertion_ordered && packer.options().key_order == KeyOrder::Insertion {
        for (key, value) in entries {
            packer.write_string(key)?;
            value.pack(packer)?;
        }
    } else {
        let mut sorted: Vec<_> = entries.collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (key, value) in sorted {
            packer.write_string(key)?;
            value.pack(packer)?;
        }
    }
    Ok(())
}

impl Pack for bool {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        packer.write_bool(*self);
        Ok(())
    }
}

macro_rules! impl_pack_for_int {
    ($($ty:ty),*) => {
        $(
            impl Pack for $ty {
                fn pack(&self, packer: &mut Packer) -> Result<()> {
                    packer.write_int(i64::from(*self))
                }
            }
        )*
    };
}

impl_pack_for_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_pack_for_wide_int {
    ($($ty:ty),*) => {
        $(
            impl Pack for $ty {
                fn pack(&self, packer: &mut Packer) -> Result<()> {
                    let value = i64::try_from(*self).map_err(|_| Error::integer_out_of_range(self))?;
                    packer.write_int(value)
                }
            }
        )*
    };
}

impl_pack_for_wide_int!(u64, i128, u128, isize, usize);

impl Pack for f32 {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        packer.write_float(f64::from(*self))
    }
}

impl Pack for f64 {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        packer.write_float(*self)
    }
}

impl Pack for char {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        let mut buf = [0u8; 4];
        packer.write_string(self.encode_utf8(&mut buf))
    }
}

impl Pack for str {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        packer.write_string(self)
    }
}

impl Pack for String {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        packer.write_string(self)
    }
}

impl<T: Pack + ?Sized> Pack for &T {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        (**self).pack(packer)
    }
}

impl<T: Pack + ?Sized> Pack for Box<T> {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        (**self).pack(packer)
    }
}

impl<T: Pack> Pack for Option<T> {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        match self {
            Some(value) => value.pack(packer),
            None => {
                packer.write_null();
                Ok(())
            }
        }
    }
}

impl<T: Pack> Pack for [T] {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        packer.write_list_header(self.len())?;
        for item in self {
            item.pack(packer)?;
        }
        Ok(())
    }
}

impl<T: Pack> Pack for Vec<T> {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        self.as_slice().pack(packer)
    }
}

impl<K, V, S> Pack for HashMap<K, V, S>
where
    K: AsRef<str>,
    V: Pack,
    S: BuildHasher,
{
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        pack_entries(
            packer,
            self.len(),
            self.iter().map(|(k, v)| (k.as_ref(), v)),
            false,
        )
    }
}

impl<K, V> Pack for BTreeMap<K, V>
where
    K: AsRef<str>,
    V: Pack,
{
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        pack_entries(
            packer,
            self.len(),
            self.iter().map(|(k, v)| (k.as_ref(), v)),
            true,
        )
    }
}
