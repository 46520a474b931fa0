//! PackStream serialization through serde.
//!
//! This module provides the [`Serializer`] that encodes any `Serialize` type
//! as PackStream bytes, and the [`ValueSerializer`] that converts it into a
//! [`Value`] tree instead.
//!
//! ## Data Model Mapping
//!
//! | serde                          | PackStream                          |
//! |--------------------------------|-------------------------------------|
//! | `bool`                         | Boolean                             |
//! | integers                       | Integer (error outside `i64`)       |
//! | `f32`, `f64`                   | Float                               |
//! | `char`, `str`                  | String                              |
//! | bytes                          | Bytes                               |
//! | `None`, `()`, unit struct      | Null                                |
//! | sequences, tuples              | List                                |
//! | maps, structs                  | Dictionary (keys must be strings)   |
//! | unit variant                   | String holding the variant name     |
//! | other enum variants            | Dictionary `{variant: payload}`     |
//!
//! Values of the structure types ([`Node`](crate::Node),
//! [`Date`](crate::Date), ...) are recognised and written as structures.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use serde::Serialize;
//! use serde_packstream::{PackOptions, Serializer};
//!
//! let mut serializer = Serializer::new(PackOptions::new());
//! vec![1, 2, 3].serialize(&mut serializer).unwrap();
//!
//! assert_eq!(serializer.into_inner(), vec![0x93, 0x01, 0x02, 0x03]);
//! ```

use serde::ser::{self, Impossible, Serialize};

use crate::packer::{Pack, Packer};
use crate::structure::{GenericStructure, Structure, STRUCTURE_TOKEN};
use crate::{Dictionary, Error, List, PackOptions, Result, Value};

/// The PackStream serializer.
///
/// Scalars are written straight to the output. Containers are collected into
/// a [`Value`] first so their length is known before the header is written.
pub struct Serializer {
    packer: Packer,
}

impl Serializer {
    pub fn new(options: PackOptions) -> Self {
        Serializer {
            packer: Packer::new(options),
        }
    }

    /// Consumes the serializer and returns the encoded bytes.
    pub fn into_inner(self) -> Vec<u8> {
        self.packer.into_inner()
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::new(PackOptions::default())
    }
}

impl<'a> ser::Serializer for &'a mut Serializer {
    type Ok = ();
    type Error = Error;

    type SerializeSeq = Compound<'a, SerializeVec>;
    type SerializeTuple = Compound<'a, SerializeVec>;
    type SerializeTupleStruct = Compound<'a, SerializeVec>;
    type SerializeTupleVariant = Compound<'a, SerializeVec>;
    type SerializeMap = Compound<'a, SerializeDictionary>;
    type SerializeStruct = Compound<'a, SerializeDictionary>;
    type SerializeStructVariant = Compound<'a, SerializeDictionary>;

    fn serialize_bool(self, v: bool) -> Result<()> {
        self.packer.write_bool(v);
        Ok(())
    }

    fn serialize_i8(self, v: i8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<()> {
        self.packer.write_int(v)
    }

    fn serialize_i128(self, v: i128) -> Result<()> {
        self.serialize_i64(narrow(v)?)
    }

    fn serialize_u8(self, v: u8) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<()> {
        self.serialize_i64(i64::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<()> {
        self.serialize_i64(narrow(v)?)
    }

    fn serialize_u128(self, v: u128) -> Result<()> {
        self.serialize_i64(narrow(v)?)
    }

    fn serialize_f32(self, v: f32) -> Result<()> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<()> {
        self.packer.write_float(v)
    }

    fn serialize_char(self, v: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.serialize_str(v.encode_utf8(&mut buf))
    }

    fn serialize_str(self, v: &str) -> Result<()> {
        self.packer.write_string(v)
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<()> {
        self.packer.write_bytes(v)
    }

    fn serialize_none(self) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_some<T>(self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<()> {
        self.packer.write_null();
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<()> {
        self.serialize_unit()
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<()> {
        self.serialize_str(variant)
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        if name == STRUCTURE_TOKEN {
            let structure = structure_from_parts(value.serialize(ValueSerializer)?)?;
            return structure.pack(&mut self.packer);
        }
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let payload = value.serialize(ValueSerializer)?;
        wrap_variant(variant, payload).pack(&mut self.packer)
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(Compound {
            ser: self,
            inner: SerializeVec::new(len.unwrap_or(0), None),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Ok(Compound {
            ser: self,
            inner: SerializeVec::new(len, Some(variant)),
        })
    }

    fn serialize_map(self, len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(Compound {
            ser: self,
            inner: SerializeDictionary::new(len.unwrap_or(0), None),
        })
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<Self::SerializeStruct> {
        self.serialize_map(Some(len))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Ok(Compound {
            ser: self,
            inner: SerializeDictionary::new(len, Some(variant)),
        })
    }
}

/// A container being serialized by [`Serializer`].
///
/// Elements are collected by the matching [`ValueSerializer`] state and the
/// finished value is packed on `end`.
pub struct Compound<'a, C> {
    ser: &'a mut Serializer,
    inner: C,
}

impl<'a> ser::SerializeSeq for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<()> {
        self.inner.finish().pack(&mut self.ser.packer)
    }
}

impl<'a> ser::SerializeTuple for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<()> {
        ser::SerializeSeq::end(self)
    }
}

impl<'a> ser::SerializeTupleStruct for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<()> {
        ser::SerializeSeq::end(self)
    }
}

impl<'a> ser::SerializeTupleVariant for Compound<'a, SerializeVec> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<()> {
        ser::SerializeSeq::end(self)
    }
}

impl<'a> ser::SerializeMap for Compound<'a, SerializeDictionary> {
    type Ok = ();
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeMap::serialize_key(&mut self.inner, key)
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeMap::serialize_value(&mut self.inner, value)
    }

    fn end(self) -> Result<()> {
        self.inner.finish().pack(&mut self.ser.packer)
    }
}

impl<'a> ser::SerializeStruct for Compound<'a, SerializeDictionary> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.insert(key.to_string(), value)
    }

    fn end(self) -> Result<()> {
        ser::SerializeMap::end(self)
    }
}

impl<'a> ser::SerializeStructVariant for Compound<'a, SerializeDictionary> {
    type Ok = ();
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.inner.insert(key.to_string(), value)
    }

    fn end(self) -> Result<()> {
        ser::SerializeMap::end(self)
    }
}

/// Serializer producing a [`Value`] tree.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_packstream::{Value, ValueSerializer};
///
/// let value = (1, "a").serialize(ValueSerializer).unwrap();
/// assert_eq!(value, Value::from(vec![Value::from(1), Value::from("a")]));
/// ```
pub struct ValueSerializer;

/// Sequence state of [`ValueSerializer`].
pub struct SerializeVec {
    vec: Vec<Value>,
    variant: Option<&'static str>,
}

/// Map and struct state of [`ValueSerializer`].
pub struct SerializeDictionary {
    map: Dictionary,
    current_key: Option<String>,
    variant: Option<&'static str>,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeVec;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeVec;
    type SerializeMap = SerializeDictionary;
    type SerializeStruct = SerializeDictionary;
    type SerializeStructVariant = SerializeDictionary;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        Ok(Value::Integer(narrow(v)?))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Integer(i64::from(v)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        Ok(Value::Integer(narrow(v)?))
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        Ok(Value::Integer(narrow(v)?))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Float(f64::from(v)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Float(v))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        let inner = value.serialize(ValueSerializer)?;
        if name == STRUCTURE_TOKEN {
            return Ok(Value::Structure(Structure::Generic(structure_from_parts(
                inner,
            )?)));
        }
        Ok(inner)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(wrap_variant(variant, value.serialize(ValueSerializer)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len.unwrap_or(0), None))
    }

    fn serialize_tuple(self, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_struct(self, _name: &'static str, len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, None))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeVec> {
        Ok(SerializeVec::new(len, Some(variant)))
    }

    fn serialize_map(self, len: Option<usize>) -> Result<SerializeDictionary> {
        Ok(SerializeDictionary::new(len.unwrap_or(0), None))
    }

    fn serialize_struct(self, _name: &'static str, len: usize) -> Result<SerializeDictionary> {
        Ok(SerializeDictionary::new(len, None))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<SerializeDictionary> {
        Ok(SerializeDictionary::new(len, Some(variant)))
    }
}

impl SerializeVec {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeVec {
            vec: Vec::with_capacity(len),
            variant,
        }
    }

    fn finish(self) -> Value {
        let list = Value::List(List::from(self.vec));
        match self.variant {
            Some(variant) => wrap_variant(variant, list),
            None => list,
        }
    }
}

impl SerializeDictionary {
    fn new(len: usize, variant: Option<&'static str>) -> Self {
        SerializeDictionary {
            map: Dictionary::with_capacity(len),
            current_key: None,
            variant,
        }
    }

    fn insert<T>(&mut self, key: String, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn finish(self) -> Value {
        let map = Value::Dictionary(self.map);
        match self.variant {
            Some(variant) => wrap_variant(variant, map),
            None => map,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(value.serialize(ValueSerializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTuple for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeTupleVariant for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeMap for SerializeDictionary {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(key.serialize(KeySerializer)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.insert(key, value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStruct for SerializeDictionary {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

impl ser::SerializeStructVariant for SerializeDictionary {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.insert(key.to_string(), value)
    }

    fn end(self) -> Result<Value> {
        Ok(self.finish())
    }
}

/// Accepts string-like map keys and rejects everything else.
struct KeySerializer;

fn key_error(kind: &str) -> Error {
    Error::unsupported_type(&format!("{kind} map key"))
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(key_error("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<String> {
        Err(key_error("i8"))
    }

    fn serialize_i16(self, _v: i16) -> Result<String> {
        Err(key_error("i16"))
    }

    fn serialize_i32(self, _v: i32) -> Result<String> {
        Err(key_error("i32"))
    }

    fn serialize_i64(self, _v: i64) -> Result<String> {
        Err(key_error("i64"))
    }

    fn serialize_u8(self, _v: u8) -> Result<String> {
        Err(key_error("u8"))
    }

    fn serialize_u16(self, _v: u16) -> Result<String> {
        Err(key_error("u16"))
    }

    fn serialize_u32(self, _v: u32) -> Result<String> {
        Err(key_error("u32"))
    }

    fn serialize_u64(self, _v: u64) -> Result<String> {
        Err(key_error("u64"))
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(key_error("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(key_error("f64"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(key_error("bytes"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(key_error("null"))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(key_error("optional"))
    }

    fn serialize_unit(self) -> Result<String> {
        Err(key_error("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        Err(key_error(name))
    }

    fn serialize_newtype_variant<T>(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(key_error(name))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(key_error("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(key_error("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(key_error(name))
    }

    fn serialize_tuple_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(key_error(name))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(key_error("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(key_error(name))
    }

    fn serialize_struct_variant(
        self,
        name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(key_error(name))
    }
}

fn narrow<T>(v: T) -> Result<i64>
where
    T: Copy + std::fmt::Display,
    i64: TryFrom<T>,
{
    i64::try_from(v).map_err(|_| Error::integer_out_of_range(v))
}

fn wrap_variant(variant: &'static str, payload: Value) -> Value {
    let mut map = Dictionary::with_capacity(1);
    map.insert(variant.to_string(), payload);
    Value::Dictionary(map)
}

/// Rebuilds a structure from the `(tag, [fields])` pair it serializes as.
fn structure_from_parts(parts: Value) -> Result<GenericStructure> {
    let malformed = || Error::custom("malformed structure: expected (tag, [fields])");
    let Value::List(parts) = parts else {
        return Err(malformed());
    };
    let mut parts = parts.into_iter();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(Value::Integer(tag)), Some(Value::List(fields)), None) => {
            let tag = u8::try_from(tag)
                .map_err(|_| Error::custom(format!("structure tag {tag} is not a byte")))?;
            Ok(GenericStructure::new(tag, fields.into_inner()))
        }
        _ => Err(malformed()),
    }
}
