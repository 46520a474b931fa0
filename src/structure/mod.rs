//! Tagged structures.
//!
//! A structure is a fixed-arity record: a header byte carrying the field count,
//! a one-byte tag naming the record type, then each field as an ordinary value.
//!
//! ```text
//! B3 4E  <id> <labels> <properties>
//! ^  ^
//! |  tag (Node)
//! 0xB0 + 3 fields
//! ```
//!
//! Any type implementing [`StructureType`] encodes this way. The built-in
//! record types cover graph entities ([`graph`]), temporal values
//! ([`temporal`]) and spatial values ([`spatial`]). [`GenericStructure`]
//! carries any other tag inside a [`Value`] tree.

pub mod graph;
pub mod spatial;
pub mod temporal;

pub use graph::{Node, Path, Relationship, UnboundRelationship};
pub use spatial::{Point2D, Point3D};
pub use temporal::{Date, DateTime, DateTimeZoneId, Duration, LocalDateTime, LocalTime, Time};

use serde::{Serialize, Serializer};

use crate::packer::{Pack, Packer};
use crate::{Result, Value};

/// Structure tags of the built-in record types.
pub mod tag {
    pub const NODE: u8 = 0x4E;
    pub const RELATIONSHIP: u8 = 0x52;
    pub const UNBOUND_RELATIONSHIP: u8 = 0x72;
    pub const PATH: u8 = 0x50;
    pub const DATE: u8 = 0x44;
    pub const TIME: u8 = 0x54;
    pub const LOCAL_TIME: u8 = 0x74;
    pub const DATE_TIME: u8 = 0x46;
    pub const DATE_TIME_ZONE_ID: u8 = 0x66;
    pub const LOCAL_DATE_TIME: u8 = 0x64;
    pub const DURATION: u8 = 0x45;
    pub const POINT_2D: u8 = 0x58;
    pub const POINT_3D: u8 = 0x59;
}

/// Name under which structures travel through serde.
///
/// The packstream serializers recognise it and rebuild the structure; other
/// serializers see a newtype around `(tag, [fields])`.
pub(crate) const STRUCTURE_TOKEN: &str = "$serde_packstream::Structure";

/// A tagged record that encodes as a PackStream structure.
///
/// Implementors provide the tag, the field count and the fields in declared
/// order. [`pack_structure`] writes the header and the fields.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::structure::{pack_structure, StructureType};
/// use serde_packstream::{Pack, Packer, Result, Value};
///
/// struct Version {
///     major: i64,
///     minor: i64,
/// }
///
/// impl StructureType for Version {
///     fn tag(&self) -> u8 {
///         0x56
///     }
///
///     fn field_count(&self) -> usize {
///         2
///     }
///
///     fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
///         packer.write_int(self.major)?;
///         packer.write_int(self.minor)
///     }
///
///     fn fields(&self) -> Vec<Value> {
///         vec![Value::from(self.major), Value::from(self.minor)]
///     }
/// }
///
/// impl Pack for Version {
///     fn pack(&self, packer: &mut Packer) -> Result<()> {
///         pack_structure(self, packer)
///     }
/// }
///
/// let bytes = Version { major: 5, minor: 4 }.to_packstream().unwrap();
/// assert_eq!(bytes, vec![0xB2, 0x56, 0x05, 0x04]);
/// ```
pub trait StructureType {
    fn tag(&self) -> u8;

    fn field_count(&self) -> usize;

    /// Writes the fields, in declared order, without the header.
    fn pack_fields(&self, packer: &mut Packer) -> Result<()>;

    /// Returns the fields, in declared order, as values.
    fn fields(&self) -> Vec<Value>;
}

/// Writes a structure header followed by its fields.
pub fn pack_structure<S>(structure: &S, packer: &mut Packer) -> Result<()>
where
    S: StructureType + ?Sized,
{
    packer.write_structure_header(structure.tag(), structure.field_count())?;
    structure.pack_fields(packer)
}

fn serialize_structure<S, T>(structure: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: StructureType + ?Sized,
{
    serializer.serialize_newtype_struct(STRUCTURE_TOKEN, &(structure.tag(), structure.fields()))
}

/// A structure with an arbitrary tag and fields.
///
/// Used for record types this crate does not model, and produced when a
/// structure passes through [`to_value`](crate::to_value).
///
/// # Examples
///
/// ```rust
/// use serde_packstream::{GenericStructure, Pack, Value};
///
/// let hello = GenericStructure::new(0x01, vec![Value::from("agent")]);
/// assert_eq!(
///     hello.to_packstream().unwrap(),
///     vec![0xB1, 0x01, 0x85, b'a', b'g', b'e', b'n', b't']
/// );
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GenericStructure {
    pub tag: u8,
    pub fields: Vec<Value>,
}

impl GenericStructure {
    pub fn new(tag: u8, fields: Vec<Value>) -> Self {
        GenericStructure { tag, fields }
    }
}

impl StructureType for GenericStructure {
    fn tag(&self) -> u8 {
        self.tag
    }

    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        for field in &self.fields {
            field.pack(packer)?;
        }
        Ok(())
    }

    fn fields(&self) -> Vec<Value> {
        self.fields.clone()
    }
}

/// Any structure that can appear inside a [`Value`].
#[derive(Clone, Debug, PartialEq)]
pub enum Structure {
    Node(Node),
    Relationship(Relationship),
    UnboundRelationship(UnboundRelationship),
    Path(Path),
    Date(Date),
    Time(Time),
    LocalTime(LocalTime),
    DateTime(DateTime),
    DateTimeZoneId(DateTimeZoneId),
    LocalDateTime(LocalDateTime),
    Duration(Duration),
    Point2D(Point2D),
    Point3D(Point3D),
    Generic(GenericStructure),
}

macro_rules! each_structure {
    ($self:expr, $s:ident => $body:expr) => {
        match $self {
            Structure::Node($s) => $body,
            Structure::Relationship($s) => $body,
            Structure::UnboundRelationship($s) => $body,
            Structure::Path($s) => $body,
            Structure::Date($s) => $body,
            Structure::Time($s) => $body,
            Structure::LocalTime($s) => $body,
            Structure::DateTime($s) => $body,
            Structure::DateTimeZoneId($s) => $body,
            Structure::LocalDateTime($s) => $body,
            Structure::Duration($s) => $body,
            Structure::Point2D($s) => $body,
            Structure::Point3D($s) => $body,
            Structure::Generic($s) => $body,
        }
    };
}

impl Structure {
    /// Creates a structure with an arbitrary tag and fields.
    pub fn generic(tag: u8, fields: Vec<Value>) -> Self {
        Structure::Generic(GenericStructure::new(tag, fields))
    }

    /// Returns the record type name.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Structure::Node(_) => "Node",
            Structure::Relationship(_) => "Relationship",
            Structure::UnboundRelationship(_) => "UnboundRelationship",
            Structure::Path(_) => "Path",
            Structure::Date(_) => "Date",
            Structure::Time(_) => "Time",
            Structure::LocalTime(_) => "LocalTime",
            Structure::DateTime(_) => "DateTime",
            Structure::DateTimeZoneId(_) => "DateTimeZoneId",
            Structure::LocalDateTime(_) => "LocalDateTime",
            Structure::Duration(_) => "Duration",
            Structure::Point2D(_) => "Point2D",
            Structure::Point3D(_) => "Point3D",
            Structure::Generic(_) => "structure",
        }
    }

    /// Converts into a [`GenericStructure`] with the same tag and fields.
    #[must_use]
    pub fn to_generic(&self) -> GenericStructure {
        GenericStructure::new(self.tag(), self.fields())
    }
}

impl StructureType for Structure {
    fn tag(&self) -> u8 {
        each_structure!(self, s => s.tag())
    }

    fn field_count(&self) -> usize {
        each_structure!(self, s => s.field_count())
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        each_structure!(self, s => s.pack_fields(packer))
    }

    fn fields(&self) -> Vec<Value> {
        each_structure!(self, s => s.fields())
    }
}

macro_rules! impl_structure {
    ($($ty:ident),* $(,)?) => {
        $(
            impl Pack for $ty {
                fn pack(&self, packer: &mut Packer) -> Result<()> {
                    pack_structure(self, packer)
                }
            }

            impl Serialize for $ty {
                fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serialize_structure(self, serializer)
                }
            }

            impl From<$ty> for Structure {
                fn from(value: $ty) -> Self {
                    Structure::$ty(value)
                }
            }

            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Structure(Structure::$ty(value))
                }
            }
        )*
    };
}

impl_structure!(
    Node,
    Relationship,
    UnboundRelationship,
    Path,
    Date,
    Time,
    LocalTime,
    DateTime,
    DateTimeZoneId,
    LocalDateTime,
    Duration,
    Point2D,
    Point3D,
);

impl Pack for GenericStructure {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        pack_structure(self, packer)
    }
}

impl Serialize for GenericStructure {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_structure(self, serializer)
    }
}

impl From<GenericStructure> for Structure {
    fn from(value: GenericStructure) -> Self {
        Structure::Generic(value)
    }
}

impl From<GenericStructure> for Value {
    fn from(value: GenericStructure) -> Self {
        Value::Structure(Structure::Generic(value))
    }
}

impl Pack for Structure {
    fn pack(&self, packer: &mut Packer) -> Result<()> {
        pack_structure(self, packer)
    }
}

impl Serialize for Structure {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_structure(self, serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dictionary, Error};

    fn all_structures() -> Vec<Structure> {
        let mut properties = Dictionary::new();
        properties.insert("since".to_string(), Value::from(2020));

        let node = Node::new(1, vec!["Person".to_string()], properties.clone());
        let unbound = UnboundRelationship::new(7, "KNOWS", properties.clone());

        vec![
            node.clone().into(),
            Relationship::new(7, 1, 2, "KNOWS", properties).into(),
            unbound.clone().into(),
            Path::new(vec![node], vec![unbound], vec![1, 0]).into(),
            Date::new(19_000).into(),
            Time::new(3_600_000_000_000, 3600).into(),
            LocalTime::new(1).into(),
            DateTime::new(1_700_000_000, 5, -7200).into(),
            DateTimeZoneId::new(1_700_000_000, 5, "Europe/Stockholm").into(),
            LocalDateTime::new(1_700_000_000, 5).into(),
            Duration::new(14, 16, 18, 20).into(),
            Point2D::new(7203, 1.0, 2.0).into(),
            Point3D::new(9157, 1.0, 2.0, 3.0).into(),
        ]
    }

    #[test]
    fn test_field_count_matches_fields() {
        for structure in all_structures() {
            assert_eq!(
                structure.field_count(),
                structure.fields().len(),
                "mismatch for {}",
                structure.type_name()
            );
        }
    }

    #[test]
    fn test_pack_fields_matches_generic_encoding() {
        for structure in all_structures() {
            assert_eq!(
                structure.to_packstream().unwrap(),
                structure.to_generic().to_packstream().unwrap(),
                "mismatch for {}",
                structure.type_name()
            );
        }
    }

    #[test]
    fn test_headers() {
        let expected: [(u8, u8); 13] = [
            (0xB3, tag::NODE),
            (0xB5, tag::RELATIONSHIP),
            (0xB3, tag::UNBOUND_RELATIONSHIP),
            (0xB3, tag::PATH),
            (0xB1, tag::DATE),
            (0xB2, tag::TIME),
            (0xB1, tag::LOCAL_TIME),
            (0xB3, tag::DATE_TIME),
            (0xB3, tag::DATE_TIME_ZONE_ID),
            (0xB2, tag::LOCAL_DATE_TIME),
            (0xB4, tag::DURATION),
            (0xB3, tag::POINT_2D),
            (0xB4, tag::POINT_3D),
        ];
        for (structure, (header, tag)) in all_structures().iter().zip(expected) {
            let bytes = structure.to_packstream().unwrap();
            assert_eq!(&bytes[..2], &[header, tag], "{}", structure.type_name());
        }
    }

    #[test]
    fn test_generic_field_limit() {
        let fields = (0..16).map(Value::from).collect();
        let err = GenericStructure::new(0x10, fields).to_packstream().unwrap_err();
        assert_eq!(err, Error::field_count_exceeded(0x10, 16));
    }

    #[test]
    fn test_empty_generic_structure() {
        let bytes = GenericStructure::new(0x0F, Vec::new()).to_packstream().unwrap();
        assert_eq!(bytes, vec![0xB0, 0x0F]);
    }
}
