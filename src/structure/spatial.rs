//! Spatial points in a coordinate reference system.

use super::{tag, StructureType};
use crate::packer::Packer;
use crate::{Result, Value};

/// A two-dimensional point.
///
/// `srid` identifies the coordinate reference system, e.g. 4326 for WGS-84.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point2D {
    pub srid: i64,
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(srid: i64, x: f64, y: f64) -> Self {
        Point2D { srid, x, y }
    }
}

impl StructureType for Point2D {
    fn tag(&self) -> u8 {
        tag::POINT_2D
    }

    fn field_count(&self) -> usize {
        3
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.srid)?;
        packer.write_float(self.x)?;
        packer.write_float(self.y)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.srid),
            Value::Float(self.x),
            Value::Float(self.y),
        ]
    }
}

/// A three-dimensional point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3D {
    pub srid: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(srid: i64, x: f64, y: f64, z: f64) -> Self {
        Point3D { srid, x, y, z }
    }
}

impl StructureType for Point3D {
    fn tag(&self) -> u8 {
        tag::POINT_3D
    }

    fn field_count(&self) -> usize {
        4
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.srid)?;
        packer.write_float(self.x)?;
        packer.write_float(self.y)?;
        packer.write_float(self.z)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.srid),
            Value::Float(self.x),
            Value::Float(self.y),
            Value::Float(self.z),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pack;

    #[test]
    fn test_point_2d_encoding() {
        let bytes = Point2D::new(7203, 1.0, 0.0).to_packstream().unwrap();

        let mut expected = vec![0xB3, 0x58, 0xC9, 0x1C, 0x23, 0xC1];
        expected.extend_from_slice(&1.0f64.to_be_bytes());
        expected.push(0xC1);
        expected.extend_from_slice(&0.0f64.to_be_bytes());
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_point_3d_header() {
        let bytes = Point3D::new(9157, 1.0, 2.0, 3.0).to_packstream().unwrap();
        assert_eq!(&bytes[..2], &[0xB4, 0x59]);
        // header, srid as INT_16, three tagged floats
        assert_eq!(bytes.len(), 2 + 3 + 3 * 9);
    }
}
