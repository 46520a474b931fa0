//! Graph entities: nodes, relationships and paths.

use super::{tag, StructureType};
use crate::packer::{Pack, Packer};
use crate::{Dictionary, Result, Value};

/// A node with its labels and properties.
///
/// # Examples
///
/// ```rust
/// use serde_packstream::{Dictionary, Node, Pack};
///
/// let node = Node::new(1, vec!["Person".to_string()], Dictionary::new());
/// let bytes = node.to_packstream().unwrap();
/// assert_eq!(&bytes[..3], &[0xB3, 0x4E, 0x01]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    pub id: i64,
    pub labels: Vec<String>,
    pub properties: Dictionary,
}

impl Node {
    pub fn new(id: i64, labels: Vec<String>, properties: Dictionary) -> Self {
        Node {
            id,
            labels,
            properties,
        }
    }
}

impl StructureType for Node {
    fn tag(&self) -> u8 {
        tag::NODE
    }

    fn field_count(&self) -> usize {
        3
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.id)?;
        self.labels.pack(packer)?;
        self.properties.pack(packer)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::from(self.labels.clone()),
            Value::Dictionary(self.properties.clone()),
        ]
    }
}

/// A relationship between two nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Relationship {
    pub id: i64,
    pub start_node_id: i64,
    pub end_node_id: i64,
    pub rel_type: String,
    pub properties: Dictionary,
}

impl Relationship {
    pub fn new(
        id: i64,
        start_node_id: i64,
        end_node_id: i64,
        rel_type: impl Into<String>,
        properties: Dictionary,
    ) -> Self {
        Relationship {
            id,
            start_node_id,
            end_node_id,
            rel_type: rel_type.into(),
            properties,
        }
    }
}

impl StructureType for Relationship {
    fn tag(&self) -> u8 {
        tag::RELATIONSHIP
    }

    fn field_count(&self) -> usize {
        5
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.id)?;
        packer.write_int(self.start_node_id)?;
        packer.write_int(self.end_node_id)?;
        packer.write_string(&self.rel_type)?;
        self.properties.pack(packer)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::Integer(self.start_node_id),
            Value::Integer(self.end_node_id),
            Value::String(self.rel_type.clone()),
            Value::Dictionary(self.properties.clone()),
        ]
    }
}

/// A relationship without its endpoints, as carried inside a [`Path`].
#[derive(Clone, Debug, PartialEq)]
pub struct UnboundRelationship {
    pub id: i64,
    pub rel_type: String,
    pub properties: Dictionary,
}

impl UnboundRelationship {
    pub fn new(id: i64, rel_type: impl Into<String>, properties: Dictionary) -> Self {
        UnboundRelationship {
            id,
            rel_type: rel_type.into(),
            properties,
        }
    }
}

impl StructureType for UnboundRelationship {
    fn tag(&self) -> u8 {
        tag::UNBOUND_RELATIONSHIP
    }

    fn field_count(&self) -> usize {
        3
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        packer.write_int(self.id)?;
        packer.write_string(&self.rel_type)?;
        self.properties.pack(packer)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::Integer(self.id),
            Value::String(self.rel_type.clone()),
            Value::Dictionary(self.properties.clone()),
        ]
    }
}

/// An alternating walk of nodes and relationships.
///
/// `indices` describes the walk as pairs of (relationship index, node index)
/// into `relationships` and `nodes`. Relationship indices are 1-based; a
/// negative index means the relationship is traversed against its direction.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub nodes: Vec<Node>,
    pub relationships: Vec<UnboundRelationship>,
    pub indices: Vec<i64>,
}

impl Path {
    pub fn new(
        nodes: Vec<Node>,
        relationships: Vec<UnboundRelationship>,
        indices: Vec<i64>,
    ) -> Self {
        Path {
            nodes,
            relationships,
            indices,
        }
    }
}

impl StructureType for Path {
    fn tag(&self) -> u8 {
        tag::PATH
    }

    fn field_count(&self) -> usize {
        3
    }

    fn pack_fields(&self, packer: &mut Packer) -> Result<()> {
        self.nodes.pack(packer)?;
        self.relationships.pack(packer)?;
        self.indices.pack(packer)
    }

    fn fields(&self) -> Vec<Value> {
        vec![
            Value::from(self.nodes.clone()),
            Value::from(self.relationships.clone()),
            Value::from(self.indices.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_encoding() {
        let mut properties = Dictionary::new();
        properties.insert("name".to_string(), Value::from("Ann"));
        let node = Node::new(42, vec!["Person".to_string()], properties);

        let mut expected = vec![0xB3, 0x4E, 0x2A, 0x91, 0x86];
        expected.extend_from_slice(b"Person");
        expected.extend_from_slice(&[0xA1, 0x84]);
        expected.extend_from_slice(b"name");
        expected.push(0x83);
        expected.extend_from_slice(b"Ann");

        assert_eq!(node.to_packstream().unwrap(), expected);
    }

    #[test]
    fn test_relationship_encoding() {
        let rel = Relationship::new(1, 2, 300, "R", Dictionary::new());
        assert_eq!(
            rel.to_packstream().unwrap(),
            vec![0xB5, 0x52, 0x01, 0x02, 0xC9, 0x01, 0x2C, 0x81, 0x52, 0xA0]
        );
    }

    #[test]
    fn test_unbound_relationship_encoding() {
        let rel = UnboundRelationship::new(-20, "", Dictionary::new());
        assert_eq!(
            rel.to_packstream().unwrap(),
            vec![0xB3, 0x72, 0xC8, 0xEC, 0x80, 0xA0]
        );
    }

    #[test]
    fn test_path_encoding() {
        let a = Node::new(1, Vec::new(), Dictionary::new());
        let b = Node::new(2, Vec::new(), Dictionary::new());
        let r = UnboundRelationship::new(9, "T", Dictionary::new());
        let path = Path::new(vec![a, b], vec![r], vec![1, 1]);

        assert_eq!(
            path.to_packstream().unwrap(),
            vec![
                0xB3, 0x50, // path header
                0x92, // nodes
                0xB3, 0x4E, 0x01, 0x90, 0xA0, //
                0xB3, 0x4E, 0x02, 0x90, 0xA0, //
                0x91, // relationships
                0xB3, 0x72, 0x09, 0x81, 0x54, 0xA0, //
                0x92, 0x01, 0x01, // indices
            ]
        );
    }

    #[test]
    fn test_property_error_propagates() {
        // A property value that cannot be encoded aborts the whole node.
        let mut properties = Dictionary::new();
        let fields = (0..20).map(Value::from).collect();
        properties.insert(
            "bad".to_string(),
            Value::Structure(crate::Structure::generic(0x01, fields)),
        );
        let node = Node::new(1, Vec::new(), properties);
        assert!(node.to_packstream().is_err());
    }
}
