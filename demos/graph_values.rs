//! Nodes, relationships and paths.
//!
//! Run with: cargo run --example graph_values

use serde_packstream::{
    encode, packstream, Dictionary, Node, Path, Relationship, UnboundRelationship, Value,
};
use std::error::Error;

fn properties(value: Value) -> Dictionary {
    match value {
        Value::Dictionary(dict) => dict,
        _ => Dictionary::new(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let alice = Node::new(
        1,
        vec!["Person".to_string()],
        properties(packstream!({ "name": "Alice", "born": 1990 })),
    );
    let bob = Node::new(
        2,
        vec!["Person".to_string(), "Admin".to_string()],
        properties(packstream!({ "name": "Bob" })),
    );
    let knows = Relationship::new(10, 1, 2, "KNOWS", properties(packstream!({ "since": 2015 })));

    for (name, bytes) in [
        ("alice", encode(&alice)?),
        ("bob", encode(&bob)?),
        ("knows", encode(&knows)?),
    ] {
        println!("{:>6}: {:02X?}", name, bytes);
    }

    let path = Path::new(
        vec![alice, bob],
        vec![UnboundRelationship::new(10, "KNOWS", Dictionary::new())],
        vec![1, 1],
    );
    let bytes = encode(&path)?;
    println!("  path: {} bytes", bytes.len());

    Ok(())
}
