//! Encoding derived types.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use serde_packstream::{to_vec, to_vec_with_options, PackOptions};
use std::error::Error;

#[derive(Debug, Serialize)]
struct User {
    id: u32,
    name: String,
    email: Option<String>,
}

fn hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn Error>> {
    let users = vec![
        User {
            id: 42,
            name: "Alice Johnson".to_string(),
            email: Some("alice@example.com".to_string()),
        },
        User {
            id: 43,
            name: "Bob Smith".to_string(),
            email: None,
        },
    ];

    let bytes = to_vec(&users)?;
    println!("{} bytes, keys sorted:\n{}\n", bytes.len(), hex(&bytes));

    let ordered = to_vec_with_options(&users, PackOptions::insertion_order())?;
    println!("{} bytes, field order:\n{}", ordered.len(), hex(&ordered));

    Ok(())
}
