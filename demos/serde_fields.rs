//! Literal strings inside JSON documents.
//!
//! Run with: cargo run --example serde_fields

use rawlit::Literal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::ops::{Range, RangeInclusive};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct SpawnTable {
    name: String,
    #[serde(with = "rawlit::as_literal")]
    levels: RangeInclusive<u32>,
    #[serde(with = "rawlit::as_literal")]
    hours: Range<u8>,
    weights: Literal<BTreeMap<String, f64>>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let json = r#"{
        "name": "forest",
        "levels": "1...10",
        "hours": "6..<20",
        "weights": "['wolf': 0.5, 'boar': 0.25, 'bear': 0.25]"
    }"#;

    let table: SpawnTable = serde_json::from_str(json)?;
    println!("{:#?}", table);

    let out = serde_json::to_string_pretty(&table)?;
    println!("{}", out);

    let back: SpawnTable = serde_json::from_str(&out)?;
    assert_eq!(table, back);
    println!("✓ Round-trip successful");

    Ok(())
}
