//! Basic literal parsing and writing.
//!
//! Run with: cargo run --example simple

use rawlit::{from_literal, parse_mapping, parse_range, parse_sequence, to_literal, Parser};
use std::collections::BTreeMap;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let parser = Parser::default();

    // Explicit element parsers, one closure per nesting level
    let grid = parse_sequence("[[1, 2, 3], [2], [3], []]", |row| {
        parse_sequence(row, |n| parser.scalar::<i32>(n))
    })?;
    println!("grid: {:?}", grid);

    let scores = parse_mapping(
        "['alice': 10, 'bob': 7]",
        |k| parser.text(k),
        |v| parser.scalar::<u32>(v),
    )?;
    println!("scores: {:?}", scores);

    let band = parse_range("1.0...inf", |b| parser.scalar::<f64>(b), true)?;
    println!("band: {} (contains 1e300: {})", band, band.contains(&1e300));

    // The target type drives the parse
    let nested: BTreeMap<i32, BTreeMap<i32, i32>> =
        from_literal("[5:[10:100, 1:1000], 6:[100:1000, 10:10000]]")?;
    println!("nested: {:?}", nested);

    // And back again
    let literal = to_literal(&nested)?;
    println!("literal: {}", literal);
    let back: BTreeMap<i32, BTreeMap<i32, i32>> = from_literal(&literal)?;
    assert_eq!(nested, back);
    println!("✓ Round-trip successful");

    // Repeated keys are reported, not overwritten
    match from_literal::<BTreeMap<i32, i32>>("[5:10, 5:20]") {
        Ok(_) => println!("unexpected success"),
        Err(err) => println!("rejected: {}", err),
    }

    Ok(())
}
