//! Delimiters, quoting and strictness.
//!
//! Run with: cargo run --example custom_options

use rawlit::{from_literal_with_options, to_literal_with_options, Delimiter, LiteralOptions};
use std::collections::BTreeMap;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let data = vec![vec!["a, b".to_string(), "c".to_string()], vec![]];

    // Comma delimiter (default)
    let comma = LiteralOptions::new();
    println!("comma:     {}", to_literal_with_options(&data, comma)?);

    // Pipe delimiter
    let pipe = LiteralOptions::new().with_delimiter(Delimiter::Pipe);
    let literal = to_literal_with_options(&data, pipe.clone())?;
    println!("pipe:      {}", literal);
    let back: Vec<Vec<String>> = from_literal_with_options(&literal, pipe)?;
    assert_eq!(back, data);

    // Double quotes, so text may contain apostrophes
    let double = LiteralOptions::new().with_quote('"');
    let names: Vec<String> = from_literal_with_options(r#"["it's", "fine"]"#, double)?;
    println!("quoted:    {:?}", names);

    // Trailing delimiter accepted
    let lenient = LiteralOptions::new().with_trailing_delimiter(true);
    let map: BTreeMap<u8, u8> = from_literal_with_options("[1: 2, 3: 4,]", lenient)?;
    println!("trailing:  {:?}", map);

    // Strict quoting rejects bare text
    let strict = LiteralOptions::strict();
    match from_literal_with_options::<Vec<String>>("['ok', bare]", strict) {
        Ok(v) => println!("strict:    {:?}", v),
        Err(err) => println!("strict:    {}", err),
    }

    Ok(())
}
