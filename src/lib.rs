//! # rawlit
//!
//! Parse bracketed literal strings into typed Rust collections, maps and ranges.
//!
//! ## What is a literal?
//!
//! A literal is a compact textual encoding of a composite value:
//!
//! | Literal | Value |
//! |---------|-------|
//! | `[1, 2, 3]` | sequence |
//! | `['hello', 'there']` | sequence or set of text |
//! | `[5: 10, 6: 100]` | mapping |
//! | `[:]` | empty mapping |
//! | `1...3` | inclusive range |
//! | `0..<10` | half-open range |
//!
//! Literals nest: `[5: [10: 100], 6: [:]]` is a mapping of mappings. See the
//! [`format`] module for the full grammar.
//!
//! ## Key Features
//!
//! - **Explicit element parsers**: every operation takes the parser for its
//!   elements as a closure, so any `FromStr` type or custom rule can be plugged in
//! - **Typed defaults**: [`FromLiteral`] reads nested types such as
//!   `Vec<HashMap<String, RangeInclusive<f64>>>` with no closures at all
//! - **Strict mappings**: a repeated key is an [`Error::DuplicateKey`], never a
//!   silent overwrite
//! - **Raw-value enums**: [`literal_enum!`] pairs enum cases with literal values
//! - **Serde support**: [`Literal`] and [`as_literal`] keep literals as strings in
//!   any serde format
//!
//! ## Quick Start
//!
//! ```rust
//! use rawlit::{parse_mapping, parse_range, parse_sequence, Parser};
//!
//! let parser = Parser::default();
//!
//! let nested = parse_sequence("[[1, 2, 3], [2], [3]]", |row| {
//!     parse_sequence(row, |n| parser.scalar::<i32>(n))
//! })
//! .unwrap();
//! assert_eq!(nested, vec![vec![1, 2, 3], vec![2], vec![3]]);
//!
//! let map = parse_mapping("[5: 10, 6: 100]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v)).unwrap();
//! assert_eq!(map[&5], 10);
//!
//! let range = parse_range("1.0...inf", |b| parser.scalar::<f64>(b), true).unwrap();
//! assert_eq!(*range.end(), f64::INFINITY);
//! ```
//!
//! ### Typed parsing
//!
//! ```rust
//! use rawlit::{from_literal, to_literal};
//! use std::collections::HashSet;
//!
//! let words: HashSet<String> = from_literal("['hello', 'there']").unwrap();
//! assert!(words.contains("hello"));
//!
//! let grid: Vec<Vec<i32>> = from_literal("[[1, 2], []]").unwrap();
//! assert_eq!(to_literal(&grid).unwrap(), "[[1, 2], []]");
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - No panics on malformed input; every failure is an [`Error`]
//! - No partially built containers: the first bad element fails the whole literal
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parsing and writing literals
//! - **`raw_value_enums.rs`** - enums with literal raw values
//! - **`custom_options.rs`** - delimiters, quotes and strictness
//! - **`serde_fields.rs`** - literals inside JSON documents
//!
//! Run any example with: `cargo run --example <name>`

pub mod de;
pub mod error;
pub mod format;
pub mod literal;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod range;
mod scalar;
pub mod ser;
mod token;

pub use de::Literal;
pub use error::{Error, Result};
pub use literal::FromLiteral;
pub use map::UniqueInsert;
pub use options::{Delimiter, LiteralOptions};
pub use parser::Parser;
pub use range::{LiteralRange, RangeKind};
pub use ser::{ToLiteral, Writer};

use indexmap::IndexMap;
use std::collections::HashSet;
use std::hash::Hash;

/// Serde adapter for `#[serde(with = "rawlit::as_literal")]`.
///
/// The field is written as its literal string and read back through [`FromLiteral`].
pub mod as_literal {
    pub use crate::de::deserialize;
    pub use crate::ser::serialize;
}

/// Parses a sequence literal with default options.
///
/// # Examples
///
/// ```rust
/// use rawlit::{parse_sequence, Parser};
///
/// let parser = Parser::default();
/// let words = parse_sequence("['hello', 'there']", |t| parser.text(t)).unwrap();
/// assert_eq!(words, vec!["hello", "there"]);
/// ```
///
/// # Errors
///
/// Returns an error if the literal is malformed or any element fails to parse.
pub fn parse_sequence<T, F>(literal: &str, element: F) -> Result<Vec<T>>
where
    F: FnMut(&str) -> Result<T>,
{
    Parser::default().sequence(literal, element)
}

/// Parses a set literal with default options.
///
/// # Errors
///
/// Returns an error if the literal is malformed or any element fails to parse.
pub fn parse_set<T, F>(literal: &str, element: F) -> Result<HashSet<T>>
where
    T: Eq + Hash,
    F: FnMut(&str) -> Result<T>,
{
    Parser::default().set(literal, element)
}

/// Parses a mapping literal with default options.
///
/// # Errors
///
/// Returns an error if the literal is malformed, a key or value fails to parse,
/// or a key appears twice.
pub fn parse_mapping<K, V, FK, FV>(literal: &str, key: FK, value: FV) -> Result<IndexMap<K, V>>
where
    K: Hash + Eq,
    FK: FnMut(&str) -> Result<K>,
    FV: FnMut(&str) -> Result<V>,
{
    Parser::default().mapping(literal, key, value)
}

/// Parses a range literal: `lower...upper` when `inclusive`, `lower..<upper` otherwise.
///
/// # Examples
///
/// ```rust
/// use rawlit::{parse_range, LiteralRange, Parser};
///
/// let parser = Parser::default();
/// let range = parse_range("1...3", |b| parser.scalar::<i32>(b), true).unwrap();
/// assert_eq!(range, LiteralRange::Inclusive(1..=3));
///
/// assert!(parse_range("1...3", |b| parser.scalar::<i32>(b), false).is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the operator is missing, a bound fails to parse, or the
/// lower bound exceeds the upper bound.
pub fn parse_range<B, F>(literal: &str, bound: F, inclusive: bool) -> Result<LiteralRange<B>>
where
    B: PartialOrd,
    F: FnMut(&str) -> Result<B>,
{
    Parser::default().range(literal, RangeKind::from(inclusive), bound)
}

/// Parses a literal into any [`FromLiteral`] type with default options.
///
/// # Examples
///
/// ```rust
/// use rawlit::from_literal;
/// use std::collections::BTreeMap;
///
/// let map: BTreeMap<i32, BTreeMap<i32, i32>> =
///     from_literal("[5: [10: 100, 1: 1000], 6: [100: 1000, 10: 10000]]").unwrap();
/// assert_eq!(map[&6][&10], 10000);
/// ```
///
/// # Errors
///
/// Returns an error if the literal is not valid for `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_literal<T: FromLiteral>(literal: &str) -> Result<T> {
    from_literal_with_options(literal, LiteralOptions::default())
}

/// Parses a literal into any [`FromLiteral`] type with custom options.
///
/// # Errors
///
/// Returns an error if the literal is not valid for `T` under `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_literal_with_options<T: FromLiteral>(literal: &str, options: LiteralOptions) -> Result<T> {
    Parser::new(options).parse(literal)
}

/// Writes a value as a literal string with default options.
///
/// # Examples
///
/// ```rust
/// use rawlit::to_literal;
///
/// assert_eq!(to_literal(&vec!["hello", "there"]).unwrap(), "['hello', 'there']");
/// assert_eq!(to_literal(&(1..=3)).unwrap(), "1...3");
/// ```
///
/// # Errors
///
/// Returns an error if the value holds text that cannot be written as a literal.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_literal<T>(value: &T) -> Result<String>
where
    T: ?Sized + ToLiteral,
{
    to_literal_with_options(value, LiteralOptions::default())
}

/// Writes a value as a literal string with custom options.
///
/// # Errors
///
/// Returns an error if the value holds text that cannot be written under `options`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_literal_with_options<T>(value: &T, options: LiteralOptions) -> Result<String>
where
    T: ?Sized + ToLiteral,
{
    let mut writer = Writer::new(options);
    value.write_literal(&mut writer)?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_parse_sequence_of_sequences() {
        let parser = Parser::default();
        let value = parse_sequence("[[1, 2, 3], [2], [3]]", |row| {
            parse_sequence(row, |n| parser.scalar::<i64>(n))
        })
        .unwrap();
        assert_eq!(value, vec![vec![1, 2, 3], vec![2], vec![3]]);
    }

    #[test]
    fn test_parse_set_of_text() {
        let parser = Parser::default();
        let value = parse_set("['hello', 'there']", |t| parser.text(t)).unwrap();
        let expected: HashSet<String> = ["there".to_string(), "hello".to_string()].into();
        assert_eq!(value, expected);
    }

    #[test]
    fn test_parse_mapping_matches_regardless_of_order() {
        let parser = Parser::default();
        let a = parse_mapping("[5:10, 6:100]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v)).unwrap();
        let b = parse_mapping("[6:100, 5:10]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v)).unwrap();
        assert_eq!(a, b);

        let expected: HashMap<i32, i32> = [(5, 10), (6, 100)].into();
        assert_eq!(a.into_iter().collect::<HashMap<_, _>>(), expected);
    }

    #[test]
    fn test_parse_range_kinds() {
        let parser = Parser::default();
        let range = parse_range("1..<3", |b| parser.scalar::<i32>(b), false).unwrap();
        assert_eq!(range.into_exclusive(), Some(1..3));
    }

    #[test]
    fn test_with_options() {
        let options = LiteralOptions::new().with_delimiter(Delimiter::Semicolon);
        let value: Vec<String> = from_literal_with_options("['a, b'; c]", options.clone()).unwrap();
        assert_eq!(value, vec!["a, b", "c"]);
        assert_eq!(to_literal_with_options(&value, options).unwrap(), "['a, b'; 'c']");
    }

    #[test]
    fn test_empty_containers() {
        assert!(from_literal::<Vec<i32>>("[]").unwrap().is_empty());
        assert!(from_literal::<HashMap<i32, i32>>("[:]").unwrap().is_empty());
        assert!(from_literal::<Vec<i32>>("[:]").is_err());
    }
}
