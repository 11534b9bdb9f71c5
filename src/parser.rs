//! Literal parser.
//!
//! [`Parser`] turns literal strings into typed containers. Each operation takes
//! the parser for its elements explicitly, as a closure over one token. The
//! closure may itself call back into the parser, which is how nested literals
//! are read:
//!
//! ```rust
//! use rawlit::Parser;
//!
//! let parser = Parser::default();
//! let grid = parser
//!     .sequence("[[1, 2, 3], [2], [3]]", |row| parser.sequence(row, |n| parser.scalar::<i32>(n)))
//!     .unwrap();
//! assert_eq!(grid, vec![vec![1, 2, 3], vec![2], vec![3]]);
//! ```
//!
//! Types implementing [`FromLiteral`] carry a default element parser, so the same
//! literal can be read with [`Parser::parse`]:
//!
//! ```rust
//! use rawlit::Parser;
//!
//! let grid: Vec<Vec<i32>> = Parser::default().parse("[[1, 2, 3], [2], [3]]").unwrap();
//! assert_eq!(grid, vec![vec![1, 2, 3], vec![2], vec![3]]);
//! ```

use crate::map::UniqueInsert;
use crate::range::{build_range, parse_bounds, LiteralRange, RangeKind};
use crate::scalar::{parse_char, parse_scalar, parse_text};
use crate::token::{split_elements, split_entries, strip_brackets};
use crate::{Error, FromLiteral, LiteralOptions, Result};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::ops::{Range, RangeInclusive};
use std::str::FromStr;
use tracing::{debug, trace};

/// Reads literal strings with a fixed set of [`LiteralOptions`].
///
/// A `Parser` holds no state besides its options; one instance can parse any
/// number of literals, from any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Parser {
    options: LiteralOptions,
}

impl Parser {
    #[must_use]
    pub fn new(options: LiteralOptions) -> Self {
        Parser { options }
    }

    #[must_use]
    pub fn options(&self) -> &LiteralOptions {
        &self.options
    }

    /// Parses a literal into any [`FromLiteral`] type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Parser;
    /// use std::collections::HashMap;
    ///
    /// let map: HashMap<i32, HashMap<i32, i32>> = Parser::default()
    ///     .parse("[5: [10: 100, 1: 1000], 6: [:]]")
    ///     .unwrap();
    /// assert_eq!(map[&5][&1], 1000);
    /// assert!(map[&6].is_empty());
    /// ```
    pub fn parse<T: FromLiteral>(&self, literal: &str) -> Result<T> {
        T::from_literal(literal, self)
    }

    /// Parses a scalar token with `T`'s `FromStr` implementation.
    ///
    /// Surrounding whitespace is ignored. For floats, `"inf"` is positive infinity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Parser;
    ///
    /// let parser = Parser::default();
    /// assert_eq!(parser.scalar::<u16>(" 8080 ").unwrap(), 8080);
    /// assert_eq!(parser.scalar::<f64>("inf").unwrap(), f64::INFINITY);
    /// assert!(parser.scalar::<u8>("256").is_err());
    /// ```
    pub fn scalar<T>(&self, token: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        parse_scalar(token)
    }

    /// Parses a text token, removing one pair of surrounding quote characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Parser;
    ///
    /// let parser = Parser::default();
    /// assert_eq!(parser.text("'hello'").unwrap(), "hello");
    /// assert_eq!(parser.text("plain").unwrap(), "plain");
    /// ```
    pub fn text(&self, token: &str) -> Result<String> {
        parse_text(token, &self.options).map(str::to_string)
    }

    /// Parses a token holding exactly one character.
    pub fn character(&self, token: &str) -> Result<char> {
        parse_char(token, &self.options)
    }

    /// Parses a sequence literal `[a, b, ...]`, keeping element order.
    ///
    /// `element` is called once per top-level element token. The first error it
    /// returns fails the whole literal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Parser;
    ///
    /// let parser = Parser::default();
    /// let words = parser.sequence("['hello', 'there']", |t| parser.text(t)).unwrap();
    /// assert_eq!(words, vec!["hello", "there"]);
    ///
    /// let empty = parser.sequence("[]", |t| parser.scalar::<i32>(t)).unwrap();
    /// assert!(empty.is_empty());
    /// ```
    pub fn sequence<T, F>(&self, literal: &str, element: F) -> Result<Vec<T>>
    where
        F: FnMut(&str) -> Result<T>,
    {
        let inner = strip_brackets(literal, &self.options)?;
        let tokens = split_elements(inner, &self.options)?;
        trace!(literal, elements = tokens.len(), "parsing sequence literal");
        tokens.into_iter().map(element).collect()
    }

    /// Parses a set literal `[a, b, ...]` into a [`HashSet`]. Repeated elements collapse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Parser;
    ///
    /// let parser = Parser::default();
    /// let set = parser.set("['hello', 'there', 'hello']", |t| parser.text(t)).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(set.contains("there"));
    /// ```
    pub fn set<T, F>(&self, literal: &str, element: F) -> Result<HashSet<T>>
    where
        T: Eq + Hash,
        F: FnMut(&str) -> Result<T>,
    {
        self.set_into(literal, element)
    }

    /// Parses a set literal into any collection built from an iterator, such as a
    /// `BTreeSet` or `IndexSet`.
    pub fn set_into<C, T, F>(&self, literal: &str, element: F) -> Result<C>
    where
        C: FromIterator<T>,
        F: FnMut(&str) -> Result<T>,
    {
        Ok(self.sequence(literal, element)?.into_iter().collect())
    }

    /// Parses a mapping literal `[k: v, ...]` into an [`IndexMap`] in literal order.
    ///
    /// `[:]` and `[]` are the empty mapping. A key that appears twice fails with
    /// [`Error::DuplicateKey`]; no value is silently dropped.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::{Error, Parser};
    ///
    /// let parser = Parser::default();
    /// let map = parser
    ///     .mapping("[5: 10, 6: 100]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v))
    ///     .unwrap();
    /// assert_eq!(map[&6], 100);
    ///
    /// let err = parser
    ///     .mapping("[5: 10, 5: 20]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v))
    ///     .unwrap_err();
    /// assert!(err.is_duplicate_key());
    /// ```
    pub fn mapping<K, V, FK, FV>(&self, literal: &str, key: FK, value: FV) -> Result<IndexMap<K, V>>
    where
        K: Hash + Eq,
        FK: FnMut(&str) -> Result<K>,
        FV: FnMut(&str) -> Result<V>,
    {
        self.mapping_into(literal, key, value)
    }

    /// Parses a mapping literal into any [`UniqueInsert`] map.
    pub fn mapping_into<M, K, V, FK, FV>(&self, literal: &str, mut key: FK, mut value: FV) -> Result<M>
    where
        M: UniqueInsert<K, V>,
        FK: FnMut(&str) -> Result<K>,
        FV: FnMut(&str) -> Result<V>,
    {
        let inner = strip_brackets(literal, &self.options)?;
        let entries = split_entries(inner, &self.options)?;
        trace!(literal, entries = entries.len(), "parsing mapping literal");

        let mut map = M::with_expected_len(entries.len());
        for (key_token, value_token) in entries {
            let k = key(key_token)?;
            let v = value(value_token)?;
            if map.insert_unique(k, v).is_err() {
                debug!(literal, key = key_token, "rejecting mapping literal with duplicate key");
                return Err(Error::duplicate_key(key_token));
            }
        }
        Ok(map)
    }

    /// Parses a range literal of the given kind, `lower...upper` or `lower..<upper`.
    ///
    /// Both bounds go through `bound`. The lower bound must not exceed the upper one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::{LiteralRange, Parser, RangeKind};
    ///
    /// let parser = Parser::default();
    /// let range = parser.range("0..<10", RangeKind::Exclusive, |b| parser.scalar::<u8>(b)).unwrap();
    /// assert_eq!(range, LiteralRange::Exclusive(0..10));
    /// ```
    pub fn range<B, F>(&self, literal: &str, kind: RangeKind, bound: F) -> Result<LiteralRange<B>>
    where
        B: PartialOrd,
        F: FnMut(&str) -> Result<B>,
    {
        build_range(literal, kind, self.options.quote, bound)
    }

    /// Parses a range literal using whichever operator it contains first.
    ///
    /// Operators inside quoted bounds are skipped.
    pub fn any_range<B, F>(&self, literal: &str, bound: F) -> Result<LiteralRange<B>>
    where
        B: PartialOrd,
        F: FnMut(&str) -> Result<B>,
    {
        let kind = RangeKind::detect_quoted(literal, self.options.quote).ok_or_else(|| {
            Error::missing_range_operator(literal.trim(), RangeKind::Inclusive.operator())
        })?;
        self.range(literal, kind, bound)
    }

    /// Parses an inclusive range literal `lower...upper`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Parser;
    ///
    /// let parser = Parser::default();
    /// let range = parser.closed_range("1.0...inf", |b| parser.scalar::<f64>(b)).unwrap();
    /// assert_eq!(*range.start(), 1.0);
    /// assert_eq!(*range.end(), f64::INFINITY);
    /// ```
    pub fn closed_range<B, F>(&self, literal: &str, bound: F) -> Result<RangeInclusive<B>>
    where
        B: PartialOrd,
        F: FnMut(&str) -> Result<B>,
    {
        let (lower, upper) = parse_bounds(literal, RangeKind::Inclusive, self.options.quote, bound)?;
        Ok(lower..=upper)
    }

    /// Parses a half-open range literal `lower..<upper`.
    pub fn half_open_range<B, F>(&self, literal: &str, bound: F) -> Result<Range<B>>
    where
        B: PartialOrd,
        F: FnMut(&str) -> Result<B>,
    {
        let (lower, upper) = parse_bounds(literal, RangeKind::Exclusive, self.options.quote, bound)?;
        Ok(lower..upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Delimiter;
    use std::collections::{BTreeMap, BTreeSet};

    #[test]
    fn test_sequence_keeps_order() {
        let parser = Parser::default();
        let values = parser.sequence("[3, 1, 2]", |t| parser.scalar::<i32>(t)).unwrap();
        assert_eq!(values, vec![3, 1, 2]);
    }

    #[test]
    fn test_sequence_element_failure_fails_all() {
        let parser = Parser::default();
        let result = parser.sequence("[1, two, 3]", |t| parser.scalar::<i32>(t));
        assert!(matches!(result, Err(Error::InvalidScalar { ref token, .. }) if token == "two"));
    }

    #[test]
    fn test_nested_depth_must_match() {
        let parser = Parser::default();
        assert!(parser.sequence("[[1], [2]]", |t| parser.scalar::<i32>(t)).is_err());
        assert!(parser
            .sequence("[1, 2]", |t| parser.sequence(t, |n| parser.scalar::<i32>(n)))
            .is_err());
    }

    #[test]
    fn test_nested_with_empty_inner() {
        let parser = Parser::default();
        let values = parser
            .sequence("[[1, 2, 3], [2], [3], []]", |row| {
                parser.sequence(row, |n| parser.scalar::<i32>(n))
            })
            .unwrap();
        assert_eq!(values, vec![vec![1, 2, 3], vec![2], vec![3], vec![]]);
    }

    #[test]
    fn test_set_into_btree() {
        let parser = Parser::default();
        let set: BTreeSet<i32> = parser.set_into("[3, 1, 3, 2]", |t| parser.scalar(t)).unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_mapping_order_and_duplicates() {
        let parser = Parser::default();
        let map = parser
            .mapping("[b: 1, a: 2]", |k| parser.text(k), |v| parser.scalar::<i32>(v))
            .unwrap();
        assert_eq!(map.keys().cloned().collect::<Vec<_>>(), vec!["b", "a"]);

        let err = parser
            .mapping("[5:10, 5:20]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v))
            .unwrap_err();
        assert_eq!(err, Error::duplicate_key("5"));
    }

    #[test]
    fn test_duplicate_detected_after_key_parsing() {
        let parser = Parser::default();
        let err = parser
            .mapping_into::<BTreeMap<i32, i32>, _, _, _, _>(
                "[05: 1, 5: 2]",
                |k| parser.scalar(k),
                |v| parser.scalar(v),
            )
            .unwrap_err();
        assert_eq!(err, Error::duplicate_key("5"));
    }

    #[test]
    fn test_mapping_rejects_sequence_literal() {
        let parser = Parser::default();
        let result = parser.mapping("[1, 2]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v));
        assert_eq!(result, Err(Error::missing_separator("1")));
    }

    #[test]
    fn test_custom_delimiter() {
        let parser = Parser::new(LiteralOptions::new().with_delimiter(Delimiter::Semicolon));
        let map = parser
            .mapping("['a, b': 1; 'c': 2]", |k| parser.text(k), |v| parser.scalar::<u8>(v))
            .unwrap();
        assert_eq!(map["a, b"], 1);
        assert_eq!(map["c"], 2);
    }

    #[test]
    fn test_ranges() {
        let parser = Parser::default();
        assert_eq!(
            parser.closed_range("1...3", |b| parser.scalar::<i32>(b)).unwrap(),
            1..=3
        );
        assert_eq!(
            parser.half_open_range("1..<3", |b| parser.scalar::<i32>(b)).unwrap(),
            1..3
        );
        assert_eq!(
            parser.any_range("'a'...'f'", |b| parser.character(b)).unwrap(),
            LiteralRange::Inclusive('a'..='f')
        );
        assert!(matches!(
            parser.any_range("1..3", |b| parser.scalar::<i32>(b)),
            Err(Error::MissingRangeOperator { .. })
        ));
    }
}
