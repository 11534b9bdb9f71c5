//! The [`FromLiteral`] trait and its implementations.
//!
//! `FromLiteral` gives a type a default way to be read from a literal, so that
//! [`from_literal`](crate::from_literal) can build arbitrarily nested values from
//! the target type alone. Containers ask their element types to parse each token,
//! which makes the nesting of the type drive the nesting of the parse.

use crate::map::UniqueInsert;
use crate::range::LiteralRange;
use crate::scalar::parse_quoted_scalar;
use crate::{Parser, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use num_bigint::{BigInt, BigUint};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::ops::{Range, RangeInclusive};

/// A type that can be parsed from a literal string.
///
/// # Implementing
///
/// Most scalar types only need to forward to [`Parser::scalar`]:
///
/// ```rust
/// use rawlit::{from_literal, FromLiteral, Parser, Result};
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// impl FromLiteral for Port {
///     fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
///         parser.scalar(literal).map(Port)
///     }
/// }
///
/// let ports: Vec<Port> = from_literal("[80, 443]").unwrap();
/// assert_eq!(ports, vec![Port(80), Port(443)]);
/// ```
pub trait FromLiteral: Sized {
    /// Parses `literal` using `parser`'s options for any nested literals.
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self>;
}

macro_rules! scalar_from_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromLiteral for $ty {
                fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
                    parser.scalar(literal)
                }
            }
        )*
    };
}

scalar_from_literal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

scalar_from_literal!(BigInt, BigUint, NaiveDate);

impl FromLiteral for NaiveDateTime {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parse_quoted_scalar(literal, parser.options())
    }
}

impl FromLiteral for DateTime<Utc> {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parse_quoted_scalar(literal, parser.options())
    }
}

impl FromLiteral for String {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.text(literal)
    }
}

impl FromLiteral for char {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.character(literal)
    }
}

impl<T: FromLiteral> FromLiteral for Vec<T> {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.sequence(literal, |token| T::from_literal(token, parser))
    }
}

impl<T, S> FromLiteral for HashSet<T, S>
where
    T: FromLiteral + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.set_into(literal, |token| T::from_literal(token, parser))
    }
}

impl<T: FromLiteral + Ord> FromLiteral for BTreeSet<T> {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.set_into(literal, |token| T::from_literal(token, parser))
    }
}

impl<T, S> FromLiteral for IndexSet<T, S>
where
    T: FromLiteral + Eq + Hash,
    S: BuildHasher + Default,
{
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.set_into(literal, |token| T::from_literal(token, parser))
    }
}

fn map_from_literal<M, K, V>(literal: &str, parser: &Parser) -> Result<M>
where
    M: UniqueInsert<K, V>,
    K: FromLiteral,
    V: FromLiteral,
{
    parser.mapping_into(
        literal,
        |token| K::from_literal(token, parser),
        |token| V::from_literal(token, parser),
    )
}

impl<K, V, S> FromLiteral for HashMap<K, V, S>
where
    K: FromLiteral + Eq + Hash,
    V: FromLiteral,
    S: BuildHasher + Default,
{
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        map_from_literal::<Self, K, V>(literal, parser)
    }
}

impl<K, V, S> FromLiteral for IndexMap<K, V, S>
where
    K: FromLiteral + Eq + Hash,
    V: FromLiteral,
    S: BuildHasher + Default,
{
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        map_from_literal::<Self, K, V>(literal, parser)
    }
}

impl<K: FromLiteral + Ord, V: FromLiteral> FromLiteral for BTreeMap<K, V> {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        map_from_literal::<Self, K, V>(literal, parser)
    }
}

impl<B: FromLiteral + PartialOrd> FromLiteral for RangeInclusive<B> {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.closed_range(literal, |token| B::from_literal(token, parser))
    }
}

impl<B: FromLiteral + PartialOrd> FromLiteral for Range<B> {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.half_open_range(literal, |token| B::from_literal(token, parser))
    }
}

impl<B: FromLiteral + PartialOrd> FromLiteral for LiteralRange<B> {
    fn from_literal(literal: &str, parser: &Parser) -> Result<Self> {
        parser.any_range(literal, |token| B::from_literal(token, parser))
    }
}
