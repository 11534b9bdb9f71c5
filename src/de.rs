//! Serde integration.
//!
//! Lets a literal string stand in for a structured value inside any serde format.
//! A config file can then keep `"[1, 2, 3]"` or `"0...100"` as a plain string
//! while the Rust side receives a typed `Vec` or range.
//!
//! ## Usage
//!
//! Wrap a field in [`Literal`], or keep the plain type and point serde at
//! [`as_literal`](crate::as_literal):
//!
//! ```rust
//! use rawlit::Literal;
//! use serde::{Deserialize, Serialize};
//! use std::ops::RangeInclusive;
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Spawn {
//!     #[serde(with = "rawlit::as_literal")]
//!     levels: RangeInclusive<u32>,
//!     weights: Literal<Vec<f64>>,
//! }
//!
//! let json = r#"{"levels":"1...10","weights":"[0.5, 0.25, 0.25]"}"#;
//! let spawn: Spawn = serde_json::from_str(json).unwrap();
//! assert_eq!(spawn.levels, 1..=10);
//! assert_eq!(spawn.weights.0, vec![0.5, 0.25, 0.25]);
//! ```

use crate::{FromLiteral, Parser, ToLiteral};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use std::ops::{Deref, DerefMut};

/// A value carried as a literal string in serialized form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Literal<T>(pub T);

impl<T> Literal<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Literal<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Literal<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> From<T> for Literal<T> {
    fn from(value: T) -> Self {
        Literal(value)
    }
}

impl<'de, T: FromLiteral> Deserialize<'de> for Literal<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize(deserializer).map(Literal)
    }
}

impl<T: ToLiteral> Serialize for Literal<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        crate::ser::serialize(&self.0, serializer)
    }
}

struct LiteralVisitor<T> {
    marker: PhantomData<T>,
}

impl<'de, T: FromLiteral> de::Visitor<'de> for LiteralVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a literal string")
    }

    fn visit_str<E>(self, v: &str) -> Result<T, E>
    where
        E: de::Error,
    {
        Parser::default().parse(v).map_err(E::custom)
    }
}

/// Deserializes a value from its literal string. Use with
/// `#[serde(deserialize_with = "...")]` or through [`as_literal`](crate::as_literal).
///
/// # Errors
///
/// Fails if the input is not a string or the string is not a valid literal for `T`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromLiteral,
{
    deserializer.deserialize_str(LiteralVisitor {
        marker: PhantomData,
    })
}
