//! Literal rendering.
//!
//! This module provides [`ToLiteral`], the inverse of [`FromLiteral`](crate::FromLiteral):
//! it writes a value back out as the literal string that parses to it.
//!
//! ## Output Format
//!
//! - **Sequences and sets**: `[a, b, c]`
//! - **Mappings**: `[k: v, k: v]`, and `[:]` when empty
//! - **Ranges**: `lower...upper` and `lower..<upper`
//! - **Text**: wrapped in the configured quote character, `'hello'`
//!
//! ## Usage
//!
//! ```rust
//! use rawlit::{from_literal, to_literal};
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! map.insert(5, vec![1, 2]);
//! map.insert(6, vec![]);
//!
//! let literal = to_literal(&map).unwrap();
//! assert_eq!(literal, "[5: [1, 2], 6: []]");
//!
//! let back: BTreeMap<i32, Vec<i32>> = from_literal(&literal).unwrap();
//! assert_eq!(back, map);
//! ```
//!
//! ## Direct Writer Usage
//!
//! ```rust
//! use rawlit::{Delimiter, LiteralOptions, ToLiteral, Writer};
//!
//! let mut writer = Writer::new(LiteralOptions::new().with_delimiter(Delimiter::Pipe));
//! vec!["a", "b"].write_literal(&mut writer).unwrap();
//! assert_eq!(writer.into_inner(), "['a' | 'b']");
//! ```

use crate::range::{LiteralRange, RangeKind};
use crate::{Error, LiteralOptions, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::{IndexMap, IndexSet};
use num_bigint::{BigInt, BigUint};
use serde::Serializer;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ops::{Range, RangeInclusive};

/// Accumulates literal text.
///
/// Created via [`Writer::new`]; the finished literal is taken with [`Writer::into_inner`].
pub struct Writer {
    output: String,
    options: LiteralOptions,
}

impl Writer {
    pub fn new(options: LiteralOptions) -> Self {
        Writer {
            output: String::with_capacity(64),
            options,
        }
    }

    pub fn options(&self) -> &LiteralOptions {
        &self.options
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    /// Appends text as-is.
    pub fn write_raw(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Appends a text scalar in quotes.
    ///
    /// Fails for text that would not read back as the same string: text holding the
    /// quote character, or, with quoting off, text holding structural characters or
    /// surrounding whitespace.
    pub fn write_text(&mut self, s: &str) -> Result<()> {
        match self.options.quote {
            Some(quote) => {
                if s.contains(quote) {
                    return Err(Error::custom(format!(
                        "text {:?} contains the quote character {:?}",
                        s, quote
                    )));
                }
                self.output.push(quote);
                self.output.push_str(s);
                self.output.push(quote);
            }
            None => {
                let delimiter = self.options.delimiter.as_char();
                if s.is_empty()
                    || s.trim() != s
                    || s.contains(|ch: char| ch == delimiter || matches!(ch, ':' | '[' | ']'))
                {
                    return Err(Error::custom(format!(
                        "text {:?} cannot be written without quotes",
                        s
                    )));
                }
                self.output.push_str(s);
            }
        }
        Ok(())
    }

    /// Appends `[a, b, ...]`.
    pub fn write_sequence<'a, T, I>(&mut self, items: I) -> Result<()>
    where
        T: ToLiteral + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        self.output.push('[');
        for (i, item) in items.into_iter().enumerate() {
            if i > 0 {
                self.output.push_str(self.options.delimiter.as_str());
            }
            item.write_literal(self)?;
        }
        self.output.push(']');
        Ok(())
    }

    /// Appends `[k: v, ...]`, or `[:]` for no entries.
    pub fn write_mapping<'a, K, V, I>(&mut self, entries: I) -> Result<()>
    where
        K: ToLiteral + ?Sized + 'a,
        V: ToLiteral + ?Sized + 'a,
        I: IntoIterator<Item = (&'a K, &'a V)>,
    {
        let mut entries = entries.into_iter().peekable();
        if entries.peek().is_none() {
            self.output.push_str("[:]");
            return Ok(());
        }

        self.output.push('[');
        for (i, (key, value)) in entries.enumerate() {
            if i > 0 {
                self.output.push_str(self.options.delimiter.as_str());
            }
            key.write_literal(self)?;
            self.output.push_str(": ");
            value.write_literal(self)?;
        }
        self.output.push(']');
        Ok(())
    }

    /// Appends `lower...upper` or `lower..<upper`.
    pub fn write_range<B: ToLiteral>(&mut self, lower: &B, upper: &B, kind: RangeKind) -> Result<()> {
        lower.write_literal(self)?;
        self.output.push_str(kind.operator());
        upper.write_literal(self)
    }
}

/// A value that can be written as a literal string.
pub trait ToLiteral {
    fn write_literal(&self, writer: &mut Writer) -> Result<()>;
}

macro_rules! display_to_literal {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ToLiteral for $ty {
                fn write_literal(&self, writer: &mut Writer) -> Result<()> {
                    writer.write_raw(&self.to_string());
                    Ok(())
                }
            }
        )*
    };
}

display_to_literal!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

display_to_literal!(BigInt, BigUint, NaiveDate);

// Timestamps contain `:`, so they are quoted like text to stay readable as map keys.
impl ToLiteral for NaiveDateTime {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_text(&self.format("%Y-%m-%dT%H:%M:%S%.f").to_string())
    }
}

impl ToLiteral for DateTime<Utc> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_text(&self.to_rfc3339())
    }
}

impl ToLiteral for str {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_text(self)
    }
}

impl ToLiteral for String {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_text(self)
    }
}

impl ToLiteral for char {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_text(self.encode_utf8(&mut [0; 4]))
    }
}

impl<T: ToLiteral + ?Sized> ToLiteral for &T {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        (**self).write_literal(writer)
    }
}

impl<T: ToLiteral> ToLiteral for [T] {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_sequence(self)
    }
}

impl<T: ToLiteral> ToLiteral for Vec<T> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_sequence(self)
    }
}

impl<T: ToLiteral, S> ToLiteral for HashSet<T, S> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_sequence(self)
    }
}

impl<T: ToLiteral> ToLiteral for BTreeSet<T> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_sequence(self)
    }
}

impl<T: ToLiteral, S> ToLiteral for IndexSet<T, S> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_sequence(self)
    }
}

impl<K: ToLiteral, V: ToLiteral, S> ToLiteral for HashMap<K, V, S> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_mapping(self)
    }
}

impl<K: ToLiteral, V: ToLiteral> ToLiteral for BTreeMap<K, V> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_mapping(self)
    }
}

impl<K: ToLiteral, V: ToLiteral, S> ToLiteral for IndexMap<K, V, S> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_mapping(self)
    }
}

impl<B: ToLiteral> ToLiteral for RangeInclusive<B> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_range(self.start(), self.end(), RangeKind::Inclusive)
    }
}

impl<B: ToLiteral> ToLiteral for Range<B> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_range(&self.start, &self.end, RangeKind::Exclusive)
    }
}

impl<B: ToLiteral> ToLiteral for LiteralRange<B> {
    fn write_literal(&self, writer: &mut Writer) -> Result<()> {
        writer.write_range(self.start(), self.end(), self.kind())
    }
}

/// Serializes a value as its literal string. Use with `#[serde(serialize_with = "...")]`
/// or through [`as_literal`](crate::as_literal).
///
/// # Errors
///
/// Fails if the value holds text that cannot be written as a literal.
pub fn serialize<T, S>(value: &T, serializer: S) -> std::result::Result<S::Ok, S::Error>
where
    T: ToLiteral + ?Sized,
    S: Serializer,
{
    let literal = crate::to_literal(value).map_err(<S::Error as serde::ser::Error>::custom)?;
    serializer.serialize_str(&literal)
}
