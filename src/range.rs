//! Range literals.
//!
//! A range literal is two bounds around an operator:
//!
//! | Operator | Kind | Rust type |
//! |----------|------|-----------|
//! | `...` | inclusive | [`RangeInclusive`] |
//! | `..<` | half-open | [`Range`] |
//!
//! ```rust
//! use rawlit::{from_literal, LiteralRange};
//! use std::ops::RangeInclusive;
//!
//! let closed: RangeInclusive<f64> = from_literal("1.0...inf").unwrap();
//! assert_eq!(*closed.end(), f64::INFINITY);
//!
//! let any: LiteralRange<i32> = from_literal("0..<10").unwrap();
//! assert!(any.contains(&9));
//! assert!(!any.contains(&10));
//! ```

use crate::token::top_level_offsets;
use crate::{Error, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Range, RangeInclusive};
use tracing::debug;

/// Which operator a range literal uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// `lower...upper`, both bounds included
    Inclusive,
    /// `lower..<upper`, upper bound excluded
    Exclusive,
}

impl RangeKind {
    /// Returns the operator text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::RangeKind;
    ///
    /// assert_eq!(RangeKind::Inclusive.operator(), "...");
    /// assert_eq!(RangeKind::Exclusive.operator(), "..<");
    /// ```
    #[must_use]
    pub const fn operator(&self) -> &'static str {
        match self {
            RangeKind::Inclusive => "...",
            RangeKind::Exclusive => "..<",
        }
    }

    /// Finds the kind of the first range operator in `literal` that is not
    /// inside `'` quotes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::RangeKind;
    ///
    /// assert_eq!(RangeKind::detect("1...3"), Some(RangeKind::Inclusive));
    /// assert_eq!(RangeKind::detect("1.5..<3"), Some(RangeKind::Exclusive));
    /// assert_eq!(RangeKind::detect("'a...b'..<'z'"), Some(RangeKind::Exclusive));
    /// assert_eq!(RangeKind::detect("1..3"), None);
    /// ```
    #[must_use]
    pub fn detect(literal: &str) -> Option<Self> {
        Self::detect_quoted(literal, Some('\''))
    }

    /// Like [`detect`](Self::detect), with the quote character given explicitly.
    /// `None` makes every operator count.
    #[must_use]
    pub fn detect_quoted(literal: &str, quote: Option<char>) -> Option<Self> {
        top_level_offsets(literal, quote).find_map(|i| {
            let rest = &literal[i..];
            if rest.starts_with(RangeKind::Inclusive.operator()) {
                Some(RangeKind::Inclusive)
            } else if rest.starts_with(RangeKind::Exclusive.operator()) {
                Some(RangeKind::Exclusive)
            } else {
                None
            }
        })
    }

    /// Byte offset of the first operator of this kind outside quotes and brackets.
    fn find_in(&self, literal: &str, quote: Option<char>) -> Option<usize> {
        top_level_offsets(literal, quote).find(|&i| literal[i..].starts_with(self.operator()))
    }
}

impl From<bool> for RangeKind {
    /// `true` is inclusive, `false` half-open.
    fn from(inclusive: bool) -> Self {
        if inclusive {
            RangeKind::Inclusive
        } else {
            RangeKind::Exclusive
        }
    }
}

/// A parsed range that remembers which operator it was written with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LiteralRange<B> {
    Inclusive(RangeInclusive<B>),
    Exclusive(Range<B>),
}

impl<B> LiteralRange<B> {
    #[must_use]
    pub const fn kind(&self) -> RangeKind {
        match self {
            LiteralRange::Inclusive(_) => RangeKind::Inclusive,
            LiteralRange::Exclusive(_) => RangeKind::Exclusive,
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn start(&self) -> &B {
        match self {
            LiteralRange::Inclusive(range) => range.start(),
            LiteralRange::Exclusive(range) => &range.start,
        }
    }

    /// Upper bound, included or not depending on [`kind`](Self::kind).
    #[must_use]
    pub fn end(&self) -> &B {
        match self {
            LiteralRange::Inclusive(range) => range.end(),
            LiteralRange::Exclusive(range) => &range.end,
        }
    }

    /// The inclusive range, or `None` for a half-open one.
    pub fn into_inclusive(self) -> Option<RangeInclusive<B>> {
        match self {
            LiteralRange::Inclusive(range) => Some(range),
            LiteralRange::Exclusive(_) => None,
        }
    }

    /// The half-open range, or `None` for an inclusive one.
    pub fn into_exclusive(self) -> Option<Range<B>> {
        match self {
            LiteralRange::Inclusive(_) => None,
            LiteralRange::Exclusive(range) => Some(range),
        }
    }
}

impl<B: PartialOrd> LiteralRange<B> {
    #[must_use]
    pub fn contains(&self, item: &B) -> bool {
        match self {
            LiteralRange::Inclusive(range) => range.contains(item),
            LiteralRange::Exclusive(range) => range.contains(item),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            LiteralRange::Inclusive(range) => range.is_empty(),
            LiteralRange::Exclusive(range) => range.is_empty(),
        }
    }

    /// Returns `true` if some value lies in both ranges.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::LiteralRange;
    ///
    /// let a = LiteralRange::Inclusive(1..=3);
    /// let b = LiteralRange::Inclusive(3..=5);
    /// let c = LiteralRange::Exclusive(1..3);
    /// assert!(a.overlaps(&b));
    /// assert!(!c.overlaps(&b));
    /// ```
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && other.admits_up_to(self.start())
            && self.admits_up_to(other.start())
    }

    /// `point` is not past the upper end of this range.
    fn admits_up_to(&self, point: &B) -> bool {
        match self {
            LiteralRange::Inclusive(range) => point <= range.end(),
            LiteralRange::Exclusive(range) => *point < range.end,
        }
    }
}

impl<B> From<RangeInclusive<B>> for LiteralRange<B> {
    fn from(range: RangeInclusive<B>) -> Self {
        LiteralRange::Inclusive(range)
    }
}

impl<B> From<Range<B>> for LiteralRange<B> {
    fn from(range: Range<B>) -> Self {
        LiteralRange::Exclusive(range)
    }
}

impl<B: fmt::Display> fmt::Display for LiteralRange<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.start(), self.kind().operator(), self.end())
    }
}

/// Splits a range literal on the first `kind` operator outside quotes into
/// trimmed bound tokens.
pub(crate) fn split_range(literal: &str, kind: RangeKind, quote: Option<char>) -> Result<(&str, &str)> {
    let at = kind
        .find_in(literal, quote)
        .ok_or_else(|| Error::missing_range_operator(literal.trim(), kind.operator()))?;

    let lower = literal[..at].trim();
    let upper = literal[at + kind.operator().len()..].trim();
    if lower.is_empty() {
        return Err(Error::missing_bound("lower"));
    }
    if upper.is_empty() {
        return Err(Error::missing_bound("upper"));
    }
    Ok((lower, upper))
}

/// Parses both bounds with `bound` and checks `lower <= upper`.
pub(crate) fn parse_bounds<B, F>(
    literal: &str,
    kind: RangeKind,
    quote: Option<char>,
    mut bound: F,
) -> Result<(B, B)>
where
    B: PartialOrd,
    F: FnMut(&str) -> Result<B>,
{
    let (lower_token, upper_token) = split_range(literal, kind, quote)?;
    let lower = bound(lower_token)?;
    let upper = bound(upper_token)?;

    if !matches!(
        lower.partial_cmp(&upper),
        Some(Ordering::Less | Ordering::Equal)
    ) {
        debug!(literal, "rejecting range literal with inverted bounds");
        return Err(Error::inverted_range(lower_token, upper_token));
    }
    Ok((lower, upper))
}

pub(crate) fn build_range<B, F>(
    literal: &str,
    kind: RangeKind,
    quote: Option<char>,
    bound: F,
) -> Result<LiteralRange<B>>
where
    B: PartialOrd,
    F: FnMut(&str) -> Result<B>,
{
    let (lower, upper) = parse_bounds(literal, kind, quote, bound)?;
    Ok(match kind {
        RangeKind::Inclusive => LiteralRange::Inclusive(lower..=upper),
        RangeKind::Exclusive => LiteralRange::Exclusive(lower..upper),
    })
}
