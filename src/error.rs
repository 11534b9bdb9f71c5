//! Error types for literal parsing.
//!
//! Every failure while reading a literal string is reported as an [`Error`].
//! Parsing never returns a partially built container: the first failing
//! element, key, value or bound fails the whole literal.
//!
//! ## Error Categories
//!
//! - **Structural Errors**: missing or unbalanced brackets, unterminated quotes,
//!   empty elements, mapping entries without a `:`
//! - **Scalar Errors**: a token that the target type's parser rejects
//! - **Duplicate Keys**: a mapping literal that repeats a key
//! - **Range Errors**: missing operator, missing bound, inverted bounds
//!
//! ## Examples
//!
//! ```rust
//! use rawlit::{parse_mapping, Error, Parser};
//!
//! let parser = Parser::default();
//! let result = parse_mapping("[5: 10, 5: 20]", |k| parser.scalar::<i32>(k), |v| parser.scalar::<i32>(v));
//!
//! match result {
//!     Err(Error::DuplicateKey { key }) => assert_eq!(key, "5"),
//!     other => panic!("expected a duplicate key error, got {:?}", other),
//! }
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while parsing a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Container literal is not wrapped in a single pair of square brackets
    #[error("Expected a literal wrapped in '[' and ']', found {literal:?}")]
    NotBracketed { literal: String },

    /// Brackets inside the literal do not balance
    #[error("Unbalanced brackets at byte {position}: {msg}")]
    Unbalanced { position: usize, msg: String },

    /// A quote was opened but never closed
    #[error("Unterminated quote starting at byte {position}")]
    UnterminatedQuote { position: usize },

    /// Nothing between two delimiters
    #[error("Empty element at index {index}")]
    EmptyElement { index: usize },

    /// Mapping entry without a top-level key/value separator
    #[error("Mapping entry {entry:?} has no ':' separating key and value")]
    MissingSeparator { entry: String },

    /// A token could not be parsed as the target scalar type
    #[error("Cannot parse {token:?} as {target}: {msg}")]
    InvalidScalar {
        token: String,
        target: &'static str,
        msg: String,
    },

    /// Text element without surrounding quotes while quotes are required
    #[error("Text element {token:?} must be quoted")]
    UnquotedText { token: String },

    /// A mapping literal repeats a key
    #[error("Duplicate key {key:?} in mapping literal")]
    DuplicateKey { key: String },

    /// Range literal without its operator
    #[error("Range literal {literal:?} does not contain {operator:?}")]
    MissingRangeOperator {
        literal: String,
        operator: &'static str,
    },

    /// One side of a range operator is empty
    #[error("Range literal is missing its {side} bound")]
    MissingBound { side: &'static str },

    /// Lower bound is not less than or equal to the upper bound
    #[error("Range lower bound {lower:?} is greater than upper bound {upper:?}")]
    InvertedRange { lower: String, upper: String },

    /// No enum case with the given name
    #[error("No case named {name:?}")]
    UnknownCase { name: String },

    /// Two enum cases declare equal raw values
    #[error("Cases {first} and {second} have the same raw value")]
    DuplicateRawValue {
        first: &'static str,
        second: &'static str,
    },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an error for a literal that is not wrapped in brackets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Error;
    ///
    /// let err = Error::not_bracketed("1, 2");
    /// assert!(err.to_string().contains("'['"));
    /// ```
    pub fn not_bracketed(literal: &str) -> Self {
        Error::NotBracketed {
            literal: literal.to_string(),
        }
    }

    /// Creates an unbalanced-bracket error at a byte offset of the literal.
    pub fn unbalanced(position: usize, msg: &str) -> Self {
        Error::Unbalanced {
            position,
            msg: msg.to_string(),
        }
    }

    /// Creates an unterminated-quote error.
    pub fn unterminated_quote(position: usize) -> Self {
        Error::UnterminatedQuote { position }
    }

    /// Creates an empty-element error.
    pub fn empty_element(index: usize) -> Self {
        Error::EmptyElement { index }
    }

    /// Creates an error for a mapping entry lacking a `:`.
    pub fn missing_separator(entry: &str) -> Self {
        Error::MissingSeparator {
            entry: entry.to_string(),
        }
    }

    /// Creates a scalar parse error.
    ///
    /// `target` is usually [`std::any::type_name`] of the requested type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Error;
    ///
    /// let err = Error::invalid_scalar("abc", "i32", "invalid digit found in string");
    /// assert!(err.to_string().contains("as i32"));
    /// ```
    pub fn invalid_scalar<M: fmt::Display>(token: &str, target: &'static str, msg: M) -> Self {
        Error::InvalidScalar {
            token: token.to_string(),
            target,
            msg: msg.to_string(),
        }
    }

    /// Creates an error for text that should have been quoted.
    pub fn unquoted_text(token: &str) -> Self {
        Error::UnquotedText {
            token: token.to_string(),
        }
    }

    /// Creates a duplicate-key error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Error;
    ///
    /// let err = Error::duplicate_key("5");
    /// assert!(err.is_duplicate_key());
    /// ```
    pub fn duplicate_key(key: &str) -> Self {
        Error::DuplicateKey {
            key: key.to_string(),
        }
    }

    /// Creates an error for a range literal lacking its operator.
    pub fn missing_range_operator(literal: &str, operator: &'static str) -> Self {
        Error::MissingRangeOperator {
            literal: literal.to_string(),
            operator,
        }
    }

    /// Creates an error for an empty range bound. `side` is `"lower"` or `"upper"`.
    pub fn missing_bound(side: &'static str) -> Self {
        Error::MissingBound { side }
    }

    /// Creates an inverted-range error from the two bound tokens.
    pub fn inverted_range(lower: &str, upper: &str) -> Self {
        Error::InvertedRange {
            lower: lower.to_string(),
            upper: upper.to_string(),
        }
    }

    /// Creates an unknown-case error for raw-value enums.
    pub fn unknown_case(name: &str) -> Self {
        Error::UnknownCase {
            name: name.to_string(),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` if the literal was rejected because of a repeated mapping key.
    #[must_use]
    pub const fn is_duplicate_key(&self) -> bool {
        matches!(self, Error::DuplicateKey { .. })
    }

    /// Returns `true` for errors about the shape of the literal rather than its contents.
    #[must_use]
    pub const fn is_structural(&self) -> bool {
        matches!(
            self,
            Error::NotBracketed { .. }
                | Error::Unbalanced { .. }
                | Error::UnterminatedQuote { .. }
                | Error::EmptyElement { .. }
                | Error::MissingSeparator { .. }
                | Error::MissingRangeOperator { .. }
                | Error::MissingBound { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
