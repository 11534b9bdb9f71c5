//! Literal Format
//!
//! This module documents the literal grammar accepted by [`Parser`](crate::Parser)
//! and produced by [`Writer`](crate::Writer).
//!
//! # Overview
//!
//! A literal is a single line of text describing one composite value. The shape of
//! the value is never inferred from the text: the caller states what it expects
//! (a sequence of sequences of integers, a mapping from text to ranges) and the
//! literal must match that shape exactly.
//!
//! # Core Syntax
//!
//! ## Sequences and Sets
//!
//! ```text
//! [1, 2, 3]
//! ['hello', 'there']
//! []
//! ```
//!
//! **Rules**:
//! - The whole literal is wrapped in `[` and `]`; whitespace outside them is ignored
//! - Elements are separated by the active [`Delimiter`](crate::Delimiter) (`,` by default)
//! - Whitespace around each element is trimmed
//! - `[]` is the empty sequence; an empty element such as `[1, , 2]` is an error
//! - A trailing delimiter (`[1, 2,]`) is rejected unless
//!   [`allow_trailing_delimiter`](crate::LiteralOptions::allow_trailing_delimiter) is set
//! - Sets use the same syntax; repeated elements collapse to one
//!
//! ## Mappings
//!
//! ```text
//! [5: 10, 6: 100]
//! ['one': 1, 'two': 2]
//! [:]
//! ```
//!
//! **Rules**:
//! - Each entry is `key: value`, split on the first `:` outside brackets and quotes
//! - Both `[:]` and `[]` are the empty mapping
//! - An entry with no `:` is an error, as is an empty key or value
//! - A key may appear only once; the second occurrence is an error, and keys are
//!   compared after parsing, so `[01: 1, 1: 2]` repeats the integer key `1`
//! - Entry order is preserved by order-keeping targets such as `IndexMap`
//!
//! ## Ranges
//!
//! | Operator | Meaning | Example |
//! |----------|---------|---------|
//! | `...` | closed range, both bounds included | `1...3` |
//! | `..<` | half-open range, upper bound excluded | `0..<10` |
//!
//! **Rules**:
//! - Ranges are not bracketed
//! - The literal is split on the first occurrence of the operator outside quotes
//! - Both bounds must be present and the lower bound must not exceed the upper
//! - Float bounds accept `inf` and `-inf`; `NaN` never satisfies the ordering check
//!
//! ## Scalars
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Integer | decimal digits, optional sign | `-42` |
//! | Float | Rust float syntax | `1.5`, `1e3`, `inf` |
//! | Boolean | `true` or `false` | `true` |
//! | Text | quoted, or bare when permitted | `'hello'`, `hello` |
//! | Character | one character, quoted or bare | `'♠'` |
//! | Date | ISO 8601 | `2024-01-15` |
//! | Timestamp | ISO 8601, quoted or bare | `'2024-01-15T10:30:00Z'` |
//! | Big integer | decimal digits of any length | `123456789012345678901234567890` |
//!
//! ## Text and Quoting
//!
//! Text is wrapped in the quote character (`'` by default). One pair of quotes is
//! stripped when present. Inside quotes the delimiter, `:`, `[` and `]` lose their
//! structural meaning:
//!
//! ```text
//! ['a, b', '[x]', 'key: value']
//! ```
//!
//! There is no escape sequence, so quoted text cannot contain the quote character.
//! Bare text is read as-is unless
//! [`require_quotes`](crate::LiteralOptions::require_quotes) is set.
//!
//! The quote character opens a quote wherever it appears, bare text included.
//! `[don't]` is therefore an unterminated quote, not the text `don't`. Text that
//! needs the quote character must use a different one, set with
//! [`with_quote`](crate::LiteralOptions::with_quote):
//!
//! ```text
//! ["don't", "won't"]
//! ```
//!
//! Range bounds follow the same rule: an operator inside quotes is part of the
//! bound, so `'a...b'...'z'` runs from `a...b` to `z`.
//!
//! Timestamps contain `:` and are written quoted so they can serve as mapping
//! keys. They are read with or without quotes.
//!
//! # Nesting
//!
//! Any element, key or value may itself be a literal:
//!
//! ```text
//! [[1, 2, 3], [2], [3]]
//! [5: [10: 100, 1: 1000], 6: [:]]
//! ['low': 1...3, 'high': 4..<10]
//! ```
//!
//! The depth of the text must equal the depth of the requested type. Extra or missing
//! brackets fail with an error from the level where the mismatch is found.
//!
//! # Writing
//!
//! [`to_literal`](crate::to_literal) writes the canonical form: elements joined by
//! the delimiter and one space (`, `), entries as `key: value`, text and timestamps
//! always quoted, and the empty mapping as `[:]`. Text that contains the quote
//! character cannot be written and is reported as an error.
//!
//! # Errors
//!
//! | Condition | Error |
//! |-----------|-------|
//! | Missing outer brackets | [`Error::NotBracketed`](crate::Error::NotBracketed) |
//! | Stray or unclosed bracket | [`Error::Unbalanced`](crate::Error::Unbalanced) |
//! | Unclosed quote | [`Error::UnterminatedQuote`](crate::Error::UnterminatedQuote) |
//! | Empty element or entry side | [`Error::EmptyElement`](crate::Error::EmptyElement) |
//! | Entry without `:` | [`Error::MissingSeparator`](crate::Error::MissingSeparator) |
//! | Scalar that does not parse | [`Error::InvalidScalar`](crate::Error::InvalidScalar) |
//! | Repeated mapping key | [`Error::DuplicateKey`](crate::Error::DuplicateKey) |
//! | Range without its operator | [`Error::MissingRangeOperator`](crate::Error::MissingRangeOperator) |
//! | Range with lower above upper | [`Error::InvertedRange`](crate::Error::InvertedRange) |
