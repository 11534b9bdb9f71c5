//! Scalar token parsing.
//!
//! A scalar token is one trimmed piece of text with no brackets of its own. Numbers
//! and other `FromStr` types delegate straight to their own parser; text strips one
//! pair of quote characters.

use crate::{Error, LiteralOptions, Result};
use std::any::type_name;
use std::fmt;
use std::str::FromStr;

/// Parses a trimmed token with `T`'s `FromStr` implementation.
///
/// Floats accept Rust's spellings of the special values, so `"inf"` is positive
/// infinity.
pub(crate) fn parse_scalar<T>(token: &str) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let token = token.trim();
    token
        .parse::<T>()
        .map_err(|err| Error::invalid_scalar(token, type_name::<T>(), err))
}

/// Parses a scalar whose written form contains `:`, such as a timestamp.
///
/// One pair of quote characters is removed first when present. Bare tokens are
/// accepted even when quotes are required, since the value is not text.
pub(crate) fn parse_quoted_scalar<T>(token: &str, options: &LiteralOptions) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let token = token.trim();
    let inner = options
        .quote
        .and_then(|quote| token.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(token);
    parse_scalar(inner)
}

/// Returns the text of a token, without its surrounding quotes when it has them.
pub(crate) fn parse_text<'a>(token: &'a str, options: &LiteralOptions) -> Result<&'a str> {
    let token = token.trim();
    let Some(quote) = options.quote else {
        return Ok(token);
    };

    match token
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
    {
        Some(inner) => Ok(inner),
        None if options.require_quotes => Err(Error::unquoted_text(token)),
        None => Ok(token),
    }
}

/// Parses a token holding exactly one character, quoted or not.
pub(crate) fn parse_char(token: &str, options: &LiteralOptions) -> Result<char> {
    let text = parse_text(token, options)?;
    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(Error::invalid_scalar(
            token.trim(),
            "char",
            "expected exactly one character",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers() {
        assert_eq!(parse_scalar::<i64>(" 42 ").unwrap(), 42);
        assert_eq!(parse_scalar::<i8>("-7").unwrap(), -7);
        assert_eq!(parse_scalar::<f64>("1.111").unwrap(), 1.111);
        assert_eq!(parse_scalar::<f64>("inf").unwrap(), f64::INFINITY);
        assert_eq!(parse_scalar::<f64>("-inf").unwrap(), f64::NEG_INFINITY);
        assert!(parse_scalar::<f32>("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_scalar_errors_name_the_type() {
        match parse_scalar::<u8>("300") {
            Err(Error::InvalidScalar { token, target, .. }) => {
                assert_eq!(token, "300");
                assert_eq!(target, "u8");
            }
            other => panic!("Expected scalar error, got {:?}", other),
        }
        assert!(parse_scalar::<i32>("[1]").is_err());
        assert!(parse_scalar::<i32>("").is_err());
    }

    #[test]
    fn test_text_quotes() {
        let options = LiteralOptions::default();
        assert_eq!(parse_text(" 'hello' ", &options).unwrap(), "hello");
        assert_eq!(parse_text("''", &options).unwrap(), "");
        assert_eq!(parse_text("'it''s'", &options).unwrap(), "it''s");
        assert_eq!(parse_text("hello", &options).unwrap(), "hello");
        assert_eq!(parse_text("'", &options).unwrap(), "'");
    }

    #[test]
    fn test_text_required_quotes() {
        let options = LiteralOptions::strict();
        assert_eq!(parse_text("'a'", &options).unwrap(), "a");
        assert_eq!(parse_text("a", &options), Err(Error::unquoted_text("a")));
    }

    #[test]
    fn test_text_without_quotes() {
        let options = LiteralOptions::default().without_quotes();
        assert_eq!(parse_text("'a'", &options).unwrap(), "'a'");
    }

    #[test]
    fn test_char() {
        let options = LiteralOptions::default();
        assert_eq!(parse_char("'x'", &options).unwrap(), 'x');
        assert_eq!(parse_char("♣", &options).unwrap(), '♣');
        assert!(parse_char("'xy'", &options).is_err());
        assert!(parse_char("''", &options).is_err());
    }
}
