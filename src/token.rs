//! Bracket tokenizer.
//!
//! Splits the inside of a bracketed literal into its top-level tokens. Nested
//! brackets and quoted text are carried through untouched so that each token
//! can be handed to the element parser as a literal of its own.

use crate::{Error, LiteralOptions, Result};
use tracing::{debug, trace};

/// Bracket depth and quote state while scanning left to right.
#[derive(Debug, Clone, Copy)]
struct Nesting {
    depth: usize,
    quote: Option<char>,
    in_quote: bool,
}

impl Nesting {
    fn new(quote: Option<char>) -> Self {
        Nesting {
            depth: 0,
            quote,
            in_quote: false,
        }
    }

    /// Feeds one character. Returns `true` when the character sits at depth 0,
    /// outside quotes, and is neither a bracket nor a quote.
    fn top_level(&mut self, ch: char) -> bool {
        if self.quote == Some(ch) {
            self.in_quote = !self.in_quote;
            return false;
        }
        if self.in_quote {
            return false;
        }
        match ch {
            '[' => {
                self.depth += 1;
                false
            }
            ']' => {
                self.depth = self.depth.saturating_sub(1);
                false
            }
            _ => self.depth == 0,
        }
    }
}

/// Checks that `literal` is one bracketed literal and returns the text between
/// the outer brackets.
///
/// Surrounding whitespace is ignored. The inner text must keep its bracket depth
/// non-negative, end at depth 0, and close every quote it opens.
pub(crate) fn strip_brackets<'a>(literal: &'a str, options: &LiteralOptions) -> Result<&'a str> {
    let trimmed = literal.trim();
    let inner = trimmed
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| {
            debug!(literal, "rejecting literal without outer brackets");
            Error::not_bracketed(trimmed)
        })?;

    let base = literal.len() - literal.trim_start().len() + 1;
    check_balanced(inner, options.quote, base).map_err(|err| {
        debug!(literal, error = %err, "rejecting malformed literal");
        err
    })?;
    Ok(inner)
}

fn check_balanced(inner: &str, quote: Option<char>, base: usize) -> Result<()> {
    let mut depth = 0usize;
    let mut quote_start = None;

    for (i, ch) in inner.char_indices() {
        if quote == Some(ch) {
            quote_start = match quote_start {
                Some(_) => None,
                None => Some(base + i),
            };
            continue;
        }
        if quote_start.is_some() {
            continue;
        }
        match ch {
            '[' => depth += 1,
            ']' => {
                if depth == 0 {
                    return Err(Error::unbalanced(base + i, "unexpected ']'"));
                }
                depth -= 1;
            }
            _ => {}
        }
    }

    if let Some(position) = quote_start {
        return Err(Error::unterminated_quote(position));
    }
    if depth != 0 {
        return Err(Error::unbalanced(
            base + inner.len(),
            &format!("{} '[' left open", depth),
        ));
    }
    Ok(())
}

/// Splits the inside of a sequence or set literal into trimmed element tokens.
///
/// An empty (or all-whitespace) inside yields no tokens.
pub(crate) fn split_elements<'a>(inner: &'a str, options: &LiteralOptions) -> Result<Vec<&'a str>> {
    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut tokens = split_top_level(inner, options.delimiter.as_char(), options.quote);
    if options.allow_trailing_delimiter && tokens.len() > 1 && tokens.last() == Some(&"") {
        tokens.pop();
    }
    if let Some(index) = tokens.iter().position(|token| token.is_empty()) {
        return Err(Error::empty_element(index));
    }

    trace!(elements = tokens.len(), "split literal elements");
    Ok(tokens)
}

/// Splits the inside of a mapping literal into trimmed `(key, value)` token pairs.
///
/// Both `[:]` and `[]` denote the empty mapping.
pub(crate) fn split_entries<'a>(
    inner: &'a str,
    options: &LiteralOptions,
) -> Result<Vec<(&'a str, &'a str)>> {
    if matches!(inner.trim(), "" | ":") {
        return Ok(Vec::new());
    }

    split_elements(inner, options)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let (key, value) =
                split_entry(entry, options.quote).ok_or_else(|| Error::missing_separator(entry))?;
            if key.is_empty() || value.is_empty() {
                return Err(Error::empty_element(index));
            }
            Ok((key, value))
        })
        .collect()
}

/// Splits one entry on its first top-level `:`.
fn split_entry(entry: &str, quote: Option<char>) -> Option<(&str, &str)> {
    let mut nesting = Nesting::new(quote);
    let (colon, _) = entry
        .char_indices()
        .find(|&(_, ch)| nesting.top_level(ch) && ch == ':')?;
    Some((entry[..colon].trim(), entry[colon + 1..].trim()))
}

/// Byte offsets of the characters of `text` that sit outside quotes and brackets.
pub(crate) fn top_level_offsets(text: &str, quote: Option<char>) -> impl Iterator<Item = usize> + '_ {
    let mut nesting = Nesting::new(quote);
    text.char_indices()
        .filter_map(move |(i, ch)| nesting.top_level(ch).then_some(i))
}

fn split_top_level(text: &str, separator: char, quote: Option<char>) -> Vec<&str> {
    let mut nesting = Nesting::new(quote);
    let mut tokens = Vec::new();
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        if nesting.top_level(ch) && ch == separator {
            tokens.push(text[start..i].trim());
            start = i + ch.len_utf8();
        }
    }
    tokens.push(text[start..].trim());
    tokens
}
