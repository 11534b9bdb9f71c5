//! Configuration options for literal parsing and rendering.
//!
//! - [`LiteralOptions`]: main configuration struct
//! - [`Delimiter`]: element separator inside brackets (comma, semicolon, or pipe)
//!
//! ## Examples
//!
//! ```rust
//! use rawlit::{Delimiter, LiteralOptions, Parser};
//!
//! let options = LiteralOptions::new().with_delimiter(Delimiter::Pipe);
//! let parser = Parser::new(options);
//! let values: Vec<i32> = parser.parse("[1 | 2 | 3]").unwrap();
//! assert_eq!(values, vec![1, 2, 3]);
//! ```

/// Separator between elements of a sequence, set or mapping literal.
///
/// The key/value separator inside mapping entries is always `:`.
///
/// # Examples
///
/// ```rust
/// use rawlit::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Semicolon.as_char(), ';');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Pipe,
}

impl Delimiter {
    /// Returns the delimiter character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Pipe => '|',
        }
    }

    /// Returns the separator written between rendered elements.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ", ",
            Delimiter::Semicolon => "; ",
            Delimiter::Pipe => " | ",
        }
    }
}

/// Configuration options for reading and writing literals.
///
/// # Examples
///
/// ```rust
/// use rawlit::{Delimiter, LiteralOptions};
///
/// // Defaults: comma delimiter, single-quoted text, lenient quoting
/// let options = LiteralOptions::new();
/// assert_eq!(options.quote, Some('\''));
///
/// // Strict: text must be quoted, no trailing delimiter
/// let options = LiteralOptions::strict();
/// assert!(options.require_quotes);
///
/// // Custom configuration
/// let options = LiteralOptions::new()
///     .with_delimiter(Delimiter::Semicolon)
///     .with_quote('"')
///     .with_trailing_delimiter(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiteralOptions {
    pub delimiter: Delimiter,
    /// Quote character wrapping text elements. `None` turns quote handling off.
    pub quote: Option<char>,
    pub require_quotes: bool,
    pub allow_trailing_delimiter: bool,
}

impl Default for LiteralOptions {
    fn default() -> Self {
        LiteralOptions {
            delimiter: Delimiter::default(),
            quote: Some('\''),
            require_quotes: false,
            allow_trailing_delimiter: false,
        }
    }
}

impl LiteralOptions {
    /// Creates default options (comma delimiter, `'` quotes, unquoted text accepted).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::LiteralOptions;
    ///
    /// let options = LiteralOptions::new();
    /// assert!(!options.require_quotes);
    /// assert!(!options.allow_trailing_delimiter);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options that reject unquoted text elements.
    #[must_use]
    pub fn strict() -> Self {
        LiteralOptions {
            require_quotes: true,
            ..Default::default()
        }
    }

    /// Sets the element delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Sets the quote character for text elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rawlit::LiteralOptions;
    ///
    /// let options = LiteralOptions::new().with_quote('"');
    /// assert_eq!(options.quote, Some('"'));
    /// ```
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Disables quote handling: text is taken verbatim and quote characters are not special.
    #[must_use]
    pub fn without_quotes(mut self) -> Self {
        self.quote = None;
        self.require_quotes = false;
        self
    }

    /// Accepts or rejects unquoted text elements.
    #[must_use]
    pub fn with_required_quotes(mut self, require: bool) -> Self {
        self.require_quotes = require;
        self
    }

    /// Accepts or rejects one delimiter right before the closing bracket, as in `[1, 2,]`.
    #[must_use]
    pub fn with_trailing_delimiter(mut self, allow: bool) -> Self {
        self.allow_trailing_delimiter = allow;
        self
    }
}
