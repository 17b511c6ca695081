//! Configuration options for SNBT output.
//!
//! - [`SnbtOptions`]: Main configuration struct
//! - [`Quote`]: Quote character used for strings and keys that need quoting
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{from_str, to_string_with_options, Quote, SnbtOptions};
//!
//! let tag = from_str("{name: \"two words\"}").unwrap();
//!
//! let options = SnbtOptions::new().with_quote(Quote::Single);
//! assert_eq!(to_string_with_options(&tag, &options), "{name:'two words'}");
//!
//! let options = SnbtOptions::pretty().with_indent(4);
//! assert_eq!(
//!     to_string_with_options(&tag, &options),
//!     "{\n    name: \"two words\"\n}"
//! );
//! ```

/// Quote character for written strings.
///
/// ```rust
/// use snbt::Quote;
///
/// assert_eq!(Quote::Double.as_char(), '"');
/// assert_eq!(Quote::Single.as_char(), '\'');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Quote {
    #[default]
    Double,
    Single,
}

impl Quote {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Quote::Double => '"',
            Quote::Single => '\'',
        }
    }
}

/// Configuration options for SNBT output.
///
/// Compact output has no whitespace at all. Pretty output puts each array
/// element and compound entry on its own line, indented by `indent` spaces per
/// level, with a space after each `:`.
///
/// # Examples
///
/// ```rust
/// use snbt::SnbtOptions;
///
/// let options = SnbtOptions::new();
/// assert_eq!(options.indent, 2);
/// assert!(!options.pretty);
///
/// let options = SnbtOptions::pretty().with_indent(4);
/// assert!(options.pretty);
/// ```
#[derive(Clone, Debug)]
pub struct SnbtOptions {
    pub indent: usize,
    pub pretty: bool,
    pub quote: Quote,
}

impl Default for SnbtOptions {
    fn default() -> Self {
        SnbtOptions {
            indent: 2,
            pretty: false,
            quote: Quote::default(),
        }
    }
}

impl SnbtOptions {
    /// Creates default options (compact, double quotes, 2-space indent).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options for multi-line, indented output.
    #[must_use]
    pub fn pretty() -> Self {
        SnbtOptions {
            pretty: true,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level. Only affects pretty output.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    #[must_use]
    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quote = quote;
        self
    }
}
