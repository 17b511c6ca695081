//! SNBT parsing.
//!
//! This module provides the [`Parser`], a single-pass recursive-descent parser
//! that turns SNBT text into a [`Tag`] tree, and the [`FromSnbt`] trait exposing
//! each component parser on its own.
//!
//! ## Grammar
//!
//! ```text
//! value     := ws* ( compound | array | literal )
//! compound  := '{' ws* ( '}' | entry ( ',' entry )* '}' )
//! entry     := ws* literal ws* ':' value ws*
//! array     := '[' ws* ( [BIL] ';' )? ( ws* value ws* ',' )* ws* ']'
//! literal   := quoted | [A-Za-z0-9+\-_.]+
//! quoted    := '"' ... '"' | '\'' ... '\''     (backslash escapes the next char)
//! ```
//!
//! ## Literal classification
//!
//! Unquoted literals get the most specific kind their spelling allows, tried in
//! order: `true`/`false` → Bool, `b` suffix → Byte, `s` → Short, `l` → Long,
//! `d` → Double, `f` → Float, a bare 32-bit integer → Int. Suffixes are
//! case-insensitive. Anything else, including out-of-range numbers, is kept as a
//! String with its text unchanged. Quoted literals are always strings.
//!
//! ```rust
//! use snbt::{parser::classify, Primitive};
//!
//! assert_eq!(classify("-24b"), Primitive::Byte(-24));
//! assert_eq!(classify(".6432d"), Primitive::Double(0.6432));
//! assert_eq!(classify(".d"), Primitive::from(".d"));
//! assert_eq!(classify("9999999999"), Primitive::from("9999999999"));
//! ```
//!
//! ## Cursors
//!
//! Positions are byte offsets into the input. [`Parser::position`] always sits
//! right after the last consumed character, so a caller can parse one value out
//! of a larger document and carry on from there:
//!
//! ```rust
//! use snbt::Parser;
//!
//! let text = "[1, 2] trailing";
//! let mut parser = Parser::new(text);
//! let tag = parser.parse_tag().unwrap();
//! assert_eq!(tag.cast::<&snbt::Array>().unwrap().len(), 2);
//! assert_eq!(&text[parser.position()..], "trailing");
//! ```

use crate::{Array, Compound, Error, Kind, Primitive, Result, Tag};
use std::str::FromStr;
use tracing::trace;

/// The SNBT parser.
///
/// Holds the input text and a cursor. Created via [`Parser::new`] or
/// [`Parser::at`]; the nesting guard is configured with
/// [`Parser::with_max_depth`].
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    input: &'a str,
    position: usize,
    depth: usize,
    max_depth: Option<usize>,
}

/// Raw text of one literal, before classification.
struct Literal {
    text: String,
    quoted: bool,
}

impl<'a> Parser<'a> {
    /// Creates a parser positioned at the start of `input`.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self::at(input, 0)
    }

    /// Creates a parser positioned at byte offset `position`.
    ///
    /// A position past the end, or inside a multi-byte character, reads as end
    /// of input.
    #[must_use]
    pub fn at(input: &'a str, position: usize) -> Self {
        Parser {
            input,
            position,
            depth: 0,
            max_depth: None,
        }
    }

    /// Limits how deeply arrays and compounds may nest.
    ///
    /// ```rust
    /// use snbt::{Error, Parser};
    ///
    /// let err = Parser::new("[[[1]]]").with_max_depth(2).parse_tag().unwrap_err();
    /// assert!(matches!(err, Error::DepthLimit { limit: 2, .. }));
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the unconsumed rest of the input.
    #[must_use]
    pub fn remaining(&self) -> &'a str {
        self.input.get(self.position..).unwrap_or("")
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    fn next_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        self.position += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if ch.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn error_at(&self, position: usize, msg: &str) -> Error {
        Error::syntax(self.input, position, msg)
    }

    fn error(&self, msg: &str) -> Error {
        self.error_at(self.position, msg)
    }

    fn enter(&mut self) -> Result<()> {
        self.depth += 1;
        match self.max_depth {
            Some(limit) if self.depth > limit => Err(Error::DepthLimit {
                limit,
                position: self.position,
            }),
            _ => Ok(()),
        }
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parses one top-level value and skips the whitespace after it.
    ///
    /// # Errors
    ///
    /// Returns the first syntax, type or duplicate-key error met. The cursor is
    /// left wherever the failure occurred.
    pub fn parse_tag(&mut self) -> Result<Tag> {
        let tag = self.parse_value()?;
        self.skip_whitespace();
        Ok(tag)
    }

    /// Parses one value of any shape, after optional whitespace.
    ///
    /// Trailing whitespace is left in place.
    ///
    /// # Errors
    ///
    /// Returns a syntax error at end of input, or whatever the selected
    /// component parser fails with.
    pub fn parse_value(&mut self) -> Result<Tag> {
        self.skip_whitespace();
        match self.peek_char() {
            None => Err(self.error("no value")),
            Some('{') => {
                trace!("compound at {}", self.position);
                self.parse_compound().map(Tag::Compound)
            }
            Some('[') => {
                trace!("array at {}", self.position);
                self.parse_array().map(Tag::Array)
            }
            Some(_) => self.parse_primitive().map(Tag::Primitive),
        }
    }

    /// Parses one scalar literal starting exactly at the cursor.
    ///
    /// No whitespace is skipped, before or after.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for an unterminated quoted literal, or when the
    /// cursor is not on a literal at all.
    pub fn parse_primitive(&mut self) -> Result<Primitive> {
        let literal = self.scan_literal("value")?;
        let primitive = if literal.quoted {
            Primitive::String(literal.text)
        } else {
            classify(&literal.text)
        };
        trace!("{} literal {:?}", primitive.kind(), primitive);
        Ok(primitive)
    }

    /// Parses an array, cursor on (optionally whitespace-preceded) `[`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for a missing `[`, an unknown type prefix, an
    /// empty element, a bad separator or a missing `]`, and
    /// [`Error::TypeMismatch`] for an element of the wrong kind.
    pub fn parse_array(&mut self) -> Result<Array> {
        self.skip_whitespace();
        let start = self.position;
        if self.peek_char() != Some('[') {
            return Err(self.error("expected '['"));
        }
        self.next_char();
        self.enter()?;
        self.skip_whitespace();

        let mut array = Array::of(self.parse_array_prefix()?);
        loop {
            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(self.error_at(start, "unterminated array")),
                Some(']') => {
                    self.next_char();
                    break;
                }
                Some(',') => return Err(self.error("empty element")),
                Some(_) => {}
            }

            array.push(self.parse_value()?)?;

            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(self.error_at(start, "unterminated array")),
                Some(',') => {
                    self.next_char();
                }
                Some(']') => {
                    self.next_char();
                    break;
                }
                Some(_) => return Err(self.error("expected ',' or ']'")),
            }
        }

        self.leave();
        Ok(array)
    }

    /// Reads the `B;` / `I;` / `L;` prefix, if present.
    fn parse_array_prefix(&mut self) -> Result<Kind> {
        match (self.peek_char(), self.peek_second()) {
            (Some(code), Some(';')) if code.is_ascii_alphabetic() => {
                let kind = Kind::from_array_code(code)
                    .ok_or_else(|| self.error("unknown array type"))?;
                self.next_char();
                self.next_char();
                trace!("typed array of {}", kind);
                Ok(kind)
            }
            _ => Ok(Kind::Tag),
        }
    }

    /// Parses a compound, cursor on (optionally whitespace-preceded) `{`.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for a missing `{`, `:` or `}` or a bad separator,
    /// and [`Error::DuplicateKey`] for a repeated key.
    pub fn parse_compound(&mut self) -> Result<Compound> {
        self.skip_whitespace();
        let start = self.position;
        if self.peek_char() != Some('{') {
            return Err(self.error("expected '{'"));
        }
        self.next_char();
        self.enter()?;

        let mut compound = Compound::new();
        self.skip_whitespace();
        if self.peek_char() == Some('}') {
            self.next_char();
            self.leave();
            return Ok(compound);
        }

        loop {
            self.skip_whitespace();
            if self.peek_char().is_none() {
                return Err(self.error_at(start, "unterminated compound"));
            }
            let key = self.scan_literal("key")?.text;

            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(self.error_at(start, "unterminated compound")),
                Some(':') => {
                    self.next_char();
                }
                Some(_) => return Err(self.error("expected ':' after key")),
            }

            let value = self.parse_value()?;
            trace!("entry {:?} -> {}", key, value.kind());
            compound.insert(key, value)?;

            self.skip_whitespace();
            match self.peek_char() {
                None => return Err(self.error_at(start, "unterminated compound")),
                Some(',') => {
                    self.next_char();
                }
                Some('}') => {
                    self.next_char();
                    break;
                }
                Some(_) => return Err(self.error("expected ',' or '}'")),
            }
        }

        self.leave();
        Ok(compound)
    }

    /// Reads a quoted or unquoted literal without classifying it.
    fn scan_literal(&mut self, what: &str) -> Result<Literal> {
        let start = self.position;
        match self.peek_char() {
            Some(quote @ ('"' | '\'')) => {
                self.next_char();
                let mut text = String::new();
                loop {
                    match self.next_char() {
                        None => return Err(self.error_at(start, "unterminated quoted string")),
                        Some('\\') => match self.next_char() {
                            Some(escaped) => text.push(escaped),
                            None => {
                                return Err(self.error_at(start, "unterminated quoted string"))
                            }
                        },
                        Some(ch) if ch == quote => break,
                        Some(ch) => text.push(ch),
                    }
                }
                Ok(Literal { text, quoted: true })
            }
            _ => {
                while self.peek_char().is_some_and(is_literal_char) {
                    self.next_char();
                }
                if self.position == start {
                    return Err(self.error(&format!("expected {}", what)));
                }
                Ok(Literal {
                    text: self.input[start..self.position].to_string(),
                    quoted: false,
                })
            }
        }
    }
}

/// Returns `true` for characters allowed in an unquoted literal.
#[inline]
#[must_use]
pub const fn is_literal_char(ch: char) -> bool {
    matches!(ch, 'A'..='Z' | 'a'..='z' | '0'..='9' | '+' | '-' | '_' | '.')
}

/// Infers the kind of an unquoted literal from its spelling.
///
/// Never fails: text that matches no numeric or boolean form is a String.
#[must_use]
pub fn classify(text: &str) -> Primitive {
    if text.eq_ignore_ascii_case("true") {
        return Primitive::Bool(true);
    }
    if text.eq_ignore_ascii_case("false") {
        return Primitive::Bool(false);
    }

    if let Some((index, suffix)) = text.char_indices().last() {
        let body = &text[..index];
        let classified = match suffix.to_ascii_lowercase() {
            'b' => body.parse().ok().map(Primitive::Byte),
            's' => body.parse().ok().map(Primitive::Short),
            'l' => body.parse().ok().map(Primitive::Long),
            'd' if is_decimal(body) => body.parse().ok().map(Primitive::Double),
            'f' if is_decimal(body) => body.parse().ok().map(Primitive::Float),
            _ => None,
        };
        if let Some(primitive) = classified {
            return primitive;
        }
    }

    match text.parse::<i32>() {
        Ok(value) => Primitive::Int(value),
        Err(_) => Primitive::String(text.to_string()),
    }
}

/// Optional sign, digits with at most one `.`, and at least one digit.
fn is_decimal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut seen_digit = false;
    let mut seen_dot = false;
    for ch in digits.chars() {
        match ch {
            '0'..='9' => seen_digit = true,
            '.' if !seen_dot => seen_dot = true,
            _ => return false,
        }
    }
    seen_digit
}

/// Types that can be parsed from SNBT text on their own.
///
/// ```rust
/// use snbt::{Array, Compound, FromSnbt, Kind, Primitive};
///
/// let array = Array::parse("[B; 19b, -42b]").unwrap();
/// assert_eq!(array.element_kind(), Kind::Byte);
///
/// let compound = Compound::parse("{a:1,b:2}").unwrap();
/// assert_eq!(compound.len(), 2);
///
/// let mut cursor = 0;
/// let primitive = Primitive::parse_at("344S,", &mut cursor).unwrap();
/// assert_eq!(primitive, Primitive::Short(344));
/// assert_eq!(cursor, 4);
/// ```
pub trait FromSnbt: Sized {
    /// Parses a value of this type at the parser's cursor.
    ///
    /// # Errors
    ///
    /// Returns a syntax error if the text at the cursor is not this shape.
    fn parse_with(parser: &mut Parser<'_>) -> Result<Self>;

    /// Parses from byte offset `*cursor`, then moves the cursor past the value.
    ///
    /// # Errors
    ///
    /// Returns the first error met; `*cursor` is unspecified afterwards.
    fn parse_at(input: &str, cursor: &mut usize) -> Result<Self> {
        let mut parser = Parser::at(input, *cursor);
        let result = Self::parse_with(&mut parser);
        *cursor = parser.position();
        result
    }

    /// Parses from the start of `input`, ignoring anything after the value.
    ///
    /// # Errors
    ///
    /// Returns the first error met.
    fn parse(input: &str) -> Result<Self> {
        Self::parse_with(&mut Parser::new(input))
    }
}

impl FromSnbt for Tag {
    fn parse_with(parser: &mut Parser<'_>) -> Result<Self> {
        parser.parse_tag()
    }
}

impl FromSnbt for Primitive {
    fn parse_with(parser: &mut Parser<'_>) -> Result<Self> {
        parser.parse_primitive()
    }
}

impl FromSnbt for Array {
    fn parse_with(parser: &mut Parser<'_>) -> Result<Self> {
        parser.parse_array()
    }
}

impl FromSnbt for Compound {
    fn parse_with(parser: &mut Parser<'_>) -> Result<Self> {
        parser.parse_compound()
    }
}

impl FromStr for Tag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tag::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax_message(err: Error) -> String {
        match err {
            Error::Syntax { msg, .. } => msg,
            other => panic!("Expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_booleans() {
        assert_eq!(classify("true"), Primitive::Bool(true));
        assert_eq!(classify("FALSE"), Primitive::Bool(false));
        assert_eq!(classify("True"), Primitive::Bool(true));
        assert_eq!(classify("truex"), Primitive::from("truex"));
    }

    #[test]
    fn test_classify_suffixed_integers() {
        assert_eq!(classify("-24b"), Primitive::Byte(-24));
        assert_eq!(classify("25B"), Primitive::Byte(25));
        assert_eq!(classify("344S"), Primitive::Short(344));
        assert_eq!(classify("9999L"), Primitive::Long(9999));
        assert_eq!(classify("+7l"), Primitive::Long(7));
        assert_eq!(classify("200b"), Primitive::from("200b"));
        assert_eq!(classify("99999s"), Primitive::from("99999s"));
    }

    #[test]
    fn test_classify_decimals() {
        assert_eq!(classify("6432d"), Primitive::Double(6432.0));
        assert_eq!(classify(".6432d"), Primitive::Double(0.6432));
        assert_eq!(classify("235.d"), Primitive::Double(235.0));
        assert_eq!(classify("-4.3D"), Primitive::Double(-4.3));
        assert_eq!(classify("512.5f"), Primitive::Float(512.5));
        assert_eq!(classify(".5f"), Primitive::Float(0.5));
        assert_eq!(classify(".d"), Primitive::from(".d"));
        assert_eq!(classify(".s"), Primitive::from(".s"));
        assert_eq!(classify("1.2.3d"), Primitive::from("1.2.3d"));
        assert_eq!(classify("1e5d"), Primitive::from("1e5d"));
    }

    #[test]
    fn test_classify_fractional_suffixes_are_not_integers() {
        assert_eq!(classify(".6543s"), Primitive::from(".6543s"));
        assert_eq!(classify("2385.s"), Primitive::from("2385.s"));
        assert_eq!(classify("344sx"), Primitive::from("344sx"));
    }

    #[test]
    fn test_classify_ints_and_strings() {
        assert_eq!(classify("125"), Primitive::Int(125));
        assert_eq!(classify("-2147483648"), Primitive::Int(i32::MIN));
        assert_eq!(classify("9999999999"), Primitive::from("9999999999"));
        assert_eq!(classify("heythere"), Primitive::from("heythere"));
        assert_eq!(classify("b"), Primitive::from("b"));
    }

    #[test]
    fn test_classify_unsuffixed_decimals_stay_strings() {
        assert_eq!(classify("5.0"), Primitive::from("5.0"));
        assert_eq!(classify("5."), Primitive::from("5."));
        assert_eq!(classify("-0.5"), Primitive::from("-0.5"));
    }

    #[test]
    fn test_primitive_stops_at_non_literal_char() {
        let mut parser = Parser::new("99bx  ,");
        assert_eq!(parser.parse_primitive().unwrap(), Primitive::from("99bx"));
        assert_eq!(parser.position(), 4);
    }

    #[test]
    fn test_primitive_does_not_skip_whitespace() {
        let err = Parser::new(" 1").parse_primitive().unwrap_err();
        assert_eq!(syntax_message(err), "expected value");
    }

    #[test]
    fn test_quoted_literals() {
        let mut parser = Parser::new(r#""Hello World!]"]"#);
        assert_eq!(
            parser.parse_primitive().unwrap(),
            Primitive::from("Hello World!]")
        );
        assert_eq!(parser.position(), 15);

        let mut parser = Parser::new(r#"'it\'s \\ "fine"'"#);
        assert_eq!(
            parser.parse_primitive().unwrap(),
            Primitive::from(r#"it's \ "fine""#)
        );

        let tag = Parser::new("\"123\"").parse_primitive().unwrap();
        assert_eq!(tag, Primitive::from("123"));
    }

    #[test]
    fn test_unterminated_quote() {
        let err = Parser::new("\"abc").parse_primitive().unwrap_err();
        assert_eq!(syntax_message(err), "unterminated quoted string");
        let err = Parser::new("'abc\\").parse_primitive().unwrap_err();
        assert!(err.is_syntax());
    }

    #[test]
    fn test_mixed_array() {
        let text = "[125, 25b   ,   99bx  , true  , 4.3d, 512.5f, heythere, \"Hello World!]\"]xxx";
        let mut parser = Parser::new(text);
        let array = parser.parse_array().unwrap();
        assert_eq!(parser.position(), text.len() - 3);
        assert_eq!(array.len(), 8);
        assert_eq!(array.element_kind(), Kind::Tag);
        assert_eq!(array.item_as::<i32>(0).unwrap(), 125);
        assert_eq!(array.item_as::<i8>(1).unwrap(), 25);
        assert_eq!(array.item_as::<&str>(2).unwrap(), "99bx");
        assert!(array.item_as::<bool>(3).unwrap());
        assert_eq!(array.item_as::<f64>(4).unwrap(), 4.3);
        assert_eq!(array.item_as::<f32>(5).unwrap(), 512.5);
        assert_eq!(array.item_as::<&str>(6).unwrap(), "heythere");
        assert_eq!(array.item_as::<&str>(7).unwrap(), "Hello World!]");
    }

    #[test]
    fn test_typed_arrays() {
        let array = Array::parse("[B; 19b, -42b]").unwrap();
        assert_eq!(array.element_kind(), Kind::Byte);
        assert_eq!(array.items_as::<i8>().unwrap(), vec![19, -42]);

        let array = Array::parse("[I;645]").unwrap();
        assert_eq!(array.element_kind(), Kind::Int);

        let array = Array::parse("[L;]").unwrap();
        assert_eq!(array.element_kind(), Kind::Long);
        assert!(array.is_empty());
    }

    #[test]
    fn test_typed_array_rejects_wrong_kind() {
        let err = Array::parse("[B; 19b, 42]").unwrap_err();
        assert_eq!(err, Error::type_mismatch(Kind::Byte, Kind::Int));
    }

    #[test]
    fn test_unknown_array_type() {
        let err = Array::parse("[X; 1]").unwrap_err();
        assert_eq!(syntax_message(err), "unknown array type");
    }

    #[test]
    fn test_quoted_semicolon_is_an_element() {
        let array = Array::parse("[\";\"]").unwrap();
        assert_eq!(array.item_as::<&str>(0).unwrap(), ";");
    }

    #[test]
    fn test_array_errors() {
        let err = Array::parse("[asdf,,dfsf]").unwrap_err();
        assert_eq!(syntax_message(err), "empty element");

        let err = Array::parse("[1 2]").unwrap_err();
        assert_eq!(syntax_message(err), "expected ',' or ']'");

        let err = Array::parse("[1, 2").unwrap_err();
        assert_eq!(syntax_message(err), "unterminated array");

        let err = Array::parse("{}").unwrap_err();
        assert_eq!(syntax_message(err), "expected '['");
    }

    #[test]
    fn test_array_trailing_comma() {
        let array = Array::parse("[1, 2, ]").unwrap();
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn test_empty_containers_consume_brackets() {
        let mut cursor = 0;
        let array = Array::parse_at("[]x", &mut cursor).unwrap();
        assert!(array.is_empty());
        assert_eq!(cursor, 2);

        let mut cursor = 0;
        let compound = Compound::parse_at("{ }x", &mut cursor).unwrap();
        assert!(compound.is_empty());
        assert_eq!(cursor, 3);
    }

    #[test]
    fn test_nested_compound() {
        let text = "{compound:{\"name\":hello,value:2.43d, array :[ {value: 34b, value2: 12}, \
                    {Count:14s, Time:9999L }, {Motion:.5f}, {B:[B;34b],I:[I;645],L:[L;358L]} ]}, \
                    \"@$#()\": true}XXXXX";
        let mut parser = Parser::new(text);
        let compound = parser.parse_compound().unwrap();
        assert_eq!(parser.position(), text.len() - 5);
        assert_eq!(compound.len(), 2);
        assert!(compound.item_as::<bool>("@$#()").unwrap());

        let inner = compound.item_as::<&Compound>("compound").unwrap();
        assert_eq!(inner.item_as::<&str>("name").unwrap(), "hello");
        assert_eq!(inner.item_as::<f64>("value").unwrap(), 2.43);

        let array = inner.item_as::<&Array>("array").unwrap();
        assert_eq!(array.len(), 4);
        assert!(array.items_are::<&Compound>());

        let first = array.item_as::<&Compound>(0).unwrap();
        assert_eq!(first.item_as::<i8>("value").unwrap(), 34);
        assert_eq!(first.item_as::<i32>("value2").unwrap(), 12);

        let second = array.item_as::<&Compound>(1).unwrap();
        assert_eq!(second.item_as::<i16>("Count").unwrap(), 14);
        assert_eq!(second.item_as::<i64>("Time").unwrap(), 9999);

        let third = array.item_as::<&Compound>(2).unwrap();
        assert_eq!(third.item_as::<f32>("Motion").unwrap(), 0.5);

        let typed = array.item_as::<&Compound>(3).unwrap();
        let bytes = typed.item_as::<&Array>("B").unwrap();
        assert_eq!(bytes.element_kind(), Kind::Byte);
        assert_eq!(bytes.item_as::<i8>(0).unwrap(), 34);
        let ints = typed.item_as::<&Array>("I").unwrap();
        assert_eq!(ints.item_as::<i32>(0).unwrap(), 645);
        let longs = typed.item_as::<&Array>("L").unwrap();
        assert_eq!(longs.item_as::<i64>(0).unwrap(), 358);
    }

    #[test]
    fn test_quoted_complex_key() {
        let compound = Compound::parse("{\"!@#$%^&*()=';:<[}]{>\": 151215L}").unwrap();
        assert_eq!(
            compound.item_as::<i64>("!@#$%^&*()=';:<[}]{>").unwrap(),
            151215
        );
    }

    #[test]
    fn test_compound_whitespace() {
        let text = "   {test:20.0d, key : true , smth: \"  abc  \"}xxx";
        let mut cursor = 0;
        let compound = Compound::parse_at(text, &mut cursor).unwrap();
        assert_eq!(cursor, text.len() - 3);
        assert_eq!(compound.item_as::<f64>("test").unwrap(), 20.0);
        assert!(compound.item_as::<bool>("key").unwrap());
        assert_eq!(compound.item_as::<&str>("smth").unwrap(), "  abc  ");
    }

    #[test]
    fn test_key_kind_is_discarded() {
        let compound = Compound::parse("{1b: x, true: y}").unwrap();
        assert!(compound.contains_key("1b"));
        assert!(compound.contains_key("true"));
    }

    #[test]
    fn test_compound_errors() {
        let err = Compound::parse("{a:1,a:2}").unwrap_err();
        assert_eq!(err, Error::DuplicateKey("a".to_string()));

        let err = Compound::parse("{a 1}").unwrap_err();
        assert_eq!(syntax_message(err), "expected ':' after key");

        let err = Compound::parse("{a:1").unwrap_err();
        assert_eq!(syntax_message(err), "unterminated compound");

        let err = Compound::parse("{a:1;b:2}").unwrap_err();
        assert_eq!(syntax_message(err), "expected ',' or '}'");

        let err = Compound::parse("{a:1,}").unwrap_err();
        assert_eq!(syntax_message(err), "expected key");
    }

    #[test]
    fn test_dispatch() {
        assert!(Tag::parse("  {}").unwrap().is_compound());
        assert!(Tag::parse("[]").unwrap().is_array());
        assert_eq!(Tag::parse("true").unwrap(), Tag::from(true));

        let err = Tag::parse("   ").unwrap_err();
        assert_eq!(syntax_message(err), "no value");
    }

    #[test]
    fn test_parse_tag_skips_trailing_whitespace() {
        let mut parser = Parser::new(" 5  \n x");
        assert_eq!(parser.parse_tag().unwrap(), Tag::from(5i32));
        assert_eq!(parser.remaining(), "x");
    }

    #[test]
    fn test_cursor_past_end_reads_as_end() {
        let mut cursor = 50;
        let err = Tag::parse_at("[1]", &mut cursor).unwrap_err();
        assert_eq!(syntax_message(err), "no value");
    }

    #[test]
    fn test_depth_limit() {
        let parsed = Parser::new("[[1]]").with_max_depth(2).parse_tag();
        assert!(parsed.is_ok());

        let err = Parser::new("{a:{b:{}}}")
            .with_max_depth(2)
            .parse_tag()
            .unwrap_err();
        assert!(matches!(err, Error::DepthLimit { limit: 2, .. }));
    }

    #[test]
    fn test_from_str() {
        let tag: Tag = "{a:1}".parse().unwrap();
        assert_eq!(tag.cast::<&Compound>().unwrap().value_as::<i64>("a").unwrap(), 1);
    }
}
