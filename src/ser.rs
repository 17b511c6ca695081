//! SNBT output.
//!
//! This module provides the [`Serializer`] that renders a tag tree back to
//! SNBT text.
//!
//! ## Overview
//!
//! - **Suffixes**: every scalar is written with the suffix the parser needs to
//!   recover its kind (`1b`, `2s`, `3`, `4L`, `0.5f`, `0.25d`)
//! - **Typed arrays**: arrays declared as Byte, Int or Long get their
//!   `B;`/`I;`/`L;` prefix
//! - **Quote minimization**: strings and keys are only quoted when the bare
//!   text would be cut short or read back as another kind
//!
//! Output of a parsed tree parses back to an equal tree, as long as its floats
//! are finite. Only untyped and Byte, Int or Long arrays have a spelling of
//! their own; an array declared with any other element kind is written
//! untyped and reads back as a [`Kind::Tag`](crate::Kind::Tag) array.
//!
//! ## Usage
//!
//! ```rust
//! use snbt::{from_str, to_string, to_string_pretty};
//!
//! let tag = from_str("{ id: \"123\", Count: 14s, list: [B; 1b, 2b] }").unwrap();
//! assert_eq!(to_string(&tag), "{id:\"123\",Count:14s,list:[B;1b,2b]}");
//! assert_eq!(
//!     to_string_pretty(&tag),
//!     "{\n  id: \"123\",\n  Count: 14s,\n  list: [B;\n    1b,\n    2b\n  ]\n}"
//! );
//! ```
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use snbt::{Primitive, Serializer, SnbtOptions};
//!
//! let mut serializer = Serializer::new(SnbtOptions::new());
//! serializer.write_primitive(&Primitive::Long(9999));
//! assert_eq!(serializer.into_inner(), "9999L");
//! ```

use crate::parser::{classify, is_literal_char};
use crate::{Array, Compound, Primitive, SnbtOptions, Tag};
use std::fmt;

/// The SNBT serializer.
///
/// Appends SNBT text for tags to an internal buffer. Created via
/// [`Serializer::new`] with customizable options.
pub struct Serializer {
    output: String,
    options: SnbtOptions,
    indent_level: usize,
}

impl Serializer {
    pub fn new(options: SnbtOptions) -> Self {
        Serializer {
            output: String::with_capacity(128),
            options,
            indent_level: 0,
        }
    }

    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_newline(&mut self) {
        if self.options.pretty {
            self.output.push('\n');
            for _ in 0..self.indent_level * self.options.indent {
                self.output.push(' ');
            }
        }
    }

    /// Bare text is safe when it is all literal characters and classifies back
    /// to the same string.
    #[inline]
    fn needs_quotes(s: &str) -> bool {
        s.is_empty()
            || !s.chars().all(is_literal_char)
            || classify(s).as_str() != Some(s)
    }

    fn write_quoted(&mut self, s: &str) {
        let quote = self.options.quote.as_char();
        self.output.push(quote);
        for ch in s.chars() {
            if ch == quote || ch == '\\' {
                self.output.push('\\');
            }
            self.output.push(ch);
        }
        self.output.push(quote);
    }

    fn write_string(&mut self, s: &str) {
        if Self::needs_quotes(s) {
            self.write_quoted(s);
        } else {
            self.output.push_str(s);
        }
    }

    /// Keys never get a kind, so only their characters matter.
    fn write_key(&mut self, key: &str) {
        if key.is_empty() || !key.chars().all(is_literal_char) {
            self.write_quoted(key);
        } else {
            self.output.push_str(key);
        }
    }

    pub fn write_tag(&mut self, tag: &Tag) {
        match tag {
            Tag::Primitive(p) => self.write_primitive(p),
            Tag::Array(array) => self.write_array(array),
            Tag::Compound(compound) => self.write_compound(compound),
        }
    }

    pub fn write_primitive(&mut self, primitive: &Primitive) {
        let text = match primitive {
            Primitive::Bool(v) => v.to_string(),
            Primitive::Byte(v) => format!("{}b", v),
            Primitive::Short(v) => format!("{}s", v),
            Primitive::Int(v) => v.to_string(),
            Primitive::Long(v) => format!("{}L", v),
            Primitive::Float(v) => format!("{}f", v),
            Primitive::Double(v) => format!("{}d", v),
            Primitive::String(s) => {
                self.write_string(s);
                return;
            }
        };
        self.output.push_str(&text);
    }

    pub fn write_array(&mut self, array: &Array) {
        self.output.push('[');
        if let Some(code) = array.element_kind().array_code() {
            self.output.push(code);
            self.output.push(';');
        }
        if array.is_empty() {
            self.output.push(']');
            return;
        }

        self.indent_level += 1;
        for (i, element) in array.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_tag(element);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push(']');
    }

    pub fn write_compound(&mut self, compound: &Compound) {
        self.output.push('{');
        if compound.is_empty() {
            self.output.push('}');
            return;
        }

        self.indent_level += 1;
        for (i, (key, value)) in compound.iter().enumerate() {
            if i > 0 {
                self.output.push(',');
            }
            self.write_newline();
            self.write_key(key);
            self.output.push(':');
            if self.options.pretty {
                self.output.push(' ');
            }
            self.write_tag(value);
        }
        self.indent_level -= 1;
        self.write_newline();
        self.output.push('}');
    }
}

/// Renders with `{}` compactly and with `{:#}` pretty-printed.
fn display_with(
    f: &mut fmt::Formatter<'_>,
    write: impl FnOnce(&mut Serializer),
) -> fmt::Result {
    let options = if f.alternate() {
        SnbtOptions::pretty()
    } else {
        SnbtOptions::new()
    };
    let mut serializer = Serializer::new(options);
    write(&mut serializer);
    f.write_str(&serializer.into_inner())
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |s| s.write_tag(self))
    }
}

impl fmt::Display for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |s| s.write_primitive(self))
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |s| s.write_array(self))
    }
}

impl fmt::Display for Compound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        display_with(f, |s| s.write_compound(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FromSnbt, Kind, Quote};

    fn compact(tag: &Tag) -> String {
        let mut serializer = Serializer::new(SnbtOptions::new());
        serializer.write_tag(tag);
        serializer.into_inner()
    }

    #[test]
    fn test_scalar_suffixes() {
        assert_eq!(compact(&Tag::from(true)), "true");
        assert_eq!(compact(&Tag::from(-24i8)), "-24b");
        assert_eq!(compact(&Tag::from(344i16)), "344s");
        assert_eq!(compact(&Tag::from(7i32)), "7");
        assert_eq!(compact(&Tag::from(9999i64)), "9999L");
        assert_eq!(compact(&Tag::from(0.5f32)), "0.5f");
        assert_eq!(compact(&Tag::from(2.0f64)), "2d");
    }

    #[test]
    fn test_string_quoting() {
        assert_eq!(compact(&Tag::from("heythere")), "heythere");
        assert_eq!(compact(&Tag::from("99bx")), "99bx");
        assert_eq!(compact(&Tag::from("")), "\"\"");
        assert_eq!(compact(&Tag::from("two words")), "\"two words\"");
        assert_eq!(compact(&Tag::from("true")), "\"true\"");
        assert_eq!(compact(&Tag::from("12")), "\"12\"");
        assert_eq!(compact(&Tag::from("5b")), "\"5b\"");
        assert_eq!(compact(&Tag::from(".d")), ".d");
        assert_eq!(compact(&Tag::from("say \"hi\"")), r#""say \"hi\"""#);
        assert_eq!(compact(&Tag::from("a\\b")), r#""a\\b""#);
    }

    #[test]
    fn test_single_quotes() {
        let mut serializer = Serializer::new(SnbtOptions::new().with_quote(Quote::Single));
        serializer.write_primitive(&Primitive::from("it's"));
        assert_eq!(serializer.into_inner(), r"'it\'s'");
    }

    #[test]
    fn test_keys() {
        let mut compound = Compound::new();
        compound.insert("true", 1i32).unwrap();
        compound.insert("@$#()", 2i32).unwrap();
        compound.insert("", 3i32).unwrap();
        assert_eq!(
            compact(&Tag::Compound(compound)),
            r#"{true:1,"@$#()":2,"":3}"#
        );
    }

    #[test]
    fn test_arrays() {
        let bytes = Array::from_tags(Kind::Byte, vec![Tag::from(19i8), Tag::from(-42i8)]).unwrap();
        assert_eq!(bytes.to_string(), "[B;19b,-42b]");
        assert_eq!(Array::of(Kind::Long).to_string(), "[L;]");
        assert_eq!(Array::new().to_string(), "[]");

        let mixed = Array::from(vec![Tag::from(1i32), Tag::from("x")]);
        assert_eq!(mixed.to_string(), "[1,x]");
    }

    #[test]
    fn test_pretty() {
        let tag = Tag::parse("{a:[1,2],b:{},c:[]}").unwrap();
        assert_eq!(
            format!("{:#}", tag),
            "{\n  a: [\n    1,\n    2\n  ],\n  b: {},\n  c: []\n}"
        );
    }

    #[test]
    fn test_output_reparses() {
        let text = "{compound:{\"name\":hello,value:2.43d, array :[ {value: 34b, value2: 12}, \
                    {Count:14s, Time:9999L }, {Motion:.5f}, {B:[B;34b],I:[I;645],L:[L;358L]} ]}, \
                    \"@$#()\": true, s: \"9999999999\"}";
        let tag = Tag::parse(text).unwrap();
        assert_eq!(Tag::parse(&tag.to_string()).unwrap(), tag);
        assert_eq!(Tag::parse(&format!("{:#}", tag)).unwrap(), tag);
    }

    #[test]
    fn test_arrays_without_prefix_reparse_untyped() {
        let shorts = Array::from_tags(Kind::Short, vec![Tag::from(1i16), Tag::from(2i16)]).unwrap();
        let written = shorts.to_string();
        assert_eq!(written, "[1s,2s]");

        let back = Array::parse(&written).unwrap();
        assert_eq!(back.element_kind(), Kind::Tag);
        assert_ne!(back, shorts);
        assert_eq!(back.items_as::<i16>().unwrap(), shorts.items_as::<i16>().unwrap());
    }

    #[test]
    fn test_display_primitive() {
        assert_eq!(Primitive::Short(5).to_string(), "5s");
        assert_eq!(Primitive::from("a b").to_string(), "\"a b\"");
    }
}
