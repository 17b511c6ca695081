//! # snbt
//!
//! A parser for stringified NBT (SNBT): the text form of nested, strongly-kinded
//! tag trees made of compounds, arrays and typed scalars.
//!
//! ## What is SNBT?
//!
//! SNBT writes a tag tree the way a person would type it:
//!
//! ```text
//! {id: "minecraft:stone", Count: 14s, Motion: [0.5d, 0.0d, -0.25d], Data: [B; 1b, 2b]}
//! ```
//!
//! Each unquoted scalar gets the most specific kind its spelling allows: a `b`,
//! `s`, `l`, `f` or `d` suffix selects Byte, Short, Long, Float or Double, a bare
//! integer is an Int, `true`/`false` are Bools and anything else is a String.
//!
//! ## Key Features
//!
//! - **Kind-preserving**: every scalar keeps the exact kind it was written with
//! - **Typed arrays**: `[B; ...]`, `[I; ...]` and `[L; ...]` reject elements of
//!   the wrong kind while parsing
//! - **Capability casts**: [`Tag::is_a`], [`Tag::cast`] and [`Tag::try_cast`]
//!   view a tag as a container or an exact scalar type
//! - **Explicit conversions**: a [`Converter`] table decides which scalar kinds
//!   may be read as which others
//! - **Embeddable**: parse from any byte offset and get the cursor back
//!
//! ## Quick Start
//!
//! ```rust
//! use snbt::{from_str, Array, Compound};
//!
//! let tag = from_str("{id: \"minecraft:stone\", Count: 14s, Data: [B; 1b, 2b]}").unwrap();
//! let item = tag.cast::<&Compound>().unwrap();
//!
//! assert_eq!(item.item_as::<&str>("id").unwrap(), "minecraft:stone");
//! assert_eq!(item.item_as::<i16>("Count").unwrap(), 14);
//!
//! // Casts never convert, value accessors do.
//! assert!(item.item_as::<i32>("Count").is_err());
//! assert_eq!(item.value_as::<i32>("Count").unwrap(), 14);
//!
//! let data = item.item_as::<&Array>("Data").unwrap();
//! assert_eq!(data.values_as::<i64>().unwrap(), vec![1, 2]);
//! ```
//!
//! ### Embedded Parsing
//!
//! ```rust
//! use snbt::from_str_at;
//!
//! let text = "give @p stone{Count: 3b} 1";
//! let mut cursor = 13;
//! let tag = from_str_at(text, &mut cursor).unwrap();
//! assert!(tag.is_compound());
//! assert_eq!(&text[cursor..], "1");
//! ```
//!
//! ### Writing SNBT
//!
//! ```rust
//! use snbt::{snbt, to_string};
//!
//! let tag = snbt!({ "name": "two words", "level": 3i8 });
//! assert_eq!(to_string(&tag), "{name:\"two words\",level:3b}");
//! ```
//!
//! ## Logging
//!
//! Parsing decisions are reported through `tracing` at `trace` level and failed
//! top-level parses at `debug` level. No subscriber is installed by this crate.

pub mod array;
pub mod compound;
pub mod convert;
pub mod error;
pub mod kind;
pub mod macros;
pub mod options;
pub mod parser;
pub mod primitive;
pub mod ser;
pub mod tag;

pub use array::Array;
pub use compound::Compound;
pub use convert::{ConvertFn, Converter};
pub use error::{Error, Result};
pub use kind::Kind;
pub use options::{Quote, SnbtOptions};
pub use parser::{FromSnbt, Parser};
pub use primitive::{Primitive, Scalar};
pub use ser::Serializer;
pub use tag::{Tag, TagView};

use tracing::debug;

/// Parses the first SNBT value in `s`.
///
/// Leading and trailing whitespace is skipped; anything after that is ignored.
///
/// # Examples
///
/// ```rust
/// use snbt::{from_str, Kind};
///
/// assert_eq!(from_str("-24b").unwrap().kind(), Kind::Byte);
/// assert_eq!(from_str("{a:1,b:2} rest").unwrap().kind(), Kind::Compound);
/// assert!(from_str("[asdf,,dfsf]").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::Syntax`] for malformed text, [`Error::TypeMismatch`] for a
/// typed array holding the wrong kind and [`Error::DuplicateKey`] for a
/// repeated compound key.
pub fn from_str(s: &str) -> Result<Tag> {
    let mut cursor = 0;
    from_str_at(s, &mut cursor)
}

/// Parses one SNBT value starting at byte offset `*cursor`.
///
/// On success the cursor is moved past the value and any whitespace after it.
/// On failure its position is unspecified.
///
/// # Errors
///
/// The same as [`from_str`].
pub fn from_str_at(s: &str, cursor: &mut usize) -> Result<Tag> {
    let mut parser = Parser::at(s, *cursor);
    let result = parser.parse_tag();
    *cursor = parser.position();
    if let Err(err) = &result {
        debug!("Parse failed at {}: {}", parser.position(), err);
    }
    result
}

/// Parses the first SNBT value in a UTF-8 byte slice.
///
/// # Errors
///
/// Returns [`Error::Custom`] if `v` is not valid UTF-8, otherwise the same as
/// [`from_str`].
pub fn from_slice(v: &[u8]) -> Result<Tag> {
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

/// Writes `tag` as compact SNBT.
///
/// ```rust
/// use snbt::{from_str, to_string};
///
/// let tag = from_str("{ a : [ 1 , 2 ] }").unwrap();
/// assert_eq!(to_string(&tag), "{a:[1,2]}");
/// ```
#[must_use]
pub fn to_string(tag: &Tag) -> String {
    to_string_with_options(tag, &SnbtOptions::default())
}

/// Writes `tag` as indented, multi-line SNBT.
#[must_use]
pub fn to_string_pretty(tag: &Tag) -> String {
    to_string_with_options(tag, &SnbtOptions::pretty())
}

/// Writes `tag` as SNBT with custom options.
#[must_use]
pub fn to_string_with_options(tag: &Tag, options: &SnbtOptions) -> String {
    let mut serializer = Serializer::new(options.clone());
    serializer.write_tag(tag);
    serializer.into_inner()
}
