//! Error types for SNBT parsing and tag access.
//!
//! Every fallible operation in this crate returns [`Result`], whose error is the
//! single [`Error`] enum below.
//!
//! ## Error Categories
//!
//! - **Syntax Errors**: Malformed SNBT text, with the byte position and an excerpt
//!   of the surrounding input
//! - **Type Mismatches**: A tag does not satisfy the kind an array or cast requires
//! - **Conversion Errors**: The conversion matrix has no entry for a requested kind
//! - **Lookup Errors**: Duplicate, missing keys and out-of-range indices
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{from_str, Error};
//!
//! let err = from_str("{a:1,a:2}").unwrap_err();
//! assert!(matches!(err, Error::DuplicateKey(ref key) if key == "a"));
//! ```

use crate::Kind;
use std::fmt;
use thiserror::Error;

/// Number of characters shown on each side of a syntax error position.
const CONTEXT_RADIUS: usize = 16;

/// Represents all possible errors raised while parsing or accessing tags.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Malformed SNBT text
    #[error("Syntax error at position {position}: {msg}\n{context}")]
    Syntax {
        position: usize,
        msg: String,
        context: String,
    },

    /// A tag does not have the kind that was required of it
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: Kind, found: Kind },

    /// No conversion entry exists, or the value does not fit the destination kind
    #[error("Cannot convert {from} to {to}")]
    Conversion { from: Kind, to: Kind },

    /// Compound insertion for a key that is already present
    #[error("Duplicate key: {0:?}")]
    DuplicateKey(String),

    /// Compound lookup for a key that is not present
    #[error("Key not found: {0:?}")]
    KeyNotFound(String),

    /// Array access past the end
    #[error("Index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Nesting exceeded the parser's configured depth limit
    #[error("Nesting deeper than {limit} levels at position {position}")]
    DepthLimit { limit: usize, position: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a syntax error at `position`, capturing an excerpt of `input`
    /// around it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snbt::Error;
    ///
    /// let err = Error::syntax("[1,,2]", 3, "empty element");
    /// assert!(err.to_string().contains("position 3"));
    /// assert!(err.to_string().contains("[1,,2]"));
    /// ```
    pub fn syntax(input: &str, position: usize, msg: &str) -> Self {
        Error::Syntax {
            position,
            msg: msg.to_string(),
            context: excerpt(input, position),
        }
    }

    /// Creates a type mismatch error.
    pub fn type_mismatch(expected: Kind, found: Kind) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates a conversion error for a missing or failing matrix entry.
    pub fn conversion(from: Kind, to: Kind) -> Self {
        Error::Conversion { from, to }
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Returns `true` for errors caused by malformed input text.
    #[must_use]
    pub const fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax { .. })
    }
}

/// Cuts a window of the input around `position` and marks the position with a caret.
fn excerpt(input: &str, position: usize) -> String {
    let position = floor_boundary(input, position.min(input.len()));
    let before: String = {
        let head: Vec<char> = input[..position].chars().rev().take(CONTEXT_RADIUS).collect();
        head.into_iter().rev().collect()
    };
    let after: String = input[position..].chars().take(CONTEXT_RADIUS).collect();
    let line = format!("{}{}", before, after).replace(['\n', '\r', '\t'], " ");
    format!("  {}\n  {}^", line, " ".repeat(before.chars().count()))
}

fn floor_boundary(input: &str, mut index: usize) -> usize {
    while !input.is_char_boundary(index) {
        index -= 1;
    }
    index
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
