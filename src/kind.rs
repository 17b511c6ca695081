//! The closed set of tag kinds.
//!
//! Every [`Tag`](crate::Tag) has exactly one concrete [`Kind`]. Two further
//! members, [`Kind::Tag`] and [`Kind::Primitive`], are abstract: no tag *has*
//! them, but they take part in "is-a" queries and serve as the declared element
//! kind of heterogeneous arrays.
//!
//! ```rust
//! use snbt::Kind;
//!
//! assert!(Kind::Tag.admits(Kind::Compound));
//! assert!(Kind::Primitive.admits(Kind::Byte));
//! assert!(!Kind::Primitive.admits(Kind::Array));
//! assert!(!Kind::Int.admits(Kind::Long));
//! ```

use std::fmt;

/// Kind of a tag or of an array's elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
    Bool,
    /// Signed 8-bit integer, suffix `b`.
    Byte,
    /// Signed 16-bit integer, suffix `s`.
    Short,
    /// Signed 32-bit integer, no suffix.
    Int,
    /// Signed 64-bit integer, suffix `l`.
    Long,
    /// 32-bit float, suffix `f`.
    Float,
    /// 64-bit float, suffix `d`.
    Double,
    String,
    Array,
    Compound,
    /// Any primitive kind.
    Primitive,
    /// Any tag at all.
    Tag,
}

impl Kind {
    /// The eight scalar kinds, in conversion-table order.
    pub const SCALARS: [Kind; 8] = [
        Kind::Bool,
        Kind::Byte,
        Kind::Short,
        Kind::Int,
        Kind::Long,
        Kind::Float,
        Kind::Double,
        Kind::String,
    ];

    /// Returns `true` for kinds a tag can actually have.
    #[inline]
    #[must_use]
    pub const fn is_concrete(self) -> bool {
        !matches!(self, Kind::Primitive | Kind::Tag)
    }

    /// Returns `true` for the eight scalar kinds.
    #[inline]
    #[must_use]
    pub const fn is_scalar(self) -> bool {
        !matches!(
            self,
            Kind::Array | Kind::Compound | Kind::Primitive | Kind::Tag
        )
    }

    /// Returns `true` for the four integer kinds.
    #[inline]
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self, Kind::Byte | Kind::Short | Kind::Int | Kind::Long)
    }

    /// Returns `true` if a tag of kind `other` "is a" `self`.
    ///
    /// This is the subtype relation used by casts and array admission checks.
    #[inline]
    #[must_use]
    pub fn admits(self, other: Kind) -> bool {
        match self {
            Kind::Tag => true,
            Kind::Primitive => other.is_scalar() || other == Kind::Primitive,
            _ => self == other,
        }
    }

    /// Element kind selected by a typed-array prefix letter (`B`, `I`, `L`).
    ///
    /// ```rust
    /// use snbt::Kind;
    ///
    /// assert_eq!(Kind::from_array_code('B'), Some(Kind::Byte));
    /// assert_eq!(Kind::from_array_code('X'), None);
    /// ```
    #[must_use]
    pub const fn from_array_code(code: char) -> Option<Kind> {
        match code {
            'B' => Some(Kind::Byte),
            'I' => Some(Kind::Int),
            'L' => Some(Kind::Long),
            _ => None,
        }
    }

    /// Prefix letter written for a typed array of this element kind.
    #[must_use]
    pub const fn array_code(self) -> Option<char> {
        match self {
            Kind::Byte => Some('B'),
            Kind::Int => Some('I'),
            Kind::Long => Some('L'),
            _ => None,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "Bool",
            Kind::Byte => "Byte",
            Kind::Short => "Short",
            Kind::Int => "Int",
            Kind::Long => "Long",
            Kind::Float => "Float",
            Kind::Double => "Double",
            Kind::String => "String",
            Kind::Array => "Array",
            Kind::Compound => "Compound",
            Kind::Primitive => "Primitive",
            Kind::Tag => "Tag",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
