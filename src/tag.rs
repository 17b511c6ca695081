//! The tag tree.
//!
//! [`Tag`] is the closed variant every parsed node belongs to: a
//! [`Primitive`] leaf, an [`Array`] or a [`Compound`].
//!
//! ## Capability casts
//!
//! Three operations, driven by the [`TagView`] trait, are the only way code in
//! this crate looks inside a tag:
//!
//! - [`Tag::is_a`]: does the tag have (a subtype of) the requested kind?
//! - [`Tag::cast`]: view the tag as that kind, or fail with
//!   [`Error::TypeMismatch`]
//! - [`Tag::try_cast`]: the same, as an `Option`
//!
//! ```rust
//! use snbt::{from_str, Compound, Primitive, Tag};
//!
//! let tag = from_str("{name: hello, count: 14s}").unwrap();
//! assert!(tag.is_a::<&Compound>());
//! assert!(tag.is_a::<&Tag>());
//! assert!(!tag.is_a::<&Primitive>());
//!
//! let compound = tag.cast::<&Compound>().unwrap();
//! let count = compound.get("count").unwrap();
//! assert_eq!(count.cast::<i16>().unwrap(), 14);
//! assert!(count.try_cast::<i32>().is_none()); // casts never convert
//! ```
//!
//! ## Serde
//!
//! `Tag` implements `Serialize` and `Deserialize`, mapping each scalar kind to
//! the serde data model type of the same width.

use crate::{Array, Compound, Error, Kind, Primitive, Result, Scalar};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A node in a tag tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    Primitive(Primitive),
    Array(Array),
    Compound(Compound),
}

/// A typed view of a tag, used by the capability casts.
///
/// Implemented for the container references (`&Tag`, `&Primitive`, `&Array`,
/// `&Compound`) and for the exact-kind scalar views `bool`, `i8`, `i16`, `i32`,
/// `i64`, `f32`, `f64` and `&str`.
pub trait TagView<'a>: Sized {
    /// The kind a tag must satisfy to be viewed as `Self`.
    const KIND: Kind;

    /// Returns the view if `tag` satisfies [`Self::KIND`].
    fn view(tag: &'a Tag) -> Option<Self>;
}

impl Tag {
    /// Returns the concrete kind of this tag.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Tag::Primitive(p) => p.kind(),
            Tag::Array(_) => Kind::Array,
            Tag::Compound(_) => Kind::Compound,
        }
    }

    /// Returns `true` if this tag is of kind `kind` or of a subtype of it.
    #[inline]
    #[must_use]
    pub fn is(&self, kind: Kind) -> bool {
        kind.admits(self.kind())
    }

    /// Returns `true` if this tag can be viewed as `T`.
    #[inline]
    #[must_use]
    pub fn is_a<'a, T: TagView<'a>>(&'a self) -> bool {
        self.is(T::KIND)
    }

    /// Views this tag as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the tag is not a `T`.
    pub fn cast<'a, T: TagView<'a>>(&'a self) -> Result<T> {
        T::view(self).ok_or_else(|| Error::type_mismatch(T::KIND, self.kind()))
    }

    /// Views this tag as `T`, or returns `None`.
    #[inline]
    #[must_use]
    pub fn try_cast<'a, T: TagView<'a>>(&'a self) -> Option<T> {
        T::view(self)
    }

    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self, Tag::Primitive(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Tag::Array(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_compound(&self) -> bool {
        matches!(self, Tag::Compound(_))
    }

    /// If the tag is an array, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Tag::Array(array) => Some(array),
            _ => None,
        }
    }

    /// If the tag is a compound, returns a mutable reference to it.
    #[inline]
    #[must_use]
    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    /// Returns the primitive value as `V`, converting through the standard matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for containers and [`Error::Conversion`]
    /// when the value cannot be converted.
    pub fn value_as<V: Scalar>(&self) -> Result<V> {
        self.cast::<&Primitive>()?.value_as()
    }

    /// Non-failing form of [`Tag::value_as`].
    #[must_use]
    pub fn try_value_as<V: Scalar>(&self) -> Option<V> {
        self.try_cast::<&Primitive>()?.try_value_as()
    }
}

impl<'a> TagView<'a> for &'a Tag {
    const KIND: Kind = Kind::Tag;

    fn view(tag: &'a Tag) -> Option<Self> {
        Some(tag)
    }
}

impl<'a> TagView<'a> for &'a Primitive {
    const KIND: Kind = Kind::Primitive;

    fn view(tag: &'a Tag) -> Option<Self> {
        match tag {
            Tag::Primitive(p) => Some(p),
            _ => None,
        }
    }
}

impl<'a> TagView<'a> for &'a Array {
    const KIND: Kind = Kind::Array;

    fn view(tag: &'a Tag) -> Option<Self> {
        match tag {
            Tag::Array(array) => Some(array),
            _ => None,
        }
    }
}

impl<'a> TagView<'a> for &'a Compound {
    const KIND: Kind = Kind::Compound;

    fn view(tag: &'a Tag) -> Option<Self> {
        match tag {
            Tag::Compound(compound) => Some(compound),
            _ => None,
        }
    }
}

impl<'a> TagView<'a> for &'a str {
    const KIND: Kind = Kind::String;

    fn view(tag: &'a Tag) -> Option<Self> {
        match tag {
            Tag::Primitive(Primitive::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

macro_rules! impl_scalar_view {
    ($ty:ty, $variant:ident) => {
        impl<'a> TagView<'a> for $ty {
            const KIND: Kind = Kind::$variant;

            fn view(tag: &'a Tag) -> Option<Self> {
                match tag {
                    Tag::Primitive(Primitive::$variant(value)) => Some(*value),
                    _ => None,
                }
            }
        }
    };
}

impl_scalar_view!(bool, Bool);
impl_scalar_view!(i8, Byte);
impl_scalar_view!(i16, Short);
impl_scalar_view!(i32, Int);
impl_scalar_view!(i64, Long);
impl_scalar_view!(f32, Float);
impl_scalar_view!(f64, Double);

impl From<Primitive> for Tag {
    fn from(value: Primitive) -> Self {
        Tag::Primitive(value)
    }
}

impl From<Array> for Tag {
    fn from(value: Array) -> Self {
        Tag::Array(value)
    }
}

impl From<Compound> for Tag {
    fn from(value: Compound) -> Self {
        Tag::Compound(value)
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Tag {
                fn from(value: $ty) -> Self {
                    Tag::Primitive(Primitive::from(value))
                }
            }
        )*
    };
}

impl_from_scalar!(bool, i8, i16, i32, i64, f32, f64, String, &str);

impl TryFrom<Tag> for Primitive {
    type Error = Error;

    fn try_from(tag: Tag) -> Result<Self> {
        match tag {
            Tag::Primitive(p) => Ok(p),
            other => Err(Error::type_mismatch(Kind::Primitive, other.kind())),
        }
    }
}

impl TryFrom<Tag> for Array {
    type Error = Error;

    fn try_from(tag: Tag) -> Result<Self> {
        match tag {
            Tag::Array(array) => Ok(array),
            other => Err(Error::type_mismatch(Kind::Array, other.kind())),
        }
    }
}

impl TryFrom<Tag> for Compound {
    type Error = Error;

    fn try_from(tag: Tag) -> Result<Self> {
        match tag {
            Tag::Compound(compound) => Ok(compound),
            other => Err(Error::type_mismatch(Kind::Compound, other.kind())),
        }
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Tag::Primitive(p) => p.serialize(serializer),
            Tag::Array(array) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(array.len()))?;
                for element in array {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            Tag::Compound(compound) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(compound.len()))?;
                for (k, v) in compound.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

impl Serialize for Primitive {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Primitive::Bool(b) => serializer.serialize_bool(*b),
            Primitive::Byte(v) => serializer.serialize_i8(*v),
            Primitive::Short(v) => serializer.serialize_i16(*v),
            Primitive::Int(v) => serializer.serialize_i32(*v),
            Primitive::Long(v) => serializer.serialize_i64(*v),
            Primitive::Float(v) => serializer.serialize_f32(*v),
            Primitive::Double(v) => serializer.serialize_f64(*v),
            Primitive::String(s) => serializer.serialize_str(s),
        }
    }
}

impl<'de> Deserialize<'de> for Tag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct TagVisitor;

        impl<'de> Visitor<'de> for TagVisitor {
            type Value = Tag;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a boolean, number, string, sequence or map")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_i8<E>(self, value: i8) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_i16<E>(self, value: i16) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_i32<E>(self, value: i32) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Tag::from)
                    .map_err(|_| E::custom(format!("integer {} does not fit in a Long", value)))
            }

            fn visit_f32<E>(self, value: f32) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Tag::from(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut tags = Vec::new();
                while let Some(elem) = seq.next_element()? {
                    tags.push(elem);
                }
                Ok(Tag::Array(Array::from(tags)))
            }

            fn visit_map<A>(self, mut map: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut compound = Compound::new();
                while let Some((key, value)) = map.next_entry::<String, Tag>()? {
                    compound
                        .insert(key, value)
                        .map_err(<A::Error as de::Error>::custom)?;
                }
                Ok(Tag::Compound(compound))
            }
        }

        deserializer.deserialize_any(TagVisitor)
    }
}
