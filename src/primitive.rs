//! Scalar leaf values.
//!
//! A [`Primitive`] wraps exactly one value of one of the eight scalar kinds.
//! Primitives are immutable once built; the only way to get a value of another
//! kind out of one is through the [`Converter`](crate::Converter).
//!
//! ```rust
//! use snbt::{Kind, Primitive};
//!
//! let byte = Primitive::from(-24i8);
//! assert_eq!(byte.kind(), Kind::Byte);
//!
//! // Exact-kind equality.
//! assert!(byte.value_equals(&Primitive::Byte(-24)));
//! assert!(!byte.value_equals(&Primitive::Int(-24)));
//!
//! // Widening through the conversion matrix.
//! assert_eq!(byte.value_as::<i64>().unwrap(), -24);
//! ```

use crate::{Converter, Error, Kind, Result};

/// A single scalar value with a fixed kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Primitive {
    /// Returns the concrete kind of this value.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Primitive::Bool(_) => Kind::Bool,
            Primitive::Byte(_) => Kind::Byte,
            Primitive::Short(_) => Kind::Short,
            Primitive::Int(_) => Kind::Int,
            Primitive::Long(_) => Kind::Long,
            Primitive::Float(_) => Kind::Float,
            Primitive::Double(_) => Kind::Double,
            Primitive::String(_) => Kind::String,
        }
    }

    /// Compares kind, then value. Values of different kinds are never equal.
    #[inline]
    #[must_use]
    pub fn value_equals(&self, other: &Primitive) -> bool {
        self == other
    }

    /// If the value is a string, returns a reference to it.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Primitive::String(s) => Some(s),
            _ => None,
        }
    }

    /// Converts this value to the kind `to` using the standard conversion matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if the matrix has no `(kind, to)` entry or
    /// the value does not fit the destination kind.
    pub fn convert(&self, to: Kind) -> Result<Primitive> {
        Converter::standard().convert(self, to)
    }

    /// Returns the value as `V`, converting through the standard matrix.
    ///
    /// ```rust
    /// use snbt::Primitive;
    ///
    /// assert_eq!(Primitive::Int(3).value_as::<f64>().unwrap(), 3.0);
    /// assert!(Primitive::Int(3).value_as::<bool>().unwrap());
    /// assert!(Primitive::Int(3).value_as::<String>().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] when no conversion to `V` exists.
    pub fn value_as<V: Scalar>(&self) -> Result<V> {
        self.value_as_with(Converter::standard())
    }

    /// Returns the value as `V`, converting through `converter`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] when `converter` cannot produce `V`.
    pub fn value_as_with<V: Scalar>(&self, converter: &Converter) -> Result<V> {
        let converted = converter.convert(self, V::KIND)?;
        V::from_primitive(converted).ok_or_else(|| Error::conversion(self.kind(), V::KIND))
    }

    /// Non-failing form of [`Primitive::value_as`].
    #[must_use]
    pub fn try_value_as<V: Scalar>(&self) -> Option<V> {
        self.value_as().ok()
    }
}

/// Rust types that correspond one-to-one with a scalar [`Kind`].
///
/// Implemented for `bool`, `i8`, `i16`, `i32`, `i64`, `f32`, `f64` and `String`.
pub trait Scalar: Sized {
    /// The kind this type holds.
    const KIND: Kind;

    /// Extracts the value if `primitive` has exactly this kind.
    fn from_primitive(primitive: Primitive) -> Option<Self>;

    /// Wraps the value in a primitive of this kind.
    fn into_primitive(self) -> Primitive;
}

macro_rules! impl_scalar {
    ($ty:ty, $variant:ident) => {
        impl Scalar for $ty {
            const KIND: Kind = Kind::$variant;

            fn from_primitive(primitive: Primitive) -> Option<Self> {
                match primitive {
                    Primitive::$variant(value) => Some(value),
                    _ => None,
                }
            }

            fn into_primitive(self) -> Primitive {
                Primitive::$variant(self)
            }
        }

        impl From<$ty> for Primitive {
            fn from(value: $ty) -> Self {
                Primitive::$variant(value)
            }
        }
    };
}

impl_scalar!(bool, Bool);
impl_scalar!(i8, Byte);
impl_scalar!(i16, Short);
impl_scalar!(i32, Int);
impl_scalar!(i64, Long);
impl_scalar!(f32, Float);
impl_scalar!(f64, Double);
impl_scalar!(String, String);

impl From<&str> for Primitive {
    fn from(value: &str) -> Self {
        Primitive::String(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(Primitive::Bool(true).kind(), Kind::Bool);
        assert_eq!(Primitive::Short(1).kind(), Kind::Short);
        assert_eq!(Primitive::Float(1.0).kind(), Kind::Float);
        assert_eq!(Primitive::from("x").kind(), Kind::String);
    }

    #[test]
    fn test_value_equals_is_kind_strict() {
        assert!(Primitive::Short(155).value_equals(&Primitive::Short(155)));
        assert!(!Primitive::Short(155).value_equals(&Primitive::Short(12)));
        assert!(!Primitive::Short(155).value_equals(&Primitive::Int(155)));
        assert!(!Primitive::Short(155).value_equals(&Primitive::from("155")));
    }

    #[test]
    fn test_value_as_identity() {
        assert_eq!(Primitive::from("abc").value_as::<String>().unwrap(), "abc");
        assert_eq!(Primitive::Double(34.642).value_as::<f64>().unwrap(), 34.642);
        assert!(Primitive::Bool(true).value_as::<bool>().unwrap());
    }

    #[test]
    fn test_value_as_widening() {
        assert_eq!(Primitive::Byte(-24).value_as::<i16>().unwrap(), -24);
        assert_eq!(Primitive::Int(7).value_as::<i64>().unwrap(), 7);
        assert_eq!(Primitive::Float(0.5).value_as::<f64>().unwrap(), 0.5);
    }

    #[test]
    fn test_value_as_rejects_unsupported() {
        assert!(matches!(
            Primitive::Bool(true).value_as::<String>(),
            Err(Error::Conversion {
                from: Kind::Bool,
                to: Kind::String
            })
        ));
        assert!(Primitive::Long(1).value_as::<i32>().is_err());
        assert_eq!(Primitive::Double(1.5).try_value_as::<i64>(), None);
    }

    #[test]
    fn test_value_as_with_custom_matrix() {
        let narrowing = Converter::standard().clone().with_checked_narrowing();
        assert_eq!(
            Primitive::Long(124).value_as_with::<i8>(&narrowing).unwrap(),
            124
        );
        assert!(Primitive::Long(300)
            .value_as_with::<i8>(&narrowing)
            .is_err());
    }

    #[test]
    fn test_scalar_round_trip() {
        assert_eq!(i16::from_primitive(42i16.into_primitive()), Some(42));
        assert_eq!(i16::from_primitive(Primitive::Int(42)), None);
        assert_eq!(<String as Scalar>::KIND, Kind::String);
    }
}
