//! The scalar conversion matrix.
//!
//! Value accessors never cast between kinds implicitly. Instead, every
//! `(source, destination)` pair that may be converted has an explicit entry in a
//! [`Converter`]; a missing entry means the conversion is unsupported.
//!
//! ## Standard matrix
//!
//! | From | To |
//! |------|----|
//! | Bool | Byte, Short, Int, Long (`1`/`0`), Float, Double (`1.0`/`0.0`) |
//! | Byte | Bool, Short, Int, Long, Float, Double |
//! | Short | Bool, Int, Long, Float, Double |
//! | Int | Bool, Long, Float, Double |
//! | Long | Bool, Float, Double |
//! | Float | Double |
//! | Double | Float (only when the magnitude fits) |
//!
//! Integer to Bool yields `true` for any nonzero value. Every kind converts to
//! itself. Strings convert to nothing else, floats never convert to integers and
//! integers never narrow.
//!
//! ## Alternate matrices
//!
//! ```rust
//! use snbt::{Converter, Kind, Primitive};
//!
//! let converter = Converter::standard().clone().with_checked_narrowing();
//! let small = converter.convert(&Primitive::Long(124), Kind::Byte).unwrap();
//! assert_eq!(small, Primitive::Byte(124));
//!
//! // Narrowing never truncates.
//! assert!(converter.convert(&Primitive::Long(300), Kind::Byte).is_err());
//! ```

use crate::{Error, Kind, Primitive, Result};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::OnceLock;
use tracing::trace;

/// A single matrix entry. Returns `None` when the value does not fit.
pub type ConvertFn = fn(&Primitive) -> Option<Primitive>;

static STANDARD: OnceLock<Converter> = OnceLock::new();

/// A table of allowed scalar conversions.
#[derive(Clone)]
pub struct Converter {
    entries: BTreeMap<(Kind, Kind), ConvertFn>,
}

impl Converter {
    /// Creates a matrix with no entries; only identity conversions succeed.
    #[must_use]
    pub fn empty() -> Self {
        Converter {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the shared standard matrix.
    #[must_use]
    pub fn standard() -> &'static Converter {
        STANDARD.get_or_init(Converter::build_standard)
    }

    fn build_standard() -> Self {
        let mut converter = Converter::empty();

        for to in [Kind::Byte, Kind::Short, Kind::Int, Kind::Long] {
            converter.entries.insert((Kind::Bool, to), entry_for(to));
            converter.entries.insert((to, Kind::Bool), to_bool);
        }
        converter.entries.insert((Kind::Bool, Kind::Float), to_float);
        converter.entries.insert((Kind::Bool, Kind::Double), to_double);

        let integers = [Kind::Byte, Kind::Short, Kind::Int, Kind::Long];
        for (i, &from) in integers.iter().enumerate() {
            for &to in &integers[i + 1..] {
                converter.entries.insert((from, to), entry_for(to));
            }
            converter.entries.insert((from, Kind::Float), to_float);
            converter.entries.insert((from, Kind::Double), to_double);
        }

        converter.entries.insert((Kind::Float, Kind::Double), to_double);
        converter.entries.insert((Kind::Double, Kind::Float), to_float);
        converter
    }

    /// Adds range-checked integer narrowing (e.g. Long to Byte).
    ///
    /// A value outside the destination range still fails with
    /// [`Error::Conversion`].
    #[must_use]
    pub fn with_checked_narrowing(mut self) -> Self {
        let integers = [Kind::Byte, Kind::Short, Kind::Int, Kind::Long];
        for (i, &to) in integers.iter().enumerate() {
            for &from in &integers[i + 1..] {
                self.entries.insert((from, to), entry_for(to));
            }
        }
        self
    }

    /// Adds or replaces the entry for `(from, to)`.
    #[must_use]
    pub fn with(mut self, from: Kind, to: Kind, convert: ConvertFn) -> Self {
        self.entries.insert((from, to), convert);
        self
    }

    /// Removes the entry for `(from, to)`.
    #[must_use]
    pub fn without(mut self, from: Kind, to: Kind) -> Self {
        self.entries.remove(&(from, to));
        self
    }

    /// Returns `true` if values of kind `from` may be converted to `to`.
    #[must_use]
    pub fn supports(&self, from: Kind, to: Kind) -> bool {
        (from == to && from.is_scalar()) || self.entries.contains_key(&(from, to))
    }

    /// Converts `value` to the kind `to`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Conversion`] if there is no entry for the pair or the
    /// entry rejects the value.
    pub fn convert(&self, value: &Primitive, to: Kind) -> Result<Primitive> {
        let from = value.kind();
        if from == to {
            return Ok(value.clone());
        }
        let Some(convert) = self.entries.get(&(from, to)) else {
            trace!(%from, %to, "no conversion entry");
            return Err(Error::conversion(from, to));
        };
        match convert(value) {
            Some(converted) if converted.kind() == to => Ok(converted),
            _ => {
                trace!(%from, %to, ?value, "value rejected by conversion entry");
                Err(Error::conversion(from, to))
            }
        }
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::standard().clone()
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(
                self.entries
                    .keys()
                    .map(|(from, to)| format!("{} -> {}", from, to)),
            )
            .finish()
    }
}

fn entry_for(kind: Kind) -> ConvertFn {
    match kind {
        Kind::Byte => to_byte,
        Kind::Short => to_short,
        Kind::Int => to_int,
        Kind::Long => to_long,
        Kind::Float => to_float,
        Kind::Double => to_double,
        _ => to_bool,
    }
}

/// Integer view of bools and integer kinds.
fn integral(value: &Primitive) -> Option<i64> {
    match value {
        Primitive::Bool(b) => Some(i64::from(*b)),
        Primitive::Byte(v) => Some(i64::from(*v)),
        Primitive::Short(v) => Some(i64::from(*v)),
        Primitive::Int(v) => Some(i64::from(*v)),
        Primitive::Long(v) => Some(*v),
        _ => None,
    }
}

fn to_bool(value: &Primitive) -> Option<Primitive> {
    match value {
        Primitive::Bool(_) => None,
        other => integral(other).map(|v| Primitive::Bool(v != 0)),
    }
}

fn to_byte(value: &Primitive) -> Option<Primitive> {
    integral(value)
        .and_then(|v| i8::try_from(v).ok())
        .map(Primitive::Byte)
}

fn to_short(value: &Primitive) -> Option<Primitive> {
    integral(value)
        .and_then(|v| i16::try_from(v).ok())
        .map(Primitive::Short)
}

fn to_int(value: &Primitive) -> Option<Primitive> {
    integral(value)
        .and_then(|v| i32::try_from(v).ok())
        .map(Primitive::Int)
}

fn to_long(value: &Primitive) -> Option<Primitive> {
    integral(value).map(Primitive::Long)
}

fn to_float(value: &Primitive) -> Option<Primitive> {
    match value {
        Primitive::Float(v) => Some(Primitive::Float(*v)),
        Primitive::Double(v) if !v.is_finite() || v.abs() <= f64::from(f32::MAX) => {
            Some(Primitive::Float(*v as f32))
        }
        Primitive::Double(_) => None,
        other => integral(other).map(|v| Primitive::Float(v as f32)),
    }
}

fn to_double(value: &Primitive) -> Option<Primitive> {
    match value {
        Primitive::Float(v) => Some(Primitive::Double(f64::from(*v))),
        Primitive::Double(v) => Some(Primitive::Double(*v)),
        other => integral(other).map(|v| Primitive::Double(v as f64)),
    }
}
