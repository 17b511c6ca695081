//! Keyed tag collections.
//!
//! This module provides [`Compound`], a wrapper around [`IndexMap`] mapping
//! unique string keys to tags. Unlike a plain map, inserting a key that is
//! already present is an error rather than a replacement.
//!
//! Iteration follows insertion order, which keeps written output stable, but
//! two compounds with the same entries in a different order are still equal.
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{Compound, Error, Tag};
//!
//! let mut compound = Compound::new();
//! compound.insert("name", "Steve").unwrap();
//! compound.insert("health", 20.0f32).unwrap();
//!
//! assert!(matches!(
//!     compound.insert("name", "Alex"),
//!     Err(Error::DuplicateKey(_))
//! ));
//! assert_eq!(compound.item_as::<&str>("name").unwrap(), "Steve");
//! assert_eq!(compound.value_as::<f64>("health").unwrap(), 20.0);
//! ```

use crate::{Converter, Error, Primitive, Result, Scalar, Tag, TagView};
use indexmap::IndexMap;

/// A collection of uniquely keyed tags.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Compound(IndexMap<String, Tag>);

impl Compound {
    #[must_use]
    pub fn new() -> Self {
        Compound(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Compound(IndexMap::with_capacity(capacity))
    }

    /// Adds an entry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateKey`] if `key` is already present; the existing
    /// entry is kept.
    pub fn insert(&mut self, key: impl Into<String>, tag: impl Into<Tag>) -> Result<()> {
        use indexmap::map::Entry;

        match self.0.entry(key.into()) {
            Entry::Occupied(entry) => Err(Error::DuplicateKey(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(tag.into());
                Ok(())
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.0.get(key)
    }

    #[inline]
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.0.get_mut(key)
    }

    /// Returns the tag stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn item(&self, key: &str) -> Result<&Tag> {
        self.0
            .get(key)
            .ok_or_else(|| Error::KeyNotFound(key.to_string()))
    }

    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Removes an entry, returning its tag. Remaining entries keep their order.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.0.shift_remove(key)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Tag> {
        self.0.keys()
    }

    pub fn values(&self) -> indexmap::map::Values<'_, String, Tag> {
        self.0.values()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Tag> {
        self.0.iter()
    }

    /// Returns `true` if `key` is present and its tag is a `T`.
    #[must_use]
    pub fn item_is<'a, T: TagView<'a>>(&'a self, key: &str) -> bool {
        self.0.get(key).is_some_and(|tag| tag.is_a::<T>())
    }

    /// Views the tag under `key` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] or [`Error::TypeMismatch`].
    pub fn item_as<'a, T: TagView<'a>>(&'a self, key: &str) -> Result<T> {
        self.item(key)?.cast()
    }

    #[must_use]
    pub fn try_item_as<'a, T: TagView<'a>>(&'a self, key: &str) -> Option<T> {
        self.0.get(key)?.try_cast()
    }

    /// Views every tag as `T`, keyed as in the compound.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for the first tag that is not a `T`.
    pub fn items_as<'a, T: TagView<'a>>(&'a self) -> Result<Vec<(&'a str, T)>> {
        self.0
            .iter()
            .map(|(key, tag)| tag.cast::<T>().map(|view| (key.as_str(), view)))
            .collect()
    }

    /// Converts the tag under `key` to `V` through the standard matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`], [`Error::TypeMismatch`] for containers,
    /// or [`Error::Conversion`].
    pub fn value_as<V: Scalar>(&self, key: &str) -> Result<V> {
        self.item(key)?.value_as()
    }

    #[must_use]
    pub fn try_value_as<V: Scalar>(&self, key: &str) -> Option<V> {
        self.0.get(key)?.try_value_as()
    }

    /// Converts every tag to `V` through the standard matrix.
    ///
    /// # Errors
    ///
    /// Fails on the first tag that cannot be converted.
    pub fn values_as<V: Scalar>(&self) -> Result<Vec<(&str, V)>> {
        self.values_as_with(Converter::standard())
    }

    /// Converts every tag to `V` through `converter`.
    ///
    /// # Errors
    ///
    /// Fails on the first tag that cannot be converted.
    pub fn values_as_with<V: Scalar>(&self, converter: &Converter) -> Result<Vec<(&str, V)>> {
        self.0
            .iter()
            .map(|(key, tag)| {
                tag.cast::<&Primitive>()
                    .and_then(|p| p.value_as_with(converter))
                    .map(|value| (key.as_str(), value))
            })
            .collect()
    }
}

impl IntoIterator for Compound {
    type Item = (String, Tag);
    type IntoIter = indexmap::map::IntoIter<String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = (&'a String, &'a Tag);
    type IntoIter = indexmap::map::Iter<'a, String, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
