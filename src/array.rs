//! Kind-checked tag sequences.
//!
//! An [`Array`] carries an element [`Kind`] chosen when it is built. Every
//! element must satisfy that kind; insertions that don't are rejected with
//! [`Error::TypeMismatch`]. Untyped arrays use [`Kind::Tag`] and accept anything.
//!
//! ## Examples
//!
//! ```rust
//! use snbt::{Array, Error, Kind, Tag};
//!
//! let mut bytes = Array::of(Kind::Byte);
//! bytes.push(34i8).unwrap();
//! assert!(matches!(bytes.push(1i32), Err(Error::TypeMismatch { .. })));
//!
//! let mut mixed = Array::new();
//! mixed.push(3i32).unwrap();
//! mixed.push("three").unwrap();
//! assert_eq!(mixed.len(), 2);
//!
//! // Scalar lookups go through the conversion matrix.
//! assert!(mixed.contains_value(3i64));
//! assert_eq!(mixed.index_of_value(3.0f64), Some(0));
//! ```

use crate::{Compound, Converter, Error, Kind, Primitive, Result, Scalar, Tag, TagView};

/// An ordered sequence of tags sharing one declared element kind.
#[derive(Clone, Debug, PartialEq)]
pub struct Array {
    element: Kind,
    items: Vec<Tag>,
}

impl Array {
    /// Creates an empty array accepting any tag.
    #[must_use]
    pub fn new() -> Self {
        Self::of(Kind::Tag)
    }

    /// Creates an empty array whose elements must satisfy `element`.
    #[must_use]
    pub fn of(element: Kind) -> Self {
        Array {
            element,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_capacity(element: Kind, capacity: usize) -> Self {
        Array {
            element,
            items: Vec::with_capacity(capacity),
        }
    }

    /// Builds an array of kind `element` from `tags`, checking each one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for the first tag that does not satisfy
    /// `element`.
    pub fn from_tags<I>(element: Kind, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = Tag>,
    {
        let mut array = Array::of(element);
        for tag in tags {
            array.push(tag)?;
        }
        Ok(array)
    }

    /// The declared element kind.
    #[inline]
    #[must_use]
    pub const fn element_kind(&self) -> Kind {
        self.element
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `tag` may be stored in this array.
    #[inline]
    #[must_use]
    pub fn admits(&self, tag: &Tag) -> bool {
        tag.is(self.element)
    }

    fn check(&self, tag: &Tag) -> Result<()> {
        if self.admits(tag) {
            Ok(())
        } else {
            Err(Error::type_mismatch(self.element, tag.kind()))
        }
    }

    /// Appends an element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the element does not satisfy the
    /// array's element kind. The array is left unchanged.
    pub fn push(&mut self, tag: impl Into<Tag>) -> Result<()> {
        let tag = tag.into();
        self.check(&tag)?;
        self.items.push(tag);
        Ok(())
    }

    /// Inserts an element at `index`, shifting later elements right.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index > len`, and
    /// [`Error::TypeMismatch`] for a non-conforming element.
    pub fn insert(&mut self, index: usize, tag: impl Into<Tag>) -> Result<()> {
        if index > self.items.len() {
            return Err(Error::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let tag = tag.into();
        self.check(&tag)?;
        self.items.insert(index, tag);
        Ok(())
    }

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<Tag> {
        self.item(index)?;
        Ok(self.items.remove(index))
    }

    /// Removes the first element equal to `tag`. Returns `true` if one was found.
    pub fn remove_item(&mut self, tag: &Tag) -> bool {
        match self.index_of(tag) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Tag> {
        self.items.get(index)
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`, and
    /// [`Error::TypeMismatch`] for a non-conforming element. The array is left
    /// unchanged on error.
    pub fn set(&mut self, index: usize, tag: impl Into<Tag>) -> Result<Tag> {
        self.item(index)?;
        let tag = tag.into();
        self.check(&tag)?;
        Ok(std::mem::replace(&mut self.items[index], tag))
    }

    /// Mutable access to a nested array element. Its kind cannot change
    /// through the returned reference.
    #[must_use]
    pub fn array_mut(&mut self, index: usize) -> Option<&mut Array> {
        self.items.get_mut(index).and_then(Tag::as_array_mut)
    }

    /// Mutable access to a nested compound element.
    #[must_use]
    pub fn compound_mut(&mut self, index: usize) -> Option<&mut Compound> {
        self.items.get_mut(index).and_then(Tag::as_compound_mut)
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`.
    pub fn item(&self, index: usize) -> Result<&Tag> {
        self.items.get(index).ok_or(Error::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.items.iter()
    }

    /// Returns `true` if an element is value-equal to `tag`.
    #[must_use]
    pub fn contains(&self, tag: &Tag) -> bool {
        self.items.contains(tag)
    }

    /// Position of the first element value-equal to `tag`.
    #[must_use]
    pub fn index_of(&self, tag: &Tag) -> Option<usize> {
        self.items.iter().position(|item| item == tag)
    }

    /// Returns `true` if some primitive element converts to `value`.
    ///
    /// Elements that are containers, or that cannot be converted to `V`, are
    /// skipped.
    #[must_use]
    pub fn contains_value<V: Scalar + PartialEq>(&self, value: V) -> bool {
        self.index_of_value(value).is_some()
    }

    /// Position of the first primitive element that converts to `value`.
    #[must_use]
    pub fn index_of_value<V: Scalar + PartialEq>(&self, value: V) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.try_value_as::<V>().as_ref() == Some(&value))
    }

    /// Returns `true` if the element at `index` exists and is a `T`.
    #[must_use]
    pub fn item_is<'a, T: TagView<'a>>(&'a self, index: usize) -> bool {
        self.items.get(index).is_some_and(|tag| tag.is_a::<T>())
    }

    /// Views the element at `index` as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] or [`Error::TypeMismatch`].
    pub fn item_as<'a, T: TagView<'a>>(&'a self, index: usize) -> Result<T> {
        self.item(index)?.cast()
    }

    #[must_use]
    pub fn try_item_as<'a, T: TagView<'a>>(&'a self, index: usize) -> Option<T> {
        self.items.get(index)?.try_cast()
    }

    /// Returns `true` if every element is a `T`. Vacuously true when empty.
    #[must_use]
    pub fn items_are<'a, T: TagView<'a>>(&'a self) -> bool {
        self.items.iter().all(|tag| tag.is_a::<T>())
    }

    /// Views every element as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] for the first element that is not a `T`.
    pub fn items_as<'a, T: TagView<'a>>(&'a self) -> Result<Vec<T>> {
        self.items.iter().map(|tag| tag.cast::<T>()).collect()
    }

    /// Views every element as `T`, or returns `None` if any element is not one.
    #[must_use]
    pub fn try_items_as<'a, T: TagView<'a>>(&'a self) -> Option<Vec<T>> {
        self.items.iter().map(|tag| tag.try_cast::<T>()).collect()
    }

    /// Converts the element at `index` to `V` through the standard matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`], [`Error::TypeMismatch`] when the
    /// element is a container, or [`Error::Conversion`].
    pub fn value_as<V: Scalar>(&self, index: usize) -> Result<V> {
        self.item(index)?.value_as()
    }

    #[must_use]
    pub fn try_value_as<V: Scalar>(&self, index: usize) -> Option<V> {
        self.items.get(index)?.try_value_as()
    }

    /// Converts every element to `V` through the standard matrix.
    ///
    /// ```rust
    /// use snbt::{Array, FromSnbt};
    ///
    /// let array = Array::parse("[1b, 2s, 3]").unwrap();
    /// assert_eq!(array.values_as::<i64>().unwrap(), vec![1, 2, 3]);
    /// assert_eq!(array.values_as::<bool>().unwrap(), vec![true, true, true]);
    /// assert!(array.values_as::<String>().is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Fails on the first element that cannot be converted.
    pub fn values_as<V: Scalar>(&self) -> Result<Vec<V>> {
        self.values_as_with(Converter::standard())
    }

    /// Converts every element to `V` through `converter`.
    ///
    /// # Errors
    ///
    /// Fails on the first element that cannot be converted.
    pub fn values_as_with<V: Scalar>(&self, converter: &Converter) -> Result<Vec<V>> {
        self.items
            .iter()
            .map(|tag| tag.cast::<&Primitive>()?.value_as_with(converter))
            .collect()
    }

    #[must_use]
    pub fn try_values_as<V: Scalar>(&self) -> Option<Vec<V>> {
        self.values_as().ok()
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds an untyped array. No check can fail since [`Kind::Tag`] admits every tag.
impl From<Vec<Tag>> for Array {
    fn from(items: Vec<Tag>) -> Self {
        Array {
            element: Kind::Tag,
            items,
        }
    }
}

impl IntoIterator for Array {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
