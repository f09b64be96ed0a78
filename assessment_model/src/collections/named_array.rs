//! Fixed-capacity arrays tagged with a name.

use serde::{Deserialize, Serialize};

use super::Named;
use crate::error::{ModelError, ModelResult};

/// A fixed-size, index-addressable buffer tagged with a name.
///
/// Both the name and the size are set at construction and never change.
/// Contents are mutated in place through [`NamedArray::set`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedArray<T> {
    #[serde(rename = "ObservableName")]
    name: String,

    #[serde(rename = "Observables")]
    values: Vec<T>,
}

impl<T: Default> NamedArray<T> {
    /// Create an array of `size` default-valued slots.
    pub fn new(name: impl Into<String>, size: usize) -> Self {
        let mut values = Vec::with_capacity(size);
        values.resize_with(size, T::default);
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create an array from a signed size, as handed over by external loaders.
    ///
    /// A negative size is rejected with [`ModelError::InvalidArgument`].
    pub fn try_new(name: impl Into<String>, size: i64) -> ModelResult<Self> {
        let size = usize::try_from(size).map_err(|_| {
            ModelError::InvalidArgument(format!("array size must not be negative, got {size}"))
        })?;
        Ok(Self::new(name, size))
    }

    /// Reset every slot to its default value.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|v| *v = T::default());
    }
}

impl<T> NamedArray<T> {
    /// Create an array holding exactly `values`; its size is their count.
    pub fn from_values(name: impl Into<String>, values: Vec<T>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The array's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The fixed number of slots.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the array has zero slots.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get the value at `index`.
    pub fn get(&self, index: usize) -> ModelResult<&T> {
        let len = self.values.len();
        self.values
            .get(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })
    }

    /// Overwrite the value at `index`.
    pub fn set(&mut self, index: usize, value: T) -> ModelResult<()> {
        let len = self.values.len();
        let slot = self
            .values
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    /// Iterate over the slots in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.values.iter()
    }

    /// View the slots as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }
}

impl<T: Clone> NamedArray<T> {
    /// Overwrite every slot with `value`.
    pub fn fill(&mut self, value: T) {
        self.values.fill(value);
    }
}

impl NamedArray<String> {
    /// The stored strings as a read-only lazy view.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.values.iter().map(String::as_str)
    }
}

impl<T> Named for NamedArray<T> {
    fn name(&self) -> &str {
        &self.name
    }
}

impl<'a, T> IntoIterator for &'a NamedArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
