//! Named containers shared by every level of the model.
//!
//! - **NamedArray**: a fixed-capacity buffer tagged with a name
//! - **NamedCollection**: an ordered, growable sequence of named entities
//!
//! Neither container enforces name uniqueness. Duplicate names are kept as-is.

mod named_array;

pub use named_array::*;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, ModelResult};

/// Anything that can live in a [`NamedCollection`].
pub trait Named {
    /// The entity's name.
    fn name(&self) -> &str;
}

/// An ordered, mutable sequence of named entities.
///
/// Order is always insertion order as modified by `insert`/`remove`. The
/// wire form is a plain JSON array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedCollection<E> {
    items: Vec<E>,
}

impl<E> Default for NamedCollection<E> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<E> NamedCollection<E> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities in the collection.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection holds no entities.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the entity at `index`.
    pub fn get(&self, index: usize) -> ModelResult<&E> {
        let len = self.items.len();
        self.items
            .get(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })
    }

    /// Get a mutable reference to the entity at `index`.
    pub fn get_mut(&mut self, index: usize) -> ModelResult<&mut E> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or(ModelError::IndexOutOfRange { index, len })
    }

    /// Replace the entity at `index`, returning the one it displaced.
    pub fn set(&mut self, index: usize, entity: E) -> ModelResult<E> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, entity))
    }

    /// Append an entity at the end.
    pub fn add(&mut self, entity: E) {
        self.items.push(entity);
    }

    /// Insert an entity before `index`. `index == len()` appends.
    pub fn insert(&mut self, index: usize, entity: E) -> ModelResult<()> {
        let len = self.items.len();
        if index > len {
            return Err(ModelError::IndexOutOfRange { index, len });
        }
        self.items.insert(index, entity);
        Ok(())
    }

    /// Remove and return the entity at `index`.
    pub fn remove_at(&mut self, index: usize) -> ModelResult<E> {
        let len = self.items.len();
        if index >= len {
            return Err(ModelError::IndexOutOfRange { index, len });
        }
        Ok(self.items.remove(index))
    }

    /// Remove every entity.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over the entities in order.
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.items.iter()
    }

    /// Iterate mutably over the entities in order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, E> {
        self.items.iter_mut()
    }

    /// View the entities as a slice.
    pub fn as_slice(&self) -> &[E] {
        &self.items
    }
}

impl<E: PartialEq> NamedCollection<E> {
    /// Position of the first entity equal to `entity`.
    pub fn index_of(&self, entity: &E) -> Option<usize> {
        self.items.iter().position(|e| e == entity)
    }

    /// Check if an entity equal to `entity` is present.
    pub fn contains(&self, entity: &E) -> bool {
        self.index_of(entity).is_some()
    }

    /// Remove the first entity equal to `entity`.
    ///
    /// Returns `false` and leaves the collection untouched when nothing matches.
    pub fn remove(&mut self, entity: &E) -> bool {
        match self.index_of(entity) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}

impl<E: Named> NamedCollection<E> {
    /// Names of the entities, in collection order.
    ///
    /// The iterator is lazy and cloneable; each call reads the current contents.
    pub fn names(&self) -> impl Iterator<Item = &str> + Clone + '_ {
        self.items.iter().map(Named::name)
    }

    /// First entity carrying `name`.
    pub fn find_by_name(&self, name: &str) -> Option<&E> {
        self.items.iter().find(|e| e.name() == name)
    }
}

impl<E> FromIterator<E> for NamedCollection<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<E> From<Vec<E>> for NamedCollection<E> {
    fn from(items: Vec<E>) -> Self {
        Self { items }
    }
}

impl<E> Extend<E> for NamedCollection<E> {
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<E> IntoIterator for NamedCollection<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a NamedCollection<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item(&'static str);

    impl Named for Item {
        fn name(&self) -> &str {
            self.0
        }
    }

    fn abc() -> NamedCollection<Item> {
        [Item("a"), Item("b"), Item("c")].into_iter().collect()
    }

    #[test]
    fn test_add_preserves_order() {
        let mut collection = NamedCollection::new();
        collection.add(Item("first"));
        collection.add(Item("second"));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["first", "second"]);
    }

    #[test]
    fn test_insert_bounds() {
        let mut collection = abc();

        collection.insert(0, Item("start")).unwrap();
        collection.insert(4, Item("end")).unwrap();
        assert_eq!(
            collection.names().collect::<Vec<_>>(),
            vec!["start", "a", "b", "c", "end"]
        );

        let err = collection.insert(7, Item("late")).unwrap_err();
        assert_eq!(err, ModelError::IndexOutOfRange { index: 7, len: 5 });
        assert_eq!(collection.len(), 5);
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut collection = abc();

        let err = collection.remove_at(5).unwrap_err();
        assert_eq!(err, ModelError::IndexOutOfRange { index: 5, len: 3 });
        assert_eq!(collection, abc());

        assert_eq!(collection.remove_at(1).unwrap(), Item("b"));
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_remove_by_value() {
        let mut collection = abc();

        assert!(!collection.remove(&Item("missing")));
        assert_eq!(collection, abc());

        assert!(collection.remove(&Item("a")));
        assert!(!collection.contains(&Item("a")));
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn test_remove_first_match_only() {
        let mut collection: NamedCollection<Item> =
            [Item("dup"), Item("x"), Item("dup")].into_iter().collect();

        assert!(collection.remove(&Item("dup")));
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["x", "dup"]);
    }

    #[test]
    fn test_get_and_set() {
        let mut collection = abc();

        assert_eq!(collection.get(2).unwrap(), &Item("c"));
        assert!(collection.get(3).is_err());

        let old = collection.set(0, Item("z")).unwrap();
        assert_eq!(old, Item("a"));
        assert_eq!(collection.get(0).unwrap(), &Item("z"));
        assert!(collection.set(3, Item("w")).is_err());
    }

    #[test]
    fn test_index_of_and_contains() {
        let collection = abc();

        assert_eq!(collection.index_of(&Item("b")), Some(1));
        assert_eq!(collection.index_of(&Item("q")), None);
        assert!(collection.contains(&Item("c")));
    }

    #[test]
    fn test_duplicate_names_allowed() {
        let mut collection = NamedCollection::new();
        collection.add(Item("same"));
        collection.add(Item("same"));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["same", "same"]);
        assert_eq!(collection.find_by_name("same"), Some(&Item("same")));
    }

    #[test]
    fn test_names_is_restartable_and_live() {
        let mut collection = abc();

        let names = collection.names();
        let first: Vec<_> = names.clone().collect();
        let second: Vec<_> = names.collect();
        assert_eq!(first, second);

        collection.add(Item("d"));
        assert_eq!(collection.names().count(), 4);
    }
}
