use serde::{Deserialize, Serialize};

use trove_core::{HasId, Patchable};

/// Ordered, exclusively-owned collection of homogeneous records.
///
/// Elements keep their insertion order; every lookup is a linear scan in
/// that order and mutating operations touch at most the first match.
/// Internal storage is never handed out mutably.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store<T> {
    items: Vec<T>,
}

impl<T> Store<T> {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the store holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element at the end of the sequence.
    ///
    /// Always succeeds: no capacity limit and no duplicate check.
    pub fn add(&mut self, element: T) {
        self.items.push(element);
    }

    /// Returns an immutable view over the elements in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Returns the first element satisfying the predicate, scanning in
    /// insertion order. `None` when nothing matches or the store is empty.
    pub fn find<P>(&self, mut predicate: P) -> Option<&T>
    where
        P: FnMut(&T) -> bool,
    {
        self.items.iter().find(|item| predicate(item))
    }

    /// Removes the first element satisfying the predicate.
    ///
    /// Returns whether a removal occurred. When several elements match,
    /// only the earliest one is removed (first match wins); later matches
    /// are left in place.
    pub fn remove<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.items.iter().position(|item| predicate(item)) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }
}

impl<T: Clone> Store<T> {
    /// Returns a snapshot copy of the current contents in insertion order.
    ///
    /// The copy is detached from the store; mutating it never affects the
    /// stored elements.
    pub fn get_all(&self) -> Vec<T> {
        self.items.clone()
    }
}

impl<T: Patchable> Store<T> {
    /// Patches the first element satisfying the predicate in place.
    ///
    /// Fields absent from the patch are left unchanged. Returns `false`
    /// and leaves the store untouched when nothing matches.
    pub fn update<P>(&mut self, mut predicate: P, patch: T::Patch) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        match self.items.iter_mut().find(|item| predicate(item)) {
            Some(item) => {
                item.apply_patch(patch);
                true
            }
            None => false,
        }
    }
}

impl<T: HasId> Store<T> {
    /// Returns the first element carrying the given id.
    pub fn find_by_id(&self, id: u64) -> Option<&T> {
        self.find(|item| item.id() == id)
    }

    /// Removes the first element carrying the given id.
    pub fn remove_by_id(&mut self, id: u64) -> bool {
        self.remove(|item| item.id() == id)
    }
}

impl<T: HasId + Patchable> Store<T> {
    /// Patches the first element carrying the given id.
    pub fn update_by_id(&mut self, id: u64, patch: T::Patch) -> bool {
        self.update(|item| item.id() == id, patch)
    }
}

impl<T> Default for Store<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Store<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
