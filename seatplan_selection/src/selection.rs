// Copyright 2025 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// A small ordered set of keys plus a revision counter.
///
/// Keys live in a `Vec<T>` in insertion order with uniqueness enforced by
/// equality, so `T` needs neither hashing nor ordering. Selections of seats
/// are a handful of entries; a linear scan is all they need.
#[derive(Clone, Debug, Default)]
pub struct Selection<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> Selection<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if the selection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys in insertion order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the current revision counter.
    ///
    /// The revision is bumped only when the contents change. No-op calls,
    /// such as inserting a key that is already present, leave it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump_revision();
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> Selection<T> {
    /// Returns `true` if the selection contains `key`.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.position_of(key).is_some()
    }

    /// Adds `key` if it is not already present. Returns `true` if it was added.
    pub fn insert(&mut self, key: T) -> bool {
        if self.contains(&key) {
            return false;
        }
        self.items.push(key);
        self.bump_revision();
        true
    }

    /// Removes `key` if present. Returns `true` if it was removed.
    pub fn remove(&mut self, key: &T) -> bool {
        let Some(idx) = self.position_of(key) else {
            return false;
        };
        self.items.remove(idx);
        self.bump_revision();
        true
    }

    /// Toggles `key`. Returns `true` if it is selected afterwards.
    pub fn toggle(&mut self, key: T) -> bool {
        if let Some(idx) = self.position_of(&key) {
            self.items.remove(idx);
            self.bump_revision();
            false
        } else {
            self.items.push(key);
            self.bump_revision();
            true
        }
    }

    /// Replaces the selection with `keys`, ignoring duplicates in the input.
    ///
    /// The revision is bumped only if the resulting contents differ.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut new_items: Vec<T> = Vec::new();
        for key in keys {
            if !new_items.contains(&key) {
                new_items.push(key);
            }
        }
        if new_items == self.items {
            return;
        }
        self.items = new_items;
        self.bump_revision();
    }

    fn position_of(&self, key: &T) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}

impl<'a, T> IntoIterator for &'a Selection<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
