use std::fmt;

use itertools::Itertools;

/// Insertion-ordered bag of `T` with a small functional API on top of `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<T> {
    items: Vec<T>,
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Container<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Removes and returns the item at `index`, shifting later items left.
    /// Out of range yields `None` instead of panicking like `Vec::remove`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn for_each<F: FnMut(&T)>(&self, action: F) {
        self.items.iter().for_each(action);
    }

    pub fn map<R, F: FnMut(&T) -> R>(&self, transform: F) -> Vec<R> {
        self.items.iter().map(transform).collect()
    }

    pub fn filter<P: FnMut(&T) -> bool>(&self, mut predicate: P) -> Vec<T>
    where
        T: Clone,
    {
        self.items
            .iter()
            .filter(|item| predicate(*item))
            .cloned()
            .collect()
    }
}

impl<T> FromIterator<T> for Container<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Container<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.items.iter().join(", "))
    }
}
