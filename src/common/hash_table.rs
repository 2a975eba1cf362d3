//! Registry of de-duplicated style objects.
//!
//! A writer walks the document, feeds every style-bearing object into a
//! [`HashTable`], and emits one output entry per distinct hash code. The
//! table stamps each source object with the index of its entry so later
//! passes can reference it.

use std::collections::HashMap;

use tracing::trace;

use crate::common::hash::ComparableObject;

/// Insertion-ordered set of objects keyed by hash code.
#[derive(Debug, Clone)]
pub struct HashTable<T> {
    items: Vec<T>,
    index_by_hash: HashMap<String, usize>,
}

impl<T: ComparableObject + Clone> HashTable<T> {
    /// Create an empty table.
    #[inline]
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index_by_hash: HashMap::new(),
        }
    }

    /// Register `source` and return the index of its entry.
    ///
    /// A clone is stored when the hash code has not been seen yet. In both
    /// cases the source's hash index is set to the entry index.
    pub fn add(&mut self, source: &mut T) -> usize {
        let hash = source.hash_code();
        let index = match self.index_by_hash.get(&hash) {
            Some(&index) => index,
            None => {
                let index = self.items.len();
                source.set_hash_index(Some(index));
                self.items.push(source.clone());
                trace!(index, hash = %hash, "registered style object");
                self.index_by_hash.insert(hash, index);
                index
            },
        };
        source.set_hash_index(Some(index));
        index
    }

    /// Register every object in `sources`.
    pub fn add_from_source(&mut self, sources: &mut [T]) {
        for source in sources.iter_mut() {
            self.add(source);
        }
    }

    /// Index of the entry registered under `hash`.
    #[inline]
    pub fn index_for_hash(&self, hash: &str) -> Option<usize> {
        self.index_by_hash.get(hash).copied()
    }

    /// Entry at `index`.
    #[inline]
    pub fn by_index(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Entry registered under `hash`.
    #[inline]
    pub fn by_hash(&self, hash: &str) -> Option<&T> {
        self.index_for_hash(hash).and_then(|index| self.items.get(index))
    }

    /// Number of distinct entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every entry.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.index_by_hash.clear();
    }

    /// Iterate entries in index order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: ComparableObject + Clone> Default for HashTable<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::style::{Color, Font};

    fn font(name: &str) -> Font {
        let mut font = Font::new();
        font.set_name(name);
        font
    }

    #[test]
    fn test_equal_hashes_share_an_entry() {
        let mut table = HashTable::new();
        let mut first = font("Arial");
        let mut second = font("Arial");
        let mut third = font("Calibri");

        assert_eq!(table.add(&mut first), 0);
        assert_eq!(table.add(&mut second), 0);
        assert_eq!(table.add(&mut third), 1);

        assert_eq!(table.len(), 2);
        assert_eq!(second.hash_index(), Some(0));
        assert_eq!(third.hash_index(), Some(1));
    }

    #[test]
    fn test_lookup_by_hash_and_index() {
        let mut table = HashTable::new();
        let mut fonts = vec![font("Arial"), font("Calibri"), font("Arial")];
        table.add_from_source(&mut fonts);

        let hash = fonts[1].hash_code();
        assert_eq!(table.index_for_hash(&hash), Some(1));
        assert_eq!(table.by_hash(&hash).map(Font::name), Some("Calibri"));
        assert_eq!(table.by_index(0).map(Font::name), Some("Arial"));
        assert!(table.by_index(2).is_none());
        assert_eq!(fonts[2].hash_index(), Some(0));
    }

    #[test]
    fn test_changed_object_gets_new_entry() {
        let mut table = HashTable::new();
        let mut font = font("Arial");
        table.add(&mut font);
        font.set_color(Color::from_hex("FFFF0000").unwrap_or_default());
        assert_eq!(table.add(&mut font), 1);
        assert_eq!(table.iter().count(), 2);

        table.clear();
        assert!(table.is_empty());
    }
}
