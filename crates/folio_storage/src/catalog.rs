//! Ordered, read-only record collections.

use im::Vector;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered collection of records.
///
/// A catalog is built once and never mutated; cloning shares structure, so
/// handing a copy to each session is cheap. Iteration order is insertion
/// order, which is also the order answers are reported in.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Catalog<R: Clone> {
    records: Vector<R>,
}

impl<R: Clone> Catalog<R> {
    /// Creates a catalog from records in the given order.
    #[must_use]
    pub fn new(records: Vec<R>) -> Self {
        Self {
            records: records.into_iter().collect(),
        }
    }

    /// Creates an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            records: Vector::new(),
        }
    }

    /// Iterates records in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &R> {
        self.records.iter()
    }

    /// Returns the record at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&R> {
        self.records.get(index)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: Clone> Default for Catalog<R> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<R: Clone> FromIterator<R> for Catalog<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a, R: Clone> IntoIterator for &'a Catalog<R> {
    type Item = &'a R;
    type IntoIter = im::vector::Iter<'a, R>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
