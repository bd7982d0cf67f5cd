//! Object identifier membership index.

use crate::record::ObjectRecord;
use rustc_hash::FxHashSet;

/// Hash-set index over object identifiers.
///
/// Membership is independent of the order object rows were read in, so
/// unsorted catalogs never produce false negatives.
#[derive(Debug, Clone, Default)]
pub struct ObjectIdIndex {
    ids: FxHashSet<String>,
}

impl ObjectIdIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            ids: FxHashSet::default(),
        }
    }

    /// Build an index from parsed object records.
    pub fn from_objects(objects: &[ObjectRecord]) -> Self {
        Self::from_ids(objects.iter().map(|o| o.id.clone()))
    }

    /// Build an index from raw identifier strings.
    pub fn from_ids<I: IntoIterator<Item = String>>(ids: I) -> Self {
        Self {
            ids: ids.into_iter().collect(),
        }
    }

    /// Insert a single identifier.
    pub fn insert(&mut self, id: String) {
        self.ids.insert(id);
    }

    /// Test whether an identifier is in the index.
    #[inline]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of distinct identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
