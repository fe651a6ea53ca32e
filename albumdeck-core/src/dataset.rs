use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// An opaque identifier for a playable item, as issued by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub String);
impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single item in the collection, as the navigator cares about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetEntry {
    /// The item title
    pub title: SmolStr,
    /// The (primary) artist name
    pub artist: SmolStr,
    /// The item identifier, used to issue play commands
    pub id: ItemId,
}

/// One page of results from a [`crate::PageSource`].
#[derive(Debug, Clone, Default)]
pub struct Page {
    /// The items on this page, in server order.
    pub items: Vec<DatasetEntry>,
    /// The total number of items the remote source reports.
    pub total: usize,
}

/// The fully materialized collection for one session.
///
/// Created once by [`crate::fetch_all`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset(Vec<DatasetEntry>);
impl Dataset {
    /// The number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The entry at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&DatasetEntry> {
        self.0.get(index)
    }

    /// All entries, in server order.
    pub fn entries(&self) -> &[DatasetEntry] {
        &self.0
    }
}
impl From<Vec<DatasetEntry>> for Dataset {
    fn from(entries: Vec<DatasetEntry>) -> Self {
        Self(entries)
    }
}
impl FromIterator<DatasetEntry> for Dataset {
    fn from_iter<I: IntoIterator<Item = DatasetEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
