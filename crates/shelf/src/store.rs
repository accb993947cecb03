//! The fixed item list.
//!
//! The shelf is an immutable value constructed once at process startup and
//! shared by read-only reference (`Arc<ItemShelf>`) with every handler.
//! There is no write path and no reinitialization.

use crate::types::ItemRecord;

/// Fixed, ordered list of items known to the service.
#[derive(Debug, Clone)]
pub struct ItemShelf {
    items: Vec<ItemRecord>,
}

impl ItemShelf {
    /// Build the shelf with its three seed entries.
    pub fn seeded() -> Self {
        Self {
            items: vec![
                ItemRecord::new("Foo"),
                ItemRecord::new("Bar"),
                ItemRecord::new("Baz"),
            ],
        }
    }

    /// Slice the list at `[skip, skip + limit)`, clamped to the available
    /// length. Out-of-range windows yield an empty slice, never an error.
    pub fn page(&self, skip: usize, limit: usize) -> &[ItemRecord] {
        let start = skip.min(self.items.len());
        let end = skip.saturating_add(limit).min(self.items.len());
        &self.items[start..end]
    }

    /// All entries, in order.
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
