//! Fixed in-memory media index.

use bridge_traits::{
    error::Result,
    media_store::{MediaCursor, MediaQuery, MediaRow, MediaStore, MemoryCursor},
};
use std::collections::HashSet;

/// Media index over a fixed row set.
///
/// Useful for hosts that already hold an inventory snapshot and for tests.
/// Rows are sorted per query, so the stored order does not matter. Ids are
/// unique: a repeated id keeps its first row.
#[derive(Debug, Clone, Default)]
pub struct MemoryMediaStore {
    rows: Option<Vec<MediaRow>>,
}

impl MemoryMediaStore {
    pub fn new(rows: Vec<MediaRow>) -> Self {
        let mut seen = HashSet::new();
        let rows = rows
            .into_iter()
            .filter(|row| match row.id {
                Some(id) => seen.insert(id),
                None => true,
            })
            .collect();
        Self { rows: Some(rows) }
    }

    /// A store whose queries yield no cursor.
    pub fn unavailable() -> Self {
        Self { rows: None }
    }
}

impl MediaStore for MemoryMediaStore {
    fn query(&self, query: &MediaQuery) -> Result<Option<Box<dyn MediaCursor>>> {
        let Some(rows) = &self.rows else {
            return Ok(None);
        };

        let mut rows = rows.clone();
        if let Some(order) = query.sort_order {
            order.sort_rows(&mut rows);
        }

        Ok(Some(Box::new(MemoryCursor::new(
            query.projection.clone(),
            rows,
        ))))
    }
}
