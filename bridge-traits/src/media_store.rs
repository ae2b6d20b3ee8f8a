//! Media Index Abstractions
//!
//! Contract between the core and the platform's shared media index (Android's
//! `MediaStore`, a desktop directory scan, or an in-memory fixture).
//!
//! A query returns a [`MediaCursor`]: a row-oriented handle over the result
//! set. Cursors are owned values and release their platform resources when
//! dropped, so a cursor is closed whether iteration runs to the end, stops
//! early, or bails out on an error.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Base reference for video items on the primary external volume.
pub const EXTERNAL_VIDEO_CONTENT_URI: &str = "content://media/external/video/media";

/// Volume name used by the version-scoped collection endpoint.
pub const VOLUME_EXTERNAL: &str = "external";

/// Columns of the platform video index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaColumn {
    Id,
    DisplayName,
    Data,
    Size,
    Duration,
    DateModified,
}

impl MediaColumn {
    /// Column name as understood by the platform index.
    pub fn name(&self) -> &'static str {
        match self {
            MediaColumn::Id => "_id",
            MediaColumn::DisplayName => "_display_name",
            MediaColumn::Data => "_data",
            MediaColumn::Size => "_size",
            MediaColumn::Duration => "duration",
            MediaColumn::DateModified => "date_modified",
        }
    }

    /// Whether the column holds text rather than an integer.
    pub fn is_text(&self) -> bool {
        matches!(self, MediaColumn::DisplayName | MediaColumn::Data)
    }
}

impl fmt::Display for MediaColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Collection endpoint a video query runs against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MediaCollection {
    /// Volume-scoped endpoint (`getContentUri("external")`), API 29+.
    ExternalVolume,
    /// Pre-29 `EXTERNAL_CONTENT_URI` endpoint.
    LegacyExternalContent,
}

impl MediaCollection {
    pub fn uri(&self) -> ContentUri {
        match self {
            MediaCollection::ExternalVolume => {
                ContentUri::new(format!("content://media/{}/video/media", VOLUME_EXTERNAL))
            }
            MediaCollection::LegacyExternalContent => ContentUri::external_video(),
        }
    }
}

/// Reference string that other platform components resolve back to a media item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentUri(String);

impl ContentUri {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Canonical base reference for video items.
    pub fn external_video() -> Self {
        Self::new(EXTERNAL_VIDEO_CONTENT_URI)
    }

    /// Append an item id as a trailing path segment (`{base}/{id}`).
    pub fn with_appended_id(&self, id: i64) -> Self {
        Self(format!("{}/{}", self.0.trim_end_matches('/'), id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sort clause for a media query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOrder {
    pub column: MediaColumn,
    pub descending: bool,
}

impl SortOrder {
    pub fn ascending(column: MediaColumn) -> Self {
        Self {
            column,
            descending: false,
        }
    }

    pub fn descending(column: MediaColumn) -> Self {
        Self {
            column,
            descending: true,
        }
    }

    /// Render as the platform's sort clause, e.g. `date_modified DESC`.
    pub fn to_clause(&self) -> String {
        format!(
            "{} {}",
            self.column.name(),
            if self.descending { "DESC" } else { "ASC" }
        )
    }

    /// Stable in-place sort of rows using SQL ordering rules: NULL sorts
    /// first ascending and last descending.
    pub fn sort_rows(&self, rows: &mut [MediaRow]) {
        let column = self.column;
        rows.sort_by(|a, b| {
            let ordering = if column.is_text() {
                a.text(column).cmp(&b.text(column))
            } else {
                a.integer(column).cmp(&b.integer(column))
            };
            if self.descending {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }
}

/// A read-only query against the media index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaQuery {
    pub collection: MediaCollection,
    pub projection: Vec<MediaColumn>,
    pub sort_order: Option<SortOrder>,
}

impl MediaQuery {
    pub fn new(collection: MediaCollection) -> Self {
        Self {
            collection,
            projection: Vec::new(),
            sort_order: None,
        }
    }

    pub fn with_projection(mut self, columns: impl IntoIterator<Item = MediaColumn>) -> Self {
        self.projection = columns.into_iter().collect();
        self
    }

    pub fn with_sort_order(mut self, order: SortOrder) -> Self {
        self.sort_order = Some(order);
        self
    }

    /// Projection as platform column names.
    pub fn projection_names(&self) -> Vec<&'static str> {
        self.projection.iter().map(MediaColumn::name).collect()
    }
}

/// Row-oriented handle over a query result.
///
/// Starts positioned before the first row. Dropping the cursor releases the
/// underlying platform handle.
pub trait MediaCursor: Send {
    /// Advance to the next row. Returns `false` once the rows are exhausted.
    fn move_to_next(&mut self) -> Result<bool>;

    /// Index of a projected column. Fails if the column was not projected.
    fn column_index(&self, column: MediaColumn) -> Result<usize>;

    /// Integer value at `index` in the current row; `None` for NULL.
    fn get_i64(&self, index: usize) -> Result<Option<i64>>;

    /// Text value at `index` in the current row; `None` for NULL.
    fn get_string(&self, index: usize) -> Result<Option<String>>;
}

/// Platform media index.
///
/// - **Android**: `ContentResolver` over `MediaStore`
/// - **Desktop**: directory scan of the user's video folders
///
/// Returns `Ok(None)` when the index cannot produce a result set at all (the
/// platform handed back no cursor). Errors are reserved for failures while
/// talking to the platform.
pub trait MediaStore: Send + Sync {
    fn query(&self, query: &MediaQuery) -> Result<Option<Box<dyn MediaCursor>>>;
}

/// One row of the video index held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRow {
    pub id: Option<i64>,
    pub display_name: Option<String>,
    pub data: Option<String>,
    pub size: Option<i64>,
    pub duration: Option<i64>,
    pub date_modified: Option<i64>,
}

impl MediaRow {
    pub fn new(id: i64) -> Self {
        Self {
            id: Some(id),
            ..Self::default()
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_data(mut self, path: impl Into<String>) -> Self {
        self.data = Some(path.into());
        self
    }

    pub fn with_size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_duration(mut self, duration_ms: i64) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    pub fn with_date_modified(mut self, seconds: i64) -> Self {
        self.date_modified = Some(seconds);
        self
    }

    /// Integer view of a column. `None` for text columns.
    pub fn integer(&self, column: MediaColumn) -> Option<i64> {
        match column {
            MediaColumn::Id => self.id,
            MediaColumn::Size => self.size,
            MediaColumn::Duration => self.duration,
            MediaColumn::DateModified => self.date_modified,
            MediaColumn::DisplayName | MediaColumn::Data => None,
        }
    }

    /// Text view of a column. Integer columns are formatted.
    pub fn text(&self, column: MediaColumn) -> Option<String> {
        match column {
            MediaColumn::DisplayName => self.display_name.clone(),
            MediaColumn::Data => self.data.clone(),
            _ => self.integer(column).map(|value| value.to_string()),
        }
    }
}

/// Cursor over rows already held in memory.
///
/// Used by the desktop adapter and by tests. An optional close hook runs when
/// the cursor is dropped.
pub struct MemoryCursor {
    columns: Vec<MediaColumn>,
    rows: Vec<MediaRow>,
    position: Option<usize>,
    on_close: Option<Box<dyn FnOnce() + Send>>,
}

impl MemoryCursor {
    pub fn new(columns: Vec<MediaColumn>, rows: Vec<MediaRow>) -> Self {
        Self {
            columns,
            rows,
            position: None,
            on_close: None,
        }
    }

    /// Register a callback invoked when the cursor is released.
    pub fn with_close_hook(mut self, hook: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(hook));
        self
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn current(&self) -> Result<&MediaRow> {
        self.position
            .and_then(|position| self.rows.get(position))
            .ok_or_else(|| {
                BridgeError::OperationFailed("Cursor is not positioned on a row".to_string())
            })
    }

    fn column_at(&self, index: usize) -> Result<MediaColumn> {
        self.columns.get(index).copied().ok_or_else(|| {
            BridgeError::OperationFailed(format!("Column index {} out of range", index))
        })
    }
}

impl fmt::Debug for MemoryCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryCursor")
            .field("columns", &self.columns)
            .field("rows", &self.rows.len())
            .field("position", &self.position)
            .finish()
    }
}

impl MediaCursor for MemoryCursor {
    fn move_to_next(&mut self) -> Result<bool> {
        let next = self.position.map_or(0, |position| position + 1);
        match next.cmp(&self.rows.len()) {
            Ordering::Less => {
                self.position = Some(next);
                Ok(true)
            }
            _ => {
                self.position = Some(self.rows.len());
                Ok(false)
            }
        }
    }

    fn column_index(&self, column: MediaColumn) -> Result<usize> {
        self.columns
            .iter()
            .position(|projected| *projected == column)
            .ok_or_else(|| {
                BridgeError::OperationFailed(format!("Column '{}' does not exist", column))
            })
    }

    fn get_i64(&self, index: usize) -> Result<Option<i64>> {
        let column = self.column_at(index)?;
        Ok(self.current()?.integer(column))
    }

    fn get_string(&self, index: usize) -> Result<Option<String>> {
        let column = self.column_at(index)?;
        Ok(self.current()?.text(column))
    }
}

impl Drop for MemoryCursor {
    fn drop(&mut self) {
        if let Some(hook) = self.on_close.take() {
            hook();
        }
    }
}
