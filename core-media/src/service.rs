//! Video inventory queries against the platform media index.

use std::sync::Arc;

use bridge_traits::{
    media_store::{MediaColumn, MediaCursor, MediaStore},
    platform::PlatformInfo,
};
use tracing::{debug, instrument, warn};

use crate::collection::video_query;
use crate::error::{MediaError, Result};
use crate::models::VideoRecord;

/// Enumerates the videos visible to the platform media index.
///
/// The service is stateless: every call runs a fresh query, owns its cursor
/// for the duration of the call, and hands the resulting list to the caller.
/// Calls block while the index is read; run them off the UI thread.
#[derive(Clone)]
pub struct MediaInventoryService {
    store: Arc<dyn MediaStore>,
    platform: Arc<dyn PlatformInfo>,
}

impl MediaInventoryService {
    pub fn new(store: Arc<dyn MediaStore>, platform: Arc<dyn PlatformInfo>) -> Self {
        Self { store, platform }
    }

    /// Platform API level reported by the host.
    pub fn platform_version(&self) -> i32 {
        self.platform.sdk_int()
    }

    /// All videos, newest-modified first.
    ///
    /// Never fails: an unavailable index or a platform error while reading
    /// yields an empty list.
    pub fn query_videos(&self) -> Vec<VideoRecord> {
        match self.try_query_videos() {
            Ok(videos) => videos,
            Err(MediaError::IndexUnavailable { collection }) => {
                warn!(collection = %collection, "Media index returned no cursor");
                Vec::new()
            }
            Err(err) => {
                warn!(error = %err, "Video query failed");
                Vec::new()
            }
        }
    }

    /// Same query as [`query_videos`](Self::query_videos), surfacing failures.
    #[instrument(skip(self))]
    pub fn try_query_videos(&self) -> Result<Vec<VideoRecord>> {
        let query = video_query(self.platform_version());
        let collection = query.collection.uri();

        let Some(mut cursor) = self.store.query(&query)? else {
            return Err(MediaError::IndexUnavailable {
                collection: collection.into_string(),
            });
        };

        // `cursor` is dropped, and the platform handle released, on every
        // return path below.
        let videos = read_videos(cursor.as_mut())?;

        debug!(
            collection = %collection,
            count = videos.len(),
            "Queried video inventory"
        );
        Ok(videos)
    }
}

struct VideoColumns {
    id: usize,
    name: usize,
    path: usize,
    size: usize,
    duration: usize,
}

impl VideoColumns {
    fn resolve(cursor: &dyn MediaCursor) -> Result<Self> {
        Ok(Self {
            id: cursor.column_index(MediaColumn::Id)?,
            name: cursor.column_index(MediaColumn::DisplayName)?,
            path: cursor.column_index(MediaColumn::Data)?,
            size: cursor.column_index(MediaColumn::Size)?,
            duration: cursor.column_index(MediaColumn::Duration)?,
        })
    }
}

fn read_videos(cursor: &mut dyn MediaCursor) -> Result<Vec<VideoRecord>> {
    let columns = VideoColumns::resolve(cursor)?;
    let mut videos = Vec::new();

    while cursor.move_to_next()? {
        let Some(id) = cursor.get_i64(columns.id)? else {
            debug!("Skipping video row without an id");
            continue;
        };

        let name = cursor.get_string(columns.name)?.unwrap_or_default();
        let path = cursor.get_string(columns.path)?.unwrap_or_default();
        let size = non_negative(cursor.get_i64(columns.size)?);
        let duration = non_negative(cursor.get_i64(columns.duration)?);

        videos.push(VideoRecord::new(id, name, path, size, duration));
    }

    Ok(videos)
}

/// NULL and negative values both read as 0.
fn non_negative(value: Option<i64>) -> u64 {
    value
        .and_then(|value| u64::try_from(value).ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::{BridgeError, Result as BridgeResult};
    use bridge_traits::media_store::{MediaCollection, MediaQuery, MediaRow, MemoryCursor};
    use bridge_traits::platform::StaticPlatformInfo;
    use mockall::mock;
    use std::sync::atomic::{AtomicBool, Ordering};

    mock! {
        Store {}

        impl MediaStore for Store {
            fn query(&self, query: &MediaQuery) -> BridgeResult<Option<Box<dyn MediaCursor>>>;
        }
    }

    fn service_with(store: MockStore, sdk_int: i32) -> MediaInventoryService {
        MediaInventoryService::new(Arc::new(store), Arc::new(StaticPlatformInfo::new(sdk_int)))
    }

    fn cursor_for(query: &MediaQuery, rows: Vec<MediaRow>) -> Box<dyn MediaCursor> {
        Box::new(MemoryCursor::new(query.projection.clone(), rows))
    }

    #[test]
    fn test_non_negative() {
        assert_eq!(non_negative(None), 0);
        assert_eq!(non_negative(Some(-5)), 0);
        assert_eq!(non_negative(Some(1024)), 1024);
    }

    #[test]
    fn test_single_row_scenario() {
        let mut store = MockStore::new();
        store.expect_query().times(1).returning(|query| {
            let row = MediaRow::new(7)
                .with_display_name("clip.mp4")
                .with_data("/storage/clip.mp4")
                .with_size(1024)
                .with_duration(5000)
                .with_date_modified(1_700_000_000);
            Ok(Some(cursor_for(query, vec![row])))
        });

        let videos = service_with(store, 34).query_videos();

        assert_eq!(
            videos,
            vec![VideoRecord::new(
                7,
                "clip.mp4",
                "/storage/clip.mp4",
                1024,
                5000
            )]
        );
        assert_eq!(
            videos[0].resource_uri().as_str(),
            "content://media/external/video/media/7"
        );
    }

    #[test]
    fn test_uses_collection_for_platform_version() {
        let mut store = MockStore::new();
        store
            .expect_query()
            .withf(|query: &MediaQuery| query.collection == MediaCollection::LegacyExternalContent)
            .times(1)
            .returning(|query| Ok(Some(cursor_for(query, vec![]))));

        assert!(service_with(store, 28).query_videos().is_empty());
    }

    #[test]
    fn test_no_cursor_yields_empty_list() {
        let mut store = MockStore::new();
        store.expect_query().returning(|_| Ok(None));
        let service = service_with(store, 33);

        assert!(service.query_videos().is_empty());
        assert!(matches!(
            service.try_query_videos(),
            Err(MediaError::IndexUnavailable { .. })
        ));
    }

    #[test]
    fn test_bridge_error_yields_empty_list() {
        let mut store = MockStore::new();
        store
            .expect_query()
            .returning(|_| Err(BridgeError::OperationFailed("SecurityException".into())));

        assert!(service_with(store, 33).query_videos().is_empty());
    }

    #[test]
    fn test_missing_fields_default() {
        let mut store = MockStore::new();
        store
            .expect_query()
            .returning(|query| Ok(Some(cursor_for(query, vec![MediaRow::new(3)]))));

        let videos = service_with(store, 33).query_videos();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].display_name(), "");
        assert_eq!(videos[0].file_path(), "");
        assert_eq!(videos[0].size_bytes(), 0);
        assert_eq!(videos[0].duration_millis(), 0);
    }

    #[test]
    fn test_rows_without_id_are_skipped() {
        let mut store = MockStore::new();
        store.expect_query().returning(|query| {
            let rows = vec![
                MediaRow::default().with_display_name("orphan.mp4"),
                MediaRow::new(9).with_display_name("kept.mp4"),
            ];
            Ok(Some(cursor_for(query, rows)))
        });

        let videos = service_with(store, 33).query_videos();

        assert_eq!(videos.len(), 1);
        assert_eq!(videos[0].id(), 9);
    }

    #[test]
    fn test_preserves_index_order() {
        let mut store = MockStore::new();
        store.expect_query().returning(|query| {
            let rows = vec![
                MediaRow::new(5).with_date_modified(10),
                MediaRow::new(1).with_date_modified(30),
                MediaRow::new(3).with_date_modified(20),
            ];
            Ok(Some(cursor_for(query, rows)))
        });

        let ids: Vec<_> = service_with(store, 33)
            .query_videos()
            .iter()
            .map(VideoRecord::id)
            .collect();
        assert_eq!(ids, vec![5, 1, 3]);
    }

    #[test]
    fn test_cursor_released_after_iteration() {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&closed);

        let mut store = MockStore::new();
        store.expect_query().times(1).returning(move |query| {
            let flag = Arc::clone(&flag);
            let cursor = MemoryCursor::new(query.projection.clone(), vec![MediaRow::new(1)])
                .with_close_hook(move || flag.store(true, Ordering::SeqCst));
            Ok(Some(Box::new(cursor) as Box<dyn MediaCursor>))
        });

        assert_eq!(service_with(store, 33).query_videos().len(), 1);
        assert!(closed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_cursor_released_when_column_missing() {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&closed);

        let mut store = MockStore::new();
        store.expect_query().times(1).returning(move |_| {
            let flag = Arc::clone(&flag);
            // Projection without the duration column.
            let cursor = MemoryCursor::new(
                vec![
                    MediaColumn::Id,
                    MediaColumn::DisplayName,
                    MediaColumn::Data,
                    MediaColumn::Size,
                ],
                vec![MediaRow::new(1)],
            )
            .with_close_hook(move || flag.store(true, Ordering::SeqCst));
            Ok(Some(Box::new(cursor) as Box<dyn MediaCursor>))
        });

        let service = service_with(store, 33);
        assert!(matches!(
            service.try_query_videos(),
            Err(MediaError::Bridge(_))
        ));
        assert!(closed.load(Ordering::SeqCst));
    }

    /// Fails the `fail_at`-th call to `move_to_next` (1-based).
    struct FlakyCursor {
        inner: MemoryCursor,
        moves: usize,
        fail_at: usize,
    }

    impl MediaCursor for FlakyCursor {
        fn move_to_next(&mut self) -> BridgeResult<bool> {
            self.moves += 1;
            if self.moves == self.fail_at {
                return Err(BridgeError::OperationFailed("StaleDataException".into()));
            }
            self.inner.move_to_next()
        }

        fn column_index(&self, column: MediaColumn) -> BridgeResult<usize> {
            self.inner.column_index(column)
        }

        fn get_i64(&self, index: usize) -> BridgeResult<Option<i64>> {
            self.inner.get_i64(index)
        }

        fn get_string(&self, index: usize) -> BridgeResult<Option<String>> {
            self.inner.get_string(index)
        }
    }

    #[test]
    fn test_read_failure_midway_returns_nothing_and_releases_cursor() {
        let closed = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&closed);

        let mut store = MockStore::new();
        store.expect_query().times(2).returning(move |query| {
            let flag = Arc::clone(&flag);
            let rows = vec![
                MediaRow::new(1).with_display_name("a.mp4"),
                MediaRow::new(2).with_display_name("b.mp4"),
            ];
            let inner = MemoryCursor::new(query.projection.clone(), rows)
                .with_close_hook(move || flag.store(true, Ordering::SeqCst));
            Ok(Some(Box::new(FlakyCursor {
                inner,
                moves: 0,
                fail_at: 2,
            }) as Box<dyn MediaCursor>))
        });

        let service = service_with(store, 33);

        assert!(service.query_videos().is_empty());
        assert!(closed.load(Ordering::SeqCst));

        closed.store(false, Ordering::SeqCst);
        assert!(matches!(
            service.try_query_videos(),
            Err(MediaError::Bridge(BridgeError::OperationFailed(_)))
        ));
        assert!(closed.load(Ordering::SeqCst));
    }

    #[test]
    fn test_platform_version_passthrough() {
        let service = service_with(MockStore::new(), 31);
        assert_eq!(service.platform_version(), 31);
    }
}
