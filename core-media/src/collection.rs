//! Endpoint selection and query construction for the video index.

use bridge_traits::media_store::{MediaCollection, MediaColumn, MediaQuery, SortOrder};

/// First platform API level (Android Q) with volume-scoped collections.
pub const VOLUME_SCOPED_MIN_SDK: i32 = 29;

/// Columns requested for every video query. `DateModified` is only used for
/// ordering and is not read back.
pub const VIDEO_PROJECTION: [MediaColumn; 6] = [
    MediaColumn::Id,
    MediaColumn::DisplayName,
    MediaColumn::Data,
    MediaColumn::Size,
    MediaColumn::Duration,
    MediaColumn::DateModified,
];

/// Pick the collection endpoint for a platform API level.
pub fn select_collection(sdk_int: i32) -> MediaCollection {
    if sdk_int >= VOLUME_SCOPED_MIN_SDK {
        MediaCollection::ExternalVolume
    } else {
        MediaCollection::LegacyExternalContent
    }
}

/// Newest-modified-first video query for the given API level.
pub fn video_query(sdk_int: i32) -> MediaQuery {
    MediaQuery::new(select_collection(sdk_int))
        .with_projection(VIDEO_PROJECTION)
        .with_sort_order(SortOrder::descending(MediaColumn::DateModified))
}
