//! Media inventory records.

use bridge_traits::media_store::ContentUri;
use serde::Serialize;

/// One video in the device's media inventory.
///
/// Records are immutable: the resource uri is derived from the identifier at
/// construction and cannot drift from it afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VideoRecord {
    id: i64,
    display_name: String,
    file_path: String,
    size_bytes: u64,
    duration_millis: u64,
    resource_uri: ContentUri,
}

impl VideoRecord {
    /// Build a record, deriving `resource_uri` as `{EXTERNAL_VIDEO_CONTENT_URI}/{id}`.
    pub fn new(
        id: i64,
        display_name: impl Into<String>,
        file_path: impl Into<String>,
        size_bytes: u64,
        duration_millis: u64,
    ) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            file_path: file_path.into(),
            size_bytes,
            duration_millis,
            resource_uri: resource_uri_for(id),
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    /// File name; empty when the index does not know it.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Absolute path; empty where the platform withholds direct paths.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    pub fn size_bytes(&self) -> u64 {
        self.size_bytes
    }

    /// Duration in milliseconds, 0 when unknown.
    pub fn duration_millis(&self) -> u64 {
        self.duration_millis
    }

    pub fn resource_uri(&self) -> &ContentUri {
        &self.resource_uri
    }
}

/// Stable reference for a video id.
pub fn resource_uri_for(id: i64) -> ContentUri {
    ContentUri::external_video().with_appended_id(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_resource_uri() {
        let record = VideoRecord::new(7, "clip.mp4", "/storage/clip.mp4", 1024, 5000);

        assert_eq!(record.id(), 7);
        assert_eq!(record.display_name(), "clip.mp4");
        assert_eq!(record.file_path(), "/storage/clip.mp4");
        assert_eq!(record.size_bytes(), 1024);
        assert_eq!(record.duration_millis(), 5000);
        assert_eq!(
            record.resource_uri().as_str(),
            "content://media/external/video/media/7"
        );
    }

    #[test]
    fn test_same_id_same_uri() {
        let a = VideoRecord::new(42, "a.mp4", "", 1, 1);
        let b = VideoRecord::new(42, "b.mkv", "/x", 2, 2);
        assert_eq!(a.resource_uri(), b.resource_uri());
    }

    #[test]
    fn test_distinct_ids_distinct_uris() {
        let uris: std::collections::HashSet<_> = [1_i64, 2, 10, 11, 100, 110, i64::MAX]
            .into_iter()
            .map(resource_uri_for)
            .collect();
        assert_eq!(uris.len(), 7);
    }
}
