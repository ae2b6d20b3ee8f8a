//! Media index backed by a directory scan.

use bridge_traits::{
    error::Result,
    media_store::{MediaCursor, MediaQuery, MediaRow, MediaStore, MemoryCursor},
};
use sha2::{Digest, Sha256};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Instant, UNIX_EPOCH};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::probe;

/// Extensions treated as video files (matched case-insensitively).
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "m4v", "mkv", "webm", "mov", "avi", "3gp", "ts", "m2ts", "mpg", "mpeg", "wmv",
    "flv", "ogv",
];

/// Filesystem media index for desktop hosts.
///
/// Every query walks the configured roots, so results always reflect the
/// current state of the disk:
/// - ids are derived from the canonical path and stay stable across scans
/// - the display name is the file name, the data column the canonical path
/// - durations come from MP4 headers when the `mp4-duration` feature is on
///
/// When none of the roots exist the index is reported as unavailable.
#[derive(Debug, Clone)]
pub struct FsMediaStore {
    roots: Vec<PathBuf>,
}

impl FsMediaStore {
    /// Scan the user's video directory.
    pub fn new() -> Self {
        Self {
            roots: default_roots(),
        }
    }

    /// Scan custom root directories.
    pub fn with_roots<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Walk all roots. Returns `None` when no root exists.
    fn scan(&self) -> Option<Vec<MediaRow>> {
        let start = Instant::now();
        let mut available = false;
        let mut seen = HashSet::new();
        let mut rows = Vec::new();

        for root in &self.roots {
            if !root.is_dir() {
                warn!("Scan root does not exist, skipping: {}", root.display());
                continue;
            }
            available = true;

            for entry in WalkDir::new(root).follow_links(true) {
                match entry {
                    Err(e) => warn!("Cannot access entry: {}", e),
                    Ok(entry) if entry.file_type().is_file() && is_video(entry.path()) => {
                        // Overlapping roots and symlinks can reach the same file twice.
                        if let Some(row) = row_for_path(entry.path()) {
                            if row.id.is_some_and(|id| seen.insert(id)) {
                                rows.push(row);
                            }
                        }
                    }
                    Ok(_) => {}
                }
            }
        }

        if !available {
            return None;
        }

        debug!(
            roots = self.roots.len(),
            count = rows.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Scanned video directories"
        );
        Some(rows)
    }
}

impl Default for FsMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MediaStore for FsMediaStore {
    fn query(&self, query: &MediaQuery) -> Result<Option<Box<dyn MediaCursor>>> {
        let Some(mut rows) = self.scan() else {
            return Ok(None);
        };

        if let Some(order) = query.sort_order {
            order.sort_rows(&mut rows);
        }

        debug!(collection = ?query.collection, rows = rows.len(), "Opened desktop cursor");
        Ok(Some(Box::new(MemoryCursor::new(
            query.projection.clone(),
            rows,
        ))))
    }
}

fn default_roots() -> Vec<PathBuf> {
    let videos = dirs::video_dir().or_else(|| dirs::home_dir().map(|home| home.join("Videos")));
    videos.into_iter().collect()
}

pub(crate) fn is_video(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let ext = ext.to_ascii_lowercase();
            VIDEO_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Stable non-negative id for a canonical path: the first eight bytes of its
/// SHA-256 digest with the sign bit cleared.
pub fn stable_id(path: &Path) -> i64 {
    let mut hasher = Sha256::new();
    hasher.update(path.to_string_lossy().as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    (u64::from_be_bytes(bytes) & i64::MAX as u64) as i64
}

fn row_for_path(path: &Path) -> Option<MediaRow> {
    let canonical = match fs::canonicalize(path) {
        Ok(canonical) => canonical,
        Err(e) => {
            warn!("Cannot resolve {}: {}", path.display(), e);
            return None;
        }
    };
    let metadata = fs::metadata(&canonical).ok()?;

    let mut row = MediaRow::new(stable_id(&canonical));
    row.display_name = canonical
        .file_name()
        .map(|name| name.to_string_lossy().into_owned());
    row.data = Some(canonical.to_string_lossy().into_owned());
    row.size = i64::try_from(metadata.len()).ok();
    row.date_modified = metadata
        .modified()
        .ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64);
    row.duration = probe::duration_millis(&canonical, metadata.len());

    Some(row)
}
