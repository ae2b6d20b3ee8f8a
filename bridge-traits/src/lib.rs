//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host platform.
//!
//! ## Overview
//!
//! This crate defines the contract between the media inventory core and
//! platform-specific implementations. Each trait represents a capability that
//! the core requires but that must be implemented differently per platform
//! (Android, desktop).
//!
//! ## Traits
//!
//! ### Media Index
//! - [`MediaStore`](media_store::MediaStore) - Read-only queries against the platform media index
//! - [`MediaCursor`](media_store::MediaCursor) - Scoped row handle, released on drop
//!
//! ### Platform Integration
//! - [`PlatformInfo`](platform::PlatformInfo) - Platform API level used for endpoint selection
//!
//! ### Utilities
//! - [`LoggerSink`](log_sink::LoggerSink) - Forward structured logs to host logging
//!
//! ## Platform Requirements
//!
//! | Platform | Implementation Crate | Status |
//! |----------|---------------------|--------|
//! | Android  | `bridge-android`    | ✅ JNI over `ContentResolver` |
//! | Desktop  | `bridge-desktop`    | ✅ Directory scan |
//!
//! ## Error Handling
//!
//! All bridge traits use the [`BridgeError`](error::BridgeError) type. Platform
//! implementations should:
//!
//! - Convert platform-specific errors (JNI exceptions, I/O) to `BridgeError`
//! - Return `Ok(None)` from [`MediaStore::query`](media_store::MediaStore::query)
//!   when the platform yields no result set, instead of an error
//!
//! ## Thread Safety
//!
//! Capability traits require `Send + Sync` so they can be shared behind `Arc`
//! and called from a blocking worker thread. Cursors are `Send`.
//!
//! ## Examples
//!
//! ### Implementing MediaStore
//!
//! ```
//! use bridge_traits::error::Result;
//! use bridge_traits::media_store::{
//!     MediaCursor, MediaQuery, MediaRow, MediaStore, MemoryCursor,
//! };
//!
//! struct FixtureStore {
//!     rows: Vec<MediaRow>,
//! }
//!
//! impl MediaStore for FixtureStore {
//!     fn query(&self, query: &MediaQuery) -> Result<Option<Box<dyn MediaCursor>>> {
//!         let cursor = MemoryCursor::new(query.projection.clone(), self.rows.clone());
//!         Ok(Some(Box::new(cursor)))
//!     }
//! }
//! ```

pub mod error;
pub mod log_sink;
pub mod media_store;
pub mod platform;

pub use error::BridgeError;

// Re-export commonly used types
pub use log_sink::{LogEntry, LogLevel, LoggerSink};
pub use media_store::{
    ContentUri, MediaCollection, MediaColumn, MediaCursor, MediaQuery, MediaRow, MediaStore,
    MemoryCursor, SortOrder, EXTERNAL_VIDEO_CONTENT_URI,
};
pub use platform::{PlatformInfo, StaticPlatformInfo};
