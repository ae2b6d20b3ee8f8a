//! # Core Media Module
//!
//! Device media inventory: enumerates the videos known to the platform media
//! index and normalizes them into [`VideoRecord`]s.
//!
//! ## Overview
//!
//! - [`MediaInventoryService`] runs a single read-only query per call
//! - [`select_collection`] maps the platform API level to an index endpoint
//! - [`VideoRecord`] carries the normalized fields plus a derived resource uri
//!
//! The platform index itself is injected through
//! [`bridge_traits::media_store::MediaStore`].
//!
//! ## Usage
//!
//! ```ignore
//! use core_media::MediaInventoryService;
//! use std::sync::Arc;
//!
//! let service = MediaInventoryService::new(Arc::new(store), Arc::new(platform));
//! for video in service.query_videos() {
//!     println!("{} -> {}", video.display_name(), video.resource_uri());
//! }
//! ```

pub mod collection;
pub mod error;
pub mod models;
pub mod service;

pub use collection::{select_collection, video_query, VOLUME_SCOPED_MIN_SDK};
pub use error::{MediaError, Result};
pub use models::{resource_uri_for, VideoRecord};
pub use service::MediaInventoryService;
