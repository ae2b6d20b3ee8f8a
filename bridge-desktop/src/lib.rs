//! # Desktop Bridge Implementations
//!
//! Default implementations of bridge traits for desktop platforms
//! (macOS, Windows, Linux).
//!
//! ## Overview
//!
//! Desktop hosts have no shared media index, so this crate provides one:
//! - `FsMediaStore` walks the user's video directories (via `walkdir`)
//! - `MemoryMediaStore` serves a fixed row set
//!
//! Platform version is supplied with
//! [`StaticPlatformInfo`](bridge_traits::platform::StaticPlatformInfo) using
//! [`DESKTOP_SDK_INT`].
//!
//! ## Feature Flags
//!
//! - `mp4-duration`: Read durations from MP4/MOV headers with the `mp4` crate (default)
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_desktop::FsMediaStore;
//! use bridge_traits::MediaStore;
//!
//! let store = FsMediaStore::with_roots(["/home/user/Videos"]);
//! // Inject into InventoryConfig
//! ```

mod media_store;
mod memory_store;
mod probe;

pub use media_store::{stable_id, FsMediaStore, VIDEO_EXTENSIONS};
pub use memory_store::MemoryMediaStore;

/// Platform version reported on desktop hosts, which have no Android API level.
pub const DESKTOP_SDK_INT: i32 = 0;
