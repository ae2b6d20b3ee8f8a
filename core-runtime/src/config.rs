//! # Core Configuration Module
//!
//! Provides configuration management for the media inventory core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct an
//! `InventoryConfig` instance that holds the bridge capabilities and settings
//! the core needs. It enforces fail-fast validation so a host learns about a
//! missing capability at startup, not on the first query.
//!
//! ## Required Dependencies
//!
//! - `MediaStore` - The platform media index
//! - `PlatformInfo` - Platform API level for endpoint selection
//!
//! When the `desktop-shims` feature is enabled, `FsMediaStore` (scanning the
//! configured roots, or the user's video directory) and a desktop
//! `StaticPlatformInfo` are injected automatically if not provided.
//!
//! ## Usage
//!
//! ### Desktop Defaults
//!
//! ```ignore
//! use core_runtime::config::InventoryConfig;
//!
//! let config = InventoryConfig::builder()
//!     .scan_root("/home/user/Videos")
//!     .build()
//!     .expect("Failed to build config");
//! ```
//!
//! ### Android
//!
//! ```ignore
//! use bridge_android::{AndroidMediaStore, AndroidPlatformInfo};
//! use core_runtime::config::InventoryConfig;
//! use std::sync::Arc;
//!
//! // `vm` and `activity` come from the host's `nativeInit` call
//! let config = InventoryConfig::builder()
//!     .platform_info(Arc::new(AndroidPlatformInfo::from_vm(&vm)?))
//!     .media_store(Arc::new(AndroidMediaStore::new(vm, activity)))
//!     .build()?;
//! ```

use crate::error::{Error, Result};
use bridge_traits::{MediaStore, PlatformInfo};
use std::path::PathBuf;
use std::sync::Arc;

/// Channel name the host shell uses for the media bridge.
pub const DEFAULT_CHANNEL_NAME: &str = "cinemax/mediastore";

/// Configuration for the media inventory core.
///
/// Use [`InventoryConfigBuilder`] to construct instances.
#[derive(Clone)]
pub struct InventoryConfig {
    /// Platform media index (required)
    pub media_store: Arc<dyn MediaStore>,

    /// Platform version source (required)
    pub platform_info: Arc<dyn PlatformInfo>,

    /// Name of the method channel the host shell talks to
    pub channel_name: String,
}

impl std::fmt::Debug for InventoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryConfig")
            .field("media_store", &"MediaStore { ... }")
            .field("platform_info", &self.platform_info.sdk_int())
            .field("channel_name", &self.channel_name)
            .finish()
    }
}

impl InventoryConfig {
    /// Creates a new builder for constructing an `InventoryConfig`.
    pub fn builder() -> InventoryConfigBuilder {
        InventoryConfigBuilder::default()
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// The channel name must be non-empty and free of whitespace.
    pub fn validate(&self) -> Result<()> {
        if self.channel_name.is_empty() {
            return Err(Error::Config("Channel name cannot be empty".to_string()));
        }

        if self.channel_name.chars().any(char::is_whitespace) {
            return Err(Error::Config(format!(
                "Channel name '{}' must not contain whitespace",
                self.channel_name
            )));
        }

        Ok(())
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn media_store_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "MediaStore".to_string(),
        message: "MediaStore implementation is required to query the media index. \
                 Desktop: ensure the 'desktop-shims' feature is enabled to use the default FsMediaStore. \
                 Android: inject bridge_android::AndroidMediaStore."
            .to_string(),
    }
}

#[cfg(not(feature = "desktop-shims"))]
fn platform_info_missing_error() -> Error {
    Error::CapabilityMissing {
        capability: "PlatformInfo".to_string(),
        message: "PlatformInfo implementation is required to select the media collection. \
                 Desktop: ensure the 'desktop-shims' feature is enabled. \
                 Android: inject bridge_android::AndroidPlatformInfo."
            .to_string(),
    }
}

#[cfg(feature = "desktop-shims")]
fn provide_default_media_store(scan_roots: &[PathBuf]) -> Result<Arc<dyn MediaStore>> {
    use bridge_desktop::FsMediaStore;

    let store = if scan_roots.is_empty() {
        FsMediaStore::new()
    } else {
        FsMediaStore::with_roots(scan_roots.iter().cloned())
    };

    tracing::debug!(
        roots = ?store
            .roots()
            .iter()
            .map(|root| crate::logging::strip_path(&root.to_string_lossy()).to_string())
            .collect::<Vec<_>>(),
        "Using desktop media store"
    );

    let store: Arc<dyn MediaStore> = Arc::new(store);
    Ok(store)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_media_store(_scan_roots: &[PathBuf]) -> Result<Arc<dyn MediaStore>> {
    Err(media_store_missing_error())
}

#[cfg(feature = "desktop-shims")]
fn provide_default_platform_info() -> Result<Arc<dyn PlatformInfo>> {
    use bridge_traits::StaticPlatformInfo;

    let info: Arc<dyn PlatformInfo> =
        Arc::new(StaticPlatformInfo::new(bridge_desktop::DESKTOP_SDK_INT));
    Ok(info)
}

#[cfg(not(feature = "desktop-shims"))]
fn provide_default_platform_info() -> Result<Arc<dyn PlatformInfo>> {
    Err(platform_info_missing_error())
}

/// Builder for constructing [`InventoryConfig`] instances.
///
/// Set the capabilities and options, then call
/// [`build()`](InventoryConfigBuilder::build). Missing required capabilities
/// are reported with actionable messages.
#[derive(Default)]
pub struct InventoryConfigBuilder {
    media_store: Option<Arc<dyn MediaStore>>,
    platform_info: Option<Arc<dyn PlatformInfo>>,
    channel_name: Option<String>,
    scan_roots: Vec<PathBuf>,
}

impl InventoryConfigBuilder {
    /// Sets the media index implementation (required unless `desktop-shims`).
    pub fn media_store(mut self, store: Arc<dyn MediaStore>) -> Self {
        self.media_store = Some(store);
        self
    }

    /// Sets the platform version source (required unless `desktop-shims`).
    pub fn platform_info(mut self, info: Arc<dyn PlatformInfo>) -> Self {
        self.platform_info = Some(info);
        self
    }

    /// Overrides the channel name.
    ///
    /// Default: [`DEFAULT_CHANNEL_NAME`]
    pub fn channel_name(mut self, name: impl Into<String>) -> Self {
        self.channel_name = Some(name.into());
        self
    }

    /// Adds a directory for the default desktop store to scan.
    ///
    /// Ignored when a `MediaStore` is injected explicitly.
    pub fn scan_root<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.scan_roots.push(path.into());
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// - [`Error::CapabilityMissing`] when a required bridge is absent and no
    ///   platform default is available
    /// - [`Error::Config`] when validation fails
    pub fn build(self) -> Result<InventoryConfig> {
        let media_store = match self.media_store {
            Some(store) => store,
            None => provide_default_media_store(&self.scan_roots)?,
        };

        let platform_info = match self.platform_info {
            Some(info) => info,
            None => provide_default_platform_info()?,
        };

        let config = InventoryConfig {
            media_store,
            platform_info,
            channel_name: self
                .channel_name
                .unwrap_or_else(|| DEFAULT_CHANNEL_NAME.to_string()),
        };

        config.validate()?;
        Ok(config)
    }
}
