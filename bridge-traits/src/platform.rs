//! Platform identification.
//!
//! The core never inspects the host OS directly. Hosts inject a
//! [`PlatformInfo`] that reports the platform version the media layer uses to
//! pick between index endpoints.

/// Host platform version source.
///
/// Implementations resolve the version once, at construction, so that
/// [`sdk_int`](PlatformInfo::sdk_int) is a pure accessor that cannot fail.
///
/// # Example
///
/// ```
/// use bridge_traits::platform::{PlatformInfo, StaticPlatformInfo};
///
/// let info = StaticPlatformInfo::new(33);
/// assert_eq!(info.sdk_int(), 33);
/// ```
pub trait PlatformInfo: Send + Sync {
    /// Platform API level (Android `Build.VERSION.SDK_INT`).
    fn sdk_int(&self) -> i32;
}

/// Fixed platform version, for hosts that know their level up front and for tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticPlatformInfo {
    sdk_int: i32,
}

impl StaticPlatformInfo {
    pub const fn new(sdk_int: i32) -> Self {
        Self { sdk_int }
    }
}

impl PlatformInfo for StaticPlatformInfo {
    fn sdk_int(&self) -> i32 {
        self.sdk_int
    }
}
