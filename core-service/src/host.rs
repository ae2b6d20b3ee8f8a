//! Process-wide home for the [`CoreService`] behind a native host.
//!
//! Native entry points have no `self` to carry the core between calls. The
//! host initializes once, then routes every channel message through the same
//! slot. Messages that arrive before initialization get a
//! [`NOT_INITIALIZED`] error envelope instead of a crash.

use std::sync::{PoisonError, RwLock};

use tracing::{info, warn};

use crate::codec::{encode_result, MethodResult};
use crate::CoreService;

/// Error code returned for messages handled before a core is installed.
pub const NOT_INITIALIZED: &str = "not_initialized";

pub struct ServiceSlot {
    core: RwLock<Option<CoreService>>,
}

impl ServiceSlot {
    pub const fn new() -> Self {
        Self {
            core: RwLock::new(None),
        }
    }

    /// Install `core`, returning the one it replaces.
    ///
    /// Hosts call this again when the activity is recreated, so the new
    /// context replaces the stale one.
    pub fn install(&self, core: CoreService) -> Option<CoreService> {
        let previous = self
            .core
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(core);
        info!(replaced = previous.is_some(), "Installed media core");
        previous
    }

    pub fn is_installed(&self) -> bool {
        self.current().is_some()
    }

    /// Route a channel message to the installed core.
    pub fn handle_message(&self, message: &[u8]) -> Vec<u8> {
        // Cloned out so a long `queryVideos` never holds the lock.
        match self.current() {
            Some(core) => core.handle_message(message),
            None => {
                warn!("Channel message received before initialization");
                encode_result(&MethodResult::error(
                    NOT_INITIALIZED,
                    "nativeInit has not been called",
                ))
            }
        }
    }

    fn current(&self) -> Option<CoreService> {
        self.core
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for ServiceSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{decode_envelope, encode_call, MethodCall};
    use crate::{METHOD_GET_SDK_INT, METHOD_QUERY_VIDEOS};
    use bridge_desktop::MemoryMediaStore;
    use bridge_traits::media_store::MediaRow;
    use bridge_traits::platform::StaticPlatformInfo;
    use core_runtime::config::InventoryConfig;
    use serde_json::json;
    use std::sync::Arc;

    fn core(sdk_int: i32, rows: Vec<MediaRow>) -> CoreService {
        let config = InventoryConfig::builder()
            .media_store(Arc::new(MemoryMediaStore::new(rows)))
            .platform_info(Arc::new(StaticPlatformInfo::new(sdk_int)))
            .build()
            .unwrap();
        CoreService::new(config).unwrap()
    }

    fn message(method: &str) -> Vec<u8> {
        encode_call(&MethodCall::new(method)).unwrap()
    }

    #[test]
    fn test_message_before_install_is_not_initialized_error() {
        let slot = ServiceSlot::new();
        assert!(!slot.is_installed());

        let reply = decode_envelope(&slot.handle_message(&message(METHOD_GET_SDK_INT))).unwrap();
        match reply {
            MethodResult::Error { code, .. } => assert_eq!(code, NOT_INITIALIZED),
            other => panic!("unexpected reply: {:?}", other),
        }
    }

    #[test]
    fn test_installed_core_answers_channel_calls() {
        let slot = ServiceSlot::new();
        assert!(slot.install(core(33, vec![MediaRow::new(5).with_display_name("clip.mp4")])).is_none());
        assert!(slot.is_installed());

        let sdk = decode_envelope(&slot.handle_message(&message(METHOD_GET_SDK_INT))).unwrap();
        assert_eq!(sdk, MethodResult::Success(json!(33)));

        let videos = decode_envelope(&slot.handle_message(&message(METHOD_QUERY_VIDEOS))).unwrap();
        let MethodResult::Success(videos) = videos else {
            panic!("expected a list of videos");
        };
        assert_eq!(videos[0]["name"], "clip.mp4");
        assert_eq!(videos[0]["uri"], "content://media/external/video/media/5");
    }

    #[test]
    fn test_reinstall_replaces_core() {
        let slot = ServiceSlot::new();
        slot.install(core(29, Vec::new()));

        let previous = slot.install(core(34, Vec::new()));
        assert_eq!(previous.map(|core| core.inventory().platform_version()), Some(29));

        let sdk = decode_envelope(&slot.handle_message(&message(METHOD_GET_SDK_INT))).unwrap();
        assert_eq!(sdk, MethodResult::Success(json!(34)));
    }

    #[test]
    fn test_static_slot() {
        static SLOT: ServiceSlot = ServiceSlot::new();
        assert!(!SLOT.is_installed());
    }
}
