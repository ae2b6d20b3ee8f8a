//! Named-method channel between the host shell and the core.

use std::collections::HashMap;
use std::fmt;

use core_media::{MediaInventoryService, VideoRecord};
use serde::Serialize;
use tracing::{debug, warn};

use crate::codec::{decode_call, encode_result, MethodCall, MethodResult, INVALID_MESSAGE};

pub const METHOD_QUERY_VIDEOS: &str = "queryVideos";
pub const METHOD_GET_SDK_INT: &str = "getSdkInt";

/// Handler invoked for one method name.
pub type MethodHandler = Box<dyn Fn(&MethodCall) -> MethodResult + Send + Sync>;

/// Dispatch table keyed by method name.
///
/// Calls to names without a registered handler resolve to
/// [`MethodResult::NotImplemented`].
pub struct MethodChannel {
    name: String,
    handlers: HashMap<String, MethodHandler>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `handler` for `method`, replacing any previous handler.
    pub fn register<F>(&mut self, method: impl Into<String>, handler: F) -> &mut Self
    where
        F: Fn(&MethodCall) -> MethodResult + Send + Sync + 'static,
    {
        self.handlers.insert(method.into(), Box::new(handler));
        self
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<&str> {
        let mut methods: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        methods.sort_unstable();
        methods
    }

    pub fn invoke(&self, call: &MethodCall) -> MethodResult {
        match self.handlers.get(&call.method) {
            Some(handler) => {
                debug!(channel = %self.name, method = %call.method, "Dispatching method call");
                handler(call)
            }
            None => {
                warn!(channel = %self.name, method = %call.method, "Method not implemented");
                MethodResult::NotImplemented
            }
        }
    }

    /// Decode a raw call, dispatch it, and encode the reply.
    pub fn handle_message(&self, message: &[u8]) -> Vec<u8> {
        let result = match decode_call(message) {
            Ok(call) => self.invoke(&call),
            Err(err) => {
                warn!(channel = %self.name, error = %err, "Rejected undecodable message");
                MethodResult::error(INVALID_MESSAGE, err.to_string())
            }
        };
        encode_result(&result)
    }
}

impl fmt::Debug for MethodChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodChannel")
            .field("name", &self.name)
            .field("methods", &self.methods())
            .finish()
    }
}

/// One entry of the `queryVideos` reply.
#[derive(Debug, Serialize)]
struct VideoPayload<'a> {
    uri: &'a str,
    path: &'a str,
    name: &'a str,
    size: u64,
    duration: u64,
}

impl<'a> From<&'a VideoRecord> for VideoPayload<'a> {
    fn from(video: &'a VideoRecord) -> Self {
        Self {
            uri: video.resource_uri().as_str(),
            path: video.file_path(),
            name: video.display_name(),
            size: video.size_bytes(),
            duration: video.duration_millis(),
        }
    }
}

/// Build the media channel: `queryVideos` and `getSdkInt` over `inventory`.
pub fn media_channel(name: impl Into<String>, inventory: MediaInventoryService) -> MethodChannel {
    let mut channel = MethodChannel::new(name);

    let videos = inventory.clone();
    channel.register(METHOD_QUERY_VIDEOS, move |_| {
        let records = videos.query_videos();
        let payload: Vec<VideoPayload<'_>> = records.iter().map(VideoPayload::from).collect();
        match serde_json::to_value(&payload) {
            Ok(value) => MethodResult::Success(value),
            Err(err) => MethodResult::error("encode_failed", err.to_string()),
        }
    });

    channel.register(METHOD_GET_SDK_INT, move |_| {
        MethodResult::Success(inventory.platform_version().into())
    });

    channel
}

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_traits::error::Result as BridgeResult;
    use bridge_traits::media_store::{MediaCursor, MediaQuery, MediaRow, MediaStore, MemoryCursor};
    use bridge_traits::platform::PlatformInfo;
    use mockall::mock;
    use serde_json::json;
    use std::sync::Arc;

    mock! {
        Store {}
        impl MediaStore for Store {
            fn query(&self, query: &MediaQuery) -> BridgeResult<Option<Box<dyn MediaCursor>>>;
        }
    }

    mock! {
        Platform {}
        impl PlatformInfo for Platform {
            fn sdk_int(&self) -> i32;
        }
    }

    fn channel_with(store: MockStore, sdk_int: i32) -> MethodChannel {
        let mut platform = MockPlatform::new();
        platform.expect_sdk_int().return_const(sdk_int);
        let inventory = MediaInventoryService::new(Arc::new(store), Arc::new(platform));
        media_channel("cinemax/mediastore", inventory)
    }

    #[test]
    fn test_query_videos_payload_keys() {
        let mut store = MockStore::new();
        store.expect_query().times(1).returning(|query| {
            let row = MediaRow::new(7)
                .with_display_name("clip.mp4")
                .with_data("/storage/clip.mp4")
                .with_size(1024)
                .with_duration(5000)
                .with_date_modified(1_700_000_000);
            Ok(Some(Box::new(MemoryCursor::new(
                query.projection.clone(),
                vec![row],
            ))))
        });

        let channel = channel_with(store, 34);
        let result = channel.invoke(&MethodCall::new(METHOD_QUERY_VIDEOS));

        assert_eq!(
            result,
            MethodResult::Success(json!([{
                "uri": "content://media/external/video/media/7",
                "path": "/storage/clip.mp4",
                "name": "clip.mp4",
                "size": 1024,
                "duration": 5000
            }]))
        );
    }

    #[test]
    fn test_query_videos_unavailable_is_empty_success() {
        let mut store = MockStore::new();
        store.expect_query().returning(|_| Ok(None));

        let channel = channel_with(store, 34);
        let result = channel.invoke(&MethodCall::new(METHOD_QUERY_VIDEOS));
        assert_eq!(result, MethodResult::Success(json!([])));
    }

    #[test]
    fn test_get_sdk_int() {
        let mut store = MockStore::new();
        store.expect_query().never();

        let channel = channel_with(store, 28);
        let result = channel.invoke(&MethodCall::new(METHOD_GET_SDK_INT));
        assert_eq!(result, MethodResult::Success(json!(28)));
    }

    #[test]
    fn test_unknown_method_not_implemented() {
        let mut store = MockStore::new();
        store.expect_query().never();

        let channel = channel_with(store, 34);
        assert!(channel
            .invoke(&MethodCall::new("unknown"))
            .is_not_implemented());
    }

    #[test]
    fn test_register_replaces_handler() {
        let mut channel = MethodChannel::new("test");
        channel.register("ping", |_| MethodResult::Success(json!("a")));
        channel.register("ping", |_| MethodResult::Success(json!("b")));

        assert_eq!(channel.methods(), vec!["ping"]);
        assert_eq!(
            channel.invoke(&MethodCall::new("ping")),
            MethodResult::Success(json!("b"))
        );
    }

    #[test]
    fn test_handle_message_invalid_payload() {
        let channel = MethodChannel::new("test");
        let reply = channel.handle_message(b"{");

        let value: serde_json::Value = serde_json::from_slice(&reply).unwrap();
        assert_eq!(value[0], INVALID_MESSAGE);
        assert!(value[1].is_string());
    }
}
