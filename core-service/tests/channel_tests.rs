//! End-to-end tests for the media method channel
//!
//! Calls travel through the JSON codec exactly as the host shell sends them.

use bridge_desktop::MemoryMediaStore;
use bridge_traits::media_store::MediaRow;
use bridge_traits::platform::StaticPlatformInfo;
use core_runtime::config::InventoryConfig;
use core_service::codec::{decode_envelope, encode_call};
use core_service::{CoreService, MethodCall, MethodResult, METHOD_GET_SDK_INT, METHOD_QUERY_VIDEOS};
use serde_json::{json, Value};
use std::sync::Arc;

fn core_with(store: MemoryMediaStore, sdk_int: i32) -> CoreService {
    let config = InventoryConfig::builder()
        .media_store(Arc::new(store))
        .platform_info(Arc::new(StaticPlatformInfo::new(sdk_int)))
        .build()
        .unwrap();
    CoreService::new(config).unwrap()
}

fn library() -> MemoryMediaStore {
    MemoryMediaStore::new(vec![
        MediaRow::new(11)
            .with_display_name("beach.mp4")
            .with_data("/storage/emulated/0/Movies/beach.mp4")
            .with_size(4_096)
            .with_duration(61_000)
            .with_date_modified(1_690_000_000),
        MediaRow::new(12)
            .with_display_name("party.mkv")
            .with_data("/storage/emulated/0/Movies/party.mkv")
            .with_size(8_192)
            .with_duration(3_000)
            .with_date_modified(1_700_000_000),
        // Pending download: no path or duration yet
        MediaRow::new(13).with_date_modified(1_500_000_000),
    ])
}

fn send(core: &CoreService, method: &str) -> MethodResult {
    let message = encode_call(&MethodCall::new(method)).unwrap();
    decode_envelope(&core.handle_message(&message)).unwrap()
}

#[test]
fn test_query_videos_over_the_wire() {
    let core = core_with(library(), 34);

    let MethodResult::Success(Value::Array(videos)) = send(&core, METHOD_QUERY_VIDEOS) else {
        panic!("expected a list of videos");
    };

    assert_eq!(videos.len(), 3);
    assert_eq!(videos[0]["name"], "party.mkv");
    assert_eq!(videos[1]["name"], "beach.mp4");
    assert_eq!(
        videos[2],
        json!({
            "uri": "content://media/external/video/media/13",
            "path": "",
            "name": "",
            "size": 0,
            "duration": 0
        })
    );
}

#[test]
fn test_get_sdk_int_over_the_wire() {
    let core = core_with(library(), 29);
    assert_eq!(send(&core, METHOD_GET_SDK_INT), MethodResult::Success(json!(29)));
}

#[test]
fn test_unknown_method_is_empty_reply() {
    let core = core_with(library(), 34);
    let message = encode_call(&MethodCall::new("unknown")).unwrap();

    let reply = core.handle_message(&message);
    assert!(reply.is_empty());
    assert_eq!(decode_envelope(&reply).unwrap(), MethodResult::NotImplemented);
}

#[test]
fn test_unavailable_index_is_empty_list() {
    let core = core_with(MemoryMediaStore::unavailable(), 34);
    assert_eq!(
        send(&core, METHOD_QUERY_VIDEOS),
        MethodResult::Success(json!([]))
    );
}

#[test]
fn test_arguments_are_ignored() {
    let core = core_with(library(), 34);
    let call = MethodCall::new(METHOD_GET_SDK_INT).with_arguments(json!({"unused": true}));
    assert_eq!(core.invoke(&call), MethodResult::Success(json!(34)));
}

#[test]
fn test_channel_name_from_config() {
    let config = InventoryConfig::builder()
        .media_store(Arc::new(library()))
        .platform_info(Arc::new(StaticPlatformInfo::new(34)))
        .channel_name("cinemax/test")
        .build()
        .unwrap();

    let core = CoreService::new(config).unwrap();
    assert_eq!(core.channel().name(), "cinemax/test");
    assert_eq!(core.channel().methods(), vec![METHOD_GET_SDK_INT, METHOD_QUERY_VIDEOS]);
}

#[tokio::test]
async fn test_invoke_async_runs_query() {
    let core = core_with(library(), 34);

    let result = core
        .invoke_async(MethodCall::new(METHOD_QUERY_VIDEOS))
        .await
        .unwrap();

    match result {
        MethodResult::Success(Value::Array(videos)) => assert_eq!(videos.len(), 3),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[cfg(feature = "desktop-shims")]
#[test]
fn test_desktop_bootstrap_scans_directory() {
    use std::fs;

    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("trailer.webm"), b"not really webm").unwrap();
    fs::write(dir.path().join("poster.jpg"), b"image").unwrap();

    let core = core_service::bootstrap_desktop([dir.path()]).unwrap();
    let MethodResult::Success(Value::Array(videos)) = send(&core, METHOD_QUERY_VIDEOS) else {
        panic!("expected a list of videos");
    };

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["name"], "trailer.webm");
    assert_eq!(videos[0]["size"], 15);
    assert_eq!(send(&core, METHOD_GET_SDK_INT), MethodResult::Success(json!(0)));
}
