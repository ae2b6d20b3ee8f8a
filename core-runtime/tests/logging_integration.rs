//! Integration tests for logging system

use bridge_traits::log_sink::LogLevel;
use core_runtime::logging::{strip_path, LogFormat, LoggingConfig};

#[test]
fn test_logging_initialization() {
    // Only one subscriber can be installed per process, so exercise the builder

    let config = LoggingConfig::default()
        .with_format(LogFormat::Json)
        .with_level(LogLevel::Debug)
        .with_spans(true);

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, LogLevel::Debug);
    assert!(config.enable_spans);
    assert!(config.logger_sink.is_none());
}

#[test]
fn test_path_stripping() {
    // Android storage paths
    assert_eq!(
        strip_path("/storage/emulated/0/Movies/holiday.mp4"),
        "holiday.mp4"
    );
    assert_eq!(strip_path("/sdcard/DCIM/Camera/VID_0001.mp4"), "VID_0001.mp4");

    // Windows paths
    assert_eq!(strip_path("C:\\Users\\Ana\\Videos\\clip.mkv"), "clip.mkv");

    // Already basename
    assert_eq!(strip_path("clip.webm"), "clip.webm");

    // Edge cases
    assert_eq!(strip_path("/storage/emulated/0/"), "");
    assert_eq!(strip_path(""), "");
}

#[test]
fn test_format_selection() {
    #[cfg(debug_assertions)]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[cfg(not(debug_assertions))]
    {
        let config = LoggingConfig::default();
        assert_eq!(config.format, LogFormat::Json);
    }
}

#[test]
fn test_filter_configuration() {
    let config = LoggingConfig::default().with_filter("core_media=debug,bridge_desktop=trace");

    assert_eq!(
        config.filter,
        Some("core_media=debug,bridge_desktop=trace".to_string())
    );
}

#[test]
fn test_config_chaining() {
    let config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Warn)
        .with_spans(false)
        .with_target(false)
        .with_thread_info(true);

    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.level, LogLevel::Warn);
    assert!(!config.enable_spans);
    assert!(!config.display_target);
    assert!(config.display_thread_info);
}
