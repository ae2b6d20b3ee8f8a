//! Logging system demonstration
//!
//! Run with:
//! ```bash
//! # Pretty format (default in debug)
//! cargo run -p core-runtime --example logging_demo
//!
//! # JSON format with a custom filter
//! cargo run -p core-runtime --example logging_demo -- json "core_runtime=trace"
//! ```

use bridge_traits::log_sink::LogLevel;
use core_runtime::logging::{init_logging, strip_path, LogFormat, LoggingConfig};
use std::env;
use tracing::{debug, info, instrument, span, trace, warn, Level};

#[tokio::main]
async fn main() {
    let args: Vec<String> = env::args().collect();

    let format = match args.get(1).map(String::as_str) {
        Some("json") => LogFormat::Json,
        Some("compact") => LogFormat::Compact,
        Some("pretty") => LogFormat::Pretty,
        _ => LogFormat::default(),
    };

    let mut config = LoggingConfig::default()
        .with_format(format)
        .with_level(LogLevel::Trace)
        .with_spans(true)
        .with_target(true);

    if let Some(filter) = args.get(2).cloned() {
        config = config.with_filter(filter);
    }

    init_logging(config).expect("Failed to initialize logging");

    info!(format = ?format, "Logging initialized");

    let paths = [
        "/storage/emulated/0/Movies/holiday.mp4",
        "/storage/emulated/0/DCIM/Camera/VID_0001.mp4",
    ];
    index_videos(&paths).await;

    let span = span!(Level::INFO, "method_channel", channel = "cinemax/mediastore");
    let _enter = span.enter();
    debug!(method = "getSdkInt", "Dispatching call");
    warn!(method = "deleteVideo", "Method not implemented");
}

#[instrument(skip(paths), fields(count = paths.len()))]
async fn index_videos(paths: &[&str]) {
    for (idx, path) in paths.iter().enumerate() {
        // Folder names are user-chosen; log the file name only
        trace!(idx, file = %strip_path(path), "Indexed video");
        tokio::task::yield_now().await;
    }
    info!("Index walk complete");
}
