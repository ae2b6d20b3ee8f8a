//! `LoggerSink` that writes to Logcat.
//!
//! A `FlutterActivity` process discards stdout, so the core's `tracing`
//! events are mirrored here instead. Each entry becomes one Logcat line under
//! [`DEFAULT_TAG`] (or the tag given to `LogcatSink::new`):
//!
//! ```text
//! I cinemax : [core_service] Media inventory core initialized channel=cinemax/mediastore sdk_int=34
//! ```

use bridge_traits::log_sink::{LogEntry, LogLevel};

pub const DEFAULT_TAG: &str = "cinemax";

/// Logcat priority for a core log level.
pub fn log_level(level: LogLevel) -> log::Level {
    match level {
        LogLevel::Trace => log::Level::Trace,
        LogLevel::Debug => log::Level::Debug,
        LogLevel::Info => log::Level::Info,
        LogLevel::Warn => log::Level::Warn,
        LogLevel::Error => log::Level::Error,
    }
}

/// Message text for one entry: the crate that emitted it, then
/// [`LogEntry::line`].
pub fn logcat_message(entry: &LogEntry) -> String {
    let origin = entry.target.split("::").next().unwrap_or(&entry.target);
    format!("[{}] {}", origin, entry.line())
}

#[cfg(target_os = "android")]
pub use sink::LogcatSink;

#[cfg(target_os = "android")]
mod sink {
    use super::{log_level, logcat_message};
    use android_logger::{AndroidLogger, Config};
    use bridge_traits::error::Result;
    use bridge_traits::log_sink::{LogEntry, LogLevel, LoggerSink};
    use log::{LevelFilter, Log, Record};

    pub struct LogcatSink {
        logger: AndroidLogger,
        min_level: LogLevel,
    }

    impl LogcatSink {
        pub fn new(tag: &str, min_level: LogLevel) -> Self {
            // Level filtering happens in the tracing layer; the logger
            // itself passes everything through.
            let config = Config::default()
                .with_tag(tag)
                .with_max_level(LevelFilter::Trace);
            Self {
                logger: AndroidLogger::new(config),
                min_level,
            }
        }
    }

    #[async_trait::async_trait]
    impl LoggerSink for LogcatSink {
        async fn log(&self, entry: LogEntry) -> Result<()> {
            let message = logcat_message(&entry);
            self.logger.log(
                &Record::builder()
                    .level(log_level(entry.level))
                    .target(&entry.target)
                    .args(format_args!("{}", message))
                    .build(),
            );
            Ok(())
        }

        fn min_level(&self) -> LogLevel {
            self.min_level
        }
    }
}
