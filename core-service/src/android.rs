//! JNI entry points for the Android host.
//!
//! `MainActivity` loads the library and declares:
//!
//! ```kotlin
//! private external fun nativeInit(context: Context): Boolean
//! private external fun nativeHandleMessage(message: ByteArray): ByteArray?
//! ```
//!
//! `nativeInit` runs from `configureFlutterEngine`. The `cinemax/mediastore`
//! handler on the binary messenger then passes each raw message to
//! `nativeHandleMessage` and replies with the returned envelope, off the main
//! thread since `queryVideos` blocks on the content resolver.

use std::sync::{Arc, Once};

use bridge_android::logcat::DEFAULT_TAG;
use bridge_android::LogcatSink;
use bridge_traits::log_sink::LogLevel;
use core_runtime::logging::{init_logging, LoggingConfig};
use jni::objects::{JByteArray, JObject};
use jni::sys::{jboolean, jbyteArray, JNI_FALSE, JNI_TRUE};
use jni::JNIEnv;
use tracing::{error, info};

use crate::codec::{encode_result, MethodResult, INVALID_MESSAGE};
use crate::host::ServiceSlot;

static CORE: ServiceSlot = ServiceSlot::new();
static LOGGING: Once = Once::new();

fn init_host_logging() {
    LOGGING.call_once(|| {
        let level = if cfg!(debug_assertions) {
            LogLevel::Debug
        } else {
            LogLevel::Info
        };
        let config = LoggingConfig::default()
            .with_stdout(false)
            .with_level(level)
            .with_logger_sink(Arc::new(LogcatSink::new(DEFAULT_TAG, level)));
        if init_logging(config).is_err() {
            return;
        }

        std::panic::set_hook(Box::new(|info| {
            let location = info
                .location()
                .map(|l| format!("{}:{}", l.file(), l.line()))
                .unwrap_or_else(|| "unknown".to_string());
            error!(%location, "PANIC: {}", info);
        }));
    });
}

/// Build the core from the host's JVM and context and install it.
///
/// Returns `false` when the core could not be built; messages keep getting
/// `not_initialized` replies until a later call succeeds.
#[no_mangle]
pub extern "system" fn Java_com_example_cinemax_MainActivity_nativeInit(
    env: JNIEnv,
    _activity: JObject,
    context: JObject,
) -> jboolean {
    init_host_logging();

    let vm = match env.get_java_vm() {
        Ok(vm) => Arc::new(vm),
        Err(e) => {
            error!(error = %e, "Failed to get JavaVM");
            return JNI_FALSE;
        }
    };

    let context = match env.new_global_ref(context) {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "Failed to create global ref to context");
            return JNI_FALSE;
        }
    };

    match crate::bootstrap_android(vm, context) {
        Ok(core) => {
            CORE.install(core);
            info!("nativeInit completed");
            JNI_TRUE
        }
        Err(e) => {
            error!(error = %e, "Failed to bootstrap media core");
            JNI_FALSE
        }
    }
}

/// Handle one encoded channel message and return the encoded reply.
///
/// An empty array means the method is not implemented. `null` is returned
/// only when the reply array itself cannot be allocated.
#[no_mangle]
pub extern "system" fn Java_com_example_cinemax_MainActivity_nativeHandleMessage(
    env: JNIEnv,
    _activity: JObject,
    message: JByteArray,
) -> jbyteArray {
    let reply = match env.convert_byte_array(&message) {
        Ok(bytes) => CORE.handle_message(&bytes),
        Err(e) => encode_result(&MethodResult::error(
            INVALID_MESSAGE,
            format!("Unreadable message array: {}", e),
        )),
    };

    match env.byte_array_from_slice(&reply) {
        Ok(array) => array.into_raw(),
        Err(e) => {
            error!(error = %e, "Failed to allocate reply array");
            JObject::null().into_raw()
        }
    }
}
