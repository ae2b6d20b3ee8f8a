//! JVM attachment and exception handling shared by the adapters.

use bridge_traits::error::{BridgeError, Result};
use jni::objects::JString;
use jni::{JNIEnv, JavaVM};

/// Attach the current thread to the JVM for the rest of its life.
pub(crate) fn attach(vm: &JavaVM) -> Result<JNIEnv<'_>> {
    vm.attach_current_thread_permanently()
        .map_err(|e| BridgeError::NotAvailable(format!("Cannot attach to JVM: {}", e)))
}

/// Convert a JNI result, clearing any pending Java exception so the thread
/// can keep making JNI calls.
pub(crate) fn check<T>(env: &mut JNIEnv<'_>, result: jni::errors::Result<T>, what: &str) -> Result<T> {
    result.map_err(|err| match take_exception(env) {
        Some(exception) => BridgeError::OperationFailed(format!("{} threw {}", what, exception)),
        None => BridgeError::OperationFailed(format!("{} failed: {}", what, err)),
    })
}

/// Clear the pending exception, if any, and describe it with `toString()`.
fn take_exception(env: &mut JNIEnv<'_>) -> Option<String> {
    if !env.exception_check().unwrap_or(false) {
        return None;
    }
    let throwable = env.exception_occurred().ok();
    let _ = env.exception_clear();

    let throwable = throwable?;
    let text = env
        .call_method(&*throwable, "toString", "()Ljava/lang/String;", &[])
        .and_then(|value| value.l())
        .ok()?;
    let text = JString::from(text);
    let description = env.get_string(&text).ok().map(String::from);
    description
}
