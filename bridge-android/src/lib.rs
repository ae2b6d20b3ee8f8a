//! # Android Bridge Implementations
//!
//! Bridge traits implemented over JNI for Android hosts:
//! - `AndroidMediaStore` queries `MediaStore.Video.Media` through the
//!   activity's `ContentResolver`
//! - `AndroidCursor` wraps the returned `android.database.Cursor` and closes
//!   it when dropped
//! - `AndroidPlatformInfo` reports `Build.VERSION.SDK_INT`
//! - `LogcatSink` mirrors core logs to Logcat
//!
//! The JVM and activity arrive through the host's `nativeInit` call (see
//! `core_service::android`), which hands them to the constructors below.
//!
//! ## Usage
//!
//! ```ignore
//! use bridge_android::{AndroidMediaStore, AndroidPlatformInfo};
//! use std::sync::Arc;
//!
//! let vm = Arc::new(env.get_java_vm()?);
//! let context = env.new_global_ref(activity)?;
//! let platform = Arc::new(AndroidPlatformInfo::from_vm(&vm)?);
//! let store = Arc::new(AndroidMediaStore::new(vm, context));
//! ```
//!
//! Everything except the descriptors and the Logcat level mapping compiles
//! only for `target_os = "android"`.

pub mod descriptors;
pub mod logcat;

#[cfg(target_os = "android")]
mod jvm;
#[cfg(target_os = "android")]
mod media_store;
#[cfg(target_os = "android")]
mod platform;

#[cfg(target_os = "android")]
pub use logcat::LogcatSink;
#[cfg(target_os = "android")]
pub use media_store::{AndroidCursor, AndroidMediaStore};
#[cfg(target_os = "android")]
pub use platform::AndroidPlatformInfo;
