//! Core service façade and bootstrap helpers.
//!
//! This crate wires host-provided bridge implementations (media index,
//! platform info) into the media inventory core and exposes it to the GUI
//! shell as a named-method channel. Desktop apps typically enable the
//! `desktop-shims` feature (which depends on `bridge-desktop`), whereas
//! Android builds enable the `android` feature, rely on the adapters from
//! `bridge-android` and are entered through the JNI exports in [`android`].

#[cfg(all(feature = "android", target_os = "android"))]
pub mod android;
pub mod channel;
pub mod codec;
pub mod error;
pub mod host;

pub use channel::{media_channel, MethodChannel, MethodHandler, METHOD_GET_SDK_INT, METHOD_QUERY_VIDEOS};
pub use codec::{decode_envelope, MethodCall, MethodResult};
pub use error::{CoreError, Result};
pub use host::{ServiceSlot, NOT_INITIALIZED};

use std::sync::Arc;

use core_media::MediaInventoryService;
use core_runtime::config::InventoryConfig;
use tracing::info;

/// Primary façade exposed to host applications.
#[derive(Clone)]
pub struct CoreService {
    inventory: MediaInventoryService,
    channel: Arc<MethodChannel>,
}

impl CoreService {
    /// Create a new service from a validated configuration.
    pub fn new(config: InventoryConfig) -> Result<Self> {
        config.validate()?;

        let inventory = MediaInventoryService::new(
            Arc::clone(&config.media_store),
            Arc::clone(&config.platform_info),
        );
        let channel = media_channel(config.channel_name.clone(), inventory.clone());

        info!(
            channel = %channel.name(),
            sdk_int = inventory.platform_version(),
            "Media inventory core initialized"
        );

        Ok(Self {
            inventory,
            channel: Arc::new(channel),
        })
    }

    /// Direct access to the inventory, bypassing the channel.
    pub fn inventory(&self) -> &MediaInventoryService {
        &self.inventory
    }

    pub fn channel(&self) -> &MethodChannel {
        &self.channel
    }

    pub fn invoke(&self, call: &MethodCall) -> MethodResult {
        self.channel.invoke(call)
    }

    /// Handle a raw JSON message from the host shell.
    pub fn handle_message(&self, message: &[u8]) -> Vec<u8> {
        self.channel.handle_message(message)
    }

    /// Run `call` on Tokio's blocking pool.
    ///
    /// `queryVideos` blocks while the platform index is read, so async hosts
    /// should go through here instead of [`invoke`](Self::invoke).
    pub async fn invoke_async(&self, call: MethodCall) -> Result<MethodResult> {
        let channel = Arc::clone(&self.channel);
        tokio::task::spawn_blocking(move || channel.invoke(&call))
            .await
            .map_err(|err| CoreError::Task(err.to_string()))
    }
}

/// Convenience bootstrapper for desktop hosts.
///
/// Scans `roots`, or the user's video directory when `roots` is empty.
///
/// ```no_run
/// # #[cfg(feature = "desktop-shims")]
/// # fn example() -> core_service::Result<()> {
/// use core_service::{bootstrap_desktop, MethodCall};
///
/// let core = bootstrap_desktop(["/home/user/Videos"])?;
/// let reply = core.invoke(&MethodCall::new("queryVideos"));
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "desktop-shims")]
pub fn bootstrap_desktop<I, P>(roots: I) -> Result<CoreService>
where
    I: IntoIterator<Item = P>,
    P: Into<std::path::PathBuf>,
{
    let config = roots
        .into_iter()
        .fold(InventoryConfig::builder(), |builder, root| builder.scan_root(root))
        .build()?;
    CoreService::new(config)
}

/// Convenience bootstrapper for Android hosts.
///
/// `context` is the activity handed to `nativeInit`; it must outlive the
/// core, hence the global reference.
#[cfg(all(feature = "android", target_os = "android"))]
pub fn bootstrap_android(
    vm: Arc<jni::JavaVM>,
    context: jni::objects::GlobalRef,
) -> Result<CoreService> {
    use bridge_android::{AndroidMediaStore, AndroidPlatformInfo};

    let platform = AndroidPlatformInfo::from_vm(&vm)
        .map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    let store = AndroidMediaStore::new(vm, context);

    let config = InventoryConfig::builder()
        .media_store(Arc::new(store))
        .platform_info(Arc::new(platform))
        .build()?;
    CoreService::new(config)
}
