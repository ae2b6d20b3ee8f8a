//! `PlatformInfo` from `android.os.Build.VERSION`.

use bridge_traits::{error::Result, platform::PlatformInfo};
use jni::JavaVM;
use tracing::debug;

use crate::descriptors::BUILD_VERSION_CLASS;
use crate::jvm::{attach, check};

/// Platform API level read once from `Build.VERSION.SDK_INT`.
#[derive(Debug, Clone, Copy)]
pub struct AndroidPlatformInfo {
    sdk_int: i32,
}

impl AndroidPlatformInfo {
    /// Only the VM is needed; `Build.VERSION` is a static field.
    pub fn from_vm(vm: &JavaVM) -> Result<Self> {
        let mut env = attach(vm)?;
        let result = env
            .get_static_field(BUILD_VERSION_CLASS, "SDK_INT", "I")
            .and_then(|value| value.i());
        let sdk_int = check(&mut env, result, "Build.VERSION.SDK_INT")?;

        debug!(sdk_int, "Resolved Android API level");
        Ok(Self { sdk_int })
    }
}

impl PlatformInfo for AndroidPlatformInfo {
    fn sdk_int(&self) -> i32 {
        self.sdk_int
    }
}
