//! JNI 层：`org.apache.ambari.servicemonitor.reporting.vsphere.VMGuestApi` 的本地方法

#[cfg(any(feature = "guest-sdk", test))]
mod exports;

use crate::ffi::{BridgeError, CapabilityBridge, MonitorLibrary};
use jni::sys::jstring;
use jni::JNIEnv;
use log::error;

/// 状态无法读取时抛出的异常类型
pub const STATUS_UNAVAILABLE_EXCEPTION: &str = "java/lang/IllegalStateException";

/// 读取状态并转换为 Java 字符串
///
/// 失败时抛出 `IllegalStateException` 并返回 null。此时外部缓冲区已经释放。
pub fn app_status_to_java<L: MonitorLibrary>(
    env: &mut JNIEnv,
    bridge: &CapabilityBridge<L>,
) -> jstring {
    let result = bridge
        .app_status()
        .and_then(|status| Ok(env.new_string(status)?));

    match result {
        Ok(jstr) => jstr.into_raw(),
        Err(e) => {
            throw_status_unavailable(env, &e);
            std::ptr::null_mut()
        }
    }
}

fn throw_status_unavailable(env: &mut JNIEnv, cause: &BridgeError) {
    // new_string 失败时 JVM 里可能已有挂起的异常，不能再抛出第二个
    if env.exception_check().unwrap_or(true) {
        error!("getAppStatus failed with a pending Java exception: {}", cause);
        return;
    }
    if let Err(e) = env.throw_new(STATUS_UNAVAILABLE_EXCEPTION, cause.to_string()) {
        error!("Failed to raise {}: {} (cause: {})", STATUS_UNAVAILABLE_EXCEPTION, e, cause);
    }
}
