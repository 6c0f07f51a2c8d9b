//! vmguest-monitor - JNI bridge for vSphere guest application monitoring
//!
//! This library exposes the vmGuestAppMonitorLib primitives of the vSphere
//! Guest SDK to the JVM as the native methods of
//! `org.apache.ambari.servicemonitor.reporting.vsphere.VMGuestApi`.
//! Result codes are passed through unchanged; the one native string
//! returned by the library is copied and released on every call.

// 导出所有公共模块
pub mod ffi;
pub mod java;
pub mod probe;

// 重新导出常用类型，使其可以直接从 crate 根访问
#[cfg(feature = "guest-sdk")]
pub use crate::ffi::GuestSdk;
pub use crate::ffi::{
    AppStatus, BridgeError, CapabilityBridge, LibErrorCode, MonitorLibrary, Result, ResultCode,
    StatusBuffer,
};

/// 库的版本信息
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 初始化日志系统
///
/// 默认级别为 info，可以用 `RUST_LOG` 覆盖。重复调用不会出错，
/// 这样 JVM 多次加载本库或宿主程序已经安装了日志实现时都是安全的。
pub fn init() {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    if env_logger::Builder::from_env(env).try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}
