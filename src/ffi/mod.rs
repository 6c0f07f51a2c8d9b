#[cfg(feature = "guest-sdk")]
mod bindings;
mod safe_wrapper;
mod types;

use std::os::raw::c_char;

#[cfg(feature = "guest-sdk")]
pub use safe_wrapper::GuestSdk;
pub use safe_wrapper::{CapabilityBridge, StatusBuffer};
pub use types::{AppStatus, BridgeError, LibErrorCode, Result, ResultCode};

/// 外部监控库提供的原语
///
/// 监控会话由外部库在进程范围内维护，这里的每个调用都是无状态的转发。
pub trait MonitorLibrary {
    fn enable(&self) -> ResultCode;

    fn disable(&self) -> ResultCode;

    /// 非零表示已启用，具体约定由外部库决定
    fn is_enabled(&self) -> ResultCode;

    /// 发送一次存活心跳
    fn mark_active(&self) -> ResultCode;

    /// 返回由外部库分配的状态字符串，可能为 null
    fn get_app_status(&self) -> *mut c_char;

    /// 释放 `get_app_status` 返回的缓冲区
    ///
    /// # Safety
    ///
    /// `buf` 必须来自同一个库的 `get_app_status`，并且只能释放一次。
    unsafe fn free(&self, buf: *mut c_char);
}

impl<L: MonitorLibrary + ?Sized> MonitorLibrary for &L {
    fn enable(&self) -> ResultCode {
        (**self).enable()
    }

    fn disable(&self) -> ResultCode {
        (**self).disable()
    }

    fn is_enabled(&self) -> ResultCode {
        (**self).is_enabled()
    }

    fn mark_active(&self) -> ResultCode {
        (**self).mark_active()
    }

    fn get_app_status(&self) -> *mut c_char {
        (**self).get_app_status()
    }

    unsafe fn free(&self, buf: *mut c_char) {
        // 安全：调用方保证了与被转发实现相同的前置条件
        unsafe { (**self).free(buf) }
    }
}
