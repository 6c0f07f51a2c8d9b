#[cfg(feature = "guest-sdk")]
use super::bindings;
use super::types::{AppStatus, Result, ResultCode};
use super::MonitorLibrary;
use log::{trace, warn};
use std::ffi::CStr;
use std::os::raw::c_char;

/// vSphere Guest SDK 中的 vmGuestAppMonitorLib
#[cfg(feature = "guest-sdk")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GuestSdk;

#[cfg(feature = "guest-sdk")]
impl MonitorLibrary for GuestSdk {
    fn enable(&self) -> ResultCode {
        unsafe { bindings::VMGuestAppMonitor_Enable() as ResultCode }
    }

    fn disable(&self) -> ResultCode {
        unsafe { bindings::VMGuestAppMonitor_Disable() as ResultCode }
    }

    fn is_enabled(&self) -> ResultCode {
        unsafe { bindings::VMGuestAppMonitor_IsEnabled() as ResultCode }
    }

    fn mark_active(&self) -> ResultCode {
        unsafe { bindings::VMGuestAppMonitor_MarkActive() as ResultCode }
    }

    fn get_app_status(&self) -> *mut c_char {
        unsafe { bindings::VMGuestAppMonitor_GetAppStatus() }
    }

    unsafe fn free(&self, buf: *mut c_char) {
        unsafe { bindings::VMGuestAppMonitor_Free(buf.cast()) }
    }
}

/// 外部库分配的状态缓冲区
///
/// 持有期间可以读取内容，离开作用域时调用库的释放函数，恰好一次。
/// null 指针同样会交给释放函数，与库的约定保持一致。
pub struct StatusBuffer<'a, L: MonitorLibrary + ?Sized> {
    lib: &'a L,
    ptr: *mut c_char,
}

impl<'a, L: MonitorLibrary + ?Sized> StatusBuffer<'a, L> {
    /// 向外部库请求当前状态
    pub fn acquire(lib: &'a L) -> Self {
        let ptr = lib.get_app_status();
        Self { lib, ptr }
    }

    /// 缓冲区的原始字节，不含结尾的 NUL；null 视为空
    pub fn as_bytes(&self) -> &[u8] {
        if self.ptr.is_null() {
            return &[];
        }
        // 安全：非 null 时库保证返回以 NUL 结尾的字符串，并在释放前保持有效
        unsafe { CStr::from_ptr(self.ptr) }.to_bytes()
    }

    /// 复制为调用方拥有的字符串
    ///
    /// # 错误
    ///
    /// 内容不是合法 UTF-8 时返回 `BridgeError::StatusUnavailable`
    pub fn to_owned_string(&self) -> Result<String> {
        let text = std::str::from_utf8(self.as_bytes())?;
        Ok(text.to_owned())
    }
}

impl<L: MonitorLibrary + ?Sized> Drop for StatusBuffer<'_, L> {
    fn drop(&mut self) {
        // 安全：ptr 来自 acquire 中的 get_app_status，drop 只会执行一次
        unsafe { self.lib.free(self.ptr) };
    }
}

/// 把外部监控库的五个原语转发给调用方
///
/// 除了库本身不保存任何状态：不缓存结果，不解释返回码，不重试。
#[derive(Debug, Clone, Default)]
pub struct CapabilityBridge<L> {
    lib: L,
}

impl<L: MonitorLibrary> CapabilityBridge<L> {
    pub const fn new(lib: L) -> Self {
        Self { lib }
    }

    pub fn enable(&self) -> ResultCode {
        let code = self.lib.enable();
        trace!("VMGuestAppMonitor_Enable returned {}", code);
        code
    }

    pub fn disable(&self) -> ResultCode {
        let code = self.lib.disable();
        trace!("VMGuestAppMonitor_Disable returned {}", code);
        code
    }

    pub fn is_enabled(&self) -> ResultCode {
        let code = self.lib.is_enabled();
        trace!("VMGuestAppMonitor_IsEnabled returned {}", code);
        code
    }

    pub fn mark_active(&self) -> ResultCode {
        let code = self.lib.mark_active();
        trace!("VMGuestAppMonitor_MarkActive returned {}", code);
        code
    }

    /// 获取当前应用状态字符串
    ///
    /// 无论复制是否成功，外部缓冲区都会在返回前释放。
    pub fn app_status(&self) -> Result<String> {
        let buffer = StatusBuffer::acquire(&self.lib);
        let status = buffer.to_owned_string();
        match &status {
            Ok(s) => trace!("VMGuestAppMonitor_GetAppStatus returned {:?}", s),
            Err(e) => warn!("Discarding application status: {}", e),
        }
        status
    }

    /// 小写化后的监控状态
    pub fn monitoring_status(&self) -> Result<AppStatus> {
        self.app_status().map(|s| AppStatus::parse(&s))
    }
}
