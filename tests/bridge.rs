use std::os::raw::c_char;
use std::ptr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use vmguest_monitor::{AppStatus, BridgeError, CapabilityBridge, MonitorLibrary, ResultCode};

/// 模拟 vmGuestAppMonitorLib：用 libc 分配状态缓冲区，并记录每次调用
struct InstrumentedLibrary {
    code: ResultCode,
    is_enabled: ResultCode,
    status: Option<Vec<u8>>,
    enable_calls: AtomicUsize,
    disable_calls: AtomicUsize,
    is_enabled_calls: AtomicUsize,
    mark_active_calls: AtomicUsize,
    allocated: Mutex<Vec<usize>>,
    freed: Mutex<Vec<usize>>,
}

impl InstrumentedLibrary {
    fn new(code: ResultCode, is_enabled: ResultCode, status: Option<&[u8]>) -> Self {
        Self {
            code,
            is_enabled,
            status: status.map(|s| s.to_vec()),
            enable_calls: AtomicUsize::new(0),
            disable_calls: AtomicUsize::new(0),
            is_enabled_calls: AtomicUsize::new(0),
            mark_active_calls: AtomicUsize::new(0),
            allocated: Mutex::new(Vec::new()),
            freed: Mutex::new(Vec::new()),
        }
    }

    fn with_status(status: &str) -> Self {
        Self::new(0, 1, Some(status.as_bytes()))
    }

    fn allocations(&self) -> Vec<usize> {
        self.allocated.lock().unwrap().clone()
    }

    fn frees(&self) -> Vec<usize> {
        self.freed.lock().unwrap().clone()
    }
}

impl MonitorLibrary for InstrumentedLibrary {
    fn enable(&self) -> ResultCode {
        self.enable_calls.fetch_add(1, Ordering::SeqCst);
        self.code
    }

    fn disable(&self) -> ResultCode {
        self.disable_calls.fetch_add(1, Ordering::SeqCst);
        self.code
    }

    fn is_enabled(&self) -> ResultCode {
        self.is_enabled_calls.fetch_add(1, Ordering::SeqCst);
        self.is_enabled
    }

    fn mark_active(&self) -> ResultCode {
        self.mark_active_calls.fetch_add(1, Ordering::SeqCst);
        self.code
    }

    fn get_app_status(&self) -> *mut c_char {
        let Some(bytes) = &self.status else {
            return ptr::null_mut();
        };
        unsafe {
            let buf = libc::malloc(bytes.len() + 1) as *mut u8;
            assert!(!buf.is_null());
            ptr::copy_nonoverlapping(bytes.as_ptr(), buf, bytes.len());
            *buf.add(bytes.len()) = 0;
            self.allocated.lock().unwrap().push(buf as usize);
            buf as *mut c_char
        }
    }

    unsafe fn free(&self, buf: *mut c_char) {
        self.freed.lock().unwrap().push(buf as usize);
        unsafe { libc::free(buf.cast()) };
    }
}

#[test_log::test]
fn test_fresh_bridge_answers_every_operation() {
    let bridge = CapabilityBridge::new(InstrumentedLibrary::with_status("green"));

    let _: ResultCode = bridge.enable();
    let _: ResultCode = bridge.disable();
    let _: ResultCode = bridge.is_enabled();
    let _: ResultCode = bridge.mark_active();
    let status: String = bridge.app_status().unwrap();
    assert_eq!(status, "green");
}

#[test_log::test]
fn test_status_buffers_are_freed_once_each() {
    let lib = InstrumentedLibrary::with_status("red");
    let bridge = CapabilityBridge::new(&lib);

    for _ in 0..25 {
        assert_eq!(bridge.app_status().unwrap(), "red");
    }

    assert_eq!(lib.allocations().len(), 25);
    assert_eq!(lib.frees(), lib.allocations());
}

#[test_log::test]
fn test_empty_status_is_empty_string() {
    let lib = InstrumentedLibrary::with_status("");
    let bridge = CapabilityBridge::new(&lib);

    assert_eq!(bridge.app_status().unwrap(), "");
    assert_eq!(lib.allocations().len(), 1);
    assert_eq!(lib.frees(), lib.allocations());
}

#[test_log::test]
fn test_null_status_is_empty_string() {
    let lib = InstrumentedLibrary::new(0, 0, None);
    let bridge = CapabilityBridge::new(&lib);

    assert_eq!(bridge.app_status().unwrap(), "");
    assert!(lib.allocations().is_empty());
    // 与 C 实现一致，null 也交给库的释放函数
    assert_eq!(lib.frees(), vec![0]);
}

#[test_log::test]
fn test_result_codes_pass_through_unchanged() {
    let lib = InstrumentedLibrary::new(42, 42, Some(b"gray"));
    let bridge = CapabilityBridge::new(&lib);

    assert_eq!(bridge.enable(), 42);
    assert_eq!(bridge.disable(), 42);
    assert_eq!(bridge.is_enabled(), 42);
    assert_eq!(bridge.mark_active(), 42);

    let lib = InstrumentedLibrary::new(-7, -7, None);
    let bridge = CapabilityBridge::new(&lib);
    assert_eq!(bridge.enable(), -7);
    assert_eq!(bridge.mark_active(), -7);
}

#[test_log::test]
fn test_repeated_calls_are_forwarded() {
    let lib = InstrumentedLibrary::with_status("green");
    let bridge = CapabilityBridge::new(&lib);

    bridge.enable();
    bridge.enable();
    bridge.mark_active();
    bridge.mark_active();
    bridge.mark_active();
    bridge.is_enabled();
    bridge.disable();

    assert_eq!(lib.enable_calls.load(Ordering::SeqCst), 2);
    assert_eq!(lib.mark_active_calls.load(Ordering::SeqCst), 3);
    assert_eq!(lib.is_enabled_calls.load(Ordering::SeqCst), 1);
    assert_eq!(lib.disable_calls.load(Ordering::SeqCst), 1);
}

#[test_log::test]
fn test_green_scenario() {
    let lib = InstrumentedLibrary::new(0, 1, Some(b"green"));
    let bridge = CapabilityBridge::new(&lib);

    assert_eq!(bridge.enable(), 0);
    assert_eq!(bridge.is_enabled(), 1);
    assert_eq!(bridge.app_status().unwrap(), "green");

    let allocations = lib.allocations();
    assert_eq!(allocations.len(), 1);
    assert_eq!(lib.frees(), allocations);
}

#[test_log::test]
fn test_invalid_status_still_releases_buffer() {
    let lib = InstrumentedLibrary::new(0, 1, Some(&[b'g', 0xc3, 0x28, b'n']));
    let bridge = CapabilityBridge::new(&lib);

    let err = bridge.app_status().unwrap_err();
    assert!(matches!(err, BridgeError::StatusUnavailable(_)));
    assert!(err.to_string().starts_with("Status unavailable"));
    assert_eq!(lib.frees(), lib.allocations());
    assert_eq!(lib.frees().len(), 1);
}

#[test_log::test]
fn test_monitoring_status_is_case_insensitive() {
    let lib = InstrumentedLibrary::with_status("Red");
    let bridge = CapabilityBridge::new(&lib);
    assert_eq!(bridge.monitoring_status().unwrap(), AppStatus::Red);

    let lib = InstrumentedLibrary::with_status("Stopped");
    let bridge = CapabilityBridge::new(&lib);
    assert_eq!(
        bridge.monitoring_status().unwrap(),
        AppStatus::Unknown("stopped".to_string())
    );
    assert_eq!(lib.frees().len(), 1);
}
