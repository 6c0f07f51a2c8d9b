use std::fmt;
use std::str::Utf8Error;

/// 监控库的返回码，原样透传给调用方
pub type ResultCode = libc::c_int;

/// vmGuestAppMonitorLib 已知的返回码
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LibErrorCode {
    Success,
    Other,
    NotRunningInVm,
    NotEnabled,
    NotSupported,
}

impl LibErrorCode {
    /// 将原始返回码映射为已知返回码
    pub fn from_raw(code: ResultCode) -> Option<Self> {
        match code {
            0 => Some(Self::Success),
            1 => Some(Self::Other),
            2 => Some(Self::NotRunningInVm),
            3 => Some(Self::NotEnabled),
            4 => Some(Self::NotSupported),
            _ => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Other => "Other error",
            Self::NotRunningInVm => "Not running in a VM",
            Self::NotEnabled => "Monitoring is not enabled",
            Self::NotSupported => "Not supported",
        }
    }

    /// 返回码的可读描述，仅用于日志和调试输出
    pub fn describe(code: ResultCode) -> String {
        match Self::from_raw(code) {
            Some(known) => known.text().to_string(),
            None => format!("Unknown status code: {}", code),
        }
    }
}

/// 宿主机报告的应用监控状态
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum AppStatus {
    Green,
    Red,
    Gray,
    Unknown(String),
}

impl AppStatus {
    /// 按小写比较状态字符串；无法识别的值保留为小写形式
    pub fn parse(raw: &str) -> Self {
        let lowered = raw.to_lowercase();
        match lowered.as_str() {
            "green" => Self::Green,
            "red" => Self::Red,
            "gray" => Self::Gray,
            _ => Self::Unknown(lowered),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Green => "green",
            Self::Red => "red",
            Self::Gray => "gray",
            Self::Unknown(s) => s,
        }
    }
}

impl fmt::Display for AppStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 错误类型
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error("Status unavailable: native buffer is not valid UTF-8: {0}")]
    StatusUnavailable(#[from] Utf8Error),
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
}

pub type Result<T> = std::result::Result<T, BridgeError>;
