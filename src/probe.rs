//! 调试用的单次调用：对监控库执行一个操作并报告结果

use crate::ffi::{CapabilityBridge, LibErrorCode, MonitorLibrary, Result, ResultCode};
use serde::Serialize;
use std::fmt;

pub const USAGE: &str = "Usage: vmguest-probe enable|disable|markActive|isEnabled|getStatus [--json]";

/// 可以从命令行调用的操作
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Operation {
    Enable,
    Disable,
    MarkActive,
    IsEnabled,
    GetStatus,
}

impl Operation {
    /// 按命令行名称解析，区分大小写
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "enable" => Some(Self::Enable),
            "disable" => Some(Self::Disable),
            "markActive" => Some(Self::MarkActive),
            "isEnabled" => Some(Self::IsEnabled),
            "getStatus" => Some(Self::GetStatus),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Enable => "enable",
            Self::Disable => "disable",
            Self::MarkActive => "markActive",
            Self::IsEnabled => "isEnabled",
            Self::GetStatus => "getStatus",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 一次调用的结果
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Outcome {
    /// 返回码类操作，附带返回码的描述
    Code {
        operation: &'static str,
        code: ResultCode,
        text: String,
    },
    /// getStatus 返回的原始状态字符串
    Status {
        operation: &'static str,
        status: String,
    },
}

impl Outcome {
    fn from_code(operation: Operation, code: ResultCode) -> Self {
        Self::Code {
            operation: operation.name(),
            code,
            text: LibErrorCode::describe(code),
        }
    }

    /// 纯文本输出，例如 `enable result 0: Success`
    pub fn render(&self) -> String {
        match self {
            Self::Code {
                operation,
                code,
                text,
            } => format!("{} result {}: {}", operation, code, text),
            Self::Status { operation, status } => format!("{} status {}", operation, status),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// 执行一次操作，不重试
pub fn run<L: MonitorLibrary>(bridge: &CapabilityBridge<L>, operation: Operation) -> Result<Outcome> {
    let outcome = match operation {
        Operation::Enable => Outcome::from_code(operation, bridge.enable()),
        Operation::Disable => Outcome::from_code(operation, bridge.disable()),
        Operation::MarkActive => Outcome::from_code(operation, bridge.mark_active()),
        Operation::IsEnabled => Outcome::from_code(operation, bridge.is_enabled()),
        Operation::GetStatus => Outcome::Status {
            operation: operation.name(),
            status: bridge.app_status()?,
        },
    };
    Ok(outcome)
}
