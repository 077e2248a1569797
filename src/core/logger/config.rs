use serde::{Deserialize, Serialize};

use super::error::LoggerError;

/// 所有日志行共用的固定标签，与 android_logger 初始化时的 tag 一致
pub const DEFAULT_TAG: &str = "Screenshot";

/// 编译期构建模式：debug 构建为 true
pub const DEBUG_BUILD: bool = cfg!(debug_assertions);

/// 日志器配置，构建后不可变
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// 为 false 时所有调用都是空操作
    pub debug: bool,
}

impl LoggerConfig {
    pub fn new(debug: bool) -> Self {
        Self { debug }
    }

    /// 从 JSON 读取配置，缺失字段使用默认值，未知字段报错
    pub fn from_json(json: &str) -> Result<Self, LoggerError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self::new(DEBUG_BUILD)
    }
}
