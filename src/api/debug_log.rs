//! 调试日志 - 进程级默认日志器

use crate::core::logger::{DebugLogger, FormatArg, FormatError, LoggerConfig, DEBUG_BUILD};
use flutter_rust_bridge::frb;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static LOGGER: Lazy<DebugLogger> = Lazy::new(|| {
    crate::init_logging();
    DebugLogger::new(LoggerConfig::default())
});

/// 进程级默认日志器：固定标签，debug 标志取自编译期构建模式；首次使用时初始化平台日志
pub fn logger() -> &'static DebugLogger {
    &LOGGER
}

/// 调试日志 API 错误类型，FRB 友好的设计
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogApiError {
    pub error_type: String,
    pub message: String,
}

impl From<FormatError> for LogApiError {
    fn from(e: FormatError) -> Self {
        let error_type = match e {
            FormatError::MissingArgument(_) => "MissingArgument",
            FormatError::UnknownConversion(_) | FormatError::UnsupportedConversion(_) => {
                "UnknownConversion"
            }
            FormatError::IllegalConversion { .. } | FormatError::IllegalCodePoint(_) => {
                "IllegalConversion"
            }
            _ => "IllegalFormat",
        };
        Self {
            error_type: error_type.to_string(),
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for LogApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.error_type, self.message)
    }
}

impl std::error::Error for LogApiError {}

/// 初始化平台日志（Android 上为 logcat）
#[frb(sync)]
pub fn init_logger() {
    crate::init_logging();
}

#[frb(sync)]
pub fn is_debug_build() -> bool {
    DEBUG_BUILD
}

/// 原样输出一条消息
///
/// ```dart
/// debugLog(message: "onStartCommand");
/// ```
#[frb(sync)]
pub fn debug_log(message: String) {
    logger().p(&message);
}

/// 多个值以 `", "` 拼接后输出
#[frb(sync)]
pub fn debug_log_values(values: Vec<FormatArg>) {
    logger().p_args(&values);
}

/// printf 风格格式化后输出
///
/// ```dart
/// debugLogFormat(template: "x=%d", args: [FormatArg.int(5)]);
/// ```
#[frb(sync)]
pub fn debug_log_format(template: String, args: Vec<FormatArg>) -> Result<(), LogApiError> {
    Ok(logger().p_format(&template, &args)?)
}
