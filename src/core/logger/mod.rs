//! 调试日志 - 仅在 debug 构建下输出 info 级别日志
//!
//! 三种调用方式最终都汇聚到同一个出口：
//! 1. 拼接 - 多个值以 `", "` 连接
//! 2. 直出 - 原样输出一条消息
//! 3. 格式化 - printf 风格模板替换

pub mod arg;
pub mod config;
pub mod debug_logger;
pub mod error;
pub mod printf;
pub mod sink;

pub use arg::FormatArg;
pub use config::{LoggerConfig, DEBUG_BUILD, DEFAULT_TAG};
pub use debug_logger::{DebugLogger, LogRequest};
pub use error::{FormatError, LoggerError};
pub use printf::format;
pub use sink::{LogFacadeSink, LogLine, LogSink, MemorySink};
