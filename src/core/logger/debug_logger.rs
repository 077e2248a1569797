//! Debug-gated logger
//!
//! Every entry point checks the debug flag first and returns immediately when
//! it is off, so release builds never join values or parse templates.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::arg::FormatArg;
use super::config::{LoggerConfig, DEFAULT_TAG};
use super::error::FormatError;
use super::printf;
use super::sink::{LogFacadeSink, LogSink};

const SEPARATOR: &str = ", ";

/// 三种调用形态的统一输入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LogRequest {
    /// 以 `", "` 拼接
    Values(Vec<FormatArg>),
    /// 原样输出
    Message(String),
    /// printf 风格模板
    Format {
        template: String,
        args: Vec<FormatArg>,
    },
}

pub struct DebugLogger<S: LogSink = LogFacadeSink> {
    config: LoggerConfig,
    sink: S,
}

impl DebugLogger<LogFacadeSink> {
    pub fn new(config: LoggerConfig) -> Self {
        Self::with_sink(config, LogFacadeSink)
    }
}

impl Default for DebugLogger<LogFacadeSink> {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl<S: LogSink> DebugLogger<S> {
    pub fn with_sink(config: LoggerConfig, sink: S) -> Self {
        debug!("DebugLogger: tag={:?}, debug={}", DEFAULT_TAG, config.debug);
        Self { config, sink }
    }

    pub fn is_debug(&self) -> bool {
        self.config.debug
    }

    pub fn tag(&self) -> &'static str {
        DEFAULT_TAG
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    /// 直出：原样输出 `message`
    pub fn p(&self, message: &str) {
        if !self.config.debug {
            return;
        }
        self.sink.emit(DEFAULT_TAG, message);
    }

    /// 拼接：各值的 `Display` 以 `", "` 连接后输出
    pub fn p_values(&self, values: &[&dyn Display]) {
        if !self.config.debug {
            return;
        }
        self.p(&join(values.iter()));
    }

    /// 拼接，参数为 [`FormatArg`]
    pub fn p_args(&self, values: &[FormatArg]) {
        if !self.config.debug {
            return;
        }
        self.p(&join(values.iter()));
    }

    /// 格式化：按 printf 规则代入后输出
    ///
    /// 模板与参数不匹配时返回错误且不输出任何内容；debug 关闭时模板不会被解析。
    pub fn p_format(&self, template: &str, args: &[FormatArg]) -> Result<(), FormatError> {
        if !self.config.debug {
            return Ok(());
        }
        let message = printf::format(template, args)?;
        self.p(&message);
        Ok(())
    }

    pub fn log(&self, request: &LogRequest) -> Result<(), FormatError> {
        match request {
            LogRequest::Values(values) => {
                self.p_args(values);
                Ok(())
            }
            LogRequest::Message(message) => {
                self.p(message);
                Ok(())
            }
            LogRequest::Format { template, args } => self.p_format(template, args),
        }
    }
}

fn join<I>(values: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    values
        .into_iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
