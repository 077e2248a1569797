use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("缺少格式参数: '{0}'")]
    MissingArgument(String),
    #[error("未知的格式转换: '{0}'")]
    UnknownConversion(String),
    #[error("不支持的格式转换: '{0}'")]
    UnsupportedConversion(char),
    #[error("格式转换 {conversion} 不接受 {arg_type} 类型参数")]
    IllegalConversion {
        conversion: char,
        arg_type: &'static str,
    },
    #[error("标志 '{flags}' 与格式转换 {conversion} 不兼容")]
    FlagsMismatch { flags: String, conversion: char },
    #[error("非法标志组合: '{0}'")]
    IllegalFlags(String),
    #[error("缺少宽度: '{0}'")]
    MissingWidth(String),
    #[error("格式转换 {0} 不接受精度")]
    IllegalPrecision(char),
    #[error("格式转换 {0} 不接受宽度")]
    IllegalWidth(char),
    #[error("非法参数索引: '{0}'")]
    IllegalIndex(String),
    #[error("非法码点: {0}")]
    IllegalCodePoint(i64),
}

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("格式化失败: {0}")]
    Format(#[from] FormatError),
    #[error("配置解析失败: {0}")]
    Config(#[from] serde_json::Error),
}
