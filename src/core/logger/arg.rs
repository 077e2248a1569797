use serde::{Deserialize, Serialize};
use std::fmt;

/// 格式化参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FormatArg {
    Null,
    Bool(bool),
    Char(char),
    /// 32 位及以下的有符号整数，`%x`/`%o` 按 32 位补码输出
    Int32(i32),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
}

impl FormatArg {
    pub fn type_name(&self) -> &'static str {
        match self {
            FormatArg::Null => "null",
            FormatArg::Bool(_) => "bool",
            FormatArg::Char(_) => "char",
            FormatArg::Int32(_) => "i32",
            FormatArg::Int(_) => "i64",
            FormatArg::UInt(_) => "u64",
            FormatArg::Float(_) => "f64",
            FormatArg::Str(_) => "String",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FormatArg::Null)
    }
}

impl fmt::Display for FormatArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatArg::Null => f.write_str("null"),
            FormatArg::Bool(v) => write!(f, "{}", v),
            FormatArg::Char(v) => write!(f, "{}", v),
            FormatArg::Int32(v) => write!(f, "{}", v),
            FormatArg::Int(v) => write!(f, "{}", v),
            FormatArg::UInt(v) => write!(f, "{}", v),
            FormatArg::Float(v) => write!(f, "{}", v),
            FormatArg::Str(v) => f.write_str(v),
        }
    }
}

macro_rules! impl_from {
    ($variant:ident: $($ty:ty),+ => $target:ty) => {
        $(
            impl From<$ty> for FormatArg {
                fn from(v: $ty) -> Self {
                    FormatArg::$variant(v as $target)
                }
            }
        )+
    };
}

impl_from!(Int32: i8, i16, i32 => i32);
impl_from!(Int: i64, isize => i64);
impl_from!(UInt: u8, u16, u32, u64, usize => u64);
impl_from!(Float: f32, f64 => f64);

impl From<bool> for FormatArg {
    fn from(v: bool) -> Self {
        FormatArg::Bool(v)
    }
}

impl From<char> for FormatArg {
    fn from(v: char) -> Self {
        FormatArg::Char(v)
    }
}

impl From<&str> for FormatArg {
    fn from(v: &str) -> Self {
        FormatArg::Str(v.to_string())
    }
}

impl From<String> for FormatArg {
    fn from(v: String) -> Self {
        FormatArg::Str(v)
    }
}

impl<T: Into<FormatArg>> From<Option<T>> for FormatArg {
    fn from(v: Option<T>) -> Self {
        v.map_or(FormatArg::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FormatArg::from("a").to_string(), "a");
        assert_eq!(FormatArg::from(-3i32).to_string(), "-3");
        assert_eq!(FormatArg::from(true).to_string(), "true");
        assert_eq!(FormatArg::from(None::<i32>).to_string(), "null");
        assert_eq!(FormatArg::from(2.5f64).to_string(), "2.5");
    }

    #[test]
    fn test_from_unsigned() {
        assert_eq!(FormatArg::from(u64::MAX), FormatArg::UInt(u64::MAX));
        assert_eq!(FormatArg::from(Some(7u8)), FormatArg::UInt(7));
    }

    #[test]
    fn test_from_signed_keeps_width() {
        assert_eq!(FormatArg::from(-1i32), FormatArg::Int32(-1));
        assert_eq!(FormatArg::from(-1i16), FormatArg::Int32(-1));
        assert_eq!(FormatArg::from(-1i64), FormatArg::Int(-1));
    }
}
