//! printf 风格格式化
//!
//! 语法：`%[argument_index$][flags][width][.precision]conversion`
//!
//! - 参数选择：普通占位符按顺序消费参数；`n$` 指定第 n 个参数（从 1 开始），
//!   不影响顺序游标；`<` 复用上一个占位符的参数
//! - 多余的参数被忽略，缺少参数则报错
//! - `null` 参数除 `%b` 外均输出 `null`

use once_cell::sync::Lazy;
use regex::Regex;

use super::arg::FormatArg;
use super::error::FormatError;

static SPECIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^%(\d+\$)?([-#+ 0,(<]*)?(\d+)?(\.\d+)?([tT])?([a-zA-Z%])")
        .expect("specifier pattern is valid")
});

const LINE_SEPARATOR: &str = "\n";

/// 宽度与精度上限，超出视为非法
const MAX_WIDTH: usize = 1 << 16;

#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    left: bool,
    alternate: bool,
    plus: bool,
    space: bool,
    zero: bool,
    group: bool,
    paren: bool,
    previous: bool,
}

impl Flags {
    fn parse(text: &str) -> Result<Self, FormatError> {
        let mut flags = Flags::default();
        for c in text.chars() {
            let slot = match c {
                '-' => &mut flags.left,
                '#' => &mut flags.alternate,
                '+' => &mut flags.plus,
                ' ' => &mut flags.space,
                '0' => &mut flags.zero,
                ',' => &mut flags.group,
                '(' => &mut flags.paren,
                '<' => &mut flags.previous,
                _ => return Err(FormatError::IllegalFlags(text.to_string())),
            };
            if *slot {
                return Err(FormatError::IllegalFlags(text.to_string()));
            }
            *slot = true;
        }
        Ok(flags)
    }

    fn any_formatting(&self) -> bool {
        self.left || self.alternate || self.plus || self.space || self.zero || self.group || self.paren
    }
}

/// 解析后的单个占位符
#[derive(Debug)]
struct Spec<'a> {
    text: &'a str,
    index: Option<usize>,
    flags: Flags,
    flags_text: &'a str,
    width: Option<usize>,
    precision: Option<usize>,
    conversion: char,
    upper: bool,
}

impl<'a> Spec<'a> {
    fn parse(rest: &'a str) -> Result<Option<Self>, FormatError> {
        let caps = match SPECIFIER.captures(rest) {
            Some(caps) => caps,
            None => return Ok(None),
        };
        let text = caps.get(0).map_or("", |m| m.as_str());
        let raw_conversion = caps
            .get(6)
            .and_then(|m| m.as_str().chars().next())
            .unwrap_or('%');

        if let Some(date) = caps.get(5) {
            // 日期时间类转换（%tY 等）不支持
            let c = date.as_str().chars().next().unwrap_or('t');
            return Err(FormatError::UnsupportedConversion(c));
        }

        let index = match caps.get(1) {
            Some(m) => {
                let digits = m.as_str().trim_end_matches('$');
                let n = digits
                    .parse::<usize>()
                    .map_err(|_| FormatError::IllegalIndex(text.to_string()))?;
                if n == 0 {
                    return Err(FormatError::IllegalIndex(text.to_string()));
                }
                Some(n)
            }
            None => None,
        };

        let flags_text = caps.get(2).map_or("", |m| m.as_str());
        let flags = Flags::parse(flags_text)?;

        let width = match caps.get(3) {
            Some(m) => Some(
                m.as_str()
                    .parse::<usize>()
                    .ok()
                    .filter(|w| *w <= MAX_WIDTH)
                    .ok_or(FormatError::IllegalWidth(raw_conversion))?,
            ),
            None => None,
        };
        let precision = match caps.get(4) {
            Some(m) => Some(
                m.as_str()[1..]
                    .parse::<usize>()
                    .ok()
                    .filter(|p| *p <= MAX_WIDTH)
                    .ok_or(FormatError::IllegalPrecision(raw_conversion))?,
            ),
            None => None,
        };

        let upper = matches!(raw_conversion, 'S' | 'B' | 'C' | 'X' | 'E' | 'H' | 'G' | 'A');
        let spec = Spec {
            text,
            index,
            flags,
            flags_text,
            width,
            precision,
            conversion: raw_conversion.to_ascii_lowercase(),
            upper,
        };
        spec.validate(raw_conversion)?;
        Ok(Some(spec))
    }

    fn takes_argument(&self) -> bool {
        !matches!(self.conversion, '%' | 'n')
    }

    fn validate(&self, raw: char) -> Result<(), FormatError> {
        let f = self.flags;
        match raw {
            's' | 'S' | 'b' | 'B' => {
                self.reject_flags(f.alternate || f.plus || f.space || f.zero || f.group || f.paren)?;
                self.require_width_for_left()
            }
            'c' | 'C' => {
                if self.precision.is_some() {
                    return Err(FormatError::IllegalPrecision(raw));
                }
                self.reject_flags(f.alternate || f.plus || f.space || f.zero || f.group || f.paren)?;
                self.require_width_for_left()
            }
            'd' => {
                if self.precision.is_some() {
                    return Err(FormatError::IllegalPrecision(raw));
                }
                self.reject_flags(f.alternate)?;
                self.check_numeric()
            }
            'o' | 'x' | 'X' => {
                if self.precision.is_some() {
                    return Err(FormatError::IllegalPrecision(raw));
                }
                self.reject_flags(f.plus || f.space || f.group || f.paren)?;
                self.check_numeric()
            }
            'e' | 'E' => {
                self.reject_flags(f.group)?;
                self.check_numeric()
            }
            'f' => self.check_numeric(),
            '%' => {
                if self.precision.is_some() {
                    return Err(FormatError::IllegalPrecision(raw));
                }
                self.reject_flags(f.alternate || f.plus || f.space || f.zero || f.group || f.paren)?;
                self.require_width_for_left()
            }
            'n' => {
                if self.width.is_some() {
                    return Err(FormatError::IllegalWidth(raw));
                }
                if self.precision.is_some() {
                    return Err(FormatError::IllegalPrecision(raw));
                }
                if f.any_formatting() || f.previous {
                    return Err(FormatError::IllegalFlags(self.flags_text.to_string()));
                }
                Ok(())
            }
            'h' | 'H' | 'g' | 'G' | 'a' | 'A' => Err(FormatError::UnsupportedConversion(raw)),
            _ => Err(FormatError::UnknownConversion(raw.to_string())),
        }
    }

    fn reject_flags(&self, bad: bool) -> Result<(), FormatError> {
        if bad {
            return Err(FormatError::FlagsMismatch {
                flags: self.flags_text.to_string(),
                conversion: self.conversion_char(),
            });
        }
        Ok(())
    }

    fn require_width_for_left(&self) -> Result<(), FormatError> {
        if self.flags.left && self.width.is_none() {
            return Err(FormatError::MissingWidth(self.text.to_string()));
        }
        Ok(())
    }

    fn check_numeric(&self) -> Result<(), FormatError> {
        let f = self.flags;
        if (f.plus && f.space) || (f.left && f.zero) {
            return Err(FormatError::IllegalFlags(self.flags_text.to_string()));
        }
        if (f.left || f.zero) && self.width.is_none() {
            return Err(FormatError::MissingWidth(self.text.to_string()));
        }
        Ok(())
    }

    fn conversion_char(&self) -> char {
        if self.upper {
            self.conversion.to_ascii_uppercase()
        } else {
            self.conversion
        }
    }
}

/// 按 printf 规则把 `args` 代入 `template`
pub fn format(template: &str, args: &[FormatArg]) -> Result<String, FormatError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut ordinary = 0usize;
    let mut last: Option<usize> = None;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        let spec = match Spec::parse(rest)? {
            Some(spec) => spec,
            None => {
                let bad = rest[1..]
                    .chars()
                    .next()
                    .map_or_else(|| "%".to_string(), |c| c.to_string());
                return Err(FormatError::UnknownConversion(bad));
            }
        };
        rest = &rest[spec.text.len()..];

        if !spec.takes_argument() {
            match spec.conversion {
                'n' => out.push_str(LINE_SEPARATOR),
                _ => out.push_str(&justify("%".to_string(), &spec)),
            }
            continue;
        }

        let slot = if spec.flags.previous {
            last
        } else if let Some(n) = spec.index {
            Some(n - 1)
        } else {
            ordinary += 1;
            Some(ordinary - 1)
        };
        let arg = slot
            .and_then(|i| args.get(i))
            .ok_or_else(|| FormatError::MissingArgument(spec.text.to_string()))?;
        last = slot;

        out.push_str(&render(&spec, arg)?);
    }
    out.push_str(rest);

    Ok(out)
}

fn render(spec: &Spec<'_>, arg: &FormatArg) -> Result<String, FormatError> {
    let text = match spec.conversion {
        's' => truncate(arg.to_string(), spec.precision),
        'b' => {
            let value = match arg {
                FormatArg::Null => false,
                FormatArg::Bool(v) => *v,
                _ => true,
            };
            truncate(value.to_string(), spec.precision)
        }
        'c' => render_char(spec, arg)?,
        'd' => return render_decimal(spec, arg),
        'o' | 'x' => return render_radix(spec, arg),
        'e' | 'f' => return render_float(spec, arg),
        other => return Err(FormatError::UnknownConversion(other.to_string())),
    };
    Ok(justify(case(text, spec), spec))
}

fn render_char(spec: &Spec<'_>, arg: &FormatArg) -> Result<String, FormatError> {
    let c = match arg {
        FormatArg::Null => return Ok("null".to_string()),
        FormatArg::Char(c) => *c,
        FormatArg::Int32(v) => u32::try_from(*v)
            .ok()
            .and_then(char::from_u32)
            .ok_or(FormatError::IllegalCodePoint(i64::from(*v)))?,
        FormatArg::Int(v) => u32::try_from(*v)
            .ok()
            .and_then(char::from_u32)
            .ok_or(FormatError::IllegalCodePoint(*v))?,
        FormatArg::UInt(v) => u32::try_from(*v)
            .ok()
            .and_then(char::from_u32)
            .ok_or(FormatError::IllegalCodePoint(i64::try_from(*v).unwrap_or(i64::MAX)))?,
        other => return Err(illegal(spec, other)),
    };
    Ok(c.to_string())
}

fn render_decimal(spec: &Spec<'_>, arg: &FormatArg) -> Result<String, FormatError> {
    let (negative, magnitude) = match arg {
        FormatArg::Null => return Ok(justify("null".to_string(), spec)),
        FormatArg::Int32(v) => (*v < 0, u64::from(v.unsigned_abs())),
        FormatArg::Int(v) => (*v < 0, v.unsigned_abs()),
        FormatArg::UInt(v) => (false, *v),
        other => return Err(illegal(spec, other)),
    };
    let mut digits = magnitude.to_string();
    if spec.flags.group {
        digits = group_thousands(&digits);
    }
    Ok(justify(signed(spec, negative, &digits), spec))
}

fn render_radix(spec: &Spec<'_>, arg: &FormatArg) -> Result<String, FormatError> {
    let bits = match arg {
        FormatArg::Null => return Ok(justify(case("null".to_string(), spec), spec)),
        // 负数按源类型宽度的补码输出
        FormatArg::Int32(v) => u64::from(*v as u32),
        FormatArg::Int(v) => *v as u64,
        FormatArg::UInt(v) => *v,
        other => return Err(illegal(spec, other)),
    };
    let (prefix, digits) = match spec.conversion {
        'o' => ("0", format!("{:o}", bits)),
        _ => ("0x", format!("{:x}", bits)),
    };
    let prefix = if spec.flags.alternate { prefix } else { "" };
    let body = zero_pad(spec, prefix, &digits, "");
    Ok(justify(case(body, spec), spec))
}

fn render_float(spec: &Spec<'_>, arg: &FormatArg) -> Result<String, FormatError> {
    let value = match arg {
        FormatArg::Null => return Ok(justify(case("null".to_string(), spec), spec)),
        FormatArg::Float(v) => *v,
        other => return Err(illegal(spec, other)),
    };

    if value.is_nan() {
        return Ok(justify(case("NaN".to_string(), spec), spec));
    }
    let negative = value.is_sign_negative();
    if value.is_infinite() {
        let (lead, trail) = sign_parts(spec, negative);
        let text = format!("{}Infinity{}", lead, trail);
        return Ok(justify(case(text, spec), spec));
    }

    let precision = spec.precision.unwrap_or(6);
    let magnitude = value.abs();
    let mut body = match spec.conversion {
        'e' => scientific(magnitude, precision, spec.flags.alternate),
        _ => fixed(magnitude, precision, spec.flags.alternate),
    };
    if spec.flags.group {
        let (int_part, frac_part) = match body.find('.') {
            Some(dot) => body.split_at(dot),
            None => (body.as_str(), ""),
        };
        body = format!("{}{}", group_thousands(int_part), frac_part);
    }
    Ok(justify(case(signed(spec, negative, &body), spec), spec))
}

/// 最短十进制表示：`value = 0.d1d2d3... × 10^point`
fn shortest_digits(magnitude: f64) -> (Vec<u8>, i32) {
    let repr = format!("{:e}", magnitude);
    let (mantissa, exponent) = repr.split_once('e').unwrap_or((repr.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    (digits, exponent + 1)
}

/// 保留前 `keep` 位有效数字，四舍五入（half-up）
fn round_half_up(digits: &mut Vec<u8>, point: &mut i32, keep: i32) {
    let keep = match usize::try_from(keep) {
        Ok(keep) => keep,
        Err(_) => {
            digits.clear();
            return;
        }
    };
    if keep >= digits.len() {
        return;
    }
    let up = digits[keep] >= 5;
    digits.truncate(keep);
    if !up {
        return;
    }
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, 1);
    *point += 1;
}

fn digit_at(digits: &[u8], i: i32) -> char {
    usize::try_from(i)
        .ok()
        .and_then(|i| digits.get(i))
        .map_or('0', |d| char::from(b'0' + d))
}

fn fixed(magnitude: f64, precision: usize, alternate: bool) -> String {
    let (mut digits, mut point) = shortest_digits(magnitude);
    let precision = precision as i32;
    let keep = point + precision;
    round_half_up(&mut digits, &mut point, keep);

    let mut out = String::new();
    if point <= 0 {
        out.push('0');
    } else {
        out.extend((0..point).map(|i| digit_at(&digits, i)));
    }
    if precision > 0 || alternate {
        out.push('.');
    }
    out.extend((point..point + precision).map(|i| digit_at(&digits, i)));
    out
}

/// 形如 `1.500000e+03`，指数至少两位
fn scientific(magnitude: f64, precision: usize, alternate: bool) -> String {
    let (mut digits, mut point) = shortest_digits(magnitude);
    let precision = precision as i32;
    round_half_up(&mut digits, &mut point, precision + 1);
    let exponent = if digits.iter().all(|d| *d == 0) { 0 } else { point - 1 };

    let mut out = String::new();
    out.push(digit_at(&digits, 0));
    if precision > 0 || alternate {
        out.push('.');
    }
    out.extend((1..=precision).map(|i| digit_at(&digits, i)));
    let sign = if exponent < 0 { '-' } else { '+' };
    out.push_str(&format!("e{}{:02}", sign, exponent.unsigned_abs()));
    out
}

fn sign_parts(spec: &Spec<'_>, negative: bool) -> (&'static str, &'static str) {
    match (negative, spec.flags) {
        (true, f) if f.paren => ("(", ")"),
        (true, _) => ("-", ""),
        (false, f) if f.plus => ("+", ""),
        (false, f) if f.space => (" ", ""),
        _ => ("", ""),
    }
}

fn signed(spec: &Spec<'_>, negative: bool, digits: &str) -> String {
    let (lead, trail) = sign_parts(spec, negative);
    zero_pad(spec, lead, digits, trail)
}

/// `0` 标志：在前缀与数字之间补零至宽度
fn zero_pad(spec: &Spec<'_>, prefix: &str, digits: &str, suffix: &str) -> String {
    let used = prefix.chars().count() + digits.chars().count() + suffix.chars().count();
    let zeros = match spec.width {
        Some(width) if spec.flags.zero && width > used => width - used,
        _ => 0,
    };
    let mut out = String::with_capacity(used + zeros);
    out.push_str(prefix);
    out.extend(std::iter::repeat('0').take(zeros));
    out.push_str(digits);
    out.push_str(suffix);
    out
}

fn justify(text: String, spec: &Spec<'_>) -> String {
    let len = text.chars().count();
    let width = match spec.width {
        Some(width) if width > len => width,
        _ => return text,
    };
    let padding = " ".repeat(width - len);
    if spec.flags.left {
        text + &padding
    } else {
        padding + &text
    }
}

fn truncate(text: String, precision: Option<usize>) -> String {
    match precision {
        Some(p) if text.chars().count() > p => text.chars().take(p).collect(),
        _ => text,
    }
}

fn case(text: String, spec: &Spec<'_>) -> String {
    if spec.upper {
        text.to_uppercase()
    } else {
        text
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn illegal(spec: &Spec<'_>, arg: &FormatArg) -> FormatError {
    FormatError::IllegalConversion {
        conversion: spec.conversion_char(),
        arg_type: arg.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arg<T: Into<FormatArg>>(v: T) -> FormatArg {
        v.into()
    }

    fn fmt(template: &str, args: &[FormatArg]) -> String {
        format(template, args).expect("格式化应该成功")
    }

    #[test]
    fn test_plain_text_passes_through() {
        assert_eq!(fmt("no specifiers here", &[]), "no specifiers here");
        assert_eq!(fmt("", &[]), "");
    }

    #[test]
    fn test_decimal() {
        assert_eq!(fmt("x=%d", &[arg(5)]), "x=5");
        assert_eq!(fmt("%d/%d", &[arg(-3), 4u64.into()]), "-3/4");
        assert_eq!(fmt("[%5d]", &[arg(42)]), "[   42]");
        assert_eq!(fmt("[%-5d]", &[arg(42)]), "[42   ]");
        assert_eq!(fmt("[%05d]", &[arg(-42)]), "[-0042]");
        assert_eq!(fmt("%+d % d", &[arg(7), arg(7)]), "+7  7");
        assert_eq!(fmt("%,d", &[arg(1234567)]), "1,234,567");
        assert_eq!(fmt("%,010d", &[arg(1234567)]), "01,234,567");
        assert_eq!(fmt("%(d", &[arg(-15)]), "(15)");
        assert_eq!(fmt("%d", &[i64::MIN.into()]), "-9223372036854775808");
    }

    #[test]
    fn test_strings_and_booleans() {
        assert_eq!(fmt("%s", &["hello".into()]), "hello");
        assert_eq!(fmt("%S", &["hello".into()]), "HELLO");
        assert_eq!(fmt("%.3s", &["screenshot".into()]), "scr");
        assert_eq!(fmt("[%-6s]", &["ab".into()]), "[ab    ]");
        assert_eq!(fmt("%s", &[FormatArg::Null]), "null");
        assert_eq!(fmt("%s %s", &[arg(1), true.into()]), "1 true");
        assert_eq!(fmt("%b %b %b", &[FormatArg::Null, false.into(), "x".into()]), "false false true");
        assert_eq!(fmt("%B", &[true.into()]), "TRUE");
    }

    #[test]
    fn test_chars() {
        assert_eq!(fmt("%c%c", &['o'.into(), arg(107)]), "ok");
        assert_eq!(fmt("%C", &['a'.into()]), "A");
        assert_eq!(
            format("%c", &[arg(-1)]),
            Err(FormatError::IllegalCodePoint(-1))
        );
    }

    #[test]
    fn test_radix() {
        assert_eq!(fmt("%x", &[arg(255)]), "ff");
        assert_eq!(fmt("%X", &[arg(255)]), "FF");
        assert_eq!(fmt("%#x", &[arg(255)]), "0xff");
        assert_eq!(fmt("%#o", &[arg(8)]), "010");
        assert_eq!(fmt("%08x", &[arg(0xbeef)]), "0000beef");
        assert_eq!(fmt("%x", &[(-1i64).into()]), "ffffffffffffffff");
    }

    #[test]
    fn test_radix_keeps_int_width() {
        assert_eq!(
            fmt("%x|%o|%X", &[arg(-1i32), arg(-8i32), arg(-255i32)]),
            "ffffffff|37777777770|FFFFFF01"
        );
        assert_eq!(fmt("%x", &[arg(-1i16)]), "ffffffff");
        assert_eq!(fmt("%#x", &[arg(i64::MIN)]), "0x8000000000000000");
        assert_eq!(fmt("%d", &[arg(i32::MIN)]), "-2147483648");
    }

    #[test]
    fn test_floats() {
        assert_eq!(fmt("%f", &[arg(1.5)]), "1.500000");
        assert_eq!(fmt("%.2f", &[arg(3.14159)]), "3.14");
        assert_eq!(fmt("%.0f", &[arg(2.25)]), "2");
        assert_eq!(fmt("%#.0f", &[arg(2.0)]), "2.");
        assert_eq!(fmt("%,.1f", &[arg(12345.27)]), "12,345.3");
        assert_eq!(fmt("%08.2f", &[arg(-1.5)]), "-0001.50");
        assert_eq!(fmt("%e", &[arg(12345.0)]), "1.234500e+04");
        assert_eq!(fmt("%.2E", &[arg(0.00012)]), "1.20E-04");
        assert_eq!(fmt("%f", &[f64::NAN.into()]), "NaN");
        assert_eq!(fmt("%+f", &[f64::INFINITY.into()]), "+Infinity");
        assert_eq!(fmt("%(f", &[f64::NEG_INFINITY.into()]), "(Infinity)");
    }

    #[test]
    fn test_float_rounds_half_up_on_shortest_repr() {
        assert_eq!(
            fmt("%.1f|%.2f|%.2f", &[arg(0.15), arg(1.005), arg(0.125)]),
            "0.2|1.01|0.13"
        );
        assert_eq!(fmt("%.0f", &[arg(0.5)]), "1");
        assert_eq!(fmt("%.1f", &[arg(9.96)]), "10.0");
        assert_eq!(fmt("%.2f", &[arg(0.001)]), "0.00");
        assert_eq!(fmt("%.1f", &[arg(-0.05)]), "-0.1");
        assert_eq!(fmt("%f", &[arg(0.0)]), "0.000000");
        assert_eq!(fmt("%.1e", &[arg(0.15)]), "1.5e-01");
        assert_eq!(fmt("%.1e", &[arg(9.96)]), "1.0e+01");
        assert_eq!(fmt("%.2e", &[arg(1.005)]), "1.01e+00");
        assert_eq!(fmt("%e", &[arg(0.0)]), "0.000000e+00");
        assert_eq!(fmt("%#.0e", &[arg(3.0)]), "3.e+00");
    }

    #[test]
    fn test_literals() {
        assert_eq!(fmt("100%%", &[]), "100%");
        assert_eq!(fmt("a%nb", &[]), "a\nb");
        assert_eq!(fmt("[%-3%]", &[]), "[%  ]");
    }

    #[test]
    fn test_argument_indexing() {
        let args: [FormatArg; 3] = ["a".into(), "b".into(), "c".into()];
        assert_eq!(fmt("%2$s %1$s", &args), "b a");
        assert_eq!(fmt("%s %<s %s", &args), "a a b");
        assert_eq!(fmt("%3$s %s", &args), "c a");
        assert_eq!(fmt("%s", &args), "a");
    }

    #[test]
    fn test_missing_argument() {
        assert_eq!(
            format("x=%d y=%d", &[arg(1)]),
            Err(FormatError::MissingArgument("%d".to_string()))
        );
        assert!(matches!(
            format("%<s", &["a".into()]),
            Err(FormatError::MissingArgument(_))
        ));
        assert!(matches!(
            format("%0$s", &["a".into()]),
            Err(FormatError::IllegalIndex(_))
        ));
    }

    #[test]
    fn test_unknown_conversion() {
        assert_eq!(
            format("%q", &[arg(1)]),
            Err(FormatError::UnknownConversion("q".to_string()))
        );
        assert_eq!(
            format("50%", &[]),
            Err(FormatError::UnknownConversion("%".to_string()))
        );
        assert_eq!(
            format("%tY", &[arg(1)]),
            Err(FormatError::UnsupportedConversion('t'))
        );
        assert_eq!(
            format("%h", &[arg(1)]),
            Err(FormatError::UnsupportedConversion('h'))
        );
    }

    #[test]
    fn test_illegal_conversion() {
        assert_eq!(
            format("%d", &["5".into()]),
            Err(FormatError::IllegalConversion {
                conversion: 'd',
                arg_type: "String"
            })
        );
        assert!(matches!(
            format("%f", &[arg(5)]),
            Err(FormatError::IllegalConversion { conversion: 'f', .. })
        ));
        assert_eq!(fmt("%d", &[FormatArg::Null]), "null");
    }

    #[test]
    fn test_bad_flags() {
        assert!(matches!(
            format("%-d", &[arg(1)]),
            Err(FormatError::MissingWidth(_))
        ));
        assert!(matches!(
            format("%+ d", &[arg(1)]),
            Err(FormatError::IllegalFlags(_))
        ));
        assert!(matches!(
            format("%#d", &[arg(1)]),
            Err(FormatError::FlagsMismatch { conversion: 'd', .. })
        ));
        assert!(matches!(
            format("%+s", &["a".into()]),
            Err(FormatError::FlagsMismatch { conversion: 's', .. })
        ));
        assert!(matches!(
            format("%.2d", &[arg(1)]),
            Err(FormatError::IllegalPrecision('d'))
        ));
        assert!(matches!(
            format("%5n", &[]),
            Err(FormatError::IllegalWidth('n'))
        ));
        assert!(matches!(
            format("%--5d", &[arg(1)]),
            Err(FormatError::IllegalFlags(_))
        ));
    }

    #[test]
    fn test_oversized_width_rejected() {
        assert_eq!(
            format("%99999999999s", &["a".into()]),
            Err(FormatError::IllegalWidth('s'))
        );
        assert_eq!(
            format("%.99999999f", &[arg(1.0)]),
            Err(FormatError::IllegalPrecision('f'))
        );
        assert_eq!(fmt("%8s|", &["a".into()]), "       a|");
    }
}
