//! 表单数字输入解析
//!
//! 与浏览器的 `parseInt` / `parseFloat` 行为一致：跳过前导空白，取最长的合法数字前缀，
//! 没有任何数字时得到 NaN，而不是报错。

/// 按 `parseFloat` 规则解析，例如 `"3.25kg"` -> 3.25，`""` -> NaN
pub fn parse_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    // 指数部分只有在后面跟着数字时才生效
    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// 按 `parseInt(value, 10)` 规则解析，例如 `"3.7"` -> 3，`"abc"` -> NaN
pub fn parse_int(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));

    let digits = count_digits(&bytes[sign_len..]);
    if digits == 0 {
        return f64::NAN;
    }

    s[..sign_len + digits].parse().unwrap_or(f64::NAN)
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
