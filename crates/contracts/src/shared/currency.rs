//! Утилиты для денежных значений в формате `$12,345.67`

/// Value handed to [`format_currency`]: text from a record, a computed
/// amount, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MoneyValue<'a> {
    Text(&'a str),
    Amount(f64),
    Missing,
}

impl<'a> From<&'a str> for MoneyValue<'a> {
    fn from(value: &'a str) -> Self {
        MoneyValue::Text(value)
    }
}

impl<'a> From<&'a String> for MoneyValue<'a> {
    fn from(value: &'a String) -> Self {
        MoneyValue::Text(value.as_str())
    }
}

impl From<f64> for MoneyValue<'_> {
    fn from(value: f64) -> Self {
        MoneyValue::Amount(value)
    }
}

impl<'a, T: Into<MoneyValue<'a>>> From<Option<T>> for MoneyValue<'a> {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(MoneyValue::Missing)
    }
}

/// Разбирает денежную строку в число
///
/// `$` and `,` are stripped, then the longest leading decimal literal is
/// read. Empty input or text without a numeric prefix gives `0.0`.
///
/// # Примеры
/// ```
/// use contracts::shared::currency::parse_currency;
/// assert_eq!(parse_currency("$1,234.56"), 1234.56);
/// assert_eq!(parse_currency("garbage"), 0.0);
/// ```
pub fn parse_currency(value: &str) -> f64 {
    if value.is_empty() {
        return 0.0;
    }
    let cleaned: String = value.chars().filter(|c| *c != '$' && *c != ',').collect();
    match leading_number(&cleaned) {
        Some(n) if n != 0.0 => n,
        _ => 0.0,
    }
}

/// Форматирует значение как `$1,234.50`
///
/// Text that already starts with `$` is returned unchanged, even when it
/// is not a valid amount (`"$abc"` stays `"$abc"`).
pub fn format_currency<'a>(value: impl Into<MoneyValue<'a>>) -> String {
    match value.into() {
        MoneyValue::Text(text) => {
            if text.starts_with('$') {
                return text.to_string();
            }
            let cleaned: String = text.chars().filter(|c| *c != '$' && *c != ',').collect();
            match leading_number(&cleaned) {
                Some(n) => format_amount(n),
                None => "$0.00".to_string(),
            }
        }
        MoneyValue::Amount(n) if n.is_finite() => format_amount(n),
        MoneyValue::Amount(_) | MoneyValue::Missing => "$0.00".to_string(),
    }
}

/// Вставляет разделитель каждые 3 цифры с конца. A leading `-` is kept in place.
///
/// ```
/// use contracts::shared::currency::group_thousands;
/// assert_eq!(group_thousands("1234567", '.'), "1.234.567");
/// assert_eq!(group_thousands("-1234", ','), "-1,234");
/// ```
pub fn group_thousands(digits: &str, separator: char) -> String {
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits),
    };
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    format!("{}{}", sign, result.chars().rev().collect::<String>())
}

fn format_amount(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), "00"));
    format!("${}.{}", group_thousands(integer_part, ','), decimal_part)
}

/// Longest prefix of `s` (after leading whitespace) that forms a decimal
/// literal: `[+-]digits[.digits][e[+-]digits]`. Non-finite results count as no number.
fn leading_number(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|n| n.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_currency() {
        assert_eq!(parse_currency("$1,234.56"), 1234.56);
        assert_eq!(parse_currency("$12,345.67"), 12345.67);
        assert_eq!(parse_currency(""), 0.0);
        assert_eq!(parse_currency("garbage"), 0.0);
        assert_eq!(parse_currency("$"), 0.0);
        assert_eq!(parse_currency("  42"), 42.0);
        assert_eq!(parse_currency("-$5"), -5.0);
        assert_eq!(parse_currency(".5"), 0.5);
        assert_eq!(parse_currency("1e3"), 1000.0);
    }

    #[test]
    fn test_parse_currency_reads_numeric_prefix() {
        assert_eq!(parse_currency("$250,000 (approx)"), 250000.0);
        assert_eq!(parse_currency("12abc"), 12.0);
        assert_eq!(parse_currency("3.e"), 3.0);
        assert_eq!(parse_currency("NaN"), 0.0);
        assert_eq!(parse_currency("inf"), 0.0);
    }

    #[test]
    fn test_non_finite_amounts_are_zero() {
        assert_eq!(parse_currency("Infinity"), 0.0);
        assert_eq!(parse_currency("-Infinity"), 0.0);
        assert_eq!(parse_currency("1e999"), 0.0);
        assert_eq!(parse_currency("-1e999"), 0.0);
        assert_eq!(format_currency("1e999"), "$0.00");
    }

    #[test]
    fn test_format_currency_numbers() {
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-1234.5), "$-1,234.50");
        assert_eq!(format_currency(999.999), "$1,000.00");
        assert_eq!(format_currency(f64::NAN), "$0.00");
    }

    #[test]
    fn test_format_currency_text() {
        assert_eq!(format_currency("$9"), "$9");
        assert_eq!(format_currency("$abc"), "$abc");
        assert_eq!(format_currency("1234.5"), "$1,234.50");
        assert_eq!(format_currency("12,000"), "$12,000.00");
        assert_eq!(format_currency("abc"), "$0.00");
        assert_eq!(format_currency(""), "$0.00");
    }

    #[test]
    fn test_format_currency_missing() {
        assert_eq!(format_currency(MoneyValue::Missing), "$0.00");
        assert_eq!(format_currency(None::<&str>), "$0.00");
        assert_eq!(format_currency(Some("$1")), "$1");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0", ','), "0");
        assert_eq!(group_thousands("999", ','), "999");
        assert_eq!(group_thousands("1000", ','), "1,000");
        assert_eq!(group_thousands("1234567890", '.'), "1.234.567.890");
        assert_eq!(group_thousands("-123456", ','), "-123,456");
    }
}
