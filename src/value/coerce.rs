use super::RawValue;
use serde_json::Number;
use tracing::trace;

/// Longest numeric prefix of a string, as read by [`to_int`] and [`to_float`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumericPrefix<'a> {
    text: &'a str,
    /// `false` once a fraction or exponent was consumed
    integral: bool,
}

/// Scan `s` for a leading decimal number.
///
/// Leading ASCII whitespace is skipped, then an optional sign, digits, an
/// optional fraction and an optional exponent. Returns `None` when no digit
/// was found. Radix prefixes such as `0x` stop after the `0`.
fn numeric_prefix(s: &str) -> Option<NumericPrefix<'_>> {
    let trimmed = s.trim_start_matches([' ', '\t', '\n', '\r', '\x0b', '\x0c']);
    let bytes = trimmed.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = digits_from(end);
    end += int_digits;
    let mut digits = int_digits;
    let mut integral = true;

    if bytes.get(end) == Some(&b'.') {
        let frac_digits = digits_from(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            digits += frac_digits;
            integral = false;
        }
    }

    if digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = digits_from(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
            integral = false;
        }
    }

    Some(NumericPrefix {
        text: &trimmed[..end],
        integral,
    })
}

fn float_to_int(x: f64) -> i64 {
    // `as` truncates toward zero, saturates at the bounds and maps NaN to 0
    x as i64
}

fn number_to_int(n: &Number) -> i64 {
    if let Some(i) = n.as_i64() {
        i
    } else if n.as_u64().is_some() {
        i64::MAX
    } else {
        float_to_int(n.as_f64().unwrap_or_default())
    }
}

fn number_to_float(n: &Number) -> f64 {
    n.as_f64().unwrap_or_default()
}

fn string_to_int(s: &str) -> i64 {
    match numeric_prefix(s) {
        Some(prefix) if prefix.integral => prefix.text.parse::<i64>().unwrap_or_else(|_| {
            float_to_int(prefix.text.parse::<f64>().unwrap_or_default())
        }),
        Some(prefix) => float_to_int(prefix.text.parse::<f64>().unwrap_or_default()),
        None => {
            trace!(value = %s, "no numeric prefix, coercing to 0");
            0
        }
    }
}

fn string_to_float(s: &str) -> f64 {
    match numeric_prefix(s) {
        Some(prefix) => prefix.text.parse::<f64>().unwrap_or_default(),
        None => {
            trace!(value = %s, "no numeric prefix, coercing to 0.0");
            0.0
        }
    }
}

/// Render a float in canonical decimal form.
///
/// Integral values below 1e15 print without a fraction (`1.0` becomes `"1"`,
/// `-0.0` becomes `"-0"`). Other values use the shortest text that parses
/// back to the same float, so `0.1 + 0.2` prints as `"0.30000000000000004"`.
fn float_to_text(x: f64) -> String {
    if x.is_nan() {
        "NAN".to_string()
    } else if x.is_infinite() {
        let text = if x.is_sign_positive() { "INF" } else { "-INF" };
        text.to_string()
    } else if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{x:.0}")
    } else {
        x.to_string()
    }
}

/// Textual form of a present value.
///
/// Lists and objects render as JSON text.
#[must_use]
pub fn to_text(value: &RawValue) -> String {
    match value {
        RawValue::Null => String::new(),
        RawValue::String(s) => s.clone(),
        RawValue::Bool(true) => "1".to_string(),
        RawValue::Bool(false) => String::new(),
        RawValue::Number(n) => match (n.as_i64(), n.as_u64()) {
            (Some(i), _) => i.to_string(),
            (None, Some(u)) => u.to_string(),
            _ => float_to_text(number_to_float(n)),
        },
        RawValue::Array(_) | RawValue::Object(_) => value.to_string(),
    }
}

/// Integer form of a present value.
///
/// Strings are read by numeric prefix and fall back to `0`. Out-of-range
/// values saturate at `i64::MIN` / `i64::MAX`.
#[must_use]
pub fn to_int(value: &RawValue) -> i64 {
    match value {
        RawValue::Null => 0,
        RawValue::String(s) => string_to_int(s),
        RawValue::Bool(b) => i64::from(*b),
        RawValue::Number(n) => number_to_int(n),
        RawValue::Array(items) => i64::from(!items.is_empty()),
        RawValue::Object(map) => i64::from(!map.is_empty()),
    }
}

/// Floating-point form of a present value.
#[must_use]
pub fn to_float(value: &RawValue) -> f64 {
    match value {
        RawValue::Null => 0.0,
        RawValue::String(s) => string_to_float(s),
        RawValue::Bool(b) => f64::from(u8::from(*b)),
        RawValue::Number(n) => number_to_float(n),
        RawValue::Array(items) => f64::from(u8::from(!items.is_empty())),
        RawValue::Object(map) => f64::from(u8::from(!map.is_empty())),
    }
}

/// Natural truthiness of a value.
///
/// `null`, `false`, zero, `""`, `"0"` and empty collections are false.
#[must_use]
pub fn to_flag(value: &RawValue) -> bool {
    match value {
        RawValue::Null => false,
        RawValue::Bool(b) => *b,
        RawValue::Number(n) => number_to_float(n) != 0.0,
        RawValue::String(s) => !(s.is_empty() || s == "0"),
        RawValue::Array(items) => !items.is_empty(),
        RawValue::Object(map) => !map.is_empty(),
    }
}

/// List form of a value: arrays verbatim, `null` empty, scalars wrapped.
#[must_use]
pub fn to_list(value: &RawValue) -> Vec<RawValue> {
    match value {
        RawValue::Null => Vec::new(),
        RawValue::Array(items) => items.clone(),
        other => vec![other.clone()],
    }
}
