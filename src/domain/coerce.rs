// src/domain/coerce.rs
//
// Browser-style coercions for raw form values. Form inputs always arrive as
// text; numeric fields follow `Number(...)`, the checkbox follows
// `Boolean(...)` over the submitted value.

use chrono::{NaiveDate, NaiveDateTime};

/// Converts text to a number the way `Number(text)` does.
///
/// Blank input is `0`. Anything that is not a decimal, radix-prefixed or
/// `Infinity` literal is `NaN`; the caller stores it unchanged.
pub fn js_number(raw: &str) -> f64 {
    let t = raw.trim();

    match t {
        "" => return 0.0,
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    // Rust accepts "inf" and "nan" spellings that Number() rejects.
    let decimal_chars = t
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !decimal_chars {
        return f64::NAN;
    }

    t.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// `Boolean(value)` over a form value: absent or empty is false, any other
/// text (including "false") is true.
pub fn js_boolean(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// Parses the hidden check-in field back into a date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM:SS` (with optional fractional seconds) or a bare
/// `YYYY-MM-DD`, read as midnight.
pub fn parse_checkin(raw: &str) -> Option<NaiveDateTime> {
    let t = raw.trim();

    if let Ok(dt) = t.parse::<NaiveDateTime>() {
        return Some(dt);
    }

    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// Renders a number the way it reads back through `js_number`.
pub fn number_text(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else {
        n.to_string()
    }
}
