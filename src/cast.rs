//! Permissive string-to-scalar conversions
//!
//! These accept the loose spellings content authors actually write in front
//! matter (`T`, `0x1F`, `42.0`) rather than only canonical forms. Every
//! conversion reports failure with `None`; nothing here panics.

use serde_yaml::Value as YamlValue;

/// Parse a boolean from `1`, `t`, `T`, `TRUE`, `true`, `True` or their false counterparts.
pub fn to_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Parse a signed 64-bit integer.
///
/// Accepts an optional sign, `0x`, `0o` and `0b` prefixes, leading-zero octal,
/// underscores between digits (`1_000`), and a trailing all-zero fraction (`42.00`).
pub fn to_i64(s: &str) -> Option<i64> {
    let s = trim_zero_decimal(s);
    let (negative, unsigned) = match s.as_bytes().first()? {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits, prefixed) = split_radix(unsigned);
    let digits = strip_underscores(digits, prefixed)?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let magnitude = i128::from(u64::from_str_radix(&digits, radix).ok()?);
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Parse a platform-sized integer, with the same syntax as [`to_i64`].
pub fn to_isize(s: &str) -> Option<isize> {
    to_i64(s).and_then(|v| isize::try_from(v).ok())
}

/// Parse a 64-bit float, including exponents, `inf` and `NaN`.
pub fn to_f64(s: &str) -> Option<f64> {
    s.parse::<f64>().ok()
}

/// Render a YAML mapping key as a string key.
///
/// Scalars use their natural spelling (`true`, `1`, `1.5`, null as the empty
/// string). Sequence and mapping keys have no scalar form and fall back to
/// their YAML rendering.
pub fn yaml_key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::String(s) => s.clone(),
        YamlValue::Bool(b) => b.to_string(),
        YamlValue::Null => String::new(),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                n.as_f64().map_or_else(|| n.to_string(), format_float)
            }
        }
        YamlValue::Tagged(tagged) => yaml_key_to_string(&tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => serde_yaml::to_string(key)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{key:?}")),
    }
}

/// Shortest decimal form, with Go-style names for the non-finite values.
fn format_float(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() && f.is_sign_positive() {
        "+Inf".to_string()
    } else if f.is_infinite() {
        "-Inf".to_string()
    } else {
        f.to_string()
    }
}

/// `"42.00"` becomes `"42"`. A bare trailing dot is left alone.
fn trim_zero_decimal(s: &str) -> &str {
    let Some(dot) = s.rfind('.') else {
        return s;
    };
    let fraction = &s[dot + 1..];
    if dot > 0 && !fraction.is_empty() && fraction.bytes().all(|b| b == b'0') {
        &s[..dot]
    } else {
        s
    }
}

/// Returns the radix, the remaining digits and whether a base prefix was present.
fn split_radix(s: &str) -> (u32, &str, bool) {
    let lower = s.get(..2).map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("0x") => (16, &s[2..], true),
        Some("0o") => (8, &s[2..], true),
        Some("0b") => (2, &s[2..], true),
        _ if s.len() > 1 && s.starts_with('0') => (8, &s[1..], true),
        _ => (10, s, false),
    }
}

/// Underscores may separate digits, or follow a base prefix, but may not trail or repeat.
fn strip_underscores(digits: &str, prefixed: bool) -> Option<String> {
    if digits.ends_with('_') || digits.contains("__") || (!prefixed && digits.starts_with('_')) {
        return None;
    }
    Some(digits.replace('_', ""))
}
