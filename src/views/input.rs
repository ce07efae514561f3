//! User input parsing

/// Parse the leading integer of a string.
///
/// Leading whitespace and a single sign are accepted and parsing stops at the
/// first non-digit, so `"3abc"` is `3` and `"2.5"` is `2`. Returns `None` when no
/// digits lead the string.
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..)?),
        Some(b'+') => (false, trimmed.get(1..)?),
        _ => (false, trimmed),
    };

    let end = digits
        .bytes()
        .position(|byte| !byte.is_ascii_digit())
        .unwrap_or(digits.len());

    let magnitude: i64 = digits.get(..end)?.parse().ok()?;

    Some(if negative { -magnitude } else { magnitude })
}

/// Parse an add-to-cart quantity field.
///
/// Unparseable input falls back to 1, and so does zero or a negative number.
pub fn parse_quantity(raw: &str) -> u32 {
    parse_leading_int(raw)
        .and_then(|value| u32::try_from(value).ok())
        .map_or(1, |value| value.max(1))
}
