//! Number parsing and formatting used by the analyzers.
//!
//! Cells are plain strings. The analyzers decide per call site whether a
//! cell is numeric, and all score rounding and message formatting goes
//! through this module so every dimension renders numbers the same way.

/// Parses a trimmed cell as a finite number.
///
/// Accepts decimal and exponent notation with an optional sign, plus
/// unsigned `0x`, `0o` and `0b` integer literals. Empty strings and
/// non-finite results (`NaN`, `inf`, `Infinity`) yield `None`.
pub fn parse_number(value: &str) -> Option<f64> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Some(parsed) = parse_radix_literal(value) {
        return Some(parsed);
    }

    // Rust accepts spelled-out specials that must not count as numbers.
    if value.bytes().any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E')) {
        return None;
    }

    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Like [`parse_number`], but a blank cell reads as zero.
///
/// The accuracy rules and the outlier scan treat missing values as `0`, so
/// an empty age is reported as below the minimum and blanks take part in
/// the column statistics.
pub fn parse_number_or_zero(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return Some(0.0);
    }
    parse_number(value)
}

/// Parses a monetary cell: `$` and `,` are removed before parsing, and a
/// cell left blank reads as zero.
pub fn parse_currency_or_zero(value: &str) -> Option<f64> {
    let cleaned: String = value
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    parse_number_or_zero(&cleaned)
}

fn parse_radix_literal(value: &str) -> Option<f64> {
    let (radix, digits) = match value.get(..2)? {
        "0x" | "0X" => (16, &value[2..]),
        "0o" | "0O" => (8, &value[2..]),
        "0b" | "0B" => (2, &value[2..]),
        _ => return None,
    };
    u64::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

/// Rounds half-way values toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// Rounds and clamps a raw score into 0-100.
pub fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    round_half_up(value).clamp(0.0, 100.0) as u8
}

/// Shortest display form of a number, with negative zero shown as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Formats a percentage with one decimal place, rounding ties upward.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", round_half_up(value * 10.0) / 10.0)
}

/// Formats a number with comma thousands separators and at most three
/// fraction digits (`1234567.5` renders as `1,234,567.5`).
pub fn format_grouped(value: f64) -> String {
    let rounded = round_half_up(value.abs() * 1000.0) / 1000.0;
    let fixed = format!("{:.3}", rounded);
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(integer.len().saturating_mul(2));
    for (index, digit) in integer.chars().enumerate() {
        let remaining = integer.len().saturating_sub(index);
        if index > 0 && remaining.is_multiple_of(3) {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let fraction = fraction.trim_end_matches('0');
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    if value < 0.0 && rounded != 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
