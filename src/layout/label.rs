/// Formats an OI value compactly: integral values without decimals, others
/// with at most two.
#[must_use]
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Formats a change value with an explicit sign. The sign follows `value`
/// even when the magnitude rounds to zero.
#[must_use]
pub fn format_change(value: f64) -> String {
    let sign = if value >= 0.0 { '+' } else { '-' };
    format!("{sign}{}", format_value(value.abs()))
}
