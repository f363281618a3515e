//! Number formatting for reports.

/// Round to at most two decimals and group the integer part in thousands.
///
/// Trailing zeros are dropped (`47.750` → `"47.75"`, `382.0` → `"382"`).
/// Non-finite values render as `"-"`.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return "-".to_owned();
    }

    let rounded = (n * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    if rounded < 0.0 {
        grouped.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if !frac_part.is_empty() {
        grouped.push('.');
        grouped.push_str(frac_part);
    }
    grouped
}
