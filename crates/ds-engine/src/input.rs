//! Permissive coercion of raw user input.
//!
//! Raw fields arrive as free text (form fields, CLI arguments, config files).
//! None of these helpers fail: unusable text falls back to a default.
//!
//! | Field       | Rule                                                      |
//! |-------------|-----------------------------------------------------------|
//! | disk max    | `0`/non-numeric → 199, then `max(1, floor(n))`            |
//! | head start  | non-numeric → 0, then `floor(n)` clamped to `[0, max]`    |
//! | direction   | `-1` → decreasing, anything else → increasing             |
//! | algorithm   | `scan` → SCAN, anything else → C-SCAN                     |
//! | requests    | comma-separated, empty tokens skipped, see [`sanitize`]   |
//!
//! [`sanitize`]: crate::sanitize()

use ds_core::{Algorithm, Cylinder, DEFAULT_DISK_MAX, Direction};

/// The five raw input fields, exactly as the user typed them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInput {
    pub disk_max:   String,
    pub head_start: String,
    pub direction:  String,
    pub algorithm:  String,
    pub requests:   String,
}

/// Parse a numeric field.
///
/// Surrounding whitespace is ignored, an empty field is `0.0`, and anything
/// that is not a number is `NaN`.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Split a comma-separated request list into raw numbers.
///
/// Empty tokens (`"1,,2"`, trailing commas) are skipped.  Non-numeric tokens
/// become `NaN` so that [`sanitize`](crate::sanitize()) drops them.
pub fn parse_request_list(raw: &str) -> Vec<f64> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_number)
        .collect()
}

pub fn coerce_disk_max(raw: &str) -> Cylinder {
    let n = parse_number(raw);
    let n = if n.is_finite() && n != 0.0 { n } else { DEFAULT_DISK_MAX as f64 };
    n.floor().clamp(1.0, Cylinder::MAX as f64) as Cylinder
}

pub fn coerce_head_start(raw: &str, disk_max: Cylinder) -> Cylinder {
    let n = parse_number(raw);
    let n = if n.is_nan() { 0.0 } else { n };
    n.floor().clamp(0.0, disk_max as f64) as Cylinder
}

pub fn coerce_direction(raw: &str) -> Direction {
    Direction::from_sign(parse_number(raw))
}

pub fn coerce_algorithm(raw: &str) -> Algorithm {
    if raw.trim().eq_ignore_ascii_case("scan") { Algorithm::Scan } else { Algorithm::CScan }
}
