//! Request sanitization.

use ds_core::Cylinder;

/// Keep only values that address a real cylinder.
///
/// Each value is floored towards negative infinity; the result is kept if it
/// is finite and lies in `[0, disk_max]`.  Order and duplicates are
/// preserved.  Everything else (NaN, infinities, negatives, out-of-range
/// values) is dropped silently.
pub fn sanitize(requests: &[f64], disk_max: Cylinder) -> Vec<Cylinder> {
    let kept: Vec<Cylinder> = requests
        .iter()
        .map(|n| n.floor())
        .filter(|n| n.is_finite() && *n >= 0.0 && *n <= disk_max as f64)
        .map(|n| n as Cylinder)
        .collect();

    if kept.len() != requests.len() {
        tracing::debug!(
            dropped = requests.len() - kept.len(),
            kept = kept.len(),
            disk_max,
            "sanitize dropped invalid requests"
        );
    }
    kept
}
