//! Head-movement metrics.

use ds_core::{Cylinder, Metrics};

/// Fold `[head_start, service_order...]` into positions and movement totals.
///
/// `average_seek` is `0.0` for an empty order, never NaN.
pub fn compute_metrics(head_start: Cylinder, service_order: Vec<Cylinder>) -> Metrics {
    let mut positions = Vec::with_capacity(service_order.len() + 1);
    positions.push(head_start);
    positions.extend_from_slice(&service_order);

    let mut total: u64 = 0;
    let waiting_movements: Vec<u64> = positions
        .windows(2)
        .map(|w| {
            total += w[0].abs_diff(w[1]) as u64;
            total
        })
        .collect();

    let average_seek = if service_order.is_empty() {
        0.0
    } else {
        total as f64 / service_order.len() as f64
    };

    Metrics {
        service_order,
        positions,
        total_head_movement: total,
        average_seek,
        waiting_movements,
    }
}
