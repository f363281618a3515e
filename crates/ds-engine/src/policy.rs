//! Directional sweep orderings.
//!
//! Both policies partition the pending requests around the head:
//!
//! ```text
//! below         = requests <  head   (sorted ascending)
//! above_or_equal = requests >= head  (sorted ascending)
//! ```
//!
//! A request exactly at the head is always serviced in the first pass.
//!
//! | Policy | Increasing                    | Decreasing                     |
//! |--------|-------------------------------|--------------------------------|
//! | SCAN   | above ↑ then below ↓          | below ↓ then above ↑           |
//! | C-SCAN | above ↑ then below ↑          | below ↓ then above ↓           |
//!
//! The sweep turns (or wraps) after the last request in the current
//! direction, not at the physical end of the disk.  Movement for the turn is
//! therefore whatever `compute_metrics` sees between consecutive positions.

use ds_core::{Algorithm, Cylinder, Direction};

/// Signature shared by every ordering policy:
/// `(requests, head, direction, disk_max) -> service order`.
pub type OrderFn = fn(&[Cylinder], Cylinder, Direction, Cylinder) -> Vec<Cylinder>;

/// Ordering table indexed by [`Algorithm::index`].
const ORDERINGS: [OrderFn; 2] = [scan, cscan];

/// Look up the ordering function for `algorithm`.
#[inline]
pub fn ordering_fn(algorithm: Algorithm) -> OrderFn {
    ORDERINGS[algorithm.index()]
}

/// Order `requests` with the policy selected by `algorithm`.
pub fn service_order(
    algorithm: Algorithm,
    requests:  &[Cylinder],
    head:      Cylinder,
    direction: Direction,
    disk_max:  Cylinder,
) -> Vec<Cylinder> {
    ordering_fn(algorithm)(requests, head, direction, disk_max)
}

/// SCAN (elevator): sweep the current direction, then reverse.
pub fn scan(
    requests:  &[Cylinder],
    head:      Cylinder,
    direction: Direction,
    _disk_max: Cylinder,
) -> Vec<Cylinder> {
    let (below, above) = partition(requests, head);
    let mut order = Vec::with_capacity(requests.len());
    match direction {
        Direction::Increasing => {
            order.extend_from_slice(&above);
            order.extend(below.iter().rev());
        }
        Direction::Decreasing => {
            order.extend(below.iter().rev());
            order.extend_from_slice(&above);
        }
    }
    order
}

/// C-SCAN: sweep the current direction, jump to the opposite end, and keep
/// going the same way.
pub fn cscan(
    requests:  &[Cylinder],
    head:      Cylinder,
    direction: Direction,
    _disk_max: Cylinder,
) -> Vec<Cylinder> {
    let (below, above) = partition(requests, head);
    let mut order = Vec::with_capacity(requests.len());
    match direction {
        Direction::Increasing => {
            order.extend_from_slice(&above);
            order.extend_from_slice(&below);
        }
        Direction::Decreasing => {
            order.extend(below.iter().rev());
            order.extend(above.iter().rev());
        }
    }
    order
}

/// Split into `(below, above_or_equal)`, each sorted ascending.
fn partition(requests: &[Cylinder], head: Cylinder) -> (Vec<Cylinder>, Vec<Cylinder>) {
    let (mut below, mut above): (Vec<Cylinder>, Vec<Cylinder>) =
        requests.iter().partition(|&&r| r < head);
    below.sort_unstable();
    above.sort_unstable();
    (below, above)
}
