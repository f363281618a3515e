//! State snapshots pushed to observers.

use std::fmt;

use ds_core::Cylinder;

/// Everything a renderer needs to draw the current frame.
///
/// Borrows from the loaded simulation, so building one allocates nothing.
/// Use [`to_record`](Self::to_record) to keep a copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot<'a> {
    pub disk_max:      Cylinder,
    pub service_order: &'a [Cylinder],
    pub positions:     &'a [Cylinder],
    /// Requests fully serviced so far, in `[0, service_order.len()]`.
    pub current_step:  usize,
    /// Interpolated head location.
    pub head_position: Cylinder,
}

impl Snapshot<'_> {
    #[inline]
    pub fn step_count(&self) -> usize {
        self.service_order.len()
    }

    /// The request being travelled to, if any remain.
    pub fn next_request(&self) -> Option<Cylinder> {
        self.service_order.get(self.current_step).copied()
    }

    pub fn to_record(&self) -> SnapshotRecord {
        SnapshotRecord {
            disk_max:      self.disk_max,
            service_order: self.service_order.to_vec(),
            positions:     self.positions.to_vec(),
            current_step:  self.current_step,
            head_position: self.head_position,
        }
    }
}

/// Status line: `Step 3 / 8 · Head at: 95`.
impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Step {} / {} · Head at: {}",
            self.current_step,
            self.step_count(),
            self.head_position
        )
    }
}

/// Owned copy of a [`Snapshot`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct SnapshotRecord {
    pub disk_max:      Cylinder,
    pub service_order: Vec<Cylinder>,
    pub positions:     Vec<Cylinder>,
    pub current_step:  usize,
    pub head_position: Cylinder,
}
