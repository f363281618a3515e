//! Plain data row types written by output backends.

use ds_core::{Cylinder, Simulation};
use serde::{Deserialize, Serialize};

/// One line of the step table: where the head is after `step` requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceRow {
    pub step:           usize,
    pub head_position:  Cylinder,
    /// `None` for step 0 (nothing serviced yet).
    pub served_request: Option<Cylinder>,
}

/// One snapshot observed during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRow {
    /// Sequence number of the snapshot, starting at 0.
    pub frame:         u64,
    pub current_step:  usize,
    pub head_position: Cylinder,
}

/// Step table for `sim`: one row for the initial head plus one per request.
pub fn trace_rows(sim: &Simulation) -> Vec<TraceRow> {
    rows_from(sim.positions(), sim.service_order())
}

pub(crate) fn rows_from(positions: &[Cylinder], service_order: &[Cylinder]) -> Vec<TraceRow> {
    positions
        .iter()
        .enumerate()
        .map(|(step, &head_position)| TraceRow {
            step,
            head_position,
            served_request: step.checked_sub(1).and_then(|i| service_order.get(i).copied()),
        })
        .collect()
}
