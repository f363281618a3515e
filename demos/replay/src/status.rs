//! Progress reporting for the replay binary.

use ds_core::Simulation;
use ds_playback::{PlaybackObserver, Snapshot};
use tracing::{info, trace};

/// Logs one status line per completed step and every frame at `trace`.
#[derive(Default)]
pub struct StatusLine {
    last_step: Option<usize>,
    frames:    u64,
}

impl StatusLine {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl PlaybackObserver for StatusLine {
    fn on_state(&mut self, snapshot: &Snapshot<'_>) {
        self.frames += 1;
        trace!(frame = self.frames, head = snapshot.head_position, "frame");
        if self.last_step != Some(snapshot.current_step) {
            self.last_step = Some(snapshot.current_step);
            match snapshot.next_request() {
                Some(next) => info!(next, "{snapshot}"),
                None => info!("{snapshot}"),
            }
        }
    }

    fn on_finished(&mut self, sim: &Simulation) {
        info!(
            steps = sim.step_count(),
            final_position = sim.final_position(),
            "playback finished"
        );
    }
}
