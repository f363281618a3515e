//! Observer trait for playback state changes.

use ds_core::Simulation;

use crate::{Snapshot, SnapshotRecord};

/// Callbacks invoked by [`PlaybackController`](crate::PlaybackController).
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  A renderer is expected to redraw
/// synchronously inside [`on_state`](Self::on_state); the controller keeps no
/// copy of past snapshots.
///
/// # Example — status printer
///
/// ```rust,ignore
/// struct StatusLine;
///
/// impl PlaybackObserver for StatusLine {
///     fn on_state(&mut self, snapshot: &Snapshot<'_>) {
///         println!("{snapshot}");
///     }
/// }
/// ```
pub trait PlaybackObserver {
    /// Called after every change to the current step or head position.
    fn on_state(&mut self, _snapshot: &Snapshot<'_>) {}

    /// Called once when playback reaches the last step on its own.
    fn on_finished(&mut self, _sim: &Simulation) {}
}

/// A [`PlaybackObserver`] that does nothing.
pub struct NoopObserver;

impl PlaybackObserver for NoopObserver {}

/// Keeps an owned copy of every snapshot.  Handy in tests and for offline
/// rendering.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub snapshots: Vec<SnapshotRecord>,
    pub finished:  usize,
}

impl RecordingObserver {
    pub fn last(&self) -> Option<&SnapshotRecord> {
        self.snapshots.last()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.finished = 0;
    }
}

impl PlaybackObserver for RecordingObserver {
    fn on_state(&mut self, snapshot: &Snapshot<'_>) {
        self.snapshots.push(snapshot.to_record());
    }

    fn on_finished(&mut self, _sim: &Simulation) {
        self.finished += 1;
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: PlaybackObserver, B: PlaybackObserver> PlaybackObserver for (A, B) {
    fn on_state(&mut self, snapshot: &Snapshot<'_>) {
        self.0.on_state(snapshot);
        self.1.on_state(snapshot);
    }

    fn on_finished(&mut self, sim: &Simulation) {
        self.0.on_finished(sim);
        self.1.on_finished(sim);
    }
}

impl<O: PlaybackObserver + ?Sized> PlaybackObserver for &mut O {
    fn on_state(&mut self, snapshot: &Snapshot<'_>) {
        (**self).on_state(snapshot);
    }

    fn on_finished(&mut self, sim: &Simulation) {
        (**self).on_finished(sim);
    }
}
