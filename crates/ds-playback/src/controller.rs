//! The imperative shell around [`PlaybackState`].

use std::sync::Arc;

use ds_core::Simulation;

use crate::{
    Clock, FrameHandle, FrameScheduler, PlaybackConfig, PlaybackObserver, PlaybackPhase,
    PlaybackState, Snapshot,
};

/// Drives a [`PlaybackState`] from frame callbacks and control calls.
///
/// # Frame protocol
///
/// While playing, the controller holds exactly one pending [`FrameHandle`].
/// The host delivers it by calling [`on_frame`](Self::on_frame); the
/// controller advances the animation and, if still playing, requests the next
/// frame.  A handle that is not the pending one is ignored.
///
/// # Cancellation
///
/// `load`, `pause`, `step_forward`, `step_back`, and `seek` cancel the
/// pending frame before touching state.
///
/// # Notifications
///
/// `load`, `step_*`, `seek`, and every delivered frame push one
/// [`Snapshot`] to the observer.  `play`, `pause`, and `set_speed` do not
/// change the step or head position and emit nothing.  Calls made before any
/// `load` are no-ops.
pub struct PlaybackController<C: Clock, S: FrameScheduler, O: PlaybackObserver> {
    config:        PlaybackConfig,
    clock:         C,
    scheduler:     S,
    observer:      O,
    state:         PlaybackState,
    pending_frame: Option<FrameHandle>,
}

impl<C: Clock, S: FrameScheduler, O: PlaybackObserver> PlaybackController<C, S, O> {
    pub fn new(config: PlaybackConfig, clock: C, scheduler: S, observer: O) -> Self {
        let state = PlaybackState::with_speed(config.speed);
        Self {
            config,
            clock,
            scheduler,
            observer,
            state,
            pending_frame: None,
        }
    }

    // ── Control calls ─────────────────────────────────────────────────────

    /// Replace the simulation and rewind to step 0 (paused).
    pub fn load(&mut self, sim: Arc<Simulation>) {
        self.cancel_pending();
        tracing::debug!(
            steps = sim.step_count(),
            algorithm = %sim.algorithm(),
            head_start = sim.head_start(),
            "playback load"
        );
        self.transition(|s| s.load(sim));
        self.emit();
    }

    /// Start or resume animating from the current step.
    pub fn play(&mut self) {
        if self.state.is_playing() || self.state.current_step() >= self.state.step_count() {
            return;
        }
        let now = self.clock.now_ms();
        let config = &self.config;
        let state = std::mem::take(&mut self.state);
        self.state = state.play(now, config);

        if self.state.is_playing() {
            if let Some(seg) = self.state.segment() {
                tracing::debug!(
                    step = self.state.current_step(),
                    from = seg.from,
                    to = seg.to,
                    duration_ms = seg.duration_ms,
                    "playback play"
                );
            }
            self.pending_frame = Some(self.scheduler.request_frame());
        }
    }

    /// Freeze the head where it is.
    pub fn pause(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        self.cancel_pending();
        self.transition(PlaybackState::pause);
        tracing::debug!(
            step = self.state.current_step(),
            head = self.state.head_position(),
            "playback pause"
        );
    }

    /// Pause if playing, otherwise play.
    pub fn toggle(&mut self) {
        if self.state.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn step_forward(&mut self) {
        if self.state.simulation().is_none() {
            return;
        }
        self.cancel_pending();
        self.transition(PlaybackState::step_forward);
        self.emit();
    }

    pub fn step_back(&mut self) {
        if self.state.simulation().is_none() {
            return;
        }
        self.cancel_pending();
        self.transition(PlaybackState::step_back);
        self.emit();
    }

    /// Jump to step `index`, clamped to `[0, step_count]`.
    pub fn seek(&mut self, index: i64) {
        if self.state.simulation().is_none() {
            return;
        }
        self.cancel_pending();
        self.transition(|s| s.seek(index));
        tracing::debug!(
            requested = index,
            step = self.state.current_step(),
            head = self.state.head_position(),
            "playback seek"
        );
        self.emit();
    }

    /// Non-finite or non-positive multipliers reset the speed to 1.
    pub fn set_speed(&mut self, multiplier: f64) {
        self.transition(|s| s.set_speed(multiplier));
    }

    // ── Frame delivery ────────────────────────────────────────────────────

    /// Deliver a frame previously requested from the scheduler.
    pub fn on_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame != Some(handle) {
            tracing::trace!(%handle, "ignoring stale frame");
            return;
        }
        self.pending_frame = None;
        if !self.state.is_playing() {
            return;
        }

        let before = self.state.current_step();
        let now = self.clock.now_ms();
        let config = &self.config;
        let state = std::mem::take(&mut self.state);
        self.state = state.advance(now, config);

        tracing::trace!(
            now_ms = now,
            step = self.state.current_step(),
            head = self.state.head_position(),
            "playback frame"
        );
        self.emit();

        if self.state.is_playing() {
            if self.state.current_step() != before {
                if let Some(seg) = self.state.segment() {
                    tracing::debug!(
                        step = self.state.current_step(),
                        from = seg.from,
                        to = seg.to,
                        duration_ms = seg.duration_ms,
                        "segment start"
                    );
                }
            }
            self.pending_frame = Some(self.scheduler.request_frame());
        } else if let Some(sim) = self.state.simulation() {
            tracing::debug!(
                steps = sim.step_count(),
                head = self.state.head_position(),
                "playback finished"
            );
            self.observer.on_finished(sim);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// Read-only view of the current state; `None` before any `load`.
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.state.snapshot()
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn phase(&self) -> PlaybackPhase {
        self.state.phase()
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing()
    }

    /// Upper bound of the timeline (0 before any `load`).
    pub fn step_count(&self) -> usize {
        self.state.step_count()
    }

    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Unwrap the observer (e.g. to flush an output writer).
    pub fn into_observer(self) -> O {
        self.observer
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.scheduler.cancel_frame(handle);
        }
    }

    fn transition(&mut self, f: impl FnOnce(PlaybackState) -> PlaybackState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }

    fn emit(&mut self) {
        if let Some(snapshot) = self.state.snapshot() {
            self.observer.on_state(&snapshot);
        }
    }
}
