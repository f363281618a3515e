//! Playback state and its pure transition functions.
//!
//! Every transition consumes the state and returns the next one.  Nothing
//! here touches a clock or a scheduler: the current time is an argument and
//! frame bookkeeping belongs to [`PlaybackController`](crate::PlaybackController).

use std::sync::Arc;

use ds_core::{Cylinder, Simulation};

use crate::config::normalize_speed;
use crate::{PlaybackConfig, Snapshot};

// ── PlaybackPhase ─────────────────────────────────────────────────────────────

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum PlaybackPhase {
    Idle,
    Paused,
    Playing,
    Finished,
}

// ── Segment ───────────────────────────────────────────────────────────────────

/// One animated move between consecutive entries of `positions`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Segment {
    pub start_ms:    f64,
    pub duration_ms: f64,
    pub from:        Cylinder,
    pub to:          Cylinder,
}

impl Segment {
    /// Fraction completed at `now_ms`, clamped to `[0, 1]`.
    ///
    /// Clock readings before `start_ms` (or non-finite ones) count as no
    /// progress; a non-positive duration counts as complete.
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        let t = (now_ms - self.start_ms) / self.duration_ms;
        if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 }
    }

    /// Linear interpolation between `from` and `to`, rounded to the nearest
    /// cylinder.
    pub fn position_at(&self, t: f64) -> Cylinder {
        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * t.clamp(0.0, 1.0)).round() as Cylinder
    }
}

// ── PlaybackState ─────────────────────────────────────────────────────────────

/// Playback position within one loaded simulation.
#[derive(Clone, Debug)]
pub struct PlaybackState {
    sim:           Option<Arc<Simulation>>,
    current_step:  usize,
    head_position: Cylinder,
    is_playing:    bool,
    speed:         f64,
    segment:       Option<Segment>,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self {
            sim:           None,
            current_step:  0,
            head_position: 0,
            is_playing:    false,
            speed:         1.0,
            segment:       None,
        }
    }
}

impl PlaybackState {
    /// An idle state with the given initial speed.
    pub fn with_speed(speed: f64) -> Self {
        Self { speed: normalize_speed(speed), ..Self::default() }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn phase(&self) -> PlaybackPhase {
        match &self.sim {
            None => PlaybackPhase::Idle,
            Some(_) if self.is_playing => PlaybackPhase::Playing,
            Some(sim) if self.current_step >= sim.step_count() => PlaybackPhase::Finished,
            Some(_) => PlaybackPhase::Paused,
        }
    }

    #[inline]
    pub fn simulation(&self) -> Option<&Arc<Simulation>> {
        self.sim.as_ref()
    }

    #[inline]
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    #[inline]
    pub fn head_position(&self) -> Cylinder {
        self.head_position
    }

    #[inline]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// The segment currently animating, if playing.
    #[inline]
    pub fn segment(&self) -> Option<&Segment> {
        self.segment.as_ref()
    }

    /// Number of steps in the loaded simulation (0 when idle).
    pub fn step_count(&self) -> usize {
        self.sim.as_ref().map_or(0, |s| s.step_count())
    }

    /// Read-only view for renderers; `None` when idle.
    pub fn snapshot(&self) -> Option<Snapshot<'_>> {
        self.sim.as_ref().map(|sim| Snapshot {
            disk_max:      sim.disk_max(),
            service_order: sim.service_order(),
            positions:     sim.positions(),
            current_step:  self.current_step,
            head_position: self.head_position,
        })
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Replace the simulation and rewind to step 0.  Speed carries over.
    pub fn load(self, sim: Arc<Simulation>) -> Self {
        let head_position = sim.positions().first().copied().unwrap_or(sim.head_start());
        Self {
            sim: Some(sim),
            current_step: 0,
            head_position,
            is_playing: false,
            speed: self.speed,
            segment: None,
        }
    }

    /// Start animating from `current_step`.
    ///
    /// No-op when idle, already playing, or at the end.
    pub fn play(mut self, now_ms: f64, config: &PlaybackConfig) -> Self {
        if self.is_playing || self.current_step >= self.step_count() {
            return self;
        }
        self.segment = self.segment_from(self.current_step, now_ms, config);
        self.is_playing = self.segment.is_some();
        self
    }

    /// Stop animating, keeping the current interpolated head position.
    pub fn pause(mut self) -> Self {
        self.is_playing = false;
        self.segment = None;
        self
    }

    pub fn step_forward(self) -> Self {
        let target = self.current_step.saturating_add(1);
        self.snap_to(target)
    }

    pub fn step_back(self) -> Self {
        let target = self.current_step.saturating_sub(1);
        self.snap_to(target)
    }

    /// Jump to step `index`, clamped to `[0, step_count]`.
    pub fn seek(self, index: i64) -> Self {
        let target = usize::try_from(index.max(0)).unwrap_or(usize::MAX);
        self.snap_to(target)
    }

    /// Set the speed multiplier.  Takes effect from the next segment.
    pub fn set_speed(mut self, multiplier: f64) -> Self {
        self.speed = normalize_speed(multiplier);
        self
    }

    /// Per-frame update: interpolate the head and, once the segment is
    /// complete, advance to the next step (or finish).
    pub fn advance(mut self, now_ms: f64, config: &PlaybackConfig) -> Self {
        if !self.is_playing {
            return self;
        }
        let Some(segment) = self.segment else {
            self.is_playing = false;
            return self;
        };

        let t = segment.progress(now_ms);
        self.head_position = segment.position_at(t);
        if t < 1.0 {
            return self;
        }

        let steps = self.step_count();
        self.current_step = (self.current_step + 1).min(steps);
        self.head_position = self.position_of(self.current_step);

        if self.current_step >= steps {
            self.is_playing = false;
            self.segment = None;
        } else {
            self.segment = self.segment_from(self.current_step, now_ms, config);
        }
        self
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    /// Pause, clamp `target`, and place the head exactly on that step.
    fn snap_to(self, target: usize) -> Self {
        if self.sim.is_none() {
            return self;
        }
        let mut next = self.pause();
        next.current_step = target.min(next.step_count());
        next.head_position = next.position_of(next.current_step);
        next
    }

    fn position_of(&self, step: usize) -> Cylinder {
        self.sim
            .as_ref()
            .and_then(|s| s.positions().get(step).copied())
            .unwrap_or(self.head_position)
    }

    fn segment_from(&self, step: usize, now_ms: f64, config: &PlaybackConfig) -> Option<Segment> {
        let positions = self.sim.as_ref()?.positions();
        let from = *positions.get(step)?;
        let to = *positions.get(step + 1)?;
        Some(Segment {
            start_ms: now_ms,
            duration_ms: config.segment_duration_ms(from, to, self.speed),
            from,
            to,
        })
    }
}
