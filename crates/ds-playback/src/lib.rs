//! `ds-playback` — step-by-step replay of a computed [`Simulation`].
//!
//! # Architecture
//!
//! ```text
//!   PlaybackState  ── pure transitions (load, play, pause, step, seek, advance)
//!        ▲
//!        │ owned by
//!   PlaybackController<C, S, O>
//!        ├── C: Clock            current time in ms
//!        ├── S: FrameScheduler   request / cancel the next frame callback
//!        └── O: PlaybackObserver receives a Snapshot on every state change
//! ```
//!
//! The controller is the only mutable cell.  Every control call cancels the
//! pending frame *before* mutating state, so a stale frame can never overwrite
//! a freshly seeked head position.
//!
//! # Phases
//!
//! | Phase      | Meaning                                                   |
//! |------------|-----------------------------------------------------------|
//! | `Idle`     | Nothing loaded; every control call is a no-op             |
//! | `Paused`   | Loaded, not animating                                     |
//! | `Playing`  | A segment is interpolating                                |
//! | `Finished` | Paused at `current_step == step_count`                    |
//!
//! # Quick-start (headless)
//!
//! ```rust,ignore
//! let clock = ManualClock::new(0.0);
//! let mut ctl = PlaybackController::new(
//!     PlaybackConfig::default(), clock.clone(), FrameQueue::new(), RecordingObserver::default(),
//! );
//! ctl.load(Arc::new(sim));
//! ctl.play();
//! drive(&mut ctl, 16.0, |ms| clock.advance(ms));
//! ```
//!
//! [`Simulation`]: ds_core::Simulation

pub mod clock;
pub mod config;
pub mod controller;
pub mod driver;
pub mod frame;
pub mod observer;
pub mod snapshot;
pub mod state;


pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{MAX_SEGMENT_MS, PlaybackConfig};
pub use controller::PlaybackController;
pub use driver::drive;
pub use frame::{FrameHandle, FrameQueue, FrameScheduler};
pub use observer::{NoopObserver, PlaybackObserver, RecordingObserver};
pub use snapshot::{Snapshot, SnapshotRecord};
pub use state::{PlaybackPhase, PlaybackState, Segment};
