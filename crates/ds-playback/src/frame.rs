//! Frame scheduling.
//!
//! A display refresh loop is modelled as "call me back once, soon".  The
//! controller asks a [`FrameScheduler`] for a frame, keeps the returned
//! [`FrameHandle`], and cancels it whenever a control call changes state.

use std::collections::VecDeque;
use std::fmt;

/// Identifies one requested frame callback.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct FrameHandle(pub u64);

impl fmt::Display for FrameHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameHandle({})", self.0)
    }
}

/// Register-a-callback / cancel-a-callback primitive.
///
/// The host delivers a requested frame by calling
/// [`PlaybackController::on_frame`](crate::PlaybackController::on_frame) with
/// its handle.
pub trait FrameScheduler {
    /// Request one frame callback.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancel a previously requested frame.  Unknown handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// A FIFO of pending frames, drained by the host loop.
///
/// Used with [`drive`](crate::drive) for fixed-rate playback and directly in
/// tests to deliver frames one at a time.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id:   u64,
    pending:   VecDeque<FrameHandle>,
    cancelled: u64,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return the oldest pending frame.
    pub fn pop_due(&mut self) -> Option<FrameHandle> {
        self.pending.pop_front()
    }

    /// The oldest pending frame without removing it.
    pub fn peek(&self) -> Option<FrameHandle> {
        self.pending.front().copied()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// How many frames have been cancelled over the queue's lifetime.
    pub fn cancelled_count(&self) -> u64 {
        self.cancelled
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = FrameHandle(self.next_id);
        self.next_id += 1;
        self.pending.push_back(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|&h| h != handle);
        self.cancelled += (before - self.pending.len()) as u64;
    }
}
