//! Fixed-rate frame delivery for hosts without a display refresh loop.

use crate::{Clock, FrameQueue, PlaybackController, PlaybackObserver};

/// Deliver pending frames until the controller stops requesting them.
///
/// `wait(frame_ms)` runs before each frame: advance a
/// [`ManualClock`](crate::ManualClock) for headless runs, or sleep when the
/// controller reads a [`SystemClock`](crate::SystemClock).  `wait` must let
/// time move forward or playback never completes.
///
/// Returns the number of frames delivered.
pub fn drive<C, O>(
    controller: &mut PlaybackController<C, FrameQueue, O>,
    frame_ms:   f64,
    mut wait:   impl FnMut(f64),
) -> usize
where
    C: Clock,
    O: PlaybackObserver,
{
    let mut delivered = 0;
    while let Some(handle) = controller.scheduler_mut().pop_due() {
        wait(frame_ms);
        controller.on_frame(handle);
        delivered += 1;
    }
    delivered
}
