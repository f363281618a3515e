//! `PlaybackOutputObserver<W>` — bridges `PlaybackObserver` to an `OutputWriter`.

use ds_core::Simulation;
use ds_playback::{PlaybackObserver, Snapshot};

use crate::writer::OutputWriter;
use crate::{FrameRow, OutputError, OutputResult};

/// Frames are handed to the writer in batches of this size.
const FRAME_BATCH: usize = 256;

/// A [`PlaybackObserver`] that records one [`FrameRow`] per snapshot to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After playback, call [`finish`](Self::finish) and
/// check [`take_error`](Self::take_error).
pub struct PlaybackOutputObserver<W: OutputWriter> {
    writer:     W,
    next_frame: u64,
    buffer:     Vec<FrameRow>,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> PlaybackOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            next_frame: 0,
            buffer:     Vec::with_capacity(FRAME_BATCH),
            last_error: None,
        }
    }

    /// Number of snapshots observed so far.
    pub fn frames_seen(&self) -> u64 {
        self.next_frame
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Write any buffered frames.
    pub fn flush(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let result = self.writer.write_frames(&self.buffer);
        self.buffer.clear();
        self.store_err(result);
    }

    /// Flush buffered frames and finish the writer.
    pub fn finish(&mut self) -> OutputResult<()> {
        self.flush();
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    /// Access the inner writer, e.g. to write the trace through it.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Unwrap the inner writer.  Buffered frames are flushed first.
    pub fn into_writer(mut self) -> W {
        self.flush();
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            tracing::warn!(error = %e, "frame write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> PlaybackObserver for PlaybackOutputObserver<W> {
    fn on_state(&mut self, snapshot: &Snapshot<'_>) {
        self.buffer.push(FrameRow {
            frame:         self.next_frame,
            current_step:  snapshot.current_step,
            head_position: snapshot.head_position,
        });
        self.next_frame += 1;
        if self.buffer.len() >= FRAME_BATCH {
            self.flush();
        }
    }

    fn on_finished(&mut self, _sim: &Simulation) {
        self.flush();
    }
}
