//! The `OutputWriter` trait implemented by all backend writers.

use crate::{FrameRow, OutputResult, TraceDocument};

/// Trait implemented by the CSV, JSON, and SQLite writers.
pub trait OutputWriter {
    /// Write one complete simulation trace.
    fn write_trace(&mut self, trace: &TraceDocument) -> OutputResult<()>;

    /// Write a batch of playback frames.
    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

impl<W: OutputWriter + ?Sized> OutputWriter for Box<W> {
    fn write_trace(&mut self, trace: &TraceDocument) -> OutputResult<()> {
        (**self).write_trace(trace)
    }

    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        (**self).write_frames(rows)
    }

    fn finish(&mut self) -> OutputResult<()> {
        (**self).finish()
    }
}

/// Fan out to several backends.  Every writer is finished even if an earlier
/// one fails; the first error is returned.
impl<W: OutputWriter> OutputWriter for Vec<W> {
    fn write_trace(&mut self, trace: &TraceDocument) -> OutputResult<()> {
        self.iter_mut().try_for_each(|w| w.write_trace(trace))
    }

    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        self.iter_mut().try_for_each(|w| w.write_frames(rows))
    }

    fn finish(&mut self) -> OutputResult<()> {
        let mut first = Ok(());
        for w in self.iter_mut() {
            let result = w.finish();
            if first.is_ok() {
                first = result;
            }
        }
        first
    }
}
