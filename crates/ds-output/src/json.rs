//! JSON output backend.
//!
//! `trace.json` is written as soon as a trace arrives.  Frames are buffered
//! and written to `frames.json` on [`finish`](OutputWriter::finish).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::writer::OutputWriter;
use crate::{FrameRow, OutputResult, TraceDocument};

/// Writes traces and playback frames as pretty-printed JSON.
pub struct JsonWriter {
    dir:      PathBuf,
    frames:   Vec<FrameRow>,
    finished: bool,
}

impl JsonWriter {
    /// Target `dir`; it must already exist.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("output directory {} does not exist", dir.display()),
            )
            .into());
        }
        Ok(Self {
            dir:      dir.to_path_buf(),
            frames:   Vec::new(),
            finished: false,
        })
    }
}

impl OutputWriter for JsonWriter {
    fn write_trace(&mut self, trace: &TraceDocument) -> OutputResult<()> {
        let mut out = BufWriter::new(File::create(self.dir.join("trace.json"))?);
        trace.write_json(&mut out)?;
        out.flush()?;
        Ok(())
    }

    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        self.frames.extend_from_slice(rows);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut out = BufWriter::new(File::create(self.dir.join("frames.json"))?);
        serde_json::to_writer_pretty(&mut out, &self.frames)?;
        out.flush()?;
        Ok(())
    }
}
