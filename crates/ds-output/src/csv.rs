//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trace.csv` — `step,headPosition,servedRequest`, step 0 with an empty
//!   served field
//! - `frames.csv` — `frame,currentStep,headPosition`

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{FrameRow, OutputResult, TraceDocument};

const TRACE_HEADER: [&str; 3] = ["step", "headPosition", "servedRequest"];
const FRAME_HEADER: [&str; 3] = ["frame", "currentStep", "headPosition"];

/// Writes traces and playback frames to two CSV files.
pub struct CsvWriter {
    trace:    Writer<File>,
    frames:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut trace = Writer::from_path(dir.join("trace.csv"))?;
        trace.write_record(TRACE_HEADER)?;

        let mut frames = Writer::from_path(dir.join("frames.csv"))?;
        frames.write_record(FRAME_HEADER)?;

        Ok(Self {
            trace,
            frames,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_trace(&mut self, trace: &TraceDocument) -> OutputResult<()> {
        write_trace_records(&mut self.trace, trace)
    }

    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        for row in rows {
            self.frames.write_record(&[
                row.frame.to_string(),
                row.current_step.to_string(),
                row.head_position.to_string(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.trace.flush()?;
        self.frames.flush()?;
        Ok(())
    }
}

/// Render the step table of `trace` (header included) as a string.
pub fn trace_csv_string(trace: &TraceDocument) -> OutputResult<String> {
    let mut wtr = Writer::from_writer(Vec::new());
    wtr.write_record(TRACE_HEADER)?;
    write_trace_records(&mut wtr, trace)?;
    let bytes = wtr
        .into_inner()
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| std::io::Error::other(e.to_string()).into())
}

fn write_trace_records<W: Write>(wtr: &mut Writer<W>, trace: &TraceDocument) -> OutputResult<()> {
    for row in trace.rows() {
        wtr.write_record(&[
            row.step.to_string(),
            row.head_position.to_string(),
            row.served_request.map(|c| c.to_string()).unwrap_or_default(),
        ])?;
    }
    Ok(())
}
