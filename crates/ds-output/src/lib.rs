//! `ds-output` — export of simulation traces and playback frame logs.
//!
//! Three backends are provided, the last behind a Cargo feature:
//!
//! | Feature   | Backend   | Files created                  |
//! |-----------|-----------|--------------------------------|
//! | *(none)*  | CSV       | `trace.csv`, `frames.csv`      |
//! | *(none)*  | JSON      | `trace.json`, `frames.json`    |
//! | `sqlite`  | SQLite    | `output.db`                    |
//!
//! All backends implement [`OutputWriter`].  Traces are written from a
//! [`TraceDocument`] built from a finished `Simulation`; frames are recorded
//! by [`PlaybackOutputObserver`], which implements
//! `ds_playback::PlaybackObserver`.
//!
//! Output is a pure function of the simulation fields and the supplied
//! `created_at` timestamp, so the same inputs always produce identical bytes.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ds_output::{CsvWriter, OutputWriter, TraceDocument};
//!
//! let mut writer = CsvWriter::new(Path::new("./output"))?;
//! writer.write_trace(&TraceDocument::new(&sim, Utc::now()))?;
//! writer.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod json;
pub mod observer;
pub mod row;
pub mod trace;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;


pub use self::csv::{CsvWriter, trace_csv_string};
pub use error::{OutputError, OutputResult};
pub use json::JsonWriter;
pub use observer::PlaybackOutputObserver;
pub use row::{FrameRow, TraceRow, trace_rows};
pub use trace::{TraceDocument, TraceMeta, read_trace_json};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
