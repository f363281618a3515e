//! SQLite output backend (feature `sqlite`).
//!
//! Creates a single `output.db` file in the configured output directory with
//! three tables: `traces`, `trace_steps`, and `playback_frames`.

use std::path::Path;

use chrono::SecondsFormat;
use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{FrameRow, OutputResult, TraceDocument};

/// Writes traces and playback frames to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `output.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("output.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS traces (
                 trace_id            INTEGER PRIMARY KEY AUTOINCREMENT,
                 disk_max            INTEGER NOT NULL,
                 head_start          INTEGER NOT NULL,
                 direction           INTEGER NOT NULL,
                 algorithm           TEXT    NOT NULL,
                 created_at          TEXT    NOT NULL,
                 total_head_movement INTEGER NOT NULL,
                 average_seek        REAL    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS trace_steps (
                 trace_id         INTEGER NOT NULL REFERENCES traces(trace_id),
                 step             INTEGER NOT NULL,
                 head_position    INTEGER NOT NULL,
                 served_request   INTEGER,
                 waiting_movement INTEGER,
                 PRIMARY KEY (trace_id, step)
             );
             CREATE TABLE IF NOT EXISTS playback_frames (
                 frame         INTEGER NOT NULL,
                 current_step  INTEGER NOT NULL,
                 head_position INTEGER NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl OutputWriter for SqliteWriter {
    fn write_trace(&mut self, trace: &TraceDocument) -> OutputResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        tx.execute(
            "INSERT INTO traces \
             (disk_max, head_start, direction, algorithm, created_at, total_head_movement, average_seek) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            rusqlite::params![
                trace.meta.disk_max,
                trace.meta.head_start,
                trace.meta.direction.sign(),
                trace.meta.algorithm.tag(),
                trace.meta.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
                trace.total_head_movement as i64,
                trace.average_seek,
            ],
        )?;
        let trace_id = tx.last_insert_rowid();
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO trace_steps \
                 (trace_id, step, head_position, served_request, waiting_movement) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for row in trace.rows() {
                let waiting = row
                    .step
                    .checked_sub(1)
                    .and_then(|i| trace.waiting_movements.get(i))
                    .map(|&w| w as i64);
                stmt.execute(rusqlite::params![
                    trace_id,
                    row.step as i64,
                    row.head_position,
                    row.served_request,
                    waiting,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn write_frames(&mut self, rows: &[FrameRow]) -> OutputResult<()> {
        if rows.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO playback_frames (frame, current_step, head_position) \
                 VALUES (?1, ?2, ?3)",
            )?;
            for row in rows {
                stmt.execute(rusqlite::params![
                    row.frame as i64,
                    row.current_step as i64,
                    row.head_position,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn
            .execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
