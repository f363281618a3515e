//! The exported trace document.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "meta": {
//!     "diskMax": 199,
//!     "headStart": 50,
//!     "direction": 1,
//!     "algorithm": "scan",
//!     "createdAt": "2024-01-01T00:00:00.000Z"
//!   },
//!   "serviceOrder": [62, 64, 95, 119, 123, 180, 34, 11],
//!   "positions": [50, 62, 64, 95, 119, 123, 180, 34, 11],
//!   "totalHeadMovement": 299,
//!   "averageSeek": 37.375,
//!   "waitingMovements": [12, 14, 45, 69, 73, 130, 276, 299]
//! }
//! ```

use std::io::{Read, Write};

use chrono::{DateTime, Utc};
use ds_core::{Algorithm, Cylinder, Direction, Simulation};
use ds_engine::compute_metrics;
use serde::{Deserialize, Serialize};

use crate::row::rows_from;
use crate::{OutputError, OutputResult, TraceRow};

/// Tolerance when comparing a stored average against a recomputed one.
const AVERAGE_EPSILON: f64 = 1e-9;

/// Run parameters recorded alongside the trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceMeta {
    pub disk_max:   Cylinder,
    pub head_start: Cylinder,
    pub direction:  Direction,
    pub algorithm:  Algorithm,
    #[serde(with = "iso_millis")]
    pub created_at: DateTime<Utc>,
}

/// A self-describing, serializable copy of a [`Simulation`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TraceDocument {
    pub meta:                TraceMeta,
    pub service_order:       Vec<Cylinder>,
    pub positions:           Vec<Cylinder>,
    pub total_head_movement: u64,
    pub average_seek:        f64,
    pub waiting_movements:   Vec<u64>,
}

impl TraceDocument {
    /// Capture `sim`, stamped with `created_at`.
    ///
    /// The timestamp is an argument so that exports are reproducible.
    pub fn new(sim: &Simulation, created_at: DateTime<Utc>) -> Self {
        Self {
            meta: TraceMeta {
                disk_max:   sim.disk_max(),
                head_start: sim.head_start(),
                direction:  sim.direction(),
                algorithm:  sim.algorithm(),
                created_at,
            },
            service_order:       sim.service_order().to_vec(),
            positions:           sim.positions().to_vec(),
            total_head_movement: sim.total_head_movement(),
            average_seek:        sim.average_seek(),
            waiting_movements:   sim.waiting_movements().to_vec(),
        }
    }

    /// Step table (`step, headPosition, servedRequest`).
    pub fn rows(&self) -> Vec<TraceRow> {
        rows_from(&self.positions, &self.service_order)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> OutputResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> OutputResult<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Validate the document and rebuild the [`Simulation`] it describes.
    ///
    /// Metrics are recomputed from `headStart` and `serviceOrder`; a document
    /// whose stored metrics disagree is rejected.
    pub fn into_simulation(self) -> OutputResult<Simulation> {
        let TraceMeta { disk_max, head_start, direction, algorithm, .. } = self.meta;

        if disk_max < 1 {
            return Err(invalid("diskMax must be at least 1".to_owned()));
        }
        if head_start > disk_max {
            return Err(invalid(format!("headStart {head_start} exceeds diskMax {disk_max}")));
        }
        if let Some(&c) = self.service_order.iter().find(|&&c| c > disk_max) {
            return Err(invalid(format!("request {c} exceeds diskMax {disk_max}")));
        }

        let metrics = compute_metrics(head_start, self.service_order);
        if metrics.positions != self.positions {
            return Err(invalid(
                "positions must be headStart followed by serviceOrder".to_owned(),
            ));
        }
        if metrics.total_head_movement != self.total_head_movement {
            return Err(invalid(format!(
                "totalHeadMovement {} does not match recomputed {}",
                self.total_head_movement, metrics.total_head_movement
            )));
        }
        if metrics.waiting_movements != self.waiting_movements {
            return Err(invalid("waitingMovements do not match positions".to_owned()));
        }
        if (metrics.average_seek - self.average_seek).abs() > AVERAGE_EPSILON {
            return Err(invalid(format!(
                "averageSeek {} does not match recomputed {}",
                self.average_seek, metrics.average_seek
            )));
        }

        Ok(Simulation::new(disk_max, head_start, direction, algorithm, metrics))
    }
}

/// Parse a trace previously written by [`TraceDocument::write_json`].
pub fn read_trace_json<R: Read>(reader: R) -> OutputResult<TraceDocument> {
    Ok(serde_json::from_reader(reader)?)
}

fn invalid(msg: String) -> OutputError {
    OutputError::InvalidTrace(msg)
}

/// RFC 3339 with millisecond precision and a `Z` suffix.
mod iso_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}
