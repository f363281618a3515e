//! `ds-core` — foundational types for the disksched workspace.
//!
//! Every other `ds-*` crate depends on this one.  It has no `ds-*`
//! dependencies and minimal external ones (`rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`disk`]        | `Cylinder`, `Direction`, `Algorithm`                  |
//! | [`simulation`]  | `Metrics`, `Simulation`, `SimulationSummary`          |
//! | [`format`]      | `format_number` for human-readable movement figures   |
//! | [`rng`]         | `WorkloadRng` (seeded request-queue generator)        |
//! | [`error`]       | `DiskError`, `DiskResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `ds-output`.                                   |

pub mod disk;
pub mod error;
pub mod format;
pub mod rng;
pub mod simulation;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use disk::{Algorithm, Cylinder, DEFAULT_DISK_MAX, Direction};
pub use error::{DiskError, DiskResult};
pub use format::format_number;
pub use rng::WorkloadRng;
pub use simulation::{Metrics, Simulation, SimulationSummary};
