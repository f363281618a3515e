//! `ds-engine` — the scheduling engine.
//!
//! Pure, stateless functions only.  Data flows one way:
//!
//! ```text
//! raw strings ──input──▶ raw numbers ──sanitize──▶ requests
//!     requests ──policy (scan | cscan)──▶ service order
//!     service order ──compute_metrics──▶ Metrics ──▶ Simulation
//! ```
//!
//! Nothing here returns an error.  Invalid or empty input degrades to an
//! empty service order with zeroed metrics; callers check
//! [`Simulation::is_empty`][ds_core::Simulation::is_empty] and report
//! "nothing to simulate" themselves.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`input`]    | `RawInput`, `parse_request_list`, `coerce_*` helpers      |
//! | [`sanitize`] | `sanitize`                                                |
//! | [`policy`]   | `scan`, `cscan`, `ordering_fn`, `service_order`           |
//! | [`metrics`]  | `compute_metrics`                                         |
//! | [`builder`]  | `SimulationBuilder`                                       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ds_core::{Algorithm, Direction};
//! use ds_engine::SimulationBuilder;
//!
//! let sim = SimulationBuilder::new(199)
//!     .head_start(50)
//!     .direction(Direction::Increasing)
//!     .algorithm(Algorithm::Scan)
//!     .requests([95.0, 180.0, 34.0, 119.0, 11.0, 123.0, 62.0, 64.0])
//!     .build();
//! assert_eq!(sim.total_head_movement(), 299);
//! ```

pub mod builder;
pub mod input;
pub mod metrics;
pub mod policy;
pub mod sanitize;

#[cfg(test)]
mod tests;

pub use builder::SimulationBuilder;
pub use input::{
    RawInput, coerce_algorithm, coerce_direction, coerce_disk_max, coerce_head_start,
    parse_number, parse_request_list,
};
pub use metrics::compute_metrics;
pub use policy::{OrderFn, cscan, ordering_fn, scan, service_order};
pub use sanitize::sanitize;
