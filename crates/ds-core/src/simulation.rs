//! The engine's output: an immutable, fully computed simulation.

use std::fmt;

use crate::{Algorithm, Cylinder, Direction, format_number};

// ── Metrics ───────────────────────────────────────────────────────────────────

/// Movement metrics derived from a service order.
///
/// Produced by `ds_engine::compute_metrics`; a pure function of the head
/// start and the order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Metrics {
    /// Requests in the order they are serviced.
    pub service_order: Vec<Cylinder>,
    /// `[head_start, service_order...]` — one longer than `service_order`.
    pub positions: Vec<Cylinder>,
    /// Sum of absolute deltas between consecutive `positions`.
    pub total_head_movement: u64,
    /// `total_head_movement / service_order.len()`, or `0.0` for no requests.
    pub average_seek: f64,
    /// Running prefix sum of movement, one entry per serviced request.
    pub waiting_movements: Vec<u64>,
}

// ── Simulation ────────────────────────────────────────────────────────────────

/// A complete scheduling run.
///
/// Immutable once produced: fields are only reachable through accessors.
/// Share it between the playback controller and export collaborators with an
/// `Arc`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Simulation {
    disk_max:            Cylinder,
    head_start:          Cylinder,
    direction:           Direction,
    algorithm:           Algorithm,
    service_order:       Vec<Cylinder>,
    positions:           Vec<Cylinder>,
    total_head_movement: u64,
    average_seek:        f64,
    waiting_movements:   Vec<u64>,
}

impl Simulation {
    /// Assemble a simulation from its parameters and computed metrics.
    ///
    /// The caller is responsible for `metrics` having been computed from
    /// `head_start`; `ds_engine::SimulationBuilder` is the usual entry point.
    pub fn new(
        disk_max:   Cylinder,
        head_start: Cylinder,
        direction:  Direction,
        algorithm:  Algorithm,
        metrics:    Metrics,
    ) -> Self {
        Self {
            disk_max,
            head_start,
            direction,
            algorithm,
            service_order:       metrics.service_order,
            positions:           metrics.positions,
            total_head_movement: metrics.total_head_movement,
            average_seek:        metrics.average_seek,
            waiting_movements:   metrics.waiting_movements,
        }
    }

    #[inline]
    pub fn disk_max(&self) -> Cylinder {
        self.disk_max
    }

    #[inline]
    pub fn head_start(&self) -> Cylinder {
        self.head_start
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[inline]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    #[inline]
    pub fn service_order(&self) -> &[Cylinder] {
        &self.service_order
    }

    #[inline]
    pub fn positions(&self) -> &[Cylinder] {
        &self.positions
    }

    #[inline]
    pub fn total_head_movement(&self) -> u64 {
        self.total_head_movement
    }

    #[inline]
    pub fn average_seek(&self) -> f64 {
        self.average_seek
    }

    #[inline]
    pub fn waiting_movements(&self) -> &[u64] {
        &self.waiting_movements
    }

    /// Number of requests to service; also the last valid playback step.
    #[inline]
    pub fn step_count(&self) -> usize {
        self.service_order.len()
    }

    /// `true` when there is nothing to simulate.  Callers should report this
    /// to the user rather than start playback.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.service_order.is_empty()
    }

    /// Head position once every request has been serviced.
    pub fn final_position(&self) -> Cylinder {
        self.positions.last().copied().unwrap_or(self.head_start)
    }

    /// Multi-line human-readable report of the run.
    pub fn summary(&self) -> SimulationSummary<'_> {
        SimulationSummary(self)
    }
}

// ── SimulationSummary ─────────────────────────────────────────────────────────

/// `Display` adapter returned by [`Simulation::summary`].
pub struct SimulationSummary<'a>(&'a Simulation);

impl fmt::Display for SimulationSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sim = self.0;
        let order = sim
            .service_order
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ");

        writeln!(f, "Algorithm: {}", sim.algorithm.label())?;
        writeln!(f, "Disk max: 0 .. {}", sim.disk_max)?;
        writeln!(f, "Head start: {}", sim.head_start)?;
        writeln!(f, "Requests: {}", sim.service_order.len())?;
        writeln!(f, "Service order: {order}")?;
        writeln!(
            f,
            "Total head movement: {} cylinders",
            format_number(sim.total_head_movement as f64)
        )?;
        write!(
            f,
            "Average seek per request: {} cylinders",
            format_number(sim.average_seek)
        )
    }
}
