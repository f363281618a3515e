//! Fluent builder producing a [`Simulation`].

use ds_core::{Algorithm, Cylinder, Direction, Simulation};

use crate::{
    RawInput, coerce_algorithm, coerce_direction, coerce_disk_max, coerce_head_start,
    compute_metrics, parse_request_list, sanitize, service_order,
};

/// Fluent builder for [`Simulation`].
///
/// # Defaults
///
/// | Method            | Default                 |
/// |-------------------|-------------------------|
/// | `.head_start(h)`  | `0`                     |
/// | `.direction(d)`   | `Direction::Increasing` |
/// | `.algorithm(a)`   | `Algorithm::Scan`       |
/// | `.requests(r)`    | empty                   |
///
/// Out-of-range parameters are coerced rather than rejected: `disk_max` is
/// raised to at least 1 and `head_start` is clamped to `[0, disk_max]` at
/// build time.  Requests are sanitized against the final `disk_max`.
///
/// # Example
///
/// ```rust,ignore
/// let sim = SimulationBuilder::new(199)
///     .head_start(50)
///     .algorithm(Algorithm::CScan)
///     .requests([95.0, 180.0, 34.0])
///     .build();
/// ```
#[derive(Clone, Debug)]
pub struct SimulationBuilder {
    disk_max:   Cylinder,
    head_start: Cylinder,
    direction:  Direction,
    algorithm:  Algorithm,
    requests:   Vec<f64>,
}

impl SimulationBuilder {
    pub fn new(disk_max: Cylinder) -> Self {
        Self {
            disk_max:   disk_max.max(1),
            head_start: 0,
            direction:  Direction::default(),
            algorithm:  Algorithm::default(),
            requests:   Vec::new(),
        }
    }

    /// Coerce every field of `raw` (see [`crate::input`]).
    pub fn from_raw(raw: &RawInput) -> Self {
        let disk_max = coerce_disk_max(&raw.disk_max);
        Self::new(disk_max)
            .head_start(coerce_head_start(&raw.head_start, disk_max))
            .direction(coerce_direction(&raw.direction))
            .algorithm(coerce_algorithm(&raw.algorithm))
            .requests(parse_request_list(&raw.requests))
    }

    pub fn head_start(mut self, head_start: Cylinder) -> Self {
        self.head_start = head_start;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Raw request values.  Invalid entries are dropped by `build`.
    pub fn requests<I: IntoIterator<Item = f64>>(mut self, requests: I) -> Self {
        self.requests = requests.into_iter().collect();
        self
    }

    /// Integer request values.  Entries above `disk_max` are dropped by
    /// `build`.
    pub fn cylinders(mut self, requests: &[Cylinder]) -> Self {
        self.requests = requests.iter().map(|&c| c as f64).collect();
        self
    }

    /// Sanitize, order, and measure.  Never fails.
    pub fn build(self) -> Simulation {
        let head_start = self.head_start.min(self.disk_max);
        let requests = sanitize(&self.requests, self.disk_max);
        let order = service_order(
            self.algorithm,
            &requests,
            head_start,
            self.direction,
            self.disk_max,
        );
        let metrics = compute_metrics(head_start, order);

        tracing::debug!(
            algorithm = %self.algorithm,
            direction = %self.direction,
            disk_max = self.disk_max,
            head_start,
            requests = metrics.service_order.len(),
            total_head_movement = metrics.total_head_movement,
            "simulation computed"
        );

        Simulation::new(self.disk_max, head_start, self.direction, self.algorithm, metrics)
    }
}
