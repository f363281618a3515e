//! Deterministic request-queue generator.
//!
//! Workloads are drawn from a `SmallRng` seeded from a single `u64`, so the
//! same seed always yields the same queue on every platform `rand` supports.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Cylinder;

/// Seeded generator of synthetic request queues.
pub struct WorkloadRng(SmallRng);

impl WorkloadRng {
    pub fn new(seed: u64) -> Self {
        WorkloadRng(SmallRng::seed_from_u64(seed))
    }

    /// A single cylinder uniformly in `[0, disk_max]`.
    #[inline]
    pub fn cylinder(&mut self, disk_max: Cylinder) -> Cylinder {
        self.0.gen_range(0..=disk_max)
    }

    /// `count` cylinders uniformly in `[0, disk_max]`.  Duplicates are
    /// possible and intended.
    pub fn requests(&mut self, count: usize, disk_max: Cylinder) -> Vec<Cylinder> {
        (0..count).map(|_| self.cylinder(disk_max)).collect()
    }
}
