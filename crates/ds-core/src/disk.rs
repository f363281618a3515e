//! Address space and policy selectors.
//!
//! A disk is modelled as the inclusive cylinder range `[0, disk_max]`.  The
//! head sweeps in one of two [`Direction`]s and requests are ordered by one of
//! two [`Algorithm`]s.

use std::fmt;
use std::str::FromStr;

use crate::{DiskError, DiskResult};

/// A cylinder number.  Valid values lie in `[0, disk_max]`.
pub type Cylinder = u32;

/// Disk bound used when the raw input is missing or unusable.
pub const DEFAULT_DISK_MAX: Cylinder = 199;

// ── Direction ─────────────────────────────────────────────────────────────────

/// Initial sweep direction of the head.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Direction {
    /// Towards `disk_max` (`+1`).
    #[default]
    Increasing,
    /// Towards cylinder 0 (`-1`).
    Decreasing,
}

impl Direction {
    /// Exactly `-1` maps to `Decreasing`; every other value, NaN included,
    /// maps to `Increasing`.
    #[inline]
    pub fn from_sign(sign: f64) -> Self {
        if sign == -1.0 { Direction::Decreasing } else { Direction::Increasing }
    }

    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Increasing => 1,
            Direction::Decreasing => -1,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:+}", self.sign())
    }
}

/// Strict parser: accepts `1`, `+1`, `-1`, `up`, `down`, `increasing`,
/// `decreasing`.  Use `ds_engine::coerce_direction` for permissive input.
impl FromStr for Direction {
    type Err = DiskError;

    fn from_str(s: &str) -> DiskResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "+1" | "up" | "increasing" => Ok(Direction::Increasing),
            "-1" | "down" | "decreasing" => Ok(Direction::Decreasing),
            other => Err(DiskError::Parse(format!(
                "invalid direction {other:?}: expected \"+1\" or \"-1\""
            ))),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Direction {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(self.sign())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Direction {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match <i64 as serde::Deserialize>::deserialize(deserializer)? {
            1 => Ok(Direction::Increasing),
            -1 => Ok(Direction::Decreasing),
            n => Err(serde::de::Error::custom(format!("direction must be 1 or -1, got {n}"))),
        }
    }
}

// ── Algorithm ─────────────────────────────────────────────────────────────────

/// Sweep scheduling policy.
///
/// The discriminant doubles as an index into the engine's ordering table.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Algorithm {
    /// Elevator sweep: service the current direction, then reverse.
    #[default]
    Scan = 0,
    /// Circular sweep: service the current direction, jump to the opposite
    /// end, and continue in the same direction.
    CScan = 1,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Scan, Algorithm::CScan];

    /// Position of this variant in [`Algorithm::ALL`].
    #[inline(always)]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Machine tag, as used on the command line and in exported traces.
    pub fn tag(self) -> &'static str {
        match self {
            Algorithm::Scan => "scan",
            Algorithm::CScan => "cscan",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Scan => "SCAN",
            Algorithm::CScan => "C-SCAN",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Algorithm {
    type Err = DiskError;

    fn from_str(s: &str) -> DiskResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "scan" => Ok(Algorithm::Scan),
            "cscan" | "c-scan" => Ok(Algorithm::CScan),
            other => Err(DiskError::Parse(format!(
                "invalid algorithm {other:?}: expected \"scan\" or \"cscan\""
            ))),
        }
    }
}
