//! Workspace error type.
//!
//! Scheduling and playback never fail; the only fallible operation here is
//! strict parsing of selectors.  Sub-crates with their own failure modes
//! (e.g. `ds-output`) define a separate enum.

use thiserror::Error;

/// The error type shared by `ds-core` and its dependents.
#[derive(Debug, Error)]
pub enum DiskError {
    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `ds-core` parsing.
pub type DiskResult<T> = Result<T, DiskError>;
