//! Playback pacing.

use ds_core::Cylinder;

/// Longest time a single segment may take, whatever the speed.
pub const MAX_SEGMENT_MS: f64 = 3_600_000.0;

/// Pacing parameters for segment animation.
///
/// ```text
/// duration_ms = min(MAX_SEGMENT_MS, max(min_segment_ms, ms_per_cylinder × |to − from| / speed))
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaybackConfig {
    /// Base animation time per cylinder travelled at speed 1.  Default: 8 ms.
    pub ms_per_cylinder: f64,
    /// Floor on every segment so zero-distance moves stay visible.
    /// Default: 120 ms.
    pub min_segment_ms: f64,
    /// Initial speed multiplier.  Default: 1.
    pub speed: f64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            ms_per_cylinder: 8.0,
            min_segment_ms:  120.0,
            speed:           1.0,
        }
    }
}

impl PlaybackConfig {
    /// Animation time for a move from `from` to `to` at `speed`.
    ///
    /// Always finite: tiny speeds or huge pacing values are capped at
    /// [`MAX_SEGMENT_MS`], and a NaN result (from NaN pacing values) counts
    /// as an instant move.
    pub fn segment_duration_ms(&self, from: Cylinder, to: Cylinder, speed: f64) -> f64 {
        let distance = from.abs_diff(to) as f64;
        let duration =
            (self.ms_per_cylinder * distance / normalize_speed(speed)).max(self.min_segment_ms);
        if duration.is_nan() { 0.0 } else { duration.min(MAX_SEGMENT_MS) }
    }
}

/// Speed multipliers must be finite and positive; anything else means 1.
#[inline]
pub fn normalize_speed(multiplier: f64) -> f64 {
    if multiplier.is_finite() && multiplier > 0.0 { multiplier } else { 1.0 }
}
