//! Spiral geometry and index stepping.

use crate::phyllotaxis::GOLDEN_ANGLE_DEG;

/// Spiral geometry and iteration bounds (immutable per run)
#[derive(Debug, Clone)]
pub struct SpiralParams {
    /// Angle between consecutive points (degrees)
    /// 0° is valid but degenerate: every point lands on the +x axis
    pub angle_increment_deg: f32,

    /// Radius multiplier (world units per sqrt(index))
    pub base_scale: f32,

    /// Index the animation starts (and sawtooth-restarts) from
    pub start_index: i64,

    /// Index change per step (sign gives the initial winding direction)
    pub step_size: i64,

    /// Steps per lerp cycle before the repeat/invert policy kicks in
    pub max_iteration: i64,
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self {
            angle_increment_deg: GOLDEN_ANGLE_DEG,
            base_scale: 1.0,
            start_index: 0,
            step_size: 1,
            max_iteration: 256,
        }
    }
}
