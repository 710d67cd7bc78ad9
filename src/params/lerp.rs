//! Audio-driven lerp between consecutive spiral points.

use crate::curve::{Curve, SharedCurve};

/// Lerp (interpolating) mode parameters
#[derive(Debug, Clone)]
pub struct LerpParams {
    /// Interpolate between points instead of jumping every frame
    pub enabled: bool,

    /// Lerp rate bounds (segments per second) at curve output 0 and 1
    pub speed_range: (f32, f32),

    /// Shapes band amplitude before it picks a rate from `speed_range`
    pub rate_curve: Option<SharedCurve>,

    /// Audio band that drives the rate
    pub audio_band: usize,

    /// Keep animating after `max_iteration` steps
    pub repeat: bool,

    /// On repeat, walk back toward the start instead of jumping to it
    pub invert: bool,
}

impl Default for LerpParams {
    fn default() -> Self {
        Self {
            enabled: true,
            speed_range: (1.0, 8.0),
            rate_curve: Some(Curve::Linear.shared()),
            audio_band: 0,
            repeat: true,
            invert: true,
        }
    }
}
