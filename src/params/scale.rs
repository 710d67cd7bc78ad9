//! Audio-driven spiral scale animation.

use crate::curve::{Curve, SharedCurve};

/// Scale animation parameters
#[derive(Debug, Clone)]
pub struct ScaleAnimParams {
    /// Replace the base scale with an audio-driven one
    pub enabled: bool,

    /// Sample `curve` at an audio-advanced phase instead of lerping directly
    pub use_curve: bool,

    /// Scale at modulation 0 and 1 (world units per sqrt(index))
    pub range: (f32, f32),

    /// Phase -> modulation curve, only read when `use_curve` is set
    pub curve: Option<SharedCurve>,

    /// Phase advance per second at full band amplitude (cycles per second)
    pub anim_rate: f32,

    /// Audio band that drives the scale
    pub audio_band: usize,
}

impl Default for ScaleAnimParams {
    fn default() -> Self {
        Self {
            enabled: false,
            use_curve: false,
            range: (0.5, 1.5),
            curve: Some(Curve::SmoothStep.shared()),
            anim_rate: 1.0,
            audio_band: 1,
        }
    }
}
