//! Audio-reactive scale modulation.

use crate::curve::SharedCurve;
use crate::params::ScaleAnimParams;

/// Linear interpolation with `t` clamped to \[0, 1\]
///
/// Clamping keeps the result inside `[a, b]` even when a curve overshoots.
pub fn lerp_clamped(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Turns a per-frame band amplitude into the spiral scale
#[derive(Debug, Clone)]
pub enum ScaleModulator {
    /// Scale animation disabled: always the base scale
    Fixed(f32),

    /// Amplitude lerps straight between the range bounds
    Direct { range: (f32, f32) },

    /// Amplitude drives a phase that samples `curve`
    Curve {
        range: (f32, f32),
        curve: SharedCurve,
        /// Phase advance per second at full amplitude
        rate: f32,
        /// Current phase in \[0, 1)
        phase: f32,
    },
}

impl ScaleModulator {
    pub fn new(base_scale: f32, params: &ScaleAnimParams) -> Self {
        if !params.enabled {
            return Self::Fixed(base_scale);
        }
        match (&params.curve, params.use_curve) {
            (Some(curve), true) => Self::Curve {
                range: params.range,
                curve: curve.clone(),
                rate: params.anim_rate,
                phase: 0.0,
            },
            _ => Self::Direct {
                range: params.range,
            },
        }
    }

    /// Advance by `dt` seconds and return the new scale
    pub fn update(&mut self, dt: f32, amplitude: f32) -> f32 {
        match self {
            Self::Fixed(scale) => *scale,
            Self::Direct { range } => lerp_clamped(range.0, range.1, amplitude),
            Self::Curve {
                range,
                curve,
                rate,
                phase,
            } => {
                *phase += *rate * amplitude * dt;
                // One wrap per call, even if the step covered several cycles
                if *phase >= 1.0 {
                    *phase -= 1.0;
                }
                lerp_clamped(range.0, range.1, curve.evaluate(*phase))
            }
        }
    }

    /// Curve phase, 0 for the stateless variants
    pub fn phase(&self) -> f32 {
        match self {
            Self::Curve { phase, .. } => *phase,
            _ => 0.0,
        }
    }

    pub fn reset(&mut self) {
        if let Self::Curve { phase, .. } = self {
            *phase = 0.0;
        }
    }
}
