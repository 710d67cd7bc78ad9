//! Response curves used to reshape linear modulation.
//!
//! A curve maps a normalized input to an output that is usually, but not
//! necessarily, normalized too. Callers that lerp between a min/max pair are
//! responsible for bounding curves that leave \[0, 1\].

use std::fmt;
use std::sync::Arc;

/// Opaque deterministic sampling function `t -> value`
pub trait CurveEvaluator: fmt::Debug + Send + Sync {
    fn evaluate(&self, t: f32) -> f32;
}

/// Curve handle stored in configuration (cheap to clone between instances)
pub type SharedCurve = Arc<dyn CurveEvaluator>;

/// Single key of a piecewise-linear curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
}

impl Keyframe {
    pub fn new(time: f32, value: f32) -> Self {
        Self { time, value }
    }
}

/// Built-in curve shapes
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    /// Identity: output equals input
    Linear,

    /// Same value everywhere
    Constant(f32),

    /// Hermite ease-in/ease-out on \[0, 1\]
    SmoothStep,

    /// Piecewise-linear through keys sorted by time
    Keyframes(Vec<Keyframe>),
}

impl Curve {
    /// Build a keyframe curve, sorting keys by time
    pub fn keyframes(mut keys: Vec<Keyframe>) -> Self {
        keys.sort_by(|a, b| a.time.total_cmp(&b.time));
        Self::Keyframes(keys)
    }

    /// Wrap into a shareable handle for configuration
    pub fn shared(self) -> SharedCurve {
        Arc::new(self)
    }
}

impl CurveEvaluator for Curve {
    fn evaluate(&self, t: f32) -> f32 {
        match self {
            Curve::Linear => t,
            Curve::Constant(v) => *v,
            Curve::SmoothStep => {
                let t = t.clamp(0.0, 1.0);
                t * t * (3.0 - 2.0 * t)
            }
            Curve::Keyframes(keys) => sample_keys(keys, t),
        }
    }
}

/// Empty key lists sample as 0.0; outside the key span the end value holds
fn sample_keys(keys: &[Keyframe], t: f32) -> f32 {
    let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
        return 0.0;
    };
    if t <= first.time {
        return first.value;
    }
    if t >= last.time {
        return last.value;
    }

    // First key strictly after t; guaranteed to exist and to be > 0 here
    let upper = keys.partition_point(|k| k.time <= t);
    let a = keys[upper - 1];
    let b = keys[upper];
    let span = b.time - a.time;
    if span <= f32::EPSILON {
        return b.value;
    }
    a.value + (b.value - a.value) * ((t - a.time) / span)
}

/// Closure-backed curve for closed-form responses
pub struct FnCurve<F>(pub F);

impl<F> fmt::Debug for FnCurve<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnCurve(..)")
    }
}

impl<F> CurveEvaluator for FnCurve<F>
where
    F: Fn(f32) -> f32 + Send + Sync,
{
    fn evaluate(&self, t: f32) -> f32 {
        (self.0)(t)
    }
}
