//! Timer-driven interpolation between two spiral points.

use glam::Vec2;

use crate::curve::CurveEvaluator;
use crate::modulation::lerp_clamped;

/// Lerp rate for the current frame: band amplitude shaped by `curve`,
/// then mapped onto `speed_range`
pub fn audio_rate(speed_range: (f32, f32), curve: &dyn CurveEvaluator, amplitude: f32) -> f32 {
    lerp_clamped(speed_range.0, speed_range.1, curve.evaluate(amplitude))
}

/// Normalized timer moving a point from `start` to `end`
#[derive(Debug, Clone, Default)]
pub struct InterpolationEngine {
    start: Vec2,
    end: Vec2,
    timer: f32,
}

impl InterpolationEngine {
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self {
            start,
            end,
            timer: 0.0,
        }
    }

    /// Replace the segment without touching the timer (the overshoot past a
    /// wrap carries into the next segment)
    pub fn retarget(&mut self, start: Vec2, end: Vec2) {
        self.start = start;
        self.end = end;
    }

    /// Advance by `dt * rate`; returns the interpolated point and whether
    /// the timer wrapped
    ///
    /// Only one wrap is processed per call: a step of two or more segments
    /// still subtracts exactly 1.
    pub fn advance(&mut self, dt: f32, rate: f32) -> (Vec2, bool) {
        self.timer += dt * rate;
        let position = self.start.lerp(self.end, self.timer.clamp(0.0, 1.0));
        if self.timer >= 1.0 {
            self.timer -= 1.0;
            (position, true)
        } else {
            (position, false)
        }
    }

    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    pub fn reset(&mut self, start: Vec2, end: Vec2) {
        *self = Self::new(start, end);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curve::Curve;

    #[test]
    fn test_advance_interpolates_linearly() {
        let mut engine = InterpolationEngine::new(Vec2::ZERO, Vec2::new(4.0, 2.0));
        let (p, wrapped) = engine.advance(0.25, 1.0);
        assert!(!wrapped);
        assert_eq!(p, Vec2::new(1.0, 0.5));
        let (p, wrapped) = engine.advance(0.5, 1.0);
        assert!(!wrapped);
        assert_eq!(p, Vec2::new(3.0, 1.5));
    }

    #[test]
    fn test_wrap_lands_on_end_and_keeps_remainder() {
        let mut engine = InterpolationEngine::new(Vec2::ZERO, Vec2::X);
        let (p, wrapped) = engine.advance(0.5, 2.5);
        assert!(wrapped);
        assert_eq!(p, Vec2::X);
        assert!((engine.timer() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_single_wrap_per_call() {
        let mut engine = InterpolationEngine::new(Vec2::ZERO, Vec2::X);
        let (_, wrapped) = engine.advance(1.0, 3.5);
        assert!(wrapped);
        assert!((engine.timer() - 2.5).abs() < 1e-6);

        // Still past the end on the next call, so it wraps again
        let (p, wrapped) = engine.advance(0.0, 1.0);
        assert!(wrapped);
        assert_eq!(p, Vec2::X);
        assert!((engine.timer() - 1.5).abs() < 1e-6);
    }

    #[test]
    fn test_zero_rate_holds_position() {
        let mut engine = InterpolationEngine::new(Vec2::ZERO, Vec2::ONE);
        engine.advance(0.5, 1.0);
        let (p, wrapped) = engine.advance(10.0, 0.0);
        assert!(!wrapped);
        assert_eq!(p, Vec2::splat(0.5));
    }

    #[test]
    fn test_retarget_keeps_timer() {
        let mut engine = InterpolationEngine::new(Vec2::ZERO, Vec2::X);
        engine.advance(0.25, 1.0);
        engine.retarget(Vec2::X, Vec2::new(2.0, 0.0));
        assert_eq!(engine.timer(), 0.25);
        assert_eq!(engine.start(), Vec2::X);
        assert_eq!(engine.end(), Vec2::new(2.0, 0.0));
    }

    #[test]
    fn test_audio_rate_maps_through_curve() {
        assert_eq!(audio_rate((1.0, 5.0), &Curve::Linear, 0.0), 1.0);
        assert_eq!(audio_rate((1.0, 5.0), &Curve::Linear, 0.5), 3.0);
        assert_eq!(audio_rate((1.0, 5.0), &Curve::Constant(1.0), 0.0), 5.0);
    }
}
