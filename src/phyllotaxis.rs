//! Phyllotaxis position generator.
//!
//! Point `n` of the spiral sits at angle `n * angle_increment` and radius
//! `scale * sqrt(n)`. With the golden angle (~137.5°) this gives the familiar
//! sunflower-head packing; an increment of 0° collapses every point onto the
//! positive x-axis.

use glam::Vec2;

/// Golden angle in degrees
pub const GOLDEN_ANGLE_DEG: f32 = 137.507_76;

/// Compute the spiral position for `index`
///
/// The angle uses the signed index while the radius uses `|index|`, so a
/// negative index mirrors the spiral across the x-axis instead of taking the
/// square root of a negative number.
pub fn generate(angle_increment_deg: f32, scale: f32, index: i64) -> Vec2 {
    // f64 keeps large multiples of 360° equivalent to 0°
    let angle = index as f64 * (angle_increment_deg as f64).to_radians();
    let radius = scale as f64 * (index.unsigned_abs() as f64).sqrt();
    Vec2::new(
        (radius * angle.cos()) as f32,
        (radius * angle.sin()) as f32,
    )
}
