//! Output side: where emitted positions go.

use std::collections::VecDeque;

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Linear RGBA trail tint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailColor {
    pub rgba: [f32; 4],
}

impl TrailColor {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { rgba: [r, g, b, a] }
    }
}

impl Default for TrailColor {
    fn default() -> Self {
        Self::new(1.0, 0.8, 0.3, 1.0) // warm sunflower yellow
    }
}

/// Receives one position per tick from an animation instance
pub trait VisualSink {
    /// One-time appearance setup, called on activation
    fn configure(&mut self, _color: TrailColor) {}

    /// New marker position (z is always 0)
    fn emit(&mut self, position: Vec3);
}

impl VisualSink for Vec<Vec3> {
    fn emit(&mut self, position: Vec3) {
        self.push(position);
    }
}

/// Trail point laid out for direct GPU upload (position + color)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct TrailVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

/// Bounded trail of recent positions, oldest dropped first
#[derive(Debug, Clone)]
pub struct TrailRecorder {
    vertices: VecDeque<TrailVertex>,
    capacity: usize,
    color: TrailColor,
}

impl TrailRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            vertices: VecDeque::with_capacity(capacity),
            capacity,
            color: TrailColor::default(),
        }
    }

    pub fn color(&self) -> TrailColor {
        self.color
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Most recent position, if any
    pub fn head(&self) -> Option<Vec3> {
        self.vertices.back().map(|v| Vec3::from_array(v.position))
    }

    /// Oldest-to-newest vertices
    pub fn vertices(&self) -> impl Iterator<Item = &TrailVertex> {
        self.vertices.iter()
    }

    /// Contiguous vertex bytes ready for a vertex buffer
    pub fn as_bytes(&mut self) -> &[u8] {
        bytemuck::cast_slice(self.vertices.make_contiguous())
    }
}

impl VisualSink for TrailRecorder {
    fn configure(&mut self, color: TrailColor) {
        self.color = color;
    }

    fn emit(&mut self, position: Vec3) {
        if self.capacity == 0 {
            return;
        }
        if self.vertices.len() == self.capacity {
            self.vertices.pop_front();
        }
        self.vertices.push_back(TrailVertex {
            position: position.to_array(),
            color: self.color.rgba,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trail_drops_oldest() {
        let mut trail = TrailRecorder::new(3);
        for i in 0..5 {
            trail.emit(Vec3::new(i as f32, 0.0, 0.0));
        }
        assert_eq!(trail.len(), 3);
        let xs: Vec<f32> = trail.vertices().map(|v| v.position[0]).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
        assert_eq!(trail.head(), Some(Vec3::new(4.0, 0.0, 0.0)));
    }

    #[test]
    fn test_trail_uses_configured_color() {
        let mut trail = TrailRecorder::new(4);
        let color = TrailColor::new(0.1, 0.2, 0.3, 0.4);
        trail.configure(color);
        trail.emit(Vec3::ONE);
        assert_eq!(trail.color(), color);
        assert_eq!(trail.vertices().next().map(|v| v.color), Some(color.rgba));
    }

    #[test]
    fn test_trail_bytes_match_vertex_layout() {
        let mut trail = TrailRecorder::new(8);
        trail.emit(Vec3::X);
        trail.emit(Vec3::Y);
        assert_eq!(
            trail.as_bytes().len(),
            2 * std::mem::size_of::<TrailVertex>()
        );
    }

    #[test]
    fn test_zero_capacity_records_nothing() {
        let mut trail = TrailRecorder::new(0);
        trail.emit(Vec3::ONE);
        assert!(trail.is_empty());
    }
}
