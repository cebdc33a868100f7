//! Spatial primitives shared across the placement pipeline.

use cgmath::{Quaternion, Vector2, Vector3};

/// A point in screen coordinates, in physical pixels.
pub type ScreenPoint = Vector2<f32>;

/// Rigid transform anchoring an object to a tracked surface.
///
/// Produced by the surface raycaster and consumed to position placed
/// objects and the placement indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub position: Vector3<f32>,
    pub rotation: Quaternion<f32>,
}

impl Pose {
    pub fn new(position: Vector3<f32>, rotation: Quaternion<f32>) -> Self {
        Self { position, rotation }
    }

    /// Pose at a position with identity orientation.
    pub fn at(position: Vector3<f32>) -> Self {
        Self {
            position,
            rotation: Quaternion::new(1.0, 0.0, 0.0, 0.0),
        }
    }
}

/// Snapshot of the render surface dimensions for one frame.
///
/// Handed to the tracker on every tick; the core never reads an ambient
/// camera or window to learn the screen size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Screen point for a normalized viewport coordinate (0..1 on both axes).
    pub fn to_screen(&self, normalized: Vector2<f32>) -> ScreenPoint {
        ScreenPoint::new(self.width * normalized.x, self.height * normalized.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_maps_normalized_coordinates() {
        let viewport = Viewport::new(1200.0, 800.0);
        let center = viewport.to_screen(Vector2::new(0.5, 0.5));
        assert_eq!(center, ScreenPoint::new(600.0, 400.0));

        let corner = viewport.to_screen(Vector2::new(1.0, 0.0));
        assert_eq!(corner, ScreenPoint::new(1200.0, 0.0));
    }
}
