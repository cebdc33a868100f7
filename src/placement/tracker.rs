//! Per-frame placement pose tracking.

use cgmath::Vector2;

use super::pose::{Pose, Viewport};
use crate::scene::{IndicatorSink, SurfaceFilter, SurfaceRaycaster};

/// The placement cursor is anchored to the viewport center.
const VIEWPORT_ANCHOR: Vector2<f32> = Vector2 { x: 0.5, y: 0.5 };

/// Placement pose for the current frame.
///
/// Recomputed wholesale every tick, never partially updated. When the last
/// raycast found no surface the stored pose is stale; `pose()` hides it
/// rather than handing out a position that no longer matches the scene.
#[derive(Debug, Clone, Copy)]
pub struct PlacementState {
    pose: Pose,
    valid: bool,
}

impl PlacementState {
    /// The current placement pose, or `None` when the last tick found no
    /// tracked surface under the cursor.
    pub fn pose(&self) -> Option<Pose> {
        if self.valid {
            Some(self.pose)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

impl Default for PlacementState {
    fn default() -> Self {
        Self {
            pose: Pose::at(cgmath::Vector3::new(0.0, 0.0, 0.0)),
            valid: false,
        }
    }
}

/// Keeps the placement pose and the indicator in sync with the tracked
/// surface under the viewport center.
#[derive(Debug, Default)]
pub struct PlacementTracker {
    state: PlacementState,
}

impl PlacementTracker {
    pub fn new() -> Self {
        Self {
            state: PlacementState::default(),
        }
    }

    pub fn state(&self) -> &PlacementState {
        &self.state
    }

    /// Recomputes the placement state from the surface under the viewport
    /// center and mirrors the result onto the indicator.
    ///
    /// The first reported hit is canonical; the raycaster contract orders
    /// hits nearest-first. A raycaster that reports nothing marks the state
    /// invalid but leaves the stored pose untouched.
    pub fn refresh(
        &mut self,
        raycaster: &dyn SurfaceRaycaster,
        viewport: Viewport,
        indicator: Option<&mut (dyn IndicatorSink + '_)>,
    ) {
        let center = viewport.to_screen(VIEWPORT_ANCHOR);
        let hits = raycaster.raycast(center, SurfaceFilter::TrackedPlanes);

        self.state.valid = !hits.is_empty();
        if let Some(hit) = hits.first() {
            self.state.pose = hit.pose;
        }

        if let Some(indicator) = indicator {
            indicator.set_active(self.state.valid);
            if self.state.valid {
                indicator.set_pose(self.state.pose);
            }
        }
    }
}
