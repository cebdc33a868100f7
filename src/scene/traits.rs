//! Trait seams for host-supplied scene capabilities.
//!
//! The core never talks to an AR runtime or a renderer directly. The host
//! implements these traits over whatever tracking and rendering stack it
//! runs on and hands them to the session at build time.

use cgmath::Vector3;

use super::entity::{EntityId, TemplateId};
use crate::placement::{Pose, ScreenPoint};

/// Which surfaces a raycast may land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceFilter {
    /// Tracked planar surfaces only.
    TrackedPlanes,
    /// Any detected surface geometry.
    AnySurface,
}

/// One surface intersection reported by the raycaster.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceHit {
    pub pose: Pose,
}

/// Raycast against tracked real-world surfaces.
///
/// An empty result means no placeable surface under that point. Hits are
/// expected nearest-first; the core takes the first hit as canonical and
/// does not re-sort.
pub trait SurfaceRaycaster {
    fn raycast(&self, screen: ScreenPoint, filter: SurfaceFilter) -> Vec<SurfaceHit>;
}

/// Raw 3D picking primitive.
///
/// Returns the first physical-geometry entity under a screen point, across
/// the whole scene rather than just tracked planes.
pub trait ScenePicker {
    fn pick(&self, screen: ScreenPoint) -> Option<EntityId>;
}

/// Sink for the placement indicator visuals.
pub trait IndicatorSink {
    fn set_active(&mut self, active: bool);
    fn set_pose(&mut self, pose: Pose);
}

/// Entity lifecycle and transform access supplied by the host scene.
///
/// `spawn` records the furniture capability on the new entity once, at
/// creation; hit-test resolution asks `is_furniture` instead of comparing
/// tag strings.
pub trait EntityWorld {
    /// Instantiates `template` at `pose` and returns the new handle.
    fn spawn(&mut self, template: &TemplateId, pose: Pose) -> EntityId;

    /// Removes the entity from the scene. Unknown handles are ignored.
    fn destroy(&mut self, id: EntityId);

    fn set_pose(&mut self, id: EntityId, pose: Pose);

    /// World-space position, or `None` if the handle is no longer live.
    fn position(&self, id: EntityId) -> Option<Vector3<f32>>;

    fn is_furniture(&self, id: EntityId) -> bool;

    /// Logical parent of a sub-part, if any.
    fn parent(&self, id: EntityId) -> Option<EntityId>;
}
