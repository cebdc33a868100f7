//! Placement pose tracking and spatial primitives.

pub mod pose;
pub mod tracker;

pub use pose::{Pose, ScreenPoint, Viewport};
pub use tracker::{PlacementState, PlacementTracker};
