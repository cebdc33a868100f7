//! Furniture-aware scene hit testing.

use super::entity::EntityId;
use super::traits::{EntityWorld, ScenePicker};
use crate::placement::ScreenPoint;

/// Resolves screen taps to placed furniture entities.
///
/// Placed entities may be composed of sub-parts (visual mesh plus collider)
/// where only the root carries the furniture capability, so a hit on a part
/// is resolved one level up to its owner before being accepted.
#[derive(Debug)]
pub struct SceneHitTester;

impl SceneHitTester {
    pub fn new() -> Self {
        Self
    }

    /// Returns the furniture entity under `screen`, or `None` when the tap
    /// hits empty space or geometry that is not placed furniture.
    pub fn hit_test(
        &self,
        screen: ScreenPoint,
        picker: &dyn ScenePicker,
        world: &dyn EntityWorld,
    ) -> Option<EntityId> {
        let hit = picker.pick(screen)?;

        if world.is_furniture(hit) {
            return Some(hit);
        }

        match world.parent(hit) {
            Some(parent) if world.is_furniture(parent) => Some(parent),
            _ => None,
        }
    }
}

impl Default for SceneHitTester {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Pose;
    use crate::scene::entity::TemplateId;
    use crate::testing::{MockWorld, StubPicker};
    use cgmath::Vector3;

    fn tap() -> ScreenPoint {
        ScreenPoint::new(320.0, 240.0)
    }

    #[test]
    fn returns_furniture_hit_directly() {
        let mut world = MockWorld::new();
        let chair = world.spawn(&TemplateId::new("chair"), Pose::at(Vector3::new(0.0, 0.0, 0.0)));

        let tester = SceneHitTester::new();
        let picker = StubPicker(Some(chair));

        assert_eq!(tester.hit_test(tap(), &picker, &world), Some(chair));
    }

    #[test]
    fn resolves_child_part_to_furniture_parent() {
        let mut world = MockWorld::new();
        let table = world.spawn(&TemplateId::new("table"), Pose::at(Vector3::new(0.0, 0.0, 0.0)));
        let leg = world.insert_part(table);

        let tester = SceneHitTester::new();
        let picker = StubPicker(Some(leg));

        assert_eq!(tester.hit_test(tap(), &picker, &world), Some(table));
    }

    #[test]
    fn rejects_non_furniture_geometry() {
        let mut world = MockWorld::new();
        let wall = world.insert_prop(Pose::at(Vector3::new(0.0, 0.0, 0.0)));

        let tester = SceneHitTester::new();
        let picker = StubPicker(Some(wall));

        assert_eq!(tester.hit_test(tap(), &picker, &world), None);
    }

    #[test]
    fn rejects_part_whose_parent_is_not_furniture() {
        let mut world = MockWorld::new();
        let wall = world.insert_prop(Pose::at(Vector3::new(0.0, 0.0, 0.0)));
        let trim = world.insert_part(wall);

        let tester = SceneHitTester::new();
        let picker = StubPicker(Some(trim));

        assert_eq!(tester.hit_test(tap(), &picker, &world), None);
    }

    #[test]
    fn empty_space_is_no_hit() {
        let world = MockWorld::new();
        let tester = SceneHitTester::new();
        let picker = StubPicker(None);

        assert_eq!(tester.hit_test(tap(), &picker, &world), None);
    }
}
