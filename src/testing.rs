//! Shared in-memory host doubles for unit tests.

use std::collections::HashMap;

use cgmath::Vector3;

use crate::placement::{Pose, ScreenPoint};
use crate::scene::{
    EntityId, EntityWorld, IndicatorSink, ScenePicker, SurfaceFilter, SurfaceHit, SurfaceRaycaster,
    TemplateId,
};

pub struct MockEntity {
    pub pose: Pose,
    pub furniture: bool,
    pub parent: Option<EntityId>,
}

/// Minimal entity world: a handle map plus a mutation counter so tests can
/// assert that rejected taps touched nothing.
pub struct MockWorld {
    next_id: u64,
    entities: HashMap<EntityId, MockEntity>,
    mutations: usize,
}

impl MockWorld {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: HashMap::new(),
            mutations: 0,
        }
    }

    fn insert(&mut self, entity: MockEntity) -> EntityId {
        let id = EntityId::new(self.next_id);
        self.next_id += 1;
        self.entities.insert(id, entity);
        id
    }

    /// Inserts a non-furniture prop (a wall, say) for hit-test negatives.
    pub fn insert_prop(&mut self, pose: Pose) -> EntityId {
        self.insert(MockEntity {
            pose,
            furniture: false,
            parent: None,
        })
    }

    /// Inserts a bare sub-part owned by `parent`.
    pub fn insert_part(&mut self, parent: EntityId) -> EntityId {
        let pose = self.entities[&parent].pose;
        self.insert(MockEntity {
            pose,
            furniture: false,
            parent: Some(parent),
        })
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// True while no spawn, destroy, or pose write has happened.
    pub fn is_unchanged(&self) -> bool {
        self.mutations == 0
    }
}

impl EntityWorld for MockWorld {
    fn spawn(&mut self, _template: &TemplateId, pose: Pose) -> EntityId {
        self.mutations += 1;
        self.insert(MockEntity {
            pose,
            furniture: true,
            parent: None,
        })
    }

    fn destroy(&mut self, id: EntityId) {
        self.mutations += 1;
        self.entities.remove(&id);
    }

    fn set_pose(&mut self, id: EntityId, pose: Pose) {
        self.mutations += 1;
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.pose = pose;
        }
    }

    fn position(&self, id: EntityId) -> Option<Vector3<f32>> {
        self.entities.get(&id).map(|entity| entity.pose.position)
    }

    fn is_furniture(&self, id: EntityId) -> bool {
        self.entities.get(&id).map_or(false, |entity| entity.furniture)
    }

    fn parent(&self, id: EntityId) -> Option<EntityId> {
        self.entities.get(&id).and_then(|entity| entity.parent)
    }
}

/// Raycaster reporting a single fixed surface, or nothing.
pub struct StubRaycaster(pub Option<Pose>);

impl SurfaceRaycaster for StubRaycaster {
    fn raycast(&self, _screen: ScreenPoint, _filter: SurfaceFilter) -> Vec<SurfaceHit> {
        self.0.map(|pose| SurfaceHit { pose }).into_iter().collect()
    }
}

/// Classifier with a fixed over-UI answer.
pub struct StubClassifier(pub bool);

impl crate::ui::PointerClassifier for StubClassifier {
    fn is_over_ui(&self, _screen: ScreenPoint) -> bool {
        self.0
    }
}

/// Picker returning a fixed raw hit.
pub struct StubPicker(pub Option<EntityId>);

impl ScenePicker for StubPicker {
    fn pick(&self, _screen: ScreenPoint) -> Option<EntityId> {
        self.0
    }
}

/// Indicator sink that records the last values it was given.
#[derive(Default)]
pub struct RecordingIndicator {
    pub active: bool,
    pub pose: Option<Pose>,
}

impl IndicatorSink for RecordingIndicator {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = Some(pose);
    }
}
