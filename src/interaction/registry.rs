//! Bookkeeping for placed furniture instances.

use cgmath::{InnerSpace, Vector3};

use crate::scene::{EntityId, EntityWorld};

/// Insertion-ordered set of currently placed entity handles.
///
/// Placement order is preserved so lookups are deterministic, but the order
/// carries no other meaning. Expected counts are in the tens, so every
/// lookup is a linear scan.
#[derive(Debug, Default)]
pub struct PlacedObjectRegistry {
    handles: Vec<EntityId>,
}

impl PlacedObjectRegistry {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    /// Appends a freshly placed handle. Handles are unique by construction,
    /// so no duplicate check is made.
    pub fn add(&mut self, id: EntityId) {
        self.handles.push(id);
    }

    /// Removes the first matching handle. Removing an absent handle is a
    /// no-op.
    pub fn remove(&mut self, id: EntityId) {
        if let Some(index) = self.handles.iter().position(|&h| h == id) {
            self.handles.remove(index);
        }
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.handles.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.handles.iter().copied()
    }

    /// Nearest placed entity within `radius` of `point`, or `None`.
    ///
    /// Equidistant candidates resolve to the earliest-placed one.
    pub fn find_near(
        &self,
        point: Vector3<f32>,
        radius: f32,
        world: &dyn EntityWorld,
    ) -> Option<EntityId> {
        let mut closest: Option<(EntityId, f32)> = None;

        for &id in &self.handles {
            let position = match world.position(id) {
                Some(position) => position,
                None => continue,
            };

            let distance = (position - point).magnitude();
            if distance <= radius && closest.map_or(true, |(_, best)| distance < best) {
                closest = Some((id, distance));
            }
        }

        closest.map(|(id, _)| id)
    }
}
