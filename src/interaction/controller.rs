//! Mode-gated tap interpretation and move tracking.

use log::{debug, info, warn};

use super::mode::Mode;
use super::registry::PlacedObjectRegistry;
use crate::placement::{PlacementState, ScreenPoint};
use crate::scene::{EntityId, EntityWorld, SceneHitTester, ScenePicker};
use crate::ui::{PointerClassifier, TemplateSelection};

/// Default capture radius for picking up a placed entity in Move mode, in
/// world length units.
pub const DEFAULT_CAPTURE_RADIUS: f32 = 0.2;

/// Interprets taps according to the active mode and tracks an in-progress
/// move.
///
/// Owns the placed-object registry and the moving selection; every other
/// collaborator is borrowed per call. Rejected taps (over UI, off-plane,
/// nothing nearby) are expected user states and stay silent.
pub struct InteractionModeController {
    mode: Mode,
    moving: Option<EntityId>,
    registry: PlacedObjectRegistry,
    hit_tester: SceneHitTester,
    capture_radius: f32,
}

impl InteractionModeController {
    pub fn new() -> Self {
        Self::with_capture_radius(DEFAULT_CAPTURE_RADIUS)
    }

    pub fn with_capture_radius(capture_radius: f32) -> Self {
        Self {
            mode: Mode::default(),
            moving: None,
            registry: PlacedObjectRegistry::new(),
            hit_tester: SceneHitTester::new(),
            capture_radius,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Handle of the entity currently being moved, if a move is active.
    pub fn moving(&self) -> Option<EntityId> {
        self.moving
    }

    pub fn registry(&self) -> &PlacedObjectRegistry {
        &self.registry
    }

    /// Switches the active mode.
    ///
    /// A move still in progress is finalized in place: the entity keeps its
    /// last tracked pose and stays in the registry. This holds for every
    /// mode command, including a redundant switch back into Move.
    pub fn set_mode(&mut self, mode: Mode) {
        if let Some(id) = self.moving.take() {
            debug!("mode change to {mode:?} finalized move of {id}");
        }
        self.mode = mode;
    }

    /// Applies a raw mode ordinal from the selector UI (0 Add, 1 Delete,
    /// 2 Move). Out-of-range values leave the mode unchanged.
    pub fn apply_mode_command(&mut self, raw: u32) {
        match Mode::from_ordinal(raw) {
            Some(mode) => self.set_mode(mode),
            None => warn!("ignoring unknown mode ordinal {raw}"),
        }
    }

    /// Handles one tap.
    ///
    /// Taps the UI claims are dropped before dispatch; the rest route to
    /// the handler for the active mode.
    pub fn handle_tap(
        &mut self,
        tap: ScreenPoint,
        classifier: &dyn PointerClassifier,
        state: &PlacementState,
        selection: &TemplateSelection,
        picker: &dyn ScenePicker,
        world: &mut dyn EntityWorld,
    ) {
        if classifier.is_over_ui(tap) {
            debug!("tap at ({:.1}, {:.1}) consumed by UI", tap.x, tap.y);
            return;
        }

        match self.mode {
            Mode::Add => self.place(state, selection, world),
            Mode::Delete => self.delete(tap, picker, world),
            Mode::Move => self.pick_or_drop(state, world),
        }
    }

    /// Per-tick follow update. While a move is active and the placement
    /// pose is valid the entity tracks the cursor; an invalid pose holds
    /// the entity where it is instead of snapping it away.
    pub fn follow_moving(&mut self, state: &PlacementState, world: &mut dyn EntityWorld) {
        let Some(id) = self.moving else {
            return;
        };

        if let Some(pose) = state.pose() {
            world.set_pose(id, pose);
        }
    }

    fn place(
        &mut self,
        state: &PlacementState,
        selection: &TemplateSelection,
        world: &mut dyn EntityWorld,
    ) {
        let Some(pose) = state.pose() else {
            debug!("cannot place: no valid placement pose");
            return;
        };
        let Some(template) = selection.selected() else {
            debug!("cannot place: no template selected");
            return;
        };

        let id = world.spawn(template, pose);
        self.registry.add(id);
        info!("placed {template} as {id}");
    }

    fn delete(&mut self, tap: ScreenPoint, picker: &dyn ScenePicker, world: &mut dyn EntityWorld) {
        let Some(id) = self.hit_tester.hit_test(tap, picker, world) else {
            debug!("delete tap hit nothing placed");
            return;
        };

        // Registry removal and scene destruction stay together so callers
        // never observe a handle in one but not the other.
        self.registry.remove(id);
        world.destroy(id);
        info!("deleted {id}");
    }

    fn pick_or_drop(&mut self, state: &PlacementState, world: &mut dyn EntityWorld) {
        if let Some(id) = self.moving.take() {
            debug!("dropped {id} at its current pose");
            return;
        }

        let Some(pose) = state.pose() else {
            debug!("cannot pick up: no valid placement pose");
            return;
        };

        match self
            .registry
            .find_near(pose.position, self.capture_radius, world)
        {
            Some(id) => {
                debug!("picked up {id} for moving");
                self.moving = Some(id);
            }
            None => debug!(
                "no placed entity within {} of the cursor",
                self.capture_radius
            ),
        }
    }
}

impl Default for InteractionModeController {
    fn default() -> Self {
        Self::new()
    }
}
