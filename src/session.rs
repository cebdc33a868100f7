//! Session composition: collaborator wiring and the per-frame sequence.

use thiserror::Error;

use crate::input::TapSubscription;
use crate::interaction::{InteractionModeController, Mode, PlacedObjectRegistry, DEFAULT_CAPTURE_RADIUS};
use crate::placement::{PlacementState, PlacementTracker, ScreenPoint, Viewport};
use crate::scene::{EntityId, EntityWorld, IndicatorSink, ScenePicker, SurfaceRaycaster, TemplateId};
use crate::ui::{PointerClassifier, TemplateSelection};

/// Errors raised while assembling a session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A required host collaborator was never supplied to the builder. The
    /// feature cannot run without it, so this is fatal at startup rather
    /// than a degraded mode.
    #[error("missing required collaborator: {0}")]
    MissingCollaborator(&'static str),
}

/// The assembled placement feature.
///
/// Owns the core components and the host collaborators; the entity world
/// and the viewport snapshot are passed into each call instead, since the
/// host also drives them from its render loop.
///
/// The driving sequence per frame is [`frame`](Self::frame): buffered taps
/// first (they arrived between ticks and see the previous tick's state),
/// then the tracker refresh and the move-follow update.
pub struct PlacementSession {
    tracker: PlacementTracker,
    controller: InteractionModeController,
    selection: TemplateSelection,
    raycaster: Box<dyn SurfaceRaycaster>,
    classifier: Box<dyn PointerClassifier>,
    picker: Box<dyn ScenePicker>,
    indicator: Option<Box<dyn IndicatorSink>>,
    taps: TapSubscription,
}

impl std::fmt::Debug for PlacementSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlacementSession").finish_non_exhaustive()
    }
}

impl PlacementSession {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Runs one frame: drains buffered taps, then ticks.
    pub fn frame(&mut self, viewport: Viewport, world: &mut dyn EntityWorld) {
        for tap in self.taps.drain() {
            self.handle_tap(tap, world);
        }
        self.tick(viewport, world);
    }

    /// One frame tick without tap handling: refreshes the placement state
    /// and indicator, then applies the move-follow update.
    pub fn tick(&mut self, viewport: Viewport, world: &mut dyn EntityWorld) {
        self.tracker
            .refresh(self.raycaster.as_ref(), viewport, self.indicator.as_deref_mut());
        self.controller.follow_moving(self.tracker.state(), world);
    }

    /// Handles a single tap immediately, outside the buffered flow.
    pub fn handle_tap(&mut self, tap: ScreenPoint, world: &mut dyn EntityWorld) {
        self.controller.handle_tap(
            tap,
            self.classifier.as_ref(),
            self.tracker.state(),
            &self.selection,
            self.picker.as_ref(),
            world,
        );
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.controller.set_mode(mode);
    }

    /// Applies a raw mode ordinal from the selector UI.
    pub fn apply_mode_command(&mut self, raw: u32) {
        self.controller.apply_mode_command(raw);
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    pub fn moving(&self) -> Option<EntityId> {
        self.controller.moving()
    }

    pub fn placement(&self) -> &PlacementState {
        self.tracker.state()
    }

    pub fn placed(&self) -> &PlacedObjectRegistry {
        self.controller.registry()
    }

    /// Sets the template the next Add tap will place. Called by the
    /// catalog UI.
    pub fn select_template(&mut self, template: TemplateId) {
        self.selection.select(template);
    }

    pub fn clear_template(&mut self) {
        self.selection.clear();
    }

    pub fn selected_template(&self) -> Option<&TemplateId> {
        self.selection.selected()
    }
}

/// Collects host collaborators before the session starts.
///
/// Required: surface raycaster, tap input, pointer classifier, scene
/// picker. The indicator sink is optional; without one the session skips
/// indicator updates.
pub struct SessionBuilder {
    raycaster: Option<Box<dyn SurfaceRaycaster>>,
    classifier: Option<Box<dyn PointerClassifier>>,
    picker: Option<Box<dyn ScenePicker>>,
    indicator: Option<Box<dyn IndicatorSink>>,
    taps: Option<TapSubscription>,
    capture_radius: f32,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            raycaster: None,
            classifier: None,
            picker: None,
            indicator: None,
            taps: None,
            capture_radius: DEFAULT_CAPTURE_RADIUS,
        }
    }

    pub fn raycaster(mut self, raycaster: impl SurfaceRaycaster + 'static) -> Self {
        self.raycaster = Some(Box::new(raycaster));
        self
    }

    pub fn pointer_classifier(mut self, classifier: impl PointerClassifier + 'static) -> Self {
        self.classifier = Some(Box::new(classifier));
        self
    }

    pub fn scene_picker(mut self, picker: impl ScenePicker + 'static) -> Self {
        self.picker = Some(Box::new(picker));
        self
    }

    pub fn indicator(mut self, indicator: impl IndicatorSink + 'static) -> Self {
        self.indicator = Some(Box::new(indicator));
        self
    }

    /// Wires the tap feed, usually from [`TapDispatcher::subscribe`].
    ///
    /// [`TapDispatcher::subscribe`]: crate::input::TapDispatcher::subscribe
    pub fn tap_input(mut self, taps: TapSubscription) -> Self {
        self.taps = Some(taps);
        self
    }

    /// Overrides the Move-mode capture radius, in world length units.
    pub fn capture_radius(mut self, radius: f32) -> Self {
        self.capture_radius = radius;
        self
    }

    /// Assembles the session, failing on the first missing required
    /// collaborator.
    pub fn build(self) -> Result<PlacementSession, SessionError> {
        let raycaster = self
            .raycaster
            .ok_or(SessionError::MissingCollaborator("surface raycaster"))?;
        let taps = self
            .taps
            .ok_or(SessionError::MissingCollaborator("tap input"))?;
        let classifier = self
            .classifier
            .ok_or(SessionError::MissingCollaborator("pointer classifier"))?;
        let picker = self
            .picker
            .ok_or(SessionError::MissingCollaborator("scene picker"))?;

        Ok(PlacementSession {
            tracker: PlacementTracker::new(),
            controller: InteractionModeController::with_capture_radius(self.capture_radius),
            selection: TemplateSelection::new(),
            raycaster,
            classifier,
            picker,
            indicator: self.indicator,
            taps,
        })
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
