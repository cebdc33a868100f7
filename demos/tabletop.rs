//! Scripted walkthrough of the placement session against an in-memory host.
//!
//! Stands in for a real AR host: a "tracked surface" the script moves
//! around, a console indicator, and a minimal entity world. Run with
//! `RUST_LOG=debug` to watch the tap handling decisions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use cgmath::Vector3;

use furnish::input::TapDispatcher;
use furnish::placement::{Pose, ScreenPoint, Viewport};
use furnish::scene::{
    EntityId, EntityWorld, IndicatorSink, ScenePicker, SurfaceFilter, SurfaceHit, SurfaceRaycaster,
    TemplateId,
};
use furnish::ui::PointerClassifier;
use furnish::SessionBuilder;

/// The surface the fake AR runtime currently tracks.
#[derive(Default)]
struct TrackedSurface {
    pose: Option<Pose>,
}

type SharedSurface = Rc<RefCell<TrackedSurface>>;

struct DemoRaycaster(SharedSurface);

impl SurfaceRaycaster for DemoRaycaster {
    fn raycast(&self, _screen: ScreenPoint, _filter: SurfaceFilter) -> Vec<SurfaceHit> {
        self.0
            .borrow()
            .pose
            .map(|pose| SurfaceHit { pose })
            .into_iter()
            .collect()
    }
}

/// No UI chrome in a console demo; every tap goes to the scene.
struct NoUi;

impl PointerClassifier for NoUi {
    fn is_over_ui(&self, _screen: ScreenPoint) -> bool {
        false
    }
}

/// Picks whatever entity the script put under the "finger".
#[derive(Default)]
struct ScriptedPicker {
    under_finger: Rc<RefCell<Option<EntityId>>>,
}

impl ScenePicker for ScriptedPicker {
    fn pick(&self, _screen: ScreenPoint) -> Option<EntityId> {
        *self.under_finger.borrow()
    }
}

struct ConsoleIndicator;

impl IndicatorSink for ConsoleIndicator {
    fn set_active(&mut self, active: bool) {
        log::trace!("indicator active: {active}");
    }

    fn set_pose(&mut self, pose: Pose) {
        log::trace!(
            "indicator at ({:.2}, {:.2}, {:.2})",
            pose.position.x,
            pose.position.y,
            pose.position.z
        );
    }
}

struct DemoEntity {
    template: TemplateId,
    pose: Pose,
}

#[derive(Default)]
struct DemoWorld {
    next_id: u64,
    entities: HashMap<EntityId, DemoEntity>,
}

impl DemoWorld {
    fn describe(&self) -> String {
        if self.entities.is_empty() {
            return "scene is empty".into();
        }
        let mut lines: Vec<String> = self
            .entities
            .iter()
            .map(|(id, entity)| {
                format!(
                    "  {id}: {} at ({:.2}, {:.2}, {:.2})",
                    entity.template,
                    entity.pose.position.x,
                    entity.pose.position.y,
                    entity.pose.position.z
                )
            })
            .collect();
        lines.sort();
        lines.join("\n")
    }
}

impl EntityWorld for DemoWorld {
    fn spawn(&mut self, template: &TemplateId, pose: Pose) -> EntityId {
        self.next_id += 1;
        let id = EntityId::new(self.next_id);
        self.entities.insert(
            id,
            DemoEntity {
                template: template.clone(),
                pose,
            },
        );
        id
    }

    fn destroy(&mut self, id: EntityId) {
        self.entities.remove(&id);
    }

    fn set_pose(&mut self, id: EntityId, pose: Pose) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.pose = pose;
        }
    }

    fn position(&self, id: EntityId) -> Option<Vector3<f32>> {
        self.entities.get(&id).map(|entity| entity.pose.position)
    }

    fn is_furniture(&self, _id: EntityId) -> bool {
        // Everything this world spawns is placed furniture.
        true
    }

    fn parent(&self, _id: EntityId) -> Option<EntityId> {
        None
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let surface: SharedSurface = Rc::new(RefCell::new(TrackedSurface::default()));
    let under_finger = Rc::new(RefCell::new(None));
    let dispatcher = TapDispatcher::new();

    let mut session = SessionBuilder::new()
        .raycaster(DemoRaycaster(surface.clone()))
        .pointer_classifier(NoUi)
        .scene_picker(ScriptedPicker {
            under_finger: under_finger.clone(),
        })
        .indicator(ConsoleIndicator)
        .tap_input(dispatcher.subscribe())
        .build()?;

    let mut world = DemoWorld::default();
    let viewport = Viewport::new(1200.0, 800.0);
    let tap = ScreenPoint::new(600.0, 400.0);

    println!("-- tap before any surface is tracked: nothing happens");
    session.select_template(TemplateId::new("models/armchair.obj"));
    dispatcher.dispatch(tap);
    session.frame(viewport, &mut world);
    println!("{}", world.describe());

    println!("-- surface found; place an armchair and a side table");
    surface.borrow_mut().pose = Some(Pose::at(Vector3::new(0.0, 0.0, -1.0)));
    session.frame(viewport, &mut world);
    dispatcher.dispatch(tap);
    session.frame(viewport, &mut world);

    surface.borrow_mut().pose = Some(Pose::at(Vector3::new(0.8, 0.0, -1.2)));
    session.select_template(TemplateId::new("models/side_table.obj"));
    session.frame(viewport, &mut world);
    dispatcher.dispatch(tap);
    session.frame(viewport, &mut world);
    println!("{}", world.describe());

    println!("-- carry the side table to a new spot");
    session.apply_mode_command(2);
    dispatcher.dispatch(tap); // pick up: cursor is over the table
    session.frame(viewport, &mut world);

    surface.borrow_mut().pose = Some(Pose::at(Vector3::new(-0.5, 0.0, -0.7)));
    session.frame(viewport, &mut world);
    dispatcher.dispatch(tap); // drop
    session.frame(viewport, &mut world);
    println!("{}", world.describe());

    println!("-- delete the armchair");
    session.apply_mode_command(1);
    let armchair = session
        .placed()
        .iter()
        .find(|&id| world.position(id) == Some(Vector3::new(0.0, 0.0, -1.0)));
    *under_finger.borrow_mut() = armchair;
    dispatcher.dispatch(tap);
    session.frame(viewport, &mut world);
    println!("{}", world.describe());

    println!("-- done: {} object(s) remain placed", session.placed().len());
    Ok(())
}
