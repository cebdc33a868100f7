//! Scene-facing types: entity handles, host capability traits, and
//! furniture-aware hit testing.

pub mod entity;
pub mod hit_test;
pub mod traits;

pub use entity::{EntityId, TemplateId};
pub use hit_test::SceneHitTester;
pub use traits::{
    EntityWorld, IndicatorSink, ScenePicker, SurfaceFilter, SurfaceHit, SurfaceRaycaster,
};
