//! Mode-gated tap interpretation and placed-object bookkeeping.

pub mod controller;
pub mod mode;
pub mod registry;

pub use controller::{InteractionModeController, DEFAULT_CAPTURE_RADIUS};
pub use mode::Mode;
pub use registry::PlacedObjectRegistry;
