//! UI-facing bindings: pointer classification and catalog selection.

use log::{debug, info};

use crate::placement::ScreenPoint;
use crate::scene::TemplateId;

/// Distinguishes taps on UI chrome from taps into the 3D scene.
///
/// Implemented by the UI host; a tap it claims never reaches the tap
/// handlers.
pub trait PointerClassifier {
    fn is_over_ui(&self, screen: ScreenPoint) -> bool;
}

/// The furniture template currently chosen in the catalog UI.
///
/// The catalog panel writes the choice; the Add handler only reads it. No
/// selection means Add taps have nothing to place.
#[derive(Debug, Default)]
pub struct TemplateSelection {
    selected: Option<TemplateId>,
}

impl TemplateSelection {
    pub fn new() -> Self {
        Self { selected: None }
    }

    /// Sets the template the next Add tap will place.
    pub fn select(&mut self, template: TemplateId) {
        info!("selected template {template}");
        self.selected = Some(template);
    }

    /// Clears the selection; Add taps become no-ops until the next choice.
    pub fn clear(&mut self) {
        if self.selected.take().is_some() {
            debug!("template selection cleared");
        }
    }

    pub fn selected(&self) -> Option<&TemplateId> {
        self.selected.as_ref()
    }
}
