use egui_dock::{NodeIndex, SurfaceIndex};
use serde::{Deserialize, Serialize};

use super::report_panel;
use crate::view::{
    FootprintView, HitResult, Model3dView, PreviewScene, PreviewSurface, SchematicView,
};

/// Define the tabs for the DockArea
#[derive(Clone, Serialize, Deserialize)]
pub enum TabKind {
    Schematic,
    Footprint,
    Model3d,
    Report,
}

/// Tab container struct for DockArea
#[derive(Clone, Serialize, Deserialize)]
pub struct Tab {
    pub kind: TabKind,
    #[serde(skip)]
    #[allow(dead_code)]
    pub surface: Option<SurfaceIndex>,
    #[serde(skip)]
    #[allow(dead_code)]
    pub node: Option<NodeIndex>,
}

impl Tab {
    pub fn new(kind: TabKind, surface: SurfaceIndex, node: NodeIndex) -> Self {
        Self {
            kind,
            surface: Some(surface),
            node: Some(node),
        }
    }

    pub fn title(&self) -> String {
        match self.kind {
            TabKind::Schematic => "Schematic".to_string(),
            TabKind::Footprint => "Footprint".to_string(),
            TabKind::Model3d => "3D Model".to_string(),
            TabKind::Report => "Consistency Report".to_string(),
        }
    }
}

/// Routes each tab to its surface and funnels hit-test results into one
/// pending slot. The selection itself is applied by the app after the dock
/// pass, so there is exactly one writer per frame.
pub struct TabViewer<'a> {
    pub scene: &'a PreviewScene,
    pub selected: Option<String>,
    pub schematic: &'a mut SchematicView,
    pub footprint: &'a mut FootprintView,
    pub model3d: &'a mut Model3dView,
    pub pending_hit: &'a mut Option<HitResult>,
}

impl egui_dock::TabViewer for TabViewer<'_> {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> egui::WidgetText {
        tab.title().into()
    }

    fn ui(&mut self, ui: &mut egui::Ui, tab: &mut Self::Tab) {
        let selected = self.selected.as_deref();
        let hit = match tab.kind {
            TabKind::Schematic => self.schematic.show(ui, self.scene, selected),
            TabKind::Footprint => self.footprint.show(ui, self.scene, selected),
            TabKind::Model3d => self.model3d.show(ui, self.scene, selected),
            TabKind::Report => {
                report_panel::show_report_panel(ui, self.scene.bundle.report.as_ref());
                None
            }
        };
        if let Some(hit) = hit {
            // Last write wins if multiple tabs report in one frame.
            *self.pending_hit = Some(hit);
        }
    }
}
