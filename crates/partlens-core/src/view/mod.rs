pub mod footprint2d;
pub mod model3d;
pub mod schematic;

use egui::Color32;

use crate::bundle::ComponentBundle;
use crate::footprint::{parse_footprint, FootprintGeometry};
use crate::symbol::SymbolLayout;

pub use footprint2d::FootprintView;
pub use model3d::Model3dView;
pub use schematic::SchematicView;

/// Outcome of a pointer click inside a preview surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitResult {
    /// A pin/pad/lead identified by pin number.
    Pin(String),
    /// Empty space; clears the selection.
    Background,
}

/// Everything the three surfaces draw from, derived once per bundle load.
/// A selection change alone never rebuilds this.
#[derive(Debug, Clone, Default)]
pub struct PreviewScene {
    pub bundle: ComponentBundle,
    pub geometry: FootprintGeometry,
    pub symbol: SymbolLayout,
}

impl PreviewScene {
    pub fn from_bundle(bundle: ComponentBundle) -> Self {
        let geometry = parse_footprint(&bundle.footprint_text);
        let symbol = SymbolLayout::from_pins(&bundle.pins);
        log::info!(
            "Scene rebuilt: {} pins, {} pads, {} outline segments",
            bundle.pins.len(),
            geometry.pads.len(),
            geometry.outlines.len()
        );
        Self {
            bundle,
            geometry,
            symbol,
        }
    }
}

/// One of the three synchronized preview surfaces. Each renders purely from
/// (scene, selected pin) and reports hit-test results back; the selection
/// itself is owned by the caller, keeping single-writer discipline.
pub trait PreviewSurface {
    fn title(&self) -> &'static str;

    fn show(
        &mut self,
        ui: &mut egui::Ui,
        scene: &PreviewScene,
        selected: Option<&str>,
    ) -> Option<HitResult>;
}

// Shared palette across the three surfaces.
pub const COPPER_COLOR: Color32 = Color32::from_rgb(188, 120, 67);
pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(255, 200, 40);
pub const SILKSCREEN_COLOR: Color32 = Color32::from_rgb(210, 210, 210);
pub const BODY_COLOR: Color32 = Color32::from_rgb(60, 60, 66);
pub const LEAD_COLOR: Color32 = Color32::from_rgb(165, 165, 170);
pub const SYMBOL_OUTLINE_COLOR: Color32 = Color32::from_rgb(120, 40, 40);
pub const SYMBOL_FILL_COLOR: Color32 = Color32::from_rgb(255, 252, 235);
