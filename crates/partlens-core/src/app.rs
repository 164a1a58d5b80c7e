use std::fs;

use egui_dock::{DockArea, DockState, NodeIndex, Style, SurfaceIndex};

use crate::bundle::{demo_bundle, ComponentBundle};
use crate::export::{suggested_filename, write_blob, ExportKind};
use crate::selection::SelectionState;
use crate::ui::{self, AboutPanel, Tab, TabKind, TabViewer};
use crate::view::{FootprintView, Model3dView, PreviewScene, SchematicView};

/// The main application struct: owns the current scene (bundle + derived
/// geometry/layout), the shared selection, and the three preview surfaces.
pub struct PartLensApp {
    scene: PreviewScene,
    selection: SelectionState,

    schematic: SchematicView,
    footprint: FootprintView,
    model3d: Model3dView,

    // Dock state
    dock_state: DockState<Tab>,

    status_line: String,

    // Modal states
    show_about_modal: bool,
}

impl Drop for PartLensApp {
    fn drop(&mut self) {
        // Save dock state when application closes
        self.save_dock_state();
    }
}

impl Default for PartLensApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PartLensApp {
    pub fn new() -> Self {
        let bundle = demo_bundle();
        let status_line = format!("Loaded built-in demo bundle: {}", bundle.display_name());
        Self {
            scene: PreviewScene::from_bundle(bundle),
            selection: SelectionState::default(),
            schematic: SchematicView,
            footprint: FootprintView,
            model3d: Model3dView::default(),
            dock_state: Self::create_default_dock_state(),
            status_line,
            show_about_modal: false,
        }
    }

    /// Mount a new bundle: re-derive all visuals and reset the selection.
    pub fn set_bundle(&mut self, bundle: ComponentBundle) {
        self.status_line = format!("Loaded bundle: {}", bundle.display_name());
        self.scene = PreviewScene::from_bundle(bundle);
        self.selection = SelectionState::default();
    }

    pub fn scene(&self) -> &PreviewScene {
        &self.scene
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    fn open_bundle_dialog(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Bundle JSON", &["json"])
            .pick_file()
        else {
            return;
        };
        match ComponentBundle::load_from_file(&path) {
            Ok(bundle) => self.set_bundle(bundle),
            Err(e) => {
                log::error!("Failed to load bundle from {}: {}", path.display(), e);
                self.status_line = format!("Failed to load bundle: {}", e);
            }
        }
    }

    fn export_dialog(&mut self, kind: ExportKind) {
        let suggested = suggested_filename(&self.scene.bundle, kind);
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(suggested.to_string_lossy())
            .save_file()
        else {
            return;
        };
        match write_blob(&path, kind.blob(&self.scene.bundle)) {
            Ok(()) => self.status_line = format!("Exported {}", path.display()),
            Err(e) => {
                log::error!("Export to {} failed: {}", path.display(), e);
                self.status_line = format!("Export failed: {}", e);
            }
        }
    }

    fn save_dock_state(&self) {
        if let Some(config_dir) = dirs::config_dir() {
            let partlens_dir = config_dir.join("partlens");
            if let Err(e) = fs::create_dir_all(&partlens_dir) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
            let config_path = partlens_dir.join("dock_state.json");
            match serde_json::to_string_pretty(&self.dock_state) {
                Ok(json) => {
                    if let Err(e) = fs::write(&config_path, json) {
                        log::warn!("Failed to write dock state: {}", e);
                    }
                }
                Err(e) => {
                    log::warn!("Failed to serialize dock state: {}", e);
                }
            }
        }
    }

    fn load_dock_state() -> Option<DockState<Tab>> {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("partlens").join("dock_state.json");
            if let Ok(json) = fs::read_to_string(&config_path) {
                match serde_json::from_str::<DockState<Tab>>(&json) {
                    Ok(dock_state) => return Some(dock_state),
                    Err(e) => {
                        log::warn!("Failed to deserialize dock state: {}", e);
                        // Delete corrupted file
                        fs::remove_file(config_path).ok();
                    }
                }
            }
        }
        None
    }

    fn create_default_dock_state() -> DockState<Tab> {
        if let Some(saved_dock_state) = Self::load_dock_state() {
            return saved_dock_state;
        }
        Self::fresh_dock_state()
    }

    fn fresh_dock_state() -> DockState<Tab> {
        let schematic_tab = Tab::new(TabKind::Schematic, SurfaceIndex::main(), NodeIndex(0));
        let footprint_tab = Tab::new(TabKind::Footprint, SurfaceIndex::main(), NodeIndex(1));
        let model3d_tab = Tab::new(TabKind::Model3d, SurfaceIndex::main(), NodeIndex(2));
        let report_tab = Tab::new(TabKind::Report, SurfaceIndex::main(), NodeIndex(3));

        let mut dock_state = DockState::new(vec![schematic_tab]);
        let surface = dock_state.main_surface_mut();

        let [_left, right] =
            surface.split_right(NodeIndex::root(), 0.5, vec![footprint_tab]);
        surface.split_below(right, 0.55, vec![model3d_tab, report_tab]);
        dock_state
    }
}

impl eframe::App for PartLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Bundle…").clicked() {
                        ui.close();
                        self.open_bundle_dialog();
                    }
                    ui.menu_button("Export", |ui| {
                        for kind in [
                            ExportKind::Footprint,
                            ExportKind::Symbol,
                            ExportKind::ModelScript,
                        ] {
                            if ui.button(kind.label()).clicked() {
                                ui.close();
                                self.export_dialog(kind);
                            }
                        }
                    });
                });
                ui.menu_button("View", |ui| {
                    if ui.button("Reset Layout").clicked() {
                        ui.close();
                        self.dock_state = Self::fresh_dock_state();
                    }
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close();
                        self.show_about_modal = true;
                    }
                });
            });
        });

        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.status_line);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{} pins · {} pads",
                        self.scene.bundle.pins.len(),
                        self.scene.geometry.pads.len()
                    ));
                });
            });
        });

        egui::SidePanel::right("pin_info_panel")
            .default_width(240.0)
            .show(ctx, |ui| {
                if ui::show_info_panel(ui, &self.scene.bundle, &self.selection) {
                    self.selection.clear();
                }
            });

        // Main dock area: all views read the same selection snapshot and any
        // hit-test result is applied once after the pass (single writer).
        let mut dock_state = self.dock_state.clone();
        let mut pending_hit = None;
        let mut tab_viewer = TabViewer {
            scene: &self.scene,
            selected: self.selection.pin_number().map(str::to_string),
            schematic: &mut self.schematic,
            footprint: &mut self.footprint,
            model3d: &mut self.model3d,
            pending_hit: &mut pending_hit,
        };
        let mut style = Style::from_egui(ctx.style().as_ref());
        style.dock_area_padding = None;
        style.tab_bar.fill_tab_bar = true;

        DockArea::new(&mut dock_state)
            .style(style)
            .show_add_buttons(false)
            .show_close_buttons(false)
            .show(ctx, &mut tab_viewer);

        self.dock_state = dock_state;

        if let Some(hit) = pending_hit {
            self.selection.apply(hit);
        }

        // Show About modal if requested
        if self.show_about_modal {
            egui::Window::new("About PartLens")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    AboutPanel::render(ui);
                    ui.add_space(12.0);
                    ui.vertical_centered(|ui| {
                        if ui.button("Close").clicked() {
                            self.show_about_modal = false;
                        }
                    });
                });
        }
    }
}
