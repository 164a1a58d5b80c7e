use eframe::egui;

use crate::platform::parameters::gui::{APPLICATION_NAME, VERSION};

pub struct AboutPanel;

impl AboutPanel {
    pub fn render(ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(APPLICATION_NAME)
                    .size(18.0)
                    .strong(),
            );
            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(format!("version {}", VERSION))
                    .color(egui::Color32::from_rgb(150, 150, 150))
                    .size(14.0),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new("Interactive preview for generated EDA asset bundles")
                    .size(14.0)
                    .italics(),
            );
            ui.add_space(10.0);
            ui.label(
                egui::RichText::new(format!(
                    "egui {}  ·  egui_dock {}  ·  nalgebra {}",
                    env!("EGUI_VERSION"),
                    env!("EGUI_DOCK_VERSION"),
                    env!("NALGEBRA_VERSION"),
                ))
                .size(12.0)
                .color(egui::Color32::from_rgb(150, 150, 150)),
            );
        });
    }
}
