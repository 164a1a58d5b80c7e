use egui::Color32;

use crate::bundle::ConsistencyReport;

/// Verbatim display of the externally produced consistency report. PartLens
/// never interprets the findings; it only lays them out.
pub fn show_report_panel(ui: &mut egui::Ui, report: Option<&ConsistencyReport>) {
    let Some(report) = report else {
        ui.weak("No consistency report in this bundle.");
        return;
    };

    ui.horizontal(|ui| {
        ui.heading("Status:");
        let color = match report.status.as_str() {
            "pass" => Color32::from_rgb(80, 200, 100),
            "fail" => Color32::from_rgb(230, 80, 80),
            _ => ui.visuals().text_color(),
        };
        ui.colored_label(color, &report.status);
    });
    ui.separator();

    egui::ScrollArea::vertical().show(ui, |ui| {
        if !report.errors.is_empty() {
            ui.label(egui::RichText::new("Errors").strong());
            for error in &report.errors {
                ui.colored_label(Color32::from_rgb(230, 80, 80), format!("• {}", error));
            }
            ui.add_space(6.0);
        }

        if !report.warnings.is_empty() {
            ui.label(egui::RichText::new("Warnings").strong());
            for warning in &report.warnings {
                ui.colored_label(Color32::from_rgb(230, 180, 60), format!("• {}", warning));
            }
            ui.add_space(6.0);
        }

        if !report.traceability.is_empty() {
            ui.label(egui::RichText::new("Traceability").strong());
            for entry in &report.traceability {
                let text = serde_json::to_string_pretty(entry)
                    .unwrap_or_else(|_| entry.to_string());
                ui.monospace(text);
            }
        }

        if report.errors.is_empty() && report.warnings.is_empty() && report.traceability.is_empty()
        {
            ui.weak("No findings.");
        }
    });
}
