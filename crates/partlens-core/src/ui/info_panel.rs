use crate::bundle::ComponentBundle;
use crate::selection::SelectionState;

/// Selected-pin details panel. A stale selection (a pad number with no
/// described pin) shows a placeholder rather than failing.
/// Returns true when the dismiss button was clicked.
pub fn show_info_panel(
    ui: &mut egui::Ui,
    bundle: &ComponentBundle,
    selection: &SelectionState,
) -> bool {
    ui.heading("Pin Details");
    ui.separator();

    let Some(number) = selection.pin_number() else {
        ui.weak("Click a pin, pad, or lead in any view.");
        return false;
    };

    match selection.resolve(bundle) {
        Some(pin) => {
            egui::Grid::new("pin_details_grid")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Number:");
                    ui.monospace(&pin.number);
                    ui.end_row();

                    ui.label("Name:");
                    ui.monospace(&pin.name);
                    ui.end_row();

                    ui.label("Role:");
                    ui.label(pin.electrical_role.label());
                    ui.end_row();
                });
            if !pin.description.is_empty() {
                ui.add_space(4.0);
                ui.label(&pin.description);
            }
        }
        None => {
            ui.monospace(number);
            ui.weak("No pin with this number in the current bundle.");
        }
    }

    ui.add_space(8.0);
    ui.button("Dismiss").clicked()
}
