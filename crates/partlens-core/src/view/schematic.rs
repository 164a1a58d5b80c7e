use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, StrokeKind, Vec2};

use super::{
    HitResult, PreviewScene, PreviewSurface, HIGHLIGHT_COLOR, SYMBOL_FILL_COLOR,
    SYMBOL_OUTLINE_COLOR,
};
use crate::symbol::{slot_y, PinSide, SymbolLayout, SymbolSlot};

/// Horizontal lead length from the body edge to the connection point, px.
pub const LEAD_LENGTH: f32 = 40.0;
/// Circular hit target radius around each lead endpoint, px.
pub const HIT_RADIUS: f32 = 20.0;
const MARKER_RADIUS: f32 = 5.0;

/// Schematic symbol surface: body rectangle, centered component name, and
/// one lead per assigned slot with number/name labels.
#[derive(Default)]
pub struct SchematicView;

/// Body rectangle for the symbol, centered in the view rect.
pub fn body_rect(view: Rect, layout: &SymbolLayout) -> Rect {
    Rect::from_center_size(
        view.center(),
        Vec2::new(layout.box_width(), layout.box_height()),
    )
}

/// Outer endpoint of a slot's lead; this is both where the wire would attach
/// and the center of the slot's hit target.
pub fn lead_endpoint(body: Rect, layout: &SymbolLayout, slot: &SymbolSlot) -> Pos2 {
    let y = slot_y(body.center().y, slot.slot, layout.side_count(slot.side));
    match slot.side {
        PinSide::Left => Pos2::new(body.left() - LEAD_LENGTH, y),
        PinSide::Right => Pos2::new(body.right() + LEAD_LENGTH, y),
    }
}

/// Nearest lead endpoint within the hit radius, if any. Targets do not
/// overlap at the fixed slot spacing, so nearest-first is deterministic.
pub fn hit_test(pos: Pos2, body: Rect, layout: &SymbolLayout) -> Option<String> {
    let mut best: Option<(f32, &SymbolSlot)> = None;
    for slot in &layout.slots {
        let distance = lead_endpoint(body, layout, slot).distance(pos);
        if distance <= HIT_RADIUS && best.map_or(true, |(d, _)| distance < d) {
            best = Some((distance, slot));
        }
    }
    best.map(|(_, slot)| slot.pin.number.clone())
}

impl PreviewSurface for SchematicView {
    fn title(&self) -> &'static str {
        "Schematic"
    }

    fn show(
        &mut self,
        ui: &mut egui::Ui,
        scene: &PreviewScene,
        selected: Option<&str>,
    ) -> Option<HitResult> {
        let response = ui.allocate_response(ui.available_size(), Sense::click());
        let view = response.rect;
        let painter = ui.painter_at(view);
        painter.rect_filled(view, 0.0, ui.visuals().extreme_bg_color);

        if scene.symbol.slots.is_empty() {
            painter.text(
                view.center(),
                Align2::CENTER_CENTER,
                "No pins to display",
                FontId::default(),
                ui.visuals().weak_text_color(),
            );
            return response.clicked().then_some(HitResult::Background);
        }

        let body = body_rect(view, &scene.symbol);
        painter.rect_filled(body, 2.0, SYMBOL_FILL_COLOR);
        painter.rect_stroke(
            body,
            2.0,
            Stroke::new(2.0, SYMBOL_OUTLINE_COLOR),
            StrokeKind::Middle,
        );
        painter.text(
            body.center(),
            Align2::CENTER_CENTER,
            scene.bundle.display_name(),
            FontId::proportional(16.0),
            Color32::BLACK,
        );

        for slot in &scene.symbol.slots {
            let endpoint = lead_endpoint(body, &scene.symbol, slot);
            let edge = match slot.side {
                PinSide::Left => Pos2::new(body.left(), endpoint.y),
                PinSide::Right => Pos2::new(body.right(), endpoint.y),
            };
            let is_selected = selected == Some(slot.pin.number.as_str());
            let stroke_width = if is_selected { 3.0 } else { 1.5 };
            let lead_color = if is_selected {
                HIGHLIGHT_COLOR
            } else {
                SYMBOL_OUTLINE_COLOR
            };
            painter.line_segment([edge, endpoint], Stroke::new(stroke_width, lead_color));
            if is_selected {
                painter.circle_filled(endpoint, MARKER_RADIUS, HIGHLIGHT_COLOR);
            }

            let (number_anchor, name_anchor, number_align, name_align) = match slot.side {
                PinSide::Left => (
                    Pos2::new(endpoint.x + LEAD_LENGTH / 2.0, endpoint.y - 4.0),
                    Pos2::new(edge.x + 6.0, endpoint.y),
                    Align2::CENTER_BOTTOM,
                    Align2::LEFT_CENTER,
                ),
                PinSide::Right => (
                    Pos2::new(endpoint.x - LEAD_LENGTH / 2.0, endpoint.y - 4.0),
                    Pos2::new(edge.x - 6.0, endpoint.y),
                    Align2::CENTER_BOTTOM,
                    Align2::RIGHT_CENTER,
                ),
            };
            painter.text(
                number_anchor,
                number_align,
                &slot.pin.number,
                FontId::monospace(12.0),
                ui.visuals().text_color(),
            );
            painter.text(
                name_anchor,
                name_align,
                &slot.pin.name,
                FontId::proportional(12.0),
                Color32::DARK_GRAY,
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                return Some(match hit_test(pos, body, &scene.symbol) {
                    Some(number) => HitResult::Pin(number),
                    None => HitResult::Background,
                });
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{ElectricalRole, PinDescriptor};

    fn layout() -> SymbolLayout {
        let pins: Vec<_> = [
            ("1", ElectricalRole::Input),
            ("2", ElectricalRole::Input),
            ("3", ElectricalRole::Output),
        ]
        .into_iter()
        .map(|(number, role)| PinDescriptor {
            number: number.into(),
            name: format!("P{}", number),
            electrical_role: role,
            description: String::new(),
        })
        .collect();
        SymbolLayout::from_pins(&pins)
    }

    #[test]
    fn test_click_on_lead_endpoint_hits_that_pin() {
        let layout = layout();
        let view = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        let body = body_rect(view, &layout);

        let slot = layout.slots.iter().find(|s| s.pin.number == "3").unwrap();
        let endpoint = lead_endpoint(body, &layout, slot);
        assert_eq!(hit_test(endpoint, body, &layout), Some("3".to_string()));
    }

    #[test]
    fn test_click_within_radius_still_hits() {
        let layout = layout();
        let view = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        let body = body_rect(view, &layout);

        let slot = &layout.slots[0];
        let near = lead_endpoint(body, &layout, slot) + Vec2::new(HIT_RADIUS - 1.0, 0.0);
        assert_eq!(hit_test(near, body, &layout), Some(slot.pin.number.clone()));
    }

    #[test]
    fn test_click_far_away_misses() {
        let layout = layout();
        let view = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        let body = body_rect(view, &layout);
        assert_eq!(hit_test(Pos2::new(5.0, 5.0), body, &layout), None);
    }

    #[test]
    fn test_leads_sit_outside_the_body() {
        let layout = layout();
        let view = Rect::from_min_size(Pos2::ZERO, Vec2::new(600.0, 400.0));
        let body = body_rect(view, &layout);
        for slot in &layout.slots {
            let endpoint = lead_endpoint(body, &layout, slot);
            assert!(!body.contains(endpoint));
        }
    }
}
