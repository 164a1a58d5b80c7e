use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::{HitResult, PreviewScene, PreviewSurface, COPPER_COLOR, HIGHLIGHT_COLOR, SILKSCREEN_COLOR};
use crate::footprint::{FootprintGeometry, PadGeometry, ViewTransform};

const OUTLINE_STROKE_WIDTH: f32 = 1.5;
const PAD_LABEL_FONT_SIZE: f32 = 11.0;

/// 2D footprint surface: silkscreen outline segments plus copper pads,
/// fitted to the current rect via the shared view transform.
#[derive(Default)]
pub struct FootprintView;

/// Screen-space rectangle of a pad under the given transform.
pub fn pad_screen_rect(transform: &ViewTransform, pad: &PadGeometry) -> Rect {
    Rect::from_center_size(
        transform.to_screen(pad.x, pad.y),
        Vec2::new(
            pad.width as f32 * transform.scale,
            pad.height as f32 * transform.scale,
        ),
    )
}

/// First pad whose screen rect contains the pointer. Real footprints do not
/// overlap pads, so first-match is deterministic in practice.
pub fn hit_test(pos: Pos2, transform: &ViewTransform, geometry: &FootprintGeometry) -> Option<String> {
    geometry
        .pads
        .iter()
        .find(|pad| pad_screen_rect(transform, pad).contains(pos))
        .map(|pad| pad.number.clone())
}

/// Rounded corners degrade to square ones for pads too small to show them.
fn corner_radius(rect: &Rect) -> f32 {
    let limit = rect.width().min(rect.height());
    if limit < 6.0 {
        0.0
    } else {
        (limit * 0.25).min(4.0)
    }
}

impl PreviewSurface for FootprintView {
    fn title(&self) -> &'static str {
        "Footprint"
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

        if scene.geometry.is_empty() {
            painter.text(
                view.center(),
                Align2::CENTER_CENTER,
                "No footprint geometry",
                FontId::default(),
                ui.visuals().weak_text_color(),
            );
            return response.clicked().then_some(HitResult::Background);
        }

        // Pure function of geometry and rect; recomputed every frame so a
        // selection change never needs a relayout.
        let transform = ViewTransform::fit(&scene.geometry, view);

        for line in &scene.geometry.outlines {
            painter.line_segment(
                [
                    transform.to_screen(line.x1, line.y1),
                    transform.to_screen(line.x2, line.y2),
                ],
                Stroke::new(OUTLINE_STROKE_WIDTH, SILKSCREEN_COLOR),
            );
        }

        for pad in &scene.geometry.pads {
            let rect = pad_screen_rect(&transform, pad);
            let color = if selected == Some(pad.number.as_str()) {
                HIGHLIGHT_COLOR
            } else {
                COPPER_COLOR
            };
            painter.rect_filled(rect, corner_radius(&rect), color);

            // Label only when the number actually fits inside the pad.
            let label_width = pad.number.len() as f32 * PAD_LABEL_FONT_SIZE * 0.7;
            if rect.width() > label_width && rect.height() > PAD_LABEL_FONT_SIZE {
                painter.text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    &pad.number,
                    FontId::monospace(PAD_LABEL_FONT_SIZE),
                    Color32::BLACK,
                );
            }
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                return Some(match hit_test(pos, &transform, &scene.geometry) {
                    Some(number) => HitResult::Pin(number),
                    None => HitResult::Background,
                });
            }
        }
        None
    }
}
