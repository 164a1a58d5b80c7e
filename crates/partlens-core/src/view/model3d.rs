use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, Vec2};
use nalgebra::{Matrix4, Perspective3, Point3, Vector3};

use super::{HitResult, PreviewScene, PreviewSurface, BODY_COLOR, HIGHLIGHT_COLOR, LEAD_COLOR};
use crate::bundle::ComponentBundle;

/// How far a lead reaches out from the body edge, mm.
const LEAD_REACH_MM: f64 = 1.0;
/// Lead thickness, mm.
const LEAD_HEIGHT_MM: f64 = 0.25;
/// Fraction of the pitch a lead occupies along the body edge.
const LEAD_WIDTH_RATIO: f64 = 0.45;

const MIN_CAMERA_DISTANCE: f32 = 5.0;
const MAX_CAMERA_DISTANCE: f32 = 120.0;

/// Axis-aligned cuboid in model space (x across the body, y along it,
/// z up from the board plane).
#[derive(Debug, Clone, PartialEq)]
pub struct Cuboid {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Cuboid {
    fn corner(&self, ix: usize, iy: usize, iz: usize) -> Point3<f64> {
        Point3::new(
            if ix == 0 { self.min.x } else { self.max.x },
            if iy == 0 { self.min.y } else { self.max.y },
            if iz == 0 { self.min.z } else { self.max.z },
        )
    }

    /// The six faces as quads, for painter's-algorithm rendering.
    fn faces(&self) -> [[Point3<f64>; 4]; 6] {
        let c = |ix, iy, iz| self.corner(ix, iy, iz);
        [
            [c(0, 0, 1), c(1, 0, 1), c(1, 1, 1), c(0, 1, 1)], // top
            [c(0, 0, 0), c(1, 0, 0), c(1, 1, 0), c(0, 1, 0)], // bottom
            [c(0, 0, 0), c(1, 0, 0), c(1, 0, 1), c(0, 0, 1)], // front
            [c(0, 1, 0), c(1, 1, 0), c(1, 1, 1), c(0, 1, 1)], // back
            [c(0, 0, 0), c(0, 1, 0), c(0, 1, 1), c(0, 0, 1)], // left
            [c(1, 0, 0), c(1, 1, 0), c(1, 1, 1), c(1, 0, 1)], // right
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Lead {
    pub number: String,
    pub shape: Cuboid,
}

/// Rectangular package model derived from the bundle's nominal dimensions
/// (fixed defaults when absent) with leads split between the two long edges.
#[derive(Debug, Clone)]
pub struct PackageModel {
    pub body: Cuboid,
    pub leads: Vec<Lead>,
}

pub fn package_model(bundle: &ComponentBundle) -> PackageModel {
    let width = bundle.dimensions.body_width();
    let length = bundle.dimensions.body_length();
    let height = bundle.dimensions.body_height();
    let pitch = bundle.dimensions.pitch();

    let body = Cuboid {
        min: Point3::new(-width / 2.0, -length / 2.0, 0.0),
        max: Point3::new(width / 2.0, length / 2.0, height),
    };

    let count = bundle.lead_count();
    let left_count = count.div_ceil(2);
    let right_count = count - left_count;
    let lead_half_width = pitch * LEAD_WIDTH_RATIO / 2.0;

    let column_y = |index: usize, side_count: usize| -> f64 {
        (index as f64 - (side_count as f64 - 1.0) / 2.0) * pitch
    };

    let mut leads = Vec::with_capacity(count);
    for i in 0..count {
        // Counter-clockwise numbering: down the left edge, back up the right.
        let (x_min, x_max, y) = if i < left_count {
            (
                -width / 2.0 - LEAD_REACH_MM,
                -width / 2.0,
                column_y(i, left_count),
            )
        } else {
            let j = i - left_count;
            (
                width / 2.0,
                width / 2.0 + LEAD_REACH_MM,
                -column_y(j, right_count),
            )
        };
        leads.push(Lead {
            number: (i + 1).to_string(),
            shape: Cuboid {
                min: Point3::new(x_min, y - lead_half_width, 0.0),
                max: Point3::new(x_max, y + lead_half_width, LEAD_HEIGHT_MM),
            },
        });
    }

    PackageModel { body, leads }
}

/// 3D package surface: orbit camera around the derived package model,
/// drawn by projecting faces and depth-sorting them, as the 2D painter has
/// no scene graph.
pub struct Model3dView {
    camera_distance: f32,
    camera_rotation: (f32, f32), // (phi, theta) in spherical coordinates
}

impl Default for Model3dView {
    fn default() -> Self {
        Self {
            camera_distance: 25.0,
            camera_rotation: (0.9, 1.0),
        }
    }
}

impl Model3dView {
    fn camera_position(&self) -> Point3<f64> {
        let (phi, theta) = self.camera_rotation;
        let distance = self.camera_distance as f64;
        Point3::new(
            distance * (theta.sin() * phi.cos()) as f64,
            distance * theta.cos() as f64,
            distance * (theta.sin() * phi.sin()) as f64,
        )
    }

    fn update_camera_rotation(&mut self, delta_x: f32, delta_y: f32) {
        let (mut phi, mut theta) = self.camera_rotation;
        phi += delta_x;
        theta += delta_y;
        // Clamp theta to avoid gimbal lock
        theta = theta.clamp(0.1, std::f32::consts::PI - 0.1);
        self.camera_rotation = (phi, theta);
    }

    fn update_camera_zoom(&mut self, delta: f32) {
        self.camera_distance -= delta * 2.0;
        self.camera_distance = self
            .camera_distance
            .clamp(MIN_CAMERA_DISTANCE, MAX_CAMERA_DISTANCE);
    }

    fn view_projection(&self, rect: Rect) -> Matrix4<f64> {
        let eye = self.camera_position();
        let view = Matrix4::look_at_rh(&eye, &Point3::origin(), &Vector3::y());
        let aspect = (rect.width() / rect.height().max(1.0)) as f64;
        let projection =
            Perspective3::new(aspect, std::f64::consts::FRAC_PI_4, 0.1, 1000.0).to_homogeneous();
        projection * view
    }

    /// Screen bounding rect of each lead under the current camera; this is
    /// the pick target for 3D hit-testing.
    fn lead_screen_bounds(&self, model: &PackageModel, rect: Rect) -> Vec<(String, Rect)> {
        let mvp = self.view_projection(rect);
        model
            .leads
            .iter()
            .filter_map(|lead| {
                let mut bounds: Option<Rect> = None;
                for face in lead.shape.faces() {
                    for vertex in face {
                        let screen = project(&mvp, rect, vertex)?;
                        bounds = Some(match bounds {
                            None => Rect::from_min_max(screen, screen),
                            Some(b) => b.union(Rect::from_min_max(screen, screen)),
                        });
                    }
                }
                bounds.map(|b| (lead.number.clone(), b))
            })
            .collect()
    }

    fn hit_test(&self, pos: Pos2, model: &PackageModel, rect: Rect) -> Option<String> {
        self.lead_screen_bounds(model, rect)
            .into_iter()
            .find(|(_, bounds)| bounds.contains(pos))
            .map(|(number, _)| number)
    }
}

/// Model space is z-up; world space is y-up for the camera.
fn to_world(p: Point3<f64>) -> Point3<f64> {
    Point3::new(p.x, p.z, p.y)
}

fn project(mvp: &Matrix4<f64>, rect: Rect, vertex: Point3<f64>) -> Option<Pos2> {
    let clip = mvp * to_world(vertex).to_homogeneous();
    if clip.w <= 0.0 {
        return None;
    }
    let ndc_x = clip.x / clip.w;
    let ndc_y = clip.y / clip.w;
    Some(Pos2::new(
        rect.center().x + ndc_x as f32 * rect.width() / 2.0,
        rect.center().y - ndc_y as f32 * rect.height() / 2.0,
    ))
}

fn shade(base: Color32, factor: f32) -> Color32 {
    Color32::from_rgb(
        (base.r() as f32 * factor) as u8,
        (base.g() as f32 * factor) as u8,
        (base.b() as f32 * factor) as u8,
    )
}

impl PreviewSurface for Model3dView {
    fn title(&self) -> &'static str {
        "3D Model"
    }

    fn show(
        &mut self,
        ui: &mut egui::Ui,
        scene: &PreviewScene,
        selected: Option<&str>,
    ) -> Option<HitResult> {
        let response = ui.allocate_response(ui.available_size(), Sense::click_and_drag());
        let rect = response.rect;
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::from_rgb(40, 40, 40));

        // Camera controls - drag to rotate, scroll to zoom
        if response.dragged() {
            let delta = response.drag_delta();
            self.update_camera_rotation(delta.x * 0.01, delta.y * 0.01);
        }
        if response.hovered() {
            ui.input(|i| {
                if i.raw_scroll_delta.y != 0.0 {
                    self.update_camera_zoom(i.raw_scroll_delta.y * 0.1);
                }
            });
        }

        let model = package_model(&scene.bundle);
        let mvp = self.view_projection(rect);
        let eye = self.camera_position();

        // Collect quads with depth for back-to-front sorting.
        let mut quads: Vec<(Vec<Pos2>, f64, Color32)> = Vec::new();
        let mut push_cuboid = |cuboid: &Cuboid, base: Color32| {
            for (face_index, face) in cuboid.faces().iter().enumerate() {
                let mut screen = Vec::with_capacity(4);
                let mut depth = 0.0;
                for vertex in face {
                    match project(&mvp, rect, *vertex) {
                        Some(p) => screen.push(p),
                        None => return,
                    }
                    depth += nalgebra::distance(&to_world(*vertex), &eye);
                }
                // Top face lit, sides slightly darker.
                let factor = if face_index == 0 { 1.0 } else { 0.78 };
                quads.push((screen, depth / 4.0, shade(base, factor)));
            }
        };

        push_cuboid(&model.body, BODY_COLOR);
        for lead in &model.leads {
            let base = if selected == Some(lead.number.as_str()) {
                HIGHLIGHT_COLOR
            } else {
                LEAD_COLOR
            };
            push_cuboid(&lead.shape, base);
        }

        quads.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        for (vertices, _depth, color) in quads {
            painter.add(Shape::convex_polygon(
                vertices,
                color,
                Stroke::new(0.3, Color32::from_rgba_unmultiplied(0, 0, 0, 60)),
            ));
        }

        let info_text = format!(
            "{} ({})\n{:.1} x {:.1} x {:.2} mm, {} leads\nDrag to rotate, scroll to zoom",
            scene.bundle.display_name(),
            if scene.bundle.package_type.is_empty() {
                "unknown package"
            } else {
                &scene.bundle.package_type
            },
            scene.bundle.dimensions.body_width(),
            scene.bundle.dimensions.body_length(),
            scene.bundle.dimensions.body_height(),
            model.leads.len(),
        );
        painter.text(
            rect.min + Vec2::new(10.0, 10.0),
            Align2::LEFT_TOP,
            info_text,
            FontId::default(),
            Color32::WHITE,
        );

        // A drag that ends on a lead is still a drag, not a pick.
        if response.clicked() && !response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                return Some(match self.hit_test(pos, &model, rect) {
                    Some(number) => HitResult::Pin(number),
                    None => HitResult::Background,
                });
            }
        }
        None
    }
}
