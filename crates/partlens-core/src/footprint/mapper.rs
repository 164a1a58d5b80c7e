use egui::{Pos2, Rect};
use nalgebra::Point2;

use super::parser::FootprintGeometry;

/// Extra board-space room around the geometry before fitting, in mm.
pub const FIT_MARGIN_MM: f64 = 1.5;
/// Screen-space padding subtracted from the viewport on each axis, in px.
pub const VIEWPORT_PADDING_PX: f32 = 20.0;
/// Half-extent of the fallback bounding box used when there is no geometry.
pub const FALLBACK_HALF_EXTENT_MM: f64 = 5.0;

/// Board-space bounding box, mm.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardBounds {
    pub min: Point2<f64>,
    pub max: Point2<f64>,
}

impl BoardBounds {
    fn expand_point(&mut self, x: f64, y: f64) {
        self.min.x = self.min.x.min(x);
        self.min.y = self.min.y.min(y);
        self.max.x = self.max.x.max(x);
        self.max.y = self.max.y.max(y);
    }

    /// Union of pad extents (center ± half size) and line endpoints.
    /// No geometry at all yields the fixed fallback box, which keeps the
    /// fit scale finite.
    pub fn of_geometry(geometry: &FootprintGeometry) -> Self {
        if geometry.is_empty() {
            return Self {
                min: Point2::new(-FALLBACK_HALF_EXTENT_MM, -FALLBACK_HALF_EXTENT_MM),
                max: Point2::new(FALLBACK_HALF_EXTENT_MM, FALLBACK_HALF_EXTENT_MM),
            };
        }

        let mut bounds = Self {
            min: Point2::new(f64::INFINITY, f64::INFINITY),
            max: Point2::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        };
        for pad in &geometry.pads {
            bounds.expand_point(pad.x - pad.width / 2.0, pad.y - pad.height / 2.0);
            bounds.expand_point(pad.x + pad.width / 2.0, pad.y + pad.height / 2.0);
        }
        for line in &geometry.outlines {
            bounds.expand_point(line.x1, line.y1);
            bounds.expand_point(line.x2, line.y2);
        }
        bounds
    }

    pub fn with_margin(&self, margin: f64) -> Self {
        Self {
            min: Point2::new(self.min.x - margin, self.min.y - margin),
            max: Point2::new(self.max.x + margin, self.max.y + margin),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point2<f64> {
        Point2::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }
}

/// Affine board-to-screen mapping: `screen = origin + board * scale`.
/// Board-space Y grows downward (KiCad convention), same as screen space,
/// so no axis flip is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub origin_x: f32,
    pub origin_y: f32,
    /// Pixels per mm, uniform on both axes.
    pub scale: f32,
}

impl ViewTransform {
    /// Fit the full geometry bounding box (plus margin) into `viewport`.
    /// Uniform scale: the smaller of the two axis fits wins, and the bounds
    /// center maps to the viewport center. Pure function of its inputs.
    pub fn fit(geometry: &FootprintGeometry, viewport: Rect) -> Self {
        let bounds = BoardBounds::of_geometry(geometry).with_margin(FIT_MARGIN_MM);

        let avail_w = (viewport.width() - VIEWPORT_PADDING_PX).max(1.0) as f64;
        let avail_h = (viewport.height() - VIEWPORT_PADDING_PX).max(1.0) as f64;
        let scale = (avail_w / bounds.width()).min(avail_h / bounds.height()) as f32;

        let center = bounds.center();
        Self {
            origin_x: viewport.center().x - center.x as f32 * scale,
            origin_y: viewport.center().y - center.y as f32 * scale,
            scale,
        }
    }

    pub fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        Pos2::new(
            self.origin_x + x as f32 * self.scale,
            self.origin_y + y as f32 * self.scale,
        )
    }
}
