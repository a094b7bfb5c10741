//! Mapping between wall space (centimeters) and canvas space (pixels).
//!
//! The wall is letterboxed into the viewport: one uniform scale keeps its
//! aspect ratio, and the scaled wall is centered. This is the only place pixel
//! math happens; every other module works in centimeters.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::doc::Wall;
use crate::geometry::{Orientation, Point, Rect};
use crate::measure::Annotation;
use crate::snap::SnapGuide;

/// A background grid line in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    pub orientation: Orientation,
    pub from: Point,
    pub to: Point,
}

/// Scale and offset placing the wall inside a viewport.
///
/// `pixel = offset + cm * scale` and `cm = (pixel - offset) / scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    /// Viewport width in pixels.
    pub canvas_width: f64,
    /// Viewport height in pixels.
    pub canvas_height: f64,
    /// Scaled wall width in pixels.
    pub wall_width: f64,
    /// Scaled wall height in pixels.
    pub wall_height: f64,
    /// Pixels per centimeter.
    pub scale: f64,
    /// Canvas x of the wall's left edge.
    pub offset_x: f64,
    /// Canvas y of the wall's top edge.
    pub offset_y: f64,
}

impl CanvasTransform {
    /// Fit `wall` into a `container_width × container_height` viewport leaving
    /// `padding` pixels on every side.
    ///
    /// The wall must have positive dimensions; a zero side yields an infinite
    /// scale.
    #[must_use]
    pub fn fit(container_width: f64, container_height: f64, wall: &Wall, padding: f64) -> Self {
        let available_width = container_width - padding * 2.0;
        let available_height = container_height - padding * 2.0;
        let scale = (available_width / wall.width).min(available_height / wall.height);

        let wall_width = wall.width * scale;
        let wall_height = wall.height * scale;

        Self {
            canvas_width: container_width,
            canvas_height: container_height,
            wall_width,
            wall_height,
            scale,
            offset_x: (container_width - wall_width) / 2.0,
            offset_y: (container_height - wall_height) / 2.0,
        }
    }

    /// Build a transform from a known scale and offset, with no viewport size.
    #[must_use]
    pub fn from_parts(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            canvas_width: 0.0,
            canvas_height: 0.0,
            wall_width: 0.0,
            wall_height: 0.0,
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Convert a wall-space point (cm) to canvas pixels.
    #[must_use]
    pub fn to_canvas(&self, real: Point) -> Point {
        Point {
            x: self.offset_x + real.x * self.scale,
            y: self.offset_y + real.y * self.scale,
        }
    }

    /// Convert a canvas point (pixels) to wall space (cm).
    #[must_use]
    pub fn to_real(&self, canvas: Point) -> Point {
        Point {
            x: (canvas.x - self.offset_x) / self.scale,
            y: (canvas.y - self.offset_y) / self.scale,
        }
    }

    /// Convert a length in cm to pixels. Offsets do not apply.
    #[must_use]
    pub fn len_to_canvas(&self, cm: f64) -> f64 {
        cm * self.scale
    }

    /// Convert a length in pixels to cm. Offsets do not apply.
    #[must_use]
    pub fn len_to_real(&self, px: f64) -> f64 {
        px / self.scale
    }

    #[must_use]
    pub fn rect_to_canvas(&self, rect: &Rect) -> Rect {
        let origin = self.to_canvas(rect.origin());
        Rect::new(origin.x, origin.y, self.len_to_canvas(rect.width), self.len_to_canvas(rect.height))
    }

    /// Canvas segment spanning the whole wall along a snap guide.
    #[must_use]
    pub fn guide_segment(&self, guide: &SnapGuide) -> (Point, Point) {
        let at = self.len_to_canvas(guide.position);
        match guide.orientation {
            Orientation::Vertical => {
                let x = self.offset_x + at;
                (Point::new(x, self.offset_y), Point::new(x, self.offset_y + self.wall_height))
            }
            Orientation::Horizontal => {
                let y = self.offset_y + at;
                (Point::new(self.offset_x, y), Point::new(self.offset_x + self.wall_width, y))
            }
        }
    }

    /// Move an annotation's endpoints to canvas pixels. The distance stays in cm.
    #[must_use]
    pub fn annotation_to_canvas(&self, annotation: &Annotation) -> Annotation {
        Annotation {
            from: self.to_canvas(annotation.from),
            to: self.to_canvas(annotation.to),
            ..*annotation
        }
    }

    /// Grid lines every `step` cm across the wall, edges included.
    ///
    /// Vertical lines come first, left to right, then horizontal lines top to
    /// bottom. A non-positive step yields no lines.
    #[must_use]
    pub fn grid_lines(&self, wall: &Wall, step: f64) -> Vec<GridLine> {
        if !(step.is_finite() && step > 0.0) {
            return Vec::new();
        }

        let mut lines = Vec::new();
        for x in grid_stops(wall.width, step) {
            let px = self.offset_x + x * self.scale;
            lines.push(GridLine {
                orientation: Orientation::Vertical,
                from: Point::new(px, self.offset_y),
                to: Point::new(px, self.offset_y + self.wall_height),
            });
        }
        for y in grid_stops(wall.height, step) {
            let py = self.offset_y + y * self.scale;
            lines.push(GridLine {
                orientation: Orientation::Horizontal,
                from: Point::new(self.offset_x, py),
                to: Point::new(self.offset_x + self.wall_width, py),
            });
        }
        lines
    }
}

/// `0, step, 2*step, ...` up to and including `extent`.
fn grid_stops(extent: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |i| f64::from(i) * step)
        .take_while(move |v| *v <= extent)
}
