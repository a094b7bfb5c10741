//! Distance annotations for the selected or dragged object.
//!
//! These feed the dimension lines drawn around an object: distances to the
//! four wall edges, distances from a nail to the wall edges, and the gap to
//! each neighbouring object. Unlike snapping they never move anything.
//!
//! All points are in wall-space centimeters; map them with
//! [`CanvasTransform::annotation_to_canvas`](crate::transform::CanvasTransform::annotation_to_canvas).

#[cfg(test)]
#[path = "measure_test.rs"]
mod measure_test;

use crate::doc::{Nail, Wall, WallObject};
use crate::geometry::{Orientation, Point, Rect, nail_absolute_position};

/// One dimension line with its length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    /// Length of the line in cm.
    pub distance: f64,
    pub from: Point,
    pub to: Point,
    pub orientation: Orientation,
}

impl Annotation {
    fn horizontal(from_x: f64, to_x: f64, y: f64) -> Self {
        Self {
            distance: to_x - from_x,
            from: Point::new(from_x, y),
            to: Point::new(to_x, y),
            orientation: Orientation::Horizontal,
        }
    }

    fn vertical(from_y: f64, to_y: f64, x: f64) -> Self {
        Self {
            distance: to_y - from_y,
            from: Point::new(x, from_y),
            to: Point::new(x, to_y),
            orientation: Orientation::Vertical,
        }
    }

    /// Midpoint of the line, where its label goes.
    #[must_use]
    pub fn midpoint(&self) -> Point {
        Point::new((self.from.x + self.to.x) / 2.0, (self.from.y + self.to.y) / 2.0)
    }
}

/// Live overlay shown while dragging.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragIndicators {
    /// Distances to the wall edges.
    pub walls: Vec<Annotation>,
    /// Gaps to neighbouring objects.
    pub gaps: Vec<Annotation>,
}

/// Lines from each wall edge to the object, along the object's center lines.
///
/// A side is skipped when the object touches or overhangs it. Order: left,
/// right, top, bottom.
#[must_use]
pub fn frame_distances(rect: &Rect, wall: &Wall) -> Vec<Annotation> {
    let center = rect.center();
    let mut out = Vec::with_capacity(4);

    if rect.x > 0.0 {
        out.push(Annotation::horizontal(0.0, rect.x, center.y));
    }
    if wall.width - rect.right() > 0.0 {
        out.push(Annotation::horizontal(rect.right(), wall.width, center.y));
    }
    if rect.y > 0.0 {
        out.push(Annotation::vertical(0.0, rect.y, center.x));
    }
    if wall.height - rect.bottom() > 0.0 {
        out.push(Annotation::vertical(rect.bottom(), wall.height, center.x));
    }
    out
}

/// Lines from the nail to each wall edge. Always four: left, right, top, bottom.
#[must_use]
pub fn nail_distances(object: &WallObject, nail: &Nail, wall: &Wall) -> Vec<Annotation> {
    let abs = nail_absolute_position(object, nail);
    let (x, y) = (abs.from_left, abs.from_top);
    vec![
        Annotation::horizontal(0.0, x, y),
        Annotation::horizontal(x, wall.width, y),
        Annotation::vertical(0.0, y, x),
        Annotation::vertical(y, wall.height, x),
    ]
}

/// Gaps from `rect` to each sibling it sits beside.
///
/// A horizontal gap is reported only when one rectangle lies entirely left of
/// the other (touching counts) and their vertical spans overlap; vertical gaps
/// mirror this. The line runs through the middle of the shared band.
#[must_use]
pub fn sibling_gaps<'a>(rect: &Rect, siblings: impl IntoIterator<Item = &'a WallObject>) -> Vec<Annotation> {
    let mut out = Vec::new();

    for other in siblings {
        let other = other.rect();

        if rect.overlaps_vertically(&other) {
            let y = rect.y.max(other.y) + rect.height.min(other.height) / 2.0;
            if rect.right() <= other.x {
                out.push(Annotation::horizontal(rect.right(), other.x, y));
            }
            if rect.x >= other.right() {
                out.push(Annotation::horizontal(other.right(), rect.x, y));
            }
        }

        if rect.overlaps_horizontally(&other) {
            let x = rect.x.max(other.x) + rect.width.min(other.width) / 2.0;
            if rect.bottom() <= other.y {
                out.push(Annotation::vertical(rect.bottom(), other.y, x));
            }
            if rect.y >= other.bottom() {
                out.push(Annotation::vertical(other.bottom(), rect.y, x));
            }
        }
    }
    out
}

/// Wall and sibling distances for an object mid-drag.
#[must_use]
pub fn drag_indicators<'a>(
    rect: &Rect,
    wall: &Wall,
    siblings: impl IntoIterator<Item = &'a WallObject>,
) -> DragIndicators {
    DragIndicators { walls: frame_distances(rect, wall), gaps: sibling_gaps(rect, siblings) }
}
