//! Wall-space geometry: points, rectangles, nail positions, and wall clamping.
//!
//! Everything here is in centimeters with the origin at the wall's top-left
//! corner and axes increasing right and down.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::doc::{Nail, Wall, WallObject};

/// A point in either wall space (cm) or canvas space (px).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Direction a guide or measurement line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// A line of constant x, running top to bottom.
    Vertical,
    /// A line of constant y, running left to right.
    Horizontal,
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    #[must_use]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether `pt` lies inside the rectangle, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.right() && pt.y >= self.y && pt.y <= self.bottom()
    }

    /// Open-interval overlap of the two vertical spans.
    #[must_use]
    pub fn overlaps_vertically(&self, other: &Rect) -> bool {
        self.bottom() > other.y && self.y < other.bottom()
    }

    /// Open-interval overlap of the two horizontal spans.
    #[must_use]
    pub fn overlaps_horizontally(&self, other: &Rect) -> bool {
        self.right() > other.x && self.x < other.right()
    }
}

/// Absolute nail position measured from the wall's left and top edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NailPosition {
    pub from_left: f64,
    pub from_top: f64,
}

/// Distances from a nail to all four wall edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NailDistances {
    pub from_left: f64,
    pub from_right: f64,
    pub from_top: f64,
    pub from_bottom: f64,
}

/// Position of `nail` on the wall, given the object that carries it.
#[must_use]
pub fn nail_absolute_position(object: &WallObject, nail: &Nail) -> NailPosition {
    NailPosition { from_left: object.x + nail.offset_x, from_top: object.y + nail.offset_y }
}

/// Distances from `nail` to each wall edge. Not clamped; may go negative for
/// an object hanging off the wall.
#[must_use]
pub fn nail_distances(object: &WallObject, nail: &Nail, wall: &Wall) -> NailDistances {
    let abs = nail_absolute_position(object, nail);
    NailDistances {
        from_left: abs.from_left,
        from_right: wall.width - abs.from_left,
        from_top: abs.from_top,
        from_bottom: wall.height - abs.from_top,
    }
}

/// Center of an object in wall space.
#[must_use]
pub fn object_center(object: &WallObject) -> Point {
    object.rect().center()
}

/// Whether the rectangle `[x, x+width] × [y, y+height]` lies entirely on the wall.
#[must_use]
pub fn is_within_wall(x: f64, y: f64, width: f64, height: f64, wall: &Wall) -> bool {
    x >= 0.0 && y >= 0.0 && x + width <= wall.width && y + height <= wall.height
}

/// Clamp a top-left position so the rectangle stays on the wall.
///
/// Each axis is clamped independently to `[0, wall - size]`. An object larger
/// than the wall ends up at 0 on that axis.
#[must_use]
pub fn constrain_to_wall(x: f64, y: f64, width: f64, height: f64, wall: &Wall) -> Point {
    Point::new(
        clamp_low_wins(0.0, wall.width - width, x),
        clamp_low_wins(0.0, wall.height - height, y),
    )
}

/// `max(lo, min(hi, value))`.
///
/// Unlike [`f64::clamp`] this never panics when `lo > hi`; the lower bound
/// wins in that case.
#[must_use]
pub(crate) fn clamp_low_wins(lo: f64, hi: f64, value: f64) -> f64 {
    lo.max(hi.min(value))
}
