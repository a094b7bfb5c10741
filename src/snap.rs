//! Drag snapping: pull a dragged object into alignment with the wall and its
//! siblings, and report the guide lines that explain each adjustment.
//!
//! Rules are evaluated in a fixed order against the *proposed* position:
//!
//! 1. wall center (x, then y)
//! 2. wall edges (left, right, top, bottom)
//! 3. for each sibling, in order: centers (x, y), matching edges
//!    (left, right, top, bottom), then touching edges (gap of zero)
//!
//! Every rule that matches appends a guide. A matching rule overwrites the
//! snapped coordinate on its axis unconditionally, so when several rules match
//! on one axis the last one evaluated decides the final value while all of
//! their guides stay in the list.
//!
//! The engine is pure and linear in the number of siblings; it is meant to run
//! on every pointer move.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use std::fmt;

use crate::consts::SNAP_THRESHOLD_CM;
use crate::doc::{ObjectId, Wall, WallObject};
use crate::geometry::{Orientation, Point, Rect, Size};

/// Why a guide was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuideLabel {
    /// Aligned with the wall's center line.
    Center,
    /// Touching a wall edge.
    Edge,
    /// Center or edge aligned with a sibling.
    Align,
    /// Edge-to-edge with a sibling, no gap.
    Gap,
}

impl GuideLabel {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "Center",
            Self::Edge => "Edge",
            Self::Align => "Align",
            Self::Gap => "Gap",
        }
    }
}

impl fmt::Display for GuideLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transient alignment line to draw while dragging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapGuide {
    pub orientation: Orientation,
    /// Wall-space cm: x for vertical guides, y for horizontal ones.
    pub position: f64,
    pub label: GuideLabel,
    /// Set to zero for gap guides.
    pub distance: Option<f64>,
}

/// Snapped top-left position plus the guides that justify it.
#[derive(Debug, Clone, PartialEq)]
pub struct SnapResult {
    pub position: Point,
    pub guides: Vec<SnapGuide>,
}

/// Snap with the default 5 cm threshold.
#[must_use]
pub fn compute_snap<'a>(
    position: Point,
    size: Size,
    wall: &Wall,
    siblings: impl IntoIterator<Item = &'a WallObject>,
) -> SnapResult {
    snap_within(position, size, wall, siblings, SNAP_THRESHOLD_CM)
}

/// Snap `position` for an object of `size`, matching anything closer than `threshold`.
#[must_use]
pub fn snap_within<'a>(
    position: Point,
    size: Size,
    wall: &Wall,
    siblings: impl IntoIterator<Item = &'a WallObject>,
    threshold: f64,
) -> SnapResult {
    let dragged = Rect::from_origin_size(position, size);
    let mut acc = Accumulator::new(dragged, threshold);

    acc.snap_to_wall(wall);
    for other in siblings {
        acc.snap_to_sibling(&other.rect());
    }

    acc.finish()
}

/// The wall and sibling set for one drag gesture.
///
/// Build it once at drag start and call [`SnapContext::snap`] per move.
#[derive(Debug, Clone)]
pub struct SnapContext<'a> {
    wall: Wall,
    others: Vec<&'a WallObject>,
    threshold: f64,
}

impl<'a> SnapContext<'a> {
    /// Snap against every object in `objects` except `dragging`.
    #[must_use]
    pub fn new(wall: Wall, objects: &'a [WallObject], dragging: Option<ObjectId>) -> Self {
        let others = objects.iter().filter(|o| Some(o.id) != dragging).collect();
        Self { wall, others, threshold: SNAP_THRESHOLD_CM }
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Wall-space center of the wall.
    #[must_use]
    pub fn wall_center(&self) -> Point {
        self.wall.center()
    }

    /// The objects this context snaps against.
    #[must_use]
    pub fn others(&self) -> &[&'a WallObject] {
        &self.others
    }

    #[must_use]
    pub fn snap(&self, x: f64, y: f64, width: f64, height: f64) -> SnapResult {
        snap_within(
            Point::new(x, y),
            Size::new(width, height),
            &self.wall,
            self.others.iter().copied(),
            self.threshold,
        )
    }
}

/// Running state of one snap evaluation.
struct Accumulator {
    dragged: Rect,
    threshold: f64,
    x: f64,
    y: f64,
    guides: Vec<SnapGuide>,
}

impl Accumulator {
    fn new(dragged: Rect, threshold: f64) -> Self {
        Self { dragged, threshold, x: dragged.x, y: dragged.y, guides: Vec::new() }
    }

    fn near(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.threshold
    }

    fn set_x(&mut self, x: f64, line: f64, label: GuideLabel) {
        self.x = x;
        self.push(Orientation::Vertical, line, label);
    }

    fn set_y(&mut self, y: f64, line: f64, label: GuideLabel) {
        self.y = y;
        self.push(Orientation::Horizontal, line, label);
    }

    fn push(&mut self, orientation: Orientation, position: f64, label: GuideLabel) {
        let distance = (label == GuideLabel::Gap).then_some(0.0);
        self.guides.push(SnapGuide { orientation, position, label, distance });
    }

    fn snap_to_wall(&mut self, wall: &Wall) {
        let d = self.dragged;
        let center = d.center();
        let wall_center = wall.center();

        if self.near(center.x, wall_center.x) {
            self.set_x(wall_center.x - d.width / 2.0, wall_center.x, GuideLabel::Center);
        }
        if self.near(center.y, wall_center.y) {
            self.set_y(wall_center.y - d.height / 2.0, wall_center.y, GuideLabel::Center);
        }

        if self.near(d.x, 0.0) {
            self.set_x(0.0, 0.0, GuideLabel::Edge);
        }
        if self.near(d.right(), wall.width) {
            self.set_x(wall.width - d.width, wall.width, GuideLabel::Edge);
        }
        if self.near(d.y, 0.0) {
            self.set_y(0.0, 0.0, GuideLabel::Edge);
        }
        if self.near(d.bottom(), wall.height) {
            self.set_y(wall.height - d.height, wall.height, GuideLabel::Edge);
        }
    }

    fn snap_to_sibling(&mut self, other: &Rect) {
        let d = self.dragged;
        let center = d.center();
        let other_center = other.center();

        // Centers.
        if self.near(center.x, other_center.x) {
            self.set_x(other_center.x - d.width / 2.0, other_center.x, GuideLabel::Align);
        }
        if self.near(center.y, other_center.y) {
            self.set_y(other_center.y - d.height / 2.0, other_center.y, GuideLabel::Align);
        }

        // Matching edges.
        if self.near(d.x, other.x) {
            self.set_x(other.x, other.x, GuideLabel::Align);
        }
        if self.near(d.right(), other.right()) {
            self.set_x(other.right() - d.width, other.right(), GuideLabel::Align);
        }
        if self.near(d.y, other.y) {
            self.set_y(other.y, other.y, GuideLabel::Align);
        }
        if self.near(d.bottom(), other.bottom()) {
            self.set_y(other.bottom() - d.height, other.bottom(), GuideLabel::Align);
        }

        // Touching edges.
        if self.near(d.x, other.right()) {
            self.set_x(other.right(), other.right(), GuideLabel::Gap);
        }
        if self.near(d.right(), other.x) {
            self.set_x(other.x - d.width, other.x, GuideLabel::Gap);
        }
        if self.near(d.y, other.bottom()) {
            self.set_y(other.bottom(), other.bottom(), GuideLabel::Gap);
        }
        if self.near(d.bottom(), other.y) {
            self.set_y(other.y - d.height, other.y, GuideLabel::Gap);
        }
    }

    fn finish(self) -> SnapResult {
        SnapResult { position: Point::new(self.x, self.y), guides: self.guides }
    }
}
