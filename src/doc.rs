//! Document model: the wall, the objects hung on it, and their nails.
//!
//! These are the persisted types. All lengths are centimeters. Field names on
//! the wire follow the browser app's stored record (`offsetX`, `offsetY`), so a
//! snapshot written by the host round-trips unchanged.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{DEFAULT_WALL_HEIGHT_CM, DEFAULT_WALL_WIDTH_CM};
use crate::geometry::{Point, Rect, Size};

/// Unique identifier for a wall object.
pub type ObjectId = Uuid;

/// Unique identifier for a nail.
pub type NailId = Uuid;

/// Errors raised by document and store transitions.
#[derive(Debug, thiserror::Error)]
pub enum DocError {
    /// Wall dimensions must be finite and strictly positive.
    #[error("invalid wall dimensions: {width} x {height}")]
    InvalidWall { width: f64, height: f64 },
    /// Object dimensions must be finite and strictly positive.
    #[error("invalid object size: {width} x {height}")]
    InvalidSize { width: f64, height: f64 },
    #[error("object not found: {0}")]
    ObjectNotFound(ObjectId),
    #[error("nail {nail_id} not found on object {object_id}")]
    NailNotFound { object_id: ObjectId, nail_id: NailId },
    /// No object owns a nail with this id.
    #[error("nail not found: {0}")]
    UnknownNail(NailId),
    /// A drag transition was called with no drag in progress.
    #[error("no drag in progress")]
    NoActiveDrag,
}

/// The rectangular hanging surface. Origin is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub width: f64,
    pub height: f64,
}

impl Wall {
    /// Build a wall, rejecting non-finite or non-positive dimensions.
    ///
    /// # Errors
    ///
    /// Returns [`DocError::InvalidWall`] when either side is not a finite
    /// number greater than zero.
    pub fn new(width: f64, height: f64) -> Result<Self, DocError> {
        if is_positive_length(width) && is_positive_length(height) {
            Ok(Self { width, height })
        } else {
            Err(DocError::InvalidWall { width, height })
        }
    }

    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether both dimensions are finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_positive_length(self.width) && is_positive_length(self.height)
    }
}

impl Default for Wall {
    fn default() -> Self {
        Self { width: DEFAULT_WALL_WIDTH_CM, height: DEFAULT_WALL_HEIGHT_CM }
    }
}

/// An attachment point on an object, relative to the object's top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nail {
    pub id: NailId,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Nail {
    /// Create a nail with a fresh id.
    #[must_use]
    pub fn new(offset_x: f64, offset_y: f64) -> Self {
        Self { id: Uuid::new_v4(), offset_x, offset_y }
    }
}

/// A rectangular item positioned on the wall, e.g. a picture frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallObject {
    pub id: ObjectId,
    pub name: String,
    pub width: f64,
    pub height: f64,
    /// Left edge, measured from the wall's left edge.
    pub x: f64,
    /// Top edge, measured from the wall's top edge.
    pub y: f64,
    pub nails: Vec<Nail>,
}

impl WallObject {
    /// Bounding rectangle in wall space.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn nail(&self, id: &NailId) -> Option<&Nail> {
        self.nails.iter().find(|n| n.id == *id)
    }

    pub(crate) fn nail_mut(&mut self, id: &NailId) -> Option<&mut Nail> {
        self.nails.iter_mut().find(|n| n.id == *id)
    }
}

/// Sparse update for a wall object. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectPatch {
    pub name: Option<String>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub x: Option<f64>,
    pub y: Option<f64>,
}

/// Sparse update for a nail. Only present fields are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NailPatch {
    pub offset_x: Option<f64>,
    pub offset_y: Option<f64>,
}

pub(crate) fn is_positive_length(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
