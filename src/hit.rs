#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{NailId, ObjectId, WallObject};
use crate::geometry::{Point, nail_absolute_position};
use crate::transform::CanvasTransform;

/// Which part of an object was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    Body,
    Nail(NailId),
}

/// Result of a hit test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub object_id: ObjectId,
    pub part: HitPart,
}

/// Nail hit radius in cm: half a touch target, converted through the current scale.
#[must_use]
pub fn nail_tolerance(transform: &CanvasTransform, min_touch_target_px: f64) -> f64 {
    transform.len_to_real(min_touch_target_px / 2.0)
}

/// Find what lies under `world_pt` (wall-space cm).
///
/// Nails on the selected object win first. After that objects are checked
/// top-most (last in the list) first, each one's nails before its body.
#[must_use]
pub fn hit_test(
    world_pt: Point,
    objects: &[WallObject],
    selected_id: Option<ObjectId>,
    nail_tolerance: f64,
) -> Option<Hit> {
    let selected = selected_id.and_then(|id| objects.iter().find(|o| o.id == id));
    if let Some(hit) = selected.and_then(|obj| hit_nail(world_pt, obj, nail_tolerance)) {
        return Some(hit);
    }

    objects.iter().rev().find_map(|obj| {
        hit_nail(world_pt, obj, nail_tolerance).or_else(|| {
            obj.rect()
                .contains(world_pt)
                .then_some(Hit { object_id: obj.id, part: HitPart::Body })
        })
    })
}

fn hit_nail(world_pt: Point, object: &WallObject, tolerance: f64) -> Option<Hit> {
    object
        .nails
        .iter()
        .find(|nail| {
            let abs = nail_absolute_position(object, nail);
            let dx = world_pt.x - abs.from_left;
            let dy = world_pt.y - abs.from_top;
            dx * dx + dy * dy <= tolerance * tolerance
        })
        .map(|nail| Hit { object_id: object.id, part: HitPart::Nail(nail.id) })
}
