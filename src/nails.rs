//! Nail placement: automatic distribution and clamping to object bounds.

#[cfg(test)]
#[path = "nails_test.rs"]
mod nails_test;

use crate::consts::{NAIL_MARGIN_PERCENT, NAIL_TOP_OFFSET_PERCENT};
use crate::doc::Nail;
use crate::geometry::clamp_low_wins;

/// A nail offset relative to its object's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NailOffset {
    pub offset_x: f64,
    pub offset_y: f64,
}

/// Lay out `count` nails on an object of the given size.
///
/// One nail sits centered horizontally; two or more are spread evenly between
/// 15% margins. Every nail sits 10% of the height below the top edge and gets
/// a fresh id.
#[must_use]
pub fn distribute_nails(object_width: f64, object_height: f64, count: usize) -> Vec<Nail> {
    let top_offset = object_height * NAIL_TOP_OFFSET_PERCENT;

    match count {
        0 => Vec::new(),
        1 => vec![Nail::new(object_width / 2.0, top_offset)],
        _ => {
            let margin = object_width * NAIL_MARGIN_PERCENT;
            let usable = object_width - 2.0 * margin;
            #[allow(clippy::cast_precision_loss)]
            let spacing = usable / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let offset_x = margin + i as f64 * spacing;
                    Nail::new(offset_x, top_offset)
                })
                .collect()
        }
    }
}

/// Clamp a nail offset into `[radius, size - radius]` on each axis.
///
/// Evaluated as `max(radius, min(size - radius, offset))`, so a radius larger
/// than half the object pins the nail at `radius`.
#[must_use]
pub fn constrain_nail_position(
    offset_x: f64,
    offset_y: f64,
    object_width: f64,
    object_height: f64,
    nail_radius: f64,
) -> NailOffset {
    NailOffset {
        offset_x: clamp_low_wins(nail_radius, object_width - nail_radius, offset_x),
        offset_y: clamp_low_wins(nail_radius, object_height - nail_radius, offset_y),
    }
}
