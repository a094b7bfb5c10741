//! Editor configuration with environment overrides.
//!
//! Every field has a default from [`crate::consts`]. `from_env` reads
//! `WALLPLAN_*` variables; a missing or unparsable value keeps the default.
//!
//! | Variable | Field |
//! |----------|-------|
//! | `WALLPLAN_SNAP_THRESHOLD_CM` | `snap_threshold` |
//! | `WALLPLAN_CANVAS_PADDING_PX` | `canvas_padding` |
//! | `WALLPLAN_GRID_STEP_CM` | `grid_step` |
//! | `WALLPLAN_WALL_WIDTH_CM` / `WALLPLAN_WALL_HEIGHT_CM` | `default_wall` |
//! | `WALLPLAN_OBJECT_WIDTH_CM` / `WALLPLAN_OBJECT_HEIGHT_CM` | `default_object_size` |
//! | `WALLPLAN_NAIL_COUNT` | `default_nail_count` |
//! | `WALLPLAN_NAIL_RADIUS_CM` | `nail_radius` |
//! | `WALLPLAN_MIN_TOUCH_TARGET_PX` | `min_touch_target` |
//! | `WALLPLAN_LOG` | `log_level` |

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use tracing::Level;

use crate::consts::{
    CANVAS_PADDING_PX, DEFAULT_NAIL_COUNT, DEFAULT_OBJECT_HEIGHT_CM, DEFAULT_OBJECT_WIDTH_CM, GRID_STEP_CM,
    MIN_TOUCH_TARGET_PX, SNAP_THRESHOLD_CM,
};
use crate::doc::{Wall, is_positive_length};
use crate::geometry::Size;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Snap distance in cm.
    pub snap_threshold: f64,
    /// Viewport padding in px around the wall.
    pub canvas_padding: f64,
    /// Grid spacing in cm.
    pub grid_step: f64,
    /// Wall used on first start and after reset.
    pub default_wall: Wall,
    /// Size of a newly added object.
    pub default_object_size: Size,
    /// Nails placed on a newly added object.
    pub default_nail_count: usize,
    /// Inset applied when constraining nails to their object.
    pub nail_radius: f64,
    /// Minimum touch target side in px, used for nail hit-testing.
    pub min_touch_target: f64,
    pub log_level: Level,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_threshold: SNAP_THRESHOLD_CM,
            canvas_padding: CANVAS_PADDING_PX,
            grid_step: GRID_STEP_CM,
            default_wall: Wall::default(),
            default_object_size: Size::new(DEFAULT_OBJECT_WIDTH_CM, DEFAULT_OBJECT_HEIGHT_CM),
            default_nail_count: DEFAULT_NAIL_COUNT,
            nail_radius: 0.0,
            min_touch_target: MIN_TOUCH_TARGET_PX,
            log_level: Level::INFO,
        }
    }
}

impl EditorConfig {
    /// Build config from `WALLPLAN_*` environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Build config from an arbitrary key lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let get = |key: &str, default: f64| positive_or(parse_or(lookup(key), default), default);

        let wall_width = get("WALLPLAN_WALL_WIDTH_CM", defaults.default_wall.width);
        let wall_height = get("WALLPLAN_WALL_HEIGHT_CM", defaults.default_wall.height);
        let object_width = get("WALLPLAN_OBJECT_WIDTH_CM", defaults.default_object_size.width);
        let object_height = get("WALLPLAN_OBJECT_HEIGHT_CM", defaults.default_object_size.height);

        Self {
            snap_threshold: get("WALLPLAN_SNAP_THRESHOLD_CM", defaults.snap_threshold),
            canvas_padding: non_negative_or(
                parse_or(lookup("WALLPLAN_CANVAS_PADDING_PX"), defaults.canvas_padding),
                defaults.canvas_padding,
            ),
            grid_step: get("WALLPLAN_GRID_STEP_CM", defaults.grid_step),
            default_wall: Wall { width: wall_width, height: wall_height },
            default_object_size: Size::new(object_width, object_height),
            default_nail_count: parse_or(lookup("WALLPLAN_NAIL_COUNT"), defaults.default_nail_count),
            nail_radius: non_negative_or(
                parse_or(lookup("WALLPLAN_NAIL_RADIUS_CM"), defaults.nail_radius),
                defaults.nail_radius,
            ),
            min_touch_target: get("WALLPLAN_MIN_TOUCH_TARGET_PX", defaults.min_touch_target),
            log_level: parse_or(lookup("WALLPLAN_LOG"), defaults.log_level),
        }
    }
}

fn parse_or<T: FromStr>(raw: Option<String>, default: T) -> T {
    match raw.map(|v| v.trim().parse::<T>()) {
        Some(Ok(value)) => value,
        _ => default,
    }
}

fn positive_or(value: f64, default: f64) -> f64 {
    if is_positive_length(value) { value } else { default }
}

fn non_negative_or(value: f64, default: f64) -> f64 {
    if value.is_finite() && value >= 0.0 { value } else { default }
}
